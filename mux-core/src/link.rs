// USB host presence from the start-of-frame counter
//
// A USB host sends a SOF packet every 1ms to every enumerated full-speed
// device. The USB-Serial-JTAG block latches the 11-bit frame number, so
// "the counter moved since last sample" means a host is attached.
// Sampled from the 10ms tick: one changed sample connects, STALE_SAMPLES
// unchanged samples in a row disconnect (suspend, cable pulled).

/// Frame numbers are 11 bits wide and wrap.
pub const FRAME_MASK: u16 = 0x07FF;

/// Unchanged samples before the link is declared down.
pub const STALE_SAMPLES: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkEvent {
    Connected,
    Disconnected,
}

#[derive(Debug)]
pub struct LinkMonitor {
    last: Option<u16>,
    stale: u8,
    connected: bool,
}

impl LinkMonitor {
    pub const fn new() -> Self {
        Self {
            last: None,
            stale: 0,
            connected: false,
        }
    }

    /// Feed the current frame counter; returns an event on state change.
    pub fn sample(&mut self, frame: u16) -> Option<LinkEvent> {
        let frame = frame & FRAME_MASK;
        let moved = self.last.is_some_and(|last| last != frame);
        self.last = Some(frame);

        if moved {
            self.stale = 0;
            if !self.connected {
                self.connected = true;
                return Some(LinkEvent::Connected);
            }
            return None;
        }

        self.stale = self.stale.saturating_add(1);
        if self.connected && self.stale >= STALE_SAMPLES {
            self.connected = false;
            return Some(LinkEvent::Disconnected);
        }
        None
    }

    #[inline]
    pub fn is_connected(&self) -> bool {
        self.connected
    }
}

impl Default for LinkMonitor {
    fn default() -> Self {
        Self::new()
    }
}
