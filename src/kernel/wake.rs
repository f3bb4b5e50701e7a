// Tick signaling between the timer ISR and the main loop
//
// The ISR sets an atomic flag; the main loop consumes it via try_wake()
// and sleeps in WFI otherwise. Several ticks may collapse into one wake
// if the loop was busy (blocking USB write); uptime still counts all of
// them. Critical section guards riscv32imc (no atomic RMW).

use core::sync::atomic::{AtomicBool, Ordering};

/// Timer period in milliseconds.
pub const TICK_MS: u32 = 10;

static WAKE_TIMER: AtomicBool = AtomicBool::new(false);

// cs: riscv32imc has no atomic add
static UPTIME_TICKS: critical_section::Mutex<core::cell::Cell<u32>> =
    critical_section::Mutex::new(core::cell::Cell::new(0));

#[inline]
pub fn signal_timer() {
    WAKE_TIMER.store(true, Ordering::Release);
    critical_section::with(|cs| {
        let ticks = UPTIME_TICKS.borrow(cs);
        ticks.set(ticks.get().wrapping_add(1));
    });
}

/// True once per batch of timer ticks since the last call.
pub fn try_wake() -> bool {
    critical_section::with(|_| {
        let woke = WAKE_TIMER.load(Ordering::Relaxed);
        if woke {
            WAKE_TIMER.store(false, Ordering::Relaxed);
        }
        woke
    })
}

pub fn uptime_ticks() -> u32 {
    critical_section::with(|cs| UPTIME_TICKS.borrow(cs).get())
}

pub fn uptime_ms() -> u32 {
    uptime_ticks().wrapping_mul(TICK_MS)
}

#[inline]
pub fn wait_for_interrupt() {
    #[cfg(target_arch = "riscv32")]
    unsafe {
        core::arch::asm!("wfi", options(nomem, nostack));
    }

    #[cfg(not(target_arch = "riscv32"))]
    core::hint::spin_loop();
}

/// Sleep until the next timer tick.
pub fn wait_tick() {
    while !try_wake() {
        wait_for_interrupt();
    }
}
