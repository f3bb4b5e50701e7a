use core::fmt;

/// Number typed at the prompt that is not a valid switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange(pub u32);

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "switch {} out of range", self.0)
    }
}

/// Failure while servicing console input.
///
/// `E` is the address bus error type; for on-chip GPIO it is `Infallible`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// Writing the select code to the address lines failed
    Bus(E),
    /// The console writer rejected output
    Console,
}

impl<E> From<fmt::Error> for Error<E> {
    fn from(_: fmt::Error) -> Self {
        Error::Console
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "address bus write failed: {:?}", e),
            Error::Console => write!(f, "console write failed"),
        }
    }
}
