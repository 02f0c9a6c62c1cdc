use core::fmt;

/// There are but two failures 🤪.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// A bit, nibble or unit index beyond the configured width.
    IndexOutOfRange { index: usize, bound: usize },
    /// Division (or remainder) by a zero divisor.
    DivisionByZero,
}

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IndexOutOfRange { index, bound } => {
                write!(f, "index {} out of range (must be < {})", index, bound)
            }
            Error::DivisionByZero => f.write_str("division by zero"),
        }
    }
}

#[cfg(test)]
impl std::error::Error for Error {}
