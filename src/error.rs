use std::error;
use std::fmt;
use std::result;

/// The recoverable failures of tree mutations. A failed operation never changes the tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The key passed to `insert` is already present.
    DuplicateKey,
    /// The key passed to `delete` is absent.
    NotFound,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::DuplicateKey => write!(f, "key already exists"),
            Error::NotFound => write!(f, "key not found"),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_display() {
        assert_eq!(Error::DuplicateKey.to_string(), "key already exists");
        assert_eq!(Error::NotFound.to_string(), "key not found");
    }
}
