use std::error;
use std::fmt;

/// All possible payload build errors
#[derive(Clone, Debug)]
pub enum Error {
    MissingField(String),
    DecodeError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::MissingField(ref field) => write!(f, "Missing required field: {}", field),
            Error::DecodeError(ref msg) => write!(f, "DecodeError: {}", msg),
        }
    }
}

impl error::Error for Error {}

impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Self::DecodeError(err.to_string())
    }
}
