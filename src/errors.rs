use color_eyre::Report;

/// CacheError: Enum to deal with error programm wide
#[derive(Debug)]
pub enum CacheError {
    /// Wrapper for io errors
    Io(std::io::Error),

    /// wrapper for bincode errors on the wire
    Wire(bincode::Error),

    /// wrapper for serde_json errors
    Serialize(serde_json::error::Error),

    /// Stored bytes were not valid utf-8 when a text decode was asked for
    Utf8(std::string::FromUtf8Error),

    /// Stored bytes did not parse as an integer
    ParseInt(std::num::ParseIntError),

    /// Stored bytes did not parse as a float
    ParseFloat(std::num::ParseFloatError),

    /// incr on a list key, rpush on a plain key, and the like
    WrongType(String),

    /// The external store could not be reached or dropped the connexion
    StoreUnavailable(String),

    /// The store answered with a reply that does not match the request
    UnexpectedReply(String),

    /// Errors from the color_eyre library
    EyreError(Report),
}

impl From<std::io::Error> for CacheError {
    fn from(err: std::io::Error) -> CacheError {
        CacheError::Io(err)
    }
}

impl From<bincode::Error> for CacheError {
    fn from(err: bincode::Error) -> CacheError {
        CacheError::Wire(err)
    }
}

impl From<serde_json::error::Error> for CacheError {
    fn from(err: serde_json::error::Error) -> CacheError {
        CacheError::Serialize(err)
    }
}

impl From<std::string::FromUtf8Error> for CacheError {
    fn from(err: std::string::FromUtf8Error) -> CacheError {
        CacheError::Utf8(err)
    }
}

impl From<std::num::ParseIntError> for CacheError {
    fn from(err: std::num::ParseIntError) -> CacheError {
        CacheError::ParseInt(err)
    }
}

impl From<std::num::ParseFloatError> for CacheError {
    fn from(err: std::num::ParseFloatError) -> CacheError {
        CacheError::ParseFloat(err)
    }
}

impl From<Report> for CacheError {
    fn from(err: Report) -> CacheError {
        CacheError::EyreError(err)
    }
}

/// Result<T>
pub type Result<T> = std::result::Result<T, CacheError>;
