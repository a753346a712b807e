use crate::core::special_purpose::SpecialPurpose;
use std::net::Ipv4Addr;
use std::path::PathBuf;
use thiserror::Error;

/*-------------------------------------------------------------------------------------------------
  Errors and Results
-------------------------------------------------------------------------------------------------*/

/// Fatal errors; any of these ends the run before the remaining tokens are processed.
#[derive(Debug, Error)]
pub enum Error {
    /// The input file could not be opened or read.
    #[error("There was a problem opening the file `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The WAF IPSet could not be retrieved.
    #[error("Something went wrong while retrieving the WAF IPSet: {0}")]
    Remote(String),

    #[error("Unable to parse the WAF IPSet response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unable to write the CSV report: {0}")]
    Csv(#[from] csv::Error),
}

// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/*--------------------------------------------------------------------------------------
  Token Errors
--------------------------------------------------------------------------------------*/

/// Broad classes of per-token rejections.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// The token is not syntactically a valid network or address.
    Parse,

    /// The token is a valid network that is not globally routable.
    Routability,

    /// The token is a malformed or inverted address range.
    Range,
}

/// Per-token rejections. These are recovered: the token is reported and processing continues.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum TokenError {
    #[error("not a valid IPv4 network: {0}")]
    Parse(String),

    #[error("not a valid IPv6 network: {0}")]
    ParseIpv6(String),

    #[error("not a global IPv4 network ({0}); this network will be excluded")]
    NotGlobal(SpecialPurpose),

    #[error("range starting address is not a valid IPv4 address: {0}")]
    RangeStart(String),

    #[error("range ending address is not a valid IPv4 address: {0}")]
    RangeEnd(String),

    #[error("range start {start} is greater than range end {end}")]
    RangeOrder { start: Ipv4Addr, end: Ipv4Addr },
}

impl TokenError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TokenError::Parse(_) | TokenError::ParseIpv6(_) => ErrorKind::Parse,
            TokenError::NotGlobal(_) => ErrorKind::Routability,
            TokenError::RangeStart(_) | TokenError::RangeEnd(_) | TokenError::RangeOrder { .. } => {
                ErrorKind::Range
            }
        }
    }
}

/*--------------------------------------------------------------------------------------
  Log Error Function
--------------------------------------------------------------------------------------*/

#[cfg(test)]
pub(crate) fn log_error(error: &Error) {
    log::error!("{}", error);
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
