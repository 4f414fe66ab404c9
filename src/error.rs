use std::fmt;
use std::path::PathBuf;

/// Crate-wide error type. Everything surfaces to the caller of the
/// document driver; nothing is swallowed inside the engine.
#[derive(Debug)]
pub enum Error {
    /// Non-positive box start or label count.
    InvalidArgument(String),
    /// The resolved output path is already present; refusing to overwrite.
    AlreadyExists(PathBuf),
    /// The probe window ran out of unused box numbers.
    AllocationExhausted { start: u32, probes: u32 },
    /// The target string could not be encoded as a QR symbol.
    Qr(String),
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "{msg}"),
            Error::AlreadyExists(path) => {
                write!(f, "file already exists: {}", path.display())
            }
            Error::AllocationExhausted { start, probes } => write!(
                f,
                "no unused box number within {probes} probes starting at {start}"
            ),
            Error::Qr(msg) => write!(f, "QR encoding failed: {msg}"),
            Error::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}
