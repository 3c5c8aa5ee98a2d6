use std::error;
use std::fmt;
use std::io;
use std::num::ParseIntError;

#[derive(Debug)]
pub enum ProbeError {
    /// Text that should have been a number could not be parsed.
    Parse {
        input: String,
        source: ParseIntError,
    },
    /// A listening socket could not be bound.
    Bind { addr: String, source: io::Error },
    /// Reading an opened file failed, with the path it happened on.
    IO(io::Error, String),
    /// A kernel file was present but did not look like we expected.
    UnexpectedContent(String),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ProbeError::Parse {
                ref input,
                ref source,
            } => write!(f, "Could not parse '{}': {}", input, source),
            ProbeError::Bind {
                ref addr,
                ref source,
            } => write!(f, "Failed to listen on {}: {}", addr, source),
            ProbeError::IO(ref err, ref path) => write!(f, "Failed to read {}: {}", path, err),
            ProbeError::UnexpectedContent(ref err) => write!(f, "{}", err),
        }
    }
}

impl error::Error for ProbeError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            ProbeError::Parse { ref source, .. } => Some(source),
            ProbeError::Bind { ref source, .. } => Some(source),
            ProbeError::IO(ref err, _) => Some(err),
            ProbeError::UnexpectedContent(_) => None,
        }
    }
}
