use std::error::Error;
use std::fmt;
use std::io;
use std::path::Path;

/// Boxed result used at command and server boundaries
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Result type for site loading operations
pub type SiteResult<T> = Result<T, SiteError>;

/// Error types for Folio operations
#[derive(Debug)]
pub enum SiteError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Front matter parsing error
    FrontMatter(String),
    /// Template loading error
    Template(String),
    /// File watching error
    Watch(String),
    /// Generic error message
    Generic(String),
}

impl SiteError {
    /// Attach the offending file to the error message
    pub fn in_file(self, path: &Path) -> Self {
        let prefix = path.display();
        match self {
            SiteError::Io(err) => SiteError::Io(io::Error::new(err.kind(), format!("{}: {}", prefix, err))),
            SiteError::Config(msg) => SiteError::Config(format!("{}: {}", prefix, msg)),
            SiteError::FrontMatter(msg) => SiteError::FrontMatter(format!("{}: {}", prefix, msg)),
            SiteError::Template(msg) => SiteError::Template(format!("{}: {}", prefix, msg)),
            SiteError::Watch(msg) => SiteError::Watch(format!("{}: {}", prefix, msg)),
            SiteError::Generic(msg) => SiteError::Generic(format!("{}: {}", prefix, msg)),
        }
    }
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteError::Io(err) => write!(f, "IO error: {}", err),
            SiteError::Config(msg) => write!(f, "Configuration error: {}", msg),
            SiteError::FrontMatter(msg) => write!(f, "Front matter error: {}", msg),
            SiteError::Template(msg) => write!(f, "Template error: {}", msg),
            SiteError::Watch(msg) => write!(f, "Watch error: {}", msg),
            SiteError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for SiteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SiteError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for SiteError {
    fn from(err: io::Error) -> Self {
        SiteError::Io(err)
    }
}

impl From<walkdir::Error> for SiteError {
    fn from(err: walkdir::Error) -> Self {
        SiteError::Io(err.into())
    }
}

impl From<notify::Error> for SiteError {
    fn from(err: notify::Error) -> Self {
        SiteError::Watch(err.to_string())
    }
}

impl From<String> for SiteError {
    fn from(msg: String) -> Self {
        SiteError::Generic(msg)
    }
}

impl From<&str> for SiteError {
    fn from(msg: &str) -> Self {
        SiteError::Generic(msg.to_string())
    }
}
