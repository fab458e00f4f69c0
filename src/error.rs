// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SociogramError {
    #[error("could not open file {}: {source}", path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
}

pub type Result<T> = std::result::Result<T, SociogramError>;

impl SociogramError {
    /// Attaches the offending path to an I/O error.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        SociogramError::Io {
            source,
            path: path.into(),
        }
    }
}

// Allow `?` on std::io::Error by converting to SociogramError::Io with unknown path.
impl From<std::io::Error> for SociogramError {
    fn from(source: std::io::Error) -> Self {
        SociogramError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
