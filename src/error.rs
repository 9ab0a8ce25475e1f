use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from reading or writing the diary file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read diary file '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write diary file '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create diary directory '{}'", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An unreadable diary file could not be moved out of the way, so
    /// starting empty would overwrite it on the next save.
    #[error("failed to set aside unreadable diary file '{}'", path.display())]
    Quarantine {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode diary entries")]
    Encode(#[from] serde_json::Error),
}
