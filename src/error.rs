use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort the whole run.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("could not create destination directory {}: {cause}", path.display())]
    CreateDest {
        path: PathBuf,
        #[source]
        cause: io::Error,
    },

    #[error("failed to walk {}: {cause}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        cause: walkdir::Error,
    },

    #[error("could not read metadata of {}: {cause}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        cause: io::Error,
    },
}

/// A single file that could not be copied. The run keeps going.
#[derive(Debug, Error)]
#[error("copy failed: {}: {cause}", source_path.display())]
pub struct CopyError {
    pub source_path: PathBuf,
    #[source]
    pub cause: io::Error,
}
