use std::path::PathBuf;

/// Failure while producing a single icon.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),

    #[error("cannot allocate a {size}x{size} canvas")]
    Canvas { size: u32 },

    #[error("icon geometry for size {size} produced no drawable path")]
    Path { size: u32 },

    #[error("{} is not a valid icon: {reason}", path.display())]
    Verify { path: PathBuf, reason: String },
}

impl IconError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}
