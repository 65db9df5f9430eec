// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum VowelCountError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<VowelCountError>,
    },

    #[error(transparent)]
    Application(#[from] ApplicationError),

    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

pub type Result<T> = std::result::Result<T, VowelCountError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("No input line: standard input closed before a line was delivered")]
    MissingInput,
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read input line: {source}")]
    InputRead {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report: {source}")]
    OutputWrite {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {format} output: {details}")]
    Serialization { format: String, details: String },
}

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputWrite { source: err }
    }
}

impl From<std::io::Error> for VowelCountError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            return Self::OutputWrite { source: err.into() };
        }
        Self::Serialization {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for VowelCountError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl VowelCountError {
    /// True when the run failed only because no line arrived.
    pub fn is_missing_input(&self) -> bool {
        match self {
            Self::Application(ApplicationError::MissingInput) => true,
            Self::Context { source, .. } => source.is_missing_input(),
            _ => false,
        }
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<VowelCountError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| VowelCountError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| VowelCountError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
