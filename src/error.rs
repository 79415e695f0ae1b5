use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NotInitialized,
    ConfigError,
    ValidationError,
    SinkError,
    DatabaseError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotInitialized => "NOT_INITIALIZED",
            Self::ConfigError => "CONFIG_ERROR",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::SinkError => "SINK_ERROR",
            Self::DatabaseError => "DATABASE_ERROR",
        }
    }
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct DescribeError {
    pub code: ErrorCode,
    pub message: String,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl DescribeError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        mut self,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn not_initialized(path: &str) -> Self {
        Self::new(
            ErrorCode::NotInitialized,
            format!("Property store not found at {path}. Run `describer init` first."),
        )
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    pub fn sink(sink: &str, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::SinkError,
            format!("Sink {sink}: {}", message.into()),
        )
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }
}

impl From<rusqlite::Error> for DescribeError {
    fn from(e: rusqlite::Error) -> Self {
        Self::database(e.to_string()).with_source(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn with_source_keeps_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::NotFound, "no such dir");
        let err = DescribeError::config("Cannot read config").with_source(cause);
        assert_eq!(err.code.as_str(), "CONFIG_ERROR");
        assert_eq!(err.to_string(), "Cannot read config");
        assert_eq!(err.source().unwrap().to_string(), "no such dir");
    }

    #[test]
    fn sink_error_names_the_sink() {
        let err = DescribeError::sink("json:props.json", "permission denied");
        assert_eq!(err.code, ErrorCode::SinkError);
        assert_eq!(err.message, "Sink json:props.json: permission denied");
    }
}
