use thiserror::Error;

/// Result type alias using StructDiffError
pub type Result<T> = std::result::Result<T, StructDiffError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// The comparison and rendering engines never fail; every kind here belongs
/// to an edge of the system (loading documents, reading configuration,
/// emitting reports). Each kind maps to a stable error code that can be used
/// for programmatic error handling and testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input
    /// Document bytes are not valid UTF-8 or not valid JSON
    InvalidDocument,
    /// Configuration text could not be parsed into options
    InvalidConfig,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidDocument => "ERR_INVALID_DOCUMENT",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus optional context
/// (operation, file path, cause) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add file path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the file path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Typed failures raised at the edges of structdiff
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StructDiffError {
    /// Document bytes are not UTF-8
    #[error("Document is not valid UTF-8: {reason}")]
    InvalidUtf8 { reason: String },

    /// Document text is not JSON
    #[error("Document is not valid JSON: {reason}")]
    InvalidJson { reason: String },

    /// A file could not be read
    #[error("Failed to read {path}: {reason}")]
    Io { path: String, reason: String },

    /// Configuration text does not match the options schema
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// A report could not be serialized
    #[error("Failed to serialize report: {reason}")]
    Serialization { reason: String },
}

impl StructDiffError {
    /// Classification of this error in the canonical taxonomy
    pub fn kind(&self) -> ExErrorKind {
        match self {
            StructDiffError::InvalidUtf8 { .. } | StructDiffError::InvalidJson { .. } => {
                ExErrorKind::InvalidDocument
            }
            StructDiffError::Io { .. } => ExErrorKind::Io,
            StructDiffError::InvalidConfig { .. } => ExErrorKind::InvalidConfig,
            StructDiffError::Serialization { .. } => ExErrorKind::Serialization,
        }
    }
}

impl From<StructDiffError> for ExError {
    fn from(err: StructDiffError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        match err {
            StructDiffError::Io { path, .. } => ExError::new(kind)
                .with_path(path)
                .with_message(message),
            StructDiffError::InvalidUtf8 { .. } | StructDiffError::InvalidJson { .. } => {
                ExError::new(kind)
                    .with_op(structdiff_core_types::schema::OP_PARSE_DOCUMENT)
                    .with_message(message)
            }
            StructDiffError::InvalidConfig { .. } => ExError::new(kind)
                .with_op(structdiff_core_types::schema::OP_LOAD_CONFIG)
                .with_message(message),
            StructDiffError::Serialization { .. } => ExError::new(kind).with_message(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_op_and_path() {
        let err = ExError::new(ExErrorKind::Io)
            .with_op("read")
            .with_path("a.json")
            .with_message("boom");
        assert_eq!(
            err.to_string(),
            "[ERR_IO] in operation 'read': boom (path: a.json)"
        );
    }

    #[test]
    fn test_display_without_context() {
        let err = ExError::new(ExErrorKind::Serialization);
        assert_eq!(err.to_string(), "[ERR_SERIALIZATION]");
    }

    #[test]
    fn test_source_chain_is_exposed() {
        use std::error::Error as _;

        let inner = ExError::new(ExErrorKind::InvalidDocument).with_message("bad");
        let outer = ExError::new(ExErrorKind::Io).with_source(inner);
        assert_eq!(
            outer.source_error().map(ExError::kind),
            Some(ExErrorKind::InvalidDocument)
        );
        assert!(outer.source().is_some());
    }
}
