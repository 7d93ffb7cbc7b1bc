use dsreview_core_types::RequestId;
use thiserror::Error;

/// Result type alias using ReviewError
pub type Result<T> = std::result::Result<T, ReviewError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code used by the HTTP surface, the CLI
/// and tests for programmatic error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    MissingField,
    NotFound,

    // Integration/IO
    Io,
    Serialization,
    Persistence,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// True for kinds caused by the caller's input rather than by the system
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ExErrorKind::InvalidInput | ExErrorKind::MissingField | ExErrorKind::NotFound
        )
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus optional context
/// (operation, entity, request) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
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
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain errors raised by the review core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReviewError {
    /// Question id does not resolve in the loaded dataset
    #[error("Question not found: {question_id}")]
    QuestionNotFound { question_id: String },

    /// Requested version is not part of the question's version chain
    #[error("Version {version_id} is not in the version chain of question {question_id}")]
    VersionNotInChain {
        question_id: String,
        version_id: String,
    },

    /// A required input field was absent or blank
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Pass/fail value outside PASS, FAIL, UNKNOWN
    #[error("Invalid pass/fail value: {value}")]
    InvalidPassFail { value: String },

    /// Unrecognised status filter name
    #[error("Invalid status filter: {value}")]
    InvalidStatusFilter { value: String },
}

impl From<ReviewError> for ExError {
    fn from(err: ReviewError) -> Self {
        let message = err.to_string();
        match err {
            ReviewError::QuestionNotFound { question_id } => {
                ExError::new(ExErrorKind::NotFound)
                    .with_entity_id(question_id)
                    .with_message(message)
            }
            ReviewError::VersionNotInChain { version_id, .. } => {
                ExError::new(ExErrorKind::NotFound)
                    .with_entity_id(version_id)
                    .with_message(message)
            }
            ReviewError::MissingField { .. } => {
                ExError::new(ExErrorKind::MissingField).with_message(message)
            }
            ReviewError::InvalidPassFail { .. } | ReviewError::InvalidStatusFilter { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }
        }
    }
}
