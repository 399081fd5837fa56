use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProgramError {
    #[error("Invalid lottery code format: {code:?}")]
    InvalidCodeFormat { code: String },

    #[error("No program entry found for lottery code")]
    CodeNotFound,

    #[error("Duplicate slot id '{slot_id}' in series {series} ({year})")]
    DuplicateSlotId {
        series: String,
        year: i32,
        slot_id: String,
    },

    #[error("Build failed for {subject}: {reason}")]
    BuildFailure { subject: String, reason: String },

    #[error("Invalid schedule choice for performer '{performer_id}': {reason}")]
    InvalidChoice { performer_id: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lookup,
    DataIntegrity,
    Build,
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ProgramError {
    pub fn build_failure(subject: impl Into<String>, reason: impl Into<String>) -> Self {
        ProgramError::BuildFailure {
            subject: subject.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_choice(performer_id: impl Into<String>, reason: impl Into<String>) -> Self {
        ProgramError::InvalidChoice {
            performer_id: performer_id.into(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ProgramError::InvalidCodeFormat { .. } | ProgramError::CodeNotFound => {
                ErrorCategory::Lookup
            }
            ProgramError::DuplicateSlotId { .. } => ErrorCategory::DataIntegrity,
            ProgramError::BuildFailure { .. } => ErrorCategory::Build,
            ProgramError::InvalidChoice { .. } => ErrorCategory::Input,
            ProgramError::ConfigError { .. }
            | ProgramError::ConfigValidationError { .. }
            | ProgramError::InvalidConfigValueError { .. }
            | ProgramError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ProgramError::IoError(_)
            | ProgramError::SerializationError(_)
            | ProgramError::CsvError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Lookup | ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Build | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::DataIntegrity | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Whether re-running the same operation could succeed without anyone
    /// changing the input data first.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ProgramError::IoError(_))
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ProgramError::InvalidCodeFormat { .. } | ProgramError::CodeNotFound => {
                "Check the code printed on your confirmation and try again"
            }
            ProgramError::DuplicateSlotId { .. } => {
                "Fix the slot source so every slot id is unique within its series and year"
            }
            ProgramError::BuildFailure { .. } => {
                "Re-fetch the collaborator data for the named performance and rerun the build"
            }
            ProgramError::InvalidChoice { .. } => {
                "Resubmit the choices with unique ranks and no rank on unavailable slots"
            }
            ProgramError::ConfigError { .. }
            | ProgramError::ConfigValidationError { .. }
            | ProgramError::InvalidConfigValueError { .. }
            | ProgramError::MissingConfigError { .. } => {
                "Review the configuration file against the documented fields"
            }
            ProgramError::IoError(_) => "Check that the file exists and is readable",
            ProgramError::SerializationError(_) => "Check that the snapshot is valid JSON",
            ProgramError::CsvError(_) => "Check the output path and retry",
        }
    }

    /// Message safe to show to end users. Lookup failures never reveal why
    /// a code was rejected.
    pub fn user_friendly_message(&self) -> String {
        match self {
            ProgramError::InvalidCodeFormat { .. } | ProgramError::CodeNotFound => {
                "Code not found".to_string()
            }
            ProgramError::DuplicateSlotId { series, year, .. } => {
                format!("The concert schedule for {} {} is misconfigured", series, year)
            }
            ProgramError::BuildFailure { .. } => {
                "The program could not be built; no partial program was produced".to_string()
            }
            ProgramError::InvalidChoice { reason, .. } => {
                format!("Your schedule choices could not be saved: {}", reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProgramError>;
