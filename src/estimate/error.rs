use thiserror::Error;

/// Estimate failures. Both variants are caller input problems.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimateError {
    #[error("Invalid input: {field} {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Missing rate: {field} is required for an active cost category")]
    ConfigurationMissing { field: String },
}

impl EstimateError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        EstimateError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        EstimateError::ConfigurationMissing {
            field: field.into(),
        }
    }

    /// JSON path of the offending field
    pub fn field(&self) -> &str {
        match self {
            EstimateError::InvalidInput { field, .. } => field.as_str(),
            EstimateError::ConfigurationMissing { field } => field.as_str(),
        }
    }

    /// A missing rate is treated as invalid input, never defaulted to zero
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            EstimateError::InvalidInput { .. } | EstimateError::ConfigurationMissing { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, EstimateError>;
