use thiserror::Error;

/// Errors surfaced by marketplace operations.
///
/// Every variant aborts only the operation that raised it; no state is
/// committed on any error path.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MarketError {
    #[error("Invalid {field}: {value:?}")]
    Format { field: &'static str, value: String },
    #[error("User not found. Please enter a valid username.")]
    UserNotFound(String),
    // Covers both a missing product and short stock.
    #[error("Product not available or insufficient quantity.")]
    ProductUnavailable(String),
    #[error("Input cancelled: {0}")]
    InputCancelled(&'static str),
    #[error("Marketplace service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl MarketError {
    pub fn format(field: &'static str, value: impl Into<String>) -> Self {
        MarketError::Format {
            field,
            value: value.into(),
        }
    }

    /// Whether the form should clear its output before showing this error.
    pub fn replaces_output(&self) -> bool {
        matches!(self, MarketError::UserNotFound(_) | MarketError::ProductUnavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_message_does_not_name_the_cause() {
        let err = MarketError::ProductUnavailable("Corn".to_string());
        assert_eq!(err.to_string(), "Product not available or insufficient quantity.");
    }

    #[test]
    fn format_error_names_field_and_value() {
        let err = MarketError::format("price", "abc");
        assert_eq!(err.to_string(), "Invalid price: \"abc\"");
        assert!(!err.replaces_output());
        assert!(MarketError::UserNotFound("ghost".into()).replaces_output());
    }
}
