use thiserror::Error;

/// Failures raised while wiring interactions into the page.
///
/// None of these are fatal: callers log them and leave the page as it is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InteractionError {
    /// A required element is not present in the document.
    #[error("element not found: {0}")]
    MissingElement(String),

    /// A selector string was rejected by the DOM.
    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector {
        /// The selector that failed to parse.
        selector: String,
        /// Message reported by the browser.
        reason: String,
    },

    /// Any other DOM call that threw.
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// The external charting library is missing or refused the config.
    #[error("chart library unavailable: {0}")]
    ChartUnavailable(String),

    /// Configuration could not be parsed or failed validation.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl InteractionError {
    /// Whether the error only means "nothing to do here".
    #[must_use]
    pub const fn is_benign(&self) -> bool {
        matches!(self, Self::MissingElement(_) | Self::InvalidSelector { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = InteractionError::InvalidSelector {
            selector: "#".to_string(),
            reason: "not a valid selector".to_string(),
        };
        assert_eq!(err.to_string(), "invalid selector `#`: not a valid selector");

        let err = InteractionError::MissingElement("#studentChart".to_string());
        assert_eq!(err.to_string(), "element not found: #studentChart");
    }

    #[test]
    fn missing_targets_are_benign() {
        assert!(InteractionError::MissingElement("x".into()).is_benign());
        assert!(
            InteractionError::InvalidSelector {
                selector: "#".into(),
                reason: String::new(),
            }
            .is_benign()
        );
        assert!(!InteractionError::Dom("boom".into()).is_benign());
        assert!(!InteractionError::ChartUnavailable("Chart is not defined".into()).is_benign());
    }
}
