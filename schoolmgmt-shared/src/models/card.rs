use crate::config::CardConfig;

use super::style::StyleDeclaration;

/// Attribute recording the reveal state on each card element.
pub const STATE_ATTRIBUTE: &str = "data-card-state";

/// Class carried by every animated card.
pub const CARD_SELECTOR: &str = ".feature-card";

/// Reveal state of a feature card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardVisual {
    #[default]
    Hidden,
    Visible,
}

impl CardVisual {
    /// Next state after an intersection callback. Once visible, a card stays
    /// visible.
    #[must_use]
    pub const fn on_intersection(self, is_intersecting: bool) -> Self {
        match (self, is_intersecting) {
            (Self::Hidden, true) | (Self::Visible, _) => Self::Visible,
            (Self::Hidden, false) => Self::Hidden,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Visible => "visible",
        }
    }

    /// Read the state back from [`STATE_ATTRIBUTE`]; anything unknown is hidden.
    #[must_use]
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("visible") => Self::Visible,
            _ => Self::Hidden,
        }
    }

    /// Inline styles for this state.
    #[must_use]
    pub fn declarations(self, config: &CardConfig) -> [StyleDeclaration; 2] {
        match self {
            Self::Hidden => [
                StyleDeclaration::normal("opacity", "0"),
                StyleDeclaration::normal(
                    "transform",
                    format!("translateY({}px)", config.offset_px),
                ),
            ],
            Self::Visible => [
                StyleDeclaration::normal("opacity", "1"),
                StyleDeclaration::normal("transform", "translateY(0)"),
            ],
        }
    }
}

/// Transition installed on every card before observation starts.
#[must_use]
pub fn transition(config: &CardConfig) -> StyleDeclaration {
    StyleDeclaration::normal(
        "transition",
        format!(
            "opacity {secs}s, transform {secs}s",
            secs = config.transition_secs
        ),
    )
}
