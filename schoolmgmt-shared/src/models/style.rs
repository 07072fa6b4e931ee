use std::borrow::Cow;
use std::fmt;

/// A single inline style property write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDeclaration {
    /// CSS property name in kebab case (`pointer-events`).
    pub property: &'static str,
    /// Property value without any priority suffix.
    pub value: Cow<'static, str>,
    /// Whether the write carries `!important`.
    pub important: bool,
}

impl StyleDeclaration {
    /// A declaration with normal priority.
    #[must_use]
    pub fn normal(property: &'static str, value: impl Into<Cow<'static, str>>) -> Self {
        Self {
            property,
            value: value.into(),
            important: false,
        }
    }

    /// An `!important` declaration usable in `const` tables.
    #[must_use]
    pub const fn important(property: &'static str, value: &'static str) -> Self {
        Self {
            property,
            value: Cow::Borrowed(value),
            important: true,
        }
    }

    /// Priority string as accepted by `CSSStyleDeclaration.setProperty`.
    #[must_use]
    pub const fn priority(&self) -> &'static str {
        if self.important { "important" } else { "" }
    }
}

impl fmt::Display for StyleDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.important {
            write!(f, "{}: {} !important", self.property, self.value)
        } else {
            write!(f, "{}: {}", self.property, self.value)
        }
    }
}
