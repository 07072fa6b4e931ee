use crate::config::NavbarConfig;

/// The two navbar backgrounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavbarBackground {
    #[default]
    Default,
    Scrolled,
}

impl NavbarBackground {
    /// Pick the background for a vertical scroll offset. Strictly greater than
    /// the threshold counts as scrolled.
    #[must_use]
    pub fn for_offset(scroll_y: f64, config: &NavbarConfig) -> Self {
        if scroll_y > config.scroll_threshold_px {
            Self::Scrolled
        } else {
            Self::Default
        }
    }

    #[must_use]
    pub fn color(self, config: &NavbarConfig) -> &str {
        match self {
            Self::Default => &config.default_background,
            Self::Scrolled => &config.scrolled_background,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.0, NavbarBackground::Default)]
    #[test_case(49.5, NavbarBackground::Default)]
    #[test_case(50.0, NavbarBackground::Default ; "at threshold")]
    #[test_case(50.5, NavbarBackground::Scrolled)]
    #[test_case(51.0, NavbarBackground::Scrolled ; "just past threshold")]
    #[test_case(4000.0, NavbarBackground::Scrolled)]
    fn threshold_boundary(offset: f64, expected: NavbarBackground) {
        let config = NavbarConfig::default();
        assert_eq!(NavbarBackground::for_offset(offset, &config), expected);
    }

    #[test]
    fn colors_come_from_config() {
        let config = NavbarConfig::default();
        assert_eq!(NavbarBackground::Default.color(&config), "#2c3e50");
        assert_eq!(
            NavbarBackground::Scrolled.color(&config),
            "rgba(44, 62, 80, 0.95)"
        );
    }
}
