use serde::{Deserialize, Serialize};

/// Page color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light scheme (initial).
    #[default]
    Light,
    /// Dark scheme.
    Dark,
}

impl ThemeMode {
    /// Returns the opposite scheme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Returns whether the dark scheme is active.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Label of the theme toggle button.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Toggle Dark Mode",
            Self::Dark => "Toggle Light Mode",
        }
    }

    /// Header text for the scheme.
    #[must_use]
    pub const fn header_text(self) -> &'static str {
        match self {
            Self::Light => "Welcome to my JavaScript Playground",
            Self::Dark => "Dark Mode Activated!",
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}
