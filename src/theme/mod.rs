//! Theme object: style tokens applied to the whole render tree.
//!
//! A [`Theme`] bundles colors, a spacing scale and typography. Themes come
//! from the built-in token sets ([`Theme::builtin`]) or from a YAML file
//! ([`Theme::from_file`]), and are turned into a stylesheet by [`css`].

pub mod css;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::ThemeConfig;

/// Theme used when configuration names none.
pub const DEFAULT_THEME: &str = "hpe";

/// Names of the built-in themes, in lookup order.
pub const BUILTIN_THEMES: [&str; 3] = ["hpe", "base", "dark"];

/// Errors raised while resolving or validating a theme.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// No built-in theme carries the requested name.
    #[error("Unknown theme: {0}")]
    Unknown(String),

    /// A color token is not a hex color.
    #[error("Invalid color for `{token}`: {value}")]
    InvalidColor { token: &'static str, value: String },

    /// The spacing scale is not strictly increasing.
    #[error("Invalid spacing scale: {0}")]
    InvalidSpacing(String),

    /// The theme has no name.
    #[error("Theme name cannot be empty")]
    EmptyName,

    /// The name is not made of ASCII letters, digits, `-` and `_`.
    #[error("Invalid theme name: {0}")]
    InvalidName(String),

    /// The font stack contains characters that would break the stylesheet.
    #[error("Invalid font family: {0}")]
    InvalidFontFamily(String),

    /// The theme file could not be read.
    #[error("Failed to read theme file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The theme file is not valid YAML for a theme.
    #[error("Failed to parse theme: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Spacing token name.
///
/// Used for padding on layout regions; resolved to pixels through the
/// theme's [`SpacingScale`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    /// No spacing.
    None,
    /// Extra small spacing.
    XSmall,
    /// Small spacing.
    Small,
    /// Medium spacing (default).
    #[default]
    Medium,
    /// Large spacing.
    Large,
    /// Extra large spacing.
    XLarge,
}

impl Size {
    /// All sizes, smallest first.
    pub const ALL: [Size; 6] = [
        Size::None,
        Size::XSmall,
        Size::Small,
        Size::Medium,
        Size::Large,
        Size::XLarge,
    ];

    /// Token name as used in class names and data attributes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::XSmall => "xsmall",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::XLarge => "xlarge",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color tokens. All values are hex colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Brand accent color.
    pub brand: String,
    /// Page background.
    pub background: String,
    /// Background of raised surfaces (header, footer).
    pub background_front: String,
    /// Primary text.
    pub text: String,
    /// Secondary text.
    pub text_weak: String,
    /// Borders and separators.
    pub border: String,
    /// Focus ring.
    pub focus: String,
}

/// Spacing scale in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacingScale {
    pub xsmall: u16,
    pub small: u16,
    pub medium: u16,
    pub large: u16,
    pub xlarge: u16,
}

impl Default for SpacingScale {
    fn default() -> Self {
        Self {
            xsmall: 6,
            small: 12,
            medium: 24,
            large: 48,
            xlarge: 96,
        }
    }
}

/// Typography tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typography {
    /// CSS font-family stack.
    pub font_family: String,
    /// Base font size in pixels.
    pub font_size: u16,
    /// Base line height in pixels.
    pub line_height: u16,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_family: "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, Helvetica, Arial, sans-serif".to_string(),
            font_size: 18,
            line_height: 24,
        }
    }
}

/// A complete token set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name, rendered as `data-theme` on the root element.
    pub name: String,
    pub colors: ThemeColors,
    #[serde(default)]
    pub spacing: SpacingScale,
    #[serde(default)]
    pub typography: Typography,
}

impl Default for Theme {
    fn default() -> Self {
        Self::hpe()
    }
}

impl Theme {
    /// HPE-flavoured token set: green brand on white.
    #[must_use]
    pub fn hpe() -> Self {
        Self {
            name: "hpe".to_string(),
            colors: ThemeColors {
                brand: "#01a982".to_string(),
                background: "#ffffff".to_string(),
                background_front: "#f7f7f7".to_string(),
                text: "#444444".to_string(),
                text_weak: "#757575".to_string(),
                border: "#cccccc".to_string(),
                focus: "#00e8cf".to_string(),
            },
            spacing: SpacingScale::default(),
            typography: Typography {
                font_family: "Metric, Arial, sans-serif".to_string(),
                ..Typography::default()
            },
        }
    }

    /// Neutral purple token set.
    #[must_use]
    pub fn base() -> Self {
        Self {
            name: "base".to_string(),
            colors: ThemeColors {
                brand: "#7d4cdb".to_string(),
                background: "#ffffff".to_string(),
                background_front: "#f8f8f8".to_string(),
                text: "#444444".to_string(),
                text_weak: "#555555".to_string(),
                border: "#e0e0e0".to_string(),
                focus: "#6fffb0".to_string(),
            },
            spacing: SpacingScale::default(),
            typography: Typography::default(),
        }
    }

    /// Dark token set.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            colors: ThemeColors {
                brand: "#01a982".to_string(),
                background: "#111111".to_string(),
                background_front: "#222222".to_string(),
                text: "#f8f8f8".to_string(),
                text_weak: "#cccccc".to_string(),
                border: "#444444".to_string(),
                focus: "#00e8cf".to_string(),
            },
            spacing: SpacingScale::default(),
            typography: Typography::default(),
        }
    }

    /// Look up a built-in theme by name (case-insensitive).
    pub fn builtin(name: &str) -> Result<Self, ThemeError> {
        match name.trim().to_lowercase().as_str() {
            "hpe" => Ok(Self::hpe()),
            "base" => Ok(Self::base()),
            "dark" => Ok(Self::dark()),
            _ => Err(ThemeError::Unknown(name.to_string())),
        }
    }

    /// Parse and validate a theme from YAML.
    pub fn from_yaml_str(source: &str) -> Result<Self, ThemeError> {
        let theme: Self = serde_yaml::from_str(source)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Read, parse and validate a theme file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&source)
    }

    /// Resolve the theme named by configuration. A theme file wins over a name.
    pub fn resolve(config: &ThemeConfig) -> Result<Self, ThemeError> {
        let theme = match &config.file {
            Some(path) => {
                if !config.name.trim().is_empty() && config.name != DEFAULT_THEME {
                    tracing::warn!(
                        name: "theme.name_ignored",
                        requested = %config.name,
                        file = %path.display(),
                        "Theme file set; ignoring theme name"
                    );
                }
                Self::from_file(path)?
            }
            None => Self::builtin(&config.name)?,
        };

        tracing::info!(
            name: "theme.resolved",
            theme = %theme.name,
            from_file = config.file.is_some(),
            "Theme resolved"
        );

        Ok(theme)
    }

    /// Check every token.
    pub fn validate(&self) -> Result<(), ThemeError> {
        if self.name.trim().is_empty() {
            return Err(ThemeError::EmptyName);
        }
        // Lands in a CSS comment and in `data-theme`.
        if !self
            .name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ThemeError::InvalidName(self.name.clone()));
        }

        let font = &self.typography.font_family;
        if font.trim().is_empty() || font.contains(['{', '}', ';']) || font.contains("*/") {
            return Err(ThemeError::InvalidFontFamily(font.clone()));
        }

        let c = &self.colors;
        for (token, value) in [
            ("brand", &c.brand),
            ("background", &c.background),
            ("background_front", &c.background_front),
            ("text", &c.text),
            ("text_weak", &c.text_weak),
            ("border", &c.border),
            ("focus", &c.focus),
        ] {
            if !is_hex_color(value) {
                return Err(ThemeError::InvalidColor {
                    token,
                    value: value.clone(),
                });
            }
        }

        let s = &self.spacing;
        let steps = [s.xsmall, s.small, s.medium, s.large, s.xlarge];
        if steps[0] == 0 || steps.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ThemeError::InvalidSpacing(format!(
                "expected 0 < xsmall < small < medium < large < xlarge, got {steps:?}"
            )));
        }

        Ok(())
    }

    /// Pixel value of a spacing token.
    #[must_use]
    pub fn spacing(&self, size: Size) -> u16 {
        match size {
            Size::None => 0,
            Size::XSmall => self.spacing.xsmall,
            Size::Small => self.spacing.small,
            Size::Medium => self.spacing.medium,
            Size::Large => self.spacing.large,
            Size::XLarge => self.spacing.xlarge,
        }
    }
}

/// `#rgb`, `#rrggbb` or `#rrggbbaa`.
fn is_hex_color(value: &str) -> bool {
    value.strip_prefix('#').is_some_and(|hex| {
        matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
    })
}
