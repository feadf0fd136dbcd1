//! Casing and alignment helpers shared by level labels and the banner.

/// Casing applied to level labels (`SUCCESS`, `Success`, `success`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transform {
    /// Labels are already uppercase; leave them alone.
    #[default]
    None,
    Uppercase,
    Lowercase,
    /// `Info`, `Warning`.
    Capitalize,
}

impl Transform {
    #[must_use]
    pub fn apply(self, s: &str) -> String {
        match self {
            Self::None => s.to_string(),
            Self::Uppercase => s.to_uppercase(),
            Self::Lowercase => s.to_lowercase(),
            Self::Capitalize => {
                let mut chars = s.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_uppercase().collect::<String>()
                        + chars.as_str().to_lowercase().as_str()
                })
            }
        }
    }

    /// Accepts the same aliases config files use; unknown names mean no transform.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "uppercase" | "upper" => Self::Uppercase,
            "lowercase" | "lower" => Self::Lowercase,
            "capitalize" | "cap" => Self::Capitalize,
            _ => Self::None,
        }
    }
}

/// Where a block of text sits inside the available width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    Left,
    Right,
    #[default]
    Center,
}

impl Alignment {
    /// Left padding for content of `content_width` columns inside `total_width`.
    /// Clamped at zero when the content is wider than the space.
    #[must_use]
    pub const fn left_padding(self, total_width: usize, content_width: usize) -> usize {
        let slack = total_width.saturating_sub(content_width);
        match self {
            Self::Left => 0,
            Self::Right => slack,
            Self::Center => slack / 2,
        }
    }
}
