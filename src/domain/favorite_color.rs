use crate::domain::ConstraintViolation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FavoriteColor {
    Blue,
    Green,
    Red,
    Yellow,
}

impl FavoriteColor {
    pub const ALL: [FavoriteColor; 4] = [
        FavoriteColor::Blue,
        FavoriteColor::Green,
        FavoriteColor::Red,
        FavoriteColor::Yellow,
    ];

    /// Matches the wire name exactly; the endpoint is case-sensitive.
    pub fn parse(s: &str) -> Result<FavoriteColor, ConstraintViolation> {
        Self::ALL
            .into_iter()
            .find(|color| color.as_str() == s)
            .ok_or(ConstraintViolation::UnknownColor)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FavoriteColor::Blue => "BLUE",
            FavoriteColor::Green => "GREEN",
            FavoriteColor::Red => "RED",
            FavoriteColor::Yellow => "YELLOW",
        }
    }
}

impl std::fmt::Display for FavoriteColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
