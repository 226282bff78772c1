use crate::domain::ConstraintViolation;

/// Maximum title length, counted in characters
pub const MAX_TITLE_LENGTH: usize = 999;

#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteTitle(String);

impl FavoriteTitle {
    /// Returns an instance of `FavoriteTitle` if the input holds between one
    /// and `MAX_TITLE_LENGTH` characters of any kind.
    pub fn parse(s: String) -> Result<FavoriteTitle, ConstraintViolation> {
        let length = s.chars().count();
        if length == 0 {
            return Err(ConstraintViolation::EmptyTitle);
        }
        if length > MAX_TITLE_LENGTH {
            return Err(ConstraintViolation::TitleTooLong);
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for FavoriteTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
