/// A single rule of the favorites endpoint broken by a submitted form.
///
/// The `Display` output is the localized message template the endpoint
/// embeds in `error.message` when it rejects the form.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintViolation {
    #[error("Параметр 'title' не может быть пустым")]
    EmptyTitle,
    #[error("Параметр 'title' должен содержать не более 999 символов")]
    TitleTooLong,
    #[error("Параметр 'lat' должен быть не менее -90")]
    LatitudeTooLow,
    #[error("Параметр 'lat' должен быть не более 90")]
    LatitudeTooHigh,
    #[error("Параметр 'lon' должен быть не менее -180")]
    LongitudeTooLow,
    #[error("Параметр 'lon' должен быть не более 180")]
    LongitudeTooHigh,
    #[error("Параметр 'color' может быть одним из следующих значений: BLUE, GREEN, RED, YELLOW")]
    UnknownColor,
}

impl ConstraintViolation {
    /// Name of the form field the violation refers to.
    pub fn field(&self) -> &'static str {
        match self {
            ConstraintViolation::EmptyTitle | ConstraintViolation::TitleTooLong => "title",
            ConstraintViolation::LatitudeTooLow | ConstraintViolation::LatitudeTooHigh => "lat",
            ConstraintViolation::LongitudeTooLow | ConstraintViolation::LongitudeTooHigh => "lon",
            ConstraintViolation::UnknownColor => "color",
        }
    }
}
