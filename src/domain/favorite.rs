use crate::domain::{ConstraintViolation, FavoriteColor, FavoriteTitle, Latitude, Longitude};
use serde::{Deserialize, Serialize};

/// The form submitted to `POST /v1/favorites`.
///
/// Fields are kept raw so that drafts breaking the endpoint's rules can be
/// sent as well; `color` in particular may hold any string.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteDraft {
    pub title: String,
    pub lat: f64,
    pub lon: f64,
    pub color: Option<String>,
}

/// A draft that satisfies every rule of the endpoint.
#[derive(Debug)]
pub struct NewFavorite {
    pub title: FavoriteTitle,
    pub lat: Latitude,
    pub lon: Longitude,
    pub color: Option<FavoriteColor>,
}

/// A favorite as returned by the endpoint after creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: i64,
    pub title: String,
    pub lat: f64,
    pub lon: f64,
    pub color: Option<FavoriteColor>,
    pub created_at: String,
}

/// What the endpoint is expected to do with a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    Accepted,
    Rejected(ConstraintViolation),
}

impl FavoriteDraft {
    pub fn new(title: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            title: title.into(),
            lat,
            lon,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Form fields in submission order. `color` is left out entirely when
    /// unset, which is different from sending it empty.
    ///
    /// Coordinates go through `Display`, so `0.000001` is sent as written
    /// rather than in exponent notation.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("title", self.title.clone()),
            ("lat", self.lat.to_string()),
            ("lon", self.lon.to_string()),
        ];
        if let Some(color) = &self.color {
            fields.push(("color", color.clone()));
        }
        fields
    }

    pub fn expectation(&self) -> Expectation {
        match NewFavorite::try_from(self) {
            Ok(_) => Expectation::Accepted,
            Err(violation) => Expectation::Rejected(violation),
        }
    }
}

// Fields are checked in form order; the first broken rule is reported.
impl TryFrom<&FavoriteDraft> for NewFavorite {
    type Error = ConstraintViolation;

    fn try_from(value: &FavoriteDraft) -> Result<Self, Self::Error> {
        let title = FavoriteTitle::parse(value.title.clone())?;
        let lat = Latitude::parse(value.lat)?;
        let lon = Longitude::parse(value.lon)?;
        let color = value
            .color
            .as_deref()
            .map(FavoriteColor::parse)
            .transpose()?;
        Ok(Self {
            title,
            lat,
            lon,
            color,
        })
    }
}
