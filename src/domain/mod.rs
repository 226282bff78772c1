mod constraint_violation;
mod coordinates;
mod favorite;
mod favorite_color;
mod favorite_title;

pub use constraint_violation::ConstraintViolation;
pub use coordinates::{LATITUDE_BOUND, LONGITUDE_BOUND, Latitude, Longitude};
pub use favorite::{Expectation, Favorite, FavoriteDraft, NewFavorite};
pub use favorite_color::FavoriteColor;
pub use favorite_title::{FavoriteTitle, MAX_TITLE_LENGTH};
