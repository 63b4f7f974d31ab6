//! Guest engagement entities: ratings, likes, favorites.

pub mod model;

pub use model::{Favorite, HotelRating};
