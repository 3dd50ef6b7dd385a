//! Plain data records exchanged with the storefront backend.

use serde::{Deserialize, Serialize};

/// Flat price of every movie in the store, in USD.
pub const MOVIE_PRICE_USD: f64 = 3.99;

/// A genre record from the movie catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// A movie as returned by the catalog search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub original_language: String,
    #[serde(default)]
    pub poster_path: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub overview: String,
}

/// Cart line item, in the parameter shape the cart endpoint expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub movie_id: u64,
    pub movie_name: String,
    pub poster_path: String,
    pub release_date: String,
    pub overview: String,
}

impl From<&Movie> for CartItem {
    fn from(movie: &Movie) -> Self {
        Self {
            movie_id: movie.id,
            movie_name: movie.title.clone(),
            poster_path: movie.poster_path.clone(),
            release_date: movie.release_date.clone(),
            overview: movie.overview.clone(),
        }
    }
}

impl CartItem {
    /// Price of this line item. Every movie sells at the flat store price.
    pub fn price_usd(&self) -> f64 {
        MOVIE_PRICE_USD
    }
}
