// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait SpotRepo {
    fn create_spot(&self, spot: Spot) -> Result<()>;

    fn get_spot(&self, id: &str) -> Result<Spot>;
    fn all_spots(&self) -> Result<Vec<Spot>>;
    fn count_spots(&self) -> Result<usize>;

    fn update_spot(&self, spot: &Spot) -> Result<()>;
    fn delete_spot(&self, id: &str) -> Result<()>;
}

pub trait ReviewRepo {
    fn create_review(&self, review: Review) -> Result<()>;

    fn get_review(&self, id: &str) -> Result<Review>;
    fn load_reviews_of_spot(&self, spot_id: &str) -> Result<Vec<Review>>;
    fn load_review_of_user_for_spot(
        &self,
        user_id: &str,
        spot_id: &str,
    ) -> Result<Option<Review>>;

    fn update_review(&self, review: &Review) -> Result<()>;
    fn delete_review(&self, id: &str) -> Result<()>;
    fn delete_reviews_of_spot(&self, spot_id: &str) -> Result<usize>;
}

pub trait FavoriteRepo {
    fn create_favorite(&self, favorite: Favorite) -> Result<()>;

    fn get_favorite(&self, id: &str) -> Result<Favorite>;
    fn load_favorites_of_user(&self, user_id: &str) -> Result<Vec<Favorite>>;
    fn load_favorite_of_user_for_spot(
        &self,
        user_id: &str,
        spot_id: &str,
    ) -> Result<Option<Favorite>>;

    fn delete_favorite(&self, id: &str) -> Result<()>;
    fn delete_favorites_of_spot(&self, spot_id: &str) -> Result<usize>;
}
