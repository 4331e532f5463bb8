use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Rating value out of range")]
    RatingValue,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Nothing to update")]
    EmptyPatch,
    #[error("The spot has already been reviewed by this user")]
    ReviewExists,
    #[error("The spot has already been favorited by this user")]
    FavoriteExists,
    #[error("This is not allowed")]
    Forbidden,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
