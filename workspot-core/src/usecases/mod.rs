mod authorize;
mod create_review;
mod create_spot;
mod delete_review;
mod delete_spot;
mod error;
mod search_spots;
mod update_review;
mod update_spot;
mod update_spot_rating;


type Result<T> = std::result::Result<T, Error>;

pub use self::{
    authorize::*, create_review::*, create_spot::*, delete_review::*, delete_spot::*,
    error::Error, search_spots::*, update_review::*, update_spot::*, update_spot_rating::*,
};

mod prelude {
    pub use super::{authorize::*, error::Error};
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        db::*, entities::*, rating::*, repositories::Error as RepoError, repositories::*,
    };
}
use self::prelude::*;

pub fn get_spot<R: SpotRepo>(repo: &R, id: &Id) -> Result<Spot> {
    Ok(repo.get_spot(id.as_str())?)
}

pub fn load_reviews_of_spot<D: Db>(db: &D, spot_id: &Id) -> Result<Vec<Review>> {
    // Unknown spot ids are rejected instead of answered with an empty list.
    let spot = db.get_spot(spot_id.as_str())?;
    let mut reviews = db.load_reviews_of_spot(spot.id.as_str())?;
    reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(reviews)
}

pub fn create_favorite<D: Db>(db: &D, user_id: Id, spot_id: Id) -> Result<Favorite> {
    let spot = db.get_spot(spot_id.as_str())?;
    if db
        .load_favorite_of_user_for_spot(user_id.as_str(), spot.id.as_str())?
        .is_some()
    {
        return Err(Error::FavoriteExists);
    }
    let favorite = Favorite {
        id: Id::new(),
        user_id,
        spot_id,
        created_at: Timestamp::now(),
    };
    db.create_favorite(favorite.clone())?;
    Ok(favorite)
}

pub fn delete_favorite<R: FavoriteRepo>(repo: &R, id: &Id, user_id: &Id) -> Result<()> {
    let favorite = repo.get_favorite(id.as_str())?;
    authorize_mutation(user_id, &favorite.user_id, FAVORITE_DENIAL)?;
    Ok(repo.delete_favorite(id.as_str())?)
}

pub fn favorites_of_user<R: FavoriteRepo>(repo: &R, user_id: &Id) -> Result<Vec<Favorite>> {
    let mut favorites = repo.load_favorites_of_user(user_id.as_str())?;
    // Most recent first
    favorites.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(favorites)
}

pub fn is_favorite<R: FavoriteRepo>(repo: &R, user_id: &Id, spot_id: &Id) -> Result<bool> {
    Ok(repo
        .load_favorite_of_user_for_spot(user_id.as_str(), spot_id.as_str())?
        .is_some())
}
