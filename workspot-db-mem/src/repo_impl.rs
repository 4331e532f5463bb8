use workspot_core::{
    entities::*,
    repositories::{Error, FavoriteRepo, ReviewRepo, SpotRepo},
};

use super::MemDb;

type Result<T> = std::result::Result<T, Error>;

impl SpotRepo for MemDb {
    fn create_spot(&self, spot: Spot) -> Result<()> {
        let mut spots = self.spots.write();
        if spots.contains_key(&spot.id) {
            return Err(Error::AlreadyExists);
        }
        spots.insert(spot.id.clone(), spot);
        Ok(())
    }

    fn get_spot(&self, id: &str) -> Result<Spot> {
        self.spots.read().get(id).cloned().ok_or(Error::NotFound)
    }

    fn all_spots(&self) -> Result<Vec<Spot>> {
        Ok(self.spots.read().values().cloned().collect())
    }

    fn count_spots(&self) -> Result<usize> {
        Ok(self.spots.read().len())
    }

    fn update_spot(&self, spot: &Spot) -> Result<()> {
        let mut spots = self.spots.write();
        let existing = spots.get_mut(&spot.id).ok_or(Error::NotFound)?;
        *existing = spot.clone();
        Ok(())
    }

    fn delete_spot(&self, id: &str) -> Result<()> {
        self.spots
            .write()
            .remove(id)
            .map(|_| ())
            .ok_or(Error::NotFound)
    }
}

impl ReviewRepo for MemDb {
    fn create_review(&self, review: Review) -> Result<()> {
        let mut reviews = self.reviews.write();
        // Unique index on (created_by, spot_id)
        if reviews.contains_key(&review.id)
            || reviews
                .values()
                .any(|r| r.created_by == review.created_by && r.spot_id == review.spot_id)
        {
            return Err(Error::AlreadyExists);
        }
        reviews.insert(review.id.clone(), review);
        Ok(())
    }

    fn get_review(&self, id: &str) -> Result<Review> {
        self.reviews.read().get(id).cloned().ok_or(Error::NotFound)
    }

    fn load_reviews_of_spot(&self, spot_id: &str) -> Result<Vec<Review>> {
        Ok(self
            .reviews
            .read()
            .values()
            .filter(|r| r.spot_id.as_str() == spot_id)
            .cloned()
            .collect())
    }

    fn load_review_of_user_for_spot(
        &self,
        user_id: &str,
        spot_id: &str,
    ) -> Result<Option<Review>> {
        Ok(self
            .reviews
            .read()
            .values()
            .find(|r| r.created_by.as_str() == user_id && r.spot_id.as_str() == spot_id)
            .cloned())
    }

    fn update_review(&self, review: &Review) -> Result<()> {
        let mut reviews = self.reviews.write();
        let existing = reviews.get_mut(&review.id).ok_or(Error::NotFound)?;
        *existing = review.clone();
        Ok(())
    }

    fn delete_review(&self, id: &str) -> Result<()> {
        self.reviews
            .write()
            .remove(id)
            .map(|_| ())
            .ok_or(Error::NotFound)
    }

    fn delete_reviews_of_spot(&self, spot_id: &str) -> Result<usize> {
        let mut reviews = self.reviews.write();
        let len_before = reviews.len();
        reviews.retain(|_, r| r.spot_id.as_str() != spot_id);
        Ok(len_before - reviews.len())
    }
}

impl FavoriteRepo for MemDb {
    fn create_favorite(&self, favorite: Favorite) -> Result<()> {
        let mut favorites = self.favorites.write();
        // Unique index on (user_id, spot_id)
        if favorites.contains_key(&favorite.id)
            || favorites
                .values()
                .any(|f| f.user_id == favorite.user_id && f.spot_id == favorite.spot_id)
        {
            return Err(Error::AlreadyExists);
        }
        favorites.insert(favorite.id.clone(), favorite);
        Ok(())
    }

    fn get_favorite(&self, id: &str) -> Result<Favorite> {
        self.favorites
            .read()
            .get(id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn load_favorites_of_user(&self, user_id: &str) -> Result<Vec<Favorite>> {
        Ok(self
            .favorites
            .read()
            .values()
            .filter(|f| f.user_id.as_str() == user_id)
            .cloned()
            .collect())
    }

    fn load_favorite_of_user_for_spot(
        &self,
        user_id: &str,
        spot_id: &str,
    ) -> Result<Option<Favorite>> {
        Ok(self
            .favorites
            .read()
            .values()
            .find(|f| f.user_id.as_str() == user_id && f.spot_id.as_str() == spot_id)
            .cloned())
    }

    fn delete_favorite(&self, id: &str) -> Result<()> {
        self.favorites
            .write()
            .remove(id)
            .map(|_| ())
            .ok_or(Error::NotFound)
    }

    fn delete_favorites_of_spot(&self, spot_id: &str) -> Result<usize> {
        let mut favorites = self.favorites.write();
        let len_before = favorites.len();
        favorites.retain(|_, f| f.spot_id.as_str() != spot_id);
        Ok(len_before - favorites.len())
    }
}
