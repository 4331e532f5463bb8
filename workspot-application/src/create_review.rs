use super::{spot_locks::SpotLocks, *};

pub fn create_review<D: Db>(
    db: &D,
    locks: &SpotLocks,
    new_review: usecases::NewReview,
) -> Result<Review> {
    let _guard = locks.exclusive(new_review.spot_id.as_str());
    let storable = usecases::prepare_new_review(db, new_review)?;
    let review = usecases::store_new_review(db, storable)?;
    if let Err(err) = usecases::update_spot_rating(db, review.spot_id.as_str()) {
        warn!(
            "Failed to recompute the rating of spot {} after adding review {}: {}",
            review.spot_id, review.id, err
        );
        return Err(err.into());
    }
    Ok(review)
}
