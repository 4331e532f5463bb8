use super::{spot_locks::SpotLocks, *};

pub fn update_review<D: Db>(
    db: &D,
    locks: &SpotLocks,
    id: &Id,
    actor: &Id,
    patch: usecases::ReviewPatch,
) -> Result<Review> {
    // The review is read once up front to learn which spot to lock.
    // The usecase re-reads it under the lock.
    let spot_id = db.get_review(id.as_str())?.spot_id;
    let _guard = locks.exclusive(spot_id.as_str());
    let (review, rating_changed) = usecases::update_review(db, id, actor, patch)?;
    if rating_changed {
        if let Err(err) = usecases::update_spot_rating(db, review.spot_id.as_str()) {
            warn!(
                "Failed to recompute the rating of spot {} after updating review {}: {}",
                review.spot_id, review.id, err
            );
            return Err(err.into());
        }
    }
    Ok(review)
}
