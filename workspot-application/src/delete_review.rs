use super::{spot_locks::SpotLocks, *};

pub fn delete_review<D: Db>(db: &D, locks: &SpotLocks, id: &Id, actor: &Id) -> Result<()> {
    // The review is read once up front to learn which spot to lock.
    // The usecase re-reads it under the lock.
    let spot_id = db.get_review(id.as_str())?.spot_id;
    let _guard = locks.exclusive(spot_id.as_str());
    let spot_id = usecases::delete_review(db, id, actor)?;
    if let Err(err) = usecases::update_spot_rating(db, spot_id.as_str()) {
        warn!(
            "Failed to recompute the rating of spot {} after deleting review {}: {}",
            spot_id, id, err
        );
        return Err(err.into());
    }
    Ok(())
}
