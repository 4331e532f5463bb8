use super::{spot_locks::SpotLocks, *};

pub fn delete_spot<D: Db>(db: &D, locks: &SpotLocks, id: &Id, actor: &Id) -> Result<()> {
    {
        // In-flight review flows of this spot finish before the cascade.
        let _guard = locks.exclusive(id.as_str());
        usecases::delete_spot(db, id, actor)?;
        info!("Deleted spot {} with its reviews and favorites", id);
    }
    locks.discard(id.as_str());
    Ok(())
}
