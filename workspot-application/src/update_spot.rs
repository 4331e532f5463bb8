use super::{spot_locks::SpotLocks, *};

/// Spot attribute patches rewrite the whole spot record, including the
/// derived `(avg_rating, review_count)` pair. The lock keeps them from
/// interleaving with a review flow and reverting a freshly recomputed
/// aggregate.
pub fn update_spot<D: Db>(
    db: &D,
    locks: &SpotLocks,
    id: &Id,
    actor: &Id,
    patch: usecases::SpotPatch,
) -> Result<Spot> {
    let _guard = locks.exclusive(id.as_str());
    Ok(usecases::update_spot(db, id, actor, patch)?)
}
