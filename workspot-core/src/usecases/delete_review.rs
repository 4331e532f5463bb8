use super::prelude::*;

/// Returns the id of the reviewed spot so that the caller can
/// recompute its aggregate.
pub fn delete_review<D: Db>(db: &D, id: &Id, actor: &Id) -> Result<Id> {
    let review = db.get_review(id.as_str())?;
    authorize_mutation(actor, &review.created_by, REVIEW_DENIAL)?;
    db.delete_review(review.id.as_str())?;
    Ok(review.spot_id)
}
