use super::prelude::*;

/// Partial update of a review.
///
/// Absent fields keep their current value.
#[derive(Debug, Default, Clone)]
pub struct ReviewPatch {
    pub rating: Option<u8>,
    pub comment: Option<String>,
    pub images: Option<Vec<String>>,
}

impl ReviewPatch {
    pub fn is_empty(&self) -> bool {
        let Self {
            rating,
            comment,
            images,
        } = self;
        rating.is_none() && comment.is_none() && images.is_none()
    }
}

/// Returns the updated review and whether its rating was patched,
/// i.e. whether the spot's aggregate must be recomputed.
pub fn update_review<D: Db>(
    db: &D,
    id: &Id,
    actor: &Id,
    patch: ReviewPatch,
) -> Result<(Review, bool)> {
    let mut review = db.get_review(id.as_str())?;
    authorize_mutation(actor, &review.created_by, REVIEW_DENIAL)?;
    if patch.is_empty() {
        return Err(Error::EmptyPatch);
    }
    let ReviewPatch {
        rating,
        comment,
        images,
    } = patch;
    let rating_changed = rating.is_some();
    if let Some(rating) = rating {
        let rating = RatingValue::from(rating);
        if !rating.is_valid() {
            return Err(Error::RatingValue);
        }
        review.rating = rating;
    }
    if let Some(comment) = comment {
        review.comment = Some(comment);
    }
    if let Some(images) = images {
        review.images = images;
    }
    db.update_review(&review)?;
    Ok((review, rating_changed))
}
