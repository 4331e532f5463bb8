use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewReview {
    pub spot_id: Id,
    pub created_by: Id,
    pub rating: u8,
    pub comment: Option<String>,
    pub images: Vec<String>,
}

/// A validated review that is ready to be persisted.
#[derive(Debug, Clone)]
pub struct Storable(Review);

impl Storable {
    pub fn review_id(&self) -> &str {
        self.0.id.as_ref()
    }
    pub fn spot_id(&self) -> &str {
        self.0.spot_id.as_ref()
    }
}

pub fn prepare_new_review<D: Db>(db: &D, r: NewReview) -> Result<Storable> {
    let rating = RatingValue::from(r.rating);
    if !rating.is_valid() {
        return Err(Error::RatingValue);
    }
    let spot = db.get_spot(r.spot_id.as_str())?;
    debug_assert_eq!(spot.id, r.spot_id);
    if db
        .load_review_of_user_for_spot(r.created_by.as_str(), r.spot_id.as_str())?
        .is_some()
    {
        return Err(Error::ReviewExists);
    }
    Ok(Storable(Review {
        id: Id::new(),
        spot_id: r.spot_id,
        created_by: r.created_by,
        created_at: Timestamp::now(),
        rating,
        comment: r.comment,
        images: r.images,
    }))
}

pub fn store_new_review<D: Db>(db: &D, s: Storable) -> Result<Review> {
    let Storable(review) = s;
    db.create_review(review.clone())?;
    Ok(review)
}
