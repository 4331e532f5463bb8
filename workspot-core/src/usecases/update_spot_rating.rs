use super::prelude::*;

/// Recomputes and persists a spot's `(avg_rating, review_count)` pair.
///
/// Always computed from a fresh read of the whole review set, never
/// incrementally from the previous aggregate. Callers that mutate the
/// review set concurrently must serialize the (review write, recompute)
/// sequence per spot id.
pub fn update_spot_rating<D: Db>(db: &D, spot_id: &str) -> Result<Spot> {
    let mut spot = db.get_spot(spot_id)?;
    let reviews = db.load_reviews_of_spot(spot.id.as_str())?;
    let (avg_rating, review_count) = spot.avg_rating(&reviews);
    spot.avg_rating = avg_rating;
    spot.review_count = review_count;
    db.update_spot(&spot)?;
    Ok(spot)
}

#[cfg(test)]
mod tests {

    use super::super::tests::MockDb;
    use super::*;
    use workspot_entities::builders::*;

    #[test]
    fn recompute_from_current_review_set() {
        let db = MockDb::default();
        db.spots.borrow_mut().push(Spot::build().id("s1").finish());
        for (id, user, rating) in [("r1", "u1", 5), ("r2", "u2", 4), ("r3", "u3", 3)] {
            db.reviews.borrow_mut().push(
                Review::build()
                    .id(id)
                    .spot_id("s1")
                    .created_by(user)
                    .rating(rating)
                    .finish(),
            );
        }

        let spot = update_spot_rating(&db, "s1").unwrap();
        assert_eq!(AvgRating::from(4.0), spot.avg_rating);
        assert_eq!(3, spot.review_count);

        db.reviews.borrow_mut().retain(|r| r.id.as_str() != "r3");
        let spot = update_spot_rating(&db, "s1").unwrap();
        assert_eq!(AvgRating::from(4.5), spot.avg_rating);
        assert_eq!(2, spot.review_count);

        db.reviews.borrow_mut().clear();
        let spot = update_spot_rating(&db, "s1").unwrap();
        assert_eq!(AvgRating::from(0.0), spot.avg_rating);
        assert_eq!(0, spot.review_count);

        // The persisted spot carries the same aggregate.
        assert_eq!(spot, db.get_spot("s1").unwrap());
    }

    #[test]
    fn unknown_spot_is_not_found() {
        let db = MockDb::default();
        assert!(matches!(
            update_spot_rating(&db, "nope"),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }
}
