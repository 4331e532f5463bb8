use super::prelude::*;

/// Deletes a spot together with its reviews and favorites.
pub fn delete_spot<D: Db>(db: &D, id: &Id, actor: &Id) -> Result<()> {
    let spot = db.get_spot(id.as_str())?;
    authorize_mutation(actor, &spot.created_by, SPOT_DENIAL)?;
    db.delete_reviews_of_spot(spot.id.as_str())?;
    db.delete_favorites_of_spot(spot.id.as_str())?;
    db.delete_spot(spot.id.as_str())?;
    Ok(())
}

#[cfg(test)]
mod tests {

    use super::super::tests::MockDb;
    use super::*;
    use workspot_entities::builders::*;

    fn fixtures() -> MockDb {
        let db = MockDb::default();
        db.spots
            .borrow_mut()
            .push(Spot::build().id("s1").created_by("u1").finish());
        db.reviews.borrow_mut().push(
            Review::build()
                .id("r1")
                .spot_id("s1")
                .created_by("u2")
                .rating(4)
                .finish(),
        );
        db.favorites.borrow_mut().push(Favorite {
            id: "f1".into(),
            user_id: "u3".into(),
            spot_id: "s1".into(),
            created_at: Timestamp::now(),
        });
        db
    }

    #[test]
    fn cascade_deletes_reviews_and_favorites() {
        let db = fixtures();
        delete_spot(&db, &"s1".into(), &"u1".into()).unwrap();
        assert!(db.spots.borrow().is_empty());
        assert!(db.reviews.borrow().is_empty());
        assert!(db.favorites.borrow().is_empty());
    }

    #[test]
    fn non_owner_is_answered_with_not_found() {
        let db = fixtures();
        assert!(matches!(
            delete_spot(&db, &"s1".into(), &"u2".into()),
            Err(Error::Repo(RepoError::NotFound))
        ));
        assert_eq!(1, db.spots.borrow().len());
        assert_eq!(1, db.reviews.borrow().len());
    }

    #[test]
    fn unknown_spot_is_not_found() {
        let db = MockDb::default();
        assert!(matches!(
            delete_spot(&db, &"nope".into(), &"u1".into()),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }
}
