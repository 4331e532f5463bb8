use super::prelude::*;

/// How a denied mutation is reported to the caller.
///
/// `Hidden` masks the resource's existence behind `NotFound`,
/// `Forbidden` admits that the resource exists but rejects the actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    Hidden,
    Forbidden,
}

// Spots and favorites hide their existence from non-owners while
// reviews admit it. One fixed policy per resource type.
pub const SPOT_DENIAL: Denial = Denial::Hidden;
pub const REVIEW_DENIAL: Denial = Denial::Forbidden;
pub const FAVORITE_DENIAL: Denial = Denial::Hidden;

pub fn can_mutate(actor: &Id, owner: &Id) -> bool {
    actor == owner
}

pub fn authorize_mutation(actor: &Id, owner: &Id, denial: Denial) -> Result<()> {
    if can_mutate(actor, owner) {
        return Ok(());
    }
    match denial {
        Denial::Hidden => Err(Error::Repo(RepoError::NotFound)),
        Denial::Forbidden => Err(Error::Forbidden),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_may_mutate() {
        let owner = Id::from("u1");
        assert!(authorize_mutation(&owner, &owner, Denial::Hidden).is_ok());
        assert!(authorize_mutation(&owner, &owner, Denial::Forbidden).is_ok());
    }

    #[test]
    fn denial_is_reported_per_policy() {
        let actor = Id::from("u1");
        let owner = Id::from("u2");
        assert!(matches!(
            authorize_mutation(&actor, &owner, Denial::Hidden),
            Err(Error::Repo(RepoError::NotFound))
        ));
        assert!(matches!(
            authorize_mutation(&actor, &owner, Denial::Forbidden),
            Err(Error::Forbidden)
        ));
    }
}
