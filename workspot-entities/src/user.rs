use crate::id::*;

/// Identity stub, managed by an external authentication service.
///
/// Only referenced by id within this system.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id    : Id,
    pub email : String,
    pub name  : String,
}
