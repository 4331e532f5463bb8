use crate::repositories::*;

pub trait Db: SpotRepo + ReviewRepo + FavoriteRepo {}

impl<T> Db for T where T: SpotRepo + ReviewRepo + FavoriteRepo {}
