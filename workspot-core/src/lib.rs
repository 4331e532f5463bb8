pub mod db;
pub mod rating;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use workspot_entities::{
        favorite::*, geo::*, id::*, rating::*, review::*, spot::*, time::*, user::*,
    };
}
