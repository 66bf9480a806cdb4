//! [`Query`] collection related to the multiple [`Listing`]s.

use common::operations::By;

use crate::{
    domain::{user, Listing},
    read,
};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a filtered and sorted list of [`Listing`]s.
pub type List = DatabaseQuery<By<Vec<Listing>, read::listing::list::Selector>>;

/// Queries [`Listing`]s of an owner, most recently created first.
pub type ByOwner = DatabaseQuery<By<Vec<Listing>, user::Id>>;
