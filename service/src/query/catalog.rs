//! [`Query`] collection related to category browsing.

use common::operations::By;

use crate::read;
#[cfg(doc)]
use crate::{domain::Listing, Query};

use super::DatabaseQuery;

/// Queries number of [`Listing`]s in every category.
pub type Categories = DatabaseQuery<By<read::catalog::Categories, ()>>;
