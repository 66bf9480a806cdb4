//! [`Query`] collection related to an owner dashboard.

use common::operations::By;

use crate::{domain::user, read};
#[cfg(doc)]
use crate::{domain::Listing, Query};

use super::DatabaseQuery;

/// Queries [`read::dashboard::Stats`] of an owner's [`Listing`]s.
pub type Stats = DatabaseQuery<By<read::dashboard::Stats, user::Id>>;
