//! In-memory [`Database`] implementation.

mod impls;
pub mod mock;

use std::sync::Arc;

use derive_more::{Display, Error as StdError};
use tokio::sync::RwLock;

use crate::domain::{listing, Listing};
#[cfg(doc)]
use crate::infra::Database;

/// In-memory [`Database`] holding the whole [`Listing`] collection.
///
/// Clones share the same collection.
#[derive(Clone, Debug, Default)]
pub struct Memory {
    /// [`Listing`]s in their insertion order.
    listings: Arc<RwLock<Vec<Listing>>>,
}

impl Memory {
    /// Creates a new [`Memory`] holding the provided [`Listing`]s.
    #[must_use]
    pub fn new(listings: impl IntoIterator<Item = Listing>) -> Self {
        Self {
            listings: Arc::new(RwLock::new(listings.into_iter().collect())),
        }
    }

    /// Creates a new [`Memory`] seeded with [`mock::listings()`].
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(mock::listings())
    }
}

/// [`Memory`] database error.
#[derive(Clone, Copy, Debug, Display, StdError)]
pub enum Error {
    /// [`Listing`] with the same ID is stored already.
    #[display("`Listing(id: {_0})` already exists")]
    ListingExists(#[error(not(source))] listing::Id),
}
