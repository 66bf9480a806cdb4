//! [`Command`] definition.

pub mod create_listing;
pub mod delete_listing;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    create_listing::CreateListing, delete_listing::DeleteListing,
};
