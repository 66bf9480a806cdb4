//! [`Command`] for deleting a [`Listing`] from its owner dashboard.

use common::operations::{By, Delete, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{listing, user, Listing},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for deleting a [`Listing`].
#[derive(Clone, Copy, Debug)]
pub struct DeleteListing {
    /// ID of the [`Listing`] to be deleted.
    pub listing_id: listing::Id,

    /// ID of the user who deletes the [`Listing`].
    pub initiator_id: user::Id,
}

impl<Db> Command<DeleteListing> for Service<Db>
where
    Db: Database<
            Select<By<Option<Listing>, listing::Id>>,
            Ok = Option<Listing>,
            Err = Traced<database::Error>,
        > + Database<
            Delete<By<Listing, listing::Id>>,
            Ok = Option<Listing>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = Listing;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: DeleteListing) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteListing {
            listing_id,
            initiator_id,
        } = cmd;

        let listing = self
            .database()
            .execute(Select(By::<Option<Listing>, _>::new(listing_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ListingNotExists(listing_id))
            .map_err(tracerr::wrap!())?;

        if listing.owner_id != initiator_id {
            return Err(tracerr::new!(E::NotListingOwner(
                listing_id,
                initiator_id,
            )));
        }

        let deleted = self
            .database()
            .execute(Delete(By::<Listing, _>::new(listing_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ListingNotExists(listing_id))
            .map_err(tracerr::wrap!())?;

        log::info!(
            "`Listing(id: {listing_id})` deleted by `User(id: {initiator_id})`",
        );

        Ok(deleted)
    }
}

/// Error of [`DeleteListing`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Listing`] with the provided ID does not exist.
    #[display("`Listing(id: {_0})` does not exist")]
    ListingNotExists(#[error(not(source))] listing::Id),

    /// [`Listing`] is not owned by the initiator.
    #[display("`Listing(id: {_0})` is not owned by `User(id: {_1})`")]
    NotListingOwner(listing::Id, user::Id),
}

#[cfg(test)]
mod spec {
    use crate::{
        domain::listing::Category,
        infra::{database::memory::mock, Memory},
        query, read, Query as _, Service,
    };

    use super::{DeleteListing, ExecutionError};

    #[tokio::test]
    async fn deletes_owned_listing_only() {
        let service = Service::new(Memory::seeded());
        let before = service
            .execute(query::listings::List::by(
                read::listing::list::Selector::default(),
            ))
            .await
            .unwrap();

        let deleted = service
            .execute(DeleteListing {
                listing_id: mock::listing_id(1),
                initiator_id: mock::owner(),
            })
            .await
            .unwrap();
        let after = service
            .execute(query::listings::List::by(
                read::listing::list::Selector::default(),
            ))
            .await
            .unwrap();

        assert_eq!(deleted.id, mock::listing_id(1));
        assert_eq!(after.len(), before.len() - 1);
        assert_eq!(
            after.iter().map(|l| l.id).collect::<Vec<_>>(),
            before
                .iter()
                .map(|l| l.id)
                .filter(|id| *id != deleted.id)
                .collect::<Vec<_>>(),
        );
        assert!(service
            .execute(query::listing::ById::by(deleted.id))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn refuses_foreign_listing() {
        let service = Service::new(Memory::seeded());

        let err = service
            .execute(DeleteListing {
                listing_id: mock::listing_id(2),
                initiator_id: mock::owner(),
            })
            .await
            .unwrap_err();
        let categories = service
            .execute(query::catalog::Categories::by(()))
            .await
            .unwrap();

        assert!(matches!(err.as_ref(), ExecutionError::NotListingOwner(..)));
        assert_eq!(categories.count(Category::Vehicle), 3);
    }

    #[tokio::test]
    async fn fails_on_absent_listing() {
        let service = Service::new(Memory::default());

        let err = service
            .execute(DeleteListing {
                listing_id: mock::listing_id(1),
                initiator_id: mock::owner(),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::ListingNotExists(id) if *id == mock::listing_id(1),
        ));
    }
}
