//! [`Listing`]-related [`Memory`] implementations.

use common::operations::{By, Delete, Insert, Select};
use tracerr::Traced;

use crate::{
    domain::{listing, user, Listing},
    infra::{
        database::{self, memory, Memory},
        Database,
    },
    read::{self, listing::list},
};

impl Database<Select<By<Vec<Listing>, list::Selector>>> for Memory {
    type Ok = Vec<Listing>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Listing>, list::Selector>>,
    ) -> Result<Self::Ok, Self::Err> {
        let selector = by.into_inner();
        Ok(selector.apply(self.listings.read().await.iter()))
    }
}

impl Database<Select<By<Vec<Listing>, user::Id>>> for Memory {
    type Ok = Vec<Listing>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Listing>, user::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let owner_id = by.into_inner();

        let mut owned = self
            .listings
            .read()
            .await
            .iter()
            .filter(|l| l.owner_id == owner_id)
            .cloned()
            .collect::<Vec<_>>();
        owned.sort_by(|a, b| list::SortBy::Newest.compare(a, b));

        Ok(owned)
    }
}

impl Database<Select<By<Option<Listing>, listing::Id>>> for Memory {
    type Ok = Option<Listing>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Listing>, listing::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self
            .listings
            .read()
            .await
            .iter()
            .find(|l| l.id == id)
            .cloned())
    }
}

impl Database<Select<By<read::catalog::Categories, ()>>> for Memory {
    type Ok = read::catalog::Categories;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<read::catalog::Categories, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(read::catalog::Categories::tally(
            self.listings.read().await.iter(),
        ))
    }
}

impl Database<Select<By<read::dashboard::Stats, user::Id>>> for Memory {
    type Ok = read::dashboard::Stats;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<read::dashboard::Stats, user::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let owner_id = by.into_inner();
        Ok(read::dashboard::Stats::collect(
            self.listings
                .read()
                .await
                .iter()
                .filter(|l| l.owner_id == owner_id),
        ))
    }
}

impl Database<Insert<Listing>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(listing): Insert<Listing>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut listings = self.listings.write().await;
        if listings.iter().any(|l| l.id == listing.id) {
            return Err(tracerr::new!(database::Error::from(
                memory::Error::ListingExists(listing.id)
            )));
        }
        listings.push(listing);
        Ok(())
    }
}

impl Database<Delete<By<Listing, listing::Id>>> for Memory {
    type Ok = Option<Listing>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Listing, listing::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();

        let mut listings = self.listings.write().await;
        Ok(listings
            .iter()
            .position(|l| l.id == id)
            .map(|idx| listings.remove(idx)))
    }
}
