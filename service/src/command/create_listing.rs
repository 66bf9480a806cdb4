//! [`Command`] for creating a new [`Listing`].

use std::collections::BTreeSet;

use common::{operations::Insert, DateTime, Money};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{listing, user, Listing},
    infra::{database, Database},
    Service,
};

use super::Command;

/// Earliest manufacturing [`listing::Year`] a new [`Listing`] may have.
pub const MIN_YEAR: listing::Year = 1900;

/// [`Command`] for creating a new [`Listing`].
#[derive(Clone, Debug)]
pub struct CreateListing {
    /// ID of the user creating the [`Listing`].
    pub owner_id: user::Id,

    /// [`listing::Category`] of a new [`Listing`].
    pub category: listing::Category,

    /// [`listing::Title`] of a new [`Listing`].
    pub title: listing::Title,

    /// [`listing::Description`] of a new [`Listing`], if any.
    pub description: Option<listing::Description>,

    /// [`listing::Brand`] of a new [`Listing`].
    pub brand: listing::Brand,

    /// [`listing::Model`] of a new [`Listing`].
    pub model: listing::Model,

    /// [`listing::Year`] of a new [`Listing`].
    pub year: listing::Year,

    /// [`listing::Mileage`] of a new [`Listing`], if any.
    pub mileage: Option<listing::Mileage>,

    /// [`listing::FuelType`] of a new [`Listing`], if any.
    pub fuel_type: Option<listing::FuelType>,

    /// [`listing::Condition`] of a new [`Listing`].
    pub condition: listing::Condition,

    /// Asking price of a new [`Listing`].
    pub price: Money,

    /// [`listing::Location`] of a new [`Listing`].
    pub location: listing::Location,

    /// [`listing::ImageRef`]s of a new [`Listing`] in display order.
    pub images: Vec<listing::ImageRef>,

    /// [`listing::Feature`] tags of a new [`Listing`].
    pub features: BTreeSet<listing::Feature>,

    /// [`listing::Promotion`] bought along with a new [`Listing`], if any.
    pub promotion: Option<listing::Promotion>,
}

impl<Db> Command<CreateListing> for Service<Db>
where
    Db: Database<Insert<Listing>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Listing;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CreateListing) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateListing {
            owner_id,
            category,
            title,
            description,
            brand,
            model,
            year,
            mileage,
            fuel_type,
            condition,
            price,
            location,
            images,
            features,
            promotion,
        } = cmd;

        let now = DateTime::now();

        let max_year = now.year() + 1;
        if !(i32::from(MIN_YEAR)..=max_year).contains(&i32::from(year)) {
            return Err(tracerr::new!(E::InvalidYear(year)));
        }
        if price.amount.is_sign_negative() {
            return Err(tracerr::new!(E::NegativePrice(price)));
        }

        let listing = Listing {
            id: listing::Id::new(),
            owner_id,
            category,
            title,
            description,
            brand,
            model,
            year,
            mileage,
            fuel_type,
            condition,
            price,
            location,
            images,
            features,
            promotion,
            views: 0,
            favorites: 0,
            status: listing::ModerationStatus::Pending,
            created_at: now.coerce(),
            updated_at: now.coerce(),
        };

        self.database()
            .execute(Insert(listing.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        log::info!(
            "`Listing(id: {})` created by `User(id: {owner_id})`",
            listing.id,
        );

        Ok(listing)
    }
}

/// Error of [`CreateListing`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`listing::Year`] is out of the allowed range.
    #[display("`{_0}` is not a valid manufacturing year")]
    InvalidYear(#[error(not(source))] listing::Year),

    /// Price is negative.
    #[display("`{_0}` is not a valid price")]
    NegativePrice(#[error(not(source))] Money),
}

#[cfg(test)]
mod spec {
    use std::collections::BTreeSet;

    use common::{money::Currency, Money};

    use crate::{
        domain::{
            listing::{self, Category, Condition, ModerationStatus},
            user,
        },
        infra::Memory,
        query, Query as _, Service,
    };

    use super::{CreateListing, ExecutionError};

    fn form() -> CreateListing {
        CreateListing {
            owner_id: user::Id::new(),
            category: Category::Motorcycle,
            title: listing::Title::new("Honda CB500F").unwrap(),
            description: listing::Description::new("First owner."),
            brand: listing::Brand::new("Honda").unwrap(),
            model: listing::Model::new("CB500F").unwrap(),
            year: 2020,
            mileage: Some(9_800),
            fuel_type: Some(listing::FuelType::Gasoline),
            condition: Condition::Used,
            price: Money::new(5200_i64, Currency::Eur),
            location: listing::Location::new("Nantes").unwrap(),
            images: vec![listing::ImageRef::new("blob:front").unwrap()],
            features: BTreeSet::from([listing::Feature::new("ABS").unwrap()]),
            promotion: None,
        }
    }

    #[tokio::test]
    async fn creates_pending_listing() {
        let service = Service::new(Memory::default());
        let form = form();

        let created = service.execute(form.clone()).await.unwrap();
        let stored = service
            .execute(query::listing::ById::by(created.id))
            .await
            .unwrap()
            .expect("stored");

        assert_eq!(stored.id, created.id);
        assert_eq!(stored.owner_id, form.owner_id);
        assert_eq!(stored.status, ModerationStatus::Pending);
        assert_eq!(stored.views, 0);
        assert_eq!(stored.favorites, 0);
        assert_eq!(stored.created_at.coerce::<()>(), stored.updated_at.coerce());
        assert!(!stored.is_promoted());
    }

    #[tokio::test]
    async fn rejects_invalid_year() {
        let service = Service::new(Memory::default());

        let err = service
            .execute(CreateListing {
                year: 1885,
                ..form()
            })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::InvalidYear(1885)));
    }

    #[tokio::test]
    async fn rejects_negative_price() {
        let service = Service::new(Memory::default());

        let err = service
            .execute(CreateListing {
                price: Money::new(-1_i64, Currency::Eur),
                ..form()
            })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::NegativePrice(_)));
    }
}
