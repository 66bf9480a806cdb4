//! [`Action`] execution.

use std::collections::BTreeSet;

use common::{money::Currency, Money};
use itertools::Itertools as _;
use service::{
    command::{CreateListing, DeleteListing},
    domain::{listing, Listing},
    query,
    read::listing::list::{Filter, Range, Selector, Substring},
    Query as _,
};
use tracing as log;

use crate::{
    args::{Action, Browse, Create},
    error::{AsError, LookupError},
    Error, Service,
};

/// Performs the provided [`Action`] over the [`Service`], printing its
/// outcome.
///
/// # Errors
///
/// Errors if the [`Action`] fails.
pub async fn perform(
    service: &Service,
    action: Action,
    currency: Currency,
) -> Result<(), Error> {
    match action {
        Action::Browse(browse) => {
            let selector = Selector::from(browse);
            log::debug!("browsing listings by {selector:?}");

            let listings = service
                .execute(query::listings::List::by(selector))
                .await
                .map_err(AsError::into_error)?;
            for listing in &listings {
                println!("{}", summary(listing));
            }
            println!("{} listing(s) found", listings.len());
        }
        Action::Show { id } => {
            let listing = service
                .execute(query::listing::ById::by(id))
                .await
                .map_err(AsError::into_error)?
                .ok_or(LookupError::ListingNotFound)?;
            println!("{}", details(&listing));
        }
        Action::Categories => {
            let categories = service
                .execute(query::catalog::Categories::by(()))
                .await
                .map_err(AsError::into_error)?;
            for c in categories.counts() {
                println!("{:<12} {}", c.category, c.count);
            }
        }
        Action::Dashboard { owner } => {
            let stats = service
                .execute(query::dashboard::Stats::by(owner))
                .await
                .map_err(AsError::into_error)?;
            let listings = service
                .execute(query::listings::ByOwner::by(owner))
                .await
                .map_err(AsError::into_error)?;

            println!(
                "listings: {} (pending: {}, approved: {}, rejected: {}, \
                 promoted: {})",
                stats.total,
                stats.pending,
                stats.approved,
                stats.rejected,
                stats.promoted,
            );
            println!("views: {}, favorites: {}", stats.views, stats.favorites);
            for listing in &listings {
                println!("{} [{}]", summary(listing), listing.status);
            }
        }
        Action::Create(create) => {
            let listing = service
                .execute(create.into_command(currency))
                .await
                .map_err(AsError::into_error)?;
            println!("{}", details(&listing));
        }
        Action::Delete { id, owner } => {
            let deleted = service
                .execute(DeleteListing {
                    listing_id: id,
                    initiator_id: owner,
                })
                .await
                .map_err(AsError::into_error)?;
            let remaining = service
                .execute(query::listings::List::by(Selector::default()))
                .await
                .map_err(AsError::into_error)?;
            println!("deleted: {}", summary(&deleted));
            println!("{} listing(s) remaining", remaining.len());
        }
    }
    Ok(())
}

impl From<Browse> for Selector {
    fn from(browse: Browse) -> Self {
        let Browse {
            category,
            brand,
            model,
            year_min,
            year_max,
            mileage_min,
            mileage_max,
            price_min,
            price_max,
            fuel,
            condition,
            location,
            sort,
        } = browse;

        Self {
            filter: Filter {
                category,
                brand,
                model: model.map(Substring::new),
                year: Range::new(year_min, year_max),
                mileage: Range::new(mileage_min, mileage_max),
                price: Range::new(price_min, price_max),
                fuel_type: fuel,
                condition,
                location: location.map(Substring::new),
            },
            sort_by: sort,
        }
    }
}

impl Create {
    /// Converts this [`Create`] form into a [`CreateListing`] command with
    /// the price in the provided [`Currency`].
    #[must_use]
    pub fn into_command(self, currency: Currency) -> CreateListing {
        let Self {
            owner,
            category,
            title,
            description,
            brand,
            model,
            year,
            mileage,
            fuel,
            condition,
            price,
            location,
            images,
            features,
            promotion,
        } = self;

        CreateListing {
            owner_id: owner,
            category,
            title,
            description,
            brand,
            model,
            year,
            mileage,
            fuel_type: fuel,
            condition,
            price: Money::new(price, currency),
            location,
            images,
            features: features.into_iter().collect::<BTreeSet<_>>(),
            promotion: promotion.map(|kind| listing::Promotion {
                kind,
                expires_at: None,
            }),
        }
    }
}

/// Renders a single line summary of the provided [`Listing`].
fn summary(listing: &Listing) -> String {
    format!(
        "{}{} | {} {} {} | {} | {}",
        if listing.is_promoted() { "* " } else { "" },
        listing.id,
        listing.brand,
        listing.model,
        listing.year,
        listing.price,
        listing.location,
    )
}

/// Renders all the details of the provided [`Listing`].
fn details(listing: &Listing) -> String {
    let mileage = listing
        .mileage
        .map_or_else(|| "-".to_owned(), |m| format!("{m} km"));
    let fuel = listing
        .fuel_type
        .map_or_else(|| "-".to_owned(), |f| f.to_string());
    let promotion = listing
        .promotion
        .as_ref()
        .map_or_else(|| "-".to_owned(), |p| p.kind.to_string());

    format!(
        "{title}\n\
         id:          {id}\n\
         owner:       {owner}\n\
         category:    {category}\n\
         vehicle:     {brand} {model} ({year})\n\
         mileage:     {mileage}\n\
         fuel:        {fuel}\n\
         condition:   {condition}\n\
         price:       {price}\n\
         location:    {location}\n\
         features:    {features}\n\
         images:      {images}\n\
         promotion:   {promotion}\n\
         status:      {status}\n\
         views:       {views}\n\
         favorites:   {favorites}\n\
         created at:  {created_at}\n\
         description: {description}",
        title = listing.title,
        id = listing.id,
        owner = listing.owner_id,
        category = listing.category,
        brand = listing.brand,
        model = listing.model,
        year = listing.year,
        condition = listing.condition,
        price = listing.price,
        location = listing.location,
        features = listing.features.iter().join(", "),
        images = listing.images.iter().join(", "),
        status = listing.status,
        views = listing.views,
        favorites = listing.favorites,
        created_at = listing.created_at.to_rfc3339(),
        description = listing
            .description
            .as_ref()
            .map_or_else(|| "-".to_owned(), ToString::to_string),
    )
}
