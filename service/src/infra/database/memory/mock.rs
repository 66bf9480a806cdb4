//! Mock [`Listing`]s the [`Memory`] database is seeded with.

use std::{collections::BTreeSet, fmt, str::FromStr};

use common::{money::Currency, DateTimeOf, Money};
use uuid::Uuid;

#[cfg(doc)]
use crate::infra::Memory;
use crate::domain::{
    listing::{
        self, Category, Condition, FuelType, ModerationStatus, Promotion,
        PromotionKind,
    },
    user, Listing,
};

/// Unix timestamp the mock [`Listing`]s are created relative to.
const EPOCH: i64 = 1_717_200_000;

/// Returns the ID of the mock user owning most of the mock [`Listing`]s.
#[must_use]
pub fn owner() -> user::Id {
    Uuid::from_u128(0x0a11_ce00).into()
}

/// Returns the ID of the mock user owning the rest of the mock
/// [`Listing`]s.
#[must_use]
pub fn other_owner() -> user::Id {
    Uuid::from_u128(0x0b0b_0000).into()
}

/// Returns the ID of the `n`th mock [`Listing`].
#[must_use]
pub fn listing_id(n: u8) -> listing::Id {
    Uuid::from_u128(0x1157_0000 + u128::from(n)).into()
}

/// Shorthand description of a mock [`Listing`].
struct Entry {
    owner: fn() -> user::Id,
    category: Category,
    title: &'static str,
    brand: &'static str,
    model: &'static str,
    year: listing::Year,
    mileage: Option<listing::Mileage>,
    fuel_type: Option<FuelType>,
    condition: Condition,
    price: i64,
    location: &'static str,
    features: &'static [&'static str],
    promotion: Option<PromotionKind>,
    status: ModerationStatus,
    views: listing::Counter,
    favorites: listing::Counter,
    /// Hour (counted from [`EPOCH`]) the [`Listing`] was created at.
    hour: i64,
}

/// Returns the mock [`Listing`]s collection.
#[must_use]
pub fn listings() -> Vec<Listing> {
    ENTRIES
        .iter()
        .zip(1..)
        .map(|(entry, n)| entry.to_listing(listing_id(n)))
        .collect()
}

impl Entry {
    /// Builds a [`Listing`] with the provided ID out of this [`Entry`].
    fn to_listing(&self, id: listing::Id) -> Listing {
        let created_at = DateTimeOf::from_unix_timestamp(EPOCH + self.hour * 3600)
            .unwrap_or(DateTimeOf::UNIX_EPOCH);

        Listing {
            id,
            owner_id: (self.owner)(),
            category: self.category,
            title: text(self.title),
            description: None,
            brand: text(self.brand),
            model: text(self.model),
            year: self.year,
            mileage: self.mileage,
            fuel_type: self.fuel_type,
            condition: self.condition,
            price: Money::new(self.price, Currency::Eur),
            location: text(self.location),
            images: vec![text(&format!("/static/listings/{id}/1.jpg"))],
            features: self
                .features
                .iter()
                .copied()
                .map(text)
                .collect::<BTreeSet<_>>(),
            promotion: self.promotion.map(|kind| Promotion {
                kind,
                expires_at: None,
            }),
            views: self.views,
            favorites: self.favorites,
            status: self.status,
            created_at,
            updated_at: created_at.coerce(),
        }
    }
}

/// Parses the provided mock text into its domain type.
fn text<T>(s: &str) -> T
where
    T: FromStr<Err: fmt::Display>,
{
    s.parse()
        .unwrap_or_else(|e| panic!("invalid mock text `{s}`: {e}"))
}

/// Mock [`Listing`]s in their insertion order.
const ENTRIES: &[Entry] = &[
    Entry {
        owner,
        category: Category::Vehicle,
        title: "Volkswagen Golf VII 1.4 TSI Highline",
        brand: "Volkswagen",
        model: "Golf VII",
        year: 2016,
        mileage: Some(118_000),
        fuel_type: Some(FuelType::Gasoline),
        condition: Condition::Used,
        price: 9500,
        location: "Lyon, Rhône",
        features: &["Air conditioning", "Cruise control", "Parking sensors"],
        promotion: Some(PromotionKind::Featured),
        status: ModerationStatus::Approved,
        views: 1342,
        favorites: 48,
        hour: 2,
    },
    Entry {
        owner: other_owner,
        category: Category::Vehicle,
        title: "Peugeot 208 Active 1.2 PureTech",
        brand: "Peugeot",
        model: "208",
        year: 2017,
        mileage: Some(86_500),
        fuel_type: Some(FuelType::Gasoline),
        condition: Condition::Used,
        price: 6800,
        location: "Bordeaux, Gironde",
        features: &["Bluetooth"],
        promotion: None,
        status: ModerationStatus::Approved,
        views: 521,
        favorites: 12,
        hour: 30,
    },
    Entry {
        owner,
        category: Category::Vehicle,
        title: "Tesla Model 3 Long Range AWD",
        brand: "Tesla",
        model: "Model 3",
        year: 2021,
        mileage: Some(42_000),
        fuel_type: Some(FuelType::Electric),
        condition: Condition::Used,
        price: 28_500,
        location: "Paris, Île-de-France",
        features: &["Autopilot", "Heated seats", "Panoramic roof"],
        promotion: None,
        status: ModerationStatus::Approved,
        views: 2210,
        favorites: 97,
        hour: 12,
    },
    Entry {
        owner: other_owner,
        category: Category::Motorcycle,
        title: "Yamaha MT-07 ABS",
        brand: "Yamaha",
        model: "MT-07",
        year: 2019,
        mileage: Some(15_300),
        fuel_type: Some(FuelType::Gasoline),
        condition: Condition::Used,
        price: 5400,
        location: "Marseille, Bouches-du-Rhône",
        features: &["ABS", "LED lights"],
        promotion: Some(PromotionKind::Top),
        status: ModerationStatus::Approved,
        views: 804,
        favorites: 31,
        hour: 20,
    },
    Entry {
        owner,
        category: Category::Scooter,
        title: "Piaggio Vespa Primavera 125",
        brand: "Piaggio",
        model: "Vespa Primavera",
        year: 2022,
        mileage: Some(3_100),
        fuel_type: Some(FuelType::Gasoline),
        condition: Condition::New,
        price: 4100,
        location: "Nice, Alpes-Maritimes",
        features: &[],
        promotion: None,
        status: ModerationStatus::Pending,
        views: 12,
        favorites: 0,
        hour: 40,
    },
    Entry {
        owner: other_owner,
        category: Category::Quad,
        title: "Polaris Sportsman 570 EPS",
        brand: "Polaris",
        model: "Sportsman 570",
        year: 2020,
        mileage: None,
        fuel_type: Some(FuelType::Gasoline),
        condition: Condition::Damaged,
        price: 3900,
        location: "Toulouse, Haute-Garonne",
        features: &["Winch"],
        promotion: None,
        status: ModerationStatus::Approved,
        views: 230,
        favorites: 4,
        hour: 55,
    },
    Entry {
        owner,
        category: Category::Utility,
        title: "Renault Master L2H2 dCi 135",
        brand: "Renault",
        model: "Master",
        year: 2018,
        mileage: Some(164_000),
        fuel_type: Some(FuelType::Diesel),
        condition: Condition::Used,
        price: 14_900,
        location: "Lille, Nord",
        features: &["Roof rack", "Tow bar"],
        promotion: None,
        status: ModerationStatus::Rejected,
        views: 77,
        favorites: 1,
        hour: 70,
    },
    Entry {
        owner: other_owner,
        category: Category::Parts,
        title: "Bosch alternator 140A for VW/Audi",
        brand: "Bosch",
        model: "Alternator 140A",
        year: 2015,
        mileage: None,
        fuel_type: None,
        condition: Condition::Used,
        price: 120,
        location: "Lyon, Rhône",
        features: &[],
        promotion: None,
        status: ModerationStatus::Approved,
        views: 64,
        favorites: 2,
        hour: 8,
    },
    Entry {
        owner: other_owner,
        category: Category::Service,
        title: "Mobile tyre fitting, any size",
        brand: "TyrePro",
        model: "Mobile fitting",
        year: 2024,
        mileage: None,
        fuel_type: None,
        condition: Condition::New,
        price: 45,
        location: "Paris, Île-de-France",
        features: &["Home service"],
        promotion: Some(PromotionKind::Highlighted),
        status: ModerationStatus::Approved,
        views: 390,
        favorites: 9,
        hour: 5,
    },
];

#[cfg(test)]
mod spec {
    use std::collections::HashSet;

    use super::{listing_id, listings, owner};

    #[test]
    fn mock_listings_are_valid_and_unique() {
        let listings = listings();

        let ids = listings.iter().map(|l| l.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), listings.len());
        assert_eq!(listings[0].id, listing_id(1));
        assert!(listings.iter().any(|l| l.owner_id == owner()));
        assert!(listings.iter().any(|l| l.is_promoted()));
    }
}
