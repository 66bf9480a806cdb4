//! [`Listing`] definitions.

use std::collections::BTreeSet;

#[cfg(doc)]
use common::DateTime;
use common::{define_kind, unit, DateTimeOf, Money};
use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::user;

/// Vehicle, part or service offered for sale.
#[derive(Clone, Debug)]
pub struct Listing {
    /// ID of this [`Listing`].
    pub id: Id,

    /// ID of the user owning this [`Listing`].
    pub owner_id: user::Id,

    /// [`Category`] of this [`Listing`].
    pub category: Category,

    /// [`Title`] of this [`Listing`].
    pub title: Title,

    /// [`Description`] of this [`Listing`], if any.
    pub description: Option<Description>,

    /// [`Brand`] of the offered item.
    pub brand: Brand,

    /// [`Model`] of the offered item.
    pub model: Model,

    /// Manufacturing [`Year`] of the offered item.
    pub year: Year,

    /// [`Mileage`] of the offered item, if applicable.
    pub mileage: Option<Mileage>,

    /// [`FuelType`] of the offered item, if applicable.
    pub fuel_type: Option<FuelType>,

    /// [`Condition`] of the offered item.
    pub condition: Condition,

    /// Asking price.
    pub price: Money,

    /// [`Location`] where the offered item can be seen.
    pub location: Location,

    /// [`ImageRef`]s of this [`Listing`] in display order.
    pub images: Vec<ImageRef>,

    /// [`Feature`] tags of the offered item.
    pub features: BTreeSet<Feature>,

    /// [`Promotion`] bought for this [`Listing`], if any.
    pub promotion: Option<Promotion>,

    /// Number of times this [`Listing`] was viewed.
    pub views: Counter,

    /// Number of users who marked this [`Listing`] as favorite.
    pub favorites: Counter,

    /// [`ModerationStatus`] of this [`Listing`].
    pub status: ModerationStatus,

    /// [`DateTime`] when this [`Listing`] was created.
    pub created_at: CreationDateTime,

    /// [`DateTime`] when this [`Listing`] was last updated.
    pub updated_at: UpdateDateTime,
}

impl Listing {
    /// Indicates whether this [`Listing`] is promoted.
    #[must_use]
    pub fn is_promoted(&self) -> bool {
        self.promotion.is_some()
    }
}

/// ID of a [`Listing`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Defines a validated text newtype of a [`Listing`].
macro_rules! define_text {
    ($(#[doc = $doc:literal] $name:ident(max = $max:literal);)*) => {$(
        #[doc = $doc]
        #[derive(AsRef, Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
        #[as_ref(forward)]
        pub struct $name(String);

        impl $name {
            #[doc = concat!("Creates a new [`", stringify!($name), "`] if the given `text` is valid.")]
            #[must_use]
            pub fn new(text: impl Into<String>) -> Option<Self> {
                let text = text.into();
                Self::check(&text).then_some(Self(text))
            }

            #[doc = concat!("Checks whether the given `text` is a valid [`", stringify!($name), "`].")]
            fn check(text: impl AsRef<str>) -> bool {
                let text = text.as_ref();
                text.trim() == text && !text.is_empty() && text.len() <= $max
            }
        }

        impl FromStr for $name {
            type Err = &'static str;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s).ok_or(concat!("invalid `", stringify!($name), "`"))
            }
        }
    )*};
}

define_text! {
    #[doc = "Title of a [`Listing`]."]
    Title(max = 128);

    #[doc = "Free-form description of a [`Listing`]."]
    Description(max = 4096);

    #[doc = "Brand (make) of an item offered by a [`Listing`]."]
    Brand(max = 64);

    #[doc = "Model of an item offered by a [`Listing`]."]
    Model(max = 128);

    #[doc = "Location of an item offered by a [`Listing`]."]
    Location(max = 256);

    #[doc = "Reference to an image of a [`Listing`]."]
    ImageRef(max = 2048);

    #[doc = "Feature tag of an item offered by a [`Listing`]."]
    Feature(max = 64);
}

/// Manufacturing year of an item offered by a [`Listing`].
pub type Year = u16;

/// Mileage (in kilometers) of an item offered by a [`Listing`].
pub type Mileage = u32;

/// Counter of [`Listing`] interactions.
pub type Counter = u32;

define_kind! {
    #[doc = "Category of a [`Listing`]."]
    enum Category {
        #[doc = "A passenger car."]
        Vehicle = 1,

        #[doc = "A motorcycle."]
        Motorcycle = 2,

        #[doc = "A scooter."]
        Scooter = 3,

        #[doc = "A quad bike."]
        Quad = 4,

        #[doc = "A utility vehicle or van."]
        Utility = 5,

        #[doc = "Spare parts."]
        Parts = 6,

        #[doc = "Anything not fitting other categories."]
        Other = 7,

        #[doc = "A service (repair, transport, etc.)."]
        Service = 8,
    }
}

define_kind! {
    #[doc = "Fuel type of an item offered by a [`Listing`]."]
    enum FuelType {
        #[doc = "Gasoline (petrol)."]
        Gasoline = 1,

        #[doc = "Diesel."]
        Diesel = 2,

        #[doc = "Electric."]
        Electric = 3,

        #[doc = "Hybrid."]
        Hybrid = 4,

        #[doc = "Liquefied petroleum gas."]
        Lpg = 5,
    }
}

define_kind! {
    #[doc = "Condition of an item offered by a [`Listing`]."]
    enum Condition {
        #[doc = "Brand new."]
        New = 1,

        #[doc = "Used."]
        Used = 2,

        #[doc = "Damaged."]
        Damaged = 3,
    }
}

define_kind! {
    #[doc = "Moderation status of a [`Listing`]."]
    enum ModerationStatus {
        #[doc = "Awaiting moderation."]
        Pending = 1,

        #[doc = "Approved by a moderator."]
        Approved = 2,

        #[doc = "Rejected by a moderator."]
        Rejected = 3,
    }
}

define_kind! {
    #[doc = "Kind of a [`Promotion`]."]
    enum PromotionKind {
        #[doc = "Shown in the featured block."]
        Featured = 1,

        #[doc = "Pinned to the top of search results."]
        Top = 2,

        #[doc = "Visually highlighted in search results."]
        Highlighted = 3,
    }
}

/// Paid promotion of a [`Listing`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Promotion {
    /// [`PromotionKind`] of this [`Promotion`].
    pub kind: PromotionKind,

    /// [`DateTime`] when this [`Promotion`] expires, if ever.
    pub expires_at: Option<PromotionExpirationDateTime>,
}

/// [`DateTime`] when a [`Listing`] was created.
pub type CreationDateTime = DateTimeOf<(Listing, unit::Creation)>;

/// [`DateTime`] when a [`Listing`] was last updated.
pub type UpdateDateTime = DateTimeOf<(Listing, unit::Update)>;

/// [`DateTime`] when a [`Promotion`] expires.
pub type PromotionExpirationDateTime =
    DateTimeOf<(Promotion, unit::Expiration)>;

#[cfg(test)]
impl Listing {
    /// Creates a used gasoline car [`Listing`] owned by a random user.
    pub(crate) fn sample() -> Self {
        let created_at = DateTimeOf::from_unix_timestamp(1_700_000_000)
            .expect("valid timestamp");
        Self {
            id: Id::new(),
            owner_id: user::Id::new(),
            category: Category::Vehicle,
            title: Title::new("Volkswagen Golf 1.4 TSI").unwrap(),
            description: None,
            brand: Brand::new("Volkswagen").unwrap(),
            model: Model::new("Golf").unwrap(),
            year: 2016,
            mileage: Some(120_000),
            fuel_type: Some(FuelType::Gasoline),
            condition: Condition::Used,
            price: Money::new(9500_i64, common::money::Currency::Eur),
            location: Location::new("Lyon").unwrap(),
            images: Vec::new(),
            features: BTreeSet::new(),
            promotion: None,
            views: 0,
            favorites: 0,
            status: ModerationStatus::Approved,
            created_at,
            updated_at: created_at.coerce(),
        }
    }
}

#[cfg(test)]
mod spec {
    use super::{Brand, Category, FuelType, Title};

    #[test]
    fn validates_text() {
        assert!(Title::new("Audi A4 Avant").is_some());
        assert!(Title::new("").is_none());
        assert!(Title::new(" padded ").is_none());
        assert!(Title::new("x".repeat(129)).is_none());
        assert!("Yamaha".parse::<Brand>().is_ok());
        assert_eq!("".parse::<Brand>().unwrap_err(), "invalid `Brand`");
    }

    #[test]
    fn parses_kinds_case_insensitively() {
        assert_eq!("motorcycle".parse::<Category>().unwrap(), Category::Motorcycle);
        assert_eq!("LPG".parse::<FuelType>().unwrap(), FuelType::Lpg);
        assert_eq!(Category::Parts.to_string(), "PARTS");
        assert_eq!(Category::ALL.len(), 8);
        assert!("hovercraft".parse::<Category>().is_err());
    }
}
