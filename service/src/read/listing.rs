//! [`Listing`]-related read definitions.

#[cfg(doc)]
use crate::domain::Listing;

pub mod list {
    //! [`Listing`] list definitions.

    use std::cmp::Ordering;

    use common::define_kind;
    use rust_decimal::Decimal;

    use crate::domain::{listing, Listing};

    /// Selector of a [`Listing`] list.
    #[derive(Clone, Debug, Default)]
    pub struct Selector {
        /// [`Filter`] the [`Listing`]s must match.
        pub filter: Filter,

        /// Order of the selected [`Listing`]s.
        pub sort_by: SortBy,
    }

    impl Selector {
        /// Selects the [`Listing`]s matching the [`Filter`] of this
        /// [`Selector`], ordered by [`SortBy`] with promoted [`Listing`]s
        /// always going first.
        ///
        /// The ordering is stable: [`Listing`]s equal by the sort key keep
        /// their relative input order.
        #[must_use]
        pub fn apply<'a>(
            &self,
            listings: impl IntoIterator<Item = &'a Listing>,
        ) -> Vec<Listing> {
            let mut selected = listings
                .into_iter()
                .filter(|l| self.filter.matches(l))
                .cloned()
                .collect::<Vec<_>>();
            selected.sort_by(|a, b| {
                b.is_promoted()
                    .cmp(&a.is_promoted())
                    .then_with(|| self.sort_by.compare(a, b))
            });
            selected
        }
    }

    /// Filter of a [`Listing`] list.
    ///
    /// Every set field constrains the matching [`Listing`]s, while unset
    /// fields impose no constraint at all.
    #[derive(Clone, Debug, Default)]
    pub struct Filter {
        /// Exact [`listing::Category`] to match.
        pub category: Option<listing::Category>,

        /// Exact [`listing::Brand`] to match.
        pub brand: Option<listing::Brand>,

        /// [`Substring`] of a [`listing::Model`] to match.
        pub model: Option<Substring>,

        /// [`Range`] of a [`listing::Year`] to match.
        pub year: Range<listing::Year>,

        /// [`Range`] of a [`listing::Mileage`] to match.
        ///
        /// [`Listing`]s without mileage never match a bounded [`Range`].
        pub mileage: Range<listing::Mileage>,

        /// [`Range`] of a price amount to match.
        pub price: Range<Decimal>,

        /// Exact [`listing::FuelType`] to match.
        ///
        /// [`Listing`]s without fuel type never match it.
        pub fuel_type: Option<listing::FuelType>,

        /// Exact [`listing::Condition`] to match.
        pub condition: Option<listing::Condition>,

        /// [`Substring`] of a [`listing::Location`] to match.
        pub location: Option<Substring>,
    }

    impl Filter {
        /// Checks whether the provided [`Listing`] matches this [`Filter`].
        #[must_use]
        pub fn matches(&self, listing: &Listing) -> bool {
            let Self {
                category,
                brand,
                model,
                year,
                mileage,
                price,
                fuel_type,
                condition,
                location,
            } = self;

            category.map_or(true, |c| c == listing.category)
                && brand.as_ref().map_or(true, |b| *b == listing.brand)
                && model.as_ref().map_or(true, |m| m.is_in(&listing.model))
                && year.contains(&listing.year)
                && (mileage.is_unbounded()
                    || listing.mileage.is_some_and(|m| mileage.contains(&m)))
                && price.contains(&listing.price.amount)
                && fuel_type.map_or(true, |f| listing.fuel_type == Some(f))
                && condition.map_or(true, |c| c == listing.condition)
                && location
                    .as_ref()
                    .map_or(true, |l| l.is_in(&listing.location))
        }
    }

    /// Inclusive range with optional bounds.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct Range<T> {
        /// Lower bound (inclusive), if any.
        pub min: Option<T>,

        /// Upper bound (inclusive), if any.
        pub max: Option<T>,
    }

    // Not derived to avoid the `T: Default` bound.
    impl<T> Default for Range<T> {
        fn default() -> Self {
            Self {
                min: None,
                max: None,
            }
        }
    }

    impl<T: PartialOrd> Range<T> {
        /// Creates a new [`Range`] with the provided bounds.
        #[must_use]
        pub fn new(min: Option<T>, max: Option<T>) -> Self {
            Self { min, max }
        }

        /// Indicates whether this [`Range`] has no bounds at all.
        #[must_use]
        pub fn is_unbounded(&self) -> bool {
            self.min.is_none() && self.max.is_none()
        }

        /// Checks whether the provided `value` lies within this [`Range`].
        #[must_use]
        pub fn contains(&self, value: &T) -> bool {
            self.min.as_ref().map_or(true, |min| value >= min)
                && self.max.as_ref().map_or(true, |max| value <= max)
        }
    }

    /// Case-insensitive substring pattern.
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub struct Substring(String);

    impl Substring {
        /// Creates a new [`Substring`] pattern.
        #[must_use]
        pub fn new(pattern: impl AsRef<str>) -> Self {
            Self(pattern.as_ref().to_lowercase())
        }

        /// Checks whether this [`Substring`] is contained in the provided
        /// `text`, ignoring case.
        #[must_use]
        pub fn is_in(&self, text: impl AsRef<str>) -> bool {
            text.as_ref().to_lowercase().contains(&self.0)
        }
    }

    define_kind! {
        #[doc = "Order of a [`Listing`] list within a promotion tier."]
        enum SortBy {
            #[doc = "Most recently created first."]
            Newest = 1,

            #[doc = "Cheapest first."]
            PriceAsc = 2,

            #[doc = "Most expensive first."]
            PriceDesc = 3,

            #[doc = "Lowest mileage first, missing mileage counting as zero."]
            MileageAsc = 4,
        }
    }

    impl Default for SortBy {
        fn default() -> Self {
            Self::Newest
        }
    }

    impl SortBy {
        /// Compares the provided [`Listing`]s according to this [`SortBy`].
        #[must_use]
        pub fn compare(self, a: &Listing, b: &Listing) -> Ordering {
            match self {
                Self::Newest => b.created_at.cmp(&a.created_at),
                Self::PriceAsc => a.price.cmp_amount(&b.price),
                Self::PriceDesc => b.price.cmp_amount(&a.price),
                Self::MileageAsc => {
                    a.mileage.unwrap_or(0).cmp(&b.mileage.unwrap_or(0))
                }
            }
        }
    }

    #[cfg(test)]
    mod spec {
        use std::time::Duration;

        use common::{money::Currency, Money};
        use rust_decimal::Decimal;

        use crate::domain::{
            listing::{
                Brand, Category, Condition, FuelType, Location, Model,
                Promotion, PromotionKind,
            },
            Listing,
        };

        use super::{Filter, Range, Selector, SortBy, Substring};

        fn priced(amount: i64, promoted: bool) -> Listing {
            let mut listing = Listing::sample();
            listing.price = Money::new(amount, Currency::Eur);
            if promoted {
                listing.promotion = Some(Promotion {
                    kind: PromotionKind::Featured,
                    expires_at: None,
                });
            }
            listing
        }

        fn aged(listing: Listing, secs: u64) -> Listing {
            Listing {
                created_at: listing.created_at + Duration::from_secs(secs),
                ..listing
            }
        }

        fn prices(listings: &[Listing]) -> Vec<Decimal> {
            listings.iter().map(|l| l.price.amount).collect()
        }

        fn sorted(listings: &[Listing], sort_by: SortBy) -> Vec<Listing> {
            Selector {
                filter: Filter::default(),
                sort_by,
            }
            .apply(listings)
        }

        /// Mixed collection of promoted and regular listings.
        fn collection() -> Vec<Listing> {
            let mut moto = aged(priced(4200, false), 50);
            moto.category = Category::Motorcycle;
            moto.brand = Brand::new("Yamaha").unwrap();
            moto.model = Model::new("MT-07").unwrap();
            moto.mileage = Some(18_000);
            moto.location = Location::new("Marseille").unwrap();

            let mut parts = aged(priced(350, true), 40);
            parts.category = Category::Parts;
            parts.brand = Brand::new("Bosch").unwrap();
            parts.model = Model::new("Alternator 140A").unwrap();
            parts.mileage = None;
            parts.fuel_type = None;
            parts.condition = Condition::New;

            let mut ev = aged(priced(28_500, false), 30);
            ev.brand = Brand::new("Tesla").unwrap();
            ev.model = Model::new("Model 3").unwrap();
            ev.mileage = Some(40_000);
            ev.fuel_type = Some(FuelType::Electric);
            ev.year = 2021;

            let mut wreck = aged(priced(1200, false), 20);
            wreck.condition = Condition::Damaged;
            wreck.mileage = Some(260_000);
            wreck.year = 2004;

            let golf = aged(priced(9500, true), 10);

            vec![moto, parts, ev, wreck, golf]
        }

        #[test]
        fn promoted_first_then_price_ascending() {
            let listings = vec![
                aged(priced(6800, false), 1),
                aged(priced(9500, true), 2),
                aged(priced(28_500, false), 3),
            ];

            let result = sorted(&listings, SortBy::PriceAsc);

            assert_eq!(
                prices(&result),
                [9500_i64, 6800, 28_500].map(Decimal::from),
            );
        }

        #[test]
        fn empty_filter_keeps_everything_in_default_order() {
            let listings = collection();

            let result = Selector::default().apply(&listings);

            assert_eq!(result.len(), listings.len());
            // Promoted newest first, then regular newest first.
            assert_eq!(
                prices(&result),
                [350_i64, 9500, 4200, 28_500, 1200].map(Decimal::from),
            );
        }

        #[test]
        fn promoted_always_precede_regular() {
            let listings = collection();

            for &sort_by in SortBy::ALL {
                let result = sorted(&listings, sort_by);
                let first_regular = result
                    .iter()
                    .position(|l| !l.is_promoted())
                    .unwrap_or(result.len());

                assert!(
                    result[first_regular..].iter().all(|l| !l.is_promoted()),
                    "promoted listing after regular one for {sort_by}",
                );
            }
        }

        #[test]
        fn price_orders_are_monotonic_within_tiers() {
            let listings = collection();

            let asc = sorted(&listings, SortBy::PriceAsc);
            let desc = sorted(&listings, SortBy::PriceDesc);

            for pair in asc.windows(2) {
                if pair[0].is_promoted() == pair[1].is_promoted() {
                    assert!(pair[0].price.amount <= pair[1].price.amount);
                }
            }
            for pair in desc.windows(2) {
                if pair[0].is_promoted() == pair[1].is_promoted() {
                    assert!(pair[0].price.amount >= pair[1].price.amount);
                }
            }
        }

        #[test]
        fn mileage_order_treats_missing_as_zero() {
            let listings = collection();

            let result = sorted(&listings, SortBy::MileageAsc);
            let mileages =
                result.iter().map(|l| l.mileage).collect::<Vec<_>>();

            assert_eq!(
                mileages,
                [
                    None,
                    Some(120_000),
                    Some(18_000),
                    Some(40_000),
                    Some(260_000),
                ],
            );
        }

        #[test]
        fn sorting_is_stable_for_equal_keys() {
            let first = priced(5000, false);
            let second = priced(5000, false);
            let ids = [first.id, second.id];

            let result = sorted(&[first, second], SortBy::PriceAsc);

            assert_eq!([result[0].id, result[1].id], ids);
        }

        #[test]
        fn exact_fields_exclude_different_values() {
            let listings = collection();

            let filter = Filter {
                category: Some(Category::Vehicle),
                condition: Some(Condition::Used),
                ..Filter::default()
            };
            let result = Selector {
                filter: filter.clone(),
                sort_by: SortBy::Newest,
            }
            .apply(&listings);

            assert_eq!(result.len(), 2);
            assert!(result.iter().all(|l| filter.matches(l)));

            let brand = Filter {
                brand: Some(Brand::new("Tesla").unwrap()),
                ..Filter::default()
            };
            assert_eq!(
                listings.iter().filter(|l| brand.matches(l)).count(),
                1,
            );

            let fuel = Filter {
                fuel_type: Some(FuelType::Gasoline),
                ..Filter::default()
            };
            // Listing without fuel type is excluded.
            assert_eq!(listings.iter().filter(|l| fuel.matches(l)).count(), 3);
        }

        #[test]
        fn substrings_match_case_insensitively() {
            let listings = collection();

            let model = Filter {
                model: Some(Substring::new("mODEL")),
                ..Filter::default()
            };
            let location = Filter {
                location: Some(Substring::new("seil")),
                ..Filter::default()
            };
            let empty = Filter {
                model: Some(Substring::new("")),
                ..Filter::default()
            };

            let matched = listings
                .iter()
                .filter(|l| model.matches(l))
                .map(|l| l.model.to_string())
                .collect::<Vec<_>>();
            assert_eq!(matched, ["Model 3"]);
            assert_eq!(
                listings.iter().filter(|l| location.matches(l)).count(),
                1,
            );
            assert_eq!(
                listings.iter().filter(|l| empty.matches(l)).count(),
                listings.len(),
            );
        }

        #[test]
        fn ranges_are_inclusive() {
            let listings = collection();

            let price = Filter {
                price: Range::new(
                    Some(Decimal::from(1200_i64)),
                    Some(Decimal::from(9500_i64)),
                ),
                ..Filter::default()
            };
            let year = Filter {
                year: Range::new(Some(2016), None),
                ..Filter::default()
            };

            let mut matched = listings
                .iter()
                .filter(|l| price.matches(l))
                .map(|l| l.price.amount)
                .collect::<Vec<_>>();
            matched.sort();
            assert_eq!(matched, [1200_i64, 4200, 9500].map(Decimal::from));

            assert!(listings
                .iter()
                .filter(|l| year.matches(l))
                .all(|l| l.year >= 2016));
            assert_eq!(listings.iter().filter(|l| year.matches(l)).count(), 4);
        }

        #[test]
        fn brand_matches_case_sensitively() {
            let listings = collection();

            let count = |brand: &str| {
                let filter = Filter {
                    brand: Some(Brand::new(brand).unwrap()),
                    ..Filter::default()
                };
                listings.iter().filter(|l| filter.matches(l)).count()
            };

            assert_eq!(count("Tesla"), 1);
            assert_eq!(count("tesla"), 0);
            assert_eq!(count("TESLA"), 0);
        }

        #[test]
        fn range_bounds_include_exact_values() {
            let listings = collection();

            let count = |filter: Filter| {
                listings.iter().filter(|l| filter.matches(l)).count()
            };

            let year_max = |max| Filter {
                year: Range::new(None, Some(max)),
                ..Filter::default()
            };
            assert_eq!(count(year_max(2021)), 5);
            assert_eq!(count(year_max(2020)), 4);
            assert_eq!(count(year_max(2004)), 1);
            assert_eq!(count(year_max(2003)), 0);

            let mileage_min = |min| Filter {
                mileage: Range::new(Some(min), None),
                ..Filter::default()
            };
            assert_eq!(count(mileage_min(40_000)), 3);
            assert_eq!(count(mileage_min(40_001)), 2);
            assert_eq!(count(mileage_min(260_000)), 1);
            assert_eq!(count(mileage_min(260_001)), 0);
        }

        #[test]
        fn results_satisfy_all_set_predicates() {
            let listings = collection();
            let (ev, wreck, golf) =
                (listings[2].id, listings[3].id, listings[4].id);

            let narrow = Selector {
                filter: Filter {
                    category: Some(Category::Vehicle),
                    brand: Some(Brand::new("Volkswagen").unwrap()),
                    model: Some(Substring::new("golf")),
                    year: Range::new(Some(2010), Some(2020)),
                    mileage: Range::new(None, Some(200_000)),
                    price: Range::new(
                        Some(Decimal::from(5000_i64)),
                        Some(Decimal::from(10_000_i64)),
                    ),
                    fuel_type: Some(FuelType::Gasoline),
                    condition: Some(Condition::Used),
                    location: Some(Substring::new("LY")),
                },
                sort_by: SortBy::PriceDesc,
            };
            let result = narrow.apply(&listings);

            assert!(result.iter().all(|l| narrow.filter.matches(l)));
            assert_eq!(result.iter().map(|l| l.id).collect::<Vec<_>>(), [golf]);

            let wide = Selector {
                filter: Filter {
                    category: Some(Category::Vehicle),
                    location: Some(Substring::new("lyon")),
                    ..Filter::default()
                },
                sort_by: SortBy::PriceAsc,
            };
            let result = wide.apply(&listings);

            assert!(result.iter().all(|l| wide.filter.matches(l)));
            assert_eq!(
                result.iter().map(|l| l.id).collect::<Vec<_>>(),
                [golf, wreck, ev],
            );
            assert_eq!(
                listings.iter().filter(|l| wide.filter.matches(l)).count(),
                result.len(),
            );
        }

        #[test]
        fn bounded_mileage_excludes_listings_without_mileage() {
            let listings = collection();

            let bounded = Filter {
                mileage: Range::new(None, Some(50_000)),
                ..Filter::default()
            };

            let matched = listings
                .iter()
                .filter(|l| bounded.matches(l))
                .map(|l| l.mileage)
                .collect::<Vec<_>>();
            assert_eq!(matched, [Some(18_000), Some(40_000)]);
        }
    }
}
