//! Category catalog read definitions.

use itertools::Itertools as _;

use crate::domain::{listing::Category, Listing};

/// Number of [`Listing`]s in every [`Category`], used for category browsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Categories(Vec<CategoryCount>);

/// Number of [`Listing`]s in a single [`Category`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CategoryCount {
    /// Counted [`Category`].
    pub category: Category,

    /// Number of [`Listing`]s in the [`Category`].
    pub count: usize,
}

impl Categories {
    /// Counts the provided [`Listing`]s per [`Category`].
    ///
    /// Every [`Category`] is present in the result (in its declaration
    /// order), even if it has no [`Listing`]s.
    #[must_use]
    pub fn tally<'a>(listings: impl IntoIterator<Item = &'a Listing>) -> Self {
        let counts = listings.into_iter().map(|l| l.category).counts();
        Self(
            Category::ALL
                .iter()
                .map(|&category| CategoryCount {
                    category,
                    count: counts.get(&category).copied().unwrap_or(0),
                })
                .collect(),
        )
    }

    /// Returns [`CategoryCount`]s of these [`Categories`].
    #[must_use]
    pub fn counts(&self) -> &[CategoryCount] {
        &self.0
    }

    /// Returns the number of [`Listing`]s in the provided [`Category`].
    #[must_use]
    pub fn count(&self, category: Category) -> usize {
        self.0
            .iter()
            .find(|c| c.category == category)
            .map_or(0, |c| c.count)
    }
}

#[cfg(test)]
mod spec {
    use crate::domain::{listing::Category, Listing};

    use super::Categories;

    #[test]
    fn counts_every_category() {
        let mut moto = Listing::sample();
        moto.category = Category::Motorcycle;
        let listings = [Listing::sample(), moto, Listing::sample()];

        let categories = Categories::tally(&listings);

        assert_eq!(categories.counts().len(), Category::ALL.len());
        assert_eq!(categories.counts()[0].category, Category::Vehicle);
        assert_eq!(categories.count(Category::Vehicle), 2);
        assert_eq!(categories.count(Category::Motorcycle), 1);
        assert_eq!(categories.count(Category::Service), 0);
    }
}
