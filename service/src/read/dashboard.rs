//! Owner dashboard read definitions.

use crate::domain::{listing::ModerationStatus, Listing};

/// Statistics of a user's [`Listing`]s shown on their dashboard.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Stats {
    /// Total number of [`Listing`]s.
    pub total: usize,

    /// Number of [`Listing`]s awaiting moderation.
    pub pending: usize,

    /// Number of approved [`Listing`]s.
    pub approved: usize,

    /// Number of rejected [`Listing`]s.
    pub rejected: usize,

    /// Number of promoted [`Listing`]s.
    pub promoted: usize,

    /// Summed views of all the [`Listing`]s.
    pub views: u64,

    /// Summed favorites of all the [`Listing`]s.
    pub favorites: u64,
}

impl Stats {
    /// Collects [`Stats`] of the provided [`Listing`]s.
    #[must_use]
    pub fn collect<'a>(listings: impl IntoIterator<Item = &'a Listing>) -> Self {
        listings.into_iter().fold(Self::default(), |mut stats, l| {
            stats.total += 1;
            match l.status {
                ModerationStatus::Pending => stats.pending += 1,
                ModerationStatus::Approved => stats.approved += 1,
                ModerationStatus::Rejected => stats.rejected += 1,
            }
            if l.is_promoted() {
                stats.promoted += 1;
            }
            stats.views += u64::from(l.views);
            stats.favorites += u64::from(l.favorites);
            stats
        })
    }
}

#[cfg(test)]
mod spec {
    use crate::domain::{
        listing::{ModerationStatus, Promotion, PromotionKind},
        Listing,
    };

    use super::Stats;

    #[test]
    fn sums_counters_and_statuses() {
        let mut pending = Listing::sample();
        pending.status = ModerationStatus::Pending;
        pending.views = 10;
        pending.favorites = 2;
        let mut promoted = Listing::sample();
        promoted.views = 250;
        promoted.favorites = 17;
        promoted.promotion = Some(Promotion {
            kind: PromotionKind::Top,
            expires_at: None,
        });

        let stats = Stats::collect(&[pending, promoted]);

        assert_eq!(
            stats,
            Stats {
                total: 2,
                pending: 1,
                approved: 1,
                rejected: 0,
                promoted: 1,
                views: 260,
                favorites: 19,
            },
        );
    }

    #[test]
    fn empty_dashboard() {
        assert_eq!(Stats::collect(&[]), Stats::default());
    }
}
