//! [`Args`] definitions.

use std::ffi::OsString;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use service::domain::{listing, user};

/// Vehicle and parts marketplace listings over mock data.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Action to perform.
    #[command(subcommand)]
    pub action: Action,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// [`None`] is returned once the requested help or version is printed.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Option<Self>, clap::Error> {
        Self::parse_from(std::env::args_os())
    }

    /// Parses the provided command line arguments.
    ///
    /// [`None`] is returned once the requested help or version is printed.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse the provided arguments.
    pub fn parse_from<I, T>(args: I) -> Result<Option<Self>, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match <Self as Parser>::try_parse_from(args) {
            Ok(args) => Ok(Some(args)),
            Err(e) if !e.use_stderr() => {
                e.print()?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

/// Action performed over the listings.
#[derive(Debug, Subcommand)]
pub enum Action {
    /// Browse listings matching the provided filter.
    Browse(Browse),

    /// Show a single listing.
    Show {
        /// ID of the listing to show.
        id: listing::Id,
    },

    /// Show number of listings in every category.
    Categories,

    /// Show the dashboard of a listings owner.
    Dashboard {
        /// ID of the owner.
        owner: user::Id,
    },

    /// Create a new listing.
    Create(Create),

    /// Delete a listing.
    Delete {
        /// ID of the listing to delete.
        id: listing::Id,

        /// ID of the owner deleting the listing.
        #[arg(long)]
        owner: user::Id,
    },
}

/// Filter and order of browsed listings.
#[derive(Debug, clap::Args)]
pub struct Browse {
    /// Category to browse.
    #[arg(long)]
    pub category: Option<listing::Category>,

    /// Exact brand.
    #[arg(long)]
    pub brand: Option<listing::Brand>,

    /// Part of a model name.
    #[arg(long)]
    pub model: Option<String>,

    /// Earliest manufacturing year.
    #[arg(long)]
    pub year_min: Option<listing::Year>,

    /// Latest manufacturing year.
    #[arg(long)]
    pub year_max: Option<listing::Year>,

    /// Lowest mileage.
    #[arg(long)]
    pub mileage_min: Option<listing::Mileage>,

    /// Highest mileage.
    #[arg(long)]
    pub mileage_max: Option<listing::Mileage>,

    /// Lowest price.
    #[arg(long)]
    pub price_min: Option<Decimal>,

    /// Highest price.
    #[arg(long)]
    pub price_max: Option<Decimal>,

    /// Fuel type.
    #[arg(long)]
    pub fuel: Option<listing::FuelType>,

    /// Condition.
    #[arg(long)]
    pub condition: Option<listing::Condition>,

    /// Part of a location.
    #[arg(long)]
    pub location: Option<String>,

    /// Order within promoted and regular listings: newest, price_asc,
    /// price_desc or mileage_asc.
    #[arg(long, default_value = "newest")]
    pub sort: service::read::listing::list::SortBy,
}

/// Form of a new listing.
#[derive(Debug, clap::Args)]
pub struct Create {
    /// ID of the owner creating the listing.
    #[arg(long)]
    pub owner: user::Id,

    /// Category of the listing.
    #[arg(long)]
    pub category: listing::Category,

    /// Title of the listing.
    #[arg(long)]
    pub title: listing::Title,

    /// Description of the listing.
    #[arg(long)]
    pub description: Option<listing::Description>,

    /// Brand of the offered item.
    #[arg(long)]
    pub brand: listing::Brand,

    /// Model of the offered item.
    #[arg(long)]
    pub model: listing::Model,

    /// Manufacturing year of the offered item.
    #[arg(long)]
    pub year: listing::Year,

    /// Mileage of the offered item.
    #[arg(long)]
    pub mileage: Option<listing::Mileage>,

    /// Fuel type of the offered item.
    #[arg(long)]
    pub fuel: Option<listing::FuelType>,

    /// Condition of the offered item.
    #[arg(long)]
    pub condition: listing::Condition,

    /// Asking price, in the configured currency.
    #[arg(long)]
    pub price: Decimal,

    /// Location of the offered item.
    #[arg(long)]
    pub location: listing::Location,

    /// Image references, in display order.
    #[arg(long = "image")]
    pub images: Vec<listing::ImageRef>,

    /// Feature tags.
    #[arg(long = "feature")]
    pub features: Vec<listing::Feature>,

    /// Promotion to buy along with the listing.
    #[arg(long)]
    pub promotion: Option<listing::PromotionKind>,
}

#[cfg(test)]
mod spec {
    use clap::CommandFactory as _;

    use super::{Action, Args};

    #[test]
    fn version_request_is_not_a_failure() {
        assert!(Args::parse_from(["marketplace", "--version"])
            .unwrap()
            .is_none());
        assert!(matches!(
            Args::parse_from(["marketplace", "categories"]).unwrap(),
            Some(Args {
                action: Action::Categories,
                ..
            }),
        ));
        assert!(
            Args::parse_from(["marketplace", "browse", "--sort", "cheapest"])
                .is_err(),
        );
    }

    #[test]
    fn help_has_no_rustdoc_markup() {
        let mut cmd = Args::command();
        let mut helps = vec![cmd.render_long_help().to_string()];
        for sub in cmd.get_subcommands_mut() {
            helps.push(sub.render_long_help().to_string());
        }

        assert!(helps.iter().any(|h| h.contains("Action to perform")
            || h.contains("Browse listings")));
        for help in helps {
            assert!(!help.contains("[`"), "markup in help:\n{help}");
        }
    }
}
