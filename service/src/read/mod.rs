//! Read entities definitions.

pub mod catalog;
pub mod dashboard;
pub mod listing;
