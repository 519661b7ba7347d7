//! Pure domain logic for the Pune flat price estimator.
//!
//! No I/O and no ML runtime in this crate: just the currency formatter and
//! the flat feature schema shared by the inference and API crates.

pub mod currency;
pub mod flat;

pub use currency::format_inr;
pub use flat::{Cell, FlatCategory, FlatRecord, FurnishedFlat, PropertyAge, UnfurnishedFlat, YesNo};
