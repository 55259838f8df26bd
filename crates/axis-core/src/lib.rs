// File: crates/axis-core/src/lib.rs
// Summary: Core library entry point; exports the reactive axis range model API.

pub mod axis;
pub mod config;
pub mod controller;
pub mod extent;
pub mod notify;
pub mod range;
pub mod series;

pub use axis::AxisModel;
pub use config::AxisConfig;
pub use controller::RangeController;
pub use extent::ExtentAggregator;
pub use notify::{Notifier, Subscription};
pub use range::{Range, RangeError};
pub use series::{CollectionEvent, SeriesCollection, SeriesHandle, SeriesModel};
