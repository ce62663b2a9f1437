//! Domain module
//!
//! Core domain types and business rules.

pub mod context;
pub mod error;
pub mod events;
pub mod measure;
pub mod scoring;
pub mod waste;

pub use context::OperationContext;
pub use error::DomainError;
pub use events::CitizenEvent;
pub use measure::{MeasureError, Points, Weight};
pub use scoring::ScoringPolicy;
pub use waste::{DepositRecord, WasteCategory, WasteItem};
