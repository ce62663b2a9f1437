//! recycle_rewards Library
//!
//! Re-exports modules for integration testing and external use.

pub mod aggregate;
pub mod audit;
pub mod console;
pub mod domain;
pub mod handlers;
pub mod projection;
pub mod seed;
pub mod store;

pub mod config;
mod error;

pub use config::{Config, LogFormat};
pub use error::{AppError, AppResult, ErrorKind};
pub use domain::{DomainError, OperationContext, Points, ScoringPolicy, WasteCategory, WasteItem, Weight};
pub use handlers::ManagementService;
