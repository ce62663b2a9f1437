//! Command Handlers module
//!
//! The management service and the commands it accepts.

mod commands;
mod management;


pub use commands::*;
pub use management::ManagementService;
