//! Common test utilities

#![allow(dead_code)]

use std::io::Cursor;

use rust_decimal::Decimal;

use recycle_rewards::console::{Console, ConsoleSettings};
use recycle_rewards::handlers::{
    CreateCitizenCommand, RegisterDepositCommand, RegisterDepositResult,
};
use recycle_rewards::{
    seed, AppResult, ManagementService, OperationContext, WasteCategory, WasteItem,
};

/// Context used by every test operation
pub fn test_context() -> OperationContext {
    OperationContext::new()
        .with_correlation_id(uuid::Uuid::new_v4())
        .with_operator("integration-test")
}

/// Empty service under the standard policy
pub fn empty_service() -> ManagementService {
    ManagementService::default()
}

/// Service preloaded with the demo citizens and deposits
pub fn seeded_service() -> ManagementService {
    let mut service = ManagementService::default();
    seed::load_demo_data(&mut service).expect("Failed to load demo data");
    service
}

pub fn create_citizen(service: &mut ManagementService, id: &str, name: &str, zone: &str) {
    service
        .create_citizen(CreateCitizenCommand::new(id, name, zone), &test_context())
        .expect("Failed to create citizen");
}

pub fn deposit(
    service: &mut ManagementService,
    id: &str,
    category: WasteCategory,
    kilograms: Decimal,
) -> AppResult<RegisterDepositResult> {
    let item = WasteItem::new(category, kilograms).expect("Invalid test weight");
    service.register_deposit(RegisterDepositCommand::new(id, item), &test_context())
}

/// Drive the menu with `script` as stdin and return everything printed
pub fn run_console(service: &mut ManagementService, script: &str) -> String {
    let mut console = Console::new(
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
        ConsoleSettings::default(),
    );
    console.run(service).expect("Console failed");
    String::from_utf8(console.into_output()).expect("Console output is not UTF-8")
}
