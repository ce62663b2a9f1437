//! Demo data
//!
//! Sample citizens and deposits loaded at start-up so the menu has
//! something to report on.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::{OperationContext, WasteCategory, WasteItem};
use crate::error::AppResult;
use crate::handlers::{CreateCitizenCommand, ManagementService, RegisterDepositCommand};
use crate::store::CitizenStore;

/// (id, name, zone)
pub const DEMO_CITIZENS: [(&str, &str, &str); 4] = [
    ("12345678", "María González", "Norte"),
    ("87654321", "Carlos Rodríguez", "Sur"),
    ("11223344", "Ana Martínez", "Norte"),
    ("44332211", "Pedro López", "Centro"),
];

/// (citizen id, category, kilograms)
pub const DEMO_DEPOSITS: [(&str, WasteCategory, Decimal); 5] = [
    ("12345678", WasteCategory::Plastic, dec!(2.5)),
    ("12345678", WasteCategory::Paper, dec!(1.8)),
    ("87654321", WasteCategory::Glass, dec!(3.2)),
    ("11223344", WasteCategory::Plastic, dec!(1.5)),
    ("44332211", WasteCategory::Paper, dec!(2.1)),
];

/// Load the demo citizens and deposits under the active policy.
///
/// Returns the number of deposits recorded. Stops at the first failure,
/// leaving whatever was loaded before it.
pub fn load_demo_data<S: CitizenStore>(service: &mut ManagementService<S>) -> AppResult<usize> {
    let context = OperationContext::new().with_operator("seed");

    for (id, name, zone) in DEMO_CITIZENS {
        service.create_citizen(CreateCitizenCommand::new(id, name, zone), &context)?;
    }

    for (id, category, kilograms) in DEMO_DEPOSITS {
        let item = WasteItem::new(category, kilograms)?;
        service.register_deposit(RegisterDepositCommand::new(id, item), &context)?;
    }

    tracing::info!(
        citizens = DEMO_CITIZENS.len(),
        deposits = DEMO_DEPOSITS.len(),
        "Demo data loaded"
    );

    Ok(DEMO_DEPOSITS.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_load_demo_data() {
        let mut service = ManagementService::default();
        let deposits = load_demo_data(&mut service).unwrap();

        assert_eq!(deposits, 5);
        assert_eq!(service.list_citizens().len(), 4);

        let maria = service.get_citizen("12345678").unwrap();
        assert_eq!(maria.deposit_count(), 2);
        assert_eq!(maria.total_points().value(), dec!(7.7));

        let stats = service.statistics(3);
        assert_eq!(stats.total_points.value(), dec!(23.45));
    }

    #[test]
    fn test_second_load_fails_on_duplicates() {
        let mut service = ManagementService::default();
        load_demo_data(&mut service).unwrap();

        let err = load_demo_data(&mut service).unwrap_err();
        assert!(matches!(err, AppError::DuplicateEntity(_)));
        assert_eq!(service.list_citizens().len(), 4);
    }
}
