//! Console Integration Tests

use rust_decimal_macros::dec;

use recycle_rewards::ScoringPolicy;

mod common;

#[test]
fn test_full_session() {
    let mut service = common::empty_service();
    let script = [
        "1", "100", "Lucía Pérez", "Oeste", // create
        "6", "2", // promotional
        "2", "100", "v", "2", // 2 kg glass
        "3", "100", // look up
        "5", "oeste", // zone report
        "0",
    ]
    .join("\n");

    let output = common::run_console(&mut service, &script);

    assert!(output.contains("✅ Citizen Lucía Pérez created in zone Oeste"));
    assert!(output.contains("✅ Policy changed to: Promotional strategy (x1.5)"));
    assert!(output.contains("🎯 Points earned: 9.00"));
    assert!(output.contains("CITIZEN LUCÍA PÉREZ"));
    assert!(output.contains("ZONE REPORT: OESTE"));
    assert!(output.contains("Glass: 2.00 kg (100.0%)"));
    assert!(output.contains("Thanks for recycling!"));

    assert_eq!(service.policy(), ScoringPolicy::Promotional);
    assert_eq!(
        service.get_citizen("100").unwrap().total_points().value(),
        dec!(9)
    );
}

#[test]
fn test_errors_do_not_stop_the_menu() {
    let mut service = common::seeded_service();
    let script = [
        "x", // unknown option
        "2", "12345678", "Z", // unknown category
        "2", "12345678", "P", "abc", // malformed weight
        "2", "99999999", "P", "1", // unknown citizen
        "6", "5", // unknown policy
        "7",
        "0",
    ]
    .join("\n");

    let output = common::run_console(&mut service, &script);

    assert_eq!(output.matches("❌ Error:").count(), 5);
    assert!(output.contains("Total deposits: 5"));
    assert!(output.contains("Total points: 23.45"));
    assert_eq!(service.policy(), ScoringPolicy::Standard);
}

#[test]
fn test_listing_and_statistics_on_empty_system() {
    let mut service = common::empty_service();
    let output = common::run_console(&mut service, "4\n7\n");

    assert!(output.contains("No citizens registered"));
    assert!(output.contains("No data to show"));
}
