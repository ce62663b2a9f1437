//! Console rendering
//!
//! Every view writes plain text to any `Write`; nothing here reads input
//! or touches the service.

use std::io::{self, Write};

use crate::audit::{AuditLogEntry, ChainVerificationResult};
use crate::domain::{ScoringPolicy, WasteCategory};
use crate::handlers::{CreateCitizenResult, PolicyChangeResult, RegisterDepositResult};
use crate::projection::{CitizenSummary, Roster, SystemStatistics, ZoneReport};

use super::MenuAction;

const RULE_WIDTH: usize = 70;

fn rule(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

pub fn banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "=== RECYCLING REWARDS MANAGEMENT ===")?;
    writeln!(out, "SDG 11: Sustainable Cities and Communities")
}

pub fn menu(out: &mut impl Write, policy: ScoringPolicy) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "🌱 Active policy: {}", policy.label())?;
    writeln!(out)?;
    writeln!(out, "=== MAIN MENU ===")?;
    for action in MenuAction::ALL {
        writeln!(out, "{}) {}", action.key(), action.label())?;
    }
    write!(out, "\nSelect an option: ")?;
    out.flush()
}

pub fn farewell(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Thanks for recycling!")
}

pub fn error(out: &mut impl Write, message: impl std::fmt::Display) -> io::Result<()> {
    writeln!(out, "❌ Error: {}", message)
}

pub fn section(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== {} ===", title)
}

pub fn category_choices(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Available waste types:")?;
    for category in WasteCategory::ALL {
        writeln!(
            out,
            "{}) {} ({} points/kg)",
            category.code(),
            category.label(),
            category.points_per_kg().normalize()
        )?;
    }
    Ok(())
}

pub fn policy_choices(out: &mut impl Write, active: ScoringPolicy) -> io::Result<()> {
    writeln!(out, "Active policy: {}", active.label())?;
    writeln!(out)?;
    writeln!(out, "Available policies:")?;
    writeln!(out, "1) Standard (regular points)")?;
    writeln!(out, "2) Promotional (points x1.5)")
}

pub fn citizen_created(out: &mut impl Write, result: &CreateCitizenResult) -> io::Result<()> {
    writeln!(
        out,
        "✅ Citizen {} created in zone {}",
        result.name, result.zone
    )
}

pub fn deposit_registered(out: &mut impl Write, result: &RegisterDepositResult) -> io::Result<()> {
    let item = result.record.item();
    writeln!(
        out,
        "✅ Deposit registered: {} of {}",
        item.weight(),
        item.category()
    )?;
    writeln!(out, "🎯 Points earned: {}", result.record.points_awarded())?;
    writeln!(out, "🏅 Citizen total: {}", result.citizen_total)
}

pub fn policy_changed(out: &mut impl Write, result: &PolicyChangeResult) -> io::Result<()> {
    writeln!(out, "✅ Policy changed to: {}", result.current.label())?;
    writeln!(out, "⚠️  New deposits will use the new policy")
}

pub fn citizen_summary(out: &mut impl Write, summary: &CitizenSummary) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "📋 CITIZEN {}", summary.name.to_uppercase())?;
    writeln!(out, "ID: {}", summary.citizen_id)?;
    writeln!(out, "Zone: {}", summary.zone)?;
    if let Some(registered_at) = summary.registered_at {
        writeln!(out, "Registered: {}", registered_at.format("%d/%m/%Y %H:%M"))?;
    }
    writeln!(out, "🎯 Total points: {}", summary.total_points)?;
    writeln!(out, "📦 Total deposits: {}", summary.deposit_count)?;

    if summary.deposit_count == 0 {
        return Ok(());
    }

    section(out, "WEIGHT BY TYPE")?;
    for (category, weight) in &summary.weight_by_category {
        writeln!(out, "{}: {:.2} kg", category, weight)?;
    }

    section(out, &format!("LATEST {} DEPOSITS", summary.recent_deposits.len()))?;
    for deposit in &summary.recent_deposits {
        let item = deposit.item();
        writeln!(
            out,
            "{} - {}: {} → {} pts",
            item.deposited_at().format("%d/%m/%Y %H:%M"),
            item.category(),
            item.weight(),
            deposit.points_awarded()
        )?;
    }
    Ok(())
}

pub fn roster(out: &mut impl Write, roster: &Roster) -> io::Result<()> {
    if roster.is_empty() {
        return writeln!(out, "❌ No citizens registered");
    }

    writeln!(
        out,
        "{:<10} {:<25} {:<10} {:<10} {:<10}",
        "ID", "Name", "Zone", "Deposits", "Points"
    )?;
    rule(out)?;
    for entry in &roster.entries {
        writeln!(
            out,
            "{:<10} {:<25} {:<10} {:<10} {:<10}",
            entry.citizen_id,
            entry.name,
            entry.zone,
            entry.deposit_count,
            entry.total_points.to_string()
        )?;
    }
    rule(out)?;
    writeln!(
        out,
        "📊 TOTALS: {} citizens | {} deposits | {} points",
        roster.total_citizens, roster.total_deposits, roster.total_points
    )
}

pub fn zone_report(out: &mut impl Write, report: &ZoneReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "🌍 ZONE REPORT: {}", report.zone.to_uppercase())?;
    writeln!(out, "👥 Participating citizens: {}", report.citizen_count)?;
    writeln!(out, "🎯 Zone total points: {}", report.total_points)?;

    section(out, "WASTE COLLECTED")?;
    let shares = report.category_shares();
    if shares.is_empty() {
        return writeln!(out, "❌ No waste recorded in this zone");
    }
    for share in &shares {
        writeln!(
            out,
            "{}: {:.2} kg ({:.1}%)",
            share.category,
            share.weight.round_dp(2),
            share.percentage.round_dp(1)
        )?;
    }
    writeln!(out)?;
    writeln!(out, "📦 Total collected: {:.2} kg", report.total_weight())
}

/// Latest audit entries (newest first) and the chain check
pub fn audit_trail(
    out: &mut impl Write,
    recent: &[&AuditLogEntry],
    total: usize,
    verification: &ChainVerificationResult,
) -> io::Result<()> {
    if total == 0 {
        return writeln!(out, "❌ No changes recorded yet");
    }

    writeln!(out, "Showing {} of {} entries", recent.len(), total)?;
    for entry in recent {
        writeln!(
            out,
            "#{} {} {} {} [{}]",
            entry.sequence_number,
            entry.created_at.format("%d/%m/%Y %H:%M:%S"),
            entry.action,
            entry.resource_id.as_deref().unwrap_or("-"),
            entry.operator.as_deref().unwrap_or("-")
        )?;
    }

    writeln!(out)?;
    if verification.is_valid {
        writeln!(
            out,
            "🔒 Hash chain intact ({} entries checked)",
            verification.entries_checked
        )
    } else {
        writeln!(
            out,
            "⚠️  Hash chain broken at entry {}",
            verification
                .first_invalid_entry
                .map(|id| id.to_string())
                .unwrap_or_default()
        )
    }
}

pub fn statistics(out: &mut impl Write, stats: &SystemStatistics) -> io::Result<()> {
    if stats.is_empty() {
        return writeln!(out, "❌ No data to show");
    }

    writeln!(out, "👥 Total citizens: {}", stats.total_citizens)?;
    writeln!(out, "📦 Total deposits: {}", stats.total_deposits)?;
    writeln!(out, "🎯 Total points: {}", stats.total_points)?;
    if let Some(average) = stats.average_deposits_per_citizen {
        writeln!(out, "📈 Deposits per citizen: {:.2}", average.round_dp(2))?;
    }
    if let Some(average) = stats.average_points_per_citizen {
        writeln!(out, "📈 Points per citizen: {:.2}", average.round_dp(2))?;
    }

    section(out, "BY ZONE")?;
    for zone in &stats.zones {
        writeln!(
            out,
            "{}: {} citizens, {} deposits, {} points",
            zone.zone, zone.citizen_count, zone.deposit_count, zone.total_points
        )?;
    }

    if !stats.top_citizens.is_empty() {
        section(out, &format!("TOP {} CITIZENS", stats.top_citizens.len()))?;
        for ranked in &stats.top_citizens {
            writeln!(
                out,
                "{}. {} ({}) - {} points",
                ranked.rank, ranked.name, ranked.zone, ranked.total_points
            )?;
        }
    }

    if !stats.weight_by_category.is_empty() {
        section(out, "WASTE BY TYPE")?;
        for share in &stats.weight_by_category {
            writeln!(
                out,
                "{}: {:.2} kg ({:.1}%)",
                share.category,
                share.weight.round_dp(2),
                share.percentage.round_dp(1)
            )?;
        }
        writeln!(out, "📦 Total collected: {:.2} kg", stats.total_weight)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{Aggregate, Citizen};
    use crate::domain::{DepositRecord, WasteItem};
    use rust_decimal_macros::dec;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn norte_citizen() -> Citizen {
        let (mut citizen, _) = Citizen::register("A", "Ana", "Norte").unwrap();
        for (category, kg) in [(WasteCategory::Plastic, dec!(2.5)), (WasteCategory::Paper, dec!(1.8))] {
            let item = WasteItem::new(category, kg).unwrap();
            let points = ScoringPolicy::Standard.compute(&item);
            let event =
                citizen.record_deposit(DepositRecord::new(item, points), ScoringPolicy::Standard);
            citizen = citizen.apply(event);
        }
        citizen
    }

    #[test]
    fn test_menu_lists_every_action() {
        let text = render(|out| menu(out, ScoringPolicy::Promotional));
        assert!(text.contains("Promotional strategy (x1.5)"));
        assert!(text.contains("1) Create citizen"));
        assert!(text.contains("7) Show system statistics"));
        assert!(text.contains("0) Exit"));
    }

    #[test]
    fn test_zone_report_shares() {
        let citizen = norte_citizen();
        let report = ZoneReport::build("norte", &[&citizen]);
        let text = render(|out| zone_report(out, &report));

        assert!(text.contains("ZONE REPORT: NORTE"));
        assert!(text.contains("Zone total points: 7.70"));
        assert!(text.contains("Plastic: 2.50 kg (58.1%)"));
        assert!(text.contains("Paper: 1.80 kg (41.9%)"));
        assert!(text.contains("Total collected: 4.30 kg"));
    }

    #[test]
    fn test_zone_report_without_waste() {
        let (citizen, _) = Citizen::register("B", "Bruno", "Este").unwrap();
        let report = ZoneReport::build("Este", &[&citizen]);
        let text = render(|out| zone_report(out, &report));

        assert!(text.contains("No waste recorded in this zone"));
        assert!(!text.contains('%'));
    }

    #[test]
    fn test_statistics_empty() {
        let stats = SystemStatistics::build(&[], 3);
        let text = render(|out| statistics(out, &stats));
        assert!(text.contains("No data to show"));
    }

    #[test]
    fn test_statistics_without_deposits_omits_averages() {
        let (citizen, _) = Citizen::register("B", "Bruno", "Este").unwrap();
        let stats = SystemStatistics::build(&[&citizen], 3);
        let text = render(|out| statistics(out, &stats));

        assert!(text.contains("Total citizens: 1"));
        assert!(!text.contains("per citizen"));
        assert!(!text.contains("WASTE BY TYPE"));
    }

    #[test]
    fn test_citizen_summary_view() {
        let citizen = norte_citizen();
        let summary = CitizenSummary::build(&citizen, 5);
        let text = render(|out| citizen_summary(out, &summary));

        assert!(text.contains("CITIZEN ANA"));
        assert!(text.contains("Registered: "));
        assert!(text.contains("Total points: 7.70"));
        assert!(text.contains("Plastic: 2.50 kg"));
        assert!(text.contains("LATEST 2 DEPOSITS"));
    }

    #[test]
    fn test_audit_trail_view() {
        use crate::audit::{AuditAction, AuditLog, AuditLogBuilder};
        use crate::domain::OperationContext;

        let mut log = AuditLog::new();
        let context = OperationContext::new().with_operator("console");
        log.record(
            AuditLogBuilder::new(AuditAction::CitizenCreated).resource_id("42"),
            &context,
        );
        log.record(AuditLogBuilder::new(AuditAction::PolicyChanged), &context);

        let recent = log.recent(1);
        let text = render(|out| audit_trail(out, &recent, log.len(), &log.verify_chain()));

        assert!(text.contains("Showing 1 of 2 entries"));
        assert!(text.contains("#2"));
        assert!(text.contains("policy.changed"));
        assert!(!text.contains("citizen.created"));
        assert!(text.contains("Hash chain intact (2 entries checked)"));
    }

    #[test]
    fn test_empty_roster() {
        let text = render(|out| roster(out, &Roster::build(&[])));
        assert!(text.contains("No citizens registered"));
    }
}
