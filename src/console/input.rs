//! Menu input parsing

use std::str::FromStr;

use crate::error::AppError;

/// Main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    CreateCitizen,
    RegisterDeposit,
    LookupCitizen,
    ListCitizens,
    ZoneReport,
    ChangePolicy,
    Statistics,
    AuditTrail,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 9] = [
        MenuAction::CreateCitizen,
        MenuAction::RegisterDeposit,
        MenuAction::LookupCitizen,
        MenuAction::ListCitizens,
        MenuAction::ZoneReport,
        MenuAction::ChangePolicy,
        MenuAction::Statistics,
        MenuAction::AuditTrail,
        MenuAction::Exit,
    ];

    pub fn key(&self) -> char {
        match self {
            MenuAction::CreateCitizen => '1',
            MenuAction::RegisterDeposit => '2',
            MenuAction::LookupCitizen => '3',
            MenuAction::ListCitizens => '4',
            MenuAction::ZoneReport => '5',
            MenuAction::ChangePolicy => '6',
            MenuAction::Statistics => '7',
            MenuAction::AuditTrail => '8',
            MenuAction::Exit => '0',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::CreateCitizen => "Create citizen",
            MenuAction::RegisterDeposit => "Register waste deposit",
            MenuAction::LookupCitizen => "Look up citizen",
            MenuAction::ListCitizens => "List all citizens",
            MenuAction::ZoneReport => "Generate zone report",
            MenuAction::ChangePolicy => "Change scoring policy",
            MenuAction::Statistics => "Show system statistics",
            MenuAction::AuditTrail => "Show audit trail",
            MenuAction::Exit => "Exit",
        }
    }
}

impl FromStr for MenuAction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(key), None) => Self::ALL.into_iter().find(|action| action.key() == key),
            _ => None,
        }
        .ok_or_else(|| AppError::InvalidArgument(format!("unknown menu option {:?}", trimmed)))
    }
}
