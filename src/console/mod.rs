//! Console module
//!
//! Interactive text menu over the management service. Each action reads
//! free text, validates it, calls one service operation and renders the
//! result. Failures are printed and the menu resumes; only end of input
//! or the exit option stops the loop.

mod input;
pub mod render;

pub use input::MenuAction;

use std::io::{BufRead, Write};

use chrono::Utc;

use crate::config::Config;
use crate::domain::{
    DomainError, OperationContext, ScoringPolicy, WasteCategory, WasteItem, Weight,
};
use crate::error::{AppError, AppResult};
use crate::handlers::{CreateCitizenCommand, ManagementService, RegisterDepositCommand};
use crate::store::CitizenStore;

/// Operator name recorded in the audit trail for menu actions
pub const CONSOLE_OPERATOR: &str = "console";

/// Whether the loop keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Display limits for the console views
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSettings {
    pub recent_deposits_limit: usize,
    pub top_citizens_limit: usize,
    pub audit_entries_limit: usize,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for ConsoleSettings {
    fn from(config: &Config) -> Self {
        Self {
            recent_deposits_limit: config.recent_deposits_limit,
            top_citizens_limit: config.top_citizens_limit,
            audit_entries_limit: config.audit_entries_limit,
        }
    }
}

/// Menu loop over an input and an output stream
pub struct Console<R, W> {
    input: R,
    output: W,
    settings: ConsoleSettings,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, settings: ConsoleSettings) -> Self {
        Self {
            input,
            output,
            settings,
        }
    }

    /// Run until the exit option or end of input.
    ///
    /// # Errors
    /// Only I/O failures on the streams end the loop with an error.
    pub fn run<S: CitizenStore>(&mut self, service: &mut ManagementService<S>) -> AppResult<()> {
        render::banner(&mut self.output)?;

        loop {
            render::menu(&mut self.output, service.policy())?;

            let Some(line) = self.read_line()? else {
                tracing::debug!("Input closed");
                break;
            };

            let outcome = line
                .parse::<MenuAction>()
                .and_then(|action| self.dispatch(action, service));

            match outcome {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(AppError::Io(e)) => return Err(AppError::Io(e)),
                Err(e) => {
                    if e.is_client_error() {
                        tracing::warn!(
                            error_code = e.error_code(),
                            error = %e,
                            "Menu action rejected"
                        );
                    } else {
                        tracing::error!(
                            error_code = e.error_code(),
                            error = %e,
                            "Menu action failed"
                        );
                    }
                    render::error(&mut self.output, &e)?;
                }
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Consume the console, returning the output stream
    pub fn into_output(self) -> W {
        self.output
    }

    fn dispatch<S: CitizenStore>(
        &mut self,
        action: MenuAction,
        service: &mut ManagementService<S>,
    ) -> AppResult<Flow> {
        let mut context = OperationContext::new().with_operator(CONSOLE_OPERATOR);
        let correlation_id = context.ensure_correlation_id();

        let span = tracing::info_span!("menu_action", action = action.label(), %correlation_id);
        let _guard = span.enter();

        match action {
            MenuAction::CreateCitizen => self.create_citizen(service, &context),
            MenuAction::RegisterDeposit => self.register_deposit(service, &context),
            MenuAction::LookupCitizen => self.lookup_citizen(service),
            MenuAction::ListCitizens => self.list_citizens(service),
            MenuAction::ZoneReport => self.zone_report(service),
            MenuAction::ChangePolicy => self.change_policy(service, &context),
            MenuAction::Statistics => self.statistics(service),
            MenuAction::AuditTrail => self.audit_trail(service),
            MenuAction::Exit => {
                render::farewell(&mut self.output)?;
                Ok(Flow::Quit)
            }
        }
    }

    fn create_citizen<S: CitizenStore>(
        &mut self,
        service: &mut ManagementService<S>,
        context: &OperationContext,
    ) -> AppResult<Flow> {
        render::section(&mut self.output, "CREATE CITIZEN")?;

        let Some(id) = self.prompt("ID: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(name) = self.prompt("Full name: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(zone) = self.prompt("Zone (Norte/Sur/Este/Oeste/Centro): ")? else {
            return Ok(Flow::Quit);
        };

        let command = CreateCitizenCommand::new(id.trim(), name.trim(), zone.trim());
        let result = service.create_citizen(command, context)?;
        render::citizen_created(&mut self.output, &result)?;
        Ok(Flow::Continue)
    }

    fn register_deposit<S: CitizenStore>(
        &mut self,
        service: &mut ManagementService<S>,
        context: &OperationContext,
    ) -> AppResult<Flow> {
        render::section(&mut self.output, "REGISTER WASTE DEPOSIT")?;

        let Some(citizen_id) = self.prompt("Citizen ID: ")? else {
            return Ok(Flow::Quit);
        };

        render::category_choices(&mut self.output)?;
        let Some(code) = self.prompt("Select the type: ")? else {
            return Ok(Flow::Quit);
        };
        let category = WasteCategory::from_code(&code)?;

        let Some(raw_weight) = self.prompt("Weight in kilograms: ")? else {
            return Ok(Flow::Quit);
        };
        let weight = raw_weight.parse::<Weight>().map_err(DomainError::from)?;

        let item = WasteItem::from_weight(category, weight, Utc::now());
        let command = RegisterDepositCommand::new(citizen_id.trim(), item);
        let result = service.register_deposit(command, context)?;
        render::deposit_registered(&mut self.output, &result)?;
        Ok(Flow::Continue)
    }

    fn lookup_citizen<S: CitizenStore>(
        &mut self,
        service: &ManagementService<S>,
    ) -> AppResult<Flow> {
        render::section(&mut self.output, "LOOK UP CITIZEN")?;

        let Some(id) = self.prompt("Citizen ID: ")? else {
            return Ok(Flow::Quit);
        };

        let summary = service.citizen_summary(id.trim(), self.settings.recent_deposits_limit)?;
        render::citizen_summary(&mut self.output, &summary)?;
        Ok(Flow::Continue)
    }

    fn list_citizens<S: CitizenStore>(&mut self, service: &ManagementService<S>) -> AppResult<Flow> {
        render::section(&mut self.output, "REGISTERED CITIZENS")?;
        render::roster(&mut self.output, &service.roster())?;
        Ok(Flow::Continue)
    }

    fn zone_report<S: CitizenStore>(&mut self, service: &ManagementService<S>) -> AppResult<Flow> {
        render::section(&mut self.output, "ZONE REPORT")?;

        let Some(zone) = self.prompt("Zone: ")? else {
            return Ok(Flow::Quit);
        };

        let report = service.generate_zone_report(zone.trim())?;
        render::zone_report(&mut self.output, &report)?;
        Ok(Flow::Continue)
    }

    fn change_policy<S: CitizenStore>(
        &mut self,
        service: &mut ManagementService<S>,
        context: &OperationContext,
    ) -> AppResult<Flow> {
        render::section(&mut self.output, "CHANGE SCORING POLICY")?;
        render::policy_choices(&mut self.output, service.policy())?;

        let Some(choice) = self.prompt("Select: ")? else {
            return Ok(Flow::Quit);
        };
        let policy = ScoringPolicy::from_menu_option(&choice)?;

        let result = service.set_policy(policy, context);
        render::policy_changed(&mut self.output, &result)?;
        Ok(Flow::Continue)
    }

    fn statistics<S: CitizenStore>(&mut self, service: &ManagementService<S>) -> AppResult<Flow> {
        render::section(&mut self.output, "SYSTEM STATISTICS")?;
        let stats = service.statistics(self.settings.top_citizens_limit);
        render::statistics(&mut self.output, &stats)?;
        Ok(Flow::Continue)
    }

    fn audit_trail<S: CitizenStore>(&mut self, service: &ManagementService<S>) -> AppResult<Flow> {
        render::section(&mut self.output, "AUDIT TRAIL")?;
        let log = service.audit_log();
        let recent = log.recent(self.settings.audit_entries_limit);
        let verification = log.verify_chain();
        if !verification.is_valid {
            tracing::error!(
                first_invalid_entry = ?verification.first_invalid_entry,
                "Audit hash chain verification failed"
            );
        }
        render::audit_trail(&mut self.output, &recent, log.len(), &verification)?;
        Ok(Flow::Continue)
    }

    /// Print `label` and read one line; `None` on end of input
    fn prompt(&mut self, label: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> AppResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Cursor;

    fn run(service: &mut ManagementService, script: &str) -> String {
        let mut console = Console::new(
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            ConsoleSettings::default(),
        );
        console.run(service).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_exit_option() {
        let mut service = ManagementService::default();
        let output = run(&mut service, "0\n");
        assert!(output.contains("MAIN MENU"));
        assert!(output.contains("Thanks for recycling!"));
    }

    #[test]
    fn test_end_of_input_stops_cleanly() {
        let mut service = ManagementService::default();
        let output = run(&mut service, "");
        assert!(output.contains("MAIN MENU"));
        assert!(!output.contains("Error"));
    }

    #[test]
    fn test_end_of_input_mid_action() {
        let mut service = ManagementService::default();
        run(&mut service, "1\n42\n");
        assert!(service.list_citizens().is_empty());
    }

    #[test]
    fn test_create_and_deposit() {
        let mut service = ManagementService::default();
        let output = run(&mut service, "1\n42\nAna\nNorte\n2\n42\np\n2.5\n0\n");

        assert!(output.contains("✅ Citizen Ana created in zone Norte"));
        assert!(output.contains("✅ Deposit registered: 2.50 kg of Plastic"));
        assert!(output.contains("🎯 Points earned: 5.00"));
        assert_eq!(
            service.get_citizen("42").unwrap().total_points().value(),
            dec!(5.0)
        );
    }

    #[test]
    fn test_invalid_option_resumes_menu() {
        let mut service = ManagementService::default();
        let output = run(&mut service, "9\n0\n");

        assert!(output.contains("❌ Error: Invalid argument: unknown menu option \"9\""));
        assert!(output.contains("Thanks for recycling!"));
    }

    #[test]
    fn test_malformed_weight_rejected_before_service() {
        let mut service = ManagementService::default();
        let output = run(&mut service, "1\n42\nAna\nNorte\n2\n42\nP\n2,5\n0\n");

        assert!(output.contains("❌ Error:"));
        assert_eq!(service.get_citizen("42").unwrap().deposit_count(), 0);
        assert_eq!(service.audit_log().len(), 1);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let mut service = ManagementService::default();
        let output = run(&mut service, "1\n42\nAna\nNorte\n2\n42\nX\n0\n");

        assert!(output.contains("❌ Error: Invalid waste type: \"X\""));
        assert_eq!(service.get_citizen("42").unwrap().deposit_count(), 0);
    }

    #[test]
    fn test_duplicate_citizen_reported() {
        let mut service = ManagementService::default();
        let output = run(&mut service, "1\n42\nAna\nNorte\n1\n42\nOtra\nSur\n0\n");

        assert!(output.contains("❌ Error: Citizen already exists: 42"));
        assert_eq!(service.get_citizen("42").unwrap().name(), "Ana");
    }

    #[test]
    fn test_change_policy() {
        let mut service = ManagementService::default();
        let output = run(&mut service, "6\n2\n0\n");

        assert!(output.contains("✅ Policy changed to: Promotional strategy (x1.5)"));
        assert_eq!(service.policy(), ScoringPolicy::Promotional);
    }

    #[test]
    fn test_unknown_zone_reported() {
        let mut service = ManagementService::default();
        let output = run(&mut service, "5\nOeste\n0\n");
        assert!(output.contains("❌ Error: Not found:"));
    }

    #[test]
    fn test_lookup_unknown_citizen() {
        let mut service = ManagementService::default();
        let output = run(&mut service, "3\nnobody\n0\n");
        assert!(output.contains("❌ Error: Not found: citizen with ID nobody"));
    }

    #[test]
    fn test_oversized_weight_rejected_and_menu_continues() {
        let mut service = ManagementService::default();
        let output = run(
            &mut service,
            "1\n1\nAna\nNorte\n2\n1\nP\n79228162514264337593543950335\n\
             2\n1\nV\n20000000000000000000000000000\n2\n1\nV\n1000000\n7\n0\n",
        );

        assert_eq!(output.matches("❌ Error: Weight exceeds the maximum").count(), 2);
        assert!(output.contains("🎯 Points earned: 3000000.00"));
        assert!(output.contains("Total points: 3000000.00"));
        assert!(output.contains("Thanks for recycling!"));
        assert_eq!(service.get_citizen("1").unwrap().deposit_count(), 1);
    }

    #[test]
    fn test_too_many_decimals_rejected() {
        let mut service = ManagementService::default();
        let output = run(&mut service, "1\n1\nAna\nNorte\n2\n1\nA\n0.0001\n0\n");

        assert!(output.contains("❌ Error: Weight has too many decimal places"));
        assert_eq!(service.get_citizen("1").unwrap().deposit_count(), 0);
    }

    #[test]
    fn test_audit_trail_view() {
        let mut service = ManagementService::default();
        let output = run(&mut service, "8\n1\n42\nAna\nNorte\n6\n2\n8\n0\n");

        assert!(output.contains("No changes recorded yet"));
        assert!(output.contains("Showing 2 of 2 entries"));
        assert!(output.contains("citizen.created 42 [console]"));
        assert!(output.contains("policy.changed"));
        assert!(output.contains("Hash chain intact (2 entries checked)"));

        let entries = service.audit_log().entries();
        assert!(entries[0].correlation_id.is_some());
        assert_ne!(entries[0].correlation_id, entries[1].correlation_id);
    }
}
