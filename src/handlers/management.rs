//! Management Service
//!
//! Orchestrates the citizen store, the active scoring policy and the audit
//! log. Every operation is a single in-memory mutation: it either applies
//! fully or fails before touching anything.

use crate::aggregate::{Aggregate, Citizen};
use crate::audit::{AuditAction, AuditLog, AuditLogBuilder};
use crate::domain::{DepositRecord, OperationContext, ScoringPolicy};
use crate::error::{AppError, AppResult};
use crate::projection::{CitizenSummary, Roster, SystemStatistics, ZoneReport};
use crate::store::{CitizenStore, InMemoryCitizenStore};

use super::{
    CreateCitizenCommand, CreateCitizenResult, PolicyChangeResult, RegisterDepositCommand,
    RegisterDepositResult,
};

/// Recycling programme service
#[derive(Debug)]
pub struct ManagementService<S: CitizenStore = InMemoryCitizenStore> {
    store: S,
    policy: ScoringPolicy,
    audit: AuditLog,
}

impl Default for ManagementService {
    fn default() -> Self {
        Self::new(InMemoryCitizenStore::new(), ScoringPolicy::default())
    }
}

impl<S: CitizenStore> ManagementService<S> {
    pub fn new(store: S, policy: ScoringPolicy) -> Self {
        Self {
            store,
            policy,
            audit: AuditLog::new(),
        }
    }

    // =========================================================================
    // createCitizen
    // =========================================================================

    /// Register a citizen.
    ///
    /// # Errors
    /// - `AppError::DuplicateEntity` if the ID is already registered
    /// - `AppError::Domain` if ID, name or zone is blank
    pub fn create_citizen(
        &mut self,
        command: CreateCitizenCommand,
        context: &OperationContext,
    ) -> AppResult<CreateCitizenResult> {
        let citizen_id = command.citizen_id.trim();
        if self.store.contains(citizen_id) {
            tracing::warn!(citizen_id = %citizen_id, "Rejected duplicate citizen");
            return Err(AppError::DuplicateEntity(citizen_id.to_string()));
        }

        let (citizen, event) = Citizen::register(command.citizen_id, command.name, command.zone)?;

        self.audit.record(
            AuditLogBuilder::new(AuditAction::CitizenCreated)
                .resource_type(Citizen::aggregate_type())
                .resource_id(event.citizen_id())
                .after_state(&event),
            context,
        );

        tracing::info!(
            citizen_id = %citizen.id(),
            zone = %citizen.zone(),
            event = event.event_type(),
            "Citizen registered"
        );

        let result = CreateCitizenResult {
            citizen_id: citizen.id().to_string(),
            name: citizen.name().to_string(),
            zone: citizen.zone().to_string(),
        };
        self.store.insert(citizen);

        Ok(result)
    }

    // =========================================================================
    // registerDeposit
    // =========================================================================

    /// Score `item` with the active policy and append it to the citizen.
    ///
    /// # Errors
    /// - `AppError::NotFound` if the citizen is not registered
    pub fn register_deposit(
        &mut self,
        command: RegisterDepositCommand,
        context: &OperationContext,
    ) -> AppResult<RegisterDepositResult> {
        let policy = self.policy;
        let citizen = match self.store.get_mut(command.citizen_id.trim()) {
            Some(citizen) => citizen,
            None => {
                tracing::warn!(citizen_id = %command.citizen_id, "Deposit for unknown citizen");
                return Err(AppError::NotFound(format!(
                    "citizen with ID {}",
                    command.citizen_id
                )));
            }
        };

        let points = policy.compute(&command.item);
        let record = DepositRecord::new(command.item, points);
        let event = citizen.record_deposit(record.clone(), policy);

        self.audit.record(
            AuditLogBuilder::new(AuditAction::DepositRegistered)
                .resource_type(Citizen::aggregate_type())
                .resource_id(event.citizen_id())
                .after_state(&event),
            context,
        );
        let event_type = event.event_type();

        let updated = std::mem::take(citizen).apply(event);
        *citizen = updated;

        tracing::info!(
            citizen_id = %citizen.id(),
            category = %record.item().category(),
            weight = %record.item().weight().value(),
            points = %points,
            policy = policy.as_str(),
            event = event_type,
            "Deposit registered"
        );

        Ok(RegisterDepositResult {
            citizen_id: citizen.id().to_string(),
            record,
            policy,
            citizen_total: citizen.total_points(),
        })
    }

    // =========================================================================
    // setPolicy
    // =========================================================================

    /// Switch the active policy. Only future deposits are affected.
    pub fn set_policy(
        &mut self,
        policy: ScoringPolicy,
        context: &OperationContext,
    ) -> PolicyChangeResult {
        let previous = std::mem::replace(&mut self.policy, policy);

        self.audit.record(
            AuditLogBuilder::new(AuditAction::PolicyChanged)
                .resource_type("ScoringPolicy")
                .resource_id(policy.as_str())
                .after_state(&policy),
            context,
        );

        tracing::info!(
            previous = previous.as_str(),
            current = policy.as_str(),
            "Scoring policy changed"
        );

        PolicyChangeResult {
            previous,
            current: policy,
        }
    }

    /// Currently active policy
    pub fn policy(&self) -> ScoringPolicy {
        self.policy
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Look up a citizen by ID
    pub fn get_citizen(&self, id: &str) -> Option<&Citizen> {
        self.store.get(id)
    }

    /// All citizens in store order
    pub fn list_citizens(&self) -> Vec<&Citizen> {
        self.store.list()
    }

    /// Detail view of one citizen
    pub fn citizen_summary(&self, id: &str, recent_limit: usize) -> AppResult<CitizenSummary> {
        self.store
            .get(id)
            .map(|citizen| CitizenSummary::build(citizen, recent_limit))
            .ok_or_else(|| AppError::NotFound(format!("citizen with ID {}", id)))
    }

    /// Report over every citizen whose zone matches (case-insensitive).
    ///
    /// # Errors
    /// - `AppError::NotFound` if no citizen is registered in `zone`
    pub fn generate_zone_report(&self, zone: &str) -> AppResult<ZoneReport> {
        let citizens: Vec<&Citizen> = self
            .store
            .list()
            .into_iter()
            .filter(|citizen| citizen.in_zone(zone))
            .collect();

        if citizens.is_empty() {
            tracing::warn!(zone = %zone, "Zone report for empty zone");
            return Err(AppError::NotFound(format!(
                "no citizens registered in zone {}",
                zone
            )));
        }

        let report = ZoneReport::build(zone, &citizens);
        tracing::debug!(
            zone = %zone,
            citizens = report.citizen_count,
            points = %report.total_points,
            "Zone report generated"
        );
        Ok(report)
    }

    /// System-wide statistics with a leaderboard of `top_limit` citizens
    pub fn statistics(&self, top_limit: usize) -> SystemStatistics {
        let stats = SystemStatistics::build(&self.store.list(), top_limit);
        tracing::debug!(
            citizens = stats.total_citizens,
            deposits = stats.total_deposits,
            "Statistics generated"
        );
        stats
    }

    /// All citizens sorted by zone then name
    pub fn roster(&self) -> Roster {
        Roster::build(&self.store.list())
    }

    /// Audit trail of every state change
    pub fn audit_log(&self) -> &AuditLog {
        &self.audit
    }
}
