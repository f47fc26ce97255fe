//! Observable notifications emitted by ledger operations.
//!
//! Events are fire-and-forget: a sink receives them in order after the
//! state change they describe has been applied. Nothing is retried.

use crate::store::{CallerId, ContractId};
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

/// A notification for external observers and indexers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum LedgerEvent {
    /// Emitted first when a report is created
    AnalysisCompleted {
        caller: CallerId,
        target_contract: ContractId,
        original_gas_used: u64,
    },

    /// Emitted second when a report is created
    ReportGenerated {
        target_contract: ContractId,
        gas_saved: u64,
        created_at: DateTime<Utc>,
    },

    /// Emitted when a report is reconciled
    OptimizationApplied {
        target_contract: ContractId,
        original_gas_used: u64,
        actual_optimized_gas: u64,
    },
}

impl LedgerEvent {
    pub fn name(&self) -> &'static str {
        match self {
            LedgerEvent::AnalysisCompleted { .. } => "AnalysisCompleted",
            LedgerEvent::ReportGenerated { .. } => "ReportGenerated",
            LedgerEvent::OptimizationApplied { .. } => "OptimizationApplied",
        }
    }
}

/// Receiver of ledger events
pub trait EventSink {
    fn emit(&mut self, event: LedgerEvent);
}

/// In-memory ordered event recorder
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    events: Vec<LedgerEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Remove and return everything recorded so far
    pub fn drain(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: LedgerEvent) {
        debug!("Event #{}: {}", self.events.len(), event.name());
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_preserves_order() {
        let mut log = EventLog::new();
        log.emit(LedgerEvent::OptimizationApplied {
            target_contract: ContractId::new("0x1"),
            original_gas_used: 10,
            actual_optimized_gas: 5,
        });
        log.emit(LedgerEvent::AnalysisCompleted {
            caller: CallerId::new("alice"),
            target_contract: ContractId::new("0x2"),
            original_gas_used: 20,
        });

        let names: Vec<_> = log.events().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["OptimizationApplied", "AnalysisCompleted"]);

        let drained = log.drain();
        assert_eq!(drained.len(), 2);
        assert!(log.is_empty());
    }

    #[test]
    fn test_event_serializes_with_tag() {
        let event = LedgerEvent::OptimizationApplied {
            target_contract: ContractId::new("0x1"),
            original_gas_used: 10,
            actual_optimized_gas: 5,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "OptimizationApplied");
        assert_eq!(json["target_contract"], "0x1");
        assert_eq!(json["actual_optimized_gas"], 5);
    }
}
