//! Selektions-Filter ("Select All by Configuration").
//!
//! Ein Filter besteht aus mehreren Befehlen und einem Verknüpfungsmodus:
//! - Namensfilter: Teilstring-Match gegen den Anzeigenamen (case-insensitive)
//! - `prop:<Name>[<Index>] <op> <Wert>` mit `op` ∈ {`=`, `<`, `>`}
//! - `!` vor einem Befehl negiert dessen Ergebnis
//!
//! Fehlende Properties und ungültige Indizes gelten als "kein Match".

mod command;

pub use command::{FilterCommand, FilterTerm, PROPERTY_PREFIX};

use super::Entity;
use serde::{Deserialize, Serialize};

/// Verknüpfung der Einzelergebnisse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterMode {
    /// Alle Befehle müssen matchen
    #[default]
    And,
    /// Mindestens ein Befehl muss matchen
    Or,
}

/// Vorgeparster Filter, wiederverwendbar für viele Entities.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionFilter {
    terms: Vec<FilterTerm>,
    mode: FilterMode,
}

impl SelectionFilter {
    /// Parst die Befehle einmalig.
    pub fn new<S: AsRef<str>>(commands: &[S], mode: FilterMode) -> Self {
        let terms = commands
            .iter()
            .map(|command| FilterTerm::parse(command.as_ref()))
            .collect();
        Self { terms, mode }
    }

    /// Geparste Befehle.
    pub fn terms(&self) -> &[FilterTerm] {
        &self.terms
    }

    /// Verknüpfungsmodus.
    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Prüft, ob die Entity den Filter erfüllt.
    pub fn matches(&self, entity: &Entity) -> bool {
        let mut results = self.terms.iter().map(|term| evaluate_term(term, entity));
        match self.mode {
            FilterMode::And => results.all(|hit| hit),
            FilterMode::Or => results.any(|hit| hit),
        }
    }
}

/// Wertet einen einzelnen Befehl (inkl. Negation) gegen eine Entity aus.
pub fn evaluate_term(term: &FilterTerm, entity: &Entity) -> bool {
    let hit = match &term.command {
        FilterCommand::Name(needle) => entity.display_name().to_lowercase().contains(needle),
        FilterCommand::Property {
            name,
            index,
            comparator,
            value,
        } => entity
            .property(name, *index)
            .is_some_and(|property| property.compare(*comparator, value)),
        FilterCommand::Invalid(_) => false,
    };
    hit != term.negated
}
