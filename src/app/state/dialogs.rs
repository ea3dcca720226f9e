//! UI-nahe Zustände: Statusmeldung, Select-All-Konfiguration, offene Rückfragen.

use crate::core::{EntityRef, FilterMode};

/// Eingaben des "Select All by Configuration"-Werkzeugs.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectAllConfig {
    /// Filter-Befehle (ein Eingabefeld je Befehl)
    pub inputs: Vec<String>,
    /// Verknüpfungsmodus
    pub mode: FilterMode,
}

impl SelectAllConfig {
    /// Ein leeres Eingabefeld (matcht alles) im gegebenen Modus.
    pub fn new(mode: FilterMode) -> Self {
        Self {
            inputs: vec![String::new()],
            mode,
        }
    }
}

impl Default for SelectAllConfig {
    fn default() -> Self {
        Self::new(FilterMode::And)
    }
}

/// Ein fehlgeschlagenes Speichern wegen eines fehlenden Verweises.
///
/// Der Host bietet an, die verweisende Entity zu selektieren.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveFailureDialog {
    /// Verweisende Entity
    pub referrer: EntityRef,
    /// Name der verweisenden Entity
    pub referrer_name: String,
    /// Betroffene Property
    pub property: String,
    /// Nicht auflösbarer Ziel-Name
    pub target: String,
}

/// UI-Zustand außerhalb von Selektion und Daten.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Letzte Meldung für den Benutzer (Validierungsfehler, Hinweise)
    pub status_message: Option<String>,
    /// Konfiguration für Select-All
    pub select_all: SelectAllConfig,
    /// Offener Speicherfehler-Dialog
    pub save_failure: Option<SaveFailureDialog>,
    /// Gruppe, deren Löschen auf Bestätigung wartet
    pub pending_group_delete: Option<String>,
}

impl UiState {
    /// Erstellt den UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt eine Statusmeldung.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}
