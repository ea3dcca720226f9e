use super::SelectionState;
use crate::core::MapBank;
use std::fmt;

/// Expliziter Kontext, auf dem Edit-Actions arbeiten.
pub struct ActionContext<'a> {
    /// Geladene Maps
    pub maps: &'a mut MapBank,
    /// Aktuelle Selektion
    pub selection: &'a mut SelectionState,
}

impl<'a> ActionContext<'a> {
    /// Erstellt einen Kontext aus getrennten Borrows des AppState.
    pub fn new(maps: &'a mut MapBank, selection: &'a mut SelectionState) -> Self {
        Self { maps, selection }
    }
}

/// Umkehrbare Bearbeitung von Entities.
///
/// `apply` und `revert` müssen sich exakt aufheben: nach `apply` → `revert`
/// ist der beobachtbare Zustand der betroffenen Entities wieder der vorherige,
/// ein erneutes `apply` stellt den Zustand nach dem ersten `apply` her.
pub trait EditAction: fmt::Debug {
    /// Wendet die Bearbeitung an.
    fn apply(&mut self, ctx: &mut ActionContext<'_>) -> anyhow::Result<()>;
    /// Macht die Bearbeitung rückgängig.
    fn revert(&mut self, ctx: &mut ActionContext<'_>) -> anyhow::Result<()>;
    /// Kurzbeschreibung für Menü-Einträge ("Undo: …").
    fn description(&self) -> String;
}

/// Lineare Undo/Redo-History mit Cursor.
///
/// Invariante: `cursor <= records.len()`. Einträge vor dem Cursor sind
/// angewendet, Einträge ab dem Cursor sind rückgängig gemacht.
#[derive(Default)]
pub struct ActionHistory {
    records: Vec<Box<dyn EditAction>>,
    cursor: usize,
}

impl fmt::Debug for ActionHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionHistory")
            .field("len", &self.records.len())
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl ActionHistory {
    /// Erstellt eine leere History.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wendet eine Action an und nimmt sie in die History auf.
    ///
    /// Schlägt `apply` fehl, wird die Action nicht aufgenommen und die
    /// History bleibt unverändert.
    pub fn execute(
        &mut self,
        mut action: Box<dyn EditAction>,
        ctx: &mut ActionContext<'_>,
    ) -> anyhow::Result<()> {
        action.apply(ctx)?;
        self.records.truncate(self.cursor);
        log::debug!("Action ausgeführt: {}", action.description());
        self.records.push(action);
        self.cursor = self.records.len();
        Ok(())
    }

    /// Macht den letzten angewendeten Eintrag rückgängig.
    ///
    /// Liefert `false`, wenn nichts rückgängig zu machen ist. Bei einem Fehler
    /// bleibt der Cursor stehen.
    pub fn undo(&mut self, ctx: &mut ActionContext<'_>) -> anyhow::Result<bool> {
        if self.cursor == 0 {
            return Ok(false);
        }
        self.records[self.cursor - 1].revert(ctx)?;
        self.cursor -= 1;
        Ok(true)
    }

    /// Wendet den nächsten rückgängig gemachten Eintrag erneut an.
    pub fn redo(&mut self, ctx: &mut ActionContext<'_>) -> anyhow::Result<bool> {
        if self.cursor == self.records.len() {
            return Ok(false);
        }
        self.records[self.cursor].apply(ctx)?;
        self.cursor += 1;
        Ok(true)
    }

    /// Macht alle Einträge rückgängig. Liefert die Anzahl der Schritte.
    pub fn undo_all(&mut self, ctx: &mut ActionContext<'_>) -> anyhow::Result<usize> {
        let mut steps = 0;
        while self.undo(ctx)? {
            steps += 1;
        }
        Ok(steps)
    }

    /// Leert die History (z.B. beim Entladen einer Map).
    pub fn clear(&mut self) {
        self.records.clear();
        self.cursor = 0;
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        self.cursor < self.records.len()
    }

    /// Beschreibung des nächsten Undo-Schritts.
    pub fn undo_description(&self) -> Option<String> {
        self.cursor
            .checked_sub(1)
            .map(|index| self.records[index].description())
    }

    /// Beschreibung des nächsten Redo-Schritts.
    pub fn redo_description(&self) -> Option<String> {
        self.records.get(self.cursor).map(|record| record.description())
    }

    /// Anzahl der Einträge (angewendet und rückgängig gemacht).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Gibt `true` zurück, wenn die History leer ist.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Aktuelle Cursor-Position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
