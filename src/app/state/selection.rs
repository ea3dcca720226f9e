use crate::core::EntityRef;
use indexmap::IndexSet;

/// Selektierbares Element: eine Entity oder der Container einer ganzen Map.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selectable {
    /// Einzelne Entity
    Entity(EntityRef),
    /// Container-Referenz (ganze Map, wenn keine Entity-Wurzel existiert)
    MapRoot(String),
}

impl Selectable {
    /// Entity-Referenz, falls das Element eine Entity ist.
    pub fn as_entity(&self) -> Option<&EntityRef> {
        match self {
            Self::Entity(entity_ref) => Some(entity_ref),
            Self::MapRoot(_) => None,
        }
    }

    /// Map-ID, zu der das Element gehört.
    pub fn map_id(&self) -> &str {
        match self {
            Self::Entity(entity_ref) => &entity_ref.map_id,
            Self::MapRoot(map_id) => map_id,
        }
    }
}

impl From<EntityRef> for Selectable {
    fn from(entity_ref: EntityRef) -> Self {
        Self::Entity(entity_ref)
    }
}

/// Auswahlbezogener Anwendungszustand
///
/// Invariante: keine Duplikate, Einfügereihenfolge bleibt erhalten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Aktuell selektierte Elemente in Einfügereihenfolge
    selected: IndexSet<Selectable>,
    /// Einmaliges Sprungziel für den Content-Baum (wird nach Gebrauch gelöscht)
    goto_target: Option<Selectable>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt ein Element hinzu. Liefert `false`, wenn es bereits selektiert war.
    pub fn add(&mut self, item: impl Into<Selectable>) -> bool {
        self.selected.insert(item.into())
    }

    /// Entfernt ein Element unter Beibehaltung der Reihenfolge.
    pub fn remove(&mut self, item: &Selectable) -> bool {
        self.selected.shift_remove(item)
    }

    /// Schaltet die Selektion eines Elements um. Liefert den neuen Zustand.
    pub fn toggle(&mut self, item: impl Into<Selectable>) -> bool {
        let item = item.into();
        if self.selected.shift_remove(&item) {
            false
        } else {
            self.selected.insert(item);
            true
        }
    }

    /// Hebt die Selektion auf.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Ersetzt die Selektion vollständig.
    pub fn replace<I>(&mut self, items: I)
    where
        I: IntoIterator,
        I::Item: Into<Selectable>,
    {
        self.selected.clear();
        self.selected.extend(items.into_iter().map(Into::into));
    }

    /// Prüft, ob ein Element selektiert ist.
    pub fn is_selected(&self, item: &Selectable) -> bool {
        self.selected.contains(item)
    }

    /// Prüft, ob eine Entity selektiert ist.
    pub fn is_entity_selected(&self, entity_ref: &EntityRef) -> bool {
        self.selected.contains(&Selectable::Entity(entity_ref.clone()))
    }

    /// Gibt `true` zurück, wenn nichts selektiert ist.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Anzahl selektierter Elemente.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Iteriert in Einfügereihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &Selectable> {
        self.selected.iter()
    }

    /// Nur die selektierten Entities (ohne Container-Referenzen).
    pub fn entities(&self) -> impl Iterator<Item = &EntityRef> {
        self.selected.iter().filter_map(Selectable::as_entity)
    }

    /// Selektierte Entities als eigene Liste (für Action-Konstruktion).
    pub fn entity_refs(&self) -> Vec<EntityRef> {
        self.entities().cloned().collect()
    }

    /// Erste selektierte Entity.
    pub fn first_entity(&self) -> Option<&EntityRef> {
        self.entities().next()
    }

    /// Entfernt alle Elemente einer Map (z.B. beim Entladen).
    pub fn remove_map(&mut self, map_id: &str) {
        self.selected.retain(|item| item.map_id() != map_id);
        if self
            .goto_target
            .as_ref()
            .is_some_and(|target| target.map_id() == map_id)
        {
            self.goto_target = None;
        }
    }

    /// Kopie der aktuellen Selektion (für Undo von Actions).
    pub fn snapshot(&self) -> Vec<Selectable> {
        self.selected.iter().cloned().collect()
    }

    /// Setzt das Sprungziel.
    pub fn set_goto_target(&mut self, target: impl Into<Selectable>) {
        self.goto_target = Some(target.into());
    }

    /// Prüft, ob der Content-Baum zu diesem Element springen soll.
    pub fn should_goto(&self, item: &Selectable) -> bool {
        self.goto_target.as_ref() == Some(item)
    }

    /// Aktuelles Sprungziel.
    pub fn goto_target(&self) -> Option<&Selectable> {
        self.goto_target.as_ref()
    }

    /// Löscht das Sprungziel nach Gebrauch.
    pub fn clear_goto_target(&mut self) {
        self.goto_target = None;
    }
}
