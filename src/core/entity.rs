//! Entity: Repräsentant eines Spielobjekt-Records innerhalb eines Map-Containers.

use super::PropertyValue;
use indexmap::IndexMap;
use std::fmt;

/// Property-Name der Weltposition.
pub const PROP_POSITION: &str = "Position";
/// Property-Name der Rotation (Grad je Achse).
pub const PROP_ROTATION: &str = "Rotation";
/// Property-Name des Modellnamens.
pub const PROP_MODEL_NAME: &str = "ModelName";

/// Container-lokale, stabile Entity-ID (bleibt über Delete/Undo erhalten).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Vollständige Adresse einer Entity über alle geladenen Maps hinweg.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityRef {
    /// ID der Map, in der die Entity liegt
    pub map_id: String,
    /// Container-lokale ID
    pub id: EntityId,
}

impl EntityRef {
    /// Erstellt eine neue Entity-Referenz.
    pub fn new(map_id: impl Into<String>, id: EntityId) -> Self {
        Self {
            map_id: map_id.into(),
            id,
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.map_id, self.id)
    }
}

/// Ein Spielobjekt innerhalb eines Map-Containers.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Eindeutiger Name innerhalb des Containers
    pub name: String,
    /// Typ-Tag (z.B. `Enemy`, `Asset`, `Region`)
    pub kind: String,
    /// Sichtbarkeit im Editor
    pub editor_visible: bool,
    /// Eltern-Entity im Baum (None = Wurzelebene)
    pub parent: Option<EntityId>,
    /// Benannte, typisierte Properties in Definitionsreihenfolge
    pub properties: IndexMap<String, PropertyValue>,
}

impl Entity {
    /// Erstellt eine sichtbare Entity ohne Properties.
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            editor_visible: true,
            parent: None,
            properties: IndexMap::new(),
        }
    }

    /// Builder: setzt eine Property.
    pub fn with_property(mut self, key: impl Into<String>, value: PropertyValue) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    /// Anzeigename (ohne Alias-Auflösung).
    pub fn display_name(&self) -> &str {
        &self.name
    }

    /// Liest eine Property, optional an einem Array-Index.
    pub fn property(&self, key: &str, index: Option<usize>) -> Option<&PropertyValue> {
        let value = self.properties.get(key)?;
        match index {
            Some(i) => value.element(i),
            None => Some(value),
        }
    }

    /// Modellname (nur bei Text-Property `ModelName`, leerer Name zählt nicht).
    pub fn model_name(&self) -> Option<&str> {
        self.properties
            .get(PROP_MODEL_NAME)
            .and_then(PropertyValue::as_text)
            .filter(|name| !name.is_empty())
    }
}
