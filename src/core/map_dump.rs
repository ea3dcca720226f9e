//! Headless JSON-Dump eines Map-Containers (Test-Fixtures und Host-Binary).
//!
//! Kein Spiel-Asset-Format: der Dump bildet nur Name, Typ, Sichtbarkeit,
//! Baum-Verknüpfung und Properties ab.

use super::{Entity, MapContainer, PropertyValue};
use anyhow::Context;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serialisierte Form einer Entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityDump {
    /// Eindeutiger Name
    pub name: String,
    /// Typ-Tag
    pub kind: String,
    /// Sichtbarkeit im Editor
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// Name der Eltern-Entity
    #[serde(default)]
    pub parent: Option<String>,
    /// Properties
    #[serde(default)]
    pub properties: IndexMap<String, PropertyValue>,
}

fn default_visible() -> bool {
    true
}

/// Serialisierte Form eines Map-Containers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapDump {
    /// ID der Map
    pub map_id: String,
    /// Entities in Baum-Reihenfolge
    pub entities: Vec<EntityDump>,
}

impl MapDump {
    /// Parst einen Dump aus JSON-Text.
    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        serde_json::from_str(content).context("Map-Dump ist kein gültiges JSON")
    }

    /// Liest einen Dump von der Platte.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Map-Dump nicht lesbar: {}", path.display()))?;
        Self::from_json(&content)
    }

    /// Baut den Container auf. Eltern-Namen werden nach dem Einfügen aller
    /// Entities aufgelöst; unbekannte Eltern werden mit Warnung ignoriert.
    pub fn into_container(self) -> anyhow::Result<MapContainer> {
        let mut container = MapContainer::new(self.map_id);
        let mut pending_parents = Vec::new();

        for dump in self.entities {
            let mut entity = Entity::new(dump.name, dump.kind);
            entity.editor_visible = dump.visible;
            entity.properties = dump.properties;
            let id = container.insert(entity)?;
            if let Some(parent) = dump.parent {
                pending_parents.push((id, parent));
            }
        }

        for (id, parent_name) in pending_parents {
            match container.find_by_name(&parent_name) {
                Some(parent_id) => {
                    if let Some(entity) = container.get_mut(id) {
                        entity.parent = Some(parent_id);
                    }
                }
                None => log::warn!(
                    "Map {}: Eltern-Entity {} nicht gefunden",
                    container.map_id(),
                    parent_name
                ),
            }
        }

        Ok(container)
    }

    /// Erstellt einen Dump aus einem Container.
    pub fn from_container(container: &MapContainer) -> Self {
        let entities = container
            .iter()
            .map(|(_, entity)| EntityDump {
                name: entity.name.clone(),
                kind: entity.kind.clone(),
                visible: entity.editor_visible,
                parent: entity
                    .parent
                    .and_then(|parent| container.get(parent))
                    .map(|parent| parent.name.clone()),
                properties: entity.properties.clone(),
            })
            .collect();

        Self {
            map_id: container.map_id().to_string(),
            entities,
        }
    }

    /// Schreibt den Dump als JSON.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Map-Dump nicht schreibbar: {}", path.display()))?;
        Ok(())
    }
}
