//! MapBank: Sammlung aller aktuell geladenen Map-Container.

use super::{Entity, EntityId, EntityRef, MapContainer};
use indexmap::IndexMap;

/// Fehler beim Zugriff auf geladene Maps.
#[derive(Debug, thiserror::Error)]
pub enum MapBankError {
    /// Map ist nicht geladen
    #[error("Map {0} ist nicht geladen")]
    MapNotLoaded(String),
    /// Entity existiert nicht (mehr)
    #[error("Entity {id} existiert nicht in Map {map_id}")]
    UnknownEntity { map_id: String, id: EntityId },
    /// Name ist im Container bereits vergeben
    #[error("Name {name} ist in Map {map_id} bereits vergeben")]
    DuplicateName { map_id: String, name: String },
    /// ID ist im Container bereits vergeben
    #[error("ID {id} ist in Map {map_id} bereits vergeben")]
    DuplicateId { map_id: String, id: EntityId },
}

/// Alle geladenen Map-Container, in Ladereihenfolge.
#[derive(Debug, Clone, Default)]
pub struct MapBank {
    maps: IndexMap<String, MapContainer>,
    active_map_id: Option<String>,
}

impl MapBank {
    /// Erstellt eine leere MapBank.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installiert einen geladenen Container (ersetzt eine gleichnamige Map)
    /// und macht ihn zur aktiven Map.
    pub fn install(&mut self, container: MapContainer) {
        let map_id = container.map_id().to_string();
        self.maps.insert(map_id.clone(), container);
        self.active_map_id = Some(map_id);
    }

    /// Entfernt einen Container. Die aktive Map fällt auf die zuletzt geladene zurück.
    pub fn unload(&mut self, map_id: &str) -> Option<MapContainer> {
        let removed = self.maps.shift_remove(map_id);
        if self.active_map_id.as_deref() == Some(map_id) {
            self.active_map_id = self.maps.keys().last().cloned();
        }
        removed
    }

    /// Entfernt alle Container.
    pub fn unload_all(&mut self) {
        self.maps.clear();
        self.active_map_id = None;
    }

    /// Gibt `true` zurück, wenn mindestens eine Map geladen ist.
    pub fn is_any_loaded(&self) -> bool {
        !self.maps.is_empty()
    }

    /// Prüft, ob eine Map geladen ist.
    pub fn is_loaded(&self, map_id: &str) -> bool {
        self.maps.contains_key(map_id)
    }

    /// IDs aller geladenen Maps.
    pub fn map_ids(&self) -> impl Iterator<Item = &str> {
        self.maps.keys().map(String::as_str)
    }

    /// Setzt die aktive Map (muss geladen sein).
    pub fn set_active(&mut self, map_id: &str) -> Result<(), MapBankError> {
        if !self.maps.contains_key(map_id) {
            return Err(MapBankError::MapNotLoaded(map_id.to_string()));
        }
        self.active_map_id = Some(map_id.to_string());
        Ok(())
    }

    /// ID der aktiven Map.
    pub fn active_map_id(&self) -> Option<&str> {
        self.active_map_id.as_deref()
    }

    /// Aktiver Container.
    pub fn active(&self) -> Option<&MapContainer> {
        self.active_map_id
            .as_deref()
            .and_then(|map_id| self.maps.get(map_id))
    }

    /// Container per Map-ID.
    pub fn container(&self, map_id: &str) -> Option<&MapContainer> {
        self.maps.get(map_id)
    }

    /// Mutabler Container per Map-ID.
    pub fn container_mut(&mut self, map_id: &str) -> Result<&mut MapContainer, MapBankError> {
        self.maps
            .get_mut(map_id)
            .ok_or_else(|| MapBankError::MapNotLoaded(map_id.to_string()))
    }

    /// Iteriert über alle geladenen Container.
    pub fn containers(&self) -> impl Iterator<Item = &MapContainer> {
        self.maps.values()
    }

    /// Löst eine Entity-Referenz auf.
    pub fn entity(&self, entity_ref: &EntityRef) -> Option<&Entity> {
        self.maps.get(&entity_ref.map_id)?.get(entity_ref.id)
    }

    /// Löst eine Entity-Referenz mutabel auf.
    pub fn entity_mut(&mut self, entity_ref: &EntityRef) -> Result<&mut Entity, MapBankError> {
        self.container_mut(&entity_ref.map_id)?
            .get_mut(entity_ref.id)
            .ok_or_else(|| MapBankError::UnknownEntity {
                map_id: entity_ref.map_id.clone(),
                id: entity_ref.id,
            })
    }

    /// Alle Entities aller Maps, deren Name in `names` enthalten ist.
    ///
    /// Reihenfolge: Ladereihenfolge der Maps, dann Container-Reihenfolge.
    pub fn find_by_names<'a>(
        &'a self,
        names: &'a [String],
    ) -> impl Iterator<Item = EntityRef> + 'a {
        self.maps.iter().flat_map(move |(map_id, container)| {
            container
                .iter()
                .filter(move |(_, entity)| names.iter().any(|name| *name == entity.name))
                .map(move |(id, _)| EntityRef::new(map_id.clone(), id))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container(map_id: &str, names: &[&str]) -> MapContainer {
        let mut container = MapContainer::new(map_id);
        for name in names {
            container.insert(Entity::new(*name, "Asset")).unwrap();
        }
        container
    }

    #[test]
    fn install_makes_map_active() {
        let mut bank = MapBank::new();
        bank.install(container("m10_00_00_00", &["a"]));
        bank.install(container("m11_00_00_00", &["b"]));
        assert_eq!(bank.active_map_id(), Some("m11_00_00_00"));
    }

    #[test]
    fn unload_active_falls_back_to_last_loaded() {
        let mut bank = MapBank::new();
        bank.install(container("m10_00_00_00", &["a"]));
        bank.install(container("m11_00_00_00", &["b"]));
        bank.unload("m11_00_00_00");
        assert_eq!(bank.active_map_id(), Some("m10_00_00_00"));
        bank.unload("m10_00_00_00");
        assert_eq!(bank.active_map_id(), None);
        assert!(!bank.is_any_loaded());
    }

    #[test]
    fn find_by_names_spans_all_maps() {
        let mut bank = MapBank::new();
        bank.install(container("m10_00_00_00", &["a", "b"]));
        bank.install(container("m11_00_00_00", &["b", "c"]));
        let names = vec!["b".to_string(), "zzz".to_string()];
        let found: Vec<_> = bank.find_by_names(&names).collect();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].map_id, "m10_00_00_00");
        assert_eq!(found[1].map_id, "m11_00_00_00");
    }

    #[test]
    fn set_active_requires_loaded_map() {
        let mut bank = MapBank::new();
        assert!(matches!(
            bank.set_active("m99_00_00_00"),
            Err(MapBankError::MapNotLoaded(_))
        ));
    }
}
