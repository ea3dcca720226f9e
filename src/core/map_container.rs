//! Map-Container: alle Entities einer geladenen Map mit stabilen IDs.

use super::{Entity, EntityId, MapBankError, PropertyValue};
use indexmap::IndexMap;
use std::collections::HashMap;

/// Ein fehlender Entity-Verweis (Ref-Property zeigt auf unbekannten Namen).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingReference {
    /// Verweisende Entity
    pub referrer: EntityId,
    /// Name der verweisenden Entity
    pub referrer_name: String,
    /// Property, die den Verweis enthält
    pub property: String,
    /// Name des nicht gefundenen Ziels
    pub target: String,
}

/// Geladener Map-Container.
///
/// Invariante: Entity-Namen sind innerhalb des Containers eindeutig. Die
/// Reihenfolge der Entities entspricht der Reihenfolge im Content-Baum.
#[derive(Debug, Clone)]
pub struct MapContainer {
    map_id: String,
    entities: IndexMap<EntityId, Entity>,
    names: HashMap<String, EntityId>,
    next_id: u64,
}

impl MapContainer {
    /// Erstellt einen leeren Container.
    pub fn new(map_id: impl Into<String>) -> Self {
        Self {
            map_id: map_id.into(),
            entities: IndexMap::new(),
            names: HashMap::new(),
            next_id: 1,
        }
    }

    /// ID der Map.
    pub fn map_id(&self) -> &str {
        &self.map_id
    }

    /// Anzahl der Entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Gibt `true` zurück, wenn der Container keine Entities enthält.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Hängt eine Entity an und vergibt eine neue ID.
    pub fn insert(&mut self, entity: Entity) -> Result<EntityId, MapBankError> {
        if self.names.contains_key(&entity.name) {
            return Err(MapBankError::DuplicateName {
                map_id: self.map_id.clone(),
                name: entity.name,
            });
        }
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.names.insert(entity.name.clone(), id);
        self.entities.insert(id, entity);
        Ok(id)
    }

    /// Fügt eine Entity mit bekannter ID an einer Position ein (Undo von Delete).
    pub fn insert_at(
        &mut self,
        index: usize,
        id: EntityId,
        entity: Entity,
    ) -> Result<(), MapBankError> {
        if self.entities.contains_key(&id) {
            return Err(MapBankError::DuplicateId {
                map_id: self.map_id.clone(),
                id,
            });
        }
        if self.names.contains_key(&entity.name) {
            return Err(MapBankError::DuplicateName {
                map_id: self.map_id.clone(),
                name: entity.name,
            });
        }
        self.names.insert(entity.name.clone(), id);
        let index = index.min(self.entities.len());
        self.entities.shift_insert(index, id, entity);
        self.next_id = self.next_id.max(id.0 + 1);
        Ok(())
    }

    /// Entfernt eine Entity und liefert ihre bisherige Position.
    pub fn remove(&mut self, id: EntityId) -> Option<(usize, Entity)> {
        let (index, _, entity) = self.entities.shift_remove_full(&id)?;
        self.names.remove(&entity.name);
        Some((index, entity))
    }

    /// Liest eine Entity.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    /// Mutabler Zugriff auf eine Entity.
    ///
    /// Der Name darf hierüber nicht geändert werden, dafür gibt es `rename`.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    /// Benennt eine Entity um (Name muss im Container frei sein).
    pub fn rename(&mut self, id: EntityId, new_name: &str) -> Result<String, MapBankError> {
        if self.names.get(new_name).is_some_and(|&owner| owner != id) {
            return Err(MapBankError::DuplicateName {
                map_id: self.map_id.clone(),
                name: new_name.to_string(),
            });
        }
        let entity = self
            .entities
            .get_mut(&id)
            .ok_or_else(|| MapBankError::UnknownEntity {
                map_id: self.map_id.clone(),
                id,
            })?;
        let old_name = std::mem::replace(&mut entity.name, new_name.to_string());
        self.names.remove(&old_name);
        self.names.insert(new_name.to_string(), id);
        Ok(old_name)
    }

    /// Sucht eine Entity per Name.
    pub fn find_by_name(&self, name: &str) -> Option<EntityId> {
        self.names.get(name).copied()
    }

    /// Prüft, ob eine Entity existiert.
    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    /// Iteriert in Baum-Reihenfolge über alle Entities.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entities.iter().map(|(id, entity)| (*id, entity))
    }

    /// Position einer Entity in der Container-Reihenfolge.
    pub fn position_of(&self, id: EntityId) -> Option<usize> {
        self.entities.get_index_of(&id)
    }

    /// Verschiebt eine Entity an eine neue Position. Liefert die alte Position.
    pub fn move_to(&mut self, id: EntityId, new_index: usize) -> Option<usize> {
        let old_index = self.entities.get_index_of(&id)?;
        let new_index = new_index.min(self.entities.len().saturating_sub(1));
        self.entities.move_index(old_index, new_index);
        Some(old_index)
    }

    /// Direkte Kinder einer Entity in Container-Reihenfolge.
    pub fn children_of(&self, parent: EntityId) -> Vec<EntityId> {
        self.entities
            .iter()
            .filter(|(_, entity)| entity.parent == Some(parent))
            .map(|(id, _)| *id)
            .collect()
    }

    /// Erzeugt einen im Container freien Namen auf Basis von `base`.
    ///
    /// Ein numerisches Suffix (`c1000_0003`) wird unter Beibehaltung der
    /// Stellenzahl hochgezählt, sonst wird `_0001` angehängt. Ist das Suffix
    /// nicht mehr hochzählbar, bekommt der volle Name ein neues `_0001`.
    pub fn unique_name(&self, base: &str) -> String {
        let numbered = base.rsplit_once('_').and_then(|(stem, digits)| {
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let start = digits.parse::<u64>().ok()?;
            self.next_free_name(stem, digits.len(), start)
        });
        numbered
            .or_else(|| self.next_free_name(base, 4, 0))
            .unwrap_or_else(|| format!("{base}_{}", self.len()))
    }

    /// Erster freier Name `<stem>_<n>` mit `n > start`. `None` bei Zähler-Überlauf.
    fn next_free_name(&self, stem: &str, width: usize, start: u64) -> Option<String> {
        let mut counter = start;
        loop {
            counter = counter.checked_add(1)?;
            let candidate = format!("{stem}_{counter:0width$}");
            if !self.names.contains_key(&candidate) {
                return Some(candidate);
            }
        }
    }

    /// Sammelt alle Ref-Properties, deren Ziel im Container nicht existiert.
    pub fn missing_references(&self) -> Vec<MissingReference> {
        let mut missing = Vec::new();
        for (id, entity) in self.iter() {
            for (key, value) in &entity.properties {
                collect_missing(self, id, entity, key, value, &mut missing);
            }
        }
        missing
    }
}

fn collect_missing(
    container: &MapContainer,
    id: EntityId,
    entity: &Entity,
    key: &str,
    value: &PropertyValue,
    out: &mut Vec<MissingReference>,
) {
    match value {
        PropertyValue::Ref(target) if !target.is_empty() => {
            if container.find_by_name(target).is_none() {
                out.push(MissingReference {
                    referrer: id,
                    referrer_name: entity.name.clone(),
                    property: key.to_string(),
                    target: target.clone(),
                });
            }
        }
        PropertyValue::Array(items) => {
            for item in items {
                collect_missing(container, id, entity, key, item, out);
            }
        }
        _ => {}
    }
}
