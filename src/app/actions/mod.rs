//! Konkrete, umkehrbare Edit-Actions für Entities.
//!
//! Jede Action hält alles, was sie zum Rückgängigmachen braucht, selbst fest,
//! damit Do → Undo → Redo denselben Zustand ergibt wie Do.

mod compound;
mod delete;
mod duplicate;
mod property;
mod reorder;
mod transform;

pub use compound::CompoundAction;
pub use delete::DeleteEntitiesAction;
pub use duplicate::DuplicateEntitiesAction;
pub use property::{SetPropertyAction, SetVisibilityAction, VisibilityChange};
pub use reorder::{ReorderDirection, ReorderEntityAction};
pub use transform::{RotateEntitiesAction, ScrambleEntitiesAction, TranslateEntitiesAction};

use crate::core::{EntityRef, MapBank, PropertyValue};

/// Vorherige Werte einer Property je Entity (None = Property existierte nicht).
#[derive(Debug, Clone, Default)]
pub(crate) struct PropertySnapshot {
    entries: Vec<(EntityRef, Option<PropertyValue>)>,
}

impl PropertySnapshot {
    /// Hält den aktuellen Wert von `key` für alle Ziele fest.
    pub(crate) fn capture(maps: &MapBank, targets: &[EntityRef], key: &str) -> anyhow::Result<Self> {
        let mut entries = Vec::with_capacity(targets.len());
        for target in targets {
            let entity = maps
                .entity(target)
                .ok_or_else(|| anyhow::anyhow!("Entity {target} existiert nicht"))?;
            entries.push((target.clone(), entity.properties.get(key).cloned()));
        }
        Ok(Self { entries })
    }

    /// Schreibt die festgehaltenen Werte zurück.
    pub(crate) fn restore(&self, maps: &mut MapBank, key: &str) -> anyhow::Result<()> {
        for (target, value) in &self.entries {
            let entity = maps.entity_mut(target)?;
            match value {
                Some(value) => {
                    entity.properties.insert(key.to_string(), value.clone());
                }
                None => {
                    entity.properties.shift_remove(key);
                }
            }
        }
        Ok(())
    }
}

/// Entfernt doppelte Ziele unter Beibehaltung der Reihenfolge.
pub(crate) fn dedup_targets(targets: Vec<EntityRef>) -> Vec<EntityRef> {
    let set: indexmap::IndexSet<EntityRef> = targets.into_iter().collect();
    set.into_iter().collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::app::{ActionContext, ActionHistory, SelectionState};
    use crate::core::{Entity, EntityRef, MapBank, MapContainer, PropertyValue};
    use glam::Vec3;

    pub const MAP_ID: &str = "m10_00_00_00";

    /// Map mit drei Gegnern (Position/Rotation gesetzt) und einer Region ohne Transform.
    pub struct Fixture {
        pub maps: MapBank,
        pub selection: SelectionState,
        pub history: ActionHistory,
    }

    impl Fixture {
        pub fn new() -> Self {
            let mut container = MapContainer::new(MAP_ID);
            for (i, name) in ["c1000_0000", "c1000_0001", "c1000_0002"].iter().enumerate() {
                let f = i as f32;
                container
                    .insert(
                        Entity::new(*name, "Enemy")
                            .with_property("EntityID", PropertyValue::Int(1000 + i as i64))
                            .with_property("Position", PropertyValue::Vec3(Vec3::new(f, 0.0, f)))
                            .with_property("Rotation", PropertyValue::Vec3(Vec3::new(0.0, 350.0, 0.0))),
                    )
                    .unwrap();
            }
            container.insert(Entity::new("region_01", "Region")).unwrap();

            let mut maps = MapBank::new();
            maps.install(container);
            Self {
                maps,
                selection: SelectionState::new(),
                history: ActionHistory::new(),
            }
        }

        pub fn entity_ref(&self, name: &str) -> EntityRef {
            let id = self
                .maps
                .container(MAP_ID)
                .and_then(|c| c.find_by_name(name))
                .unwrap_or_else(|| panic!("{name} fehlt"));
            EntityRef::new(MAP_ID, id)
        }

        pub fn names(&self) -> Vec<String> {
            self.maps
                .container(MAP_ID)
                .unwrap()
                .iter()
                .map(|(_, e)| e.name.clone())
                .collect()
        }

        pub fn execute(&mut self, action: Box<dyn crate::app::EditAction>) -> anyhow::Result<()> {
            let mut ctx = ActionContext::new(&mut self.maps, &mut self.selection);
            self.history.execute(action, &mut ctx)
        }

        pub fn undo(&mut self) {
            let mut ctx = ActionContext::new(&mut self.maps, &mut self.selection);
            assert!(self.history.undo(&mut ctx).unwrap());
        }

        pub fn redo(&mut self) {
            let mut ctx = ActionContext::new(&mut self.maps, &mut self.selection);
            assert!(self.history.redo(&mut ctx).unwrap());
        }

        pub fn container(&self) -> &MapContainer {
            self.maps.container(MAP_ID).unwrap()
        }
    }
}
