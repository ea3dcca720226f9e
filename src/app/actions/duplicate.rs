//! Action: Entities duplizieren.

use super::dedup_targets;
use crate::app::state::Selectable;
use crate::app::{ActionContext, EditAction};
use crate::core::{Entity, EntityRef, MapBank};

/// Dupliziert die Ziel-Entities in ihrer jeweiligen Map.
///
/// Kopien erhalten einen freien Namen und werden am Ende des Containers
/// angehängt. Die Selektion wechselt auf die Kopien. Redo fügt die Kopien
/// mit denselben IDs wieder ein, damit spätere History-Einträge gültig bleiben.
#[derive(Debug)]
pub struct DuplicateEntitiesAction {
    targets: Vec<EntityRef>,
    created: Vec<(EntityRef, Entity)>,
    previous_selection: Vec<Selectable>,
}

impl DuplicateEntitiesAction {
    /// Erstellt die Action.
    pub fn new(targets: Vec<EntityRef>) -> Self {
        Self {
            targets: dedup_targets(targets),
            created: Vec::new(),
            previous_selection: Vec::new(),
        }
    }

    /// Referenzen der erzeugten Kopien (nach dem ersten `apply`).
    pub fn created(&self) -> impl Iterator<Item = &EntityRef> {
        self.created.iter().map(|(entity_ref, _)| entity_ref)
    }

    fn create_copies(&mut self, maps: &mut MapBank) -> anyhow::Result<()> {
        for target in &self.targets {
            let source = maps
                .entity(target)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("Entity {target} existiert nicht"))?;
            let container = maps.container_mut(&target.map_id)?;
            let mut copy = source;
            copy.name = container.unique_name(&copy.name);
            let id = container.insert(copy.clone())?;
            self.created.push((EntityRef::new(target.map_id.clone(), id), copy));
        }
        Ok(())
    }

    fn reinsert_copies(&self, maps: &mut MapBank) -> anyhow::Result<()> {
        for (entity_ref, entity) in &self.created {
            let container = maps.container_mut(&entity_ref.map_id)?;
            let end = container.len();
            container.insert_at(end, entity_ref.id, entity.clone())?;
        }
        Ok(())
    }

    fn remove_copies(&self, maps: &mut MapBank) -> anyhow::Result<()> {
        for (entity_ref, _) in self.created.iter().rev() {
            maps.container_mut(&entity_ref.map_id)?.remove(entity_ref.id);
        }
        Ok(())
    }
}

impl EditAction for DuplicateEntitiesAction {
    fn apply(&mut self, ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
        if self.created.is_empty() {
            if let Err(err) = self.create_copies(ctx.maps) {
                // Teilweise angelegte Kopien wieder entfernen
                self.remove_copies(ctx.maps)?;
                self.created.clear();
                return Err(err);
            }
        } else {
            self.reinsert_copies(ctx.maps)?;
        }

        self.previous_selection = ctx.selection.snapshot();
        ctx.selection
            .replace(self.created.iter().map(|(entity_ref, _)| entity_ref.clone()));
        Ok(())
    }

    fn revert(&mut self, ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
        self.remove_copies(ctx.maps)?;
        ctx.selection.replace(self.previous_selection.iter().cloned());
        Ok(())
    }

    fn description(&self) -> String {
        format!("Duplicate {} entities", self.targets.len())
    }
}
