//! Action: Entities löschen.

use super::dedup_targets;
use crate::app::state::Selectable;
use crate::app::{ActionContext, EditAction};
use crate::core::{Entity, EntityId, EntityRef};

/// Gelöschte Entity mit ihrer ursprünglichen Position.
#[derive(Debug, Clone)]
struct RemovedEntity {
    entity_ref: EntityRef,
    index: usize,
    entity: Entity,
}

/// Löscht die Ziel-Entities.
///
/// Kinder gelöschter Entities, die selbst nicht gelöscht werden, wandern auf
/// die Wurzelebene. Undo fügt alles an der alten Position mit derselben ID
/// wieder ein und stellt Eltern-Verweise sowie die Selektion wieder her.
#[derive(Debug)]
pub struct DeleteEntitiesAction {
    targets: Vec<EntityRef>,
    removed: Vec<RemovedEntity>,
    detached: Vec<(EntityRef, EntityId)>,
    previous_selection: Vec<Selectable>,
}

impl DeleteEntitiesAction {
    /// Erstellt die Action.
    pub fn new(targets: Vec<EntityRef>) -> Self {
        Self {
            targets: dedup_targets(targets),
            removed: Vec::new(),
            detached: Vec::new(),
            previous_selection: Vec::new(),
        }
    }
}

impl EditAction for DeleteEntitiesAction {
    fn apply(&mut self, ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
        if let Some(missing) = self.targets.iter().find(|t| ctx.maps.entity(t).is_none()) {
            anyhow::bail!("Entity {missing} existiert nicht");
        }

        self.removed.clear();
        self.detached.clear();
        self.previous_selection = ctx.selection.snapshot();

        for target in &self.targets {
            let container = ctx.maps.container_mut(&target.map_id)?;
            for child in container.children_of(target.id) {
                let child_ref = EntityRef::new(target.map_id.clone(), child);
                if self.targets.contains(&child_ref) {
                    continue;
                }
                if let Some(entity) = container.get_mut(child) {
                    entity.parent = None;
                    self.detached.push((child_ref, target.id));
                }
            }
            if let Some((index, entity)) = container.remove(target.id) {
                self.removed.push(RemovedEntity {
                    entity_ref: target.clone(),
                    index,
                    entity,
                });
            }
            ctx.selection.remove(&Selectable::Entity(target.clone()));
        }

        if ctx
            .selection
            .goto_target()
            .and_then(Selectable::as_entity)
            .is_some_and(|target| self.targets.contains(target))
        {
            ctx.selection.clear_goto_target();
        }
        Ok(())
    }

    fn revert(&mut self, ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
        for removed in self.removed.iter().rev() {
            ctx.maps.container_mut(&removed.entity_ref.map_id)?.insert_at(
                removed.index,
                removed.entity_ref.id,
                removed.entity.clone(),
            )?;
        }
        for (child_ref, parent) in &self.detached {
            ctx.maps.entity_mut(child_ref)?.parent = Some(*parent);
        }
        ctx.selection.replace(self.previous_selection.iter().cloned());
        Ok(())
    }

    fn description(&self) -> String {
        format!("Delete {} entities", self.targets.len())
    }
}
