//! Action: Entity innerhalb ihres Containers verschieben.

use crate::app::{ActionContext, EditAction};
use crate::core::EntityRef;

/// Richtung der Verschiebung in der Container-Reihenfolge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderDirection {
    /// Eine Position nach oben
    Up,
    /// Eine Position nach unten
    Down,
    /// An den Anfang
    Top,
    /// An das Ende
    Bottom,
}

/// Verschiebt eine Entity innerhalb ihres Containers.
#[derive(Debug)]
pub struct ReorderEntityAction {
    target: EntityRef,
    direction: ReorderDirection,
    old_index: Option<usize>,
}

impl ReorderEntityAction {
    /// Erstellt die Action.
    pub fn new(target: EntityRef, direction: ReorderDirection) -> Self {
        Self {
            target,
            direction,
            old_index: None,
        }
    }
}

impl EditAction for ReorderEntityAction {
    fn apply(&mut self, ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
        let container = ctx.maps.container_mut(&self.target.map_id)?;
        let current = container
            .position_of(self.target.id)
            .ok_or_else(|| anyhow::anyhow!("Entity {} existiert nicht", self.target))?;
        let last = container.len().saturating_sub(1);
        let new_index = match self.direction {
            ReorderDirection::Up => current.saturating_sub(1),
            ReorderDirection::Down => (current + 1).min(last),
            ReorderDirection::Top => 0,
            ReorderDirection::Bottom => last,
        };
        container.move_to(self.target.id, new_index);
        self.old_index = Some(current);
        Ok(())
    }

    fn revert(&mut self, ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
        let Some(old_index) = self.old_index else {
            return Ok(());
        };
        ctx.maps
            .container_mut(&self.target.map_id)?
            .move_to(self.target.id, old_index)
            .ok_or_else(|| anyhow::anyhow!("Entity {} existiert nicht", self.target))?;
        Ok(())
    }

    fn description(&self) -> String {
        format!("Move {} {:?}", self.target, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::actions::test_support::Fixture;

    #[test]
    fn move_up_and_undo() {
        let mut f = Fixture::new();
        let target = f.entity_ref("c1000_0002");

        f.execute(Box::new(ReorderEntityAction::new(target, ReorderDirection::Up)))
            .unwrap();
        assert_eq!(
            f.names(),
            vec!["c1000_0000", "c1000_0002", "c1000_0001", "region_01"]
        );

        f.undo();
        assert_eq!(
            f.names(),
            vec!["c1000_0000", "c1000_0001", "c1000_0002", "region_01"]
        );
    }

    #[test]
    fn move_to_bottom_and_top() {
        let mut f = Fixture::new();
        let first = f.entity_ref("c1000_0000");
        f.execute(Box::new(ReorderEntityAction::new(
            first.clone(),
            ReorderDirection::Bottom,
        )))
        .unwrap();
        assert_eq!(f.names().last().map(String::as_str), Some("c1000_0000"));

        f.execute(Box::new(ReorderEntityAction::new(first, ReorderDirection::Top)))
            .unwrap();
        assert_eq!(f.names().first().map(String::as_str), Some("c1000_0000"));
    }

    #[test]
    fn move_up_at_top_is_noop() {
        let mut f = Fixture::new();
        let first = f.entity_ref("c1000_0000");
        let before = f.names();
        f.execute(Box::new(ReorderEntityAction::new(first, ReorderDirection::Up)))
            .unwrap();
        assert_eq!(f.names(), before);
        f.undo();
        assert_eq!(f.names(), before);
    }
}
