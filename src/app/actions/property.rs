//! Actions: Property setzen, Editor-Sichtbarkeit ändern.

use super::{dedup_targets, PropertySnapshot};
use crate::app::{ActionContext, EditAction};
use crate::core::{EntityRef, PropertyValue};

/// Setzt eine Property auf allen Ziel-Entities auf denselben Wert.
#[derive(Debug)]
pub struct SetPropertyAction {
    targets: Vec<EntityRef>,
    key: String,
    value: PropertyValue,
    previous: PropertySnapshot,
}

impl SetPropertyAction {
    /// Erstellt die Action.
    pub fn new(targets: Vec<EntityRef>, key: impl Into<String>, value: PropertyValue) -> Self {
        Self {
            targets: dedup_targets(targets),
            key: key.into(),
            value,
            previous: PropertySnapshot::default(),
        }
    }
}

impl EditAction for SetPropertyAction {
    fn apply(&mut self, ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
        self.previous = PropertySnapshot::capture(ctx.maps, &self.targets, &self.key)?;
        for target in &self.targets {
            ctx.maps
                .entity_mut(target)?
                .properties
                .insert(self.key.clone(), self.value.clone());
        }
        Ok(())
    }

    fn revert(&mut self, ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
        self.previous.restore(ctx.maps, &self.key)
    }

    fn description(&self) -> String {
        format!("Set {} on {} entities", self.key, self.targets.len())
    }
}

/// Art der Sichtbarkeitsänderung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityChange {
    /// Einblenden
    Show,
    /// Ausblenden
    Hide,
    /// Je Entity umschalten
    Toggle,
}

/// Ändert die Editor-Sichtbarkeit der Ziel-Entities.
#[derive(Debug)]
pub struct SetVisibilityAction {
    targets: Vec<EntityRef>,
    change: VisibilityChange,
    previous: Vec<bool>,
}

impl SetVisibilityAction {
    /// Erstellt die Action.
    pub fn new(targets: Vec<EntityRef>, change: VisibilityChange) -> Self {
        Self {
            targets: dedup_targets(targets),
            change,
            previous: Vec::new(),
        }
    }
}

impl EditAction for SetVisibilityAction {
    fn apply(&mut self, ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
        let mut previous = Vec::with_capacity(self.targets.len());
        for target in &self.targets {
            let visible = ctx
                .maps
                .entity(target)
                .map(|entity| entity.editor_visible)
                .ok_or_else(|| anyhow::anyhow!("Entity {target} existiert nicht"))?;
            previous.push(visible);
        }

        for (target, was_visible) in self.targets.iter().zip(&previous) {
            ctx.maps.entity_mut(target)?.editor_visible = match self.change {
                VisibilityChange::Show => true,
                VisibilityChange::Hide => false,
                VisibilityChange::Toggle => !was_visible,
            };
        }
        self.previous = previous;
        Ok(())
    }

    fn revert(&mut self, ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
        for (target, visible) in self.targets.iter().zip(&self.previous) {
            ctx.maps.entity_mut(target)?.editor_visible = *visible;
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Change visibility of {} entities", self.targets.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::actions::test_support::Fixture;

    #[test]
    fn set_property_round_trip_restores_missing_key() {
        let mut f = Fixture::new();
        let enemy = f.entity_ref("c1000_0000");
        let region = f.entity_ref("region_01");

        f.execute(Box::new(SetPropertyAction::new(
            vec![enemy.clone(), region.clone()],
            "EntityID",
            PropertyValue::Int(42),
        )))
        .unwrap();
        assert_eq!(
            f.maps.entity(&region).unwrap().property("EntityID", None),
            Some(&PropertyValue::Int(42))
        );

        f.undo();
        assert_eq!(
            f.maps.entity(&enemy).unwrap().property("EntityID", None),
            Some(&PropertyValue::Int(1000))
        );
        assert!(f.maps.entity(&region).unwrap().property("EntityID", None).is_none());

        f.redo();
        assert_eq!(
            f.maps.entity(&enemy).unwrap().property("EntityID", None),
            Some(&PropertyValue::Int(42))
        );
    }

    #[test]
    fn set_property_on_unknown_entity_fails_without_change() {
        let mut f = Fixture::new();
        let enemy = f.entity_ref("c1000_0000");
        let ghost = EntityRef::new(enemy.map_id.clone(), crate::core::EntityId(999));

        let result = f.execute(Box::new(SetPropertyAction::new(
            vec![enemy.clone(), ghost],
            "EntityID",
            PropertyValue::Int(7),
        )));
        assert!(result.is_err());
        assert!(f.history.is_empty());
        assert_eq!(
            f.maps.entity(&enemy).unwrap().property("EntityID", None),
            Some(&PropertyValue::Int(1000))
        );
    }

    #[test]
    fn toggle_visibility_round_trip() {
        let mut f = Fixture::new();
        let a = f.entity_ref("c1000_0000");
        let b = f.entity_ref("c1000_0001");
        f.maps.entity_mut(&b).unwrap().editor_visible = false;

        f.execute(Box::new(SetVisibilityAction::new(
            vec![a.clone(), b.clone()],
            VisibilityChange::Toggle,
        )))
        .unwrap();
        assert!(!f.maps.entity(&a).unwrap().editor_visible);
        assert!(f.maps.entity(&b).unwrap().editor_visible);

        f.undo();
        assert!(f.maps.entity(&a).unwrap().editor_visible);
        assert!(!f.maps.entity(&b).unwrap().editor_visible);
    }
}
