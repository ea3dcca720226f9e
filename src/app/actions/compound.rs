//! Action: mehrere Actions als ein History-Eintrag.

use crate::app::{ActionContext, EditAction};

/// Fasst mehrere Actions zu einem Undo-Schritt zusammen.
///
/// Kinder werden in Reihenfolge angewendet und in umgekehrter Reihenfolge
/// rückgängig gemacht. Schlägt ein Kind beim Anwenden fehl, werden die bereits
/// angewendeten Kinder zurückgerollt.
#[derive(Debug)]
pub struct CompoundAction {
    label: String,
    children: Vec<Box<dyn EditAction>>,
}

impl CompoundAction {
    /// Erstellt eine leere Compound-Action.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Hängt ein Kind an (Builder-Stil).
    pub fn with(mut self, child: Box<dyn EditAction>) -> Self {
        self.children.push(child);
        self
    }

    /// Hängt ein Kind an.
    pub fn push(&mut self, child: Box<dyn EditAction>) {
        self.children.push(child);
    }

    /// Anzahl der Kinder.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Gibt `true` zurück, wenn keine Kinder enthalten sind.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl EditAction for CompoundAction {
    fn apply(&mut self, ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
        for index in 0..self.children.len() {
            if let Err(err) = self.children[index].apply(ctx) {
                for applied in self.children[..index].iter_mut().rev() {
                    if let Err(rollback_err) = applied.revert(ctx) {
                        log::error!("Rollback von '{}' fehlgeschlagen: {rollback_err:#}", applied.description());
                    }
                }
                return Err(err);
            }
        }
        Ok(())
    }

    fn revert(&mut self, ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
        for child in self.children.iter_mut().rev() {
            child.revert(ctx)?;
        }
        Ok(())
    }

    fn description(&self) -> String {
        self.label.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::actions::test_support::Fixture;
    use crate::app::actions::{SetPropertyAction, TranslateEntitiesAction};
    use crate::core::{EntityId, EntityRef, PropertyValue};
    use glam::Vec3;

    #[test]
    fn compound_is_one_history_step() {
        let mut f = Fixture::new();
        let target = f.entity_ref("c1000_0000");
        let compound = CompoundAction::new("Move and tag")
            .with(Box::new(TranslateEntitiesAction::new(
                vec![target.clone()],
                Vec3::X,
            )))
            .with(Box::new(SetPropertyAction::new(
                vec![target.clone()],
                "EntityID",
                PropertyValue::Int(5),
            )));

        f.execute(Box::new(compound)).unwrap();
        assert_eq!(f.history.len(), 1);
        assert_eq!(f.history.undo_description().as_deref(), Some("Move and tag"));

        f.undo();
        let entity = f.maps.entity(&target).unwrap();
        assert_eq!(entity.property("EntityID", None), Some(&PropertyValue::Int(1000)));
        assert_eq!(
            entity.property("Position", None),
            Some(&PropertyValue::Vec3(Vec3::ZERO))
        );
    }

    #[test]
    fn failing_child_rolls_back_applied_children() {
        let mut f = Fixture::new();
        let target = f.entity_ref("c1000_0000");
        let ghost = EntityRef::new(target.map_id.clone(), EntityId(900));
        let compound = CompoundAction::new("Broken")
            .with(Box::new(TranslateEntitiesAction::new(
                vec![target.clone()],
                Vec3::X,
            )))
            .with(Box::new(SetPropertyAction::new(
                vec![ghost],
                "EntityID",
                PropertyValue::Int(5),
            )));

        assert!(f.execute(Box::new(compound)).is_err());
        assert!(f.history.is_empty());
        assert_eq!(
            f.maps.entity(&target).unwrap().property("Position", None),
            Some(&PropertyValue::Vec3(Vec3::ZERO))
        );
    }
}
