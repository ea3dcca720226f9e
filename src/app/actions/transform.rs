//! Transform-Actions: Rotieren, Verschieben, Streuen.
//!
//! Alle drei arbeiten auf den Vec3-Properties `Position`/`Rotation`.
//! Entities ohne passende Property werden übersprungen.

use super::{dedup_targets, PropertySnapshot};
use crate::app::{ActionContext, EditAction};
use crate::core::{EntityRef, MapBank, PropertyValue, PROP_POSITION, PROP_ROTATION};
use glam::Vec3;
use rand::Rng;

/// Normalisiert einen Winkel in Grad auf [0, 360).
pub(crate) fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid kann bei sehr kleinen negativen Werten 360.0 liefern
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

fn wrap_rotation(rotation: Vec3) -> Vec3 {
    Vec3::new(
        wrap_degrees(rotation.x),
        wrap_degrees(rotation.y),
        wrap_degrees(rotation.z),
    )
}

/// Wendet `update` auf die Vec3-Property `key` eines Ziels an, falls vorhanden.
fn update_vec3(
    maps: &mut MapBank,
    target: &EntityRef,
    key: &str,
    update: impl FnOnce(Vec3) -> Vec3,
) -> anyhow::Result<()> {
    let entity = maps.entity_mut(target)?;
    if let Some(PropertyValue::Vec3(value)) = entity.properties.get_mut(key) {
        *value = update(*value);
    }
    Ok(())
}

/// Addiert ein Grad-Delta auf die Rotation der Ziele.
#[derive(Debug)]
pub struct RotateEntitiesAction {
    targets: Vec<EntityRef>,
    delta: Vec3,
    previous: PropertySnapshot,
}

impl RotateEntitiesAction {
    /// Erstellt die Action.
    pub fn new(targets: Vec<EntityRef>, delta: Vec3) -> Self {
        Self {
            targets: dedup_targets(targets),
            delta,
            previous: PropertySnapshot::default(),
        }
    }
}

impl EditAction for RotateEntitiesAction {
    fn apply(&mut self, ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
        self.previous = PropertySnapshot::capture(ctx.maps, &self.targets, PROP_ROTATION)?;
        for target in &self.targets {
            update_vec3(ctx.maps, target, PROP_ROTATION, |rotation| {
                wrap_rotation(rotation + self.delta)
            })?;
        }
        Ok(())
    }

    fn revert(&mut self, ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
        self.previous.restore(ctx.maps, PROP_ROTATION)
    }

    fn description(&self) -> String {
        format!("Rotate {} entities", self.targets.len())
    }
}

/// Verschiebt die Ziele um einen festen Offset.
#[derive(Debug)]
pub struct TranslateEntitiesAction {
    targets: Vec<EntityRef>,
    offset: Vec3,
    previous: PropertySnapshot,
}

impl TranslateEntitiesAction {
    /// Erstellt die Action.
    pub fn new(targets: Vec<EntityRef>, offset: Vec3) -> Self {
        Self {
            targets: dedup_targets(targets),
            offset,
            previous: PropertySnapshot::default(),
        }
    }
}

impl EditAction for TranslateEntitiesAction {
    fn apply(&mut self, ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
        self.previous = PropertySnapshot::capture(ctx.maps, &self.targets, PROP_POSITION)?;
        for target in &self.targets {
            update_vec3(ctx.maps, target, PROP_POSITION, |position| {
                position + self.offset
            })?;
        }
        Ok(())
    }

    fn revert(&mut self, ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
        self.previous.restore(ctx.maps, PROP_POSITION)
    }

    fn description(&self) -> String {
        format!("Translate {} entities", self.targets.len())
    }
}

/// Zufälliger Versatz je Entity, bei Konstruktion einmal gezogen.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ScrambleOffset {
    position: Vec3,
    yaw: f32,
}

/// Streut Position (alle Achsen) und Gier-Rotation (Y) der Ziele zufällig.
///
/// Die Offsets werden bei der Konstruktion gezogen, Redo wendet also exakt
/// dieselben Werte erneut an.
#[derive(Debug)]
pub struct ScrambleEntitiesAction {
    targets: Vec<EntityRef>,
    offsets: Vec<ScrambleOffset>,
    previous_positions: PropertySnapshot,
    previous_rotations: PropertySnapshot,
}

impl ScrambleEntitiesAction {
    /// Erstellt die Action und zieht die Offsets aus `rng`.
    ///
    /// `position_range` und `rotation_range` sind halbe Intervallbreiten,
    /// gezogen wird jeweils gleichverteilt aus `[-range, range]`.
    pub fn new(
        targets: Vec<EntityRef>,
        position_range: f32,
        rotation_range: f32,
        rng: &mut impl Rng,
    ) -> Self {
        let targets = dedup_targets(targets);
        let position_range = sanitize_range(position_range);
        let rotation_range = sanitize_range(rotation_range);
        let offsets = targets
            .iter()
            .map(|_| ScrambleOffset {
                position: Vec3::new(
                    rng.random_range(-position_range..=position_range),
                    rng.random_range(-position_range..=position_range),
                    rng.random_range(-position_range..=position_range),
                ),
                yaw: rng.random_range(-rotation_range..=rotation_range),
            })
            .collect();
        Self {
            targets,
            offsets,
            previous_positions: PropertySnapshot::default(),
            previous_rotations: PropertySnapshot::default(),
        }
    }
}

fn sanitize_range(range: f32) -> f32 {
    if range.is_finite() {
        range.abs()
    } else {
        0.0
    }
}

impl EditAction for ScrambleEntitiesAction {
    fn apply(&mut self, ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
        self.previous_positions =
            PropertySnapshot::capture(ctx.maps, &self.targets, PROP_POSITION)?;
        self.previous_rotations =
            PropertySnapshot::capture(ctx.maps, &self.targets, PROP_ROTATION)?;

        for (target, offset) in self.targets.iter().zip(&self.offsets) {
            update_vec3(ctx.maps, target, PROP_POSITION, |position| {
                position + offset.position
            })?;
            update_vec3(ctx.maps, target, PROP_ROTATION, |rotation| {
                wrap_rotation(rotation + Vec3::new(0.0, offset.yaw, 0.0))
            })?;
        }
        Ok(())
    }

    fn revert(&mut self, ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
        self.previous_positions.restore(ctx.maps, PROP_POSITION)?;
        self.previous_rotations.restore(ctx.maps, PROP_ROTATION)
    }

    fn description(&self) -> String {
        format!("Scramble {} entities", self.targets.len())
    }
}
