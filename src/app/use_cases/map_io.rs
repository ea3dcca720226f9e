//! Use-Case-Funktionen für Laden, Entladen und Speichern von Maps.
//! Alle Dateisystem-Operationen für Map-Dumps sind hier zentralisiert.

use crate::app::state::SaveFailureDialog;
use crate::app::update_gate::{LoadPoll, MapLoadJob};
use crate::app::AppState;
use crate::core::{EntityRef, MapContainer, MapDump};
use std::path::Path;

/// Fehler beim Speichern, die der Benutzer beheben kann.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SaveError {
    /// Eine Ref-Property verweist auf eine nicht existierende Entity
    #[error(
        "Map {map_id}: {referrer_name}.{property} verweist auf fehlende Entity '{target}'"
    )]
    MissingReference {
        map_id: String,
        referrer: EntityRef,
        referrer_name: String,
        property: String,
        target: String,
    },
}

/// Lädt einen Map-Dump synchron und installiert ihn.
pub fn load_map(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    let container = MapDump::load(path)?.into_container()?;
    install_container(state, container);
    Ok(())
}

/// Startet das Laden eines Map-Dumps im Hintergrund.
pub fn start_map_load(state: &mut AppState, path: &Path) {
    log::info!("Starte Hintergrund-Laden: {}", path.display());
    let job = MapLoadJob::spawn(path, &state.update_gate);
    state.pending_loads.push(job);
}

/// Installiert alle fertig geladenen Container. Liefert deren Anzahl.
pub fn install_finished_loads(state: &mut AppState) -> usize {
    let mut installed = 0;
    let mut pending = Vec::with_capacity(state.pending_loads.len());
    for mut job in std::mem::take(&mut state.pending_loads) {
        match job.poll() {
            LoadPoll::Pending => pending.push(job),
            LoadPoll::Ready(container) => {
                install_container(state, container);
                installed += 1;
            }
            LoadPoll::Failed => {
                log::debug!("Ladevorgang ohne Ergebnis beendet: {}", job.path().display());
            }
        }
    }
    state.pending_loads = pending;
    installed
}

/// Installiert einen geladenen Container und hebt die Selektion auf.
///
/// Ersetzt der Container eine bereits geladene Map, wird die History geleert,
/// da deren Einträge auf die alten Entities verweisen.
pub fn install_container(state: &mut AppState, container: MapContainer) {
    let map_id = container.map_id().to_string();
    if state.maps.is_loaded(&map_id) {
        log::info!("Map {} wird neu geladen, History wird geleert", map_id);
        state.history.clear();
    }
    log::info!("Map {} geladen: {} Entities", map_id, container.len());
    state.selection.clear();
    state.selection.clear_goto_target();
    state.maps.install(container);
}

/// Entlädt eine Map. Selektion und History werden geleert.
pub fn unload_map(state: &mut AppState, map_id: &str) -> bool {
    if state.maps.unload(map_id).is_none() {
        log::debug!("Map {} ist nicht geladen", map_id);
        return false;
    }
    state.selection.clear();
    state.selection.clear_goto_target();
    state.history.clear();
    log::info!("Map {} entladen", map_id);
    true
}

/// Entlädt alle Maps.
pub fn unload_all_maps(state: &mut AppState) {
    state.maps.unload_all();
    state.selection.clear();
    state.selection.clear_goto_target();
    state.history.clear();
    log::info!("Alle Maps entladen");
}

/// Wechselt die aktive Map.
pub fn set_active_map(state: &mut AppState, map_id: &str) -> anyhow::Result<()> {
    state.maps.set_active(map_id)?;
    log::info!("Aktive Map: {}", map_id);
    Ok(())
}

/// Prüft alle Maps auf fehlende Verweise.
pub fn validate_references(state: &AppState) -> Result<(), SaveError> {
    for container in state.maps.containers() {
        if let Some(missing) = container.missing_references().into_iter().next() {
            return Err(SaveError::MissingReference {
                map_id: container.map_id().to_string(),
                referrer: EntityRef::new(container.map_id(), missing.referrer),
                referrer_name: missing.referrer_name,
                property: missing.property,
                target: missing.target,
            });
        }
    }
    Ok(())
}

/// Speichert alle geladenen Maps als `<map_id>.json` nach `dir`.
///
/// Vor dem ersten Schreibvorgang werden alle Maps validiert, bei einem
/// fehlenden Verweis wird nichts geschrieben. Liefert die Anzahl gespeicherter Maps.
pub fn save_all_maps(state: &AppState, dir: &Path) -> anyhow::Result<usize> {
    validate_references(state)?;
    std::fs::create_dir_all(dir)?;

    let mut saved = 0;
    for container in state.maps.containers() {
        let path = dir.join(format!("{}.json", container.map_id()));
        MapDump::from_container(container).save(&path)?;
        saved += 1;
    }
    log::info!("{} Maps gespeichert nach {}", saved, dir.display());
    Ok(saved)
}

/// Merkt einen Speicherfehler für den Dialog vor.
pub fn report_save_failure(state: &mut AppState, error: &SaveError) {
    log::error!("Speichern fehlgeschlagen: {}", error);
    let SaveError::MissingReference {
        referrer,
        referrer_name,
        property,
        target,
        ..
    } = error;
    state.ui.save_failure = Some(SaveFailureDialog {
        referrer: referrer.clone(),
        referrer_name: referrer_name.clone(),
        property: property.clone(),
        target: target.clone(),
    });
    state.ui.set_status(format!("{error}\nSelect referring map entity?"));
}

/// Selektiert die verweisende Entity des offenen Speicherfehlers.
pub fn select_save_failure_referrer(state: &mut AppState) -> bool {
    let Some(dialog) = state.ui.save_failure.take() else {
        return false;
    };
    if state.maps.entity(&dialog.referrer).is_none() {
        log::error!("Unable to find map entity \"{}\"", dialog.referrer_name);
        return false;
    }
    state.selection.clear();
    state.selection.add(dialog.referrer.clone());
    state.selection.set_goto_target(dialog.referrer);
    true
}
