//! Smithbox Map-Editor Core (Host).
//!
//! Zeilenbasierter Host für Selektion, Selection-Groups und Undo/Redo.
//! Jede Eingabezeile wird in einen `AppIntent` übersetzt und über den
//! Controller verarbeitet.

use smithbox_map_editor::app::actions::{ReorderDirection, VisibilityChange};
use smithbox_map_editor::{
    AppController, AppIntent, AppState, EditorOptions, EntityRef, FilterMode, PropertyValue,
    SelectionGroupStore,
};
use std::io::BufRead;
use std::path::{Path, PathBuf};

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Smithbox Map-Editor Core v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let mut app = HostApp::new(std::env::args().nth(1).map(PathBuf::from));

        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            app.update(&line);
            if app.state.should_exit {
                break;
            }
        }

        log::info!("Beendet");
        Ok(())
    }
}

/// Haupt-Anwendungsstruktur
struct HostApp {
    state: AppState,
    controller: AppController,
    last_status: Option<String>,
}

impl HostApp {
    fn new(project_dir: Option<PathBuf>) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let state = match project_dir {
            Some(dir) => {
                log::info!("Projekt: {}", dir.display());
                AppState::open_project(&dir, editor_options)
            }
            None => AppState::with_options(editor_options),
        };

        Self {
            state,
            controller: AppController::new(),
            last_status: None,
        }
    }

    fn update(&mut self, line: &str) {
        let events = self.collect_line_events(line);
        self.process_events(events);

        if let Err(e) = self.controller.update(&mut self.state) {
            log::error!("Hintergrund-Laden fehlgeschlagen: {:#}", e);
        }

        if self.state.ui.status_message != self.last_status {
            if let Some(status) = self.state.ui.status_message.as_deref() {
                println!("{status}");
            }
            self.last_status = self.state.ui.status_message.clone();
        }
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn collect_line_events(&mut self, line: &str) -> Vec<AppIntent> {
        let line = line.trim();
        let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match verb {
            "" => vec![],
            "load" => vec![AppIntent::MapLoadRequested {
                path: PathBuf::from(rest),
                background: false,
            }],
            "bgload" => vec![AppIntent::MapLoadRequested {
                path: PathBuf::from(rest),
                background: true,
            }],
            "unload" if rest.is_empty() => vec![AppIntent::UnloadAllRequested],
            "unload" => vec![AppIntent::MapUnloadRequested {
                map_id: rest.to_string(),
            }],
            "active" => vec![AppIntent::ActiveMapChanged {
                map_id: rest.to_string(),
            }],
            "select" | "add" | "toggle" => match self.resolve_entity(rest) {
                Some(entity) => vec![AppIntent::EntityClicked {
                    entity,
                    ctrl: verb == "toggle",
                    shift: verb == "add",
                }],
                None => {
                    log::warn!("Unbekannte Entity: {rest}");
                    vec![]
                }
            },
            "root" => vec![AppIntent::MapRootClicked {
                map_id: rest.to_string(),
                shift: false,
            }],
            "clear" => vec![AppIntent::ClearSelectionRequested],
            "filter" => vec![AppIntent::SelectAllFiltersChanged {
                inputs: rest.split(';').map(|s| s.trim().to_string()).collect(),
            }],
            "mode" => match rest {
                "and" => vec![AppIntent::SelectAllModeChanged {
                    mode: FilterMode::And,
                }],
                "or" => vec![AppIntent::SelectAllModeChanged {
                    mode: FilterMode::Or,
                }],
                _ => {
                    log::warn!("Unbekannter Modus: {rest} (and|or)");
                    vec![]
                }
            },
            "selectall" => match rest {
                "kind" => vec![AppIntent::SelectAllByKindRequested],
                "model" => vec![AppIntent::SelectAllByModelNameRequested],
                _ => vec![AppIntent::SelectAllByConfigurationRequested],
            },
            "group" => match rest.strip_prefix("search") {
                Some(query) => {
                    self.print_group_search(query);
                    vec![]
                }
                None => Self::parse_group(rest),
            },
            "key" => match rest.parse::<u8>() {
                Ok(keybind) => vec![AppIntent::GroupShortcutPressed { keybind }],
                Err(_) => {
                    log::warn!("Ungültiger Keybind: {rest}");
                    vec![]
                }
            },
            "duplicate" => vec![AppIntent::DuplicateRequested],
            "delete" => vec![AppIntent::DeleteRequested],
            "reorder" => match Self::parse_direction(rest) {
                Some(direction) => vec![AppIntent::ReorderRequested { direction }],
                None => {
                    log::warn!("Ungültige Richtung: {rest} (up|down|top|bottom)");
                    vec![]
                }
            },
            "rotate" => Self::parse_vec3(rest)
                .map(|delta| vec![AppIntent::RotateRequested { delta }])
                .unwrap_or_default(),
            "translate" => Self::parse_vec3(rest)
                .map(|offset| vec![AppIntent::TranslateRequested { offset }])
                .unwrap_or_default(),
            "transform" => Self::parse_transform(rest)
                .map(|(offset, rotation)| vec![AppIntent::TransformRequested { offset, rotation }])
                .unwrap_or_default(),
            "scramble" => vec![AppIntent::ScrambleRequested],
            "show" | "hide" | "flip" => {
                let change = match verb {
                    "show" => VisibilityChange::Show,
                    "hide" => VisibilityChange::Hide,
                    _ => VisibilityChange::Toggle,
                };
                vec![AppIntent::VisibilityChangeRequested { change }]
            }
            "set" => match rest.split_once(' ') {
                Some((key, value)) => vec![AppIntent::PropertyEditRequested {
                    key: key.to_string(),
                    value: Self::parse_value(value.trim()),
                }],
                None => {
                    log::warn!("Syntax: set <Property> <Wert>");
                    vec![]
                }
            },
            "undo" => vec![AppIntent::UndoRequested],
            "undoall" => vec![AppIntent::UndoAllRequested],
            "redo" => vec![AppIntent::RedoRequested],
            "save" => {
                let dir = if rest.is_empty() {
                    self.state
                        .project_dir
                        .clone()
                        .unwrap_or_else(|| PathBuf::from("."))
                } else {
                    PathBuf::from(rest)
                };
                vec![AppIntent::SaveAllRequested { dir }]
            }
            "referrer" => vec![AppIntent::SaveFailureSelectReferrerConfirmed],
            "dismiss" => vec![AppIntent::SaveFailureDismissed],
            "ok" => vec![AppIntent::StatusDismissed],
            "list" => {
                self.print_state();
                vec![]
            }
            "exit" | "quit" => vec![AppIntent::ExitRequested],
            other => {
                log::warn!("Unbekannter Befehl: {other}");
                vec![]
            }
        }
    }

    /// `group create|edit|delete|confirm|cancel|recall ...`, Felder durch `|` getrennt.
    fn parse_group(rest: &str) -> Vec<AppIntent> {
        let (action, args) = rest.split_once(' ').unwrap_or((rest, ""));
        let fields: Vec<&str> = args.split('|').map(str::trim).collect();
        let field = |i: usize| fields.get(i).copied().unwrap_or("").to_string();
        let keybind = |i: usize| fields.get(i).and_then(|k| k.parse().ok()).unwrap_or(-1);

        match action {
            "create" => vec![AppIntent::GroupCreateRequested {
                name: field(0),
                tags: field(1),
                keybind: keybind(2),
            }],
            "edit" => vec![AppIntent::GroupEditRequested {
                old_name: field(0),
                new_name: field(1),
                tags: field(2),
                keybind: keybind(3),
            }],
            "delete" => vec![AppIntent::GroupDeleteRequested { name: field(0) }],
            "confirm" => vec![AppIntent::GroupDeleteConfirmed],
            "cancel" => vec![AppIntent::GroupDeleteCancelled],
            "recall" => vec![AppIntent::GroupSelectRequested { name: field(0) }],
            _ => {
                log::warn!("Syntax: group create|edit|delete|confirm|cancel|recall <Felder>");
                vec![]
            }
        }
    }

    fn parse_direction(text: &str) -> Option<ReorderDirection> {
        match text {
            "up" => Some(ReorderDirection::Up),
            "down" => Some(ReorderDirection::Down),
            "top" => Some(ReorderDirection::Top),
            "bottom" => Some(ReorderDirection::Bottom),
            _ => None,
        }
    }

    fn parse_vec3(text: &str) -> Option<glam::Vec3> {
        let parts: Vec<f32> = text
            .split_whitespace()
            .filter_map(|p| p.parse().ok())
            .collect();
        match parts.as_slice() {
            [x, y, z] => Some(glam::Vec3::new(*x, *y, *z)),
            _ => {
                log::warn!("Erwartet drei Zahlen: {text}");
                None
            }
        }
    }

    /// `x y z | rx ry rz`
    fn parse_transform(text: &str) -> Option<(glam::Vec3, glam::Vec3)> {
        let (offset, rotation) = text.split_once('|')?;
        Some((Self::parse_vec3(offset.trim())?, Self::parse_vec3(rotation.trim())?))
    }

    fn parse_value(text: &str) -> PropertyValue {
        if let Ok(i) = text.parse::<i64>() {
            PropertyValue::Int(i)
        } else if let Ok(f) = text.parse::<f64>() {
            PropertyValue::Float(f)
        } else if let Ok(b) = text.parse::<bool>() {
            PropertyValue::Bool(b)
        } else {
            PropertyValue::Text(text.to_string())
        }
    }

    /// Sucht eine Entity per Name in der aktiven Map.
    fn resolve_entity(&self, name: &str) -> Option<EntityRef> {
        let container = self.state.maps.active()?;
        let id = container.find_by_name(name)?;
        Some(EntityRef::new(container.map_id(), id))
    }

    fn print_group_search(&self, query: &str) {
        for group in self.state.groups.search(query) {
            println!(
                "  [G] {}",
                SelectionGroupStore::display_label(group, &self.state.options)
            );
        }
    }

    fn print_state(&self) {
        let maps: Vec<&str> = self.state.maps.map_ids().collect();
        println!(
            "Maps: {:?} (aktiv: {})",
            maps,
            self.state.maps.active_map_id().unwrap_or("-")
        );
        for entity_ref in self.state.selection.entities() {
            let name = self
                .state
                .maps
                .entity(entity_ref)
                .map(|e| e.display_name())
                .unwrap_or("?");
            println!("  * {name} ({entity_ref})");
        }
        for group in self.state.groups.groups() {
            println!(
                "  [G] {}",
                SelectionGroupStore::display_label(group, &self.state.options)
            );
        }
        println!(
            "History: {}/{}",
            self.state.history.cursor(),
            self.state.history.len()
        );
        if let Some(dir) = self.state.project_dir.as_deref() {
            print_groups_path(&self.state.options, dir);
        }
    }
}

fn print_groups_path(options: &EditorOptions, project_dir: &Path) {
    println!("Gruppen: {}", options.selection_groups_path(project_dir).display());
}
