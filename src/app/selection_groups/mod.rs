//! Persistente, benannte Selection-Groups mit optionalem Keybind.
//!
//! Das Dokument liegt als JSON im Projektverzeichnis und wird nach jeder
//! Mutation vollständig neu geschrieben.

use crate::shared::{EditorOptions, KEYBIND_MAX, KEYBIND_MIN};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Gespeicherte Selection-Group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SelectionGroup {
    /// Eindeutiger Name
    pub name: String,
    /// Freie Tags (nur für Suche und Anzeige)
    #[serde(default)]
    pub tags: Vec<String>,
    /// Entity-Namen der Gruppe
    #[serde(default)]
    pub selection: Vec<String>,
    /// Keybind-Index 0..=10 (im Dokument -1 = keiner)
    #[serde(rename = "SelectionGroupKeybind", default, with = "keybind_index")]
    pub keybind: Option<u8>,
}

/// (De-)Serialisierung des Keybinds als Index mit -1 für "keiner".
mod keybind_index {
    use crate::shared::{KEYBIND_MAX, KEYBIND_MIN};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(keybind: &Option<u8>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(keybind.map_or(-1, i32::from))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u8>, D::Error> {
        let index = i32::deserialize(deserializer)?;
        Ok(u8::try_from(index)
            .ok()
            .filter(|keybind| (KEYBIND_MIN..=KEYBIND_MAX).contains(keybind)))
    }
}

/// Wurzel des Gruppen-Dokuments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SelectionGroupDocument {
    /// Alle Gruppen in Anlagereihenfolge
    #[serde(default)]
    pub resources: Vec<SelectionGroup>,
}

/// Fehler bei Gruppen-Operationen.
///
/// Validierungsfehler lassen den Store unverändert. `Persist`/`Serialize`
/// treten erst nach der In-Memory-Änderung auf, die bestehen bleibt.
#[derive(Debug, thiserror::Error)]
pub enum GroupError {
    #[error("Gruppenname darf nicht leer sein")]
    EmptyName,
    #[error("Gruppe '{0}' existiert bereits")]
    DuplicateName(String),
    #[error("Selektion ist leer, Gruppe wird nicht angelegt")]
    EmptySelection,
    #[error("Keybind {keybind} ist bereits von Gruppe '{owner}' belegt")]
    KeybindTaken { keybind: u8, owner: String },
    #[error("Keybind-Index {0} liegt außerhalb von -1..={max}", max = KEYBIND_MAX)]
    InvalidKeybind(i32),
    #[error("Gruppe '{0}' existiert nicht")]
    NotFound(String),
    #[error("Gruppen-Dokument konnte nicht geschrieben werden: {path}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Gruppen-Dokument konnte nicht serialisiert werden")]
    Serialize(#[from] serde_json::Error),
}

/// Wandelt einen Keybind-Index (-1 = keiner) in den In-Memory-Wert um.
pub fn keybind_from_index(index: i32) -> Result<Option<u8>, GroupError> {
    if index == -1 {
        return Ok(None);
    }
    u8::try_from(index)
        .ok()
        .filter(|keybind| (KEYBIND_MIN..=KEYBIND_MAX).contains(keybind))
        .map(Some)
        .ok_or(GroupError::InvalidKeybind(index))
}

/// Zerlegt eine komma-getrennte Tag-Eingabe.
pub fn parse_tag_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Store aller Selection-Groups eines Projekts.
#[derive(Debug, Clone, Default)]
pub struct SelectionGroupStore {
    groups: Vec<SelectionGroup>,
    /// Zielpfad des Dokuments (None = nur im Speicher, z.B. ohne Projekt)
    path: Option<PathBuf>,
}

impl SelectionGroupStore {
    /// Store ohne Persistenz.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Lädt das Dokument. Fehlend oder fehlerhaft: leerer Store.
    pub fn load(path: &Path) -> Self {
        let groups = match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<SelectionGroupDocument>(&content) {
                Ok(document) => {
                    log::info!(
                        "{} Selection-Groups geladen aus: {}",
                        document.resources.len(),
                        path.display()
                    );
                    document.resources
                }
                Err(e) => {
                    log::warn!("Gruppen-Dokument fehlerhaft, starte leer: {}", e);
                    Vec::new()
                }
            },
            Err(_) => {
                log::info!("Kein Gruppen-Dokument gefunden unter {}", path.display());
                Vec::new()
            }
        };
        Self {
            groups,
            path: Some(path.to_path_buf()),
        }
    }

    /// Pfad des Dokuments.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Alle Gruppen in Anlagereihenfolge.
    pub fn groups(&self) -> &[SelectionGroup] {
        &self.groups
    }

    /// Anzahl der Gruppen.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Gibt `true` zurück, wenn keine Gruppe existiert.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Gruppe per Name.
    pub fn get(&self, name: &str) -> Option<&SelectionGroup> {
        self.groups.iter().find(|group| group.name == name)
    }

    /// Gruppe, die einen Keybind belegt.
    pub fn find_by_keybind(&self, keybind: u8) -> Option<&SelectionGroup> {
        self.groups.iter().find(|group| group.keybind == Some(keybind))
    }

    /// Legt eine neue Gruppe an und speichert.
    ///
    /// Prüfreihenfolge: leerer Name, doppelter Name, leere Selektion, Keybind.
    pub fn create(
        &mut self,
        name: &str,
        tags: Vec<String>,
        selection: Vec<String>,
        keybind: Option<u8>,
    ) -> Result<(), GroupError> {
        if name.is_empty() {
            return Err(GroupError::EmptyName);
        }
        if self.get(name).is_some() {
            return Err(GroupError::DuplicateName(name.to_string()));
        }
        if selection.is_empty() {
            return Err(GroupError::EmptySelection);
        }
        self.check_keybind(keybind, None)?;

        self.groups.push(SelectionGroup {
            name: name.to_string(),
            tags,
            selection,
            keybind,
        });
        log::info!("Selection-Group '{}' angelegt", name);
        self.persist()
    }

    /// Ändert Name, Tags und Keybind einer Gruppe; die Selektion bleibt erhalten.
    ///
    /// Die geänderte Gruppe wandert ans Ende der Liste.
    pub fn edit(
        &mut self,
        old_name: &str,
        new_name: &str,
        tags: Vec<String>,
        keybind: Option<u8>,
    ) -> Result<(), GroupError> {
        let index = self
            .position(old_name)
            .ok_or_else(|| GroupError::NotFound(old_name.to_string()))?;
        if new_name.is_empty() {
            return Err(GroupError::EmptyName);
        }
        if new_name != old_name && self.get(new_name).is_some() {
            return Err(GroupError::DuplicateName(new_name.to_string()));
        }
        self.check_keybind(keybind, Some(old_name))?;

        let old = self.groups.remove(index);
        self.groups.push(SelectionGroup {
            name: new_name.to_string(),
            tags,
            selection: old.selection,
            keybind,
        });
        log::info!("Selection-Group '{}' geändert ('{}')", old_name, new_name);
        self.persist()
    }

    /// Löscht eine Gruppe und speichert.
    pub fn delete(&mut self, name: &str) -> Result<(), GroupError> {
        let index = self
            .position(name)
            .ok_or_else(|| GroupError::NotFound(name.to_string()))?;
        self.groups.remove(index);
        log::info!("Selection-Group '{}' gelöscht", name);
        self.persist()
    }

    /// Gruppen, die jeden `+`-getrennten Suchbegriff im Namen oder in einem
    /// Tag enthalten (ohne Groß/Kleinschreibung). Leere Suche liefert alle.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a SelectionGroup> + 'a {
        let terms: Vec<String> = query
            .split('+')
            .map(|term| term.trim().to_lowercase())
            .filter(|term| !term.is_empty())
            .collect();
        self.groups.iter().filter(move |group| {
            let name = group.name.to_lowercase();
            let tags: Vec<String> = group.tags.iter().map(|tag| tag.to_lowercase()).collect();
            terms.iter().all(|term| {
                name.contains(term.as_str()) || tags.iter().any(|tag| tag.contains(term.as_str()))
            })
        })
    }

    /// Anzeige-Label einer Gruppe für Listen.
    pub fn display_label(group: &SelectionGroup, options: &EditorOptions) -> String {
        let mut label = group.name.clone();
        if options.group_show_keybind {
            if let Some(keybind) = group.keybind {
                label.push_str(&format!(" [Key {keybind}]"));
            }
        }
        if options.group_show_tags && !group.tags.is_empty() {
            label.push_str(&format!(" {{ {} }}", group.tags.join(" ")));
        }
        label
    }

    /// Schreibt das komplette Dokument. Ohne Pfad: nichts zu tun.
    pub fn persist(&self) -> Result<(), GroupError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let document = SelectionGroupDocument {
            resources: self.groups.clone(),
        };
        let json = serde_json::to_string_pretty(&document)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| GroupError::Persist {
                path: path.clone(),
                source,
            })?;
        }
        std::fs::write(path, json).map_err(|source| GroupError::Persist {
            path: path.clone(),
            source,
        })?;
        log::debug!("Gruppen-Dokument geschrieben: {}", path.display());
        Ok(())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.groups.iter().position(|group| group.name == name)
    }

    /// Prüft Gültigkeit und Eindeutigkeit eines Keybinds (`ignore` = eigene Gruppe).
    fn check_keybind(&self, keybind: Option<u8>, ignore: Option<&str>) -> Result<(), GroupError> {
        let Some(keybind) = keybind else {
            return Ok(());
        };
        if !(KEYBIND_MIN..=KEYBIND_MAX).contains(&keybind) {
            return Err(GroupError::InvalidKeybind(i32::from(keybind)));
        }
        match self.find_by_keybind(keybind) {
            Some(owner) if Some(owner.name.as_str()) != ignore => Err(GroupError::KeybindTaken {
                keybind,
                owner: owner.name.clone(),
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests;
