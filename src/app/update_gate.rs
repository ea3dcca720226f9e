//! Pausier-Schalter für den Update-Zyklus und Hintergrund-Laden von Maps.
//!
//! Solange ein Ladevorgang läuft, überspringt der Controller sein Update.
//! Fehler des Lade-Threads werden hier abgelegt und beim nächsten Update
//! an den Aufrufer zurückgegeben.

use crate::core::{MapContainer, MapDump};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

/// Geteilter Pausier-Zustand zwischen Update-Thread und Lade-Threads.
#[derive(Debug, Default)]
pub struct UpdateGate {
    /// Anzahl aktiver Pausen (verschachtelte Ladevorgänge)
    paused: Mutex<usize>,
    /// Zuletzt aufgetretener Fehler eines Lade-Threads
    load_error: Mutex<Option<anyhow::Error>>,
}

impl UpdateGate {
    /// Erstellt ein offenes Gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pausiert das Update bis der zurückgegebene Guard fällt.
    pub fn pause(self: &Arc<Self>) -> PauseGuard {
        match self.paused.lock() {
            Ok(mut count) => *count += 1,
            Err(poisoned) => *poisoned.into_inner() += 1,
        }
        PauseGuard {
            gate: Arc::clone(self),
        }
    }

    /// Gibt `true` zurück, solange mindestens eine Pause aktiv ist.
    pub fn is_paused(&self) -> bool {
        let Ok(count) = self.paused.lock() else {
            log::error!("UpdateGate: Pause-Zähler vergiftet");
            return true;
        };
        *count > 0
    }

    /// Legt einen Fehler für das nächste Update ab (ältere werden ersetzt).
    pub fn capture_error(&self, error: anyhow::Error) {
        let Ok(mut slot) = self.load_error.lock() else {
            log::error!("UpdateGate: Fehler-Slot vergiftet, verwerfe: {error:#}");
            return;
        };
        if let Some(previous) = slot.replace(error) {
            log::warn!("Vorheriger Ladefehler überschrieben: {previous:#}");
        }
    }

    /// Entnimmt den abgelegten Fehler.
    pub fn take_error(&self) -> Option<anyhow::Error> {
        self.load_error.lock().ok().and_then(|mut slot| slot.take())
    }

    fn resume(&self) {
        match self.paused.lock() {
            Ok(mut count) => *count = count.saturating_sub(1),
            Err(poisoned) => {
                let mut count = poisoned.into_inner();
                *count = count.saturating_sub(1);
            }
        }
    }
}

/// Hebt die Pause beim Drop wieder auf, auch wenn der Lade-Thread panict.
#[derive(Debug)]
pub struct PauseGuard {
    gate: Arc<UpdateGate>,
}

impl Drop for PauseGuard {
    fn drop(&mut self) {
        self.gate.resume();
    }
}

/// Zustand eines Hintergrund-Ladevorgangs.
#[derive(Debug)]
pub enum LoadPoll {
    /// Läuft noch
    Pending,
    /// Container fertig geladen
    Ready(MapContainer),
    /// Beendet ohne Ergebnis (Fehler liegt im Gate)
    Failed,
}

/// Ein laufender Ladevorgang auf einem eigenen Thread.
#[derive(Debug)]
pub struct MapLoadJob {
    path: PathBuf,
    receiver: Receiver<MapContainer>,
    handle: Option<JoinHandle<()>>,
}

impl MapLoadJob {
    /// Startet das Laden eines Map-Dumps. Das Gate ist ab sofort pausiert.
    pub fn spawn(path: &Path, gate: &Arc<UpdateGate>) -> Self {
        let guard = gate.pause();
        let (sender, receiver) = mpsc::channel();
        let thread_path = path.to_path_buf();
        let thread_gate = Arc::clone(gate);

        let handle = std::thread::spawn(move || {
            let _guard = guard;
            let result = MapDump::load(&thread_path).and_then(MapDump::into_container);
            match result {
                Ok(container) => {
                    log::info!("Map {} im Hintergrund geladen", container.map_id());
                    if sender.send(container).is_err() {
                        log::warn!("Ladeergebnis verworfen: Empfänger existiert nicht mehr");
                    }
                }
                Err(e) => {
                    thread_gate.capture_error(
                        e.context(format!("Map konnte nicht geladen werden: {}", thread_path.display())),
                    );
                }
            }
        });

        Self {
            path: path.to_path_buf(),
            receiver,
            handle: Some(handle),
        }
    }

    /// Pfad des geladenen Dumps.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fragt das Ergebnis ab, ohne zu blockieren.
    pub fn poll(&mut self) -> LoadPoll {
        match self.receiver.try_recv() {
            Ok(container) => {
                self.join();
                LoadPoll::Ready(container)
            }
            Err(TryRecvError::Empty) => LoadPoll::Pending,
            Err(TryRecvError::Disconnected) => {
                self.join();
                LoadPoll::Failed
            }
        }
    }

    fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("Lade-Thread für {} ist abgestürzt", self.path.display());
            }
        }
    }
}
