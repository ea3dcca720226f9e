//! Use-Cases der Application-Layer-Orchestrierung.

pub mod editing;
pub mod map_io;
pub mod selection;
