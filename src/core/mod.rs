//! Core-Domänentypen: Entities, Properties, Map-Container, MapBank, Filter.

pub mod entity;
pub mod filter;
pub mod map_bank;
pub mod map_container;
pub mod map_dump;
pub mod property;

pub use entity::{Entity, EntityId, EntityRef, PROP_MODEL_NAME, PROP_POSITION, PROP_ROTATION};
pub use filter::{FilterMode, SelectionFilter};
pub use map_bank::{MapBank, MapBankError};
pub use map_container::{MapContainer, MissingReference};
pub use map_dump::{EntityDump, MapDump};
pub use property::{Comparator, PropertyValue};
