//! Persisted form of the active motorcycle.

use serde::{Deserialize, Serialize};

use super::registry::Model;
use super::state::MotorcycleState;
use super::variant::Variant;

/// One saved dashboard session. Field order is the on-disk order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StateRecord {
    pub model: String,
    pub speed: u32,
    pub rpm: u32,
    pub gear: u8,
}

/// Snapshot the variant for saving.
pub fn serialize(variant: &Variant) -> StateRecord {
    StateRecord {
        model: variant.model().display_name().to_string(),
        speed: variant.speed(),
        rpm: variant.rpm(),
        gear: variant.gear(),
    }
}

/// Rebuild a variant from a record. Unknown models yield `None`.
///
/// Readings are clamped into range rather than rejected.
pub fn deserialize(record: &StateRecord) -> Option<Variant> {
    let model = Model::from_name(&record.model)?;
    let state = MotorcycleState::new(record.speed, record.rpm, record.gear);
    Some(Variant::new(model).restore(state))
}
