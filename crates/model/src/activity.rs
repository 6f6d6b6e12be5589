use alloc::{string::String, vec::Vec};
use serde::{Deserialize, Serialize};

/// A daily household activity with its fixed per-use water cost.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Activity {
    /// Stable identifier used by the selection set.
    pub id: String,
    /// Display name on the card.
    pub name: String,
    /// Liters of water consumed per use.
    pub water_usage: u32,
    /// Typical duration text, e.g. "10 minutes" or "1 load".
    pub duration: String,
    /// Conservation tips surfaced when the activity is selected.
    pub tips: Vec<String>,
    /// Opaque reference to the card image; never inspected.
    pub image: String,
}
