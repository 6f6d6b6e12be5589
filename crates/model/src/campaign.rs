use alloc::string::String;
use serde::{Deserialize, Serialize};

/// A river-cleaning campaign shown in the looping carousel.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Campaign {
    /// Stable identifier for routing.
    pub id: String,
    /// Campaign name on the card.
    pub name: String,
    /// River and country.
    pub location: String,
    pub description: String,
    /// Opaque reference to the card image; never inspected.
    pub image: String,
    /// Human-readable schedule text, e.g. "Every Saturday".
    pub schedule: String,
}
