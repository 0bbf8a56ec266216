//! Accommodation model for lodging records

use serde::{Deserialize, Serialize};

/// A place to stay, with its sustainability rating
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Accommodation {
    /// Display name of the accommodation
    pub name: String,
    /// Location the record belongs to (exact-match key)
    pub location: String,
    /// Sustainability rating; returned as-is, not used for ranking
    pub eco_rating: f32,
}

impl Accommodation {
    /// Create a new accommodation record
    #[must_use]
    pub fn new(name: String, location: String, eco_rating: f32) -> Self {
        Self {
            name,
            location,
            eco_rating,
        }
    }
}
