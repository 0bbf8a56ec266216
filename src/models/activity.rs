//! Activity model for bookable activity records

use serde::{Deserialize, Serialize};

/// Something to do at a location
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Activity {
    /// Display name of the activity
    pub name: String,
    /// Location the record belongs to (exact-match key)
    pub location: String,
    /// Gates recommendation: only eco-friendly activities are ever returned
    pub eco_friendly: bool,
}

impl Activity {
    /// Create a new activity record
    #[must_use]
    pub fn new(name: String, location: String, eco_friendly: bool) -> Self {
        Self {
            name,
            location,
            eco_friendly,
        }
    }
}
