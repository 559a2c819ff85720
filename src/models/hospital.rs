//! Hospital registry model

use serde::Serialize;

/// A registered hospital
#[derive(Debug, Clone, Serialize)]
pub struct Hospital {
    /// Hospital identifier (primary key)
    pub hospital_id: String,
    /// Location label
    pub location: Option<String>,
}

impl Hospital {
    /// Create a new hospital record
    #[must_use]
    pub fn new(hospital_id: String, location: Option<String>) -> Self {
        Self {
            hospital_id,
            location,
        }
    }
}
