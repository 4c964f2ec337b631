//! Project scenario types for Stakesim.
//!
//! The project describes what the simulated stakeholder wants built: a
//! name, a business summary, and the requirement list the trainee is
//! supposed to elicit. Loaded once per process from a JSON file.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single requirement the stakeholder holds in mind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Requirement {
    pub id: Uuid,
    pub category: String,
    pub requirement: String,
}

/// The project scenario under discussion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub project_name: String,
    pub business_summary: String,
    pub requirements: Vec<Requirement>,
}
