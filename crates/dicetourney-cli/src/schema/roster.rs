use chrono::{DateTime, Utc};
use dicetourney_engine::{DieSeed, ParticipantRecord, Roster, RosterError};
use serde::{Deserialize, Serialize};

/// Recorded tournament: participants with their rolls, plus how they were produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterFile {
    /// Timestamp when the file was written (ISO 8601 format)
    pub recorded_at: DateTime<Utc>,
    /// Seed of the die used for simulated rolls, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<DieSeed>,
    /// Participants in registration order
    pub participants: Vec<ParticipantRecord>,
}

impl RosterFile {
    pub fn new(roster: &Roster, seed: Option<DieSeed>) -> Self {
        Self {
            recorded_at: Utc::now(),
            seed,
            participants: roster.to_records(),
        }
    }

    pub fn to_roster(&self) -> Result<Roster, RosterError> {
        Roster::from_records(&self.participants)
    }
}
