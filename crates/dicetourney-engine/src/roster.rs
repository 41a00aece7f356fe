use serde::{Deserialize, Serialize};

use crate::{
    InvalidRollError, OutcomeSource, Participant, ParticipantId, RosterError,
    UnknownParticipantError,
};

/// Number of throws per participant in a standard tournament.
pub const DEFAULT_ROUNDS: usize = 10;

/// Serializable form of a participant: name, chips and recorded rolls.
///
/// Ids are not stored; fresh ids are allocated when the records are loaded
/// back into a [`Roster`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantRecord {
    pub name: String,
    pub chips: u32,
    #[serde(default)]
    pub rolls: Vec<u8>,
}

/// Registry of tournament participants.
///
/// The roster creates participants, gives each a fresh [`ParticipantId`] and is
/// the only place their roll histories are appended to. Analysis borrows
/// [`Self::participants`] as an immutable snapshot.
#[derive(Debug, Default)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            participants: Vec::new(),
        }
    }

    /// The five-player lineup used when no roster is given.
    pub fn default_lineup() -> Result<Self, RosterError> {
        let mut roster = Self::new();
        for (name, chips) in [
            ("Alice", 1000),
            ("Bob", 750),
            ("Charlie", 500),
            ("David", 1200),
            ("Eva", 300),
        ] {
            roster.register(name, chips)?;
        }
        Ok(roster)
    }

    /// Builds a roster from serialized records, validating every roll.
    pub fn from_records(records: &[ParticipantRecord]) -> Result<Self, RosterError> {
        let mut roster = Self::new();
        for record in records {
            roster.register_with_history(&record.name, record.chips, &record.rolls)?;
        }
        tracing::debug!(count = roster.len(), "Loaded roster from records");
        Ok(roster)
    }

    #[must_use]
    pub fn to_records(&self) -> Vec<ParticipantRecord> {
        self.participants
            .iter()
            .map(|p| ParticipantRecord {
                name: p.name().to_owned(),
                chips: p.chips(),
                rolls: p.roll_history().to_vec(),
            })
            .collect()
    }

    /// Registers a new participant with an empty history.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        chips: u32,
    ) -> Result<ParticipantId, RosterError> {
        let id = ParticipantId::allocate()?;
        let participant = Participant::new(id, name.into(), chips);
        tracing::trace!(%id, name = participant.name(), chips, "Registered participant");
        self.participants.push(participant);
        Ok(id)
    }

    /// Registers a participant whose rolls were recorded elsewhere.
    ///
    /// Nothing is registered if any roll is outside `1..=6`.
    pub fn register_with_history(
        &mut self,
        name: impl Into<String>,
        chips: u32,
        rolls: &[u8],
    ) -> Result<ParticipantId, RosterError> {
        if let Some(&value) = rolls.iter().find(|v| !(1..=6).contains(*v)) {
            return Err(InvalidRollError { value }.into());
        }
        let id = self.register(name, chips)?;
        let participant = self.get_mut(id).ok_or(UnknownParticipantError { id })?;
        for &roll in rolls {
            participant.record_roll(roll)?;
        }
        Ok(id)
    }

    #[must_use]
    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        let index = self.position(id)?;
        Some(&self.participants[index])
    }

    pub fn get_mut(&mut self, id: ParticipantId) -> Option<&mut Participant> {
        let index = self.position(id)?;
        Some(&mut self.participants[index])
    }

    // Ids are pushed in allocation order, so the list is sorted by id.
    fn position(&self, id: ParticipantId) -> Option<usize> {
        self.participants
            .binary_search_by_key(&id, Participant::id)
            .ok()
    }

    /// Records a roll for a registered participant.
    pub fn record_roll(&mut self, id: ParticipantId, value: u8) -> Result<(), RosterError> {
        let participant = self
            .get_mut(id)
            .ok_or(UnknownParticipantError { id })?;
        participant.record_roll(value)?;
        Ok(())
    }

    /// Plays `rounds` rounds: in each round every participant throws once, in
    /// registration order.
    pub fn play_rounds<S>(&mut self, source: &mut S, rounds: usize) -> Result<(), InvalidRollError>
    where
        S: OutcomeSource + ?Sized,
    {
        for round in 0..rounds {
            for participant in &mut self.participants {
                participant.throw_with(source)?;
            }
            tracing::trace!(round, "Round complete");
        }
        tracing::debug!(
            rounds,
            participants = self.participants.len(),
            "Finished playing rounds"
        );
        Ok(())
    }

    /// All participants in registration order.
    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}
