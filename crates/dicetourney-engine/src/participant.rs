use std::{
    fmt,
    sync::atomic::{AtomicU32, Ordering},
};

use serde::Serialize;

use crate::{InvalidRollError, OutcomeSource, ParticipantIdsExhaustedError};

static NEXT_PARTICIPANT_ID: AtomicU32 = AtomicU32::new(0);

/// Opaque identity of a participant.
///
/// Ids come from a process-wide counter, so they are unique across every
/// [`Roster`](crate::Roster) and two participants with the same name and chips
/// are still distinct, even when snapshots from several rosters are combined.
/// Within one roster, ids increase in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ParticipantId(u32);

impl ParticipantId {
    pub(crate) fn allocate() -> Result<Self, ParticipantIdsExhaustedError> {
        Self::allocate_from(&NEXT_PARTICIPANT_ID)
    }

    fn allocate_from(counter: &AtomicU32) -> Result<Self, ParticipantIdsExhaustedError> {
        counter
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |next| {
                next.checked_add(1)
            })
            .map(Self)
            .map_err(|_| ParticipantIdsExhaustedError)
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A tournament participant.
///
/// The chip balance is fixed at creation. The roll history only grows, through
/// [`Self::record_roll`] or [`Self::throw_with`], and every recorded value is a
/// die face in `1..=6`.
#[derive(Debug, Clone, Serialize)]
pub struct Participant {
    id: ParticipantId,
    name: String,
    chips: u32,
    roll_history: Vec<u8>,
}

impl Participant {
    pub(crate) fn new(id: ParticipantId, name: String, chips: u32) -> Self {
        Self {
            id,
            name,
            chips,
            roll_history: Vec::new(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> ParticipantId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn chips(&self) -> u32 {
        self.chips
    }

    /// Recorded rolls, oldest first.
    #[must_use]
    pub fn roll_history(&self) -> &[u8] {
        &self.roll_history
    }

    /// Appends a roll to the history.
    ///
    /// Values outside `1..=6` are rejected and leave the history unchanged.
    pub fn record_roll(&mut self, value: u8) -> Result<(), InvalidRollError> {
        if !(1..=6).contains(&value) {
            return Err(InvalidRollError { value });
        }
        self.roll_history.push(value);
        Ok(())
    }

    /// Throws once using `source` and records the outcome.
    pub fn throw_with<S>(&mut self, source: &mut S) -> Result<u8, InvalidRollError>
    where
        S: OutcomeSource + ?Sized,
    {
        let value = source.next_outcome();
        self.record_roll(value)?;
        Ok(value)
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
