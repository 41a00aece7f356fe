//! Participant records and dice for tournament simulation.
//!
//! This crate provides the collaborators that feed the analyzer:
//!
//! - [`Participant`] - A player with a display name, chip balance and roll history
//! - [`Roster`] - Registry that creates participants and records their rolls
//! - [`Die`] - A seeded six-sided die implementing [`OutcomeSource`]
//! - [`DieSeed`] - Seed for deterministic die sequences
//!
//! # Example
//!
//! ```
//! use dicetourney_engine::{Die, Roster};
//!
//! let mut roster = Roster::new();
//! let alice = roster.register("Alice", 1000)?;
//! roster.register("Bob", 750)?;
//!
//! let mut die = Die::new();
//! roster.play_rounds(&mut die, 10)?;
//!
//! assert_eq!(roster.get(alice).unwrap().roll_history().len(), 10);
//! # Ok::<(), dicetourney_engine::RosterError>(())
//! ```

pub use self::{die::*, participant::*, roster::*};

mod die;
mod participant;
mod roster;

/// A roll value outside the faces of a six-sided die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid roll value {value}: expected 1..=6")]
pub struct InvalidRollError {
    pub value: u8,
}

/// A participant id that is not registered in the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("participant {id} is not registered")]
pub struct UnknownParticipantError {
    pub id: ParticipantId,
}

/// Every participant id of the process has been handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no participant ids left to allocate")]
pub struct ParticipantIdsExhaustedError;

/// Errors raised while registering participants or recording their rolls
/// through the [`Roster`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum RosterError {
    #[display("{_0}")]
    InvalidRoll(InvalidRollError),
    #[display("{_0}")]
    UnknownParticipant(UnknownParticipantError),
    #[display("{_0}")]
    IdsExhausted(ParticipantIdsExhaustedError),
}
