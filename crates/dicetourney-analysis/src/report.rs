//! Serializable summary of every analyzer query.
//!
//! [`TournamentReport`] gathers the results of all [`Analyzer`] queries into
//! plain data keyed by participant id and name, ready for display or JSON
//! output. Sections keep the snapshot order of participants unless the query
//! itself ranks them.
//!
//! ```
//! use dicetourney_analysis::{analyzer::Analyzer, report::TournamentReport};
//! use dicetourney_engine::Roster;
//!
//! let mut roster = Roster::new();
//! roster.register_with_history("Jenny", 2000, &[6; 10])?;
//! roster.register_with_history("McFly", 400, &[1, 2, 6, 1, 2, 3, 6, 3, 1, 6])?;
//!
//! let report = TournamentReport::build(&Analyzer::new(roster.participants()));
//! assert_eq!(report.top_three[0].name, "Jenny");
//! assert_eq!(report.losers[0].name, "McFly");
//! # Ok::<(), dicetourney_engine::RosterError>(())
//! ```

use std::collections::BTreeMap;

use arrayvec::ArrayVec;
use dicetourney_engine::{Participant, ParticipantId};
use dicetourney_stats::{descriptive::DescriptiveStats, faces::FaceCounts};
use serde::Serialize;

use crate::{
    analyzer::{self, Analyzer, TOP_N},
    chip_tier::ChipTier,
};

/// Reference to a participant in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantRef {
    pub id: ParticipantId,
    pub name: String,
}

impl From<&Participant> for ParticipantRef {
    fn from(participant: &Participant) -> Self {
        Self {
            id: participant.id(),
            name: participant.name().to_owned(),
        }
    }
}

/// A participant paired with a numeric result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreEntry {
    pub id: ParticipantId,
    pub name: String,
    pub score: f64,
}

impl ScoreEntry {
    fn new(participant: &Participant, score: f64) -> Self {
        Self {
            id: participant.id(),
            name: participant.name().to_owned(),
            score,
        }
    }
}

/// Per-participant overview of the roll history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipantSummary {
    pub id: ParticipantId,
    pub name: String,
    pub chips: u32,
    pub tier: ChipTier,
    pub rolls: Vec<u8>,
    pub count: usize,
    pub sum: u32,
    /// Number of times each face (1 to 6) was rolled.
    pub face_counts: [usize; 6],
    pub average: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub min: Option<u8>,
    pub max: Option<u8>,
    pub luck_index: f64,
}

impl ParticipantSummary {
    #[must_use]
    pub fn new(participant: &Participant) -> Self {
        let rolls = participant.roll_history();
        let stats = DescriptiveStats::from_rolls(rolls);
        let faces = FaceCounts::from_rolls(rolls);
        let mut face_counts = [0; 6];
        for (slot, (_, count)) in face_counts.iter_mut().zip(faces.iter()) {
            *slot = count;
        }
        Self {
            id: participant.id(),
            name: participant.name().to_owned(),
            chips: participant.chips(),
            tier: ChipTier::of(participant.chips()),
            rolls: rolls.to_vec(),
            count: rolls.len(),
            sum: rolls.iter().map(|&r| u32::from(r)).sum(),
            face_counts,
            average: stats.as_ref().map_or(0.0, |s| s.mean),
            variance: stats.as_ref().map_or(0.0, |s| s.variance),
            std_dev: stats.as_ref().map_or(0.0, |s| s.std_dev),
            min: rolls.iter().copied().min(),
            max: rolls.iter().copied().max(),
            luck_index: analyzer::luck_index(participant),
        }
    }
}

/// Results of every analyzer query over one snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct TournamentReport {
    pub participants: Vec<ParticipantSummary>,
    pub average_scores: Vec<ScoreEntry>,
    pub top_three: ArrayVec<ParticipantRef, TOP_N>,
    pub losers: Vec<ParticipantRef>,
    pub lucky: Vec<ParticipantRef>,
    pub chip_tiers: BTreeMap<ChipTier, Vec<ParticipantRef>>,
    pub stable: Vec<ParticipantRef>,
    pub risky: Vec<ParticipantRef>,
    pub balanced_dice: Vec<ParticipantRef>,
    pub luck_index: Vec<ScoreEntry>,
    /// Participant with the greatest variance; the score is the variance.
    pub max_variance: Option<ScoreEntry>,
}

impl TournamentReport {
    #[must_use]
    pub fn build(analyzer: &Analyzer<'_>) -> Self {
        let participants = analyzer.participants();

        let average_scores = scores_in_snapshot_order(participants, &analyzer.average_scores());
        let luck_index = scores_in_snapshot_order(participants, &analyzer.luck_index());
        let chip_tiers = analyzer
            .grouped_by_chips()
            .into_iter()
            .map(|(tier, members)| (tier, refs(&members)))
            .collect();
        let max_variance = analyzer
            .max_variance_player()
            .map(|p| ScoreEntry::new(p, analyzer::variance(p.roll_history())));

        let report = Self {
            participants: participants.iter().map(ParticipantSummary::new).collect(),
            average_scores,
            top_three: analyzer
                .top_three_by_average()
                .into_iter()
                .map(ParticipantRef::from)
                .collect(),
            losers: refs(&analyzer.losers()),
            lucky: refs(&analyzer.lucky()),
            chip_tiers,
            stable: refs(&analyzer.stable_players()),
            risky: refs(&analyzer.risky_players()),
            balanced_dice: refs(&analyzer.balanced_dice_players()),
            luck_index,
            max_variance,
        };
        tracing::debug!(
            participants = report.participants.len(),
            losers = report.losers.len(),
            lucky = report.lucky.len(),
            "Built tournament report"
        );
        report
    }
}

fn refs(participants: &[&Participant]) -> Vec<ParticipantRef> {
    participants.iter().copied().map(ParticipantRef::from).collect()
}

fn scores_in_snapshot_order(
    participants: &[Participant],
    scores: &BTreeMap<ParticipantId, f64>,
) -> Vec<ScoreEntry> {
    participants
        .iter()
        .filter_map(|p| scores.get(&p.id()).map(|&score| ScoreEntry::new(p, score)))
        .collect()
}
