//! Queries over a snapshot of tournament participants.
//!
//! The [`Analyzer`] borrows a slice of [`Participant`]s and answers ranking,
//! classification and scoring queries about them. Every query is a pure
//! function of the snapshot: nothing is cached, nothing is mutated, and an
//! empty snapshot yields empty or zero-valued results.
//!
//! # Ordering
//!
//! Queries returning participants preserve the snapshot order. Where a ranking
//! has ties (top-N by average, maximum variance), the participant that comes
//! first in the snapshot wins.
//!
//! # Identity
//!
//! Score maps are keyed by [`ParticipantId`], never by name or chips, so two
//! participants with identical attributes are reported separately. Ids are
//! unique across every [`Roster`](dicetourney_engine::Roster) of the process,
//! so a snapshot may combine participants from several rosters.

use std::collections::BTreeMap;

use arrayvec::ArrayVec;
use dicetourney_engine::{Participant, ParticipantId};
use dicetourney_stats::{
    descriptive::{mean_or_zero, variance_or_zero},
    faces::FaceCounts,
    rounding::round_to_tenths,
};

use crate::chip_tier::ChipTier;

/// Number of participants in the top-by-average ranking.
pub const TOP_N: usize = 3;

/// Face counted for losers, and how many times it must appear.
pub const LOSER_FACE: u8 = 1;
pub const LOSER_MIN_COUNT: usize = 3;

/// Face counted for lucky players, and how many times it must appear.
pub const LUCKY_FACE: u8 = 6;
pub const LUCKY_MIN_COUNT: usize = 4;

/// Stable players roll at least `STABLE_MIN_COUNT` values of `STABLE_MIN_FACE` or higher.
pub const STABLE_MIN_FACE: u8 = 4;
pub const STABLE_MIN_COUNT: usize = 8;

/// Risky players roll this face twice in a row.
pub const RISKY_FACE: u8 = 1;

/// Number of faces on the die, used as the luck index divisor.
const DIE_FACES: f64 = 6.0;

/// Read-only analysis over a participant snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'a> {
    participants: &'a [Participant],
}

impl<'a> Analyzer<'a> {
    #[must_use]
    pub const fn new(participants: &'a [Participant]) -> Self {
        Self { participants }
    }

    /// The analyzed snapshot.
    #[must_use]
    pub const fn participants(&self) -> &'a [Participant] {
        self.participants
    }

    /// Looks up a participant of the snapshot by id.
    #[must_use]
    pub fn participant(&self, id: ParticipantId) -> Option<&'a Participant> {
        self.participants.iter().find(|p| p.id() == id)
    }

    /// Mean roll value of every participant (`0.0` for an empty history).
    #[must_use]
    pub fn average_scores(&self) -> BTreeMap<ParticipantId, f64> {
        self.participants
            .iter()
            .map(|p| (p.id(), average(p.roll_history())))
            .collect()
    }

    /// All participants with their averages, best first.
    ///
    /// The sort is stable, so tied participants keep snapshot order.
    #[must_use]
    pub fn ranked_by_average(&self) -> Vec<(&'a Participant, f64)> {
        let mut ranked = self
            .participants
            .iter()
            .map(|p| (p, average(p.roll_history())))
            .collect::<Vec<_>>();
        ranked.sort_by(|(_, a), (_, b)| b.total_cmp(a));
        ranked
    }

    /// The `n` participants with the highest averages, best first.
    #[must_use]
    pub fn top_by_average(&self, n: usize) -> Vec<&'a Participant> {
        self.ranked_by_average()
            .into_iter()
            .take(n)
            .map(|(p, _)| p)
            .collect()
    }

    /// The three participants with the highest averages, best first.
    ///
    /// Returns fewer when the snapshot has fewer than three participants.
    #[must_use]
    pub fn top_three_by_average(&self) -> ArrayVec<&'a Participant, TOP_N> {
        self.ranked_by_average()
            .into_iter()
            .take(TOP_N)
            .map(|(p, _)| p)
            .collect()
    }

    /// Participants who rolled a 1 at least three times.
    #[must_use]
    pub fn losers(&self) -> Vec<&'a Participant> {
        self.filter_by_faces(|faces| faces.count(LOSER_FACE) >= LOSER_MIN_COUNT)
    }

    /// Participants who rolled a 6 at least four times.
    #[must_use]
    pub fn lucky(&self) -> Vec<&'a Participant> {
        self.filter_by_faces(|faces| faces.count(LUCKY_FACE) >= LUCKY_MIN_COUNT)
    }

    /// Participants partitioned by [`ChipTier`].
    ///
    /// All three tiers are always present, iterating `High`, `Medium`, `Low`.
    /// Within a tier participants keep snapshot order.
    #[must_use]
    pub fn grouped_by_chips(&self) -> BTreeMap<ChipTier, Vec<&'a Participant>> {
        let mut groups = ChipTier::ALL
            .into_iter()
            .map(|tier| (tier, Vec::new()))
            .collect::<BTreeMap<_, _>>();
        for participant in self.participants {
            groups
                .entry(ChipTier::of(participant.chips()))
                .or_default()
                .push(participant);
        }
        groups
    }

    /// Participants with at least eight rolls of 4 or higher, anywhere in
    /// their history.
    #[must_use]
    pub fn stable_players(&self) -> Vec<&'a Participant> {
        self.filter_by_faces(|faces| faces.count_at_least(STABLE_MIN_FACE) >= STABLE_MIN_COUNT)
    }

    /// Participants who rolled a 1 twice in a row at least once.
    #[must_use]
    pub fn risky_players(&self) -> Vec<&'a Participant> {
        self.filter(|p| has_consecutive_pair(p.roll_history(), RISKY_FACE))
    }

    /// Participants who rolled every face at least once.
    #[must_use]
    pub fn balanced_dice_players(&self) -> Vec<&'a Participant> {
        self.filter_by_faces(FaceCounts::covers_all_faces)
    }

    /// Chip-weighted roll score of every participant, see [`luck_index`].
    #[must_use]
    pub fn luck_index(&self) -> BTreeMap<ParticipantId, f64> {
        self.participants
            .iter()
            .map(|p| (p.id(), luck_index(p)))
            .collect()
    }

    /// The participant with the strictly greatest population variance.
    ///
    /// Returns `None` for an empty snapshot. On ties the first participant in
    /// snapshot order wins.
    #[must_use]
    pub fn max_variance_player(&self) -> Option<&'a Participant> {
        self.participants
            .iter()
            .map(|p| (p, variance(p.roll_history())))
            .reduce(|best, candidate| {
                if candidate.1 > best.1 {
                    candidate
                } else {
                    best
                }
            })
            .map(|(p, _)| p)
    }

    fn filter<F>(&self, mut pred: F) -> Vec<&'a Participant>
    where
        F: FnMut(&Participant) -> bool,
    {
        self.participants.iter().filter(|&p| pred(p)).collect()
    }

    fn filter_by_faces<F>(&self, mut pred: F) -> Vec<&'a Participant>
    where
        F: FnMut(&FaceCounts) -> bool,
    {
        self.filter(|p| pred(&FaceCounts::from_rolls(p.roll_history())))
    }
}

/// Mean of a roll history, `0.0` when empty.
#[must_use]
pub fn average(rolls: &[u8]) -> f64 {
    mean_or_zero(rolls)
}

/// Population variance of a roll history, `0.0` when empty.
#[must_use]
pub fn variance(rolls: &[u8]) -> f64 {
    variance_or_zero(rolls)
}

/// Luck index of one participant: `(sum of rolls / 6) * chips`, rounded to one
/// decimal place. `0.0` for an empty history.
///
/// ```
/// use dicetourney_analysis::analyzer::luck_index;
/// use dicetourney_engine::Roster;
///
/// let mut roster = Roster::new();
/// let id = roster.register_with_history("Eeyore", 100, &[3, 2, 6, 4, 6, 4, 1, 1, 1, 6])?;
/// assert_eq!(luck_index(roster.get(id).unwrap()), 566.7);
/// # Ok::<(), dicetourney_engine::RosterError>(())
/// ```
#[must_use]
pub fn luck_index(participant: &Participant) -> f64 {
    let rolls = participant.roll_history();
    if rolls.is_empty() {
        return 0.0;
    }
    let sum = rolls.iter().copied().map(u32::from).sum::<u32>();
    round_to_tenths(f64::from(sum) / DIE_FACES * f64::from(participant.chips()))
}

fn has_consecutive_pair(rolls: &[u8], face: u8) -> bool {
    rolls.windows(2).any(|w| w[0] == face && w[1] == face)
}

#[cfg(test)]
mod tests {
    use dicetourney_engine::Roster;

    use super::*;

    fn roster_of(entries: &[(&str, u32, &[u8])]) -> Roster {
        let mut roster = Roster::new();
        for &(name, chips, rolls) in entries {
            roster.register_with_history(name, chips, rolls).unwrap();
        }
        roster
    }

    fn names(participants: &[&Participant]) -> Vec<String> {
        participants.iter().map(|p| p.name().to_owned()).collect()
    }

    const MCFLY: (&str, u32, &[u8]) = ("McFly", 400, &[1, 2, 6, 1, 2, 3, 6, 3, 1, 6]);
    const JADE: (&str, u32, &[u8]) = ("Jade", 600, &[3, 2, 6, 4, 6, 4, 5, 2, 1, 6]);
    const JENNY: (&str, u32, &[u8]) = ("Jenny", 2000, &[6, 6, 6, 6, 6, 6, 6, 6, 6, 6]);
    const JULIA: (&str, u32, &[u8]) = ("Julia", 2000, &[6, 4, 5, 6, 2, 1, 6, 4, 4, 6]);
    const PERRIN: (&str, u32, &[u8]) = ("Perrin", 200, &[1, 2, 6, 1, 1, 3, 6, 3, 1, 6]);
    const EEYORE: (&str, u32, &[u8]) = ("Eeyore", 100, &[3, 2, 6, 4, 6, 4, 1, 1, 1, 6]);

    mod empty_snapshot {
        use super::*;

        #[test]
        fn test_every_query_is_empty() {
            let analyzer = Analyzer::new(&[]);
            assert!(analyzer.average_scores().is_empty());
            assert!(analyzer.top_three_by_average().is_empty());
            assert!(analyzer.losers().is_empty());
            assert!(analyzer.lucky().is_empty());
            assert!(analyzer.stable_players().is_empty());
            assert!(analyzer.risky_players().is_empty());
            assert!(analyzer.balanced_dice_players().is_empty());
            assert!(analyzer.luck_index().is_empty());
            assert!(analyzer.max_variance_player().is_none());
        }

        #[test]
        fn test_grouping_keeps_all_tiers() {
            let groups = Analyzer::new(&[]).grouped_by_chips();
            assert_eq!(groups.keys().copied().collect::<Vec<_>>(), ChipTier::ALL);
            assert!(groups.values().all(Vec::is_empty));
        }
    }

    mod averages {
        use super::*;

        #[test]
        fn test_average_scores() {
            let roster = roster_of(&[
                ("Paul", 200, &[2, 2]),
                ("David", 1200, &[3, 3]),
                ("Alice", 1200, &[4, 4]),
            ]);
            let ps = roster.participants();
            let scores = Analyzer::new(ps).average_scores();
            assert_eq!(scores[&ps[0].id()], 2.0);
            assert_eq!(scores[&ps[1].id()], 3.0);
            assert_eq!(scores[&ps[2].id()], 4.0);
        }

        #[test]
        fn test_average_matches_sum_over_len() {
            let roster = roster_of(&[MCFLY, JADE, JULIA, ("Empty", 5, &[])]);
            let scores = Analyzer::new(roster.participants()).average_scores();
            for p in roster.participants() {
                let rolls = p.roll_history();
                let expected = if rolls.is_empty() {
                    0.0
                } else {
                    rolls.iter().map(|&r| f64::from(r)).sum::<f64>() / rolls.len() as f64
                };
                assert!((scores[&p.id()] - expected).abs() < 1e-12, "{}", p.name());
            }
        }

        #[test]
        fn test_same_attributes_are_tracked_separately() {
            let roster = roster_of(&[("Twin", 100, &[6]), ("Twin", 100, &[1])]);
            let ps = roster.participants();
            let scores = Analyzer::new(ps).average_scores();
            assert_eq!(scores.len(), 2);
            assert_eq!(scores[&ps[0].id()], 6.0);
            assert_eq!(scores[&ps[1].id()], 1.0);
        }
    }

    mod top_three {
        use super::*;

        #[test]
        fn test_best_first_and_at_most_three() {
            let roster = roster_of(&[
                ("Alice", 1000, &[3, 3, 4]),
                ("Bob", 750, &[2, 2]),
                ("Charlie", 500, &[5, 4]),
                ("David", 1200, &[1]),
                ("Eva", 300, &[4, 4]),
                JENNY,
            ]);
            let top = Analyzer::new(roster.participants()).top_three_by_average();
            assert_eq!(names(&top), ["Jenny", "Charlie", "Eva"]);
        }

        #[test]
        fn test_fewer_than_three() {
            let roster = roster_of(&[MCFLY, JENNY]);
            let top = Analyzer::new(roster.participants()).top_three_by_average();
            assert_eq!(names(&top), ["Jenny", "McFly"]);
        }

        #[test]
        fn test_ties_keep_snapshot_order() {
            let roster = roster_of(&[
                ("A", 0, &[3]),
                ("B", 0, &[5]),
                ("C", 0, &[3]),
                ("D", 0, &[3]),
            ]);
            let top = Analyzer::new(roster.participants()).top_three_by_average();
            assert_eq!(names(&top), ["B", "A", "C"]);
        }

        #[test]
        fn test_sorted_descending() {
            let roster = roster_of(&[MCFLY, JADE, JENNY, JULIA, PERRIN, EEYORE]);
            let analyzer = Analyzer::new(roster.participants());
            let ranked = analyzer.ranked_by_average();
            assert_eq!(ranked.len(), 6);
            assert!(ranked.windows(2).all(|w| w[0].1 >= w[1].1));
            assert_eq!(analyzer.top_by_average(10).len(), 6);
            assert_eq!(analyzer.top_by_average(0).len(), 0);
        }
    }

    mod classifications {
        use super::*;

        #[test]
        fn test_losers() {
            let roster = roster_of(&[MCFLY, JENNY, ("Two", 0, &[1, 1, 2])]);
            let losers = Analyzer::new(roster.participants()).losers();
            assert_eq!(names(&losers), ["McFly"]);

            let roster = roster_of(&[JENNY]);
            assert!(Analyzer::new(roster.participants()).losers().is_empty());
        }

        #[test]
        fn test_lucky() {
            let roster = roster_of(&[MCFLY, JADE]);
            assert!(Analyzer::new(roster.participants()).lucky().is_empty());

            let roster = roster_of(&[MCFLY, JADE, JENNY, JULIA]);
            let lucky = Analyzer::new(roster.participants()).lucky();
            assert_eq!(names(&lucky), ["Jenny", "Julia"]);
        }

        #[test]
        fn test_stable_players() {
            let roster = roster_of(&[MCFLY, JADE, JENNY, JULIA]);
            let stable = Analyzer::new(roster.participants()).stable_players();
            assert_eq!(names(&stable), ["Jenny", "Julia"]);
        }

        #[test]
        fn test_stable_threshold_is_a_count_over_any_length() {
            let roster = roster_of(&[
                ("Eight", 0, &[4, 5, 6, 4, 5, 6, 4, 5, 1, 1, 1, 1, 2, 3]),
                ("Seven", 0, &[4, 5, 6, 4, 5, 6, 4, 3]),
                ("Exact", 0, &[4, 4, 4, 4, 4, 4, 4, 4]),
            ]);
            let stable = Analyzer::new(roster.participants()).stable_players();
            assert_eq!(names(&stable), ["Eight", "Exact"]);
        }

        #[test]
        fn test_risky_players() {
            let roster = roster_of(&[PERRIN, EEYORE, JENNY, JULIA]);
            let risky = Analyzer::new(roster.participants()).risky_players();
            assert_eq!(names(&risky), ["Perrin", "Eeyore"]);
        }

        #[test]
        fn test_risky_windows() {
            let roster = roster_of(&[
                ("Pair", 0, &[1, 1]),
                ("Split", 0, &[1, 2, 1]),
                ("Middle", 0, &[2, 1, 1, 3]),
                ("Single", 0, &[1]),
                ("Empty", 0, &[]),
                ("Sixes", 0, &[6, 6]),
            ]);
            let risky = Analyzer::new(roster.participants()).risky_players();
            assert_eq!(names(&risky), ["Pair", "Middle"]);
        }

        #[test]
        fn test_balanced_dice_players() {
            let roster = roster_of(&[
                ("Ordered", 0, &[1, 2, 3, 4, 5, 6]),
                ("Repeats", 0, &[6, 6, 1, 5, 2, 2, 4, 3, 3]),
                ("NoFive", 0, &[1, 2, 3, 4, 6, 6, 6]),
                ("Empty", 0, &[]),
            ]);
            let balanced = Analyzer::new(roster.participants()).balanced_dice_players();
            assert_eq!(names(&balanced), ["Ordered", "Repeats"]);
        }

        #[test]
        fn test_results_are_subsets_of_snapshot() {
            let roster = roster_of(&[MCFLY, JADE, JENNY, JULIA, PERRIN, EEYORE]);
            let analyzer = Analyzer::new(roster.participants());
            for result in [
                analyzer.losers(),
                analyzer.lucky(),
                analyzer.stable_players(),
                analyzer.risky_players(),
                analyzer.balanced_dice_players(),
            ] {
                for p in result {
                    assert!(analyzer.participant(p.id()).is_some());
                }
            }
        }
    }

    mod grouping {
        use super::*;

        #[test]
        fn test_grouped_by_chips() {
            let roster = roster_of(&[MCFLY, JADE, JENNY, JULIA]);
            let groups = Analyzer::new(roster.participants()).grouped_by_chips();
            assert_eq!(names(&groups[&ChipTier::High]), ["Jenny", "Julia"]);
            assert_eq!(names(&groups[&ChipTier::Medium]), ["Jade"]);
            assert_eq!(names(&groups[&ChipTier::Low]), ["McFly"]);
        }

        #[test]
        fn test_boundaries_and_exactly_one_tier() {
            let roster = roster_of(&[
                ("m1000", 1000, &[]),
                ("m500", 500, &[]),
                ("l499", 499, &[]),
                ("h1001", 1001, &[]),
                ("l0", 0, &[]),
            ]);
            let groups = Analyzer::new(roster.participants()).grouped_by_chips();
            assert_eq!(groups.len(), 3);
            assert_eq!(names(&groups[&ChipTier::High]), ["h1001"]);
            assert_eq!(names(&groups[&ChipTier::Medium]), ["m1000", "m500"]);
            assert_eq!(names(&groups[&ChipTier::Low]), ["l499", "l0"]);
            let total = groups.values().map(Vec::len).sum::<usize>();
            assert_eq!(total, roster.len());
        }

        #[test]
        fn test_iteration_order_is_fixed() {
            let roster = roster_of(&[("low", 1, &[]), ("high", 5000, &[])]);
            let groups = Analyzer::new(roster.participants()).grouped_by_chips();
            let tiers = groups.keys().copied().collect::<Vec<_>>();
            assert_eq!(tiers, [ChipTier::High, ChipTier::Medium, ChipTier::Low]);
        }
    }

    mod luck {
        use super::*;

        #[test]
        fn test_luck_index() {
            let roster = roster_of(&[PERRIN, EEYORE, JENNY, JULIA]);
            let ps = roster.participants();
            let index = Analyzer::new(ps).luck_index();
            assert_eq!(index.len(), 4);
            assert_eq!(index[&ps[0].id()], 1000.0);
            assert_eq!(index[&ps[1].id()], 566.7);
            assert_eq!(index[&ps[2].id()], 20000.0);
            assert_eq!(index[&ps[3].id()], 14666.7);
        }

        #[test]
        fn test_sum_twelve_with_two_hundred_chips() {
            let roster = roster_of(&[
                ("Short", 200, &[6, 6]),
                ("Long", 200, &[2, 2, 2, 2, 2, 2]),
            ]);
            let ps = roster.participants();
            let index = Analyzer::new(ps).luck_index();
            assert_eq!(index[&ps[0].id()], 400.0);
            assert_eq!(index[&ps[1].id()], 400.0);
        }

        #[test]
        fn test_rounds_to_tenths() {
            let roster = roster_of(&[
                ("OneSixth", 1, &[1]),
                ("OneThird", 2, &[1]),
                ("TwoThirds", 1, &[4]),
            ]);
            let ps = roster.participants();
            let index = Analyzer::new(ps).luck_index();
            assert_eq!(index[&ps[0].id()], 0.2);
            assert_eq!(index[&ps[1].id()], 0.3);
            assert_eq!(index[&ps[2].id()], 0.7);
        }

        #[test]
        fn test_empty_history_and_zero_chips() {
            let roster = roster_of(&[("Empty", 900, &[]), ("Broke", 0, &[6, 6, 6])]);
            let ps = roster.participants();
            let index = Analyzer::new(ps).luck_index();
            assert_eq!(index[&ps[0].id()], 0.0);
            assert_eq!(index[&ps[1].id()], 0.0);
        }
    }

    mod max_variance {
        use super::*;

        #[test]
        fn test_picks_widest_spread() {
            let roster = roster_of(&[
                ("Joker", 1500, &[6, 1, 6, 1, 6, 6, 1, 6, 1, 1]),
                ("Eeyore", 100, &[1, 2, 1, 3, 2, 4, 1, 1, 1, 2]),
                JENNY,
                JULIA,
            ]);
            let best = Analyzer::new(roster.participants()).max_variance_player();
            assert_eq!(best.map(Participant::name), Some("Joker"));
        }

        #[test]
        fn test_single_participant_is_trivial_max() {
            let roster = roster_of(&[JENNY]);
            let best = Analyzer::new(roster.participants()).max_variance_player();
            assert_eq!(best.map(Participant::name), Some("Jenny"));
        }

        #[test]
        fn test_ties_go_to_first() {
            let roster = roster_of(&[("A", 0, &[1, 3]), ("B", 0, &[4, 6]), ("C", 0, &[])]);
            let best = Analyzer::new(roster.participants()).max_variance_player();
            assert_eq!(best.map(Participant::name), Some("A"));
        }

        #[test]
        fn test_population_variance() {
            assert_eq!(variance(&[6, 1, 6, 1, 6, 6, 1, 6, 1, 1]), 6.25);
            assert_eq!(variance(&[1, 3]), 1.0);
            assert_eq!(variance(&[]), 0.0);
        }
    }

    #[test]
    fn test_scenario_empty_and_constant_histories() {
        let roster = roster_of(&[("A", 0, &[2, 2]), ("B", 500, &[])]);
        let ps = roster.participants();
        let analyzer = Analyzer::new(ps);

        let scores = analyzer.average_scores();
        assert_eq!(scores[&ps[0].id()], 2.0);
        assert_eq!(scores[&ps[1].id()], 0.0);

        let groups = analyzer.grouped_by_chips();
        assert!(groups[&ChipTier::High].is_empty());
        assert_eq!(names(&groups[&ChipTier::Medium]), ["B"]);
        assert_eq!(names(&groups[&ChipTier::Low]), ["A"]);

        let best = analyzer.max_variance_player();
        assert_eq!(best.map(Participant::id), Some(ps[0].id()));
    }

    #[test]
    fn test_snapshot_combining_two_rosters_keeps_namesakes_apart() {
        let first = roster_of(&[("Alice", 1000, &[6, 6])]);
        let second = roster_of(&[("Alice", 1000, &[1, 1])]);
        let snapshot = first
            .participants()
            .iter()
            .chain(second.participants())
            .cloned()
            .collect::<Vec<_>>();
        let analyzer = Analyzer::new(&snapshot);

        let scores = analyzer.average_scores();
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[&snapshot[0].id()], 6.0);
        assert_eq!(scores[&snapshot[1].id()], 1.0);

        let luck = analyzer.luck_index();
        assert_eq!(luck.len(), 2);
        assert_eq!(luck[&snapshot[0].id()], 2000.0);
        assert_eq!(luck[&snapshot[1].id()], 333.3);

        let found = analyzer.participant(snapshot[1].id()).unwrap();
        assert_eq!(found.roll_history(), &[1, 1]);
    }

    #[test]
    fn test_queries_are_idempotent() {
        let roster = roster_of(&[MCFLY, JADE, JENNY, JULIA, PERRIN, EEYORE]);
        let analyzer = Analyzer::new(roster.participants());
        assert_eq!(analyzer.average_scores(), analyzer.average_scores());
        assert_eq!(analyzer.luck_index(), analyzer.luck_index());
        assert_eq!(
            names(&analyzer.top_three_by_average()),
            names(&analyzer.top_three_by_average())
        );
        assert_eq!(names(&analyzer.risky_players()), names(&analyzer.risky_players()));
        assert_eq!(
            analyzer.max_variance_player().map(Participant::id),
            analyzer.max_variance_player().map(Participant::id)
        );
        let first = analyzer.grouped_by_chips();
        let second = analyzer.grouped_by_chips();
        for tier in ChipTier::ALL {
            assert_eq!(names(&first[&tier]), names(&second[&tier]));
        }
    }
}
