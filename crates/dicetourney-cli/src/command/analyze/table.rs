//! Fixed-width tables for the analysis output

use std::collections::BTreeMap;

use dicetourney_analysis::analyzer::Analyzer;
use dicetourney_engine::{Participant, ParticipantId};

const NAME_WIDTH: usize = 12;

/// Print every participant's chips and roll sequence
pub(super) fn print_roll_table(participants: &[Participant]) {
    println!("  {:<NAME_WIDTH$} {:>6}  Rolls", "Name", "Chips");
    println!("  {}", "-".repeat(NAME_WIDTH + 7 + 2 + 30));
    for participant in participants {
        let rolls = participant
            .roll_history()
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        println!(
            "  {:<NAME_WIDTH$} {:>6}  {}",
            participant.name(),
            participant.chips(),
            rolls,
        );
    }
}

/// Print one value per participant, in snapshot order
///
/// # Arguments
/// * `label` - Header of the value column
/// * `analyzer` - Analyzer whose snapshot gives the row order and names
/// * `scores` - Values keyed by participant
/// * `precision` - Number of decimals to show
pub(super) fn print_score_table(
    label: &str,
    analyzer: &Analyzer<'_>,
    scores: &BTreeMap<ParticipantId, f64>,
    precision: usize,
) {
    println!("  {:<NAME_WIDTH$} {label:>12}", "Name");
    println!("  {}", "-".repeat(NAME_WIDTH + 13));
    for (name, score) in score_rows(analyzer, scores) {
        println!("  {name:<NAME_WIDTH$} {score:>12.precision$}");
    }
}

fn score_rows<'a>(
    analyzer: &Analyzer<'a>,
    scores: &BTreeMap<ParticipantId, f64>,
) -> Vec<(&'a str, f64)> {
    analyzer
        .participants()
        .iter()
        .filter_map(|p| scores.get(&p.id()).map(|&score| (p.name(), score)))
        .collect()
}
