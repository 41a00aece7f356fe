//! Human-readable tournament analysis
//!
//! Prints the roll table for every participant followed by the ten
//! analysis sections in a fixed order.

use std::path::PathBuf;

use dicetourney_analysis::{
    analyzer::{
        Analyzer, LOSER_FACE, LOSER_MIN_COUNT, LUCKY_FACE, LUCKY_MIN_COUNT, RISKY_FACE,
        STABLE_MIN_COUNT, STABLE_MIN_FACE, TOP_N,
    },
    chip_tier::ChipTier,
};
use dicetourney_engine::{Participant, Roster};

use crate::util;

mod table;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AnalyzeArg {
    /// Roster file produced by `simulate`
    roster: PathBuf,
}

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let AnalyzeArg { roster } = arg;
    let roster = util::read_roster_file(roster)?;
    print_analysis(&roster);
    Ok(())
}

pub(crate) fn print_analysis(roster: &Roster) {
    let analyzer = Analyzer::new(roster.participants());

    print_section_header("Roll history");
    table::print_roll_table(roster.participants());

    print_section_header("1. Average roll");
    table::print_score_table("Average", &analyzer, &analyzer.average_scores(), 2);

    print_section_header(&format!("2. Top {TOP_N} by average roll"));
    print_names(analyzer.top_three_by_average());

    print_section_header(&format!(
        "3. Losers: rolled {LOSER_FACE} at least {LOSER_MIN_COUNT} times"
    ));
    print_names(analyzer.losers());

    print_section_header(&format!(
        "4. Lucky: rolled {LUCKY_FACE} at least {LUCKY_MIN_COUNT} times"
    ));
    print_names(analyzer.lucky());

    print_section_header(&format!(
        "5. Chip tiers (>{max}, {min}..={max}, <{min})",
        min = ChipTier::MEDIUM_MIN_CHIPS,
        max = ChipTier::MEDIUM_MAX_CHIPS,
    ));
    for (tier, members) in analyzer.grouped_by_chips() {
        println!("  {:<8} {}", tier.to_string(), join_names(members));
    }

    print_section_header(&format!(
        "6. Stable dice: at least {STABLE_MIN_COUNT} rolls of {STABLE_MIN_FACE} or more"
    ));
    print_names(analyzer.stable_players());

    print_section_header(&format!("7. Risky: {RISKY_FACE} rolled twice in a row"));
    print_names(analyzer.risky_players());

    print_section_header("8. Balanced dice: every face rolled at least once");
    print_names(analyzer.balanced_dice_players());

    print_section_header("9. Luck index: sum / 6 * chips");
    table::print_score_table("Luck", &analyzer, &analyzer.luck_index(), 1);

    print_section_header("10. Greatest variance");
    match analyzer.max_variance_player() {
        Some(participant) => println!(
            "  {} (variance {:.2})",
            participant.name(),
            dicetourney_analysis::analyzer::variance(participant.roll_history()),
        ),
        None => println!("  (none)"),
    }
}

fn print_section_header(title: &str) {
    println!();
    println!("{title}");
}

fn print_names<'a, I>(participants: I)
where
    I: IntoIterator<Item = &'a Participant>,
{
    println!("  {}", join_names(participants));
}

fn join_names<'a, I>(participants: I) -> String
where
    I: IntoIterator<Item = &'a Participant>,
{
    let names = participants
        .into_iter()
        .map(Participant::name)
        .collect::<Vec<_>>();
    if names.is_empty() {
        "(none)".to_owned()
    } else {
        names.join(", ")
    }
}
