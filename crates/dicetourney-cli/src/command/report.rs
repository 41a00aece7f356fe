use std::path::PathBuf;

use dicetourney_analysis::{analyzer::Analyzer, report::TournamentReport};

use crate::util;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ReportArg {
    /// Roster file produced by `simulate`
    roster: PathBuf,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ReportArg) -> anyhow::Result<()> {
    let ReportArg { roster, output } = arg;

    let roster = util::read_roster_file(roster)?;
    let report = TournamentReport::build(&Analyzer::new(roster.participants()));

    util::save_json(&report, output.as_deref())?;
    Ok(())
}
