use std::path::PathBuf;

use dicetourney_engine::{DEFAULT_ROUNDS, Die, DieSeed, Roster};
use rand::Rng as _;

use crate::{command::analyze, schema::roster::RosterFile, util};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    /// Number of throws per participant
    #[arg(long, default_value_t = DEFAULT_ROUNDS)]
    rounds: usize,
    /// Die seed as 32 hex characters (random if omitted)
    #[arg(long)]
    seed: Option<DieSeed>,
    /// Roster file to extend (the default lineup if omitted)
    #[arg(long)]
    roster: Option<PathBuf>,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SimulateArg) -> anyhow::Result<()> {
    let SimulateArg {
        rounds,
        seed,
        roster,
        output,
    } = arg;

    let mut roster = match roster {
        Some(path) => util::read_roster_file(path)?,
        None => Roster::default_lineup()?,
    };
    let seed = play(&mut roster, *seed, *rounds)?;

    util::save_json(&RosterFile::new(&roster, Some(seed)), output.as_deref())?;
    Ok(())
}

/// Rolls for the default lineup and prints the analysis.
pub(crate) fn run_demo() -> anyhow::Result<()> {
    let mut roster = Roster::default_lineup()?;
    play(&mut roster, None, DEFAULT_ROUNDS)?;
    analyze::print_analysis(&roster);
    Ok(())
}

fn play(roster: &mut Roster, seed: Option<DieSeed>, rounds: usize) -> anyhow::Result<DieSeed> {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let mut die = Die::with_seed(seed);
    tracing::info!(%seed, rounds, participants = roster.len(), "Simulating tournament");
    roster.play_rounds(&mut die, rounds)?;
    Ok(seed)
}
