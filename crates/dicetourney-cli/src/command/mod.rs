use clap::{Parser, Subcommand};

use self::{analyze::AnalyzeArg, report::ReportArg, simulate::SimulateArg};

mod analyze;
mod report;
mod simulate;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Roll dice for a roster and save the results
    Simulate(#[clap(flatten)] SimulateArg),
    /// Print the analysis of a roster file
    Analyze(#[clap(flatten)] AnalyzeArg),
    /// Write the analysis of a roster file as JSON
    Report(#[clap(flatten)] ReportArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Some(Mode::Simulate(arg)) => simulate::run(&arg)?,
        Some(Mode::Analyze(arg)) => analyze::run(&arg)?,
        Some(Mode::Report(arg)) => report::run(&arg)?,
        None => simulate::run_demo()?,
    }
    Ok(())
}
