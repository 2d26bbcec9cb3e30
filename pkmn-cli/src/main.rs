//! PKMN CLI - Command line tool for the Smogon 6v6 battle statistics dataset.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "pkmn-cli",
    version,
    about = "Battle statistics cross-filter toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: pkmn_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("pkmn-cli starting");
    pkmn_cmd::run(cli.command)
}
