// src/bin/cli.rs
use boxscore::{cli::Cli, log, progress::LogProgress, runner};
use clap::Parser;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let _log_guard = log::init(cli.log_dir.as_deref());

    let mut progress = LogProgress::default();
    let summary = runner::run(&cli.to_options(), Some(&mut progress))?;

    for f in &summary.failures {
        eprintln!("Skipped game #{} {}: {}", f.index, f.game_id, f.error);
    }
    for path in &summary.files_written {
        println!("{}", path.display());
    }
    Ok(())
}
