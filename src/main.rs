use std::io;

use clap::Parser;
use routegen::{
    cli::Cli,
    config::Config,
    logging::init_logging,
    prompt::Prompt,
    scaffold::{Outcome, Scaffold},
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color);

    let config = Config::from_cli(&cli)?;

    log::debug!("Project directory: {}", config.working_dir.display());

    let prompt = Prompt::new(io::stdin().lock(), io::stdout());
    if let Outcome::Completed(summary) = Scaffold::new(&config.working_dir, prompt).run()? {
        log::debug!(
            "Route {}: {} files created, {} skipped in {}",
            summary.route,
            summary.created(),
            summary.skipped(),
            summary.leaf_dir.display()
        );
    }

    Ok(())
}
