mod cli;

use clap::Parser;

use schedule_import::schedule::IdGenerator;
use schedule_import::{display, logging, run_import, upload, SPORTS};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = cli::Cli::parse();
    logging::init_logging(cli.verbose);
    let config = cli.into_config();

    display::print_banner();

    let mut ids = IdGenerator::new();
    let result = run_import(&config, SPORTS, &mut ids);

    // The upload reads whatever document is on disk, independent of this run's entries
    upload::run_upload_step(&config, result.is_ok());

    result?;
    Ok(())
}
