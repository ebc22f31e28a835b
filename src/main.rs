use anyhow::Result;
use clap::{crate_version, App as Cli, Arg};
use std::path::PathBuf;
use survey_tui::{app::App, config::Config};

fn main() -> Result<()> {
    let matches = Cli::new("survey-tui")
        .version(crate_version!())
        .about("Author, preview and take surveys in the terminal")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml (default: ~/.config/survey-tui)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("storage")
                .short("s")
                .long("storage")
                .value_name("DIR")
                .help("Directory holding the saved survey (overrides the config)")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;

    App::start(config, matches.value_of("storage").map(PathBuf::from))?;
    Ok(())
}
