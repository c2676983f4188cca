use colored::Colorize;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::io;
use std::path::Path;
use subnet_calculator::config::{Settings, LOG_CONFIG_FILE};
use subnet_calculator::input::read_subnet;
use subnet_calculator::models::SubnetReport;
use subnet_calculator::output;

fn init_logging() -> Result<(), Box<dyn Error>> {
    if Path::new(LOG_CONFIG_FILE).exists() {
        log4rs::init_file(LOG_CONFIG_FILE, Default::default())?;
        return Ok(());
    }
    // stdout carries the report, so logs go to stderr
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {l} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn run() -> Result<(), Box<dyn Error>> {
    let settings = Settings::from_env()?;

    let stdin = io::stdin();
    let subnet = read_subnet(&mut stdin.lock(), &mut io::stdout())?;
    let report = SubnetReport::build(&subnet, &settings);
    output::emit(&report, settings.output)?;
    Ok(())
}

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    if let Err(e) = init_logging() {
        eprintln!("Error initializing log4rs: {e}");
    }
    log::info!("#Start main()");

    if let Err(e) = run() {
        log::error!("{e}");
        eprintln!("{} {e}", "Error:".on_red());
        std::process::exit(1);
    }
}
