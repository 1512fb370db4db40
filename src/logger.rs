use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
};

/// The environment variable read for the level of logs to write, e.g. `TTT_LOG=trace`.
const LEVEL_VARIABLE: &str = "TTT_LOG";

/// Writes logs to stderr, at the level requested through the environment (or warnings, otherwise).
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    let level = std::env::var(LEVEL_VARIABLE)
        .ok()
        .and_then(|level| level.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} [{t}] {m}{n}")))
        .build();

    let config = log4rs::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;

    log4rs::init_config(config)?;
    Ok(())
}
