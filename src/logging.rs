use anyhow::Context;
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

type Result<T> = anyhow::Result<T>;

/// Installs a terminal logger at `level`. Meant to be called once, from a
/// binary's `main`.
pub fn init_logging(level: LevelFilter) -> Result<()> {
    TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)
        .context("a global logger is already installed")
}

/// Parses a level name such as `warn` or `TRACE`; `None` falls back to `Info`.
pub fn parse_level(raw: Option<&str>) -> Result<LevelFilter> {
    match raw {
        None => Ok(LevelFilter::Info),
        Some(name) => name
            .trim()
            .parse::<LevelFilter>()
            .with_context(|| format!("unknown log level {name:?}")),
    }
}
