use crate::config::*;
use log::LevelFilter;
use log4rs::config::Config as LoggerConfig;
use log4rs::Handle;

pub fn level_filter(level: &str) -> LevelFilter {
    match level {
        ARG_LOGGING_TRACE => LevelFilter::Trace,
        ARG_LOGGING_DEBUG => LevelFilter::Debug,
        ARG_LOGGING_INFO => LevelFilter::Info,
        ARG_LOGGING_WARN => LevelFilter::Warn,
        ARG_LOGGING_ERROR => LevelFilter::Error,
        _ => LevelFilter::Off,
    }
}

pub fn init_logs(level: LevelFilter) -> anyhow::Result<Handle> {
    let config = build_logger_config(level)?;
    Ok(log4rs::init_config(config)?)
}

// stdout is kept for the tool's own output
pub fn build_logger_config(level: LevelFilter) -> Result<LoggerConfig, log4rs::config::runtime::ConfigErrors> {
    use log4rs::append::console::{ConsoleAppender, Target};
    use log4rs::config::{Appender, Root};

    LoggerConfig::builder()
        .appender(Appender::builder().build(
            "stderr",
            Box::new(ConsoleAppender::builder().target(Target::Stderr).build()),
        ))
        .build(Root::builder().appender("stderr").build(level))
}
