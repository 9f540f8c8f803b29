use clap::{crate_description, crate_name, crate_version, App, Arg};

pub const USAGE: &str = "Usage: parse-ocsp-request <input-path>";

pub const ARG_INPUT: &str = "input-path";

pub const ARG_LOGGING: &str = "logging";
pub const ARG_LOGGING_TRACE: &str = "trace";
pub const ARG_LOGGING_DEBUG: &str = "debug";
pub const ARG_LOGGING_INFO: &str = "info";
pub const ARG_LOGGING_WARN: &str = "warn";
pub const ARG_LOGGING_ERROR: &str = "error";

pub fn app() -> App<'static, 'static> {
    App::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .arg(
            Arg::with_name(ARG_INPUT)
                .value_name("INPUT_PATH")
                .help("DER encoded OCSP request")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name(ARG_LOGGING)
                .short("l")
                .long(ARG_LOGGING)
                .value_name("LOG_LEVEL")
                .help("Turn on logging to stderr with provided level")
                .takes_value(true)
                .possible_values(&[
                    ARG_LOGGING_TRACE,
                    ARG_LOGGING_DEBUG,
                    ARG_LOGGING_INFO,
                    ARG_LOGGING_WARN,
                    ARG_LOGGING_ERROR,
                ])
                .display_order(0),
        )
}
