use clap::{crate_description, crate_name, crate_version, App, Arg};
use ocsp_spike::HashAlgorithm;

pub const USAGE: &str = "Usage: generate-ocsp-request <thumbprint> <output-path>";

pub const ARG_THUMBPRINT: &str = "thumbprint";
pub const ARG_OUTPUT: &str = "output-path";

pub const ARG_STORE: &str = "store";
pub const ARG_STORE_LOCATION: &str = "store-location";
pub const ARG_STORE_LOCATION_CURRENT_USER: &str = "current-user";
pub const ARG_STORE_LOCATION_LOCAL_MACHINE: &str = "local-machine";
pub const ARG_STORE_ROOT: &str = "store-root";

pub const ARG_HASH: &str = "hash";

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
            Arg::with_name(ARG_THUMBPRINT)
                .value_name("THUMBPRINT")
                .help("SHA-1 thumbprint of the certificate, in hexadecimal")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name(ARG_OUTPUT)
                .value_name("OUTPUT_PATH")
                .help("Where to write the DER encoded request, overwritten if it exists")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name(ARG_STORE)
                .long(ARG_STORE)
                .value_name("NAME")
                .help("Certificate store holding the certificate")
                .takes_value(true)
                .default_value("my")
                .display_order(0),
        )
        .arg(
            Arg::with_name(ARG_STORE_LOCATION)
                .long(ARG_STORE_LOCATION)
                .value_name("LOCATION")
                .help("Location of the certificate stores")
                .takes_value(true)
                .possible_values(&[ARG_STORE_LOCATION_CURRENT_USER, ARG_STORE_LOCATION_LOCAL_MACHINE])
                .default_value(ARG_STORE_LOCATION_CURRENT_USER)
                .display_order(1),
        )
        .arg(
            Arg::with_name(ARG_STORE_ROOT)
                .long(ARG_STORE_ROOT)
                .value_name("DIR")
                .help("Directory holding the certificate stores, overrides the store location")
                .takes_value(true)
                .display_order(2),
        )
        .arg(
            Arg::with_name(ARG_HASH)
                .long(ARG_HASH)
                .value_name("ALGORITHM")
                .help("Hash algorithm of the certificate ID")
                .takes_value(true)
                .possible_values(&[
                    HashAlgorithm::SHA1.name(),
                    HashAlgorithm::SHA2_256.name(),
                    HashAlgorithm::SHA2_384.name(),
                    HashAlgorithm::SHA2_512.name(),
                ])
                .default_value(HashAlgorithm::SHA1.name())
                .display_order(3),
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
                .display_order(4),
        )
}
