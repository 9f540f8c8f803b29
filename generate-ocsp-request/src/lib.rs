use anyhow::{anyhow, Context};
use clap::{ArgMatches, ErrorKind};
use log::{debug, info};
use ocsp_spike::chain::ChainBuilder;
use ocsp_spike::store::{self, StoreLocation, StoreName};
use ocsp_spike::{Cert, CertId, HashAlgorithm, IssuerDiscovery, OcspRequest, Thumbprint};
use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub mod config;
pub mod logging;

use config::*;

/// Exit code of a wrong command line.
pub const INVALID_ARGUMENTS: i32 = -1;

#[derive(Debug, Clone)]
pub struct Options {
    pub thumbprint: Thumbprint,
    pub output: PathBuf,
    pub store: StoreName,
    pub store_root: PathBuf,
    pub hash_algorithm: HashAlgorithm,
}

impl Options {
    pub fn from_matches(matches: &ArgMatches<'_>) -> anyhow::Result<Self> {
        let thumbprint = matches
            .value_of(ARG_THUMBPRINT)
            .context("thumbprint is required")?
            .parse::<Thumbprint>()?;

        let output = matches
            .value_of_os(ARG_OUTPUT)
            .map(PathBuf::from)
            .context("output path is required")?;

        let store = match matches.value_of(ARG_STORE) {
            Some(name) => name.parse::<StoreName>()?,
            None => StoreName::default(),
        };

        let store_root = match matches.value_of_os(ARG_STORE_ROOT) {
            Some(root) => PathBuf::from(root),
            None => {
                let location = match matches.value_of(ARG_STORE_LOCATION) {
                    Some(location) => location.parse::<StoreLocation>()?,
                    None => StoreLocation::default(),
                };
                location
                    .root()
                    .ok_or_else(|| anyhow!("couldn't resolve the {:?} store location", location))?
            }
        };

        let hash_algorithm = match matches.value_of(ARG_HASH) {
            Some(hash) => hash.parse::<HashAlgorithm>()?,
            None => HashAlgorithm::default(),
        };

        Ok(Self {
            thumbprint,
            output,
            store,
            store_root,
            hash_algorithm,
        })
    }
}

/// Runs the tool with `args` (program name included) and returns the process exit code.
///
/// A wrong command line prints the usage line to `out` and returns [`INVALID_ARGUMENTS`];
/// every other failure is returned as an error.
pub fn run<I, T>(args: I, out: &mut dyn Write) -> anyhow::Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = match config::app().get_matches_from_safe(args) {
        Ok(matches) => matches,
        Err(e) if matches!(e.kind, ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed) => {
            writeln!(out, "{}", e.message)?;
            return Ok(0);
        }
        Err(e) => {
            debug!("invalid command line: {}", e.message);
            writeln!(out, "{}", USAGE)?;
            return Ok(INVALID_ARGUMENTS);
        }
    };

    if let Some(level) = matches.value_of(ARG_LOGGING) {
        logging::init_logs(logging::level_filter(level)).context("couldn't initialize logging")?;
    }

    let options = Options::from_matches(&matches)?;
    let request = generate_request(&options)?;

    fs::write(&options.output, &request)
        .with_context(|| format!("couldn't write OCSP request to {}", options.output.display()))?;
    info!("wrote {} bytes to {}", request.len(), options.output.display());

    Ok(0)
}

/// Finds the certificate, discovers its issuer and returns the DER encoded request.
pub fn generate_request(options: &Options) -> anyhow::Result<Vec<u8>> {
    debug!(
        "looking up {} in store `{}` under {}",
        options.thumbprint,
        options.store,
        options.store_root.display()
    );
    let subject = store::find_certificate(&options.store_root, &options.store, &options.thumbprint)?;
    info!("found certificate `{}`", subject.subject_name());

    let chain_builder = ChainBuilder::from_stores(&options.store_root)?;

    build_request(&subject, &chain_builder, options.hash_algorithm)
}

pub fn build_request(
    subject: &Cert,
    discovery: &dyn IssuerDiscovery,
    hash_algorithm: HashAlgorithm,
) -> anyhow::Result<Vec<u8>> {
    let issuer = discovery.discover_issuer(subject)?;
    info!("issuer is `{}`", issuer.subject_name());

    let cert_id = CertId::for_certificate(subject, &issuer, hash_algorithm)?;
    debug!(
        "certificate ID: {} name hash {}, key hash {}, serial {}",
        hash_algorithm,
        ocsp_spike::text::hex_upper(cert_id.issuer_name_hash()),
        ocsp_spike::text::hex_upper(cert_id.issuer_key_hash()),
        ocsp_spike::text::serial_hex(cert_id.serial_number()),
    );

    Ok(OcspRequest::new(vec![cert_id]).to_der()?)
}
