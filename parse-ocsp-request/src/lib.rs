use anyhow::Context;
use clap::ErrorKind;
use log::debug;
use ocsp_spike::text::write_request_text;
use ocsp_spike::OcspRequest;
use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::Path;

pub mod config;
pub mod logging;

use config::*;

/// Exit code of a wrong command line.
pub const INVALID_ARGUMENTS: i32 = -1;

/// Runs the tool with `args` (program name included) and returns the process exit code.
///
/// The decoded request is printed to `out`. A wrong command line prints the
/// usage line instead and returns [`INVALID_ARGUMENTS`].
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

    let input = matches.value_of_os(ARG_INPUT).context("input path is required")?;
    parse_file(Path::new(input), out)?;

    Ok(0)
}

pub fn parse_file(path: &Path, out: &mut dyn Write) -> anyhow::Result<()> {
    let der = fs::read(path).with_context(|| format!("couldn't read {}", path.display()))?;
    debug!("read {} bytes from {}", der.len(), path.display());

    let request =
        OcspRequest::from_der(&der).with_context(|| format!("couldn't decode OCSP request from {}", path.display()))?;

    if request.has_signature() {
        debug!("request signature ignored");
    }
    if request.has_extensions() {
        debug!("request extensions ignored");
    }

    write_request_text(&request, out)?;

    Ok(())
}
