//! PEM reader ([RFC 7468](https://tools.ietf.org/html/rfc7468)) for single documents and bundles.

use base64::engine::general_purpose;
use base64::Engine as _;
use std::str::FromStr;
use thiserror::Error;

const PEM_HEADER_START: &str = "-----BEGIN";
const PEM_HEADER_END: &str = "-----END";
const PEM_DASHES_BOUNDARIES: &str = "-----";

#[derive(Debug, Clone, Error)]
pub enum PemError {
    /// pem header not found
    #[error("pem header not found")]
    HeaderNotFound,

    /// invalid pem header
    #[error("invalid pem header")]
    InvalidHeader,

    /// pem footer not found
    #[error("pem footer not found (label: {label})")]
    FooterNotFound { label: String },

    /// couldn't decode base64
    #[error("couldn't decode base64: {source}")]
    Base64Decoding { source: base64::DecodeError },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pem {
    label: String,
    data: Vec<u8>,
}

impl Pem {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

impl FromStr for Pem {
    type Err = PemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_pem(s.as_bytes())
    }
}

/// Read the first PEM-encoded structure of `input`.
pub fn parse_pem<T: ?Sized + AsRef<[u8]>>(input: &T) -> Result<Pem, PemError> {
    parse_next(input.as_ref()).map(|(pem, _)| pem)
}

/// Read every PEM-encoded structure of `input`, in order.
///
/// Text between structures (comments, `openssl x509 -text` dumps...) is ignored.
pub fn parse_pem_bundle<T: ?Sized + AsRef<[u8]>>(input: &T) -> Result<Vec<Pem>, PemError> {
    let mut remaining = input.as_ref();
    let mut documents = Vec::new();

    while find(remaining, PEM_HEADER_START.as_bytes()).is_some() {
        let (pem, consumed) = parse_next(remaining)?;
        documents.push(pem);
        remaining = &remaining[consumed..];
    }

    if documents.is_empty() {
        return Err(PemError::HeaderNotFound);
    }

    Ok(documents)
}

/// Returns the parsed structure and the number of input bytes it spans.
fn parse_next(input: &[u8]) -> Result<(Pem, usize), PemError> {
    let header_start_idx = find(input, PEM_HEADER_START.as_bytes()).ok_or(PemError::HeaderNotFound)?;

    let label_start_idx = header_start_idx + PEM_HEADER_START.len();
    let label_end_idx = find(&input[label_start_idx..], b"-").ok_or(PemError::InvalidHeader)? + label_start_idx;
    let label = String::from_utf8_lossy(&input[label_start_idx..label_end_idx])
        .trim()
        .to_owned();

    let header_end_idx = find(&input[label_end_idx..], PEM_DASHES_BOUNDARIES.as_bytes())
        .ok_or(PemError::InvalidHeader)?
        + label_end_idx
        + PEM_DASHES_BOUNDARIES.len();

    let footer_start_idx = match find(&input[header_end_idx..], PEM_HEADER_END.as_bytes()) {
        Some(idx) => idx + header_end_idx,
        None => return Err(PemError::FooterNotFound { label }),
    };

    let footer_label_idx = footer_start_idx + PEM_HEADER_END.len();
    let footer_end_idx = find(&input[footer_label_idx..], PEM_DASHES_BOUNDARIES.as_bytes())
        .map(|idx| idx + footer_label_idx + PEM_DASHES_BOUNDARIES.len())
        .unwrap_or(input.len());

    let striped_raw_data: Vec<u8> = input[header_end_idx..footer_start_idx]
        .iter()
        .copied()
        .filter(|byte| !byte.is_ascii_whitespace())
        .collect();

    let data = general_purpose::STANDARD
        .decode(striped_raw_data)
        .map_err(|source| PemError::Base64Decoding { source })?;

    Ok((Pem { label, data }, footer_end_idx))
}

fn find(buffer: &[u8], value: &[u8]) -> Option<usize> {
    buffer.windows(value.len()).position(|window| window == value)
}
