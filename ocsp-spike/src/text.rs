//! Human-readable rendering of OCSP requests

use crate::hash::HashAlgorithm;
use crate::request::OcspRequest;
use num_bigint_dig::BigInt;
use std::{fmt, io};

/// Uppercase hexadecimal, no separators.
pub fn hex_upper(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Big-endian two's complement bytes in uppercase hex: 0xC0FFEE renders as `00C0FFEE`.
pub fn serial_hex(serial: &BigInt) -> String {
    hex_upper(&serial.to_signed_bytes_be())
}

/// Formats an [`OcspRequest`] the way `parse-ocsp-request` prints it.
pub struct RequestText<'a>(pub &'a OcspRequest);

impl fmt::Display for RequestText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let request = self.0;

        writeln!(f, "OCSP Request Data:")?;
        writeln!(f, "    Version: {0} (0x{0:X})", request.version())?;
        writeln!(f, "    Requestor List:")?;

        for cert_id in request.cert_ids() {
            let algorithm_name = cert_id.hash_algorithm().map(HashAlgorithm::name).unwrap_or("unknown");

            writeln!(f, "        Certificate ID:")?;
            writeln!(
                f,
                "          Hash Algorithm: {} ({})",
                cert_id.hash_algorithm_oid(),
                algorithm_name
            )?;
            writeln!(f, "          Issuer Name Hash: {}", hex_upper(cert_id.issuer_name_hash()))?;
            writeln!(f, "          Issuer Key Hash: {}", hex_upper(cert_id.issuer_key_hash()))?;
            writeln!(f, "          Serial Number: {}", serial_hex(cert_id.serial_number()))?;
        }

        Ok(())
    }
}

pub fn write_request_text<W: io::Write + ?Sized>(request: &OcspRequest, out: &mut W) -> io::Result<()> {
    write!(out, "{}", RequestText(request))
}
