//! Hash algorithms usable for OCSP CertID computation

use crate::oids;
use const_oid::ObjectIdentifier;
use digest::Digest;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("unsupported hash algorithm: {name}")]
pub struct UnsupportedHashAlgorithm {
    pub name: String,
}

/// Supported hash algorithms.
///
/// `SHA1` is what RFC 6960 clients and responders are expected to understand and stays the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum HashAlgorithm {
    #[default]
    SHA1,
    SHA2_256,
    SHA2_384,
    SHA2_512,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 4] = [Self::SHA1, Self::SHA2_256, Self::SHA2_384, Self::SHA2_512];

    pub fn digest(self, msg: &[u8]) -> Vec<u8> {
        match self {
            Self::SHA1 => sha1::Sha1::digest(msg).as_slice().to_vec(),
            Self::SHA2_256 => sha2::Sha256::digest(msg).as_slice().to_vec(),
            Self::SHA2_384 => sha2::Sha384::digest(msg).as_slice().to_vec(),
            Self::SHA2_512 => sha2::Sha512::digest(msg).as_slice().to_vec(),
        }
    }

    /// Digest length in bytes.
    pub fn output_len(self) -> usize {
        match self {
            Self::SHA1 => 20,
            Self::SHA2_256 => 32,
            Self::SHA2_384 => 48,
            Self::SHA2_512 => 64,
        }
    }

    pub fn oid(self) -> ObjectIdentifier {
        match self {
            Self::SHA1 => oids::SHA1,
            Self::SHA2_256 => oids::SHA256,
            Self::SHA2_384 => oids::SHA384,
            Self::SHA2_512 => oids::SHA512,
        }
    }

    pub fn from_oid(oid: &ObjectIdentifier) -> Option<Self> {
        Self::ALL.into_iter().find(|algorithm| algorithm.oid() == *oid)
    }

    /// Short lowercase name, as printed by `openssl ocsp -req_text`.
    pub fn name(self) -> &'static str {
        match self {
            Self::SHA1 => "sha1",
            Self::SHA2_256 => "sha256",
            Self::SHA2_384 => "sha384",
            Self::SHA2_512 => "sha512",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = UnsupportedHashAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "");
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == normalized)
            .ok_or_else(|| UnsupportedHashAlgorithm { name: s.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(HashAlgorithm::SHA1)]
    #[case(HashAlgorithm::SHA2_256)]
    #[case(HashAlgorithm::SHA2_384)]
    #[case(HashAlgorithm::SHA2_512)]
    fn digest_matches_declared_length(#[case] algorithm: HashAlgorithm) {
        assert_eq!(algorithm.digest(b"picky").len(), algorithm.output_len());
        assert_eq!(HashAlgorithm::from_oid(&algorithm.oid()), Some(algorithm));
        assert_eq!(algorithm.name().parse::<HashAlgorithm>().unwrap(), algorithm);
    }

    #[test]
    fn sha1_is_default() {
        assert_eq!(HashAlgorithm::default(), HashAlgorithm::SHA1);
        assert_eq!(HashAlgorithm::SHA1.oid().to_string(), "1.3.14.3.2.26");
    }

    #[test]
    fn parse_is_lenient_on_case_and_dashes() {
        assert_eq!("SHA-256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::SHA2_256);
        assert_eq!(
            "md5".parse::<HashAlgorithm>().unwrap_err().to_string(),
            "unsupported hash algorithm: md5"
        );
    }

    #[test]
    fn unknown_oid() {
        assert_eq!(HashAlgorithm::from_oid(&oids::SUBJECT_KEY_IDENTIFIER), None);
    }
}
