//! Certificate thumbprints, the lookup key of certificate stores

use crate::hash::HashAlgorithm;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Format characters certificate dialogs like to prepend when a thumbprint is copied.
const IGNORED_FORMAT_CHARS: [char; 3] = ['\u{200e}', '\u{200f}', '\u{feff}'];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThumbprintError {
    /// unexpected character
    #[error("invalid thumbprint `{input}`: unexpected character {character:?}")]
    InvalidCharacter { input: String, character: char },

    /// wrong length
    #[error("invalid thumbprint `{input}`: expected {expected} bytes, got {actual}")]
    InvalidLength {
        input: String,
        expected: usize,
        actual: usize,
    },
}

/// SHA-1 digest of the complete DER encoding of a certificate.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Thumbprint([u8; Thumbprint::LEN]);

impl Thumbprint {
    pub const LEN: usize = 20;

    pub fn of_der(der: &[u8]) -> Self {
        let mut bytes = [0; Self::LEN];
        bytes.copy_from_slice(&HashAlgorithm::SHA1.digest(der));
        Self(bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        <[u8; Self::LEN]>::try_from(bytes).ok().map(Self)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Thumbprint {
    type Err = ThumbprintError;

    /// Hex digits are case-insensitive; whitespace and `:` separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut digits = String::with_capacity(Self::LEN * 2);

        for character in s.chars() {
            if character.is_ascii_hexdigit() {
                digits.push(character);
            } else if !(character.is_whitespace() || character == ':' || IGNORED_FORMAT_CHARS.contains(&character)) {
                return Err(ThumbprintError::InvalidCharacter {
                    input: s.to_owned(),
                    character,
                });
            }
        }

        let invalid_length = |actual| ThumbprintError::InvalidLength {
            input: s.to_owned(),
            expected: Self::LEN,
            actual,
        };

        if digits.len() % 2 != 0 {
            return Err(invalid_length(digits.len() / 2));
        }

        let bytes = hex::decode(&digits).map_err(|_| invalid_length(digits.len() / 2))?;
        Self::from_bytes(&bytes).ok_or_else(|| invalid_length(bytes.len()))
    }
}

impl fmt::Display for Thumbprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_upper(self.0))
    }
}

impl fmt::Debug for Thumbprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Thumbprint({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocsp_spike_test_data::TEST_LEAF_THUMBPRINT;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_is_case_insensitive() {
        let upper: Thumbprint = TEST_LEAF_THUMBPRINT.parse().unwrap();
        let lower: Thumbprint = TEST_LEAF_THUMBPRINT.to_lowercase().parse().unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.to_string(), TEST_LEAF_THUMBPRINT);
    }

    #[test]
    fn parse_ignores_separators_and_format_chars() {
        let pasted = "\u{200e}fc 25 5e 59 16 ec ff 81 58 fe b8 de 5f 8c 75 e6 f7 53 ef f1";
        let colons = "FC:25:5E:59:16:EC:FF:81:58:FE:B8:DE:5F:8C:75:E6:F7:53:EF:F1";

        let expected: Thumbprint = TEST_LEAF_THUMBPRINT.parse().unwrap();
        assert_eq!(pasted.parse::<Thumbprint>().unwrap(), expected);
        assert_eq!(colons.parse::<Thumbprint>().unwrap(), expected);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(
            "FC255E59ZZ".parse::<Thumbprint>().unwrap_err(),
            ThumbprintError::InvalidCharacter {
                input: "FC255E59ZZ".to_owned(),
                character: 'Z',
            }
        );
        assert_eq!(
            "FC255E".parse::<Thumbprint>().unwrap_err().to_string(),
            "invalid thumbprint `FC255E`: expected 20 bytes, got 3"
        );
        assert!("".parse::<Thumbprint>().is_err());
    }
}
