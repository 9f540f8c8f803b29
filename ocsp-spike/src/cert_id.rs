//! OCSP certificate identifier ([RFC 6960 #4.1.1](https://tools.ietf.org/html/rfc6960#section-4.1.1))

use crate::cert::{Cert, CertError};
use crate::hash::HashAlgorithm;
use crate::private;
use const_oid::ObjectIdentifier;
use der::asn1::{Int, Null, OctetString};
use der::{Any, AnyRef};
use num_bigint_dig::{BigInt, Sign};
use spki::AlgorithmIdentifierOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CertIdError {
    /// issuer certificate can't be hashed
    #[error("malformed issuer certificate `{subject}`: {reason}")]
    MalformedCertificate { subject: String, reason: String },

    /// serial number is negative
    #[error("invalid serial number {serial}: must not be negative")]
    InvalidSerialNumber { serial: BigInt },

    /// hash length doesn't match the declared algorithm
    #[error("{field} is {actual} bytes long but {algorithm} produces {expected} bytes")]
    HashLengthMismatch {
        algorithm: HashAlgorithm,
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// asn1 serialization error
    #[error("(asn1) couldn't serialize {element}: {source}")]
    Asn1Serialization {
        element: &'static str,
        source: der::Error,
    },
}

impl CertIdError {
    fn malformed(issuer: &Cert, reason: impl ToString) -> Self {
        Self::MalformedCertificate {
            subject: issuer.subject_name(),
            reason: reason.to_string(),
        }
    }
}

/// Identifies one certificate by its issuer's name and key hashes plus its own serial number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertId {
    hash_algorithm: ObjectIdentifier,
    issuer_name_hash: Vec<u8>,
    issuer_key_hash: Vec<u8>,
    serial_number: BigInt,
}

impl CertId {
    /// Computes the identifier of the certificate numbered `serial_number` by `issuer`.
    ///
    /// The name hash covers the DER encoding of the issuer's subject name and
    /// the key hash covers the value of its subjectPublicKey BIT STRING
    /// (tag, length and unused bits count excluded).
    pub fn new(issuer: &Cert, serial_number: &BigInt, hash_algorithm: HashAlgorithm) -> Result<Self, CertIdError> {
        check_serial_number(serial_number)?;

        let name_der = issuer
            .subject_name_der()
            .map_err(|e: CertError| CertIdError::malformed(issuer, e))?;

        let key_bits = issuer
            .subject_public_key_bits()
            .ok_or_else(|| CertIdError::malformed(issuer, "subject public key is not octet-aligned"))?;

        Ok(Self {
            hash_algorithm: hash_algorithm.oid(),
            issuer_name_hash: hash_algorithm.digest(&name_der),
            issuer_key_hash: hash_algorithm.digest(key_bits),
            serial_number: serial_number.clone(),
        })
    }

    /// Identifier of `subject`, which `issuer` signed.
    pub fn for_certificate(subject: &Cert, issuer: &Cert, hash_algorithm: HashAlgorithm) -> Result<Self, CertIdError> {
        Self::new(issuer, &subject.serial_number(), hash_algorithm)
    }

    /// Assembles an identifier from already computed parts. Nothing is validated until encoding.
    pub fn from_parts(
        hash_algorithm: ObjectIdentifier,
        issuer_name_hash: Vec<u8>,
        issuer_key_hash: Vec<u8>,
        serial_number: BigInt,
    ) -> Self {
        Self {
            hash_algorithm,
            issuer_name_hash,
            issuer_key_hash,
            serial_number,
        }
    }

    pub fn hash_algorithm_oid(&self) -> ObjectIdentifier {
        self.hash_algorithm
    }

    /// `None` when the algorithm isn't one this crate can compute.
    pub fn hash_algorithm(&self) -> Option<HashAlgorithm> {
        HashAlgorithm::from_oid(&self.hash_algorithm)
    }

    pub fn issuer_name_hash(&self) -> &[u8] {
        &self.issuer_name_hash
    }

    pub fn issuer_key_hash(&self) -> &[u8] {
        &self.issuer_key_hash
    }

    pub fn serial_number(&self) -> &BigInt {
        &self.serial_number
    }

    /// Checks hash lengths against the declared algorithm, when known, and the serial number sign.
    pub fn validate(&self) -> Result<(), CertIdError> {
        check_serial_number(&self.serial_number)?;

        if let Some(algorithm) = self.hash_algorithm() {
            check_hash_len(algorithm, "issuerNameHash", &self.issuer_name_hash)?;
            check_hash_len(algorithm, "issuerKeyHash", &self.issuer_key_hash)?;
        }

        Ok(())
    }

    pub(crate) fn to_asn1(&self) -> Result<private::CertId, CertIdError> {
        self.validate()?;

        Ok(private::CertId {
            hash_algorithm: AlgorithmIdentifierOwned {
                oid: self.hash_algorithm,
                parameters: Some(Any::from(AnyRef::from(Null))),
            },
            issuer_name_hash: OctetString::new(self.issuer_name_hash.clone())
                .map_err(serialization_err("issuerNameHash"))?,
            issuer_key_hash: OctetString::new(self.issuer_key_hash.clone())
                .map_err(serialization_err("issuerKeyHash"))?,
            serial_number: Int::new(&self.serial_number.to_signed_bytes_be())
                .map_err(serialization_err("serialNumber"))?,
        })
    }

    /// Hash algorithm parameters are ignored: NULL and absent are both accepted.
    pub(crate) fn from_asn1(cert_id: private::CertId) -> Result<Self, CertIdError> {
        let cert_id = Self {
            hash_algorithm: cert_id.hash_algorithm.oid,
            issuer_name_hash: cert_id.issuer_name_hash.as_bytes().to_vec(),
            issuer_key_hash: cert_id.issuer_key_hash.as_bytes().to_vec(),
            serial_number: BigInt::from_signed_bytes_be(cert_id.serial_number.as_bytes()),
        };

        if let Some(algorithm) = cert_id.hash_algorithm() {
            check_hash_len(algorithm, "issuerNameHash", &cert_id.issuer_name_hash)?;
            check_hash_len(algorithm, "issuerKeyHash", &cert_id.issuer_key_hash)?;
        }

        Ok(cert_id)
    }
}

fn serialization_err(element: &'static str) -> impl FnOnce(der::Error) -> CertIdError {
    move |source| CertIdError::Asn1Serialization { element, source }
}

fn check_serial_number(serial: &BigInt) -> Result<(), CertIdError> {
    if serial.sign() == Sign::Minus {
        return Err(CertIdError::InvalidSerialNumber { serial: serial.clone() });
    }
    Ok(())
}

fn check_hash_len(algorithm: HashAlgorithm, field: &'static str, hash: &[u8]) -> Result<(), CertIdError> {
    if hash.len() != algorithm.output_len() {
        return Err(CertIdError::HashLengthMismatch {
            algorithm,
            field,
            expected: algorithm.output_len(),
            actual: hash.len(),
        });
    }
    Ok(())
}
