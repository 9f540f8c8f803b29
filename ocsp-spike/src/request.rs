//! OCSP request encoding and decoding

use crate::cert_id::{CertId, CertIdError};
use crate::private;
use der::{Decode, Encode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    /// asn1 serialization error
    #[error("(asn1) couldn't serialize {element}: {source}")]
    Asn1Serialization {
        element: &'static str,
        source: der::Error,
    },

    /// asn1 deserialization error
    #[error("(asn1) couldn't deserialize {element}: {source}")]
    Asn1Deserialization {
        element: &'static str,
        source: der::Error,
    },

    /// CertID rejected while encoding
    #[error("couldn't encode CertID #{index}: {source}")]
    CertIdEncoding { index: usize, source: CertIdError },

    /// CertID rejected while decoding
    #[error("couldn't decode CertID #{index}: {source}")]
    CertIdDecoding { index: usize, source: CertIdError },

    /// nothing to decode
    #[error("couldn't decode OCSP request: input is empty")]
    EmptyInput,
}

impl RequestError {
    pub fn is_encoding_error(&self) -> bool {
        matches!(self, Self::Asn1Serialization { .. } | Self::CertIdEncoding { .. })
    }

    pub fn is_decoding_error(&self) -> bool {
        !self.is_encoding_error()
    }
}

/// An unsigned OCSP request.
///
/// Requests are always encoded inside the `OCSPRequest` envelope, without
/// requestor name, signature nor extensions. When decoding, those optional
/// parts are tolerated but only their presence is retained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OcspRequest {
    version: u32,
    cert_ids: Vec<CertId>,
    has_signature: bool,
    has_extensions: bool,
}

impl OcspRequest {
    /// `v1`, the only version defined by RFC 6960.
    pub const V1: u32 = 0;

    pub fn new(cert_ids: Vec<CertId>) -> Self {
        Self {
            version: Self::V1,
            cert_ids,
            has_signature: false,
            has_extensions: false,
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn cert_ids(&self) -> &[CertId] {
        &self.cert_ids
    }

    /// Whether the decoded request carried an `optionalSignature`.
    pub fn has_signature(&self) -> bool {
        self.has_signature
    }

    /// Whether the decoded request carried request or single request extensions.
    pub fn has_extensions(&self) -> bool {
        self.has_extensions
    }

    pub fn to_der(&self) -> Result<Vec<u8>, RequestError> {
        let request_list = self
            .cert_ids
            .iter()
            .enumerate()
            .map(|(index, cert_id)| {
                cert_id
                    .to_asn1()
                    .map(|req_cert| private::Request {
                        req_cert,
                        single_request_extensions: None,
                    })
                    .map_err(|source| RequestError::CertIdEncoding { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let request = private::OcspRequest {
            tbs_request: private::TbsRequest {
                version: self.version,
                requestor_name: None,
                request_list,
                request_extensions: None,
            },
            optional_signature: None,
        };

        request.to_der().map_err(|source| RequestError::Asn1Serialization {
            element: "OCSP request",
            source,
        })
    }

    /// Decodes a full `OCSPRequest`, or a bare `TBSRequest` as a fallback.
    ///
    /// Trailing bytes are rejected.
    pub fn from_der(der: &[u8]) -> Result<Self, RequestError> {
        if der.is_empty() {
            return Err(RequestError::EmptyInput);
        }

        let (tbs_request, has_signature) = match private::OcspRequest::from_der(der) {
            Ok(request) => {
                let has_signature = request.optional_signature.is_some();
                (request.tbs_request, has_signature)
            }
            Err(envelope_err) => match private::TbsRequest::from_der(der) {
                Ok(tbs_request) => (tbs_request, false),
                Err(_) => {
                    return Err(RequestError::Asn1Deserialization {
                        element: "OCSP request",
                        source: envelope_err,
                    })
                }
            },
        };

        let has_extensions = tbs_request.request_extensions.is_some()
            || tbs_request
                .request_list
                .iter()
                .any(|request| request.single_request_extensions.is_some());

        let cert_ids = tbs_request
            .request_list
            .into_iter()
            .enumerate()
            .map(|(index, request)| {
                CertId::from_asn1(request.req_cert).map_err(|source| RequestError::CertIdDecoding { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            version: tbs_request.version,
            cert_ids,
            has_signature,
            has_extensions,
        })
    }
}
