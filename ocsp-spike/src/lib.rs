//! # ocsp-spike
//!
//! OCSP request building blocks: certificate identifiers (CertID), request
//! DER encoding and decoding, and the certificate store and issuer discovery
//! plumbing needed to compute a CertID from a certificate thumbprint.

mod private;

pub mod cert;
pub mod cert_id;
pub mod chain;
pub mod hash;
pub mod oids;
pub mod pem;
pub mod request;
pub mod store;
pub mod text;
pub mod thumbprint;

pub use cert::Cert;
pub use cert_id::CertId;
pub use chain::{ChainBuilder, IssuerDiscovery};
pub use hash::HashAlgorithm;
pub use request::OcspRequest;
pub use thumbprint::Thumbprint;
