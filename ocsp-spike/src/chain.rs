//! Issuer discovery by offline chain building
//!
//! Chains are built from issuer/subject name links and key identifiers only:
//! signatures, validity periods and revocation status are never checked.

use crate::cert::Cert;
use crate::store::{CertificateStore, DirectoryStore, StoreError, StoreName};
use log::debug;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChainError {
    /// chain stops at the subject
    #[error("couldn't find the issuer `{issuer}` of certificate `{subject}`")]
    IssuerNotFound { subject: String, issuer: String },

    /// candidate store couldn't be read
    #[error("couldn't collect chain candidates: {source}")]
    Store { source: StoreError },
}

/// Finds the certificate that issued a given certificate.
pub trait IssuerDiscovery {
    /// Chain position 1 when present, or the subject itself when it is self-issued.
    fn discover_issuer(&self, subject: &Cert) -> Result<Cert, ChainError>;
}

#[derive(Debug, Clone, Default)]
pub struct ChainBuilder {
    candidates: Vec<Cert>,
}

impl ChainBuilder {
    pub const MAX_DEPTH: usize = 16;

    pub const CANDIDATE_STORES: [StoreName; 3] = [StoreName::My, StoreName::CertificateAuthority, StoreName::Root];

    pub fn new(candidates: Vec<Cert>) -> Self {
        Self { candidates }
    }

    /// Collects the certificates of the `my`, `ca` and `root` stores under `root`.
    ///
    /// Each store is released before the next one is opened. Missing stores are skipped.
    pub fn from_stores(root: &Path) -> Result<Self, ChainError> {
        let mut candidates = Vec::new();

        for name in Self::CANDIDATE_STORES {
            match DirectoryStore::open(root, name) {
                Ok(store) => candidates.extend_from_slice(store.certificates()),
                Err(StoreError::Open { name, source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                    debug!("no `{}` store under {}", name, root.display());
                }
                Err(source) => return Err(ChainError::Store { source }),
            }
        }

        Ok(Self { candidates })
    }

    pub fn add_certificate(&mut self, cert: Cert) {
        self.candidates.push(cert);
    }

    pub fn candidates(&self) -> &[Cert] {
        &self.candidates
    }

    /// Walks issuer links from `subject`, which is always the first element.
    ///
    /// Stops on a self-issued certificate, a missing issuer, a certificate
    /// already in the chain, or after [`Self::MAX_DEPTH`] certificates.
    pub fn build_chain(&self, subject: &Cert) -> Vec<Cert> {
        let mut chain = vec![subject.clone()];

        while chain.len() < Self::MAX_DEPTH {
            let current = &chain[chain.len() - 1];
            if current.is_self_issued() {
                break;
            }

            let parent = self
                .candidates
                .iter()
                .find(|candidate| candidate.is_parent_of(current) && !chain.contains(candidate));

            match parent {
                Some(parent) => {
                    debug!("`{}` issued by `{}`", current.subject_name(), parent.subject_name());
                    let parent = parent.clone();
                    chain.push(parent);
                }
                None => break,
            }
        }

        chain
    }
}

impl IssuerDiscovery for ChainBuilder {
    fn discover_issuer(&self, subject: &Cert) -> Result<Cert, ChainError> {
        let mut chain = self.build_chain(subject);

        if chain.len() > 1 {
            return Ok(chain.swap_remove(1));
        }

        if subject.is_self_issued() {
            debug!("`{}` is self-issued", subject.subject_name());
            return Ok(subject.clone());
        }

        Err(ChainError::IssuerNotFound {
            subject: subject.subject_name(),
            issuer: subject.issuer_name(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocsp_spike_test_data as test_data;
    use pretty_assertions::assert_eq;

    fn cert(pem: &str) -> Cert {
        Cert::from_pem_str(pem).unwrap()
    }

    fn fixture_builder() -> ChainBuilder {
        ChainBuilder::from_stores(Path::new(test_data::STORE_ROOT)).unwrap()
    }

    #[test]
    fn candidates_from_all_stores() {
        assert_eq!(fixture_builder().candidates().len(), 5);
    }

    #[test]
    fn leaf_issued_by_root() {
        let issuer = fixture_builder().discover_issuer(&cert(test_data::TEST_LEAF)).unwrap();
        assert_eq!(issuer, cert(test_data::TEST_CA));
    }

    #[test]
    fn leaf_issued_by_intermediate() {
        let leaf = cert(test_data::TEST_INTERMEDIATE_LEAF);
        let builder = fixture_builder();

        let chain: Vec<_> = builder.build_chain(&leaf).iter().map(Cert::subject_name).collect();
        assert_eq!(
            chain,
            ["CN=Test Intermediate Leaf", "CN=Test Intermediate CA,O=Test Org", "CN=Test CA"]
        );

        let issuer = builder.discover_issuer(&leaf).unwrap();
        assert_eq!(issuer, cert(test_data::TEST_INTERMEDIATE_CA));
    }

    #[test]
    fn self_issued_subject_is_its_own_issuer() {
        let ca = cert(test_data::TEST_CA);
        let builder = fixture_builder();

        assert_eq!(builder.build_chain(&ca).len(), 1);
        assert_eq!(builder.discover_issuer(&ca).unwrap(), ca);
    }

    #[test]
    fn orphan_certificate() {
        let err = fixture_builder()
            .discover_issuer(&cert(test_data::ORPHAN_LEAF))
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "couldn't find the issuer `CN=Ghost CA` of certificate `CN=Orphan Leaf`"
        );
    }

    #[test]
    fn missing_stores_are_skipped() {
        let root = tempfile::tempdir().unwrap();
        let builder = ChainBuilder::from_stores(root.path()).unwrap();

        assert!(builder.candidates().is_empty());
        assert!(matches!(
            builder.discover_issuer(&cert(test_data::TEST_LEAF)),
            Err(ChainError::IssuerNotFound { .. })
        ));
    }

    #[test]
    fn explicit_candidates() {
        let mut builder = ChainBuilder::new(vec![cert(test_data::TEST_INTERMEDIATE_CA)]);
        let leaf = cert(test_data::TEST_INTERMEDIATE_LEAF);
        assert_eq!(builder.build_chain(&leaf).len(), 2);

        builder.add_certificate(cert(test_data::TEST_CA));
        assert_eq!(builder.build_chain(&leaf).len(), 3);
    }
}
