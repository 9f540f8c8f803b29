//! Certificate stores: named collections of certificates looked up by thumbprint

mod directory;

pub use directory::DirectoryStore;

use crate::cert::Cert;
use crate::thumbprint::Thumbprint;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// store directory can't be read
    #[error("couldn't open certificate store `{name}` at {}: {source}", .path.display())]
    Open {
        name: StoreName,
        path: PathBuf,
        source: io::Error,
    },

    /// no certificate matches the thumbprint
    #[error("no certificate with thumbprint {thumbprint} in store `{store}`")]
    CertificateNotFound { thumbprint: Thumbprint, store: StoreName },
}

/// Well-known store names, or any other store directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum StoreName {
    /// Personal certificates
    #[default]
    My,
    /// Intermediate certification authorities
    CertificateAuthority,
    /// Trusted root certification authorities
    Root,
    Other(String),
}

impl StoreName {
    pub fn as_str(&self) -> &str {
        match self {
            Self::My => "my",
            Self::CertificateAuthority => "ca",
            Self::Root => "root",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for StoreName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreName {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "my" => Self::My,
            "ca" => Self::CertificateAuthority,
            "root" => Self::Root,
            _ => Self::Other(s.to_owned()),
        })
    }
}

#[derive(Debug, Error)]
#[error("unknown store location `{0}` (expected `current-user` or `local-machine`)")]
pub struct UnknownStoreLocation(String);

/// Where store directories live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreLocation {
    /// `<home>/.ocsp-spike/stores`
    #[default]
    CurrentUser,
    /// `/etc/ocsp-spike/stores`, or `%ProgramData%\ocsp-spike\stores` on Windows
    LocalMachine,
}

impl StoreLocation {
    /// Root directory holding one sub-directory per store.
    ///
    /// `None` when the current user has no home directory.
    pub fn root(self) -> Option<PathBuf> {
        match self {
            Self::CurrentUser => home_dir().map(|home| home.join(".ocsp-spike").join("stores")),
            Self::LocalMachine => Some(local_machine_root()),
        }
    }
}

impl FromStr for StoreLocation {
    type Err = UnknownStoreLocation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "currentuser" => Ok(Self::CurrentUser),
            "localmachine" => Ok(Self::LocalMachine),
            _ => Err(UnknownStoreLocation(s.to_owned())),
        }
    }
}

#[cfg(windows)]
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("USERPROFILE").map(PathBuf::from)
}

#[cfg(not(windows))]
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

#[cfg(windows)]
fn local_machine_root() -> PathBuf {
    let program_data = std::env::var_os("ProgramData").unwrap_or_else(|| "C:\\ProgramData".into());
    PathBuf::from(program_data).join("ocsp-spike").join("stores")
}

#[cfg(not(windows))]
fn local_machine_root() -> PathBuf {
    PathBuf::from("/etc/ocsp-spike/stores")
}

/// Read access to a certificate store.
pub trait CertificateStore {
    fn name(&self) -> &StoreName;

    fn certificates(&self) -> &[Cert];

    /// First certificate whose thumbprint matches.
    fn find_by_thumbprint(&self, thumbprint: &Thumbprint) -> Option<Cert> {
        self.certificates()
            .iter()
            .find(|cert| cert.thumbprint() == *thumbprint)
            .cloned()
    }
}

/// Opens store `name` under `root`, looks the thumbprint up and closes the store before returning.
pub fn find_certificate(root: &Path, name: &StoreName, thumbprint: &Thumbprint) -> Result<Cert, StoreError> {
    let store = DirectoryStore::open(root, name.clone())?;
    let found = store.find_by_thumbprint(thumbprint);
    drop(store);

    found.ok_or_else(|| StoreError::CertificateNotFound {
        thumbprint: *thumbprint,
        store: name.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocsp_spike_test_data as test_data;
    use pretty_assertions::assert_eq;

    #[test]
    fn store_name_parsing() {
        assert_eq!("MY".parse::<StoreName>().unwrap(), StoreName::My);
        assert_eq!("ca".parse::<StoreName>().unwrap(), StoreName::CertificateAuthority);
        assert_eq!("Root".parse::<StoreName>().unwrap(), StoreName::Root);
        assert_eq!(
            "TrustedPeople".parse::<StoreName>().unwrap(),
            StoreName::Other("TrustedPeople".to_owned())
        );
        assert_eq!(StoreName::default().to_string(), "my");
    }

    #[test]
    fn store_location_parsing() {
        assert_eq!(
            "current-user".parse::<StoreLocation>().unwrap(),
            StoreLocation::CurrentUser
        );
        assert_eq!(
            "LocalMachine".parse::<StoreLocation>().unwrap(),
            StoreLocation::LocalMachine
        );
        assert!("elsewhere".parse::<StoreLocation>().is_err());
    }

    #[cfg(not(windows))]
    #[test]
    fn local_machine_root() {
        assert_eq!(
            StoreLocation::LocalMachine.root(),
            Some(PathBuf::from("/etc/ocsp-spike/stores"))
        );
    }

    #[test]
    fn find_certificate_by_thumbprint() {
        let thumbprint = test_data::TEST_LEAF_THUMBPRINT.parse::<Thumbprint>().unwrap();
        let cert = find_certificate(Path::new(test_data::STORE_ROOT), &StoreName::My, &thumbprint).unwrap();

        assert_eq!(cert.subject_name(), "CN=Test Leaf");
    }

    #[test]
    fn find_certificate_in_wrong_store() {
        let thumbprint = test_data::TEST_LEAF_THUMBPRINT.parse::<Thumbprint>().unwrap();
        let err = find_certificate(Path::new(test_data::STORE_ROOT), &StoreName::Root, &thumbprint).unwrap_err();

        assert_eq!(
            err.to_string(),
            format!(
                "no certificate with thumbprint {} in store `root`",
                test_data::TEST_LEAF_THUMBPRINT
            )
        );
    }

    #[test]
    fn missing_store() {
        let thumbprint = test_data::TEST_LEAF_THUMBPRINT.parse::<Thumbprint>().unwrap();
        let err = find_certificate(
            Path::new(test_data::STORE_ROOT),
            &StoreName::Other("nowhere".to_owned()),
            &thumbprint,
        )
        .unwrap_err();

        assert!(matches!(err, StoreError::Open { .. }));
    }
}
