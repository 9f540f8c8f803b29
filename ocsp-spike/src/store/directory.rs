use super::{CertificateStore, StoreError, StoreName};
use crate::cert::Cert;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

const CERT_FILE_EXTENSIONS: [&str; 4] = ["pem", "crt", "cer", "der"];

/// A store backed by the `<root>/<store name>/` directory.
///
/// Certificates are loaded once when the store is opened. Files with another
/// extension are ignored, unreadable ones are skipped with a warning.
#[derive(Debug)]
pub struct DirectoryStore {
    name: StoreName,
    path: PathBuf,
    certs: Vec<Cert>,
}

impl DirectoryStore {
    pub fn open(root: &Path, name: StoreName) -> Result<Self, StoreError> {
        let path = root.join(name.as_str());

        let mut files = Vec::new();
        let entries = fs::read_dir(&path).map_err(|source| StoreError::Open {
            name: name.clone(),
            path: path.clone(),
            source,
        })?;
        for entry in entries {
            let entry = entry.map_err(|source| StoreError::Open {
                name: name.clone(),
                path: path.clone(),
                source,
            })?;

            let file_path = entry.path();
            if file_path.is_file() && has_cert_extension(&file_path) {
                files.push(file_path);
            }
        }

        // read_dir order is platform dependent
        files.sort();

        let mut certs = Vec::new();
        for file in files {
            let data = match fs::read(&file) {
                Ok(data) => data,
                Err(e) => {
                    warn!("skipping {}: {}", file.display(), e);
                    continue;
                }
            };

            match Cert::load_all(&data) {
                Ok(loaded) => certs.extend(loaded),
                Err(e) => warn!("skipping {}: {}", file.display(), e),
            }
        }

        debug!(
            "opened certificate store `{}` at {} ({} certificates)",
            name,
            path.display(),
            certs.len()
        );

        Ok(Self { name, path, certs })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CertificateStore for DirectoryStore {
    fn name(&self) -> &StoreName {
        &self.name
    }

    fn certificates(&self) -> &[Cert] {
        &self.certs
    }
}

impl Drop for DirectoryStore {
    fn drop(&mut self) {
        debug!("closed certificate store `{}`", self.name);
    }
}

fn has_cert_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| CERT_FILE_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thumbprint::Thumbprint;
    use ocsp_spike_test_data as test_data;
    use pretty_assertions::assert_eq;

    #[test]
    fn open_fixture_store() {
        let store = DirectoryStore::open(Path::new(test_data::STORE_ROOT), StoreName::My).unwrap();

        assert_eq!(store.name(), &StoreName::My);
        assert!(store.path().ends_with("my"));

        let mut subjects: Vec<_> = store.certificates().iter().map(Cert::subject_name).collect();
        subjects.sort();
        assert_eq!(subjects, ["CN=Orphan Leaf", "CN=Test Intermediate Leaf", "CN=Test Leaf"]);
    }

    #[test]
    fn der_file_is_found() {
        let store = DirectoryStore::open(Path::new(test_data::STORE_ROOT), StoreName::My).unwrap();
        let thumbprint: Thumbprint = test_data::TEST_INTERMEDIATE_LEAF_THUMBPRINT.parse().unwrap();

        let cert = store.find_by_thumbprint(&thumbprint).unwrap();
        assert_eq!(cert.thumbprint(), thumbprint);
    }

    #[test]
    fn bundles_unknown_extensions_and_garbage() {
        let root = tempfile::tempdir().unwrap();
        let store_dir = root.path().join("ca");
        fs::create_dir(&store_dir).unwrap();

        let bundle = format!("{}{}", test_data::TEST_CA, test_data::TEST_INTERMEDIATE_CA);
        fs::write(store_dir.join("bundle.pem"), bundle).unwrap();
        fs::write(store_dir.join("notes.txt"), test_data::TEST_LEAF).unwrap();
        fs::write(store_dir.join("broken.crt"), b"not a certificate").unwrap();
        fs::create_dir(store_dir.join("nested.pem")).unwrap();

        let store = DirectoryStore::open(root.path(), StoreName::CertificateAuthority).unwrap();

        assert_eq!(store.certificates().len(), 2);
        assert_eq!(store.certificates()[0].subject_name(), "CN=Test CA");
    }

    #[test]
    fn missing_directory() {
        let root = tempfile::tempdir().unwrap();
        let err = DirectoryStore::open(root.path(), StoreName::Root).unwrap_err();

        assert!(matches!(err, StoreError::Open { name: StoreName::Root, .. }));
    }
}
