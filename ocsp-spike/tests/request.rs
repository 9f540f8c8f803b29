use num_bigint_dig::BigInt;
use ocsp_spike::chain::ChainBuilder;
use ocsp_spike::store::{self, StoreName};
use ocsp_spike::{Cert, CertId, HashAlgorithm, IssuerDiscovery, OcspRequest, Thumbprint};
use ocsp_spike_test_data as test_data;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::Path;

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

#[test]
fn test_ca_serial_12345() {
    let ca = Cert::from_pem_str(test_data::TEST_CA).unwrap();
    let cert_id = CertId::new(&ca, &BigInt::from(12345), HashAlgorithm::SHA1).unwrap();
    let der = OcspRequest::new(vec![cert_id.clone()]).to_der().unwrap();

    assert_eq!(der[0], 0x30);
    assert!(contains(&der, &[0x06, 0x05, 0x2B, 0x0E, 0x03, 0x02, 0x1A]));

    let mut name_hash = vec![0x04, 0x14];
    name_hash.extend_from_slice(cert_id.issuer_name_hash());
    assert!(contains(&der, &name_hash));

    let mut key_hash = vec![0x04, 0x14];
    key_hash.extend_from_slice(cert_id.issuer_key_hash());
    assert!(contains(&der, &key_hash));

    assert!(der.ends_with(&[0x02, 0x02, 0x30, 0x39]));
}

#[rstest]
#[case(test_data::TEST_CA, 0u64)]
#[case(test_data::TEST_CA, 1)]
#[case(test_data::TEST_CA, 0x7F)]
#[case(test_data::TEST_CA, 0x80)]
#[case(test_data::TEST_INTERMEDIATE_CA, 0xC0FFEE)]
#[case(test_data::TEST_INTERMEDIATE_CA, u64::MAX)]
fn round_trip(#[case] issuer_pem: &str, #[case] serial: u64) {
    let issuer = Cert::from_pem_str(issuer_pem).unwrap();

    for hash_algorithm in HashAlgorithm::ALL {
        let cert_id = CertId::new(&issuer, &BigInt::from(serial), hash_algorithm).unwrap();
        let der = OcspRequest::new(vec![cert_id.clone()]).to_der().unwrap();

        let decoded = OcspRequest::from_der(&der).unwrap();
        assert_eq!(decoded.version(), 0);
        assert_eq!(decoded.cert_ids(), [cert_id]);
    }
}

#[test]
fn thumbprint_lookup_to_request() {
    let root = Path::new(test_data::STORE_ROOT);
    let thumbprint: Thumbprint = test_data::TEST_LEAF_THUMBPRINT.parse().unwrap();

    let subject = store::find_certificate(root, &StoreName::My, &thumbprint).unwrap();
    let issuer = ChainBuilder::from_stores(root).unwrap().discover_issuer(&subject).unwrap();
    let cert_id = CertId::for_certificate(&subject, &issuer, HashAlgorithm::default()).unwrap();

    assert_eq!(
        OcspRequest::new(vec![cert_id]).to_der().unwrap(),
        test_data::OCSP_REQUEST_TEST_LEAF_SHA1
    );
}
