//! Test data shared between the ocsp-spike crates.
//!
//! Certificates and requests were produced with the `openssl` command line tool;
//! the command for each fixture is written above its constant.

// openssl req -x509 -newkey rsa:2048 -nodes -subj "/CN=Test CA" -days 36500 -set_serial 1 \
//     -addext "basicConstraints=critical,CA:TRUE" -addext "subjectKeyIdentifier=hash" -out test-ca.pem
pub const TEST_CA: &str = include_str!("../test_assets/certs/test-ca.pem");
pub const TEST_CA_THUMBPRINT: &str = "EBEA0C5F21D01D707D9F83F56863EA8F9AC61EE0";

// openssl x509 -req -in leaf.csr -CA test-ca.pem -CAkey ca.key -set_serial 12345 -extfile leaf.ext
pub const TEST_LEAF: &str = include_str!("../test_assets/certs/test-leaf.pem");
pub const TEST_LEAF_THUMBPRINT: &str = "FC255E5916ECFF8158FEB8DE5F8C75E6F753EFF1";

// P-256 key, subject "/O=Test Org/CN=Test Intermediate CA", issued by TEST_CA with serial 2
pub const TEST_INTERMEDIATE_CA: &str = include_str!("../test_assets/certs/test-intermediate-ca.pem");
pub const TEST_INTERMEDIATE_CA_THUMBPRINT: &str = "562954B8EF267F7B5CD90310846AA4F65E53789F";

// P-256 key issued by TEST_INTERMEDIATE_CA with serial 0xC0FFEE (DER INTEGER 00 C0 FF EE)
pub const TEST_INTERMEDIATE_LEAF: &str = include_str!("../test_assets/certs/test-intermediate-leaf.pem");
pub const TEST_INTERMEDIATE_LEAF_THUMBPRINT: &str = "097C318459E090E82DD89975C26D122F2A29E032";

// issued by a throwaway "CN=Ghost CA" which is not part of any fixture store
pub const ORPHAN_LEAF: &str = include_str!("../test_assets/certs/orphan-leaf.pem");
pub const ORPHAN_LEAF_THUMBPRINT: &str = "54774CB90A0D89BC0E77FDE4B11C087F451410B9";

// openssl ocsp -issuer test-ca.pem -cert test-leaf.pem -no_nonce -reqout test-leaf-sha1.der
pub const OCSP_REQUEST_TEST_LEAF_SHA1: &[u8] = include_bytes!("../test_assets/requests/test-leaf-sha1.der");

// openssl ocsp -sha256 -issuer test-ca.pem -cert test-leaf.pem -no_nonce -reqout test-leaf-sha256.der
pub const OCSP_REQUEST_TEST_LEAF_SHA256: &[u8] = include_bytes!("../test_assets/requests/test-leaf-sha256.der");

// openssl ocsp -sha384 -issuer test-ca.pem -cert test-leaf.pem -no_nonce -reqout test-leaf-sha384.der
pub const OCSP_REQUEST_TEST_LEAF_SHA384: &[u8] = include_bytes!("../test_assets/requests/test-leaf-sha384.der");

// openssl ocsp -sha512 -issuer test-ca.pem -cert test-leaf.pem -no_nonce -reqout test-leaf-sha512.der
pub const OCSP_REQUEST_TEST_LEAF_SHA512: &[u8] = include_bytes!("../test_assets/requests/test-leaf-sha512.der");

// openssl ocsp -issuer test-intermediate-ca.pem -cert test-intermediate-leaf.pem -no_nonce -reqout test-intermediate-leaf-sha1.der
pub const OCSP_REQUEST_TEST_INTERMEDIATE_LEAF_SHA1: &[u8] =
    include_bytes!("../test_assets/requests/test-intermediate-leaf-sha1.der");

// openssl ocsp -issuer test-ca.pem -cert test-leaf.pem -cert test-intermediate-ca.pem -no_nonce -reqout two-cert-ids.der
pub const OCSP_REQUEST_TWO_CERT_IDS: &[u8] = include_bytes!("../test_assets/requests/two-cert-ids.der");

// openssl ocsp -issuer test-ca.pem -cert test-leaf.pem -reqout test-leaf-nonce.der
pub const OCSP_REQUEST_TEST_LEAF_NONCE: &[u8] = include_bytes!("../test_assets/requests/test-leaf-nonce.der");

// openssl ocsp -issuer test-ca.pem -cert test-leaf.pem -no_nonce -signer test-leaf.pem -signkey leaf.key -reqout test-leaf-signed.der
pub const OCSP_REQUEST_TEST_LEAF_SIGNED: &[u8] = include_bytes!("../test_assets/requests/test-leaf-signed.der");

/// Directory store root laid out as `<root>/<store name>/<certificate files>`:
///
/// - `my`: TEST_LEAF (PEM), TEST_INTERMEDIATE_LEAF (DER), ORPHAN_LEAF (PEM, `.crt`)
/// - `ca`: TEST_INTERMEDIATE_CA
/// - `root`: TEST_CA (PEM, `.cer`)
pub const STORE_ROOT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/test_assets/store");
