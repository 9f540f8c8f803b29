//! OIDs used by OCSP requests and the certificates they refer to

use const_oid::ObjectIdentifier;

macro_rules! define_oid {
    ($uppercase:ident => $str_value:literal) => {
        pub const $uppercase: ObjectIdentifier = ObjectIdentifier::new_unwrap($str_value);
    };
    ( $( $uppercase:ident => $str_value:literal, )+ ) => {
        $( define_oid! { $uppercase => $str_value } )+
    };
}

define_oid! {
    // OIW
    SHA1 => "1.3.14.3.2.26",

    // hash algorithm
    SHA256 => "2.16.840.1.101.3.4.2.1",
    SHA384 => "2.16.840.1.101.3.4.2.2",
    SHA512 => "2.16.840.1.101.3.4.2.3",

    // certificate extensions
    SUBJECT_KEY_IDENTIFIER => "2.5.29.14",
    AUTHORITY_KEY_IDENTIFIER => "2.5.29.35",

    // RFC 6960
    OCSP_NONCE => "1.3.6.1.5.5.7.48.1.2",
}
