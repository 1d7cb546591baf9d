use locus_domain::constants::{CATALOG_ENCODING, DEFAULT_DOMAIN, DEFAULT_LANGUAGE, LC_MESSAGES};

#[test]
fn constants_match_backend_strings() {
    assert_eq!(DEFAULT_DOMAIN, "ssp");
    assert_eq!(CATALOG_ENCODING, "UTF-8");
    assert_eq!(LC_MESSAGES, "LC_MESSAGES");
    assert_eq!(DEFAULT_LANGUAGE, "en");
}
