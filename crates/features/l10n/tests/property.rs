pub mod fixtures;

use fixtures::*;
use locus_l10n::{DomainName, primary_subtag};
use proptest::prelude::*;
use std::path::PathBuf;

proptest! {
    #[test]
    fn subtag_is_text_before_first_underscore(primary in "[a-z]{2,3}", rest in "[A-Za-z_]{0,8}") {
        let code = format!("{primary}_{rest}");
        prop_assert_eq!(primary_subtag(&code), primary.as_str());
    }

    #[test]
    fn subtag_of_bare_code_is_the_code(code in "[a-z]{0,8}") {
        prop_assert_eq!(primary_subtag(&code), code.as_str());
    }

    #[test]
    fn activation_requests_conventional_path(
        domain in "[a-z][a-z0-9_.-]{0,15}",
        dir in "/[a-z]{1,8}(/[a-z]{1,8}){0,2}",
        primary in "[a-z]{2,3}",
        region in "[A-Z]{2}",
    ) {
        let (activator, _context, loader) = catalog_loaded("/locales", &format!("{primary}_{region}"));
        let mut activator = activator.unwrap();

        activator.register(domain.as_str(), dir.as_str()).unwrap();
        activator.activate(domain.as_str()).unwrap();

        let expected = PathBuf::from(&dir)
            .join(&primary)
            .join("LC_MESSAGES")
            .join(format!("{domain}.catalog"));
        prop_assert_eq!(loader.last_request(), Some(expected.clone()));
        prop_assert_eq!(activator.catalog_path(domain.as_str()).unwrap(), expected);
    }

    #[test]
    fn names_with_separators_never_validate(prefix in "[a-z]{0,4}", suffix in "[a-z]{0,4}", sep in "[/\\\\ ]") {
        let name = format!("{prefix}{sep}{suffix}");
        prop_assert!(DomainName::try_from(name.as_str()).is_err());
    }
}
