use locus_domain::config::{BackendMode, L10nConfigInner};
use locus_domain::language::FixedLanguage;
use locus_l10n::{DomainActivator, L10nError, LocaleContext};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

const SSP_NB: &str = r#"
msgid ""
msgstr ""
"Language: nb\n"

msgid "Username"
msgstr "Brukernavn"

msgctxt "button"
msgid "Login"
msgstr "Logg inn"

msgid "%d attempt left"
msgid_plural "%d attempts left"
msgstr[0] "%d forsøk igjen"
msgstr[1] "%d forsøk igjen"
"#;

const ATTRIBUTES_NB: &str = r#"
msgid "Username"
msgstr "Brukernavn (attributt)"

msgid "Given name"
msgstr "Fornavn"
"#;

fn write_catalog(base: &Path, subtag: &str, domain: &str, text: &str) {
    let dir = base.join(subtag).join("LC_MESSAGES");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{domain}.catalog")), text).unwrap();
}

fn setup() -> (TempDir, DomainActivator, Arc<LocaleContext>) {
    let temp = TempDir::new().unwrap();
    let core = temp.path().join("locales");
    let module = temp.path().join("modules/attributes/locales");
    write_catalog(&core, "nb", "ssp", SSP_NB);
    write_catalog(&module, "nb", "attributes", ATTRIBUTES_NB);

    let context = Arc::new(LocaleContext::new());
    let config = L10nConfigInner {
        backend: BackendMode::CatalogLoaded,
        locale_dir: core,
        ..Default::default()
    };

    let mut activator = DomainActivator::builder()
        .config(config.into())
        .context(Arc::clone(&context))
        .language(&FixedLanguage::new("nb_NO"))
        .init()
        .expect("Default catalog should load");
    activator.register("attributes", module).unwrap();

    (temp, activator, context)
}

#[test]
fn test_default_domain_serves_lookups() {
    let (_temp, _activator, context) = setup();

    assert_eq!(context.gettext("Username"), "Brukernavn");
    assert_eq!(context.pgettext("button", "Login"), "Logg inn");
    assert_eq!(context.ngettext("%d attempt left", "%d attempts left", 3), "%d forsøk igjen");
    assert_eq!(context.gettext("Given name"), "Given name");
}

#[test]
fn test_switching_replaces_the_table() {
    let (_temp, mut activator, context) = setup();

    activator.activate("attributes").unwrap();
    assert_eq!(context.gettext("Username"), "Brukernavn (attributt)");
    assert_eq!(context.gettext("Given name"), "Fornavn");
    assert_eq!(context.pgettext("button", "Login"), "Login", "Tables are not layered");

    activator.restore_default().unwrap();
    assert_eq!(context.gettext("Username"), "Brukernavn");
    assert_eq!(context.gettext("Given name"), "Given name");
}

#[test]
fn test_missing_language_catalog_fails() {
    let (temp, mut activator, context) = setup();
    write_catalog(&temp.path().join("broken"), "nb", "broken", "msgid \"a\"\nmsgstr");
    activator.register("broken", temp.path().join("broken")).unwrap();
    activator.register("absent", temp.path().join("absent")).unwrap();

    let malformed = activator.activate("broken").unwrap_err();
    assert!(matches!(malformed, L10nError::CatalogLoad { .. }));

    let missing = activator.activate("absent").unwrap_err();
    assert!(matches!(missing, L10nError::CatalogLoad { .. }));

    assert_eq!(context.gettext("Username"), "Brukernavn");
}
