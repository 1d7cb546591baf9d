use locus_domain::config::{BackendMode, L10nConfigInner};
use locus_domain::language::FixedLanguage;
use locus_kernel::language::ConfiguredLanguage;
use locus_l10n::{DomainActivator, LocaleContext};
use serial_test::serial;

#[test]
#[serial]
fn test_builder_defaults_to_global_context() {
    let global = LocaleContext::global();
    global.reset();

    let config = L10nConfigInner { backend: BackendMode::EnvironmentBound, ..Default::default() };
    let mut activator = DomainActivator::builder()
        .config(config.into())
        .language(&FixedLanguage::new("sv_SE"))
        .init()
        .unwrap();

    assert_eq!(global.process_locale().as_deref(), Some("sv_SE"));
    assert_eq!(global.selected_domain().as_deref(), Some("ssp"));

    activator.register("messages", "/app/locales").unwrap();
    activator.activate("messages").unwrap();
    assert_eq!(LocaleContext::global().selected_domain().as_deref(), Some("messages"));

    global.reset();
}

#[test]
#[serial]
fn test_configured_language_feeds_activator() {
    let global = LocaleContext::global();
    global.reset();

    let mut config = L10nConfigInner { backend: BackendMode::EnvironmentBound, ..Default::default() };
    config.language.language = Some("pt-br".to_owned());
    config.language.available = vec!["en".to_owned(), "pt-br".to_owned()];

    let resolver = ConfiguredLanguage::new(&config.language);
    let activator = DomainActivator::builder()
        .config(config.clone().into())
        .language(&resolver)
        .init()
        .unwrap();

    assert_eq!(activator.language(), "pt_BR");
    assert_eq!(global.process_locale().as_deref(), Some("pt_BR"));

    global.reset();
}

#[test]
#[serial]
fn test_language_defaults_to_configured_default() {
    let global = LocaleContext::global();
    global.reset();

    let mut config = L10nConfigInner { backend: BackendMode::EnvironmentBound, ..Default::default() };
    config.language.default = "nn_NO".to_owned();

    let activator = DomainActivator::builder().config(config.into()).init().unwrap();

    assert_eq!(activator.language(), "nn_NO");
    assert_eq!(global.process_locale().as_deref(), Some("nn_NO"));

    global.reset();
}
