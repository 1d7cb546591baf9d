pub mod fixtures;

use fixtures::*;
use locus_l10n::L10nError;

#[test]
fn test_guard_restores_default_on_drop() {
    let (activator, context, _loader) = catalog_loaded("/locales", "nb_NO");
    let mut activator = activator.unwrap();
    activator.register("messages", "/app/locales").unwrap();

    {
        let scope = activator.activate_scoped("messages").unwrap();
        assert_eq!(scope.activator().active_domain().map(|d| d.as_str()), Some("messages"));
        assert_eq!(
            table_source(&context).as_deref(),
            Some("/app/locales/nb/LC_MESSAGES/messages.catalog")
        );
    }

    assert_eq!(activator.active_domain().map(|d| d.as_str()), Some("ssp"));
    assert_eq!(table_source(&context).as_deref(), Some("/locales/nb/LC_MESSAGES/ssp.catalog"));
}

#[test]
fn test_explicit_restore() {
    let (mut activator, context) = environment_bound("/locales", "en", true);
    activator.register("admin", "/modules/admin").unwrap();

    let scope = activator.activate_scoped("admin").unwrap();
    assert_eq!(context.selected_domain().as_deref(), Some("admin"));
    scope.restore().unwrap();

    assert_eq!(context.selected_domain().as_deref(), Some("ssp"));
}

#[test]
fn test_failed_activation_returns_no_guard() {
    let (mut activator, context) = environment_bound("/locales", "en", true);

    let result = activator.activate_scoped("unknown");

    assert!(matches!(result, Err(L10nError::UnboundDomain { .. })));
    assert_eq!(context.selected_domain().as_deref(), Some("ssp"));
}

#[test]
fn test_failed_restore_on_drop_keeps_scoped_domain() {
    let (activator, context, loader) = catalog_loaded("/locales", "en");
    let mut activator = activator.unwrap();
    activator.register("messages", "/app/locales").unwrap();

    let scope = activator.activate_scoped("messages").unwrap();
    loader.remove("/locales/en/LC_MESSAGES/ssp.catalog");
    drop(scope);

    assert_eq!(activator.active_domain().map(|d| d.as_str()), Some("messages"));
    assert_eq!(
        table_source(&context).as_deref(),
        Some("/app/locales/en/LC_MESSAGES/messages.catalog")
    );
}
