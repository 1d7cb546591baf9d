use locus_derive::locus_error;
use std::borrow::Cow;

#[locus_error]
pub enum SampleError {
    #[error("Lookup failed{}: {message}", format_context(.context))]
    Lookup { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Internal failure{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn not_found() -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::NotFound, "gone")
}

#[test]
fn locus_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/locus_error_pass.rs");
}

#[test]
fn context_is_rendered_in_display() {
    let result: Result<(), SampleError> =
        Err(SampleError::Lookup { message: "ssp".into(), context: None });

    let err = result.context("Activating domain").unwrap_err();
    assert_eq!(err.to_string(), "Lookup failed (Activating domain): ssp");
}

#[test]
fn display_without_context_has_no_suffix() {
    let err = SampleError::Lookup { message: "ssp".into(), context: None };
    assert_eq!(err.to_string(), "Lookup failed: ssp");
}

#[test]
fn source_errors_convert_with_and_without_context() {
    let plain: SampleError = not_found().into();
    assert!(matches!(plain, SampleError::Io { context: None, .. }));

    let result: Result<(), std::io::Error> = Err(not_found());
    let wrapped = result.context("Opening catalog").unwrap_err();
    assert!(matches!(wrapped, SampleError::Io { context: Some(ref c), .. } if c == "Opening catalog"));
    assert!(std::error::Error::source(&wrapped).is_some());
}

#[test]
fn internal_variant_accepts_strings() {
    let borrowed: SampleError = "static".into();
    let owned: SampleError = String::from("owned").into();

    assert!(matches!(borrowed, SampleError::Internal { ref message, .. } if message == "static"));
    assert!(matches!(owned, SampleError::Internal { ref message, .. } if message == "owned"));
}
