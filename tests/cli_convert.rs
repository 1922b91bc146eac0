//! `convert` 하위 명령(한 번 변환) 출력 테스트.
use temperature_converter::app::{convert_once, AppError};
use temperature_converter::config::Config;
use temperature_converter::conversion::ConversionError;
use temperature_converter::i18n::Translator;

fn run(
    tr: &Translator,
    value: &str,
    from: Option<&str>,
    to: Option<&str>,
) -> (Result<bool, AppError>, String, String) {
    let cfg = Config::default();
    let mut out = Vec::new();
    let mut err = Vec::new();
    let ok = convert_once(&cfg, tr, value, from, to, &mut out, &mut err);
    (
        ok,
        String::from_utf8(out).expect("utf8 stdout"),
        String::from_utf8(err).expect("utf8 stderr"),
    )
}

#[test]
fn prints_converted_value() {
    let tr = Translator::new("en-us");
    let (ok, out, err) = run(&tr, "-40", Some("c"), Some("f"));
    assert!(ok.unwrap());
    assert_eq!(out, "-40 °F\n");
    assert!(err.is_empty());
}

#[test]
fn missing_units_fall_back_to_config_defaults() {
    let tr = Translator::new("en-us");
    let (ok, out, _) = run(&tr, " 100 ", None, None);
    assert!(ok.unwrap());
    assert_eq!(out, "212 °F\n");
}

#[test]
fn invalid_value_reports_localized_message() {
    let tr = Translator::new("en-us");
    let (ok, out, err) = run(&tr, "-1", Some("k"), Some("c"));
    assert!(!ok.unwrap());
    assert!(out.is_empty());
    assert_eq!(err, "Error: Kelvin cannot be negative (absolute zero is 0K).\n");

    let tr = Translator::new("ko-kr");
    let (ok, _, err) = run(&tr, "", Some("c"), Some("k"));
    assert!(!ok.unwrap());
    assert_eq!(err, "오류: 온도 값을 입력하세요.\n");
}

#[test]
fn unknown_unit_name_is_an_error() {
    let tr = Translator::new("en-us");
    let (result, out, err) = run(&tr, "10", Some("x"), Some("c"));
    match result {
        Err(AppError::Conversion(e)) => {
            assert_eq!(e, ConversionError::InvalidUnit("x".into()))
        }
        other => panic!("expected InvalidUnit, got {other:?}"),
    }
    assert!(out.is_empty() && err.is_empty());
}
