//! 온도 변환 공식 회귀 테스트.
use temperature_converter::conversion::{convert_by_name, ConversionError};
use temperature_converter::format::format_for_display;
use temperature_converter::units::{convert_temperature, TemperatureUnit};

use TemperatureUnit::{Celsius, Fahrenheit, Kelvin};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.12} got {actual:.12} (diff {diff:e}, tol {tol:e})"
    );
}

#[test]
fn reference_points() {
    assert_eq!(convert_temperature(0.0, Celsius, Fahrenheit), 32.0);
    assert_eq!(convert_temperature(100.0, Celsius, Fahrenheit), 212.0);
    assert_eq!(convert_temperature(0.0, Celsius, Kelvin), 273.15);
    assert_eq!(convert_temperature(-40.0, Celsius, Fahrenheit), -40.0);
    assert_close("212F->C", convert_temperature(212.0, Fahrenheit, Celsius), 100.0, 1e-12);
    assert_close("373.15K->F", convert_temperature(373.15, Kelvin, Fahrenheit), 212.0, 1e-9);
    assert_close("-459.67F->K", convert_temperature(-459.67, Fahrenheit, Kelvin), 0.0, 1e-9);
}

#[test]
fn same_unit_is_exact_identity() {
    // 섭씨를 거치면 오차가 생기는 값들
    for v in [0.1, 98.6, -273.15, 1.0e-7, 12_345.678_9, f64::MAX] {
        for unit in TemperatureUnit::ALL {
            assert_eq!(convert_temperature(v, unit, unit).to_bits(), v.to_bits());
        }
    }
}

#[test]
fn round_trip_between_all_pairs() {
    for v in [-273.15, -40.0, 0.0, 36.6, 98.6, 451.0, 1_000.0] {
        for a in TemperatureUnit::ALL {
            for b in TemperatureUnit::ALL {
                let back = convert_temperature(convert_temperature(v, a, b), b, a);
                assert_close(&format!("{v} {a:?}->{b:?}->{a:?}"), back, v, 1e-9);
            }
        }
    }
}

#[test]
fn unit_names_are_parsed_case_insensitively() {
    assert_eq!(convert_by_name(100.0, "C", "f").unwrap(), 212.0);
    assert_eq!(convert_by_name(0.0, "celsius", "KELVIN").unwrap(), 273.15);
    assert_eq!(convert_by_name(32.0, "°F", "°c").unwrap(), 0.0);
    assert_eq!("Kelvin".parse::<TemperatureUnit>().unwrap(), Kelvin);
}

#[test]
fn unknown_unit_name_is_rejected() {
    let err = convert_by_name(1.0, "rankine", "C").unwrap_err();
    assert_eq!(err, ConversionError::InvalidUnit("rankine".into()));
    assert!(err.to_string().contains("rankine"));
    assert!(convert_by_name(1.0, "C", "").is_err());
}

#[test]
fn display_rounds_half_away_from_zero() {
    let d = format_for_display(98.765, Fahrenheit);
    assert_eq!((d.value, d.symbol), (98.77, "°F"));
    assert_eq!(format_for_display(-0.125, Celsius).value, -0.13);
    assert_eq!(format_for_display(0.125, Celsius).value, 0.13);
    // 100배 값이 100.4999… 로 계산되어 내림된다
    assert_eq!(format_for_display(1.005, Celsius).value, 1.0);
    assert_eq!(format_for_display(97.880_000_000_000_01, Fahrenheit).value, 97.88);
}

#[test]
fn display_symbols_and_negative_zero() {
    assert_eq!(format_for_display(1.0, Celsius).symbol, "°C");
    assert_eq!(format_for_display(1.0, Fahrenheit).symbol, "°F");
    assert_eq!(format_for_display(1.0, Kelvin).symbol, "K");

    let d = format_for_display(-0.001, Celsius);
    assert!(d.value.is_sign_positive());
    assert_eq!(d.to_string(), "0 °C");
    assert_eq!(format_for_display(212.0, Fahrenheit).to_string(), "212 °F");
}

#[test]
fn huge_values_stay_finite() {
    // 100배 하면 넘치는 값은 반올림 없이 그대로 표시된다
    assert_eq!(format_for_display(1e307, Kelvin).value, 1e307);
    assert_eq!(format_for_display(f64::MAX, Celsius).value, f64::MAX);

    let c_to_k = temperature_converter::conversion::convert_input("1e307", Celsius, Kelvin).unwrap();
    assert_eq!(c_to_k.value, 1e307);
    assert_eq!(c_to_k.to_string(), format!("{} K", 1e307));

    // 배율 곱셈이 먼저였다면 중간값이 넘쳤을 범위
    let f = convert_temperature(9e307, Celsius, Fahrenheit);
    assert!(f.is_finite(), "9e307 C -> {f} F");
    assert_close("9e307C->F", f / 1.62e308, 1.0, 1e-12);
    assert!(convert_temperature(1.7e308, Fahrenheit, Celsius).is_finite());
}
