use crate::format::{format_for_display, DisplayValue};
use crate::units::{convert_temperature, TemperatureUnit};
use crate::validation::{validate, ValidationError};

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    InvalidUnit(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::InvalidUnit(u) => write!(f, "unknown temperature unit: {u}"),
        }
    }
}

impl std::error::Error for ConversionError {}

impl std::str::FromStr for TemperatureUnit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_temperature_unit(s)
    }
}

/// 단위 문자열을 enum으로 변환한다. 대소문자를 구분하지 않는다.
///
/// 예: `C`, `celsius`, `°C`, `F`, `fahrenheit`, `K`, `kelvin`.
pub fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "c" | "celsius" | "°c" => Ok(TemperatureUnit::Celsius),
        "f" | "fahrenheit" | "°f" => Ok(TemperatureUnit::Fahrenheit),
        "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
        _ => Err(ConversionError::InvalidUnit(s.to_string())),
    }
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
pub fn convert_by_name(
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    let from = parse_temperature_unit(from_unit_str)?;
    let to = parse_temperature_unit(to_unit_str)?;
    Ok(convert_temperature(value, from, to))
}

/// 검증 → 변환 → 표시 형식화를 한 번에 수행한다. 첫 실패에서 멈춘다.
pub fn convert_input(
    raw_input: &str,
    from: TemperatureUnit,
    to: TemperatureUnit,
) -> Result<DisplayValue, ValidationError> {
    let value = validate(raw_input, from)?;
    Ok(format_for_display(convert_temperature(value, from, to), to))
}
