//! 사용자 입력 문자열을 검증해 온도 값으로 바꾼다.

use crate::units::TemperatureUnit;

/// 입력 검증 실패 사유. `Display` 결과가 그대로 사용자에게 보이는 메시지다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// 값이 비어 있음
    EmptyInput,
    /// 숫자로 해석할 수 없음
    NotANumber,
    /// 입력 단위 기준 절대영도보다 낮음
    BelowAbsoluteZero(TemperatureUnit),
}

impl ValidationError {
    /// 언어팩 조회용 키.
    pub fn message_key(&self) -> &'static str {
        match self {
            ValidationError::EmptyInput => "validation.empty_input",
            ValidationError::NotANumber => "validation.not_a_number",
            ValidationError::BelowAbsoluteZero(TemperatureUnit::Celsius) => {
                "validation.below_absolute_zero.celsius"
            }
            ValidationError::BelowAbsoluteZero(TemperatureUnit::Fahrenheit) => {
                "validation.below_absolute_zero.fahrenheit"
            }
            ValidationError::BelowAbsoluteZero(TemperatureUnit::Kelvin) => {
                "validation.below_absolute_zero.kelvin"
            }
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyInput => write!(f, "Please enter a temperature value."),
            ValidationError::NotANumber => write!(f, "Please enter a valid number."),
            ValidationError::BelowAbsoluteZero(TemperatureUnit::Kelvin) => {
                write!(f, "Kelvin cannot be negative (absolute zero is 0K).")
            }
            ValidationError::BelowAbsoluteZero(unit) => write!(
                f,
                "Temperature cannot be below absolute zero ({}{}).",
                unit.absolute_zero(),
                unit.symbol()
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// 검증 결과. 성공 시 해석된 값을 담는다.
pub type ValidationResult = Result<f64, ValidationError>;

/// 입력 문자열을 `from_unit` 기준으로 검증한다.
///
/// 앞뒤 공백은 무시한다. 숫자 해석은 선행 숫자 부분만 읽는 관대한 규칙을 따르므로
/// `"12abc"`는 12로 읽힌다. 무한대로 해석되는 값은 숫자가 아닌 것으로 본다.
pub fn validate(raw_input: &str, from_unit: TemperatureUnit) -> ValidationResult {
    let input = raw_input.trim();
    if input.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    let value = parse_leading_number(input)
        .filter(|v| v.is_finite())
        .ok_or(ValidationError::NotANumber)?;
    if value < from_unit.absolute_zero() {
        return Err(ValidationError::BelowAbsoluteZero(from_unit));
    }
    Ok(value)
}

/// 문자열 앞부분에서 `[+-]digits[.digits][e[+-]digits]` 형태를 최대한 길게 읽는다.
fn parse_leading_number(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let count_digits = |from: usize| {
        bytes
            .get(from..)
            .map(|rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
            .unwrap_or(0)
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let int_digits = count_digits(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(end + 1);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+') | Some(b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::parse_leading_number;

    #[test]
    fn leading_prefix_is_parsed() {
        assert_eq!(parse_leading_number("12abc"), Some(12.0));
        assert_eq!(parse_leading_number("-3.5°C"), Some(-3.5));
        assert_eq!(parse_leading_number(".5"), Some(0.5));
        assert_eq!(parse_leading_number("5."), Some(5.0));
        assert_eq!(parse_leading_number("1e3"), Some(1000.0));
        assert_eq!(parse_leading_number("1e"), Some(1.0));
        assert_eq!(parse_leading_number("2E-2x"), Some(0.02));
    }

    #[test]
    fn no_digits_is_rejected() {
        assert_eq!(parse_leading_number("abc"), None);
        assert_eq!(parse_leading_number("-"), None);
        assert_eq!(parse_leading_number("."), None);
        assert_eq!(parse_leading_number("Infinity"), None);
        assert_eq!(parse_leading_number("e5"), None);
    }
}
