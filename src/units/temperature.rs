use serde::{Deserialize, Serialize};

/// 온도 단위를 정의한다. 선택지는 닫힌 집합이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    /// 화면 선택 순서대로 나열한 전체 단위.
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    /// 결과 표시용 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => "K",
        }
    }

    /// 해당 단위로 표현한 절대영도. 이보다 낮은 값은 물리적으로 불가능하다.
    pub fn absolute_zero(self) -> f64 {
        match self {
            TemperatureUnit::Celsius => ABSOLUTE_ZERO_C,
            TemperatureUnit::Fahrenheit => ABSOLUTE_ZERO_F,
            TemperatureUnit::Kelvin => 0.0,
        }
    }

    /// 설정 파일/언어팩 키에 쓰는 소문자 이름.
    pub fn as_code(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
            TemperatureUnit::Kelvin => "kelvin",
        }
    }
}

const KELVIN_OFFSET: f64 = 273.15;
const ABSOLUTE_ZERO_C: f64 = -273.15;
const ABSOLUTE_ZERO_F: f64 = -459.67;

/// 주어진 값을 섭씨로 변환한다.
///
/// 배율은 나눗셈을 먼저 적용해 `f64::MAX` 근처에서도 중간값이 넘치지 않게 한다.
pub fn to_celsius(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => (value - 32.0) / 9.0 * 5.0,
        TemperatureUnit::Kelvin => value - KELVIN_OFFSET,
    }
}

/// 섭씨 값을 원하는 단위로 변환한다.
pub fn from_celsius(value_c: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value_c,
        TemperatureUnit::Fahrenheit => value_c / 5.0 * 9.0 + 32.0,
        TemperatureUnit::Kelvin => value_c + KELVIN_OFFSET,
    }
}

/// 온도를 서로 다른 단위로 변환한다. 섭씨를 중간 단위로 사용한다.
///
/// 같은 단위끼리는 값을 그대로 돌려준다(섭씨 경유 시 생기는 부동소수 오차 없음).
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    if from == to {
        return value;
    }
    from_celsius(to_celsius(value, from), to)
}
