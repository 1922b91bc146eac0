use crate::units::TemperatureUnit;

/// 화면에 표시할 변환 결과. 값은 소수 둘째 자리로 반올림되어 있다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayValue {
    pub value: f64,
    pub symbol: &'static str,
}

impl std::fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.symbol)
    }
}

/// 값을 소수 둘째 자리로 반올림하고 단위 기호를 붙인다.
///
/// 100배 한 값에 `f64::round`(0.5는 0에서 멀어지는 쪽)를 적용한다. 경계값은
/// 98.765 → 98.77, -0.125 → -0.13 이 된다. 100배 한 결과가 경계 아래로 떨어지는
/// 값(1.005 → 100.4999…)은 내림된다. 100배 하면 넘치는 큰 값은 그대로 둔다.
/// -0 은 0 으로 정규화한다.
pub fn format_for_display(value: f64, unit: TemperatureUnit) -> DisplayValue {
    let scaled = value * 100.0;
    // 100배 하면 넘치는 크기의 값에는 반올림할 소수 자리가 없다.
    let rounded = if scaled.is_finite() {
        scaled.round() / 100.0
    } else {
        value
    };
    DisplayValue {
        value: if rounded == 0.0 { 0.0 } else { rounded },
        symbol: unit.symbol(),
    }
}
