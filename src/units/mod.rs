//! 단위 정의 및 변환 모듈 모음.

pub mod temperature;

pub use temperature::{convert_temperature, from_celsius, to_celsius, TemperatureUnit};
