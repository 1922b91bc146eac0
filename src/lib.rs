//! 온도 변환/검증 로직을 라이브러리로 분리하여 CLI와 GUI가 함께 사용한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod format;
pub mod i18n;
pub mod logging;
pub mod presenter;
pub mod session;
pub mod ui_cli;
pub mod units;
pub mod validation;
