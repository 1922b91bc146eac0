use std::io::Write;

use tracing::info;

use crate::config::Config;
use crate::conversion;
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 콘솔 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 단위 이름 해석 오류
    Conversion(conversion::ConversionError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "I/O error: {e}"),
            AppError::Config(e) => write!(f, "{e}"),
            AppError::Conversion(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<conversion::ConversionError> for AppError {
    fn from(value: conversion::ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

/// 값 하나를 변환해 `out`에 쓴다. 단위를 생략하면 설정의 기본 단위를 쓴다.
///
/// 입력이 잘못되었으면 현지화된 오류 메시지를 `err`에 쓰고 `false`를 돌려준다.
/// 알 수 없는 단위 이름은 `AppError::Conversion`으로 올린다.
pub fn convert_once<W: Write, E: Write>(
    cfg: &Config,
    tr: &Translator,
    value: &str,
    from: Option<&str>,
    to: Option<&str>,
    out: &mut W,
    err: &mut E,
) -> Result<bool, AppError> {
    let from = match from {
        Some(name) => conversion::parse_temperature_unit(name)?,
        None => cfg.default_units.from,
    };
    let to = match to {
        Some(name) => conversion::parse_temperature_unit(name)?,
        None => cfg.default_units.to,
    };
    match conversion::convert_input(value, from, to) {
        Ok(result) => {
            writeln!(out, "{result}")?;
            Ok(true)
        }
        Err(e) => {
            writeln!(err, "{}: {}", tr.t(i18n::keys::ERROR_PREFIX), tr.error_message(&e))?;
            Ok(false)
        }
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &mut Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Convert => ui_cli::handle_conversion(tr, config)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
                let lang = i18n::resolve_language(&config.language, None);
                if lang != tr.language_code() {
                    info!(%lang, "language changed");
                    *tr = Translator::new_with_pack(&lang, config.language_pack_dir.as_deref());
                }
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
