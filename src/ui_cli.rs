use std::io::{self, BufRead, Write};
use std::time::Instant;

use crate::app::AppError;
use crate::config::Config;
use crate::conversion;
use crate::format::DisplayValue;
use crate::i18n::{keys, Translator};
use crate::presenter::Presenter;
use crate::session::{resolve_target_unit, ConverterSession};
use crate::units::TemperatureUnit;
use crate::validation::ValidationError;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert,
    Settings,
    Exit,
}

/// 결과와 오류를 표준 출력에 한 줄씩 찍는 출력 포트.
pub struct ConsolePresenter<'a> {
    tr: &'a Translator,
}

impl<'a> ConsolePresenter<'a> {
    pub fn new(tr: &'a Translator) -> Self {
        Self { tr }
    }
}

impl Presenter for ConsolePresenter<'_> {
    fn show_error(&mut self, error: &ValidationError) {
        println!("{}: {}", self.tr.t(keys::ERROR_PREFIX), self.tr.error_message(error));
    }

    fn clear_error(&mut self) {}

    fn show_result(&mut self, result: &DisplayValue) {
        println!("{} {result}", self.tr.t(keys::CONVERT_RESULT));
    }

    // 터미널은 이미 찍은 줄을 지우지 않는다.
    fn hide_result(&mut self) {}
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_CONVERT));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    menu_choice_from(tr, &mut io::stdin().lock())
}

/// 올바른 번호가 나올 때까지 메뉴 번호를 읽는다. 입력이 끝나면(EOF) 종료로 본다.
fn menu_choice_from<R: BufRead>(tr: &Translator, input: &mut R) -> Result<MenuChoice, AppError> {
    loop {
        let sel = match read_line_from(input, tr.t(keys::PROMPT_MENU_SELECT)) {
            Ok(sel) => sel,
            Err(AppError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                println!();
                return Ok(MenuChoice::Exit);
            }
            Err(e) => return Err(e),
        };
        match sel.trim() {
            "1" => return Ok(MenuChoice::Convert),
            "2" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 온도 변환 메뉴를 처리한다. 단위를 먼저 고르고 값을 입력받는다.
pub fn handle_conversion(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CONVERT_HEADING));
    println!("{}", tr.t(keys::CONVERT_UNIT_OPTIONS));
    let mut presenter = ConsolePresenter::new(tr);
    let mut session = ConverterSession::new(cfg.default_units.from, cfg.default_units.to)
        .with_preview_delay(cfg.preview_delay());

    let from = read_unit(tr, keys::CONVERT_PROMPT_FROM_UNIT, session.from_unit())?;
    session.select_from_unit(from, &mut presenter);
    let to = read_unit(tr, keys::CONVERT_PROMPT_TO_UNIT, session.to_unit())?;
    session.select_to_unit(to, &mut presenter);
    if session.to_unit() != to {
        println!(
            "{} {}",
            tr.t(keys::CONVERT_TARGET_ADJUSTED),
            tr.unit_name(session.to_unit())
        );
    }

    let value = read_line(tr.t(keys::CONVERT_PROMPT_VALUE))?;
    session.set_input(value, Instant::now(), &mut presenter);
    session.submit(&mut presenter);
    Ok(())
}

/// 설정 메뉴를 처리한다. 바뀐 언어는 호출자가 번역기에 반영한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {} → {}",
        tr.t(keys::SETTINGS_CURRENT_UNITS),
        tr.unit_name(cfg.default_units.from),
        tr.unit_name(cfg.default_units.to)
    );
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "" => return Ok(()),
        "1" => {
            println!("{}", tr.t(keys::CONVERT_UNIT_OPTIONS));
            let from = read_unit(tr, keys::CONVERT_PROMPT_FROM_UNIT, cfg.default_units.from)?;
            let to = read_unit(tr, keys::CONVERT_PROMPT_TO_UNIT, cfg.default_units.to)?;
            cfg.default_units.from = from;
            cfg.default_units.to = resolve_target_unit(from, to);
        }
        "2" => {
            let lang = read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
            let lang = lang.trim().to_lowercase();
            if lang == "auto" || lang.starts_with("en") || lang.starts_with("ko") {
                cfg.language = lang;
            } else {
                println!("{}", tr.t(keys::SETTINGS_INVALID));
                return Ok(());
            }
        }
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    read_line_from(&mut io::stdin().lock(), prompt)
}

/// 프롬프트를 찍고 한 줄을 읽는다. 더 읽을 입력이 없으면 `UnexpectedEof`.
fn read_line_from<R: BufRead>(input: &mut R, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    if input.read_line(&mut buf).map_err(AppError::Io)? == 0 {
        return Err(AppError::Io(io::ErrorKind::UnexpectedEof.into()));
    }
    Ok(buf)
}

/// 단위를 번호(1~3) 또는 이름(C, fahrenheit, K …)으로 입력받는다. 엔터는 현재 값 유지.
fn read_unit(
    tr: &Translator,
    prompt_key: &str,
    current: TemperatureUnit,
) -> Result<TemperatureUnit, AppError> {
    let prompt = format!("{} [{}]", tr.t(prompt_key).trim_end(), tr.unit_name(current));
    loop {
        let sel = read_line(&format!("{prompt} "))?;
        match parse_unit_choice(sel.trim(), current) {
            Some(unit) => return Ok(unit),
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn parse_unit_choice(sel: &str, current: TemperatureUnit) -> Option<TemperatureUnit> {
    match sel {
        "" => Some(current),
        "1" => Some(TemperatureUnit::Celsius),
        "2" => Some(TemperatureUnit::Fahrenheit),
        "3" => Some(TemperatureUnit::Kelvin),
        other => conversion::parse_temperature_unit(other).ok(),
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor};

    use super::{menu_choice_from, parse_unit_choice, read_line_from, MenuChoice};
    use crate::app::AppError;
    use crate::i18n::Translator;
    use crate::units::TemperatureUnit;

    #[test]
    fn unit_choice_accepts_numbers_and_names() {
        let cur = TemperatureUnit::Kelvin;
        assert_eq!(parse_unit_choice("", cur), Some(TemperatureUnit::Kelvin));
        assert_eq!(parse_unit_choice("2", cur), Some(TemperatureUnit::Fahrenheit));
        assert_eq!(parse_unit_choice("°C", cur), Some(TemperatureUnit::Celsius));
        assert_eq!(parse_unit_choice("9", cur), None);
    }

    #[test]
    fn read_line_reports_end_of_input() {
        let mut input = Cursor::new("12\n");
        assert_eq!(read_line_from(&mut input, "> ").unwrap(), "12\n");
        match read_line_from(&mut input, "> ") {
            Err(AppError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("expected EOF error, got {other:?}"),
        }
    }

    #[test]
    fn menu_reads_selection() {
        let tr = Translator::new("en-us");
        let choice = menu_choice_from(&tr, &mut Cursor::new("x\n2\n")).unwrap();
        assert_eq!(choice, MenuChoice::Settings);
    }

    #[test]
    fn menu_exits_when_input_ends() {
        let tr = Translator::new("en-us");
        assert_eq!(menu_choice_from(&tr, &mut Cursor::new("")).unwrap(), MenuChoice::Exit);
        let choice = menu_choice_from(&tr, &mut Cursor::new("abc\n")).unwrap();
        assert_eq!(choice, MenuChoice::Exit);
    }
}
