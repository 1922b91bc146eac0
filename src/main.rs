use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use temperature_converter::{app, config, i18n, logging};
use tracing::debug;

/// 섭씨/화씨/켈빈 온도 변환기 (터미널).
#[derive(Debug, Parser)]
#[command(name = "temperature_converter_cli", version, about)]
struct Cli {
    /// 언어 코드 (auto, en-us, ko-kr)
    #[arg(long, short = 'L', global = true, default_value = "auto")]
    lang: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 값 하나를 변환해 출력한다.
    Convert {
        /// 변환할 온도 값
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// 입력 단위 (C, F, K). 생략하면 설정의 기본값
        #[arg(long, short)]
        from: Option<String>,
        /// 변환 단위 (C, F, K). 생략하면 설정의 기본값
        #[arg(long, short)]
        to: Option<String>,
    },
    /// 메뉴 방식으로 실행한다(기본).
    Interactive,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    logging::setup_tracing();
    let cli = Cli::parse();
    match try_run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<ExitCode, app::AppError> {
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    debug!(%lang, "language resolved");
    let mut tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());

    match cli.command {
        Some(Command::Convert { value, from, to }) => {
            let ok = app::convert_once(
                &cfg,
                &tr,
                &value,
                from.as_deref(),
                to.as_deref(),
                &mut io::stdout().lock(),
                &mut io::stderr().lock(),
            )?;
            Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Some(Command::Interactive) | None => {
            app::run(&mut cfg, &mut tr)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
