#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use clap::Parser;
use eframe::{egui, App, Frame};
use image::GenericImageView;
use std::{fs, path::Path, time::Instant};
use temperature_converter::{
    config,
    i18n::{self, keys, Language},
    logging,
    presenter::ViewState,
    session::ConverterSession,
    units::TemperatureUnit,
};
use tracing::{debug, info, warn};

/// 섭씨/화씨/켈빈 온도 변환기 (데스크톱).
#[derive(Debug, Parser)]
#[command(name = "temperature_converter", version, about)]
struct Args {
    /// 언어 코드 (auto, en-us, ko-kr)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
}

fn main() -> Result<(), eframe::Error> {
    logging::setup_tracing();
    let args = Args::parse();

    let app_cfg = config::load_or_default().unwrap_or_else(|e| {
        warn!(error = %e, "config load failed, using defaults");
        config::Config::default()
    });
    let lang = i18n::resolve_language(&args.lang, Some(app_cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, app_cfg.language_pack_dir.as_deref());
    info!(%lang, "GUI language resolved");
    let title = tr.t(keys::GUI_TITLE).to_string();

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([380.0, 320.0])
        .with_min_inner_size([320.0, 280.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            if tr.language() == Language::Ko {
                if let Err(e) = setup_fonts(&cc.egui_ctx) {
                    warn!("{e}");
                }
            }
            Box::new(GuiApp::new(&app_cfg, tr))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 한글 글리프가 있는 폰트를 찾아 기본 폰트 뒤에 폴백으로 등록한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates = vec![
        Path::new("assets/fonts/NanumGothic.ttf").to_path_buf(),
        Path::new("assets/fonts/malgun.ttf").to_path_buf(),
        Path::new("/usr/share/fonts/truetype/nanum/NanumGothic.ttf").to_path_buf(),
        Path::new("/System/Library/Fonts/AppleSDGothicNeo.ttc").to_path_buf(),
    ];
    if let Some(windir) = std::env::var_os("WINDIR") {
        candidates.push(Path::new(&windir).join("Fonts").join("malgun.ttf"));
    }
    for p in candidates {
        if p.exists() {
            let bytes = fs::read(&p)
                .map_err(|e| format!("Failed to read font file ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            debug!(path = %p.display(), "font loaded");
            return Ok(());
        }
    }
    Err("Korean font not found; Hangul text may not render.".into())
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(name.to_owned(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts.families.entry(family).or_default().push(name.to_owned());
    }
    ctx.set_fonts(fonts);
}

struct GuiApp {
    tr: i18n::Translator,
    session: ConverterSession,
    view: ViewState,
    focus_requested: bool,
}

impl GuiApp {
    fn new(cfg: &config::Config, tr: i18n::Translator) -> Self {
        Self {
            tr,
            session: ConverterSession::new(cfg.default_units.from, cfg.default_units.to)
                .with_preview_delay(cfg.preview_delay()),
            view: ViewState::default(),
            focus_requested: false,
        }
    }

    fn unit_label(&self, unit: TemperatureUnit) -> String {
        format!("{} ({})", self.tr.unit_name(unit), unit.symbol())
    }

    fn ui_converter(&mut self, ui: &mut egui::Ui, now: Instant) {
        ui.label(self.tr.t(keys::GUI_INPUT_LABEL));
        let mut text = self.session.input().to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut text)
                .hint_text(self.tr.t(keys::GUI_INPUT_HINT))
                .desired_width(f32::INFINITY),
        );
        if !self.focus_requested {
            response.request_focus();
            self.focus_requested = true;
        }
        if response.changed() {
            self.session.set_input(text, now, &mut self.view);
        }
        let enter_pressed = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        ui.add_space(8.0);

        let labels: Vec<(TemperatureUnit, String)> = TemperatureUnit::ALL
            .iter()
            .map(|unit| (*unit, self.unit_label(*unit)))
            .collect();
        let mut from = self.session.from_unit();
        let mut to = self.session.to_unit();
        let mut from_changed = false;
        let mut to_changed = false;
        let from_title = self.tr.t(keys::GUI_FROM);
        let to_title = self.tr.t(keys::GUI_TO);
        ui.columns(2, |cols| {
            cols[0].strong(from_title);
            for (unit, label) in &labels {
                from_changed |= cols[0].radio_value(&mut from, *unit, label.as_str()).changed();
            }
            cols[1].strong(to_title);
            for (unit, label) in &labels {
                to_changed |= cols[1].radio_value(&mut to, *unit, label.as_str()).changed();
            }
        });
        if from_changed {
            self.session.select_from_unit(from, &mut self.view);
        }
        if to_changed {
            self.session.select_to_unit(to, &mut self.view);
        }
        ui.add_space(8.0);

        let clicked = ui.button(self.tr.t(keys::GUI_CONVERT_BUTTON)).clicked();
        if clicked || enter_pressed {
            self.session.submit(&mut self.view);
            response.request_focus();
        }
        self.session.poll(now, &mut self.view);

        ui.separator();
        if let Some(err) = self.view.error {
            ui.colored_label(egui::Color32::from_rgb(200, 40, 40), self.tr.error_message(&err));
        }
        if let Some(result) = self.view.result {
            ui.label(self.tr.t(keys::GUI_RESULT_LABEL));
            ui.heading(format!("{} {}", result.value, result.symbol));
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let now = Instant::now();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.tr.t(keys::GUI_TITLE));
            ui.separator();
            self.ui_converter(ui, now);
        });
        // 미리보기 예약 시각에 맞춰 다시 그린다.
        if let Some(wait) = self.session.next_preview_in(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
