//! 입력창 하나와 단위 선택 두 개로 이루어진 변환기 화면의 동작.
//!
//! 사용자 동작(변환 버튼/Enter, 타이핑, 단위 선택)을 받아 엔진을 호출하고 결과를
//! [`Presenter`]로 내보낸다. 시간은 호출자가 넘겨주므로 타이머 없이도 결정적으로
//! 테스트할 수 있다.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::conversion::convert_input;
use crate::presenter::Presenter;
use crate::units::TemperatureUnit;

/// 타이핑이 멈춘 뒤 미리보기를 갱신하기까지의 기본 대기 시간.
pub const DEFAULT_PREVIEW_DELAY: Duration = Duration::from_millis(500);

/// 변환기 화면의 상태.
#[derive(Debug, Clone)]
pub struct ConverterSession {
    input: String,
    from: TemperatureUnit,
    to: TemperatureUnit,
    error_visible: bool,
    preview_due: Option<Instant>,
    preview_delay: Duration,
}

impl ConverterSession {
    /// 입력/출력 단위로 세션을 만든다. 두 단위가 같으면 출력 단위를 다른 단위로 옮긴다.
    pub fn new(from: TemperatureUnit, to: TemperatureUnit) -> Self {
        Self {
            input: String::new(),
            from,
            to: resolve_target_unit(from, to),
            error_visible: false,
            preview_due: None,
            preview_delay: DEFAULT_PREVIEW_DELAY,
        }
    }

    pub fn with_preview_delay(mut self, delay: Duration) -> Self {
        self.preview_delay = delay;
        self
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn from_unit(&self) -> TemperatureUnit {
        self.from
    }

    pub fn to_unit(&self) -> TemperatureUnit {
        self.to
    }

    pub fn error_visible(&self) -> bool {
        self.error_visible
    }

    pub fn preview_pending(&self) -> bool {
        self.preview_due.is_some()
    }

    /// 변환 버튼 클릭 또는 Enter 입력.
    ///
    /// 검증에 실패하면 오류를 보이고 결과를 숨긴다. 성공하면 오류를 지우고 결과를 보인다.
    pub fn submit<P: Presenter>(&mut self, presenter: &mut P) {
        self.preview_due = None;
        match convert_input(&self.input, self.from, self.to) {
            Ok(result) => {
                debug!(input = %self.input.trim(), from = ?self.from, to = ?self.to, %result, "converted");
                self.clear_error(presenter);
                presenter.show_result(&result);
            }
            Err(err) => {
                debug!(input = %self.input.trim(), from = ?self.from, error = %err, "rejected input");
                presenter.show_error(&err);
                self.error_visible = true;
                presenter.hide_result();
            }
        }
    }

    /// 입력창 내용이 바뀌었을 때 호출한다.
    ///
    /// 보이던 오류는 바로 지우고, `now + 대기 시간`에 미리보기를 예약한다.
    /// 이전 예약은 취소된다.
    pub fn set_input<P: Presenter>(
        &mut self,
        text: impl Into<String>,
        now: Instant,
        presenter: &mut P,
    ) {
        self.input = text.into();
        if self.error_visible {
            self.clear_error(presenter);
        }
        self.preview_due = Some(now + self.preview_delay);
    }

    /// 예약된 미리보기 시각이 지났으면 실행한다. 실행했으면 `true`.
    ///
    /// 미리보기는 조용히 동작한다. 입력이 비었으면 결과를 숨기고, 잘못된 입력이면
    /// 아무것도 바꾸지 않는다.
    pub fn poll<P: Presenter>(&mut self, now: Instant, presenter: &mut P) -> bool {
        match self.preview_due {
            Some(due) if now >= due => self.preview_due = None,
            _ => return false,
        }
        let input = self.input.trim();
        if input.is_empty() {
            presenter.hide_result();
        } else if let Ok(result) = convert_input(input, self.from, self.to) {
            debug!(%input, %result, "preview");
            presenter.show_result(&result);
        }
        true
    }

    /// 예약된 미리보기까지 남은 시간.
    pub fn next_preview_in(&self, now: Instant) -> Option<Duration> {
        self.preview_due.map(|due| due.saturating_duration_since(now))
    }

    /// 입력 단위 선택. 입력이 있으면 바로 다시 변환한다.
    pub fn select_from_unit<P: Presenter>(&mut self, unit: TemperatureUnit, presenter: &mut P) {
        self.from = unit;
        self.rerun_if_filled(presenter);
    }

    /// 출력 단위 선택. 입력 단위와 같으면 다른 단위로 옮긴 뒤 변환한다.
    pub fn select_to_unit<P: Presenter>(&mut self, unit: TemperatureUnit, presenter: &mut P) {
        self.to = resolve_target_unit(self.from, unit);
        self.rerun_if_filled(presenter);
    }

    fn rerun_if_filled<P: Presenter>(&mut self, presenter: &mut P) {
        if !self.input.trim().is_empty() {
            self.submit(presenter);
        }
    }

    fn clear_error<P: Presenter>(&mut self, presenter: &mut P) {
        presenter.clear_error();
        self.error_visible = false;
    }
}

/// 출력 단위가 입력 단위와 같으면 선택 순서상 첫 번째 다른 단위를 돌려준다.
pub fn resolve_target_unit(from: TemperatureUnit, to: TemperatureUnit) -> TemperatureUnit {
    if from != to {
        return to;
    }
    TemperatureUnit::ALL
        .into_iter()
        .find(|unit| *unit != from)
        .unwrap_or(to)
}
