//! 변환 결과를 화면에 반영하는 출력 포트.
//!
//! 세션은 이 트레이트만 알고, CLI/GUI가 각자 구현체를 제공한다.

use crate::format::DisplayValue;
use crate::validation::ValidationError;

/// 세션이 결과와 오류 메시지를 내보내는 출력 포트.
pub trait Presenter {
    /// 오류 메시지를 보인다.
    fn show_error(&mut self, error: &ValidationError);
    /// 표시 중인 오류 메시지를 지운다.
    fn clear_error(&mut self);
    /// 변환 결과를 보인다.
    fn show_result(&mut self, result: &DisplayValue);
    /// 결과 영역을 숨긴다.
    fn hide_result(&mut self);
}

/// 화면에 보여야 할 상태만 들고 있는 구현체. 즉시 모드 GUI가 매 프레임 읽어 그린다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub result: Option<DisplayValue>,
    pub error: Option<ValidationError>,
}

impl Presenter for ViewState {
    fn show_error(&mut self, error: &ValidationError) {
        self.error = Some(*error);
    }

    fn clear_error(&mut self) {
        self.error = None;
    }

    fn show_result(&mut self, result: &DisplayValue) {
        self.result = Some(*result);
    }

    fn hide_result(&mut self) {
        self.result = None;
    }
}
