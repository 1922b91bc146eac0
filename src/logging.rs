/// 로그 출력을 초기화한다.
///
/// `RUST_LOG` 환경 변수로 수준을 조절한다(예: `RUST_LOG=temperature_converter=debug`).
/// 지정하지 않으면 경고 이상만 출력한다. 로그는 stderr로 나가므로 CLI 결과 출력과 섞이지 않는다.
pub fn setup_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
    if let Err(e) = installed {
        // 전역 구독자는 한 번만 설치된다. 먼저 설치된 쪽을 그대로 쓴다.
        tracing::debug!(error = %e, "tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::setup_tracing;

    #[test]
    fn second_setup_keeps_first_subscriber() {
        setup_tracing();
        setup_tracing();
        tracing::debug!("still logging");
    }
}
