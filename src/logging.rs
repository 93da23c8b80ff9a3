use anyhow::Context;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use crate::constants::LOG_LEVEL_ENV;

// 環境変数の値からログレベルを決定（不正値はInfo）
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info)
}

// 標準出力へのロガーを初期化
pub fn init_logging() -> anyhow::Result<()> {
    let level = parse_level(std::env::var(LOG_LEVEL_ENV).ok().as_deref());

    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();

    TermLogger::init(level, config, TerminalMode::Stdout, ColorChoice::Auto)
        .context("ロガー初期化エラー")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parsing() {
        assert_eq!(parse_level(None), LevelFilter::Info);
        assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_level(Some(" WARN ")), LevelFilter::Warn);
        assert_eq!(parse_level(Some("off")), LevelFilter::Off);
        assert_eq!(parse_level(Some("loud")), LevelFilter::Info);
    }

    #[test]
    fn second_init_is_an_error() {
        // テストプロセス内で初期化するのはこのテストだけ
        let _ = init_logging();
        assert!(init_logging().is_err());
    }
}
