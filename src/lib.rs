mod constants;
mod error;
mod image_utils;
mod logging;
mod thumbnail;
mod types;
mod commands;
mod config;

pub use commands::run_jobs::run_jobs;
pub use config::RunConfig;
pub use constants::THUMBNAIL_SIZE;
pub use error::ThumbnailError;
pub use thumbnail::{generate_thumbnail, resize_image};
pub use types::{JobManifest, JobOutcome, JobStatus, RunSummary, ThumbnailJob};

// ロガーと設定を準備する。どちらの失敗も致命的
fn start() -> anyhow::Result<RunConfig> {
    logging::init_logging()?;
    RunConfig::from_args(std::env::args().skip(1))
}

/// エントリポイント。個別画像の失敗では終了コードを変えない。
pub fn run() {
    let config = match start() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("起動エラー: {:#}", e);
            std::process::exit(1);
        }
    };

    run_jobs(&config.jobs);
}
