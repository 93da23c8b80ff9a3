use std::path::{Path, PathBuf};
use super::ThumbnailJob;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Generated,
    Failed,
}

/// 1ジョブの処理結果
#[derive(Debug, Clone)]
pub struct JobOutcome {
    pub input_path: PathBuf,
    pub status: JobStatus,
    /// コンソールに出力したメッセージ
    pub message: String,
}

impl JobOutcome {
    pub fn generated(job: &ThumbnailJob, message: String) -> Self {
        Self {
            input_path: job.input_path.clone(),
            status: JobStatus::Generated,
            message,
        }
    }

    pub fn failed(job: &ThumbnailJob, message: String) -> Self {
        Self {
            input_path: job.input_path.clone(),
            status: JobStatus::Failed,
            message,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == JobStatus::Generated
    }
}

// 実行全体の集計
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub outcomes: Vec<JobOutcome>,
}

impl RunSummary {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    // 失敗したジョブの入力パス
    pub fn failed_inputs(&self) -> Vec<&Path> {
        self.outcomes
            .iter()
            .filter(|o| !o.is_success())
            .map(|o| o.input_path.as_path())
            .collect()
    }
}
