use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{bail, Context};
use crate::constants::DEFAULT_JOBS;
use crate::types::{JobManifest, ThumbnailJob};

/// 実行設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub jobs: Vec<ThumbnailJob>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            jobs: DEFAULT_JOBS
                .iter()
                .map(|(input, output)| ThumbnailJob::new(*input, *output))
                .collect(),
        }
    }
}

impl RunConfig {
    /// 引数なしなら既定ジョブ、1つならジョブ定義ファイル（JSON）のパスとして扱う
    pub fn from_args<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();

        match args.as_slice() {
            [] => Ok(Self::default()),
            [manifest] => Self::from_manifest(Path::new(manifest)),
            _ => bail!("引数が多すぎます: 使い方: cursor-thumbnails [ジョブ定義.json]"),
        }
    }

    pub fn from_manifest(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("ジョブ定義の読み込みエラー: {}", path.display()))?;
        let manifest: JobManifest = serde_json::from_str(&content)
            .with_context(|| format!("JSON解析エラー: {}", path.display()))?;

        if manifest.jobs.is_empty() {
            bail!("ジョブが定義されていません: {}", path.display());
        }

        // 相対パスはジョブ定義ファイルの場所から解決
        let base = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            jobs: manifest
                .jobs
                .into_iter()
                .map(|job| job.resolve_against(&base))
                .collect(),
        })
    }
}
