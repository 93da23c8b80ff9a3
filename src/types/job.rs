use std::path::{Path, PathBuf};
use serde::Deserialize;

// 入力画像と出力先の組
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ThumbnailJob {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl ThumbnailJob {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }

    // 相対パスを基準ディレクトリから解決
    pub fn resolve_against(self, base: &Path) -> Self {
        let resolve = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };
        Self {
            input_path: resolve(self.input_path),
            output_path: resolve(self.output_path),
        }
    }
}

// ジョブ定義ファイル形式
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobManifest {
    pub jobs: Vec<ThumbnailJob>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_manifest_json() {
        let json = r#"{
            "jobs": [
                { "input_path": "images/a.png", "output_path": "public/a_small.png" }
            ]
        }"#;
        let manifest: JobManifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.jobs, vec![ThumbnailJob::new("images/a.png", "public/a_small.png")]);
    }

    #[test]
    fn resolves_only_relative_paths() {
        let base = std::env::temp_dir();
        let absolute = base.join("abs.png");
        let job = ThumbnailJob::new("rel.png", absolute.clone()).resolve_against(&base);
        assert_eq!(job.input_path, base.join("rel.png"));
        assert_eq!(job.output_path, absolute);
    }
}
