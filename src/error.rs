use std::path::PathBuf;
use thiserror::Error;

/// サムネイル生成で発生するエラー
///
/// どのバリアントも対象ファイルのパスを保持し、表示文字列に含める。
#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error("ファイルが存在しません: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("画像読み込みエラー: {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("無効な画像サイズ: {}: {reason}", path.display())]
    InvalidDimensions { path: PathBuf, reason: String },

    #[error("サムネイル書き出しエラー: {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, ThumbnailError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_path() {
        let err = ThumbnailError::FileNotFound {
            path: PathBuf::from("images/missing.png"),
        };
        assert!(err.to_string().contains("missing.png"));
    }

    #[test]
    fn invalid_dimensions_keeps_reason() {
        let err = ThumbnailError::InvalidDimensions {
            path: PathBuf::from("a.png"),
            reason: "幅または高さが0".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("a.png"));
        assert!(msg.contains("幅または高さが0"));
    }
}
