mod image;

pub use self::image::load_source_image;

use std::path::Path;
use crate::error::{Result, ThumbnailError};
use crate::image_utils::{create_thumbnail, save_thumbnail};
use crate::types::{JobOutcome, ThumbnailJob};

/// 入力画像を読み込み、32x32に縮小して出力先に書き出す。
///
/// 出力形式は出力先の拡張子から決まる。親ディレクトリは作成しない。
pub fn generate_thumbnail(input_path: &Path, output_path: &Path) -> Result<()> {
    let img = load_source_image(input_path)?;
    let thumbnail = create_thumbnail(&img);

    save_thumbnail(&thumbnail, output_path).map_err(|source| ThumbnailError::Encode {
        path: output_path.to_path_buf(),
        source,
    })
}

/// 1ジョブを処理し、結果をログ出力する。失敗しても呼び出し元には伝播しない。
pub fn resize_image(job: &ThumbnailJob) -> JobOutcome {
    match generate_thumbnail(&job.input_path, &job.output_path) {
        Ok(()) => {
            let message = format!("サムネイル生成完了: {}", job.output_path.display());
            log::info!("{}", message);
            JobOutcome::generated(job, message)
        }
        Err(e) => {
            let message = format!("画像処理エラー: {}: {}", job.input_path.display(), e);
            log::error!("{}", message);
            JobOutcome::failed(job, message)
        }
    }
}
