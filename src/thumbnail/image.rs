use std::path::Path;
use image::{DynamicImage, GenericImageView};
use crate::error::{Result, ThumbnailError};
use crate::image_utils::validate_dimensions;

// 画像ファイルを読み込み、サイズを検証する
pub fn load_source_image(path: &Path) -> Result<DynamicImage> {
    if !path.exists() {
        return Err(ThumbnailError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let img = image::open(path).map_err(|source| ThumbnailError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let (width, height) = img.dimensions();
    validate_dimensions(width, height).map_err(|reason| ThumbnailError::InvalidDimensions {
        path: path.to_path_buf(),
        reason,
    })?;

    Ok(img)
}
