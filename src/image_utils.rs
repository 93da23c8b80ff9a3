use std::borrow::Cow;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{ColorType, DynamicImage, ImageError, ImageFormat};
use crate::constants::{JPEG_QUALITY, MAX_IMAGE_DIMENSION, MAX_PIXEL_COUNT, THUMBNAIL_SIZE};

// 画像サイズ検証（DoS防止）
pub fn validate_dimensions(width: u32, height: u32) -> Result<(), String> {
    if width == 0 || height == 0 {
        return Err("幅または高さが0".to_string());
    }
    if width > MAX_IMAGE_DIMENSION || height > MAX_IMAGE_DIMENSION {
        return Err(format!(
            "画像サイズが大きすぎます: {}x{} (最大: {})",
            width, height, MAX_IMAGE_DIMENSION
        ));
    }
    let pixel_count = (width as u64) * (height as u64);
    if pixel_count > MAX_PIXEL_COUNT {
        return Err(format!(
            "ピクセル数が多すぎます: {} (最大: {})",
            pixel_count, MAX_PIXEL_COUNT
        ));
    }
    Ok(())
}

// 画像をサムネイルに変換（Lanczos3・縦横比は維持しない）
pub fn create_thumbnail(img: &DynamicImage) -> DynamicImage {
    img.resize_exact(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Lanczos3)
}

// 浮動小数点画像はEXR/HDR以外の形式では書き出せないので8bitに変換
fn to_encodable(img: &DynamicImage, format: ImageFormat) -> Cow<'_, DynamicImage> {
    match (format, img.color()) {
        (ImageFormat::OpenExr | ImageFormat::Hdr, _) => Cow::Borrowed(img),
        (_, ColorType::Rgb32F) => Cow::Owned(DynamicImage::ImageRgb8(img.to_rgb8())),
        (_, ColorType::Rgba32F) => Cow::Owned(DynamicImage::ImageRgba8(img.to_rgba8())),
        _ => Cow::Borrowed(img),
    }
}

// 出力先の拡張子から形式を決めて書き出す（エンコード成功後にのみファイルを作成）
pub fn save_thumbnail(img: &DynamicImage, output_path: &Path) -> Result<(), ImageError> {
    let format = ImageFormat::from_path(output_path)?;
    let mut buffer = Cursor::new(Vec::new());

    match format {
        ImageFormat::Jpeg => {
            // JPEGはアルファ非対応なのでRGBに変換
            let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
            let encoder = JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY);
            rgb.write_with_encoder(encoder)?;
        }
        _ => to_encodable(img, format).write_to(&mut buffer, format)?,
    }

    fs::write(output_path, buffer.into_inner())?;
    Ok(())
}
