// サムネイル設定（カーソル用の固定サイズ）
pub const THUMBNAIL_SIZE: u32 = 32;

// 画像サイズ制限（DoS防止）
pub const MAX_IMAGE_DIMENSION: u32 = 65535;      // 最大辺長
pub const MAX_PIXEL_COUNT: u64 = 100_000_000;    // 最大ピクセル数（100メガピクセル）

// JPEG出力時の品質
pub const JPEG_QUALITY: u8 = 95;

// ログレベル指定用の環境変数
pub const LOG_LEVEL_ENV: &str = "THUMB_LOG";

// 既定のジョブ（入力, 出力）
pub const DEFAULT_JOBS: &[(&str, &str)] = &[
    (
        "images/cyberpunk-2077-chipware-cursor.png",
        "public/cursor_small.png",
    ),
    (
        "images/cyberpunk-2077-chipware-pointer.png",
        "public/pointer_small.png",
    ),
];
