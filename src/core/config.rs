use crate::core::config_validation::{
    parse_camera_warmup_frames, parse_frame_size, parse_jpeg_quality, parse_pixel_format,
    ValidationError,
};
use crate::hardware::camera::settings::{FrameBufferLocation, GrabMode};
use crate::hardware::camera::CameraConfig;

/// アプリケーション設定
///
/// この構造体はビルド時に`cfg.toml`ファイルから読み込まれた設定を保持します。
/// 値は AI-Thinker の既定テーブルを上書きする。
#[toml_cfg::toml_config]
pub struct Config {
    #[default("SVGA")]
    frame_size: &'static str,

    #[default("JPEG")]
    pixel_format: &'static str,

    #[default(12)] // 0-63, 小さいほど高画質
    jpeg_quality: u8,

    #[default(1)]
    fb_count: usize,

    #[default(20_000_000)]
    xclk_freq_hz: u32,

    #[default(true)]
    fb_in_psram: bool,

    #[default(false)]
    grab_latest: bool,

    #[default(255)] // 255 = ウォームアップなし
    camera_warmup_frames: u8,

    #[default(true)]
    capture_test_frame: bool,
}

/// 設定エラー
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("設定値が無効です: {0}")]
    Invalid(#[from] ValidationError),
}

/// アプリケーション設定を表す構造体
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 検証済みのカメラ設定
    pub camera: CameraConfig,

    /// 本番キャプチャ前に捨てるフレーム数
    pub camera_warmup_frames: Option<u8>,

    /// 起動時に1枚撮影して結果をログに出す
    pub capture_test_frame: bool,
}

impl AppConfig {
    /// 設定ファイルから設定をロードします
    pub fn load() -> Result<Self, ConfigError> {
        // toml_cfg によって生成された定数
        Self::from_config(&CONFIG)
    }

    fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let fb_location = if config.fb_in_psram {
            FrameBufferLocation::Psram
        } else {
            FrameBufferLocation::Dram
        };
        let grab_mode = if config.grab_latest {
            GrabMode::Latest
        } else {
            GrabMode::WhenEmpty
        };

        let camera = CameraConfig::AI_THINKER
            .with_frame_size(parse_frame_size(config.frame_size)?)
            .with_pixel_format(parse_pixel_format(config.pixel_format)?)
            .with_jpeg_quality(parse_jpeg_quality(config.jpeg_quality)?)
            .with_fb_count(config.fb_count)
            .with_xclk_freq_hz(config.xclk_freq_hz)
            .with_fb_location(fb_location)
            .with_grab_mode(grab_mode);
        camera.validate()?;

        let camera_warmup_frames = parse_camera_warmup_frames(config.camera_warmup_frames)?;

        Ok(AppConfig {
            camera,
            camera_warmup_frames,
            capture_test_frame: config.capture_test_frame,
        })
    }
}
