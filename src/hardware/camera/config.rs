//! カメラ設定レコード
//!
//! ピン割り当てとキャプチャパラメータをまとめた不変の設定。
//! `AI_THINKER` はボード固有の既定値で、実行時の上書きは `with_*` で
//! 新しい値を作って行う。

use crate::core::config_validation::{
    strapping_pins, validate_frame_buffers, validate_pins, validate_xclk_frequency,
    ValidationError,
};
use crate::hardware::pins::{CameraPins, PinRole, AI_THINKER_PINS};

use super::settings::{
    FrameBufferLocation, FrameSize, GrabMode, JpegQuality, LedcChannel, LedcTimer, PixelFormat,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraConfig {
    pub pins: CameraPins,
    /// XCLK周波数 (Hz)
    pub xclk_freq_hz: u32,
    pub ledc_timer: LedcTimer,
    pub ledc_channel: LedcChannel,
    pub pixel_format: PixelFormat,
    pub frame_size: FrameSize,
    pub jpeg_quality: JpegQuality,
    /// 2以上にすると連続取り込みになる（JPEGのみ）
    pub fb_count: usize,
    pub fb_location: FrameBufferLocation,
    pub grab_mode: GrabMode,
}

const DEFAULT_JPEG_QUALITY: JpegQuality = match JpegQuality::new(12) {
    Some(quality) => quality,
    None => panic!("JPEG quality out of range"),
};

impl CameraConfig {
    /// AI-Thinker ESP32-CAM (OV2640) の既定設定
    pub const AI_THINKER: CameraConfig = CameraConfig {
        pins: AI_THINKER_PINS,
        xclk_freq_hz: 20_000_000,
        ledc_timer: LedcTimer::Timer0,
        ledc_channel: LedcChannel::Channel0,
        pixel_format: PixelFormat::Jpeg,
        frame_size: FrameSize::SVGA,
        jpeg_quality: DEFAULT_JPEG_QUALITY,
        fb_count: 1,
        fb_location: FrameBufferLocation::Psram,
        grab_mode: GrabMode::WhenEmpty,
    };

    pub fn with_pins(mut self, pins: CameraPins) -> Self {
        self.pins = pins;
        self
    }

    pub fn with_xclk_freq_hz(mut self, xclk_freq_hz: u32) -> Self {
        self.xclk_freq_hz = xclk_freq_hz;
        self
    }

    pub fn with_ledc(mut self, timer: LedcTimer, channel: LedcChannel) -> Self {
        self.ledc_timer = timer;
        self.ledc_channel = channel;
        self
    }

    pub fn with_pixel_format(mut self, pixel_format: PixelFormat) -> Self {
        self.pixel_format = pixel_format;
        self
    }

    pub fn with_frame_size(mut self, frame_size: FrameSize) -> Self {
        self.frame_size = frame_size;
        self
    }

    pub fn with_jpeg_quality(mut self, jpeg_quality: JpegQuality) -> Self {
        self.jpeg_quality = jpeg_quality;
        self
    }

    pub fn with_fb_count(mut self, fb_count: usize) -> Self {
        self.fb_count = fb_count;
        self
    }

    pub fn with_fb_location(mut self, fb_location: FrameBufferLocation) -> Self {
        self.fb_location = fb_location;
        self
    }

    pub fn with_grab_mode(mut self, grab_mode: GrabMode) -> Self {
        self.grab_mode = grab_mode;
        self
    }

    /// ボードとドライバの制約を検証し、最初に見つかった違反を返す
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_pins(&self.pins)?;
        if !self.pins.xclk.is_unused() {
            validate_xclk_frequency(self.xclk_freq_hz)?;
        }
        validate_frame_buffers(
            self.fb_count,
            self.pixel_format,
            self.fb_location,
            self.frame_size,
        )
    }

    /// ストラッピングピンを使っている役割（起動時の警告用）
    pub fn strapping_pins(&self) -> Vec<(PinRole, u8)> {
        strapping_pins(&self.pins)
    }

    /// ドライバが確保するフレームバッファの合計バイト数
    pub fn frame_buffer_bytes(&self) -> usize {
        self.fb_count
            .saturating_mul(self.pixel_format.frame_buffer_bytes(self.frame_size))
    }

    /// 非圧縮時の1フレームのバイト数（JPEG は None）
    pub fn raw_frame_bytes(&self) -> Option<usize> {
        self.pixel_format
            .bytes_per_pixel()
            .map(|bpp| bpp * self.frame_size.pixel_count())
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self::AI_THINKER
    }
}
