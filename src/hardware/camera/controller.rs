use std::marker::PhantomData;

use esp_idf_svc::sys::camera::{
    camera_config_t, camera_fb_t, esp_camera_deinit, esp_camera_fb_get, esp_camera_fb_return, esp_camera_init,
    framesize_t, framesize_t_FRAMESIZE_240X240, framesize_t_FRAMESIZE_96X96,
    framesize_t_FRAMESIZE_CIF, framesize_t_FRAMESIZE_HD, framesize_t_FRAMESIZE_HQVGA,
    framesize_t_FRAMESIZE_HVGA, framesize_t_FRAMESIZE_QCIF, framesize_t_FRAMESIZE_QQVGA,
    framesize_t_FRAMESIZE_QVGA, framesize_t_FRAMESIZE_SVGA, framesize_t_FRAMESIZE_SXGA,
    framesize_t_FRAMESIZE_UXGA, framesize_t_FRAMESIZE_VGA, framesize_t_FRAMESIZE_XGA,
    pixformat_t, pixformat_t_PIXFORMAT_GRAYSCALE, pixformat_t_PIXFORMAT_JPEG,
    pixformat_t_PIXFORMAT_RGB565, pixformat_t_PIXFORMAT_YUV422,
};
use esp_idf_svc::sys::{esp_err_t, ESP_OK};
use log::{info, warn};

use crate::core::config_validation::ValidationError;
use super::config::CameraConfig;
use super::driver_fields::DriverFields;
use super::settings::{FrameSize, PixelFormat};

#[derive(Debug, thiserror::Error)]
pub enum CameraError {
    #[error("カメラ設定が無効です: {0}")]
    InvalidConfig(#[from] ValidationError),
    #[error("カメラの初期化に失敗しました (esp_err_t: {0})")]
    InitFailed(esp_err_t),
    #[error("フレームの取得に失敗しました")]
    CaptureFailed,
}

fn pixel_format_to_sys(format: PixelFormat) -> pixformat_t {
    match format {
        PixelFormat::Rgb565 => pixformat_t_PIXFORMAT_RGB565,
        PixelFormat::Yuv422 => pixformat_t_PIXFORMAT_YUV422,
        PixelFormat::Grayscale => pixformat_t_PIXFORMAT_GRAYSCALE,
        PixelFormat::Jpeg => pixformat_t_PIXFORMAT_JPEG,
    }
}

fn frame_size_to_sys(size: FrameSize) -> framesize_t {
    match size {
        FrameSize::R96X96 => framesize_t_FRAMESIZE_96X96,
        FrameSize::QQVGA => framesize_t_FRAMESIZE_QQVGA,
        FrameSize::QCIF => framesize_t_FRAMESIZE_QCIF,
        FrameSize::HQVGA => framesize_t_FRAMESIZE_HQVGA,
        FrameSize::R240X240 => framesize_t_FRAMESIZE_240X240,
        FrameSize::QVGA => framesize_t_FRAMESIZE_QVGA,
        FrameSize::CIF => framesize_t_FRAMESIZE_CIF,
        FrameSize::HVGA => framesize_t_FRAMESIZE_HVGA,
        FrameSize::VGA => framesize_t_FRAMESIZE_VGA,
        FrameSize::SVGA => framesize_t_FRAMESIZE_SVGA,
        FrameSize::XGA => framesize_t_FRAMESIZE_XGA,
        FrameSize::HD => framesize_t_FRAMESIZE_HD,
        FrameSize::SXGA => framesize_t_FRAMESIZE_SXGA,
        FrameSize::UXGA => framesize_t_FRAMESIZE_UXGA,
    }
}

/// `CameraConfig` を esp32-camera の `camera_config_t` に変換
pub fn to_camera_config_t(config: &CameraConfig) -> camera_config_t {
    let fields = DriverFields::from(config);
    let mut raw = camera_config_t::default();

    raw.pin_pwdn = fields.pin_pwdn;
    raw.pin_reset = fields.pin_reset;
    raw.pin_xclk = fields.pin_xclk;
    raw.__bindgen_anon_1.pin_sccb_sda = fields.pin_sccb_sda;
    raw.__bindgen_anon_2.pin_sccb_scl = fields.pin_sccb_scl;
    if let Some(port) = fields.sccb_i2c_port {
        raw.sccb_i2c_port = port;
    }

    let [d0, d1, d2, d3, d4, d5, d6, d7] = fields.pin_data;
    raw.pin_d0 = d0;
    raw.pin_d1 = d1;
    raw.pin_d2 = d2;
    raw.pin_d3 = d3;
    raw.pin_d4 = d4;
    raw.pin_d5 = d5;
    raw.pin_d6 = d6;
    raw.pin_d7 = d7;
    raw.pin_vsync = fields.pin_vsync;
    raw.pin_href = fields.pin_href;
    raw.pin_pclk = fields.pin_pclk;

    raw.xclk_freq_hz = fields.xclk_freq_hz;
    raw.ledc_timer = fields.ledc_timer as _;
    raw.ledc_channel = fields.ledc_channel as _;

    raw.pixel_format = pixel_format_to_sys(config.pixel_format);
    raw.frame_size = frame_size_to_sys(config.frame_size);
    raw.jpeg_quality = fields.jpeg_quality;
    raw.fb_count = fields.fb_count as _;
    raw.fb_location = fields.fb_location as _;
    raw.grab_mode = fields.grab_mode as _;

    raw
}

/// 初期化済みのカメラドライバ
///
/// ドロップ時に `esp_camera_deinit` を呼ぶ。ドライバはグローバルなので
/// 同時に1つだけ存在させること。
pub struct CameraController {
    config: CameraConfig,
}

impl CameraController {
    pub fn new(config: CameraConfig) -> Result<Self, CameraError> {
        config.validate()?;

        for (role, pin) in config.strapping_pins() {
            warn!("{} がストラッピングピン GPIO{} に割り当てられています", role, pin);
        }

        let raw = to_camera_config_t(&config);
        let err = unsafe { esp_camera_init(&raw) };
        if err != ESP_OK {
            return Err(CameraError::InitFailed(err));
        }

        info!(
            "カメラ初期化完了: {} {} ({}x{}), 品質 {}, バッファ {}",
            config.pixel_format,
            config.frame_size,
            config.frame_size.dimensions().0,
            config.frame_size.dimensions().1,
            config.jpeg_quality.value(),
            config.fb_count
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// 1フレーム取得。返されたバッファはドロップ時にドライバへ戻る
    pub fn capture_image(&self) -> Result<FrameBuffer<'_>, CameraError> {
        let fb = unsafe { esp_camera_fb_get() };
        if fb.is_null() {
            return Err(CameraError::CaptureFailed);
        }
        Ok(FrameBuffer {
            fb,
            _camera: PhantomData,
        })
    }
}

impl Drop for CameraController {
    fn drop(&mut self) {
        let err = unsafe { esp_camera_deinit() };
        if err != ESP_OK {
            warn!("esp_camera_deinit に失敗しました: {}", err);
        }
    }
}

/// ドライバから借りているフレームバッファ
pub struct FrameBuffer<'a> {
    fb: *mut camera_fb_t,
    _camera: PhantomData<&'a CameraController>,
}

impl FrameBuffer<'_> {
    pub fn data(&self) -> &[u8] {
        unsafe {
            let fb = &*self.fb;
            std::slice::from_raw_parts(fb.buf, fb.len as usize)
        }
    }

    pub fn width(&self) -> usize {
        unsafe { (*self.fb).width as usize }
    }

    pub fn height(&self) -> usize {
        unsafe { (*self.fb).height as usize }
    }
}

impl Drop for FrameBuffer<'_> {
    fn drop(&mut self) {
        unsafe { esp_camera_fb_return(self.fb) };
    }
}
