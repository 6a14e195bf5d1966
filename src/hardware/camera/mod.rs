/// カメラモジュール
///
/// - AI-Thinker ESP32-CAM のキャプチャ設定テーブル
/// - esp32-camera ドライバへの橋渡し（"esp" フィーチャー）
pub mod config;
#[cfg(feature = "esp")]
pub mod controller;
pub mod driver_fields;
pub mod settings;

pub use config::CameraConfig;
pub use driver_fields::DriverFields;
#[cfg(feature = "esp")]
pub use controller::{CameraController, CameraError, FrameBuffer};
pub use settings::{
    FrameBufferLocation, FrameSize, GrabMode, JpegQuality, LedcChannel, LedcTimer, PixelFormat,
};
