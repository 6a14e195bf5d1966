/*!
 * # ESP32-CAM (AI-Thinker) Capture Configuration
 *
 * AI-Thinker ESP32-CAM のカメラ信号ピン配置とキャプチャパラメータを
 * 型付きで定義し、ボード上の制約と照合するためのライブラリ
 *
 * ## モジュール構成
 * - `core`: ビルド時設定 (cfg.toml) の読み込みと検証
 * - `hardware`: ピン配置、ESP32 GPIO特性、カメラ設定とドライバ
 */

pub mod core;
pub mod hardware;

pub use crate::core::{AppConfig, ConfigError, ValidationError};
pub use hardware::camera::CameraConfig;
#[cfg(feature = "esp")]
pub use hardware::camera::{CameraController, CameraError};
pub use hardware::{CameraPins, PinAssignment, PinRole, AI_THINKER_PINS};

/// ライブラリのバージョン情報
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
