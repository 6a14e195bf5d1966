/// ハードウェア制御モジュール
pub mod camera;
pub mod esp32_gpio;
pub mod pins;

pub use pins::{CameraPins, PinAssignment, PinRole, SccbBus, AI_THINKER_PINS};
