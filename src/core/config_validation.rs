use std::collections::HashMap;

use crate::hardware::camera::settings::{
    FrameBufferLocation, FrameSize, JpegQuality, PixelFormat,
};
use crate::hardware::esp32_gpio;
use crate::hardware::pins::{CameraPins, PinAssignment, PinRole, SccbBus};

/// LEDC 1bit デューティで APB 80MHz から生成できる上限
pub const MAX_XCLK_FREQ_HZ: u32 = 40_000_000;

/// 内部DRAMに確保できるフレームバッファの合計上限（最大の連続空き領域の目安）
pub const MAX_DRAM_FRAME_BUFFER_BYTES: usize = 160 * 1024;

/// ESP32 が持つI2Cポート数
pub const I2C_PORT_COUNT: u8 = 2;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} が配線されていません")]
    RequiredPinUnused(PinRole),
    #[error("{role} に指定された GPIO{pin} は ESP32 に存在しません")]
    NoSuchGpio { role: PinRole, pin: u8 },
    #[error("{role} に指定された GPIO{pin} はSPIフラッシュ用です")]
    FlashPin { role: PinRole, pin: u8 },
    #[error("{role} は出力が必要ですが GPIO{pin} は入力専用です")]
    InputOnlyPin { role: PinRole, pin: u8 },
    #[error("GPIO{pin} が {first} と {second} に重複して割り当てられています")]
    DuplicatePin {
        pin: u8,
        first: PinRole,
        second: PinRole,
    },
    #[error("SCCB用I2Cポートが無効です (0-1): {0}")]
    InvalidI2cPort(u8),
    #[error("XCLK周波数が無効です (1-40000000 Hz): {0}")]
    InvalidXclkFrequency(u32),
    #[error("JPEG品質が無効です (0-63): {0}")]
    InvalidJpegQuality(u8),
    #[error("フレームバッファ数は1以上が必要です")]
    InvalidFrameBufferCount,
    #[error("フレームバッファを複数使う場合は JPEG が必要です ({fb_count}個, {format})")]
    MultipleBuffersRequireJpeg { fb_count: usize, format: PixelFormat },
    #[error(
        "{format} {size} のフレームバッファ {fb_count}個 ({required} bytes) はDRAMに収まりません (上限 {} bytes)",
        MAX_DRAM_FRAME_BUFFER_BYTES
    )]
    FrameBuffersTooLargeForDram {
        fb_count: usize,
        format: PixelFormat,
        size: FrameSize,
        required: usize,
    },
    #[error("未対応のフレームサイズ: {0}")]
    UnknownFrameSize(String),
    #[error("未対応のピクセルフォーマット: {0}")]
    UnknownPixelFormat(String),
    #[error("camera_warmup_frames の値が無効です (0-10): {0}")]
    InvalidCameraWarmupFrames(u8),
}

pub fn parse_frame_size(value: &str) -> Result<FrameSize, ValidationError> {
    FrameSize::from_name(value).ok_or_else(|| ValidationError::UnknownFrameSize(value.to_string()))
}

pub fn parse_pixel_format(value: &str) -> Result<PixelFormat, ValidationError> {
    PixelFormat::from_name(value)
        .ok_or_else(|| ValidationError::UnknownPixelFormat(value.to_string()))
}

pub fn parse_jpeg_quality(value: u8) -> Result<JpegQuality, ValidationError> {
    JpegQuality::new(value).ok_or(ValidationError::InvalidJpegQuality(value))
}

/// 255 はウォームアップなし
pub fn parse_camera_warmup_frames(value: u8) -> Result<Option<u8>, ValidationError> {
    match value {
        0..=10 => Ok(Some(value)),
        255 => Ok(None),
        _ => Err(ValidationError::InvalidCameraWarmupFrames(value)),
    }
}

/// ピン割り当てをボード上の制約と照合する
pub fn validate_pins(pins: &CameraPins) -> Result<(), ValidationError> {
    if let SccbBus::SharedI2c { port } = pins.sccb {
        if port >= I2C_PORT_COUNT {
            return Err(ValidationError::InvalidI2cPort(port));
        }
    }

    let mut used: HashMap<u8, PinRole> = HashMap::new();
    for (role, assignment) in pins.assignments() {
        let pin = match assignment {
            PinAssignment::Gpio(pin) => pin,
            PinAssignment::Unused if role.is_optional() => continue,
            PinAssignment::Unused => return Err(ValidationError::RequiredPinUnused(role)),
        };

        if !esp32_gpio::exists(pin) {
            return Err(ValidationError::NoSuchGpio { role, pin });
        }
        if esp32_gpio::is_flash_pin(pin) {
            return Err(ValidationError::FlashPin { role, pin });
        }
        if role.is_driven_by_host() && esp32_gpio::is_input_only(pin) {
            return Err(ValidationError::InputOnlyPin { role, pin });
        }
        if let Some(&first) = used.get(&pin) {
            return Err(ValidationError::DuplicatePin {
                pin,
                first,
                second: role,
            });
        }
        used.insert(pin, role);
    }

    Ok(())
}

pub fn validate_xclk_frequency(xclk_freq_hz: u32) -> Result<(), ValidationError> {
    if xclk_freq_hz == 0 || xclk_freq_hz > MAX_XCLK_FREQ_HZ {
        return Err(ValidationError::InvalidXclkFrequency(xclk_freq_hz));
    }
    Ok(())
}

pub fn validate_frame_buffers(
    fb_count: usize,
    format: PixelFormat,
    location: FrameBufferLocation,
    size: FrameSize,
) -> Result<(), ValidationError> {
    if fb_count == 0 {
        return Err(ValidationError::InvalidFrameBufferCount);
    }
    if fb_count > 1 && format != PixelFormat::Jpeg {
        return Err(ValidationError::MultipleBuffersRequireJpeg { fb_count, format });
    }
    if location == FrameBufferLocation::Dram {
        let required = fb_count.saturating_mul(format.frame_buffer_bytes(size));
        if required > MAX_DRAM_FRAME_BUFFER_BYTES {
            return Err(ValidationError::FrameBuffersTooLargeForDram {
                fb_count,
                format,
                size,
                required,
            });
        }
    }
    Ok(())
}

/// ストラッピングピンに割り当てられた役割の一覧
pub fn strapping_pins(pins: &CameraPins) -> Vec<(PinRole, u8)> {
    pins.assignments()
        .into_iter()
        .filter_map(|(role, assignment)| assignment.gpio().map(|pin| (role, pin)))
        .filter(|&(_, pin)| esp32_gpio::is_strapping_pin(pin))
        .collect()
}
