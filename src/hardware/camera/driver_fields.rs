//! `camera_config_t` に書き込む整数値
//!
//! 構造体への代入は "esp" フィーチャーの `controller` が行う。
//! `pixel_format` / `frame_size` はドライバのバージョンで列挙値がずれるため
//! ここでは扱わず、`controller` で定数名から引く。

use crate::hardware::pins::SccbBus;

use super::config::CameraConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverFields {
    pub pin_pwdn: i32,
    pub pin_reset: i32,
    pub pin_xclk: i32,
    pub pin_sccb_sda: i32,
    pub pin_sccb_scl: i32,
    /// D0..D7 の順
    pub pin_data: [i32; 8],
    pub pin_vsync: i32,
    pub pin_href: i32,
    pub pin_pclk: i32,
    /// `SharedI2c` のときだけ設定する
    pub sccb_i2c_port: Option<i32>,
    pub xclk_freq_hz: i32,
    pub ledc_timer: u32,
    pub ledc_channel: u32,
    pub jpeg_quality: i32,
    pub fb_count: usize,
    pub fb_location: u32,
    pub grab_mode: u32,
}

impl From<&CameraConfig> for DriverFields {
    fn from(config: &CameraConfig) -> Self {
        let pins = &config.pins;
        let sccb_i2c_port = match pins.sccb {
            SccbBus::SharedI2c { port } => Some(port as i32),
            SccbBus::Pins { .. } => None,
        };

        Self {
            pin_pwdn: pins.pwdn.raw(),
            pin_reset: pins.reset.raw(),
            pin_xclk: pins.xclk.raw(),
            pin_sccb_sda: pins.sda().raw(),
            pin_sccb_scl: pins.scl().raw(),
            pin_data: pins.data.map(|pin| pin.raw()),
            pin_vsync: pins.vsync.raw(),
            pin_href: pins.href.raw(),
            pin_pclk: pins.pclk.raw(),
            sccb_i2c_port,
            // validate() 済みなら 40MHz 以下
            xclk_freq_hz: config.xclk_freq_hz.min(i32::MAX as u32) as i32,
            ledc_timer: config.ledc_timer.index(),
            ledc_channel: config.ledc_channel.index(),
            jpeg_quality: config.jpeg_quality.value() as i32,
            fb_count: config.fb_count,
            fb_location: config.fb_location.index(),
            grab_mode: config.grab_mode.index(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::camera::settings::{FrameBufferLocation, GrabMode, LedcChannel, LedcTimer};
    use crate::hardware::pins::AI_THINKER_PINS;

    #[test]
    fn ai_thinker_fields() {
        let fields = DriverFields::from(&CameraConfig::AI_THINKER);
        assert_eq!(fields.pin_pwdn, -1);
        assert_eq!(fields.pin_reset, 32);
        assert_eq!(fields.pin_xclk, 0);
        assert_eq!(fields.pin_sccb_sda, 26);
        assert_eq!(fields.pin_sccb_scl, 27);
        assert_eq!(fields.pin_data, [5, 18, 19, 21, 36, 39, 34, 35]);
        assert_eq!((fields.pin_vsync, fields.pin_href, fields.pin_pclk), (25, 23, 22));
        assert_eq!(fields.sccb_i2c_port, None);
        assert_eq!(fields.xclk_freq_hz, 20_000_000);
        assert_eq!((fields.ledc_timer, fields.ledc_channel), (0, 0));
        assert_eq!(fields.jpeg_quality, 12);
        assert_eq!(fields.fb_count, 1);
        assert_eq!(fields.fb_location, 0);
        assert_eq!(fields.grab_mode, 0);
    }

    #[test]
    fn shared_i2c_sets_port_and_clears_sccb_pins() {
        let config = CameraConfig::AI_THINKER
            .with_pins(AI_THINKER_PINS.with_sccb(SccbBus::SharedI2c { port: 1 }));
        let fields = DriverFields::from(&config);
        assert_eq!(fields.sccb_i2c_port, Some(1));
        assert_eq!(fields.pin_sccb_sda, -1);
        assert_eq!(fields.pin_sccb_scl, -1);
    }

    #[test]
    fn ledc_buffer_and_grab_settings_are_forwarded() {
        let config = CameraConfig::AI_THINKER
            .with_ledc(LedcTimer::Timer2, LedcChannel::Channel5)
            .with_fb_count(2)
            .with_fb_location(FrameBufferLocation::Dram)
            .with_grab_mode(GrabMode::Latest);
        let fields = DriverFields::from(&config);
        assert_eq!(fields.ledc_timer, 2);
        assert_eq!(fields.ledc_channel, 5);
        assert_eq!(fields.fb_count, 2);
        assert_eq!(fields.fb_location, 1);
        assert_eq!(fields.grab_mode, 1);
    }
}
