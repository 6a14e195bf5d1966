//! キャプチャパラメータの列挙型
//!
//! 名前は esp32-camera の `pixformat_t` / `framesize_t` の定数名に合わせている。

use std::fmt;

/// JPEG フレームバッファは 幅*高さ/5 バイトで確保される
pub const JPEG_FRAME_BUFFER_DIVISOR: usize = 5;

/// ピクセルフォーマット（OV2640 が出力できるもの）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb565,
    Yuv422,
    Grayscale,
    Jpeg,
}

impl PixelFormat {
    pub const ALL: [PixelFormat; 4] = [
        PixelFormat::Rgb565,
        PixelFormat::Yuv422,
        PixelFormat::Grayscale,
        PixelFormat::Jpeg,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            PixelFormat::Rgb565 => "RGB565",
            PixelFormat::Yuv422 => "YUV422",
            PixelFormat::Grayscale => "GRAYSCALE",
            PixelFormat::Jpeg => "JPEG",
        }
    }

    /// 非圧縮時の1ピクセルあたりのバイト数（JPEG は None）
    pub const fn bytes_per_pixel(self) -> Option<usize> {
        match self {
            PixelFormat::Rgb565 | PixelFormat::Yuv422 => Some(2),
            PixelFormat::Grayscale => Some(1),
            PixelFormat::Jpeg => None,
        }
    }

    /// ドライバが1フレームに確保するバッファのバイト数
    pub const fn frame_buffer_bytes(self, size: FrameSize) -> usize {
        match self.bytes_per_pixel() {
            Some(bpp) => bpp * size.pixel_count(),
            None => size.pixel_count() / JPEG_FRAME_BUFFER_DIVISOR,
        }
    }

    /// ドライバ名から変換（大文字小文字は区別しない）
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|format| format.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// 出力画像サイズ
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FrameSize {
    R96X96,
    QQVGA,
    QCIF,
    HQVGA,
    R240X240,
    QVGA,
    CIF,
    HVGA,
    VGA,
    SVGA,
    XGA,
    HD,
    SXGA,
    UXGA,
}

impl FrameSize {
    pub const ALL: [FrameSize; 14] = [
        FrameSize::R96X96,
        FrameSize::QQVGA,
        FrameSize::QCIF,
        FrameSize::HQVGA,
        FrameSize::R240X240,
        FrameSize::QVGA,
        FrameSize::CIF,
        FrameSize::HVGA,
        FrameSize::VGA,
        FrameSize::SVGA,
        FrameSize::XGA,
        FrameSize::HD,
        FrameSize::SXGA,
        FrameSize::UXGA,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            FrameSize::R96X96 => "96X96",
            FrameSize::QQVGA => "QQVGA",
            FrameSize::QCIF => "QCIF",
            FrameSize::HQVGA => "HQVGA",
            FrameSize::R240X240 => "240X240",
            FrameSize::QVGA => "QVGA",
            FrameSize::CIF => "CIF",
            FrameSize::HVGA => "HVGA",
            FrameSize::VGA => "VGA",
            FrameSize::SVGA => "SVGA",
            FrameSize::XGA => "XGA",
            FrameSize::HD => "HD",
            FrameSize::SXGA => "SXGA",
            FrameSize::UXGA => "UXGA",
        }
    }

    /// (幅, 高さ)
    pub const fn dimensions(self) -> (u16, u16) {
        match self {
            FrameSize::R96X96 => (96, 96),
            FrameSize::QQVGA => (160, 120),
            FrameSize::QCIF => (176, 144),
            FrameSize::HQVGA => (240, 176),
            FrameSize::R240X240 => (240, 240),
            FrameSize::QVGA => (320, 240),
            FrameSize::CIF => (400, 296),
            FrameSize::HVGA => (480, 320),
            FrameSize::VGA => (640, 480),
            FrameSize::SVGA => (800, 600),
            FrameSize::XGA => (1024, 768),
            FrameSize::HD => (1280, 720),
            FrameSize::SXGA => (1280, 1024),
            FrameSize::UXGA => (1600, 1200),
        }
    }

    pub const fn pixel_count(self) -> usize {
        let (width, height) = self.dimensions();
        width as usize * height as usize
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|size| size.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for FrameSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// JPEG品質 (0-63, 小さいほど高画質)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct JpegQuality(u8);

impl JpegQuality {
    pub const MAX: u8 = 63;

    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::MAX {
            Some(JpegQuality(value))
        } else {
            None
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

/// XCLK生成に使うLEDCタイマー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedcTimer {
    Timer0,
    Timer1,
    Timer2,
    Timer3,
}

impl LedcTimer {
    pub const fn index(self) -> u32 {
        self as u32
    }
}

/// XCLK生成に使うLEDCチャンネル
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedcChannel {
    Channel0,
    Channel1,
    Channel2,
    Channel3,
    Channel4,
    Channel5,
    Channel6,
    Channel7,
}

impl LedcChannel {
    pub const fn index(self) -> u32 {
        self as u32
    }
}

/// フレームバッファの確保先
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameBufferLocation {
    #[default]
    Psram,
    Dram,
}

impl FrameBufferLocation {
    /// `camera_fb_location_t` の値
    pub const fn index(self) -> u32 {
        self as u32
    }
}

/// フレームバッファを埋めるタイミング
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrabMode {
    /// バッファが空いたときだけ取り込む
    #[default]
    WhenEmpty,
    /// 常に最新フレームで上書きする
    Latest,
}

impl GrabMode {
    /// `camera_grab_mode_t` の値
    pub const fn index(self) -> u32 {
        self as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_size_parses_driver_names_case_insensitively() {
        assert_eq!(FrameSize::from_name("SVGA"), Some(FrameSize::SVGA));
        assert_eq!(FrameSize::from_name("uxga"), Some(FrameSize::UXGA));
        assert_eq!(FrameSize::from_name(" 96x96 "), Some(FrameSize::R96X96));
        assert_eq!(FrameSize::from_name("QSXGA"), None);
    }

    #[test]
    fn frame_sizes_are_ordered_by_resolution() {
        assert!(FrameSize::QVGA < FrameSize::SVGA);
        assert_eq!(FrameSize::SVGA.dimensions(), (800, 600));
        assert_eq!(FrameSize::UXGA.pixel_count(), 1600 * 1200);
    }

    #[test]
    fn display_uses_driver_names() {
        assert_eq!(FrameSize::R96X96.to_string(), "96X96");
        assert_eq!(PixelFormat::Rgb565.to_string(), "RGB565");
        assert_eq!(format!("{:<6}|", FrameSize::VGA), "VGA   |");
    }

    #[test]
    fn frame_buffer_bytes_per_format() {
        assert_eq!(PixelFormat::Rgb565.frame_buffer_bytes(FrameSize::QVGA), 153_600);
        assert_eq!(PixelFormat::Grayscale.frame_buffer_bytes(FrameSize::QVGA), 76_800);
        assert_eq!(PixelFormat::Jpeg.frame_buffer_bytes(FrameSize::UXGA), 384_000);
    }

    #[test]
    fn pixel_format_parses_names() {
        assert_eq!(PixelFormat::from_name("jpeg"), Some(PixelFormat::Jpeg));
        assert_eq!(PixelFormat::from_name("RGB565"), Some(PixelFormat::Rgb565));
        assert_eq!(PixelFormat::from_name("RAW"), None);
    }

    #[test]
    fn jpeg_quality_rejects_values_above_63() {
        assert_eq!(JpegQuality::new(0).map(JpegQuality::value), Some(0));
        assert_eq!(JpegQuality::new(63).map(JpegQuality::value), Some(63));
        assert!(JpegQuality::new(64).is_none());
    }

    #[test]
    fn ledc_indices_match_driver_enums() {
        assert_eq!(LedcTimer::Timer0.index(), 0);
        assert_eq!(LedcTimer::Timer3.index(), 3);
        assert_eq!(LedcChannel::Channel7.index(), 7);
        assert_eq!(FrameBufferLocation::Psram.index(), 0);
        assert_eq!(FrameBufferLocation::Dram.index(), 1);
        assert_eq!(GrabMode::WhenEmpty.index(), 0);
        assert_eq!(GrabMode::Latest.index(), 1);
    }
}
