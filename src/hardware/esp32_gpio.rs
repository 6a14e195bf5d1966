//! ESP32 (無印) のGPIO特性テーブル
//!
//! GPIO20, 24, 28-31 はパッケージに存在しない。

pub const MAX_GPIO: u8 = 39;

/// SPIフラッシュ接続ピン（ESP32-WROOM/WROVER では使用不可）
pub const FLASH_PINS: std::ops::RangeInclusive<u8> = 6..=11;

/// 入力専用ピン
pub const INPUT_ONLY_PINS: std::ops::RangeInclusive<u8> = 34..=39;

/// リセット時にブートモードを決めるストラッピングピン
pub const STRAPPING_PINS: [u8; 5] = [0, 2, 5, 12, 15];

pub fn exists(pin: u8) -> bool {
    pin <= MAX_GPIO && !matches!(pin, 20 | 24 | 28..=31)
}

pub fn is_flash_pin(pin: u8) -> bool {
    FLASH_PINS.contains(&pin)
}

pub fn is_input_only(pin: u8) -> bool {
    INPUT_ONLY_PINS.contains(&pin)
}

pub fn is_strapping_pin(pin: u8) -> bool {
    STRAPPING_PINS.contains(&pin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaps_in_gpio_numbering_do_not_exist() {
        for pin in [20, 24, 28, 29, 30, 31, MAX_GPIO + 1, u8::MAX] {
            assert!(!exists(pin), "GPIO{} should not exist", pin);
        }
        for pin in [0, 19, 21, 23, 25, 27, 32, MAX_GPIO] {
            assert!(exists(pin), "GPIO{} should exist", pin);
        }
    }

    #[test]
    fn input_only_range_is_34_to_39() {
        assert!(!is_input_only(33));
        assert!(is_input_only(34));
        assert!(is_input_only(39));
    }
}
