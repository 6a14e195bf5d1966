use std::fmt;

/// ピン割り当て
///
/// 未配線のラインは `Unused` とし、ドライバには `-1` として渡す。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinAssignment {
    Gpio(u8),
    Unused,
}

impl PinAssignment {
    /// ドライバ (`camera_config_t`) 用の整数表現
    pub const fn raw(self) -> i32 {
        match self {
            PinAssignment::Gpio(pin) => pin as i32,
            PinAssignment::Unused => -1,
        }
    }

    pub const fn gpio(self) -> Option<u8> {
        match self {
            PinAssignment::Gpio(pin) => Some(pin),
            PinAssignment::Unused => None,
        }
    }

    pub const fn is_unused(self) -> bool {
        matches!(self, PinAssignment::Unused)
    }
}

impl fmt::Display for PinAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinAssignment::Gpio(pin) => write!(f, "GPIO{}", pin),
            PinAssignment::Unused => write!(f, "未使用"),
        }
    }
}

/// カメラ信号の役割
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinRole {
    PowerDown,
    Reset,
    Xclk,
    SccbSda,
    SccbScl,
    D0,
    D1,
    D2,
    D3,
    D4,
    D5,
    D6,
    D7,
    Vsync,
    Href,
    Pclk,
}

impl PinRole {
    /// ESP32側から駆動するライン（出力可能なピンが必要）
    pub const fn is_driven_by_host(self) -> bool {
        matches!(
            self,
            PinRole::PowerDown | PinRole::Reset | PinRole::Xclk | PinRole::SccbSda | PinRole::SccbScl
        )
    }

    /// 未配線でも動作できるライン
    ///
    /// XCLK はセンサー側に発振器があるモジュールでは不要。
    pub const fn is_optional(self) -> bool {
        matches!(self, PinRole::PowerDown | PinRole::Reset | PinRole::Xclk)
    }

    pub const fn name(self) -> &'static str {
        match self {
            PinRole::PowerDown => "PWDN",
            PinRole::Reset => "RESET",
            PinRole::Xclk => "XCLK",
            PinRole::SccbSda => "SDA",
            PinRole::SccbScl => "SCL",
            PinRole::D0 => "D0",
            PinRole::D1 => "D1",
            PinRole::D2 => "D2",
            PinRole::D3 => "D3",
            PinRole::D4 => "D4",
            PinRole::D5 => "D5",
            PinRole::D6 => "D6",
            PinRole::D7 => "D7",
            PinRole::Vsync => "VSYNC",
            PinRole::Href => "HREF",
            PinRole::Pclk => "PCLK",
        }
    }
}

impl fmt::Display for PinRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// SCCB (カメラ制御バス) の接続方法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SccbBus {
    /// ドライバが専用にSCCBを初期化する
    Pins { sda: PinAssignment, scl: PinAssignment },
    /// 初期化済みのI2Cポートを共有する（SDAは -1 として渡す）
    SharedI2c { port: u8 },
}

/// カメラピン設定構造体
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraPins {
    pub pwdn: PinAssignment,
    pub reset: PinAssignment,
    pub xclk: PinAssignment,
    pub sccb: SccbBus,
    /// D0..D7 の順
    pub data: [PinAssignment; 8],
    pub vsync: PinAssignment,
    pub href: PinAssignment,
    pub pclk: PinAssignment,
}

const fn gpio(pin: u8) -> PinAssignment {
    PinAssignment::Gpio(pin)
}

/// AI-Thinker ESP32-CAM のピン配置
pub const AI_THINKER_PINS: CameraPins = CameraPins {
    pwdn: PinAssignment::Unused,
    reset: gpio(32),
    xclk: gpio(0),
    sccb: SccbBus::Pins {
        sda: gpio(26),
        scl: gpio(27),
    },
    data: [
        gpio(5),  // D0
        gpio(18), // D1
        gpio(19), // D2
        gpio(21), // D3
        gpio(36), // D4
        gpio(39), // D5
        gpio(34), // D6
        gpio(35), // D7
    ],
    vsync: gpio(25),
    href: gpio(23),
    pclk: gpio(22),
};

const DATA_ROLES: [PinRole; 8] = [
    PinRole::D0,
    PinRole::D1,
    PinRole::D2,
    PinRole::D3,
    PinRole::D4,
    PinRole::D5,
    PinRole::D6,
    PinRole::D7,
];

impl CameraPins {
    /// 全ての (役割, 割り当て) を固定順で列挙
    ///
    /// `SharedI2c` の場合 SDA/SCL は含まれない。
    pub fn assignments(&self) -> Vec<(PinRole, PinAssignment)> {
        let mut list = vec![
            (PinRole::PowerDown, self.pwdn),
            (PinRole::Reset, self.reset),
            (PinRole::Xclk, self.xclk),
        ];

        if let SccbBus::Pins { sda, scl } = self.sccb {
            list.push((PinRole::SccbSda, sda));
            list.push((PinRole::SccbScl, scl));
        }

        list.extend(DATA_ROLES.iter().copied().zip(self.data.iter().copied()));
        list.push((PinRole::Vsync, self.vsync));
        list.push((PinRole::Href, self.href));
        list.push((PinRole::Pclk, self.pclk));
        list
    }

    pub fn sda(&self) -> PinAssignment {
        match self.sccb {
            SccbBus::Pins { sda, .. } => sda,
            SccbBus::SharedI2c { .. } => PinAssignment::Unused,
        }
    }

    pub fn scl(&self) -> PinAssignment {
        match self.sccb {
            SccbBus::Pins { scl, .. } => scl,
            SccbBus::SharedI2c { .. } => PinAssignment::Unused,
        }
    }

    pub fn with_sccb(mut self, sccb: SccbBus) -> Self {
        self.sccb = sccb;
        self
    }

    pub fn with_pin(mut self, role: PinRole, assignment: PinAssignment) -> Self {
        match role {
            PinRole::PowerDown => self.pwdn = assignment,
            PinRole::Reset => self.reset = assignment,
            PinRole::Xclk => self.xclk = assignment,
            PinRole::SccbSda => {
                self.sccb = SccbBus::Pins {
                    sda: assignment,
                    scl: self.scl(),
                }
            }
            PinRole::SccbScl => {
                self.sccb = SccbBus::Pins {
                    sda: self.sda(),
                    scl: assignment,
                }
            }
            PinRole::D0 => self.data[0] = assignment,
            PinRole::D1 => self.data[1] = assignment,
            PinRole::D2 => self.data[2] = assignment,
            PinRole::D3 => self.data[3] = assignment,
            PinRole::D4 => self.data[4] = assignment,
            PinRole::D5 => self.data[5] = assignment,
            PinRole::D6 => self.data[6] = assignment,
            PinRole::D7 => self.data[7] = assignment,
            PinRole::Vsync => self.vsync = assignment,
            PinRole::Href => self.href = assignment,
            PinRole::Pclk => self.pclk = assignment,
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unused_pin_is_encoded_as_minus_one() {
        assert_eq!(PinAssignment::Unused.raw(), -1);
        assert_eq!(PinAssignment::Gpio(32).raw(), 32);
    }

    #[test]
    fn ai_thinker_assignments_cover_all_roles_in_order() {
        let list = AI_THINKER_PINS.assignments();
        assert_eq!(list.len(), 16);
        assert_eq!(list[0], (PinRole::PowerDown, PinAssignment::Unused));
        assert_eq!(list[3], (PinRole::SccbSda, PinAssignment::Gpio(26)));
        assert_eq!(list[12], (PinRole::D7, PinAssignment::Gpio(35)));
        assert_eq!(list[15], (PinRole::Pclk, PinAssignment::Gpio(22)));
    }

    #[test]
    fn shared_i2c_bus_drops_sccb_pins() {
        let pins = AI_THINKER_PINS.with_sccb(SccbBus::SharedI2c { port: 1 });
        assert_eq!(pins.assignments().len(), 14);
        assert_eq!(pins.sda().raw(), -1);
        assert_eq!(pins.scl().raw(), -1);
    }

    #[test]
    fn with_pin_replaces_single_role() {
        let pins = AI_THINKER_PINS.with_pin(PinRole::SccbScl, PinAssignment::Gpio(14));
        assert_eq!(pins.sda(), PinAssignment::Gpio(26));
        assert_eq!(pins.scl(), PinAssignment::Gpio(14));
        assert_eq!(pins.data, AI_THINKER_PINS.data);
    }
}
