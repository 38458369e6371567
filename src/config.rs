//! Logical sensor configuration and its wire-level register encoding.
//!
//! The VEML7700 packs its measurement parameters into a 16-bit command
//! word (register `0x00`) and a separate power-saving word (register
//! `0x03`).  Packing is done with explicit shifts and masks so the bit
//! positions match the part regardless of platform.

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Sensitivity multiplier applied by the sensor's analog front end.
/// Occupies bits 11–12 of the command word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Gain {
    X1 = 0b00,
    X2 = 0b01,
    Eighth = 0b10,
    Quarter = 0b11,
}

impl Gain {
    /// The multiplier as a ratio relative to ×1.
    #[must_use]
    pub const fn ratio(self) -> f64 {
        match self {
            Self::X1 => 1.0,
            Self::X2 => 2.0,
            Self::Eighth => 0.125,
            Self::Quarter => 0.25,
        }
    }
}

/// Measurement window.  Longer windows give finer resolution but
/// saturate earlier.  Occupies bits 6–9 of the command word; only six
/// of the sixteen bit patterns are defined by the part.
#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum IntegrationTime {
    Ms25 = 0b1100,
    Ms50 = 0b1000,
    Ms100 = 0b0000,
    Ms200 = 0b0001,
    Ms400 = 0b0010,
    Ms800 = 0b0011,
}

impl IntegrationTime {
    #[must_use]
    pub const fn as_millis(self) -> u16 {
        match self {
            Self::Ms25 => 25,
            Self::Ms50 => 50,
            Self::Ms100 => 100,
            Self::Ms200 => 200,
            Self::Ms400 => 400,
            Self::Ms800 => 800,
        }
    }
}

/// Number of consecutive out-of-threshold samples required before the
/// interrupt condition is confirmed.  Bits 4–5 of the command word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Persistence {
    Samples1 = 0b00,
    Samples2 = 0b01,
    Samples4 = 0b10,
    Samples8 = 0b11,
}

/// Sleep inserted between measurement cycles when power saving is
/// enabled.  Bits 0–1 of the power-saving word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum PowerSavingMode {
    Ms500 = 0b00,
    Ms1000 = 0b01,
    Ms2000 = 0b10,
    Ms4000 = 0b11,
}

/// Everything the sensor needs to run a measurement session.  The
/// driver is a pure translator: it writes this record to the device
/// wholesale and never mutates it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Configuration {
    pub gain: Gain,
    pub integration_time: IntegrationTime,
    pub persistence: Persistence,
    pub interrupt_enable: bool,
    /// `true` shuts the device down, `false` wakes it.
    pub shutdown: bool,
    /// Raw count above which the interrupt condition triggers.
    pub threshold_high: u16,
    /// Raw count below which the interrupt condition triggers.
    pub threshold_low: u16,
    pub power_saving_mode: PowerSavingMode,
    pub power_saving_enable: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            gain: Gain::X1,
            integration_time: IntegrationTime::Ms100,
            persistence: Persistence::Samples1,
            interrupt_enable: false,
            shutdown: false,
            threshold_high: 0xFFFF,
            threshold_low: 0x0000,
            power_saving_mode: PowerSavingMode::Ms500,
            power_saving_enable: false,
        }
    }
}

impl Configuration {
    /// Packs the command word for the configuration register:
    /// gain in bits 11–12, integration time in bits 6–9, persistence in
    /// bits 4–5, interrupt enable in bit 1, shutdown in bit 0.
    ///
    /// Reserved bits stay zero.  No validation beyond the field widths:
    /// the part silently maps reserved patterns to the nearest defined
    /// behavior.
    #[must_use]
    pub fn command_word(&self) -> u16 {
        u16::from(u8::from(self.gain)) << 11
            | u16::from(u8::from(self.integration_time)) << 6
            | u16::from(u8::from(self.persistence)) << 4
            | u16::from(self.interrupt_enable) << 1
            | u16::from(self.shutdown)
    }

    /// Packs the power-saving register word: mode in bits 0–1, enable
    /// in bit 2.
    #[must_use]
    pub fn power_saving_word(&self) -> u16 {
        u16::from(self.power_saving_enable) << 2 | u16::from(u8::from(self.power_saving_mode))
    }
}

/// Snapshot of the interrupt-status register.  The register is
/// read-clear in hardware, so the flags are only valid for the instant
/// of the read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InterruptStatus {
    /// The reading crossed `threshold_low`.
    pub low: bool,
    /// The reading crossed `threshold_high`.
    pub high: bool,
}

impl InterruptStatus {
    /// Decodes the interrupt-status register: bit 14 is the
    /// high-threshold flag, bit 15 the low-threshold flag.
    #[must_use]
    pub const fn from_register(value: u16) -> Self {
        Self {
            low: value & (1 << 15) != 0,
            high: value & (1 << 14) != 0,
        }
    }
}
