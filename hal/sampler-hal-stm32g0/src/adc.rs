//! ADC1 registers
//!
//! STM32G0 has a single 12-bit SAR ADC with up to 19 external and internal
//! channels:
//! - ADC_IN0..ADC_IN7: PA0..PA7
//! - ADC_IN8..ADC_IN11, ADC_IN15..ADC_IN18: port B and C pins
//! - ADC_IN12..ADC_IN14: temperature sensor, VREFINT and VBAT

use sampler_hal::{Field, Register};

/// ADC1 base address
pub const ADC_BASE: u32 = 0x4001_2400;

/// Interrupt and status register
pub const ISR: Register = Register::at("ADC_ISR", ADC_BASE, 0x00);
/// Interrupt enable register
pub const IER: Register = Register::at("ADC_IER", ADC_BASE, 0x04);
/// Control register
pub const CR: Register = Register::at("ADC_CR", ADC_BASE, 0x08);
/// Configuration register 1
pub const CFGR1: Register = Register::at("ADC_CFGR1", ADC_BASE, 0x0C);
/// Configuration register 2
pub const CFGR2: Register = Register::at("ADC_CFGR2", ADC_BASE, 0x10);
/// Sampling time register
pub const SMPR: Register = Register::at("ADC_SMPR", ADC_BASE, 0x14);
/// Channel selection register
pub const CHSELR: Register = Register::at("ADC_CHSELR", ADC_BASE, 0x28);
/// Data register
pub const DR: Register = Register::at("ADC_DR", ADC_BASE, 0x40);

/// Highest channel number selectable in CHSELR (sequencer not fully configurable mode)
pub const MAX_CHANNEL: u8 = 18;

/// Highest channel wired to a port A pin
pub const MAX_GPIOA_CHANNEL: u8 = 7;

/// Full scale of a 12-bit right-aligned conversion
pub const MAX_SAMPLE: u16 = 4095;

/// ADC_ISR fields
pub mod isr {
    use super::Field;

    /// ADC ready
    pub const ADRDY: Field = Field::bit(0);
    /// End of sampling
    pub const EOSMP: Field = Field::bit(1);
    /// End of conversion
    pub const EOC: Field = Field::bit(2);
    /// End of sequence
    pub const EOS: Field = Field::bit(3);
}

/// ADC_CR fields
pub mod cr {
    use super::Field;

    /// ADC enable
    pub const ADEN: Field = Field::bit(0);
    /// ADC disable
    pub const ADDIS: Field = Field::bit(1);
    /// Start conversion
    pub const ADSTART: Field = Field::bit(2);
    /// Stop conversion
    pub const ADSTP: Field = Field::bit(4);
    /// Voltage regulator enable
    pub const ADVREGEN: Field = Field::bit(28);
    /// Calibration in progress
    pub const ADCAL: Field = Field::bit(31);
}

/// ADC_CFGR1 fields
pub mod cfgr1 {
    use super::Field;

    /// Channel selection register mode (0 = one bit per channel)
    pub const CHSELRMOD: Field = Field::bit(21);
}

/// ADC_SMPR fields
pub mod smpr {
    use super::Field;

    /// Sampling time selection 1
    pub const SMP1: Field = Field::new(0, 3);
    /// Sampling time selection 2
    pub const SMP2: Field = Field::new(4, 3);
}

/// ADC_DR fields
pub mod dr {
    use super::Field;

    /// Converted data
    pub const DATA: Field = Field::new(0, 16);
}

/// CHSELx bit of a channel, if the channel exists
pub const fn channel_select(channel: u8) -> Option<Field> {
    if channel <= MAX_CHANNEL {
        Some(Field::bit(channel))
    } else {
        None
    }
}

/// Port A pin of an input channel, if the channel is on port A
pub const fn gpioa_pin(channel: u8) -> Option<u8> {
    if channel <= MAX_GPIOA_CHANNEL {
        Some(channel)
    } else {
        None
    }
}

/// Sampling time in ADC clock cycles (SMPx encoding)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SampleTime {
    /// Reset value
    Cycles1_5 = 0b000,
    Cycles3_5 = 0b001,
    Cycles7_5 = 0b010,
    Cycles12_5 = 0b011,
    Cycles19_5 = 0b100,
    Cycles39_5 = 0b101,
    Cycles79_5 = 0b110,
    /// Slowest setting, most stable reading
    #[default]
    Cycles160_5 = 0b111,
}

impl SampleTime {
    /// SMPx register encoding
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Sampling time in tenths of an ADC clock cycle
    pub const fn cycles_x10(self) -> u16 {
        match self {
            SampleTime::Cycles1_5 => 15,
            SampleTime::Cycles3_5 => 35,
            SampleTime::Cycles7_5 => 75,
            SampleTime::Cycles12_5 => 125,
            SampleTime::Cycles19_5 => 195,
            SampleTime::Cycles39_5 => 395,
            SampleTime::Cycles79_5 => 795,
            SampleTime::Cycles160_5 => 1605,
        }
    }

    /// Parse a sampling time given in cycles x10 (e.g. 1605 for 160.5)
    pub fn from_cycles_x10(cycles_x10: u16) -> Option<Self> {
        match cycles_x10 {
            15 => Some(SampleTime::Cycles1_5),
            35 => Some(SampleTime::Cycles3_5),
            75 => Some(SampleTime::Cycles7_5),
            125 => Some(SampleTime::Cycles12_5),
            195 => Some(SampleTime::Cycles19_5),
            395 => Some(SampleTime::Cycles39_5),
            795 => Some(SampleTime::Cycles79_5),
            1605 => Some(SampleTime::Cycles160_5),
            _ => None,
        }
    }
}
