//! Device handle and register-level operations.

use embedded_hal::i2c::I2c;

use crate::config::{Configuration, InterruptStatus};
use crate::lux::to_lux;
use crate::Driver;

/// The part answers on a single fixed I2C address.
pub const ADDRESS: u8 = 0x10;

const REG_ALS_CONF: u8 = 0x00;
const REG_THRESHOLD_HIGH: u8 = 0x01;
const REG_THRESHOLD_LOW: u8 = 0x02;
const REG_POWER_SAVING: u8 = 0x03;
const REG_ALS: u8 = 0x04;
const REG_WHITE: u8 = 0x05;
const REG_INTERRUPT_STATUS: u8 = 0x06;

pub struct Veml7700<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Driver<I2C, I2C::Error> for Veml7700<I2C> {
    fn new_inner(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    fn init_inner(mut self) -> Result<Self, I2C::Error> {
        self.configure(&Configuration::default())?;
        Ok(self)
    }
}

impl<I2C: I2c> Veml7700<I2C> {
    fn write_register16(&mut self, register: u8, value: u16) -> Result<(), I2C::Error> {
        let bytes = value.to_le_bytes();
        self.i2c
            .write(self.address, &[register, bytes[0], bytes[1]])
    }

    fn read_register16(&mut self, register: u8) -> Result<u16, I2C::Error> {
        let mut data: [u8; 2] = [0, 0];
        self.i2c.write_read(self.address, &[register], &mut data)?;
        Ok(u16::from_le_bytes(data))
    }

    /// Checks that the sensor answers on the bus with a single read of
    /// the configuration register.  The value is discarded.
    ///
    /// # Errors
    ///
    /// Bus errors are propagated verbatim.
    pub fn probe(&mut self) -> Result<(), I2C::Error> {
        self.read_register16(REG_ALS_CONF)?;
        Ok(())
    }

    /// Writes the whole configuration to the device: the command word,
    /// both interrupt thresholds and the power-saving word, strictly in
    /// that register order.
    ///
    /// # Errors
    ///
    /// The four writes are independent transactions.  A failure part
    /// way through is returned as-is and leaves the registers written
    /// so far in effect; nothing is rolled back or retried.
    pub fn configure(&mut self, configuration: &Configuration) -> Result<(), I2C::Error> {
        self.write_register16(REG_ALS_CONF, configuration.command_word())?;
        self.write_register16(REG_THRESHOLD_HIGH, configuration.threshold_high)?;
        self.write_register16(REG_THRESHOLD_LOW, configuration.threshold_low)?;
        self.write_register16(REG_POWER_SAVING, configuration.power_saving_word())
    }

    /// Raw count from the ambient light channel.
    ///
    /// # Errors
    ///
    /// Bus errors are propagated verbatim.
    pub fn raw_ambient_light(&mut self) -> Result<u16, I2C::Error> {
        self.read_register16(REG_ALS)
    }

    /// Raw count from the white channel.
    ///
    /// # Errors
    ///
    /// Bus errors are propagated verbatim.
    pub fn raw_white_channel(&mut self) -> Result<u16, I2C::Error> {
        self.read_register16(REG_WHITE)
    }

    /// Ambient light level in lux, truncated to an integer.  The
    /// conversion uses the gain and integration time from
    /// `configuration`, which must be the one currently in effect on
    /// the device.
    ///
    /// # Errors
    ///
    /// Bus errors are propagated verbatim.
    pub fn ambient_light(&mut self, configuration: &Configuration) -> Result<u32, I2C::Error> {
        let raw = self.raw_ambient_light()?;
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let lux = to_lux(raw, configuration.gain, configuration.integration_time) as u32;
        Ok(lux)
    }

    /// White channel level in lux, truncated to an integer.  Same
    /// conversion as [`Veml7700::ambient_light`]; only the register
    /// read differs.
    ///
    /// # Errors
    ///
    /// Bus errors are propagated verbatim.
    pub fn white_channel(&mut self, configuration: &Configuration) -> Result<u32, I2C::Error> {
        let raw = self.raw_white_channel()?;
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let lux = to_lux(raw, configuration.gain, configuration.integration_time) as u32;
        Ok(lux)
    }

    /// Reads and decodes the interrupt-status register.  The register
    /// clears on read, so an immediate second call returns both flags
    /// `false` unless a new condition occurred in between.
    ///
    /// # Errors
    ///
    /// Bus errors are propagated verbatim.
    pub fn interrupt_status(&mut self) -> Result<InterruptStatus, I2C::Error> {
        Ok(InterruptStatus::from_register(
            self.read_register16(REG_INTERRUPT_STATUS)?,
        ))
    }

    /// Destroys the handle and returns the I2C bus.
    #[must_use]
    pub fn release(self) -> I2C {
        self.i2c
    }
}
