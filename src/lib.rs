#![no_std]
#![doc = include_str!("../README.md")]

use embedded_hal::i2c::I2c;

pub mod config;
pub mod driver;
pub mod lux;

pub use crate::config::{
    Configuration, Gain, IntegrationTime, InterruptStatus, Persistence, PowerSavingMode,
};
pub use crate::driver::Veml7700;

#[derive(Debug)]
pub struct OutOfRange;

pub trait Driver<I2C: I2c, T> {
    fn address_check(address: u8) -> Result<(), OutOfRange> {
        if (0x08..=0x77).contains(&address) {
            Ok(())
        } else {
            Err(OutOfRange)
        }
    }
    fn new_inner(i2c: I2C, address: u8) -> Self;

    /// The entry point for a [`Driver`].  Expects [`I2c`] (obtainable from target platform HAL)
    /// and an I2C device address in the range `0x08..=0x77`.  This provides a handle that does not
    /// initialize the hardware.  Initialization is deferred to [`Driver::init`].
    ///
    /// # Errors
    ///
    /// [`OutOfRange`]: address is ouside of the allowed range `0x08..=0x77`
    fn new(i2c: I2C, address: u8) -> Result<Self, OutOfRange>
    where
        Self: Sized,
    {
        Self::address_check(address)?;
        Ok(Self::new_inner(i2c, address))
    }
    fn init_inner(self) -> Result<Self, T>
    where
        Self: Sized,
    {
        Ok(self)
    }

    /// Initializes the hardware.  This initialization is usually required prior to interacting
    /// with the device.  Some devices do not need initializing before use.  Calling
    /// [`Driver::init`] will be enforced through state types in the future.
    ///
    /// # Errors
    ///
    /// [`T`]: a device dependent error type for any problems encountered during initialization.
    fn init(self) -> Result<Self, T>
    where
        Self: Sized,
    {
        self.init_inner()
    }
}
