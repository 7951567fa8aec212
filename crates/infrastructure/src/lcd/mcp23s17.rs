//! MCP23S17 16-bit SPI port expander.
//!
//! Every register access is a single three byte SPI frame:
//! `[opcode, register, data]` where the opcode carries the hardware address
//! and the read/write bit. Registers are addressed with `IOCON.BANK = 0`.

use linux_embedded_hal::spidev::{Spidev, SpidevTransfer};
use pistats_domain::DomainError;
use std::io;

pub const IODIRA: u8 = 0x00;
pub const IODIRB: u8 = 0x01;
pub const IPOLA: u8 = 0x02;
pub const GPINTENA: u8 = 0x04;
pub const IOCON: u8 = 0x0A;
pub const GPPUA: u8 = 0x0C;
pub const GPIOA: u8 = 0x12;
pub const GPIOB: u8 = 0x13;

/// Hardware address enable; the other IOCON bits stay at their reset value.
pub const IOCON_HAEN: u8 = 0x08;

const WRITE_OPCODE: u8 = 0x40;
const READ_BIT: u8 = 0x01;

/// Full-duplex SPI transfer, implemented by spidev and by test doubles.
pub trait SpiBus: Send {
    fn transfer(&mut self, tx: &[u8], rx: &mut [u8]) -> io::Result<()>;
}

impl SpiBus for Spidev {
    fn transfer(&mut self, tx: &[u8], rx: &mut [u8]) -> io::Result<()> {
        let mut transfer = SpidevTransfer::read_write(tx, rx);
        Spidev::transfer(self, &mut transfer)
    }
}

pub fn opcode(hardware_address: u8, read: bool) -> u8 {
    let op = WRITE_OPCODE | ((hardware_address & 0x07) << 1);
    if read {
        op | READ_BIT
    } else {
        op
    }
}

pub struct Mcp23s17<S: SpiBus> {
    spi: S,
    hardware_address: u8,
}

impl<S: SpiBus> Mcp23s17<S> {
    pub fn new(spi: S, hardware_address: u8) -> Self {
        Self {
            spi,
            hardware_address,
        }
    }

    pub fn write_register(&mut self, register: u8, value: u8) -> Result<(), DomainError> {
        let tx = [opcode(self.hardware_address, false), register, value];
        let mut rx = [0u8; 3];
        self.spi
            .transfer(&tx, &mut rx)
            .map_err(|e| spi_error("write", register, e))
    }

    pub fn read_register(&mut self, register: u8) -> Result<u8, DomainError> {
        let tx = [opcode(self.hardware_address, true), register, 0];
        let mut rx = [0u8; 3];
        self.spi
            .transfer(&tx, &mut rx)
            .map_err(|e| spi_error("read", register, e))?;
        Ok(rx[2])
    }

    /// PiFace Control and Display layout: port A inputs with pull-ups and
    /// inverted polarity (pressed reads 1), port B outputs to the LCD.
    pub fn init_piface(&mut self) -> Result<(), DomainError> {
        self.write_register(IOCON, IOCON_HAEN)?;
        self.write_register(IODIRA, 0xFF)?;
        self.write_register(GPPUA, 0xFF)?;
        self.write_register(IPOLA, 0xFF)?;
        self.write_register(GPINTENA, 0xFF)?;
        self.write_register(IODIRB, 0x00)?;
        self.write_register(GPIOB, 0x00)
    }

    pub fn spi(&self) -> &S {
        &self.spi
    }
}

fn spi_error(action: &str, register: u8, e: io::Error) -> DomainError {
    DomainError::Hardware(format!(
        "SPI {} of register 0x{:02X} failed: {}",
        action, register, e
    ))
}
