//! In-memory DRV8461 for tests
//!
//! Models the device as seen through the 5-bit frame address: a 32-byte
//! register file, a fixed status byte, writes that only latch when
//! chip-select is released, and the self-clearing STEP and CLR_FLT bits.

use drv8461_core::registers::ctrl::{ctrl2, ctrl3};
use drv8461_core::registers::{Register, ADDRESS_MASK};
use drv8461_hal::ByteTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

/// A completed frame as seen on MOSI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub header: u8,
    pub payload: u8,
}

impl Frame {
    pub fn addr(&self) -> u8 {
        (self.header >> 1) & ADDRESS_MASK
    }

    pub fn is_read(&self) -> bool {
        self.header & 0x40 != 0
    }
}

pub struct MockDevice {
    pub memory: [u8; 32],
    pub status: u8,
    pub frames: Vec<Frame>,
    pub selected: bool,
    /// Byte position within a frame (0 or 1) at which exchanges fail
    pub fail_at: Option<usize>,
    position: usize,
    header: u8,
    payload: Option<u8>,
}

impl MockDevice {
    pub fn new() -> Self {
        Self {
            memory: [0; 32],
            status: 0xC0,
            frames: Vec::new(),
            selected: false,
            fail_at: None,
            position: 0,
            header: 0,
            payload: None,
        }
    }

    /// Poke a register as the device would after an external change
    pub fn poke(&mut self, reg: Register, value: u8) {
        self.memory[(reg.addr() & ADDRESS_MASK) as usize] = value;
    }

    /// Value currently held by the device for a register
    pub fn peek(&self, reg: Register) -> u8 {
        self.memory[(reg.addr() & ADDRESS_MASK) as usize]
    }

    /// (address, value) of every completed write, in order
    pub fn writes(&self) -> Vec<(u8, u8)> {
        self.frames
            .iter()
            .filter(|frame| !frame.is_read())
            .map(|frame| (frame.addr(), frame.payload))
            .collect()
    }

    /// Address of every completed read, in order
    pub fn reads(&self) -> Vec<u8> {
        self.frames
            .iter()
            .filter(|frame| frame.is_read())
            .map(|frame| frame.addr())
            .collect()
    }

    fn self_clearing(addr: u8) -> u8 {
        if addr == Register::Ctrl2.addr() {
            ctrl2::STEP
        } else if addr == Register::Ctrl3.addr() {
            ctrl3::CLR_FLT
        } else {
            0
        }
    }
}

impl ByteTransport for MockDevice {
    type Error = MockError;

    fn begin_transaction(&mut self) -> Result<(), MockError> {
        assert!(!self.selected, "frame started while selected");
        self.selected = true;
        self.position = 0;
        self.payload = None;
        Ok(())
    }

    fn exchange_byte(&mut self, out: u8) -> Result<u8, MockError> {
        assert!(self.selected, "exchange outside a frame");
        if self.fail_at == Some(self.position) {
            return Err(MockError);
        }

        let position = self.position;
        self.position += 1;
        match position {
            0 => {
                self.header = out;
                Ok(self.status)
            }
            1 => {
                self.payload = Some(out);
                let addr = (self.header >> 1) & ADDRESS_MASK;
                Ok(self.memory[addr as usize])
            }
            _ => panic!("frame longer than two bytes"),
        }
    }

    fn end_transaction(&mut self) -> Result<(), MockError> {
        assert!(self.selected, "frame ended while not selected");
        self.selected = false;

        if let Some(payload) = self.payload.take() {
            let frame = Frame {
                header: self.header,
                payload,
            };
            if !frame.is_read() {
                let addr = frame.addr();
                self.memory[addr as usize] = payload & !Self::self_clearing(addr);
            }
            self.frames.push(frame);
        }
        Ok(())
    }
}
