//! DIAG1-DIAG3 register (0x01-0x03) bits

/// DIAG1: overcurrent per half-bridge FET
pub mod diag1 {
    /// Low-side FET, half bridge 2, BOUT
    pub const OCP_LS2_B: u8 = 0x80;
    /// High-side FET, half bridge 2, BOUT
    pub const OCP_HS2_B: u8 = 0x40;
    /// Low-side FET, half bridge 1, BOUT
    pub const OCP_LS1_B: u8 = 0x20;
    /// High-side FET, half bridge 1, BOUT
    pub const OCP_HS1_B: u8 = 0x10;
    /// Low-side FET, half bridge 2, AOUT
    pub const OCP_LS2_A: u8 = 0x08;
    /// High-side FET, half bridge 2, AOUT
    pub const OCP_HS2_A: u8 = 0x04;
    /// Low-side FET, half bridge 1, AOUT
    pub const OCP_LS1_A: u8 = 0x02;
    /// High-side FET, half bridge 1, AOUT
    pub const OCP_HS1_A: u8 = 0x01;

    /// Any overcurrent on the BOUT bridge
    pub const OCP_B: u8 = OCP_LS2_B | OCP_HS2_B | OCP_LS1_B | OCP_HS1_B;
    /// Any overcurrent on the AOUT bridge
    pub const OCP_A: u8 = OCP_LS2_A | OCP_HS2_A | OCP_LS1_A | OCP_HS1_A;
}

/// DIAG2: thermal, stall and open-load
pub mod diag2 {
    /// Standstill power saving mode active
    pub const STSL: u8 = 0x80;
    /// Overtemperature warning
    pub const OTW: u8 = 0x40;
    /// Overtemperature shutdown
    pub const OTS: u8 = 0x20;
    /// Stall detection learning succeeded
    pub const STL_LRN_OK: u8 = 0x10;
    /// Motor stall
    pub const STALL: u8 = 0x08;
    /// Open load on BOUT
    pub const OL_B: u8 = 0x02;
    /// Open load on AOUT
    pub const OL_A: u8 = 0x01;
}

/// DIAG3: indexer and auto-torque counters
pub mod diag3 {
    /// Indexer is not at the home position
    pub const NHOME: u8 = 0x40;
    /// ATQ_CNT above ATQ_UL
    pub const CNT_OFLW: u8 = 0x20;
    /// ATQ_CNT below ATQ_LL
    pub const CNT_UFLW: u8 = 0x10;
    /// Low after a VCC UVLO event until cleared by CLR_FLT or nSLEEP
    pub const NPOR: u8 = 0x02;
}
