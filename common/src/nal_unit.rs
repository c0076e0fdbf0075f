use std::fmt;

use crate::nal_unit_type::NalUnitType;
use crate::start_code::StartCode;

/// Decoded `nal_ref_idc`.
///
/// `nal_ref_idc` not equal to 0 specifies that the content of the NAL unit contains a sequence
/// parameter set, a picture parameter set, a slice of a reference picture, or a slice data
/// partition of a reference picture.
///
/// `nal_ref_idc` shall not be equal to 0 for NAL units with `nal_unit_type` equal to 5, and shall
/// be equal to 0 for all NAL units having `nal_unit_type` equal to 6, 9, 10, 11, or 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RefPriority {
    Disposable,
    Low,
    High,
    Highest,
}

impl RefPriority {
    pub fn from_nal_ref_idc(nal_ref_idc: u8) -> Self {
        match nal_ref_idc & 0b11 {
            0 => RefPriority::Disposable,
            1 => RefPriority::Low,
            2 => RefPriority::High,
            _ => RefPriority::Highest,
        }
    }

    pub fn nal_ref_idc(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            RefPriority::Disposable => "DISPOS",
            RefPriority::Low => "LOW",
            RefPriority::High => "HIGH",
            RefPriority::Highest => "HIGHEST",
        }
    }
}

impl fmt::Display for RefPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// The one-byte header that opens every NAL unit.
///
/// ```text
/// +---+-----+---------+
/// | F | NRI |  Type   |
/// +---+-----+---------+
///   7  6  5  4 3 2 1 0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NalUnitHeader {
    /// `forbidden_zero_bit` shall be equal to 0. It is reported as found, never rejected.
    pub forbidden_zero_bit: bool,

    pub nal_ref_idc: RefPriority,

    /// `nal_unit_type` specifies the type of `RBSP` data structure contained in the NAL unit.
    pub nal_unit_type: NalUnitType,
}

impl NalUnitHeader {
    /// Decodes any byte; there is no failure path.
    pub fn from_byte(byte: u8) -> Self {
        Self {
            forbidden_zero_bit: byte >> 7 == 1,
            nal_ref_idc: RefPriority::from_nal_ref_idc(byte >> 5),
            nal_unit_type: NalUnitType::from_nal_unit_type(byte),
        }
    }

    pub fn to_byte(&self) -> u8 {
        (u8::from(self.forbidden_zero_bit) << 7)
            | (self.nal_ref_idc.nal_ref_idc() << 5)
            | self.nal_unit_type.type_id()
    }
}

/// `NalUnit` is one unit split out of an Annex B byte stream: the start code that introduced it,
/// where that start code sits in the stream, and the unit's bytes.
///
/// `payload` begins with the header byte. It excludes both the introducing start code and the
/// one that follows, and no emulation prevention bytes have been removed from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NalUnit {
    pub start_code: StartCode,

    /// Byte position of the first byte of `start_code` in the stream.
    pub offset: u64,

    pub header: NalUnitHeader,

    payload: Vec<u8>,
}

impl NalUnit {
    /// Returns `None` for an empty payload, which has no header byte to decode.
    pub fn new(start_code: StartCode, offset: u64, payload: Vec<u8>) -> Option<Self> {
        let header = NalUnitHeader::from_byte(*payload.first()?);

        Some(Self {
            start_code,
            offset,
            header,
            payload,
        })
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Number of payload bytes, header byte included.
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// Always false: a unit holds at least its header byte.
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Bytes the unit occupies in the stream, start code included.
    pub fn byte_len(&self) -> usize {
        self.start_code.len() + self.payload.len()
    }

    pub fn nal_unit_type(&self) -> NalUnitType {
        self.header.nal_unit_type
    }

    pub fn nal_ref_idc(&self) -> RefPriority {
        self.header.nal_ref_idc
    }
}
