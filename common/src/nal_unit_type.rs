use std::fmt;

/// `nal_unit_type` values pulled from Table 7-1.
///
/// Values that are not broken out here (0 and 13..=31) decode to `Undefined`, which keeps the raw
/// 5-bit value so the header byte can be reproduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NalUnitType {
    Undefined(u8),
    /// Coded slice of a non-IDR picture.
    Slice,
    SliceDataPartitionA,
    SliceDataPartitionB,
    SliceDataPartitionC,
    /// Coded slice of an IDR picture.
    Idr,
    /// Supplemental enhancement information.
    Sei,
    SequenceParameterSet,
    PictureParameterSet,
    AccessUnitDelimiter,
    EndOfSequence,
    EndOfStream,
    FillerData,
}

impl NalUnitType {
    pub const MASK: u8 = 0b0001_1111;

    /// Decodes the low five bits of `nal_unit_type`; the upper bits are ignored.
    pub fn from_nal_unit_type(nal_unit_type: u8) -> Self {
        match nal_unit_type & Self::MASK {
            1 => NalUnitType::Slice,
            2 => NalUnitType::SliceDataPartitionA,
            3 => NalUnitType::SliceDataPartitionB,
            4 => NalUnitType::SliceDataPartitionC,
            5 => NalUnitType::Idr,
            6 => NalUnitType::Sei,
            7 => NalUnitType::SequenceParameterSet,
            8 => NalUnitType::PictureParameterSet,
            9 => NalUnitType::AccessUnitDelimiter,
            10 => NalUnitType::EndOfSequence,
            11 => NalUnitType::EndOfStream,
            12 => NalUnitType::FillerData,
            other => NalUnitType::Undefined(other),
        }
    }

    pub fn type_id(&self) -> u8 {
        match self {
            NalUnitType::Undefined(id) => *id,
            NalUnitType::Slice => 1,
            NalUnitType::SliceDataPartitionA => 2,
            NalUnitType::SliceDataPartitionB => 3,
            NalUnitType::SliceDataPartitionC => 4,
            NalUnitType::Idr => 5,
            NalUnitType::Sei => 6,
            NalUnitType::SequenceParameterSet => 7,
            NalUnitType::PictureParameterSet => 8,
            NalUnitType::AccessUnitDelimiter => 9,
            NalUnitType::EndOfSequence => 10,
            NalUnitType::EndOfStream => 11,
            NalUnitType::FillerData => 12,
        }
    }

    /// Video coding layer units carry slice data.
    pub fn is_vcl(&self) -> bool {
        matches!(
            self,
            NalUnitType::Slice
                | NalUnitType::SliceDataPartitionA
                | NalUnitType::SliceDataPartitionB
                | NalUnitType::SliceDataPartitionC
                | NalUnitType::Idr
        )
    }

    pub fn is_parameter_set(&self) -> bool {
        matches!(
            self,
            NalUnitType::SequenceParameterSet | NalUnitType::PictureParameterSet
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            NalUnitType::Undefined(_) => "?",
            NalUnitType::Slice => "SLICE",
            NalUnitType::SliceDataPartitionA => "DPA",
            NalUnitType::SliceDataPartitionB => "DPB",
            NalUnitType::SliceDataPartitionC => "DPC",
            NalUnitType::Idr => "IDR",
            NalUnitType::Sei => "SEI",
            NalUnitType::SequenceParameterSet => "SPS",
            NalUnitType::PictureParameterSet => "PPS",
            NalUnitType::AccessUnitDelimiter => "AUD",
            NalUnitType::EndOfSequence => "EOSEQ",
            NalUnitType::EndOfStream => "EOSTREAM",
            NalUnitType::FillerData => "FILL",
        }
    }
}

impl fmt::Display for NalUnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}
