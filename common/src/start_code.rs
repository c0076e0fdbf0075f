/// A start code prefix embedded in the byte stream ahead of every `NalUnit`.
///
/// The location of a start code lets a reader identify the beginning of a new NAL unit and the
/// end of the previous one. The four-byte form is the three-byte form preceded by a
/// `zero_byte` syntax element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StartCode {
    /// `0x00 0x00 0x01`
    ThreeByte,
    /// `0x00 0x00 0x00 0x01`
    FourByte,
}

impl StartCode {
    pub const THREE_BYTE_PREFIX: [u8; 3] = [0x00, 0x00, 0x01];
    pub const FOUR_BYTE_PREFIX: [u8; 4] = [0x00, 0x00, 0x00, 0x01];

    pub const fn len(self) -> usize {
        match self {
            StartCode::ThreeByte => 3,
            StartCode::FourByte => 4,
        }
    }

    pub const fn bytes(self) -> &'static [u8] {
        match self {
            StartCode::ThreeByte => &Self::THREE_BYTE_PREFIX,
            StartCode::FourByte => &Self::FOUR_BYTE_PREFIX,
        }
    }

    /// Returns true when `window` is exactly a 3 or 4 byte start code: every leading byte is
    /// `0x00` and the final byte is `0x01`.
    pub fn is_valid(window: &[u8]) -> bool {
        match window {
            [leading @ .., 0x01] if matches!(window.len(), 3 | 4) => {
                leading.iter().all(|&b| b == 0x00)
            }
            _ => false,
        }
    }

    /// Returns the start code that the tail of `buf` forms, if any.
    ///
    /// The four-byte window is tested first, so `.. 00 00 00 01` always resolves to
    /// `FourByte` and its leading zero is never left behind in the preceding payload.
    pub fn terminating(buf: &[u8]) -> Option<StartCode> {
        [StartCode::FourByte, StartCode::ThreeByte]
            .into_iter()
            .find(|sc| buf.len() >= sc.len() && Self::is_valid(&buf[buf.len() - sc.len()..]))
    }
}
