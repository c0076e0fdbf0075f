//! Splits H.264 Annex B byte streams into NAL units.
//!
//! ```
//! use annexb::NalUnitScanner;
//! use common::NalUnitType;
//!
//! let data: &[u8] = &[0x00, 0x00, 0x00, 0x01, 0x65, 0xAA, 0x00, 0x00, 0x01, 0x68, 0xBB];
//! let units = NalUnitScanner::new(data).collect::<Result<Vec<_>, _>>()?;
//!
//! assert_eq!(units[0].nal_unit_type(), NalUnitType::Idr);
//! assert_eq!(units[1].nal_unit_type(), NalUnitType::PictureParameterSet);
//! # Ok::<(), annexb::ScanError>(())
//! ```

mod byte_stream;
mod errors;
mod mapped_file;

pub use byte_stream::NalUnitScanner;
pub use errors::{ScanError, StreamError};
pub use mapped_file::MappedStream;
