use std::fs::File;

use common::NalUnit;
use log::debug;
use memmap::Mmap;

use crate::byte_stream::NalUnitScanner;
use crate::errors::StreamError;

/// A read-only memory map over an H.264 elementary stream file.
pub struct MappedStream {
    // `None` for a zero-length file, which cannot be mapped
    data: Option<Mmap>,
}

impl MappedStream {
    pub fn from_file(file: File) -> Result<Self, StreamError> {
        if file.metadata()?.len() == 0 {
            return Ok(Self { data: None });
        }

        let mmap = unsafe { Mmap::map(&file)? };
        Ok(Self { data: Some(mmap) })
    }

    pub fn from_file_path(file_path: &str) -> Result<Self, StreamError> {
        let file = File::open(file_path)?;
        debug!("mapping {file_path}");
        MappedStream::from_file(file)
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.data.as_deref().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    pub fn units(&self) -> NalUnitScanner<&[u8]> {
        NalUnitScanner::new(self.as_bytes())
    }

    /// Scans the whole file, stopping at the first error.
    pub fn collect_units(&self) -> Result<Vec<NalUnit>, StreamError> {
        Ok(self.units().collect::<Result<Vec<_>, _>>()?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use common::{NalUnitType, StartCode};
    use tempfile::NamedTempFile;

    use super::*;
    use crate::errors::ScanError;

    fn stream_file(data: &[u8]) -> Result<NamedTempFile, StreamError> {
        let mut file = NamedTempFile::new()?;
        file.write_all(data)?;
        file.flush()?;
        Ok(file)
    }

    #[test]
    fn test_units_from_file() -> Result<(), StreamError> {
        let file = stream_file(&[
            0x00, 0x00, 0x00, 0x01, 0x67, 0x42, 0x00, 0x1E, // SPS
            0x00, 0x00, 0x00, 0x01, 0x68, 0xCE, 0x38, 0x80, // PPS
            0x00, 0x00, 0x01, 0x65, 0x88, 0x84, // IDR
        ])?;

        let stream = MappedStream::from_file(file.reopen()?)?;
        assert_eq!(stream.len(), 22);

        let units = stream.collect_units()?;
        let types: Vec<_> = units.iter().map(|u| u.nal_unit_type()).collect();
        assert_eq!(
            types,
            [
                NalUnitType::SequenceParameterSet,
                NalUnitType::PictureParameterSet,
                NalUnitType::Idr
            ]
        );
        assert_eq!(units[2].start_code, StartCode::ThreeByte);
        assert_eq!(units[2].offset, 16);

        Ok(())
    }

    #[test]
    fn test_empty_file_is_truncated() -> Result<(), StreamError> {
        let file = stream_file(&[])?;
        let path = file.path().to_string_lossy().into_owned();

        let stream = MappedStream::from_file_path(&path)?;
        assert!(stream.is_empty());
        assert!(matches!(
            stream.collect_units(),
            Err(StreamError::ByteStreamError(ScanError::TruncatedStream {
                needed: 3,
                available: 0
            }))
        ));

        Ok(())
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            MappedStream::from_file_path("./does-not-exist.h264"),
            Err(StreamError::FileError(_))
        ));
    }
}
