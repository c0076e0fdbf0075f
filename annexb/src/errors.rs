use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error(
        "byte stream ended before a start code could be validated (needed {needed} bytes, found {available})"
    )]
    TruncatedStream { needed: usize, available: usize },

    #[error("byte stream does not open with a start code, found {found:02x?}")]
    MalformedStream { found: Vec<u8> },

    #[error("failed to read the byte stream at offset {offset}")]
    Io {
        offset: u64,
        #[source]
        source: io::Error,
    },
}

#[derive(Error, Debug)]
pub enum StreamError {
    #[error("failed to open elementary stream")]
    FileError(#[from] io::Error),

    #[error("failed to scan elementary stream")]
    ByteStreamError(#[from] ScanError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let truncated = ScanError::TruncatedStream {
            needed: 3,
            available: 1,
        };
        assert_eq!(
            truncated.to_string(),
            "byte stream ended before a start code could be validated (needed 3 bytes, found 1)"
        );

        let malformed = ScanError::MalformedStream {
            found: vec![0x01, 0x02, 0x03],
        };
        assert_eq!(
            malformed.to_string(),
            "byte stream does not open with a start code, found [01, 02, 03]"
        );

        let failed_read = ScanError::Io {
            offset: 42,
            source: io::Error::from(io::ErrorKind::UnexpectedEof),
        };
        assert_eq!(failed_read.to_string(), "failed to read the byte stream at offset 42");

        let opened = StreamError::from(io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(opened.to_string(), "failed to open elementary stream");

        let scanned = StreamError::from(malformed);
        assert_eq!(scanned.to_string(), "failed to scan elementary stream");
    }
}
