use std::io::{self, BufRead};
use std::iter::FusedIterator;

use common::{NalUnit, StartCode};
use log::{debug, warn};

use crate::errors::ScanError;

#[derive(Debug, Clone, Copy)]
enum State {
    /// Nothing has been read; the stream must open with a start code.
    Leading,
    /// The reader sits on the first payload byte of a unit introduced by `start_code`.
    Unit { start_code: StartCode, offset: u64 },
    Done,
}

/// `NalUnitScanner` splits an Annex B byte stream into `NalUnit`s, one per call to `next`.
///
/// Bytes are pulled through the reader's own buffer, so a `BufReader<File>`, a `&[u8]`, or a
/// locked stdin all work. The scanner only reads as far as it needs to find the end of the unit
/// it is producing. It stops for good after the last unit or the first error.
#[derive(Debug)]
pub struct NalUnitScanner<R> {
    reader: R,
    position: u64,
    state: State,
    capacity_hint: usize,
}

impl<R: BufRead> NalUnitScanner<R> {
    /// `reader` must be an ordered stream of bytes consisting of a sequence of byte stream
    /// `NalUnit` syntax structures.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            position: 0,
            state: State::Leading,
            capacity_hint: 0,
        }
    }

    /// Number of bytes consumed from the reader so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    fn read_byte(&mut self) -> Result<Option<u8>, ScanError> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => {
                    let Some(&byte) = buf.first() else {
                        return Ok(None);
                    };
                    self.reader.consume(1);
                    self.position += 1;
                    return Ok(Some(byte));
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(ScanError::Io {
                        offset: self.position,
                        source,
                    })
                }
            }
        }
    }

    fn read_leading_start_code(&mut self) -> Result<StartCode, ScanError> {
        let mut window = [0u8; 4];

        for available in 0..3 {
            window[available] = self
                .read_byte()?
                .ok_or(ScanError::TruncatedStream {
                    needed: 3,
                    available,
                })?;
        }

        if StartCode::is_valid(&window[..3]) {
            return Ok(StartCode::ThreeByte);
        }

        // only `00 00 00` can still become a four-byte start code
        if window[..3] != [0x00; 3] {
            return Err(ScanError::MalformedStream {
                found: window[..3].to_vec(),
            });
        }

        window[3] = self.read_byte()?.ok_or(ScanError::TruncatedStream {
            needed: 4,
            available: 3,
        })?;

        if StartCode::is_valid(&window) {
            Ok(StartCode::FourByte)
        } else {
            Err(ScanError::MalformedStream {
                found: window.to_vec(),
            })
        }
    }

    /// Accumulates bytes until the next start code, which is consumed but left out of the
    /// payload, or until the end of the stream.
    fn scan_payload(&mut self) -> Result<(Vec<u8>, Option<StartCode>), ScanError> {
        let mut payload = Vec::with_capacity(self.capacity_hint);

        while let Some(byte) = self.read_byte()? {
            payload.push(byte);

            if byte != 0x01 {
                continue;
            }

            if let Some(next) = StartCode::terminating(&payload) {
                payload.truncate(payload.len() - next.len());
                return Ok((payload, Some(next)));
            }
        }

        Ok((payload, None))
    }

    fn next_unit(&mut self) -> Result<Option<NalUnit>, ScanError> {
        loop {
            let (start_code, offset) = match self.state {
                State::Leading => (self.read_leading_start_code()?, 0),
                State::Unit { start_code, offset } => (start_code, offset),
                State::Done => return Ok(None),
            };

            let (payload, next) = self.scan_payload()?;

            self.state = match next {
                Some(start_code) => State::Unit {
                    start_code,
                    offset: self.position - start_code.len() as u64,
                },
                None => State::Done,
            };
            self.capacity_hint = payload.len();

            let Some(unit) = NalUnit::new(start_code, offset, payload) else {
                debug!("skipping empty nal unit at offset {offset}");
                continue;
            };

            if unit.header.forbidden_zero_bit {
                warn!("nal unit at offset {offset} has forbidden_zero_bit set");
            }

            debug!(
                "nal unit at offset {offset}: type={:?} ref_idc={:?} start_code={} len={}",
                unit.header.nal_unit_type,
                unit.header.nal_ref_idc,
                start_code.len(),
                unit.len()
            );

            return Ok(Some(unit));
        }
    }
}

impl<R: BufRead> Iterator for NalUnitScanner<R> {
    type Item = Result<NalUnit, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.next_unit().transpose();

        if matches!(next, Some(Err(_))) {
            self.state = State::Done;
        }

        next
    }
}

impl<R: BufRead> FusedIterator for NalUnitScanner<R> {}
