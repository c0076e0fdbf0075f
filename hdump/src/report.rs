use std::collections::BTreeMap;
use std::io::{self, Write};

use common::NalUnit;
use serde::Serialize;

/// One reported NAL unit.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub(crate) struct Row {
    index: usize,
    offset: u64,
    start_code_len: usize,
    ref_idc: &'static str,
    unit_type: &'static str,
    type_id: u8,
    forbidden_bit: bool,
    len: usize,
}

impl Row {
    pub(crate) fn new(index: usize, unit: &NalUnit) -> Self {
        Self {
            index,
            offset: unit.offset,
            start_code_len: unit.start_code.len(),
            ref_idc: unit.nal_ref_idc().label(),
            unit_type: unit.nal_unit_type().label(),
            type_id: unit.nal_unit_type().type_id(),
            forbidden_bit: unit.header.forbidden_zero_bit,
            len: unit.len(),
        }
    }
}

pub(crate) trait Report {
    fn row(&mut self, row: Row) -> io::Result<()>;

    fn finish(&mut self) -> io::Result<()>;
}

/// The `NALU Table` layout: a banner, then one line per unit as it is scanned.
pub(crate) struct TableReport<W: Write> {
    out: W,
    summary: Option<BTreeMap<(u8, &'static str), usize>>,
    started: bool,
}

impl<W: Write> TableReport<W> {
    pub(crate) fn new(out: W, summary: bool) -> Self {
        Self {
            out,
            summary: summary.then(BTreeMap::new),
            started: false,
        }
    }

    fn banner(&mut self) -> io::Result<()> {
        writeln!(self.out, "-----+----- NALU Table -+-------+---------+")?;
        writeln!(self.out, " NUM |    POS  |  IDC   |  TYPE |    LEN  |")?;
        writeln!(self.out, "-----+---------+--------+-------+---------+")
    }
}

impl<W: Write> Report for TableReport<W> {
    fn row(&mut self, row: Row) -> io::Result<()> {
        if !self.started {
            self.banner()?;
            self.started = true;
        }

        if let Some(counts) = self.summary.as_mut() {
            *counts.entry((row.type_id, row.unit_type)).or_default() += 1;
        }

        writeln!(
            self.out,
            "{:5}| {:8}| {:>7}| {:>6}| {:8}|",
            row.index, row.offset, row.ref_idc, row.unit_type, row.len
        )
    }

    fn finish(&mut self) -> io::Result<()> {
        if !self.started {
            self.banner()?;
        }

        if let Some(counts) = self.summary.take() {
            writeln!(self.out, "-----+---------+--------+-------+---------+")?;
            for ((type_id, label), count) in counts {
                writeln!(self.out, "{type_id:>4} {label:>8}: {count}")?;
            }
        }

        self.out.flush()
    }
}

/// Buffers rows and writes them as one JSON array.
pub(crate) struct JsonReport<W: Write> {
    out: W,
    rows: Vec<Row>,
}

impl<W: Write> JsonReport<W> {
    pub(crate) fn new(out: W) -> Self {
        Self { out, rows: vec![] }
    }
}

impl<W: Write> Report for JsonReport<W> {
    fn row(&mut self, row: Row) -> io::Result<()> {
        self.rows.push(row);
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, &self.rows)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}
