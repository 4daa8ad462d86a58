use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
};

use serde::Serialize;
use serde_json::{Serializer, ser::PrettyFormatter};

use crate::{error::ReportError, models::ParsedRequest, parser};

/// Indentation of the emitted JSON. Each report keeps the indentation
/// its consumers already expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Two,
    Four,
}

impl Indent {
    fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::Two => b"  ",
            Self::Four => b"    ",
        }
    }
}

/// Reads the input log line by line, keeping only lines that match
/// the expected shape. A missing or unreadable file is fatal.
pub fn read_requests(path: impl AsRef<Path>) -> Result<Vec<ParsedRequest>, ReportError> {
    let file = File::open(path)?;
    let mut requests = Vec::new();
    for line in BufReader::new(file).lines() {
        if let Some(request) = parser::parse(&line?) {
            requests.push(request);
        }
    }
    Ok(requests)
}

pub fn write_json(
    path: impl AsRef<Path>,
    report: &impl Serialize,
    indent: Indent,
) -> Result<(), ReportError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    report.serialize(&mut serializer)?;
    let mut file = File::create(path)?;
    file.write_all(&buffer)?;
    Ok(())
}
