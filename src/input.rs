//! Reading the address and prefix from an interactive session.

use crate::error::{Result, SubnetError};
use crate::models::Subnet;
use std::io::{BufRead, Write};

pub const ADDRESS_PROMPT: &str = "Enter the IP address (dotted decimal): ";
pub const PREFIX_PROMPT: &str = "Enter the CIDR prefix length of the subnet mask: ";

/// Write `label`, then read one line. Fails on end of input.
pub fn prompt<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, label: &str) -> Result<String> {
    write!(writer, "{label}")?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(SubnetError::Io(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "input closed before an answer was given",
        )));
    }
    log::trace!("prompt({label:?}) -> {line:?}");
    Ok(line.trim().to_string())
}

/// Ask for the address, then the prefix, and build the [`Subnet`].
pub fn read_subnet<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<Subnet> {
    let addr = prompt(reader, writer, ADDRESS_PROMPT)?;
    let prefix = prompt(reader, writer, PREFIX_PROMPT)?;
    Subnet::new(&addr, &prefix)
}
