pub mod compress;
pub mod decompress;
pub mod stats;
pub mod version;

use std::io::{Read, Write};
use std::path::Path;

pub(crate) fn read_text(input: Option<&Path>) -> anyhow::Result<String> {
    match input {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

pub(crate) fn read_bytes(input: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    match input {
        Some(path) => Ok(std::fs::read(path)?),
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

pub(crate) fn write_bytes(output: Option<&Path>, data: &[u8]) -> anyhow::Result<()> {
    match output {
        Some(path) => std::fs::write(path, data)?,
        None => std::io::stdout().write_all(data)?,
    }
    Ok(())
}
