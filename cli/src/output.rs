use std::io::{self, Write};

use anyhow::Result;
use serde::Serialize;

/// A command result that can be printed as text or serialized as JSON.
pub trait Render: Serialize {
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()>;
}

pub fn emit<R: Render>(value: &R, json: bool, out: &mut dyn Write) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, value)?;
        writeln!(out)?;
    } else {
        value.write_text(out)?;
    }
    out.flush()?;
    Ok(())
}
