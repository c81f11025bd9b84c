//! Block-formatted output

use std::io::{self, Write};

/// Writes response blocks: a blank line between blocks, the tag before the
/// first line of each block, continuation lines verbatim.
#[derive(Debug, Clone)]
pub struct BlockWriter {
    tag: String,
    printed_any: bool,
}

impl BlockWriter {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            printed_any: false,
        }
    }

    pub fn write_block<W: Write>(&mut self, out: &mut W, block: &str) -> io::Result<()> {
        if self.printed_any {
            writeln!(out)?;
        }

        let mut lines = block.split('\n');
        writeln!(out, "{}{}", self.tag, lines.next().unwrap_or_default())?;
        for line in lines {
            writeln!(out, "{}", line)?;
        }

        self.printed_any = true;
        out.flush()
    }
}
