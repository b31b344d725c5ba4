//! Static opcode → handler tables.
//!
//! Each extension declares one table per site kind at build time. The opcode
//! set of an extension is closed, so a lookup is a scan over a short slice.

/// Maps an extension's opcodes to handler variants.
#[derive(Debug)]
pub struct OpcodeTable<H: 'static> {
    entries: &'static [(u32, H)],
}

impl<H: 'static> OpcodeTable<H> {
    pub const fn new(entries: &'static [(u32, H)]) -> Self {
        Self { entries }
    }

    pub fn get(&self, opcode: u32) -> Option<&'static H> {
        self.entries
            .iter()
            .find(|(op, _)| *op == opcode)
            .map(|(_, handler)| handler)
    }
}
