use crate::common::{
    bitstream::BitStream,
    metadata::{Mode, Version},
};

// Byte segment
//------------------------------------------------------------------------------

/// Input text re-encoded as a byte-mode segment.
///
/// Each char is expanded into 1-4 bytes following the UTF-8 bit layout with
/// strict `>` branch boundaries, so the exact boundary code points 0x80,
/// 0x800 and 0x10000 fall into the next shorter form. When the expansion
/// produces more bytes than there are chars, an EF BB BF byte order mark is
/// prepended so readers pick the right charset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteSegment {
    data: Vec<u8>,
}

impl ByteSegment {
    pub fn new(text: &str) -> Self {
        let mut data = Vec::with_capacity(text.len());
        for c in text.chars() {
            let code = c as u32;
            if code > 0x10000 {
                data.push(0xF0 | ((code & 0x1C0000) >> 18) as u8);
                data.push(0x80 | ((code & 0x3F000) >> 12) as u8);
                data.push(0x80 | ((code & 0xFC0) >> 6) as u8);
                data.push(0x80 | (code & 0x3F) as u8);
            } else if code > 0x800 {
                data.push(0xE0 | ((code & 0xF000) >> 12) as u8);
                data.push(0x80 | ((code & 0xFC0) >> 6) as u8);
                data.push(0x80 | (code & 0x3F) as u8);
            } else if code > 0x80 {
                data.push(0xC0 | ((code & 0x7C0) >> 6) as u8);
                data.push(0x80 | (code & 0x3F) as u8);
            } else {
                data.push(code as u8);
            }
        }

        if data.len() != text.chars().count() {
            data.splice(0..0, [0xEF, 0xBB, 0xBF]);
        }

        Self { data }
    }

    pub fn mode(&self) -> Mode {
        Mode::Byte
    }

    /// Byte count of the segment payload, BOM included.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Writes mode indicator, char count field and payload bytes.
    pub fn write(&self, out: &mut BitStream, version: Version) {
        out.push_bits(self.mode().indicator(), 4);
        out.push_bits(self.len(), self.mode().char_count_bits(version));
        for &b in &self.data {
            out.push_bits(b, 8);
        }
    }
}
