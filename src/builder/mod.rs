mod symbol;

pub use symbol::Symbol;
pub(crate) use symbol::Module;

use crate::common::{
    compute_total_penalty, generator, rs_blocks, BitStream, ByteSegment, ECBlock, ECLevel,
    MaskPattern, Polynomial, QRError, QRResult, Version, PADDING_CODEWORDS,
};

// Builder
//------------------------------------------------------------------------------

/// Assembles a QR symbol from text.
///
/// Version, EC level and mask pattern can be pinned; anything left unset is
/// resolved during [`build`](Self::build): the smallest fitting version and
/// the mask with the lowest penalty score.
pub struct QRBuilder<'a> {
    text: &'a str,
    version: Option<Version>,
    ec_level: ECLevel,
    mask: Option<MaskPattern>,
}

impl<'a> QRBuilder<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, version: None, ec_level: ECLevel::M, mask: None }
    }

    pub fn text(&mut self, text: &'a str) -> &mut Self {
        self.text = text;
        self
    }

    pub fn version(&mut self, version: Version) -> &mut Self {
        self.version = Some(version);
        self
    }

    pub fn unset_version(&mut self) -> &mut Self {
        self.version = None;
        self
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = ec_level;
        self
    }

    pub fn mask(&mut self, mask: MaskPattern) -> &mut Self {
        self.mask = Some(mask);
        self
    }
}

impl QRBuilder<'_> {
    pub fn build(&self) -> QRResult<Symbol> {
        let version = match self.version {
            Some(v) => v,
            None => Self::fit_version(self.text, self.ec_level)?,
        };
        log::debug!("Version {}, EC level {:?}", *version, self.ec_level);

        let codewords = Self::assemble_codewords(self.text, version, self.ec_level)?;
        log::debug!("Assembled {} codewords", codewords.len());

        let mask = match self.mask {
            Some(m) => m,
            None => Self::find_best_mask(version, self.ec_level, &codewords),
        };
        log::debug!("Mask pattern {}", *mask);

        Ok(Self::paint(version, self.ec_level, &codewords, mask, false))
    }

    /// Smallest version whose byte capacity fits the text at the given EC
    /// level. Non-ASCII text is charged three extra bytes for the byte
    /// order mark its segment will carry.
    fn fit_version(text: &str, ec_level: ECLevel) -> QRResult<Version> {
        let length = text.len() + if text.is_ascii() { 0 } else { 3 };
        for v in 1..=40 {
            let version = Version::new(v)?;
            if length <= version.capacity(ec_level) {
                return Ok(version);
            }
        }
        Err(QRError::CapacityOverflow)
    }

    /// Encodes the text segment, pads the stream to the version's data
    /// capacity and returns the fully interleaved codeword sequence.
    fn assemble_codewords(text: &str, version: Version, ec_level: ECLevel) -> QRResult<Vec<u8>> {
        let blocks = rs_blocks(version, ec_level)?;
        let data_capacity: usize = blocks.iter().map(|b| b.data).sum();

        let mut buffer = BitStream::new();
        ByteSegment::new(text).write(&mut buffer, version);

        if buffer.len() > data_capacity * 8 {
            return Err(QRError::CapacityOverflow);
        }

        // Terminator, then pad to the byte boundary, then alternating pad
        // codewords up to capacity
        if buffer.len() + 4 <= data_capacity * 8 {
            buffer.push_bits(0u8, 4);
        }
        while buffer.len() & 7 != 0 {
            buffer.push(false);
        }
        let mut pad = 0;
        while buffer.len() < data_capacity * 8 {
            buffer.push_bits(PADDING_CODEWORDS[pad & 1], 8);
            pad += 1;
        }

        Self::interleave(buffer.data(), &blocks)
    }

    /// Splits the data codewords per RS block, computes each block's ECC
    /// and interleaves both sequences position by position across blocks.
    fn interleave(data: &[u8], blocks: &[ECBlock]) -> QRResult<Vec<u8>> {
        let mut data_blocks = Vec::with_capacity(blocks.len());
        let mut ec_blocks = Vec::with_capacity(blocks.len());
        let mut offset = 0;
        for block in blocks {
            let chunk = &data[offset..offset + block.data];
            ec_blocks.push(Self::ec_codewords(chunk, block.ec_len())?);
            data_blocks.push(chunk);
            offset += block.data;
        }

        let total: usize = blocks.iter().map(|b| b.total).sum();
        let mut out = Vec::with_capacity(total);
        let max_data = data_blocks.iter().map(|b| b.len()).max().unwrap_or(0);
        for i in 0..max_data {
            out.extend(data_blocks.iter().filter_map(|b| b.get(i)));
        }
        let max_ec = ec_blocks.iter().map(|b| b.len()).max().unwrap_or(0);
        for i in 0..max_ec {
            out.extend(ec_blocks.iter().filter_map(|b| b.get(i)));
        }
        Ok(out)
    }

    /// ECC for one block: remainder of the data polynomial times x^ec_len
    /// under the generator, left-padded with zeros to `ec_len`.
    fn ec_codewords(data: &[u8], ec_len: usize) -> QRResult<Vec<u8>> {
        let gen = generator(ec_len)?;
        let rem = Polynomial::new(data, ec_len).rem(&gen)?;

        debug_assert!(rem.len() <= ec_len, "Remainder exceeds generator degree");

        let mut ecc = vec![0u8; ec_len];
        let offset = ec_len - rem.len();
        for i in 0..rem.len() {
            ecc[offset + i] = rem.get(i);
        }
        Ok(ecc)
    }

    /// Tries all eight masks on full trial grids and keeps the lowest
    /// penalty; the lowest pattern index wins ties.
    fn find_best_mask(version: Version, ec_level: ECLevel, codewords: &[u8]) -> MaskPattern {
        let mut best = MaskPattern::new(0);
        let mut min_penalty = u64::MAX;
        for m in 0..8 {
            let pattern = MaskPattern::new(m);
            let trial = Self::paint(version, ec_level, codewords, pattern, true);
            let penalty = compute_total_penalty(&trial);
            log::trace!("Mask {m} penalty {penalty}");
            if penalty < min_penalty {
                min_penalty = penalty;
                best = pattern;
            }
        }
        best
    }

    /// Paints a complete grid. Trial grids reserve the format and version
    /// cells with light placeholders; the final grid carries the real bits.
    fn paint(
        version: Version,
        ec_level: ECLevel,
        codewords: &[u8],
        mask: MaskPattern,
        test: bool,
    ) -> Symbol {
        let mut symbol = Symbol::new(version, ec_level);
        symbol.draw_function_patterns();
        symbol.draw_format_info(test, mask);
        symbol.draw_version_info(test);
        symbol.map_codewords(codewords, mask);
        symbol
    }
}
