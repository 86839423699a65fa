use crate::common::{
    format_info, ECLevel, MaskPattern, QRError, QRResult, Version, FORMAT_INFO_BIT_LEN,
    VERSION_INFO_BIT_LEN,
};

// Module
//------------------------------------------------------------------------------

/// Cell state of the symbol grid. `Empty` marks cells no drawing pass has
/// claimed yet; the codeword mapper only writes into empty cells.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Module {
    Empty,
    Light,
    Dark,
}

// Symbol grid
//------------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Symbol {
    grid: Box<[Module]>,
    w: i16,
    ver: Version,
    ecl: ECLevel,
    mask: Option<MaskPattern>,
}

impl Symbol {
    pub(crate) fn new(ver: Version, ecl: ECLevel) -> Self {
        let w = ver.width();
        Self { grid: vec![Module::Empty; w * w].into_boxed_slice(), w: w as i16, ver, ecl, mask: None }
    }

    pub fn version(&self) -> Version {
        self.ver
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ecl
    }

    /// Mask pattern the painted grid carries; `None` until mapping.
    pub fn mask_pattern(&self) -> Option<MaskPattern> {
        self.mask
    }

    /// Module count per side.
    pub fn width(&self) -> i16 {
        self.w
    }

    /// Resolved color of the module at (`r`, `c`).
    ///
    /// Fails with [`QRError::OutOfBounds`] outside the grid and with
    /// [`QRError::UnresolvedModule`] if the cell was never painted.
    pub fn is_dark(&self, r: i16, c: i16) -> QRResult<bool> {
        if r < 0 || self.w <= r || c < 0 || self.w <= c {
            return Err(QRError::OutOfBounds);
        }
        match self.grid[(r * self.w + c) as usize] {
            Module::Empty => Err(QRError::UnresolvedModule),
            Module::Light => Ok(false),
            Module::Dark => Ok(true),
        }
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.iter().filter(|&&m| m == Module::Dark).count()
    }

    fn coord_to_index(&self, r: i16, c: i16) -> usize {
        debug_assert!(0 <= r && r < self.w, "Row out of bounds: {r}");
        debug_assert!(0 <= c && c < self.w, "Column out of bounds: {c}");
        (r * self.w + c) as usize
    }

    pub(crate) fn get(&self, r: i16, c: i16) -> Module {
        self.grid[self.coord_to_index(r, c)]
    }

    pub(crate) fn set(&mut self, r: i16, c: i16, module: Module) {
        let index = self.coord_to_index(r, c);
        self.grid[index] = module;
    }

    /// Color query for penalty scoring; every cell must already be painted.
    pub(crate) fn dark_at(&self, r: i16, c: i16) -> bool {
        let m = self.get(r, c);
        debug_assert!(m != Module::Empty, "Unresolved module at ({r}, {c})");
        m == Module::Dark
    }

    #[cfg(test)]
    pub(crate) fn to_debug_str(&self) -> String {
        let w = self.w;
        let mut res = String::with_capacity((w * (w + 1)) as usize);
        res.push('\n');
        for i in 0..w {
            for j in 0..w {
                res.push(match self.get(i, j) {
                    Module::Empty => '.',
                    Module::Light => '-',
                    Module::Dark => '#',
                });
            }
            res.push('\n');
        }
        res
    }
}

// Function patterns
//------------------------------------------------------------------------------

impl Symbol {
    /// Draws finder, alignment and timing patterns, in that order. Later
    /// passes skip cells earlier passes have claimed, so alignment centers
    /// inside a finder vanish and timing dots under an alignment pattern
    /// keep the pattern's color.
    pub(crate) fn draw_function_patterns(&mut self) {
        self.draw_finder_pattern_at(0, 0);
        self.draw_finder_pattern_at(self.w - 7, 0);
        self.draw_finder_pattern_at(0, self.w - 7);
        self.draw_alignment_patterns();
        self.draw_timing_patterns();
    }

    /// 7x7 finder with its one-module light separator, clipped at the grid
    /// edge. `row`/`col` address the pattern's top-left corner.
    fn draw_finder_pattern_at(&mut self, row: i16, col: i16) {
        for r in -1..=7 {
            if row + r <= -1 || self.w <= row + r {
                continue;
            }
            for c in -1..=7 {
                if col + c <= -1 || self.w <= col + c {
                    continue;
                }
                let dark = ((0..=6).contains(&r) && (c == 0 || c == 6))
                    || ((0..=6).contains(&c) && (r == 0 || r == 6))
                    || ((2..=4).contains(&r) && (2..=4).contains(&c));
                self.set(row + r, col + c, if dark { Module::Dark } else { Module::Light });
            }
        }
    }

    /// 5x5 alignment patterns centered on every row/column pair from the
    /// version's position list, skipping centers a finder already covers.
    fn draw_alignment_patterns(&mut self) {
        let positions = self.ver.alignment_positions();
        for &row in positions {
            for &col in positions {
                if self.get(row, col) != Module::Empty {
                    continue;
                }
                for r in -2..=2i16 {
                    for c in -2..=2i16 {
                        let dark = r == -2 || r == 2 || c == -2 || c == 2 || (r == 0 && c == 0);
                        self.set(row + r, col + c, if dark { Module::Dark } else { Module::Light });
                    }
                }
            }
        }
    }

    /// Row and column 6 between the finders, dark on even indices. Cells an
    /// alignment pattern already painted are left untouched.
    fn draw_timing_patterns(&mut self) {
        for i in 8..self.w - 8 {
            if self.get(i, 6) == Module::Empty {
                self.set(i, 6, if i & 1 == 0 { Module::Dark } else { Module::Light });
            }
            if self.get(6, i) == Module::Empty {
                self.set(6, i, if i & 1 == 0 { Module::Dark } else { Module::Light });
            }
        }
    }
}

// Format and version info
//------------------------------------------------------------------------------

impl Symbol {
    /// Paints the two 15-bit format strips. During mask trials (`test`) the
    /// strips are light placeholders so the cells are reserved but carry no
    /// bits; the always-dark module above the bottom-left finder is dark in
    /// trials too, so penalty scoring sees its final color.
    pub(crate) fn draw_format_info(&mut self, test: bool, mask_pattern: MaskPattern) {
        let w = self.w;
        let bits = format_info(self.ecl, *mask_pattern);

        for i in 0..FORMAT_INFO_BIT_LEN as i16 {
            let m = if !test && (bits >> i) & 1 == 1 { Module::Dark } else { Module::Light };

            // strip along the top-left finder's right edge, bottom-up
            let (r, c) = match i {
                0..=5 => (i, 8),
                6..=7 => (i + 1, 8),
                _ => (w - 15 + i, 8),
            };
            self.set(r, c, m);

            // mirrored strip under the top edge, right to left
            let (r, c) = match i {
                0..=7 => (8, w - 1 - i),
                8 => (8, 15 - i),
                _ => (8, 14 - i),
            };
            self.set(r, c, m);
        }

        self.set(w - 8, 8, Module::Dark);
    }

    /// Two mirrored 6x3 version info blocks, placed for version >= 7. Light
    /// placeholders during mask trials.
    pub(crate) fn draw_version_info(&mut self, test: bool) {
        if *self.ver < 7 {
            return;
        }
        let w = self.w;
        let bits = self.ver.info();
        for i in 0..VERSION_INFO_BIT_LEN as i16 {
            let m = if !test && (bits >> i) & 1 == 1 { Module::Dark } else { Module::Light };
            self.set(i / 3, i % 3 + w - 11, m);
            self.set(i % 3 + w - 11, i / 3, m);
        }
    }
}

// Codeword mapping
//------------------------------------------------------------------------------

impl Symbol {
    /// Zig-zag maps the interleaved codeword stream into the remaining empty
    /// cells: column pairs right to left skipping the timing column, scan
    /// direction alternating per pair, each bit XORed with the mask
    /// predicate. Cells past the end of the stream read as light before the
    /// mask is applied.
    pub(crate) fn map_codewords(&mut self, data: &[u8], mask_pattern: MaskPattern) {
        self.mask = Some(mask_pattern);
        let mask = mask_pattern.mask_function();
        let w = self.w;
        let mut inc: i16 = -1;
        let mut row = w - 1;
        let mut bit_index = 7i8;
        let mut byte_index = 0usize;

        let mut col = w - 1;
        while col > 0 {
            if col == 6 {
                col -= 1;
            }
            loop {
                for c in 0..2i16 {
                    if self.get(row, col - c) != Module::Empty {
                        continue;
                    }
                    let mut dark = false;
                    if byte_index < data.len() {
                        dark = (data[byte_index] >> bit_index) & 1 == 1;
                    }
                    if mask(row, col - c) {
                        dark = !dark;
                    }
                    self.set(row, col - c, if dark { Module::Dark } else { Module::Light });

                    bit_index -= 1;
                    if bit_index == -1 {
                        byte_index += 1;
                        bit_index = 7;
                    }
                }
                row += inc;
                if row < 0 || w <= row {
                    row -= inc;
                    inc = -inc;
                    break;
                }
            }
            col -= 2;
        }
    }
}
