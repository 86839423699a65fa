use std::ops::Deref;

use crate::builder::Symbol;

// Mask pattern
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
pub struct MaskPattern(u8);

impl MaskPattern {
    pub fn new(pattern: u8) -> Self {
        debug_assert!(pattern < 8, "Invalid masking pattern");
        Self(pattern)
    }
}

impl Deref for MaskPattern {
    type Target = u8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// Mask functions over (row, column)
mod mask_functions {
    pub fn checkerboard(r: i16, c: i16) -> bool {
        (r + c) & 1 == 0
    }

    pub fn horizontal_lines(r: i16, _: i16) -> bool {
        r & 1 == 0
    }

    pub fn vertical_lines(_: i16, c: i16) -> bool {
        c % 3 == 0
    }

    pub fn diagonal_lines(r: i16, c: i16) -> bool {
        (r + c) % 3 == 0
    }

    pub fn large_checkerboard(r: i16, c: i16) -> bool {
        ((r >> 1) + (c / 3)) & 1 == 0
    }

    pub fn fields(r: i16, c: i16) -> bool {
        ((r * c) & 1) + ((r * c) % 3) == 0
    }

    pub fn diamonds(r: i16, c: i16) -> bool {
        (((r * c) & 1) + ((r * c) % 3)) & 1 == 0
    }

    pub fn meadow(r: i16, c: i16) -> bool {
        (((r * c) % 3) + ((r + c) & 1)) & 1 == 0
    }
}

impl MaskPattern {
    pub fn mask_function(self) -> fn(i16, i16) -> bool {
        match self.0 {
            0b000 => mask_functions::checkerboard,
            0b001 => mask_functions::horizontal_lines,
            0b010 => mask_functions::vertical_lines,
            0b011 => mask_functions::diagonal_lines,
            0b100 => mask_functions::large_checkerboard,
            0b101 => mask_functions::fields,
            0b110 => mask_functions::diamonds,
            0b111 => mask_functions::meadow,
            _ => unreachable!("Invalid masking pattern"),
        }
    }
}

// Penalty scoring
//------------------------------------------------------------------------------

/// Total penalty for a fully painted symbol.
///
/// Rules 1-3 are multiplied by the module count and rule 4 is folded in as
/// `2 * |100 * dark - 50 * area|`, which keeps the balance term in exact
/// integers. The scale factor is identical for all eight trial grids, so
/// the ordering and ties between masks are unchanged. The scaled sum can
/// pass u32::MAX on a saturated version-40 grid, hence the u64 total.
pub fn compute_total_penalty(symbol: &Symbol) -> u64 {
    let area = symbol.width() as u64 * symbol.width() as u64;
    let run_pen = compute_run_penalty(symbol);
    let blk_pen = compute_block_penalty(symbol);
    let fp_pen = compute_finder_pattern_penalty(symbol);
    let bal_pen = compute_balance_penalty(symbol);
    (run_pen + blk_pen + fp_pen) as u64 * area + bal_pen as u64
}

/// Rule 1: rows and columns with n >= 5 same-colored consecutive modules
/// score 3 + (n - 5) per run.
fn compute_run_penalty(symbol: &Symbol) -> u32 {
    let mut pen = 0;
    let w = symbol.width();
    for i in 0..w {
        pen += line_run_penalty((0..w).map(|j| symbol.dark_at(i, j)));
        pen += line_run_penalty((0..w).map(|j| symbol.dark_at(j, i)));
    }
    pen
}

fn line_run_penalty(line: impl Iterator<Item = bool>) -> u32 {
    let mut pen = 0;
    let mut run_color = None;
    let mut run_len = 0u32;
    for color in line {
        if run_color == Some(color) {
            run_len += 1;
        } else {
            if run_len >= 5 {
                pen += 3 + (run_len - 5);
            }
            run_color = Some(color);
            run_len = 1;
        }
    }
    if run_len >= 5 {
        pen += 3 + (run_len - 5);
    }
    pen
}

/// Rule 2: every uniform 2x2 block scores 3.
fn compute_block_penalty(symbol: &Symbol) -> u32 {
    let mut pen = 0;
    let w = symbol.width();
    for r in 0..w - 1 {
        for c in 0..w - 1 {
            let clr = symbol.dark_at(r, c);
            if clr == symbol.dark_at(r + 1, c)
                && clr == symbol.dark_at(r, c + 1)
                && clr == symbol.dark_at(r + 1, c + 1)
            {
                pen += 3;
            }
        }
    }
    pen
}

/// Rule 3: every 1011101 window, row- or column-wise, scores 40.
fn compute_finder_pattern_penalty(symbol: &Symbol) -> u32 {
    const PATTERN: [bool; 7] = [true, false, true, true, true, false, true];
    let mut pen = 0;
    let w = symbol.width();
    for i in 0..w {
        for j in 0..w - 6 {
            if (0..7).all(|k| symbol.dark_at(i, j + k) == PATTERN[k as usize]) {
                pen += 40;
            }
            if (0..7).all(|k| symbol.dark_at(j + k, i) == PATTERN[k as usize]) {
                pen += 40;
            }
        }
    }
    pen
}

/// Rule 4, pre-scaled by the module count: `2 * |100 * dark - 50 * area|`.
fn compute_balance_penalty(symbol: &Symbol) -> u32 {
    let area = (symbol.width() * symbol.width()) as u32;
    let dark = symbol.count_dark_modules() as u32;
    2 * (100 * dark).abs_diff(50 * area)
}

#[cfg(test)]
mod mask_tests {

    use test_case::test_case;

    use super::{line_run_penalty, MaskPattern};

    #[test_case(0, 0, 0, true; "checkerboard origin")]
    #[test_case(0, 1, 2, false; "checkerboard odd sum")]
    #[test_case(1, 2, 0, true; "horizontal even row")]
    #[test_case(1, 3, 0, false; "horizontal odd row")]
    #[test_case(2, 0, 6, true; "vertical third column")]
    #[test_case(2, 0, 7, false; "vertical off column")]
    #[test_case(3, 2, 4, true; "diagonal multiple of three")]
    #[test_case(4, 0, 2, true; "large checkerboard first band")]
    #[test_case(4, 0, 3, false; "large checkerboard second band")]
    #[test_case(5, 0, 5, true; "fields zero row")]
    #[test_case(5, 3, 5, false; "fields odd product")]
    #[test_case(6, 2, 3, true; "diamonds even sum")]
    #[test_case(7, 0, 0, true; "meadow origin")]
    #[test_case(7, 1, 1, false; "meadow odd total")]
    fn test_mask_function(pattern: u8, r: i16, c: i16, expected: bool) {
        let f = MaskPattern::new(pattern).mask_function();
        assert_eq!(f(r, c), expected);
    }

    #[test]
    fn test_total_penalty_on_saturated_grid() {
        use crate::builder::{Module, Symbol};
        use crate::common::metadata::{ECLevel, Version};

        // All-dark version 40: rules 1-3 sum to 154878, and scaled by the
        // 31329-module area the total passes u32::MAX
        let mut sym = Symbol::new(Version::new(40).unwrap(), ECLevel::L);
        let w = sym.width();
        for r in 0..w {
            for c in 0..w {
                sym.set(r, c, Module::Dark);
            }
        }
        let pen = super::compute_total_penalty(&sym);
        assert!(pen > u32::MAX as u64);
        assert_eq!(pen, 154_878 * 31_329 + 3_132_900);
    }

    #[test]
    fn test_run_penalty_scores() {
        // No run reaches 5
        assert_eq!(line_run_penalty([true, true, false, true].into_iter()), 0);
        // Exactly 5
        assert_eq!(line_run_penalty([true; 5].into_iter()), 3);
        // 7 in a row: 3 + 2
        assert_eq!(line_run_penalty([false; 7].into_iter()), 5);
        // Two separate runs
        let line = [true, true, true, true, true, false, false, false, false, false, false];
        assert_eq!(line_run_penalty(line.into_iter()), 3 + 4);
    }
}
