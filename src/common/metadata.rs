use super::error::{QRError, QRResult};

// Version
//------------------------------------------------------------------------------

/// Symbol size class 1..=40; module count per side is version * 4 + 17.
#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
pub struct Version(usize);

impl Version {
    pub fn new(version: usize) -> QRResult<Self> {
        if !(1..=40).contains(&version) {
            return Err(QRError::TableLookupFailure);
        }
        Ok(Self(version))
    }

    pub const fn width(self) -> usize {
        self.0 * 4 + 17
    }

    /// Byte-mode character capacity at the given EC level.
    pub fn capacity(self, ec_level: ECLevel) -> usize {
        CAPACITY_TABLE[self.0 - 1][ec_level.table_index()]
    }

    /// Alignment pattern center positions; all row/column pairs drawn from
    /// this list host a pattern, including the diagonal.
    pub fn alignment_positions(self) -> &'static [i16] {
        PATTERN_POSITION_TABLE[self.0 - 1]
    }

    /// BCH(18,6)-protected version information, placed for version >= 7.
    pub fn info(self) -> u32 {
        let data = self.0 as u32;
        let mut d = data << 12;
        while bch_digit(d) >= bch_digit(G18) {
            d ^= G18 << (bch_digit(d) - bch_digit(G18));
        }
        (data << 12) | d
    }
}

impl std::ops::Deref for Version {
    type Target = usize;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
pub enum ECLevel {
    L,
    M,
    Q,
    H,
}

impl ECLevel {
    /// Column order of the capacity and RS block tables.
    pub fn table_index(self) -> usize {
        match self {
            Self::L => 0,
            Self::M => 1,
            Self::Q => 2,
            Self::H => 3,
        }
    }

    /// Two-bit code carried in the format information.
    pub fn format_code(self) -> u32 {
        match self {
            Self::M => 0,
            Self::L => 1,
            Self::H => 2,
            Self::Q => 3,
        }
    }
}

// Mode
//------------------------------------------------------------------------------

/// Closed set of data encoding modes. Only `Byte` is ever produced by this
/// crate; the rest exist so the indicator and length-field tables stay
/// complete.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Mode {
    Numeric = 0b0001,
    Alphanumeric = 0b0010,
    Byte = 0b0100,
    Kanji = 0b1000,
}

impl Mode {
    pub fn indicator(self) -> u8 {
        self as u8
    }

    /// Bit width of the character count field, by version band.
    pub fn char_count_bits(self, version: Version) -> usize {
        match *version {
            1..=9 => match self {
                Self::Numeric => 10,
                Self::Alphanumeric => 9,
                Self::Byte => 8,
                Self::Kanji => 8,
            },
            10..=26 => match self {
                Self::Numeric => 12,
                Self::Alphanumeric => 11,
                Self::Byte => 16,
                Self::Kanji => 10,
            },
            27..=40 => match self {
                Self::Numeric => 14,
                Self::Alphanumeric => 13,
                Self::Byte => 16,
                Self::Kanji => 12,
            },
            _ => unreachable!("Version is validated on construction"),
        }
    }
}

// Format information
//------------------------------------------------------------------------------

pub const FORMAT_INFO_BIT_LEN: usize = 15;
pub const VERSION_INFO_BIT_LEN: usize = 18;

const G15: u32 = (1 << 10) | (1 << 8) | (1 << 5) | (1 << 4) | (1 << 2) | (1 << 1) | 1;
const G18: u32 =
    (1 << 12) | (1 << 11) | (1 << 10) | (1 << 9) | (1 << 8) | (1 << 5) | (1 << 2) | 1;
const G15_MASK: u32 = (1 << 14) | (1 << 12) | (1 << 10) | (1 << 4) | (1 << 1);

fn bch_digit(mut data: u32) -> u32 {
    let mut digit = 0;
    while data != 0 {
        digit += 1;
        data >>= 1;
    }
    digit
}

/// BCH(15,5)-protected format information for an EC level and mask pattern.
pub fn format_info(ec_level: ECLevel, mask_pattern: u8) -> u32 {
    let data = (ec_level.format_code() << 3) | mask_pattern as u32;
    let mut d = data << 10;
    while bch_digit(d) >= bch_digit(G15) {
        d ^= G15 << (bch_digit(d) - bch_digit(G15));
    }
    ((data << 10) | d) ^ G15_MASK
}

// Padding codewords
//------------------------------------------------------------------------------

pub static PADDING_CODEWORDS: [u8; 2] = [0b1110_1100, 0b0001_0001];

// Capacity & position tables
//------------------------------------------------------------------------------

// Byte-mode character capacities, columns L, M, Q, H.
#[rustfmt::skip]
static CAPACITY_TABLE: [[usize; 4]; 40] = [
    [17,14,11,7],
    [32,26,20,14],
    [53,42,32,24],
    [78,62,46,34],
    [106,84,60,44],
    [134,106,74,58],
    [154,122,86,64],
    [192,152,108,84],
    [230,180,130,98],
    [271,213,151,119],
    [321,251,177,137],
    [367,287,203,155],
    [425,331,241,177],
    [458,362,258,194],
    [520,412,292,220],
    [586,450,322,250],
    [644,504,364,280],
    [718,560,394,310],
    [792,624,442,338],
    [858,666,482,382],
    [929,711,509,403],
    [1003,779,565,439],
    [1091,857,611,461],
    [1171,911,661,511],
    [1273,997,715,535],
    [1367,1059,751,593],
    [1465,1125,805,625],
    [1528,1190,868,658],
    [1628,1264,908,698],
    [1732,1370,982,742],
    [1840,1452,1030,790],
    [1952,1538,1112,842],
    [2068,1628,1168,898],
    [2188,1722,1228,958],
    [2303,1809,1283,983],
    [2431,1911,1351,1051],
    [2563,1989,1423,1093],
    [2699,2099,1499,1139],
    [2809,2213,1579,1219],
    [2953,2331,1663,1273],
];

#[rustfmt::skip]
static PATTERN_POSITION_TABLE: [&[i16]; 40] = [
    &[],
    &[6,18],
    &[6,22],
    &[6,26],
    &[6,30],
    &[6,34],
    &[6,22,38],
    &[6,24,42],
    &[6,26,46],
    &[6,28,50],
    &[6,30,54],
    &[6,32,58],
    &[6,34,62],
    &[6,26,46,66],
    &[6,26,48,70],
    &[6,26,50,74],
    &[6,30,54,78],
    &[6,30,56,82],
    &[6,30,58,86],
    &[6,34,62,90],
    &[6,28,50,72,94],
    &[6,26,50,74,98],
    &[6,30,54,78,102],
    &[6,28,54,80,106],
    &[6,32,58,84,110],
    &[6,30,58,86,114],
    &[6,34,62,90,118],
    &[6,26,50,74,98,122],
    &[6,30,54,78,102,126],
    &[6,26,52,78,104,130],
    &[6,30,56,82,108,134],
    &[6,34,60,86,112,138],
    &[6,30,58,86,114,142],
    &[6,34,62,90,118,146],
    &[6,30,54,78,102,126,150],
    &[6,24,50,76,102,128,154],
    &[6,28,54,80,106,132,158],
    &[6,32,58,84,110,136,162],
    &[6,26,54,82,110,138,166],
    &[6,30,58,86,114,142,170],
];

#[cfg(test)]
mod metadata_tests {
    use test_case::test_case;

    use super::{format_info, ECLevel, Mode, Version};
    use crate::common::error::QRError;

    #[test]
    fn test_version_bounds() {
        assert_eq!(Version::new(0), Err(QRError::TableLookupFailure));
        assert_eq!(Version::new(41), Err(QRError::TableLookupFailure));
        assert!(Version::new(1).is_ok());
        assert!(Version::new(40).is_ok());
    }

    #[test_case(1, 21)]
    #[test_case(7, 45)]
    #[test_case(40, 177)]
    fn test_width(version: usize, expected: usize) {
        assert_eq!(Version::new(version).unwrap().width(), expected);
    }

    #[test_case(1, ECLevel::L, 17)]
    #[test_case(1, ECLevel::H, 7)]
    #[test_case(10, ECLevel::M, 213)]
    #[test_case(40, ECLevel::L, 2953)]
    fn test_capacity(version: usize, ec_level: ECLevel, expected: usize) {
        assert_eq!(Version::new(version).unwrap().capacity(ec_level), expected);
    }

    #[test]
    fn test_alignment_positions() {
        assert!(Version::new(1).unwrap().alignment_positions().is_empty());
        assert_eq!(Version::new(2).unwrap().alignment_positions(), &[6, 18]);
        assert_eq!(Version::new(7).unwrap().alignment_positions(), &[6, 22, 38]);
        assert_eq!(
            Version::new(40).unwrap().alignment_positions(),
            &[6, 30, 58, 86, 114, 142, 170]
        );
    }

    #[test]
    fn test_format_codes() {
        assert_eq!(ECLevel::M.format_code(), 0);
        assert_eq!(ECLevel::L.format_code(), 1);
        assert_eq!(ECLevel::H.format_code(), 2);
        assert_eq!(ECLevel::Q.format_code(), 3);
    }

    #[test]
    fn test_format_info() {
        // Data 0 (level M, mask 0) leaves only the XOR mask.
        assert_eq!(format_info(ECLevel::M, 0), 0b101010000010010);
        // Known value from the ISO reference tables: level L, mask 4.
        assert_eq!(format_info(ECLevel::L, 4), 0b110011000101111);
    }

    #[test]
    fn test_version_info() {
        // Known values from the ISO reference tables.
        assert_eq!(Version::new(7).unwrap().info(), 0b000111110010010100);
        assert_eq!(Version::new(40).unwrap().info(), 0b101000110001101001);
    }

    #[test_case(Mode::Byte, 1, 8)]
    #[test_case(Mode::Byte, 9, 8)]
    #[test_case(Mode::Byte, 10, 16)]
    #[test_case(Mode::Byte, 27, 16)]
    #[test_case(Mode::Numeric, 1, 10)]
    #[test_case(Mode::Numeric, 26, 12)]
    #[test_case(Mode::Alphanumeric, 40, 13)]
    #[test_case(Mode::Kanji, 12, 10)]
    fn test_char_count_bits(mode: Mode, version: usize, expected: usize) {
        assert_eq!(mode.char_count_bits(Version::new(version).unwrap()), expected);
    }

    #[test]
    fn test_mode_indicators() {
        assert_eq!(Mode::Numeric.indicator(), 0b0001);
        assert_eq!(Mode::Alphanumeric.indicator(), 0b0010);
        assert_eq!(Mode::Byte.indicator(), 0b0100);
        assert_eq!(Mode::Kanji.indicator(), 0b1000);
    }
}
