//! # qrgen
//!
//! A Rust library for generating QR code symbols with Reed-Solomon error
//! correction. The output is a queryable module grid; rendering it to an
//! image or terminal is left to the caller.
//!
//! ## Features
//!
//! - **Byte-mode encoding**: arbitrary text, with a UTF-8 byte order mark
//!   prepended for non-ASCII input
//! - **Reed-Solomon Error Correction**: configurable levels (L, M, Q, H)
//!   over GF(256), with block interleaving
//! - **Automatic fitting**: smallest version (1-40) that holds the data,
//!   and the mask pattern with the lowest penalty score
//!
//! ## Quick Start
//!
//! ```rust
//! use qrgen::QRBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Simplest usage - provide only text, all other settings are
//! // automatically chosen
//! let symbol = QRBuilder::new("HELLO WORLD").build()?;
//!
//! for r in 0..symbol.width() {
//!     for c in 0..symbol.width() {
//!         print!("{}", if symbol.is_dark(r, c)? { "██" } else { "  " });
//!     }
//!     println!();
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Full Configuration
//!
//! ```rust
//! use qrgen::{ECLevel, MaskPattern, QRBuilder, Version};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let symbol = QRBuilder::new("Hello, World!")
//!     .version(Version::new(2)?)    // symbol size - otherwise the smallest fit
//!     .ec_level(ECLevel::M)         // error correction - defaults to ECLevel::M
//!     .mask(MaskPattern::new(3))    // mask - otherwise the best penalty score
//!     .build()?;
//!
//! assert_eq!(symbol.width(), 25);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Correction Levels
//! - **L (Low)**: ~7% error correction
//! - **M (Medium)**: ~15% error correction
//! - **Q (Quartile)**: ~25% error correction
//! - **H (High)**: ~30% error correction

#![allow(dead_code)]

pub mod builder;
pub(crate) mod common;

pub use builder::{QRBuilder, Symbol};
pub use common::{ECLevel, MaskPattern, Mode, QRError, QRResult, Version};
