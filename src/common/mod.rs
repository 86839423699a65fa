pub mod bitstream;
pub mod block;
pub mod error;
pub mod gf;
pub mod mask;
pub mod metadata;
pub mod poly;
pub mod segment;

pub use bitstream::*;
pub use block::*;
pub use error::*;
pub use mask::*;
pub use metadata::*;
pub use poly::*;
pub use segment::*;
