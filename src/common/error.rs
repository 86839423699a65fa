use std::fmt::{Debug, Display, Error, Formatter};

// Error
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum QRError {
    // Galois field
    InvalidFieldOperand,

    // Static tables
    TableLookupFailure,

    // Codeword assembly
    CapacityOverflow,

    // Symbol grid
    OutOfBounds,
    UnresolvedModule,
}

impl Display for QRError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let msg = match *self {
            Self::InvalidFieldOperand => "No logarithm of zero in GF(256)",
            Self::TableLookupFailure => "No table entry for version and EC level",
            Self::CapacityOverflow => "Data exceeds symbol capacity",
            Self::OutOfBounds => "Module coordinates outside grid",
            Self::UnresolvedModule => "Module queried before generation completed",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for QRError {}

pub type QRResult<T> = Result<T, QRError>;
