//! Reversible entropy coding of transformed text

mod codec;

pub use codec::{decode, encode, CodecError};
