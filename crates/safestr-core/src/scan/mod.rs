//! Scan kernels.
//!
//! Kernels operate on [`CheckedStr`](crate::CheckedStr) values only and never
//! report violations; the public operations validate first and then delegate
//! here. Every loop is bounded by the declared maximum of the buffer it
//! walks, independently of where the terminator sits.

mod classify;
mod span;
mod substring;


pub use classify::{
    all_match, is_alphanumeric_byte, is_digit_byte, is_hex_byte, is_lowercase_byte,
    is_uppercase_byte,
};
pub use span::{complement_span, first_of};
pub use substring::{find, AsciiCaseInsensitive, ByteMatch, Exact};
