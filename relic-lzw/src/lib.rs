//! # Relic LZW
//!
//! A configurable LZW codec for the dictionary-coder dialects found in
//! legacy file formats. Rather than targeting one format, the codec is
//! parameterized along every axis the historical encoders disagree on:
//!
//! - **Bit order**: MSB-first or LSB-first codeword packing
//! - **Codeword widths**: any starting width from 2 to 32 bits, growing to a
//!   configurable maximum as the dictionary fills
//! - **Reserved codewords**: configurable (or absent) end-of-stream and
//!   dictionary-reset codes, which may even share one value
//! - **Overflow policy**: freeze the dictionary, or reset it automatically
//!
//! Both directions are streaming pull filters (see
//! [`relic_core::filter::Filter`]); the slice helpers below cover the common
//! whole-buffer case.
//!
//! ## Example
//!
//! ```rust
//! use relic_lzw::{compress, decompress, LzwConfig};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//! let packed = compress(original, LzwConfig::CLASSIC).unwrap();
//! let unpacked = decompress(&packed, LzwConfig::CLASSIC).unwrap();
//! assert_eq!(unpacked, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod decoder;
mod dictionary;
mod encoder;

pub use config::LzwConfig;
pub use decoder::LzwDecoder;
pub use encoder::LzwEncoder;
pub use relic_core::bitstream::BitOrder;
pub use relic_core::error::{RelicError, Result};
pub use relic_core::filter::Filter;

/// Compress a byte slice under the given dialect.
///
/// # Example
///
/// ```rust
/// use relic_lzw::{compress, LzwConfig};
///
/// let packed = compress(b"aaaaaaaaaaaaaaaa", LzwConfig::CLASSIC).unwrap();
/// assert!(!packed.is_empty());
/// ```
pub fn compress(data: &[u8], config: LzwConfig) -> Result<Vec<u8>> {
    let mut encoder = LzwEncoder::new(data, config)?;
    let mut out = Vec::new();
    encoder.fill_to_end(&mut out)?;
    Ok(out)
}

/// Decompress a byte slice under the given dialect.
///
/// The codeword stream is self-terminating (either through the dialect's
/// end-of-stream codeword or by running out of input), so no expected size
/// is needed.
///
/// # Example
///
/// ```rust
/// use relic_lzw::{compress, decompress, LzwConfig};
///
/// let packed = compress(b"Hello hello hello.", LzwConfig::CLASSIC).unwrap();
/// let unpacked = decompress(&packed, LzwConfig::CLASSIC).unwrap();
/// assert_eq!(unpacked, b"Hello hello hello.");
/// ```
pub fn decompress(data: &[u8], config: LzwConfig) -> Result<Vec<u8>> {
    let mut decoder = LzwDecoder::new(data, config)?;
    let mut out = Vec::new();
    decoder.fill_to_end(&mut out)?;
    Ok(out)
}
