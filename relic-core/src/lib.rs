//! # Relic Core
//!
//! Shared infrastructure for the Relic legacy-codec crates:
//!
//! - [`bitstream`]: bit-level I/O with selectable bit order
//! - [`filter`]: the streaming pull-filter contract
//! - [`error`]: error types
//!
//! The codec layers sit on top:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ CLI / host application                       │
//! ├──────────────────────────────────────────────┤
//! │ Codec: dictionary coder state machines       │
//! ├──────────────────────────────────────────────┤
//! │ BitStream (this crate)                       │
//! │   BitReader/BitWriter, Filter, errors        │
//! └──────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod error;
pub mod filter;

// Re-exports for convenience
pub use bitstream::{BitOrder, BitReader, BitWriter};
pub use error::{RelicError, Result};
pub use filter::Filter;
