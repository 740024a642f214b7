//! The streaming pull-filter contract.
//!
//! Encoders and decoders are both pull filters: the caller hands them a
//! destination buffer and the filter fills it with whatever output is
//! currently available, pulling from its own byte source as needed. Partial
//! fills are normal; callers must not assume any alignment between input
//! and output sizes.

use crate::error::Result;

/// A byte-stream transformer driven by pull calls.
pub trait Filter {
    /// Fill `dst` with as many output bytes as are currently available.
    ///
    /// Returns the number of bytes written and whether the output stream has
    /// ended. Once `(_, true)` has been returned, further calls return
    /// `(0, true)`.
    fn fill(&mut self, dst: &mut [u8]) -> Result<(usize, bool)>;

    /// Whether the filter has delivered its entire output stream.
    fn is_finished(&self) -> bool;

    /// Drive [`Filter::fill`] until end-of-stream, appending everything to
    /// `out`. Returns the number of bytes produced.
    fn fill_to_end(&mut self, out: &mut Vec<u8>) -> Result<u64> {
        let mut chunk = [0u8; 4096];
        let mut total = 0u64;
        loop {
            let (n, eos) = self.fill(&mut chunk)?;
            out.extend_from_slice(&chunk[..n]);
            total += n as u64;
            if eos {
                return Ok(total);
            }
        }
    }
}
