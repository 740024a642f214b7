//! The decoding state machine.
//!
//! The decoder pulls codewords from a [`BitReader`], expands each one through
//! the dictionary, and grows the dictionary by one entry per codeword after
//! the first. The classic KwKwK corner (a codeword equal to the next unused
//! code) is resolved as the previous string plus its own first byte.

use crate::config::LzwConfig;
use crate::dictionary::Dictionary;
use relic_core::bitstream::BitReader;
use relic_core::error::{RelicError, Result};
use relic_core::filter::Filter;
use std::io::Read;

/// Streaming LZW decompressor over a byte source.
#[derive(Debug)]
pub struct LzwDecoder<R: Read> {
    bits: BitReader<R>,
    dict: Dictionary,
    config: LzwConfig,
    /// Previous data codeword; `None` while awaiting the first codeword of a
    /// stream or of a fresh dictionary after a reset.
    prev_code: Option<u32>,
    /// Decoded bytes not yet handed to the caller.
    staged: Vec<u8>,
    staged_pos: usize,
    finished: bool,
    poisoned: bool,
}

impl<R: Read> LzwDecoder<R> {
    /// Create a decoder reading codewords from `source`.
    pub fn new(source: R, config: LzwConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            bits: BitReader::new(source, config.bit_order),
            dict: Dictionary::new(config),
            config,
            prev_code: None,
            staged: Vec::new(),
            staged_pos: 0,
            finished: false,
            poisoned: false,
        })
    }

    /// Consume the decoder and return the underlying byte source.
    pub fn into_inner(self) -> R {
        self.bits.into_inner()
    }

    fn reset_stream(&mut self) {
        self.dict.reset();
        self.prev_code = None;
        if self.config.align_on_reset {
            self.bits.align_to_byte();
        }
    }

    /// Grow the dictionary by `(prefix, byte)`. Returns `true` when this
    /// triggered an implicit overflow reset, in which case the stream state
    /// is back at its initial point.
    fn grow(&mut self, prefix: u32, byte: u8) -> bool {
        if self.dict.append(prefix, byte).is_none() {
            // Table frozen; the encoder stopped growing at the same point.
            return false;
        }
        // An auto-resetting encoder resets right after the append that fills
        // its table. We run one append behind it, so mirror the reset one
        // entry early.
        if self.config.silent_overflow_reset()
            && self.dict.next_code() as u64 + 1 == self.config.code_limit()
        {
            log::debug!("implicit dictionary reset on overflow");
            self.reset_stream();
            return true;
        }
        false
    }

    /// Read and process one codeword, staging any decoded bytes.
    fn step(&mut self) -> Result<()> {
        let code_pos = self.bits.bits_read();
        let code = match self.bits.read_bits(self.dict.width()) {
            Ok(code) => code,
            Err(RelicError::UnexpectedEof { bit_position }) => {
                // Running out of input is a clean termination unless an
                // end-of-stream codeword was required and data was pending.
                if self.config.eof_code_valid && self.prev_code.is_some() {
                    return Err(RelicError::corrupt(
                        bit_position,
                        "input ended before the end-of-stream codeword",
                    ));
                }
                self.finished = true;
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        log::trace!("codeword {:#x} ({} bits)", code, self.dict.width());

        if self.config.eof_code_valid && code == self.config.eof_code {
            let shares_reset =
                self.config.honors_reset() && self.config.reset_code == self.config.eof_code;
            if shares_reset && self.prev_code.is_some() {
                // Shared codeword: a reset while data is pending, the end of
                // the stream when the dictionary is already fresh.
                self.reset_stream();
            } else {
                self.finished = true;
            }
            return Ok(());
        }
        if self.config.honors_reset() && code == self.config.reset_code {
            self.reset_stream();
            return Ok(());
        }

        let prev = match self.prev_code {
            Some(prev) => prev,
            None => {
                // First codeword of a fresh dictionary: nothing to extend,
                // so it can only be a root.
                if code >= 256 {
                    return Err(RelicError::corrupt(
                        code_pos,
                        format!("first codeword {:#x} is not a root", code),
                    ));
                }
                self.dict.expand_into(code, &mut self.staged);
                self.prev_code = Some(code);
                return Ok(());
            }
        };

        let was_reset = if self.dict.is_defined(code) {
            let first = self.dict.expand_into(code, &mut self.staged);
            self.grow(prev, first)
        } else if code == self.dict.next_code() {
            // KwKwK: the entry the encoder assigned one step ahead of us.
            let first = self.dict.expand_into(prev, &mut self.staged);
            self.staged.push(first);
            self.grow(prev, first)
        } else {
            return Err(RelicError::InvalidCode {
                code,
                bit_position: code_pos,
            });
        };
        self.prev_code = if was_reset { None } else { Some(code) };
        Ok(())
    }

    fn drained(&self) -> bool {
        self.staged_pos >= self.staged.len()
    }
}

impl<R: Read> Filter for LzwDecoder<R> {
    fn fill(&mut self, dst: &mut [u8]) -> Result<(usize, bool)> {
        if self.poisoned {
            return Err(RelicError::corrupt(
                self.bits.bits_read(),
                "decoder halted by an earlier error",
            ));
        }

        let mut written = 0;
        loop {
            let available = self.staged.len() - self.staged_pos;
            let n = available.min(dst.len() - written);
            dst[written..written + n]
                .copy_from_slice(&self.staged[self.staged_pos..self.staged_pos + n]);
            self.staged_pos += n;
            written += n;
            if self.drained() {
                self.staged.clear();
                self.staged_pos = 0;
            }

            if self.finished || written == dst.len() {
                return Ok((written, self.finished && self.drained()));
            }
            if let Err(e) = self.step() {
                self.poisoned = true;
                self.staged.clear();
                self.staged_pos = 0;
                return Err(e);
            }
        }
    }

    fn is_finished(&self) -> bool {
        self.finished && self.drained()
    }
}
