//! The encoding state machine.
//!
//! The encoder pulls raw bytes from its source and maintains the longest
//! dictionary match for the input seen so far. When a byte fails to extend
//! the match, the match's codeword is emitted, the extended string becomes a
//! new dictionary entry, and the byte starts the next match.

use crate::config::LzwConfig;
use crate::dictionary::Dictionary;
use relic_core::bitstream::BitWriter;
use relic_core::error::Result;
use relic_core::filter::Filter;
use std::io::{ErrorKind, Read};

/// Streaming LZW compressor over a byte source.
#[derive(Debug)]
pub struct LzwEncoder<R: Read> {
    src: R,
    bits: BitWriter<Vec<u8>>,
    dict: Dictionary,
    config: LzwConfig,
    /// Code of the current longest match; `None` before the first byte of a
    /// match.
    match_code: Option<u32>,
    /// Drain position within the bit writer's output vector.
    staged_pos: usize,
    finished: bool,
}

impl<R: Read> LzwEncoder<R> {
    /// Create an encoder pulling raw bytes from `source`.
    pub fn new(source: R, config: LzwConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            src: source,
            bits: BitWriter::new(Vec::new(), config.bit_order),
            dict: Dictionary::new(config),
            config,
            match_code: None,
            staged_pos: 0,
            finished: false,
        })
    }

    /// Consume the encoder and return the underlying byte source.
    pub fn into_inner(self) -> R {
        self.src
    }

    fn emit(&mut self, code: u32) -> Result<()> {
        log::trace!("codeword {:#x} ({} bits)", code, self.dict.width());
        self.bits.write_bits(code, self.dict.width())
    }

    /// Feed one input byte through the match state machine.
    fn push_byte(&mut self, byte: u8) -> Result<()> {
        let prefix = match self.match_code {
            None => {
                self.match_code = Some(byte as u32);
                return Ok(());
            }
            Some(code) => code,
        };

        if let Some(code) = self.dict.find(prefix, byte) {
            self.match_code = Some(code);
            return Ok(());
        }

        self.emit(prefix)?;
        if self.dict.append(prefix, byte).is_some()
            && self.config.reset_on_full
            && self.dict.is_full()
        {
            // Reset right after the append that filled the table, so the
            // reset point is the same deterministic function of the entry
            // stream that the decoder tracks.
            log::debug!("dictionary overflow, resetting");
            if self.config.reset_code != 0 {
                self.emit(self.config.reset_code)?;
            }
            if self.config.align_on_reset {
                self.bits.align_to_byte()?;
            }
            self.dict.reset();
        }
        self.match_code = Some(byte as u32);
        Ok(())
    }

    /// Emit the pending match and the stream trailer.
    fn finish(&mut self) -> Result<()> {
        if let Some(code) = self.match_code.take() {
            self.emit(code)?;
        }
        if self.config.eof_code_valid {
            self.emit(self.config.eof_code)?;
        }
        self.bits.flush()?;
        self.finished = true;
        Ok(())
    }

    /// Pull one chunk of raw input and run it through the state machine.
    fn pump(&mut self) -> Result<()> {
        let mut chunk = [0u8; 4096];
        let n = loop {
            match self.src.read(&mut chunk) {
                Ok(n) => break n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        };
        if n == 0 {
            return self.finish();
        }
        for &byte in &chunk[..n] {
            self.push_byte(byte)?;
        }
        Ok(())
    }

    fn drained(&self) -> bool {
        self.staged_pos >= self.bits.get_ref().len()
    }
}

impl<R: Read> Filter for LzwEncoder<R> {
    fn fill(&mut self, dst: &mut [u8]) -> Result<(usize, bool)> {
        let mut written = 0;
        loop {
            {
                let buf = self.bits.get_mut();
                let available = buf.len() - self.staged_pos;
                let n = available.min(dst.len() - written);
                dst[written..written + n]
                    .copy_from_slice(&buf[self.staged_pos..self.staged_pos + n]);
                self.staged_pos += n;
                written += n;
                if self.staged_pos >= buf.len() {
                    buf.clear();
                    self.staged_pos = 0;
                }
            }

            if self.finished || written == dst.len() {
                return Ok((written, self.finished && self.drained()));
            }
            self.pump()?;
        }
    }

    fn is_finished(&self) -> bool {
        self.finished && self.drained()
    }
}
