//! Codec configuration for the LZW dialect family.
//!
//! Legacy file formats each speak their own LZW dialect: bit order, codeword
//! widths, and the numeric positions (and very existence) of the reserved
//! end-of-stream and dictionary-reset codewords all vary. A [`LzwConfig`]
//! captures one dialect; it is fixed at construction and every other codec
//! behavior is deterministic in it plus the input bytes.

use relic_core::bitstream::BitOrder;
use relic_core::error::{RelicError, Result};

/// LZW dialect parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LzwConfig {
    /// Codeword width in bits at stream start and after any reset.
    pub initial_width: u8,
    /// Maximum codeword width; dictionary growth stops once the next entry
    /// would require a wider code.
    pub max_width: u8,
    /// Code assigned to the first dictionary entry beyond the roots.
    /// Entries are assigned ascending codes from here.
    pub first_code: u32,
    /// Codeword that signals end-of-stream. Only honored when
    /// `eof_code_valid` is set; may coincide with `reset_code`.
    pub eof_code: u32,
    /// Codeword that clears the dictionary. `0` means the dialect has no
    /// reset codeword.
    pub reset_code: u32,
    /// Bit packing order of the underlying codeword stream.
    pub bit_order: BitOrder,
    /// Honor `eof_code`; otherwise its value is ordinary data.
    pub eof_code_valid: bool,
    /// Honor `reset_code`; otherwise its value is ordinary data.
    pub reset_code_valid: bool,
    /// Encoder resets automatically when the dictionary overflows. Without
    /// this the dictionary freezes and coding continues on existing entries.
    pub reset_on_full: bool,
    /// Re-align the bitstream to a byte boundary after each reset.
    pub align_on_reset: bool,
}

impl LzwConfig {
    /// The most common dialect among the supported formats: 9 to 12 bit
    /// codewords, MSB-first packing, end-of-stream at `0x100`, first
    /// dictionary entry at `0x101`, frozen dictionary on overflow.
    pub const CLASSIC: Self = Self {
        initial_width: 9,
        max_width: 12,
        first_code: 0x101,
        eof_code: 0x100,
        reset_code: 0,
        bit_order: BitOrder::Msb,
        eof_code_valid: true,
        reset_code_valid: false,
        reset_on_full: false,
        align_on_reset: false,
    };

    /// In the style of 16-bit `compress(1)` streams: 9 to 16 bit codewords,
    /// LSB-first packing, no end-of-stream codeword, dictionary reset at
    /// `0x100` with automatic reset on overflow.
    pub const COMPRESS16: Self = Self {
        initial_width: 9,
        max_width: 16,
        first_code: 0x101,
        eof_code: 0,
        reset_code: 0x100,
        bit_order: BitOrder::Lsb,
        eof_code_valid: false,
        reset_code_valid: true,
        reset_on_full: true,
        align_on_reset: false,
    };

    /// A classic-style dialect with the given width range.
    pub fn new(initial_width: u8, max_width: u8) -> Self {
        Self {
            initial_width,
            max_width,
            ..Self::CLASSIC
        }
    }

    /// Whether the decoder should treat `reset_code` as a reset. This is the
    /// case when the flag says so, and also when the encoder is configured to
    /// signal its overflow resets through it.
    pub fn honors_reset(&self) -> bool {
        self.reset_code != 0 && (self.reset_code_valid || self.reset_on_full)
    }

    /// Whether overflow resets happen without any codeword on the wire.
    pub fn silent_overflow_reset(&self) -> bool {
        self.reset_on_full && self.reset_code == 0
    }

    /// One past the largest assignable code: `2^max_width`.
    pub fn code_limit(&self) -> u64 {
        1u64 << self.max_width
    }

    /// Check the construction-time invariants.
    pub fn validate(&self) -> Result<()> {
        if self.initial_width < 2 || self.initial_width > 32 {
            return Err(RelicError::invalid_config(format!(
                "initial width {} outside 2..=32",
                self.initial_width
            )));
        }
        if self.max_width < self.initial_width || self.max_width > 32 {
            return Err(RelicError::invalid_config(format!(
                "max width {} outside {}..=32",
                self.max_width, self.initial_width
            )));
        }
        if self.first_code < 256 {
            return Err(RelicError::invalid_config(format!(
                "first data code {:#x} overlaps the root range",
                self.first_code
            )));
        }
        let initial_limit = 1u64 << self.initial_width;
        if self.first_code as u64 > initial_limit {
            return Err(RelicError::invalid_config(format!(
                "initial width {} cannot address first code {:#x}",
                self.initial_width, self.first_code
            )));
        }
        if self.eof_code_valid && (self.eof_code < 256 || self.eof_code >= self.first_code) {
            return Err(RelicError::invalid_config(format!(
                "end-of-stream code {:#x} outside the reserved range 0x100..{:#x}",
                self.eof_code, self.first_code
            )));
        }
        if self.honors_reset() && (self.reset_code < 256 || self.reset_code >= self.first_code) {
            return Err(RelicError::invalid_config(format!(
                "reset code {:#x} outside the reserved range 0x100..{:#x}",
                self.reset_code, self.first_code
            )));
        }
        if self.silent_overflow_reset() && self.code_limit() - self.first_code as u64 == 1 {
            // With exactly one assignable entry the decoder cannot observe
            // the append stream that marks the implicit reset point.
            return Err(RelicError::invalid_config(
                "implicit overflow reset needs a dictionary of at least two entries".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_preset() {
        let config = LzwConfig::CLASSIC;
        config.validate().unwrap();
        assert_eq!(config.initial_width, 9);
        assert_eq!(config.max_width, 12);
        assert_eq!(config.first_code, 0x101);
        assert_eq!(config.code_limit(), 4096);
        assert!(config.eof_code_valid);
        assert!(!config.honors_reset());
    }

    #[test]
    fn test_compress16_preset() {
        let config = LzwConfig::COMPRESS16;
        config.validate().unwrap();
        assert_eq!(config.bit_order, BitOrder::Lsb);
        assert!(config.honors_reset());
        assert!(!config.silent_overflow_reset());
    }

    #[test]
    fn test_silent_overflow_reset() {
        let config = LzwConfig {
            reset_on_full: true,
            ..LzwConfig::CLASSIC
        };
        config.validate().unwrap();
        assert!(config.silent_overflow_reset());
        assert!(!config.honors_reset());
    }

    #[test]
    fn test_rejects_inverted_widths() {
        let config = LzwConfig::new(12, 9);
        assert!(matches!(
            config.validate(),
            Err(RelicError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_rejects_first_code_in_root_range() {
        let config = LzwConfig {
            first_code: 0x80,
            ..LzwConfig::CLASSIC
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_unaddressable_first_code() {
        let config = LzwConfig {
            initial_width: 9,
            max_width: 12,
            first_code: 0x201,
            ..LzwConfig::CLASSIC
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_reserved_code_at_or_past_first_code() {
        let config = LzwConfig {
            eof_code: 0x101,
            ..LzwConfig::CLASSIC
        };
        assert!(config.validate().is_err());

        let config = LzwConfig {
            reset_code: 0x102,
            reset_code_valid: true,
            ..LzwConfig::CLASSIC
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ignored_reserved_code_is_not_validated() {
        // A reset code nobody honors is inert data and places no constraint.
        let config = LzwConfig {
            reset_code: 0x7FFF,
            reset_code_valid: false,
            ..LzwConfig::CLASSIC
        };
        config.validate().unwrap();
    }
}
