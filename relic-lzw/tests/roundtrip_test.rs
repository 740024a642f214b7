//! Round-trip coverage across the dialect axes.
//!
//! Every configuration the encoder accepts must decode back to the original
//! input when the decoder is configured identically.

use relic_core::bitstream::BitOrder;
use relic_lzw::{LzwConfig, compress, decompress};

fn assert_roundtrip(data: &[u8], config: LzwConfig) {
    let packed = compress(data, config).expect("compression failed");
    let unpacked = decompress(&packed, config).expect("decompression failed");
    assert_eq!(
        unpacked, data,
        "round trip mismatch for {} bytes under {:?}",
        data.len(),
        config
    );
}

fn dialects() -> Vec<LzwConfig> {
    vec![
        LzwConfig::CLASSIC,
        LzwConfig::COMPRESS16,
        // Classic widths, LSB packing.
        LzwConfig {
            bit_order: BitOrder::Lsb,
            ..LzwConfig::CLASSIC
        },
        // Fixed-width dialect.
        LzwConfig::new(9, 9),
        // Wide initial codewords, no end-of-stream codeword.
        LzwConfig {
            eof_code_valid: false,
            ..LzwConfig::new(10, 14)
        },
        // Implicit overflow resets on a small table.
        LzwConfig {
            reset_on_full: true,
            ..LzwConfig::new(9, 9)
        },
        // Implicit overflow resets, byte-aligned after each reset.
        LzwConfig {
            reset_on_full: true,
            align_on_reset: true,
            ..LzwConfig::new(9, 9)
        },
        // Explicit overflow resets, byte-aligned after each reset.
        LzwConfig {
            first_code: 0x102,
            reset_code: 0x101,
            reset_code_valid: true,
            reset_on_full: true,
            align_on_reset: true,
            ..LzwConfig::new(9, 10)
        },
        // Reset and end-of-stream sharing one codeword.
        LzwConfig {
            reset_code: 0x100,
            reset_code_valid: true,
            reset_on_full: true,
            ..LzwConfig::new(9, 10)
        },
    ]
}

fn patterns() -> Vec<Vec<u8>> {
    let mut patterns = vec![
        Vec::new(),
        b"A".to_vec(),
        vec![b'X'; 2000],
        b"ABABABABABABABABABABABAB".to_vec(),
        b"I am Sam. Sam I am. I do not like this Sam I am.\n".repeat(20),
        (0..=255u8).collect::<Vec<u8>>().repeat(4),
    ];
    // Reproducible noise; fills small tables several times over.
    let mut seed: u64 = 0x9E3779B97F4A7C15;
    let mut noise = Vec::with_capacity(8 * 1024);
    for _ in 0..8 * 1024 {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        noise.push((seed >> 32) as u8);
    }
    patterns.push(noise);
    patterns
}

#[test]
fn roundtrip_every_dialect() {
    for config in dialects() {
        config.validate().expect("test dialect must be valid");
        for data in &patterns() {
            assert_roundtrip(data, config);
        }
    }
}

#[test]
fn roundtrip_kwkwk_boundary() {
    // "ababa..." forces the decoder through the codeword-equals-next-code
    // case at several table sizes.
    for len in [3, 5, 9, 255, 256, 257, 1023] {
        let data: Vec<u8> = (0..len).map(|i| b"ab"[i % 2]).collect();
        assert_roundtrip(&data, LzwConfig::CLASSIC);
        assert_roundtrip(&data, LzwConfig::COMPRESS16);
    }
}

#[test]
fn roundtrip_run_lengths_around_width_bumps() {
    // Runs sized to land the dictionary exactly on, just before, and just
    // after each width boundary.
    for len in [254, 255, 256, 511, 512, 513, 4095, 4096, 4097] {
        let data = vec![b'q'; len];
        assert_roundtrip(&data, LzwConfig::CLASSIC);
        assert_roundtrip(
            &data,
            LzwConfig {
                bit_order: BitOrder::Lsb,
                ..LzwConfig::CLASSIC
            },
        );
    }
}

#[test]
fn decoder_output_is_deterministic() {
    let data = b"The quick brown fox jumps over the lazy dog. ".repeat(40);
    let packed = compress(&data, LzwConfig::CLASSIC).unwrap();
    let a = decompress(&packed, LzwConfig::CLASSIC).unwrap();
    let b = decompress(&packed, LzwConfig::CLASSIC).unwrap();
    assert_eq!(a, b);
}
