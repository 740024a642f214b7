//! Relic CLI - compress and expand files under configurable LZW dialects.

use clap::{Args, Parser, Subcommand, ValueEnum};
use relic_lzw::{BitOrder, LzwConfig, compress, decompress};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "relic")]
#[command(version, about = "LZW codec for legacy file-format dialects")]
#[command(long_about = "
Relic compresses and expands raw LZW codeword streams as used by numerous
legacy file formats. Pick a preset and override individual dialect
parameters as needed.

Examples:
  relic compress -i data.raw -o data.lzw
  relic expand   -i data.lzw -o data.raw
  relic compress -i data.raw -o data.Z --preset compress16
  relic expand   -i level.dat -o level.raw --max-width 14 --no-eof --lsb
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file into a raw codeword stream
    #[command(alias = "c")]
    Compress {
        /// Input path
        #[arg(short, long)]
        input: PathBuf,

        /// Output path
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        dialect: DialectArgs,
    },

    /// Expand a raw codeword stream
    #[command(alias = "x")]
    Expand {
        /// Input path
        #[arg(short, long)]
        input: PathBuf,

        /// Output path
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        dialect: DialectArgs,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Preset {
    /// 9-12 bit codewords, MSB packing, end-of-stream at 0x100
    Classic,
    /// 9-16 bit codewords, LSB packing, reset at 0x100, auto reset on overflow
    Compress16,
}

#[derive(Args)]
struct DialectArgs {
    /// Dialect preset the overrides below start from
    #[arg(short, long, value_enum, default_value = "classic")]
    preset: Preset,

    /// Codeword width in bits at stream start
    #[arg(long)]
    initial_width: Option<u8>,

    /// Maximum codeword width in bits
    #[arg(long)]
    max_width: Option<u8>,

    /// Code of the first dictionary entry beyond the roots
    #[arg(long)]
    first_code: Option<u32>,

    /// End-of-stream codeword value
    #[arg(long)]
    eof_code: Option<u32>,

    /// Dictionary-reset codeword value (0 for none)
    #[arg(long)]
    reset_code: Option<u32>,

    /// Pack codewords least-significant-bit first
    #[arg(long, conflicts_with = "msb")]
    lsb: bool,

    /// Pack codewords most-significant-bit first
    #[arg(long)]
    msb: bool,

    /// Treat the end-of-stream codeword value as ordinary data
    #[arg(long)]
    no_eof: bool,

    /// Honor the dictionary-reset codeword
    #[arg(long)]
    reset_valid: bool,

    /// Reset the dictionary automatically when it overflows
    #[arg(long)]
    reset_on_full: bool,

    /// Re-align the stream to a byte boundary after each reset
    #[arg(long)]
    align_on_reset: bool,
}

impl DialectArgs {
    fn config(&self) -> LzwConfig {
        let mut config = match self.preset {
            Preset::Classic => LzwConfig::CLASSIC,
            Preset::Compress16 => LzwConfig::COMPRESS16,
        };
        if let Some(width) = self.initial_width {
            config.initial_width = width;
        }
        if let Some(width) = self.max_width {
            config.max_width = width;
        }
        if let Some(code) = self.first_code {
            config.first_code = code;
        }
        if let Some(code) = self.eof_code {
            config.eof_code = code;
            config.eof_code_valid = true;
        }
        if let Some(code) = self.reset_code {
            config.reset_code = code;
            config.reset_code_valid = code != 0;
        }
        if self.lsb {
            config.bit_order = BitOrder::Lsb;
        }
        if self.msb {
            config.bit_order = BitOrder::Msb;
        }
        if self.no_eof {
            config.eof_code_valid = false;
        }
        if self.reset_valid {
            config.reset_code_valid = true;
        }
        if self.reset_on_full {
            config.reset_on_full = true;
        }
        if self.align_on_reset {
            config.align_on_reset = true;
        }
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Compress {
            input,
            output,
            dialect,
        } => {
            let data = std::fs::read(&input)?;
            let packed = compress(&data, dialect.config())?;
            std::fs::write(&output, &packed)?;
            println!(
                "{}: {} bytes -> {} bytes",
                input.display(),
                data.len(),
                packed.len()
            );
        }
        Commands::Expand {
            input,
            output,
            dialect,
        } => {
            let data = std::fs::read(&input)?;
            let unpacked = decompress(&data, dialect.config())?;
            std::fs::write(&output, &unpacked)?;
            println!(
                "{}: {} bytes -> {} bytes",
                input.display(),
                data.len(),
                unpacked.len()
            );
        }
    }

    Ok(())
}
