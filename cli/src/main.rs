mod format;
mod wav;

use clap::{Parser, Subcommand};
use format::{write_messages, OutputFormat};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use wav::{write_mono_pcm16, WavLoader};
use wavemsg_core::{Extractor, ToneEncoder};

#[derive(Parser)]
#[command(name = "wavemsg")]
#[command(about = "Recover checksummed messages from two-tone interval encoded audio")]
struct Cli {
    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode messages from a WAV audio file
    Decode {
        /// Input WAV file
        #[arg(value_name = "INPUT.WAV")]
        input: PathBuf,

        /// How to print the recovered messages
        #[arg(short, long, value_enum, default_value = "both")]
        format: OutputFormat,
    },

    /// Encode binary data to a WAV audio file
    Encode {
        /// Input binary file
        #[arg(value_name = "INPUT.BIN")]
        input: PathBuf,

        /// Output WAV file
        #[arg(value_name = "OUTPUT.WAV")]
        output: PathBuf,

        /// Output sample rate in Hz
        #[arg(short, long, default_value = "44100")]
        sample_rate: u32,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = if cli.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Decode { input, format } => decode_command(&input, format)?,
        Commands::Encode {
            input,
            output,
            sample_rate,
        } => encode_command(&input, &output, sample_rate)?,
    }

    Ok(())
}

fn decode_command(
    input_path: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("Processing file {}...", input_path.display());

    let mut extractor = Extractor::new();
    let messages = extractor.run_file(input_path, &WavLoader)?;

    let invalid = messages.iter().filter(|m| !m.is_valid()).count();
    log::info!(
        "Recovered {} messages ({} with invalid checksum)",
        messages.len(),
        invalid
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_messages(&mut out, messages, format)?;
    out.flush()?;

    Ok(())
}

fn encode_command(
    input_path: &Path,
    output_path: &Path,
    sample_rate: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    // Read input binary file
    let data = std::fs::read(input_path)?;
    log::info!("Read {} bytes from {}", data.len(), input_path.display());

    let encoder = ToneEncoder::new(sample_rate)?;
    let samples = encoder.encode(&data);
    log::info!("Encoded to {} audio samples at {} Hz", samples.len(), sample_rate);

    write_mono_pcm16(output_path, &samples, sample_rate)?;
    log::info!("Wrote {}", output_path.display());

    Ok(())
}
