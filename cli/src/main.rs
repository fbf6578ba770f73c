use clap::{Parser, Subcommand};
use hound::WavSpec;
use std::fs::File;
use std::path::PathBuf;

use stackmat_core::{SignalEncoder, StackmatTimer, Status};

#[derive(Parser)]
#[command(name = "stackmat")]
#[command(about = "Decode Stackmat timer state from audio recordings")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a WAV recording of the timer line and print its state
    Decode {
        /// Input WAV file
        #[arg(value_name = "INPUT.WAV")]
        input: PathBuf,

        /// Samples per decode call, mimicking an audio callback
        #[arg(short, long, default_value = "8192")]
        buffer_size: usize,
    },

    /// Generate a synthetic timer recording for a fixed readout
    Encode {
        /// Status character, one of "IA SLRC"
        #[arg(value_name = "STATUS")]
        status: char,

        /// Five display digits, e.g. 13028 for 1:30.28
        #[arg(value_name = "DIGITS")]
        digits: String,

        /// Output WAV file
        #[arg(value_name = "OUTPUT.WAV")]
        output: PathBuf,

        /// Sample rate of the generated file
        #[arg(short, long, default_value = "44100")]
        sample_rate: u32,

        /// How many times to repeat the frame
        #[arg(short, long, default_value = "10")]
        repeat: usize,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Decode { input, buffer_size } => decode_command(&input, buffer_size)?,
        Commands::Encode { status, digits, output, sample_rate, repeat } => {
            encode_command(status, &digits, &output, sample_rate, repeat)?
        }
    }

    Ok(())
}

fn decode_command(input_path: &PathBuf, buffer_size: usize) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::open(input_path)?;
    let mut reader = hound::WavReader::new(file)?;

    let spec = reader.spec();
    println!(
        "Read WAV: {} Hz, {} channels, {} bits",
        spec.sample_rate, spec.channels, spec.bits_per_sample
    );

    let samples = read_samples(&mut reader)?;
    println!("Extracted {} samples", samples.len());

    let mut timer = StackmatTimer::new(spec.sample_rate as f32)?;
    timer.start();

    let mut frames = 0usize;
    for chunk in samples.chunks(buffer_size) {
        if let Some(state) = timer.process_buffer(chunk) {
            frames += 1;
            println!(
                "{}  running={} reset={} left={} right={}",
                state.time_as_string(),
                state.is_running(),
                state.is_reset(),
                state.is_left_hand_pressed(),
                state.is_right_hand_pressed()
            );
        }
    }

    println!("Decoded {} frames from {}", frames, input_path.display());
    Ok(())
}

fn encode_command(
    status_char: char,
    digits_str: &str,
    output_path: &PathBuf,
    sample_rate: u32,
    repeat: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let status = Status::from_byte(status_char as u8)
        .ok_or_else(|| format!("unknown status character {:?}", status_char))?;
    let digits = parse_digits(digits_str)?;

    let encoder = SignalEncoder::new(sample_rate as f32)?;
    let frame = encoder.encode(status, digits);

    let mut samples = Vec::with_capacity(frame.len() * repeat);
    for _ in 0..repeat {
        samples.extend_from_slice(&frame);
    }
    println!("Encoded {} repetitions, {} audio samples", repeat, samples.len());

    // 16-bit PCM output
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let file = File::create(output_path)?;
    let mut writer = hound::WavWriter::new(file, spec)?;
    for sample in samples {
        let clamped = sample.max(-1.0).min(1.0);
        writer.write_sample((clamped * 32767.0) as i16)?;
    }
    writer.finalize()?;

    println!("Wrote {}", output_path.display());
    Ok(())
}

fn parse_digits(digits_str: &str) -> Result<[u8; 5], Box<dyn std::error::Error>> {
    let bytes = digits_str.as_bytes();
    if bytes.len() != 5 || !bytes.iter().all(|b| b.is_ascii_digit()) {
        return Err(format!("expected exactly five digits, got {:?}", digits_str).into());
    }
    let mut digits = [0u8; 5];
    for (i, &b) in bytes.iter().enumerate() {
        digits[i] = b - b'0';
    }
    Ok(digits)
}

fn read_samples<R: std::io::Read>(
    reader: &mut hound::WavReader<R>,
) -> Result<Vec<f32>, Box<dyn std::error::Error>> {
    let spec = reader.spec();

    // Mix down to the first channel; the timer line is mono anyway
    let all: Vec<f32> = match (spec.sample_format, spec.bits_per_sample) {
        (hound::SampleFormat::Int, 16) => {
            let ints: Result<Vec<i16>, _> = reader.samples::<i16>().collect();
            ints?.into_iter().map(|s| s as f32 / 32768.0).collect()
        }
        (hound::SampleFormat::Float, 32) => {
            let floats: Result<Vec<f32>, _> = reader.samples::<f32>().collect();
            floats?
        }
        (format, bits) => {
            return Err(format!("unsupported WAV format: {:?} {} bits", format, bits).into());
        }
    };

    Ok(all
        .into_iter()
        .step_by(spec.channels as usize)
        .collect())
}
