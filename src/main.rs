use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use progfir::{ConfigFrame, FilterProfile, FirCore, read_wav_mono, save_wav};

#[derive(Parser, Debug)]
#[command(name = "progfir")]
#[command(about = "Filter a WAV file through the programmable fixed-point FIR core", long_about = None)]
struct Args {
    /// Input WAV file (first channel is used)
    #[arg(required_unless_present = "dump_taps")]
    input: Option<PathBuf>,

    /// Output WAV file (16-bit mono)
    #[arg(short, long, default_value = "filtered.wav")]
    output: PathBuf,

    /// Coefficient profile (TOML: coefficients, symmetry, clock_config)
    #[arg(short, long, conflicts_with = "frame")]
    profile: Option<PathBuf>,

    /// Raw wire frame as 14 hex digits: coeff[5]..coeff[0], mode byte
    #[arg(short = 'F', long)]
    frame: Option<String>,

    /// Print the effective 11-tap vector and exit
    #[arg(long)]
    dump_taps: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let frame = match (&args.profile, &args.frame) {
        (Some(path), None) => FilterProfile::from_toml_file(path)
            .with_context(|| format!("loading profile {}", path.display()))?
            .quantize()?,
        (None, Some(hex)) => ConfigFrame::from_hex(hex)?,
        _ => anyhow::bail!("either --profile or --frame is required"),
    };

    // Load through the bit-serial configuration path, same as the
    // external configuration tool would.
    let mut core = FirCore::new();
    core.shift_config_bytes(&frame.to_wire());
    log::info!(
        "installed {} frame, clock config {:#04x}",
        core.frame().symmetry,
        core.clock_config()
    );

    if args.dump_taps {
        for (i, tap) in core.frame().effective_taps().iter().enumerate() {
            println!("tap[{:2}] = {:4}  ({:+.6})", i, tap.raw(), tap.to_f64());
        }
        return Ok(());
    }

    let input = args.input.context("input WAV file required")?;
    let (mut samples, sample_rate) = read_wav_mono(&input)
        .with_context(|| format!("reading {}", input.display()))?;
    log::info!("read {} samples at {} Hz", samples.len(), sample_rate);

    core.process_buffer(&mut samples);

    save_wav(&args.output, &samples, sample_rate)
        .with_context(|| format!("writing {}", args.output.display()))?;
    println!(
        "Filtered {} samples ({} taps, group delay {}) -> {}",
        samples.len(),
        core.frame().effective_taps().len(),
        core.group_delay_samples(),
        args.output.display()
    );

    Ok(())
}
