//! Golden-model CLI for the hardware FFT flow.
//!
//! Subcommands mirror the verification workflow: generate stimulus
//! (`geninit`, `twiddle`), run the bit-exact model (`compute`) or the
//! floating-point oracle (`reference`), reorder buffers for a bit-reversed
//! hardware input stage (`bitrev`), and compare golden vs DUT output
//! (`check`). Comparison mismatches are printed reports, not process
//! failures; only hard errors (bad files, bad lengths) exit nonzero.

use fft_golden::compare::{self, FLOAT_TOLERANCE};
use fft_golden::{bitrev, mem, oracle, signal, DitFft, TwiddleTable};
use std::error::Error;
use std::path::PathBuf;
use tracing::{info, warn};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    let Some(command) = args.get(1) else {
        print_usage();
        return Err("missing command".into());
    };

    match command.as_str() {
        "compute" => cmd_compute(&args),
        "reference" => cmd_reference(&args),
        "check" => cmd_check(&args),
        "twiddle" => cmd_twiddle(&args),
        "geninit" => cmd_geninit(&args),
        "bitrev" => cmd_bitrev(&args),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            Err(format!("unknown command '{}'", other).into())
        }
    }
}

fn print_usage() {
    eprintln!(
        "fft-golden: bit-exact Q1.15 radix-2 DIT FFT golden model

Usage: fft-golden <command> [options]

Commands:
  compute    --in_mem FILE [--out_mem FILE] [--n N]
             Run the fixed-point DIT FFT on a .mem file.
  reference  --in_mem FILE [--out_mem FILE] [--n N]
             Run the floating-point oracle FFT, quantized on write.
  check      --ref FILE --dut FILE [--tolerance T]
             Compare two .mem files and print an error report.
  twiddle    --n N [--frac_bits F] [--out FILE]
             Generate the N/2-entry twiddle ROM.
  geninit    [--pattern impulse|sine|noise] [--n N] [--k K] [--amp A]
             [--seed S] [--out FILE]
             Generate a stimulus .mem file.
  bitrev     --in_mem FILE --out_mem FILE
             Reorder a .mem file into bit-reversed index order."
    );
}

/// Looks up `--name value` style options; any of `names` selects the value.
fn arg_value(args: &[String], names: &[&str]) -> Option<String> {
    args.iter()
        .position(|a| names.contains(&a.as_str()))
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn required_path(args: &[String], names: &[&str]) -> Result<PathBuf, Box<dyn Error>> {
    arg_value(args, names)
        .map(PathBuf::from)
        .ok_or_else(|| format!("missing required option {}", names[0]).into())
}

fn parse_opt<T: std::str::FromStr>(
    args: &[String],
    names: &[&str],
    default: T,
) -> Result<T, Box<dyn Error>> {
    match arg_value(args, names) {
        None => Ok(default),
        Some(text) => text
            .parse()
            .map_err(|_| format!("invalid value '{}' for {}", text, names[0]).into()),
    }
}

/// The `--n` override never wins over the file: disagreement is a warning.
fn check_length_override(args: &[String], file_len: usize) {
    if let Some(text) = arg_value(args, &["--n", "--N"]) {
        match text.parse::<usize>() {
            Ok(n) if n != file_len => {
                warn!(
                    requested = n,
                    file = file_len,
                    "requested length disagrees with file, using file length"
                );
            }
            Ok(_) => {}
            Err(_) => warn!(value = %text, "ignoring unparseable --n"),
        }
    }
}

fn cmd_compute(args: &[String]) -> Result<(), Box<dyn Error>> {
    let in_mem = required_path(args, &["--in_mem"])?;
    let out_mem = arg_value(args, &["--out_mem", "--out_ref_mem"])
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("fft_dit_out.mem"));

    info!(path = %in_mem.display(), "loading input memory");
    let mut buffer = mem::load_samples(&in_mem)?;
    info!(samples = buffer.len(), "loaded");
    check_length_override(args, buffer.len());

    let fft = DitFft::new(buffer.len())?;
    info!(n = fft.n(), stages = fft.num_stages(), "running DIT FFT");
    fft.process(&mut buffer)?;

    info!(path = %out_mem.display(), "writing DIT FFT result");
    mem::save_samples(&out_mem, &buffer)?;
    Ok(())
}

fn cmd_reference(args: &[String]) -> Result<(), Box<dyn Error>> {
    let in_mem = required_path(args, &["--in_mem"])?;
    let out_mem = arg_value(args, &["--out_mem", "--out_ref_mem"])
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("fft_ref_out.mem"));

    info!(path = %in_mem.display(), "loading input memory");
    let input = mem::load_complex64(&in_mem)?;
    info!(samples = input.len(), "loaded");
    check_length_override(args, input.len());

    info!(n = input.len(), "running floating-point reference FFT");
    let spectrum = oracle::dft(&input);

    info!(path = %out_mem.display(), "writing quantized reference result");
    mem::save_complex64(&out_mem, &spectrum)?;
    Ok(())
}

fn cmd_check(args: &[String]) -> Result<(), Box<dyn Error>> {
    let ref_path = required_path(args, &["--ref"])?;
    let dut_path = required_path(args, &["--dut"])?;
    let tolerance = parse_opt(args, &["--tolerance"], FLOAT_TOLERANCE)?;

    info!(path = %ref_path.display(), "loading reference");
    let reference = mem::load_complex64(&ref_path)?;
    info!(path = %dut_path.display(), "loading DUT output");
    let dut = mem::load_complex64(&dut_path)?;

    let report = compare::compare(&reference, &dut, tolerance);
    println!("{}", report);
    Ok(())
}

fn cmd_twiddle(args: &[String]) -> Result<(), Box<dyn Error>> {
    let n: usize = arg_value(args, &["--n", "--N"])
        .ok_or("missing required option --n")?
        .parse()
        .map_err(|_| "invalid value for --n")?;
    let frac_bits: u32 = parse_opt(args, &["--frac_bits"], 15)?;
    let out = arg_value(args, &["--out", "--outfile"])
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("twiddle_rom.mem"));

    info!(n, frac_bits, "generating twiddle ROM");
    let table = TwiddleTable::with_frac_bits(n, frac_bits)?;
    info!(entries = table.len(), path = %out.display(), "writing twiddle ROM");
    mem::write_words(&out, &table.to_words())?;
    Ok(())
}

fn cmd_geninit(args: &[String]) -> Result<(), Box<dyn Error>> {
    let pattern = arg_value(args, &["--pattern"]).unwrap_or_else(|| "impulse".to_string());
    let n: usize = parse_opt(args, &["--n", "--N"], 1024)?;
    let out = arg_value(args, &["--out"])
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("ram_init.mem"));

    let data = match pattern.as_str() {
        "impulse" => {
            info!(n, "pattern: impulse (x[0] = 1.0, others 0)");
            signal::impulse(n)
        }
        "sine" => {
            let k: usize = parse_opt(args, &["--k"], 5)?;
            let amp: f64 = parse_opt(args, &["--amp"], 0.8)?;
            info!(n, k, amp, "pattern: sine");
            signal::sine(n, k, amp)
        }
        "noise" => {
            let seed: u64 = parse_opt(args, &["--seed"], signal::DEFAULT_NOISE_SEED)?;
            info!(n, seed, "pattern: uniform noise in [-0.5, 0.5)");
            signal::noise(n, seed)
        }
        other => return Err(format!("unknown pattern '{}'", other).into()),
    };

    info!(path = %out.display(), "writing stimulus");
    mem::save_complex64(&out, &data)?;
    Ok(())
}

fn cmd_bitrev(args: &[String]) -> Result<(), Box<dyn Error>> {
    let in_mem = required_path(args, &["--in_mem"])?;
    let out_mem = required_path(args, &["--out_mem"])?;

    let words = mem::read_words(&in_mem)?;
    let perm = bitrev::bit_reverse_indices(words.len())?;
    let reordered = bitrev::apply(&words, &perm);
    mem::write_words(&out_mem, &reordered)?;
    info!(
        from = %in_mem.display(),
        to = %out_mem.display(),
        samples = words.len(),
        "bit-reversed"
    );
    Ok(())
}
