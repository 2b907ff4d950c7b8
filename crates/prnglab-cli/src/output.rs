//! CLI output formatting.

use std::io::{self, Write};
use std::time::Duration;

use prnglab_core::{GeneratedNumber, Sequence, DEFAULT_RANDOM_PRECISION};
use tracing::debug;

/// Significant decimal digits an `f64` can carry.
const F64_DECIMAL_DIGITS: usize = 17;

/// Format `r_i` with `digits` decimals, or the default precision.
///
/// Digit-window records are exact: `r_i = x_i / 10^D`, so the decimals
/// are the seed's digits and wide windows print no `f64` noise.
#[must_use]
pub fn format_random(number: &GeneratedNumber) -> String {
    match number.digits.and_then(|d| usize::try_from(d).ok()) {
        Some(width) => {
            let seed = number.seed.to_string();
            if seed.len() <= width {
                format!("0.{seed:0>width$}")
            } else {
                format!("{:.*}", width.min(F64_DECIMAL_DIGITS), number.random)
            }
        }
        None => format!("{:.*}", DEFAULT_RANDOM_PRECISION, number.random),
    }
}

/// Format `x_i`, zero-padded to `digits` when the record has a width.
#[must_use]
pub fn format_seed(number: &GeneratedNumber) -> String {
    let seed = number.seed.to_string();
    match number.digits.and_then(|d| usize::try_from(d).ok()) {
        Some(width) => format!("{seed:0>width$}"),
        None => seed,
    }
}

/// Format a record as the `r_i = ...  x_i = ...` label pair.
#[must_use]
pub fn format_record(number: &GeneratedNumber) -> String {
    format!(
        "r_{i} = {random}    x_{i} = {seed}",
        i = number.index,
        random = format_random(number),
        seed = format_seed(number),
    )
}

/// Format a duration for display.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else {
        format!("{secs:.3}s")
    }
}

/// Write every record of `sequence`, one label pair per line.
///
/// # Errors
///
/// Returns an I/O error if writing fails.
pub fn write_records(out: &mut dyn Write, sequence: &Sequence) -> io::Result<()> {
    for number in sequence {
        writeln!(out, "{}", format_record(number))?;
    }
    Ok(())
}

/// Write `sequence` as pretty-printed JSON.
///
/// # Errors
///
/// Returns an I/O error if serialization or writing fails.
pub fn write_json(out: &mut dyn Write, sequence: &Sequence) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, sequence)?;
    writeln!(out)
}

/// Write a sequence to a file, as JSON or as label pairs.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, sequence: &Sequence, json: bool) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    if json {
        write_json(&mut file, sequence)?;
    } else {
        write_records(&mut file, sequence)?;
    }
    file.flush()?;
    debug!(path, records = sequence.len(), json, "sequence written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use prnglab_core::{generate, LinearCongruential, MiddleSquare};

    fn record(seed: u32, normalizer: u32, digits: Option<u32>) -> GeneratedNumber {
        GeneratedNumber::new(1, BigUint::from(seed), &BigUint::from(normalizer), digits)
    }

    #[test]
    fn format_duration_units() {
        assert!(format_duration(Duration::from_nanos(500)).ends_with("µs"));
        assert!(format_duration(Duration::from_millis(42)).ends_with("ms"));
        assert_eq!(format_duration(Duration::from_secs(2)), "2.000s");
    }

    #[test]
    fn random_uses_digit_precision() {
        assert_eq!(format_random(&record(5227, 10_000, Some(4))), "0.5227");
    }

    #[test]
    fn wide_window_random_is_exact() {
        let seed: BigUint = "1234567890123456789012345678901234567890".parse().unwrap();
        let number = GeneratedNumber::new(1, seed, &BigUint::from(10u32).pow(40), Some(40));
        assert_eq!(
            format_random(&number),
            "0.1234567890123456789012345678901234567890"
        );

        let number = GeneratedNumber::new(1, BigUint::from(42u32), &BigUint::from(10u32).pow(40), Some(40));
        assert_eq!(format_random(&number), format!("0.{:0>40}", 42));
    }

    #[test]
    fn random_defaults_to_six_places() {
        assert_eq!(format_random(&record(8, 15, None)), "0.533333");
    }

    #[test]
    fn seed_is_zero_padded() {
        assert_eq!(format_seed(&record(261, 10_000, Some(4))), "0261");
        assert_eq!(format_seed(&record(261, 1000, None)), "261");
    }

    #[test]
    fn record_label_pair() {
        assert_eq!(
            format_record(&record(176, 10_000, Some(4))),
            "r_1 = 0.0176    x_1 = 0176"
        );
    }

    #[test]
    fn records_one_per_line() {
        let seq = generate(MiddleSquare::new(1234u32, 3)).unwrap();
        let mut buf = Vec::new();
        write_records(&mut buf, &seq).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "r_1 = 0.5227    x_1 = 5227",
                "r_2 = 0.3215    x_2 = 3215",
                "r_3 = 0.3362    x_3 = 3362",
            ]
        );
    }

    #[test]
    fn json_output() {
        let seq = generate(LinearCongruential::new(1, 2, 1, 1)).unwrap();
        let mut buf = Vec::new();
        write_json(&mut buf, &seq).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["algorithm"], "linear-congruential");
        assert_eq!(value["normalizer"], "3");
        assert_eq!(value["numbers"].as_array().unwrap().len(), 4);
        assert_eq!(value["numbers"][0]["seed"], "2");
    }

    #[test]
    fn writes_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("seq.txt");
        let seq = generate(MiddleSquare::new(1234u32, 2)).unwrap();
        write_to_file(path.to_str().unwrap(), &seq, false).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("r_1 = 0.5227"));
    }
}
