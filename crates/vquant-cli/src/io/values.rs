// crates/vquant-cli/src/io/values.rs

use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Parse one value per line. Blank lines and `#` comments are skipped;
/// anything else that fails to parse is an error naming the line.
pub fn read_values<T>(path: &str) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let text = std::fs::read_to_string(path).with_context(|| format!("read values {path}"))?;
    parse_values(&text).with_context(|| format!("parse values {path}"))
}

pub fn parse_values<T>(text: &str) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    parse_checked(text, |_: &T| true)
}

/// Voltages file: like `read_values`, but `inf`, `nan` and overflowing
/// literals are rejected since they have no place in a JSON record.
pub fn read_volts(path: &str) -> Result<Vec<f64>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read values {path}"))?;
    parse_volts(&text).with_context(|| format!("parse values {path}"))
}

pub fn parse_volts(text: &str) -> Result<Vec<f64>> {
    parse_checked(text, |v: &f64| v.is_finite())
}

fn parse_checked<T, F>(text: &str, accept: F) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&T) -> bool,
{
    let mut out = Vec::new();
    for (n, line) in text.lines().enumerate() {
        let line = match line.split_once('#') {
            Some((head, _)) => head,
            None => line,
        }
        .trim();
        if line.is_empty() {
            continue;
        }
        match line.parse::<T>() {
            Ok(v) if accept(&v) => out.push(v),
            Ok(_) => bail!("line {}: {line:?}: not a finite value", n + 1),
            Err(e) => bail!("line {}: {line:?}: {e}", n + 1),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_comments_and_blanks() {
        let vs: Vec<f64> = parse_values("# sweep\n0.0\n\n2.5  # mid\n-3\n").unwrap();
        assert_eq!(vs, vec![0.0, 2.5, -3.0]);
    }

    #[test]
    fn names_the_bad_line() {
        let err = parse_values::<i32>("1\n2\nthree\n").unwrap_err();
        assert!(err.to_string().contains("line 3"), "{err}");
    }

    #[test]
    fn volts_must_be_finite() {
        assert_eq!(parse_volts("1.5\n-2\n").unwrap(), vec![1.5, -2.0]);
        for bad in ["inf", "-inf", "nan", "NaN", "1e400"] {
            let err = parse_volts(&format!("0.0\n{bad}\n")).unwrap_err();
            assert!(err.to_string().contains("line 2"), "{bad}: {err}");
            assert!(err.to_string().contains("not a finite value"), "{bad}: {err}");
        }
    }
}
