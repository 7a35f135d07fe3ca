// Size (base-1024) and bit-rate (base-1000) string conversion.
// The two unit families never share a table.

pub use crate::error::UnitError;

const KIB: f64 = 1024.0;

const SIZE_UNITS: [(&str, f64); 5] = [
    ("B", 1.0),
    ("KiB", KIB),
    ("MiB", KIB * KIB),
    ("GiB", KIB * KIB * KIB),
    ("TiB", KIB * KIB * KIB * KIB),
];

/// Multipliers to Mbit/s.
const RATE_UNITS: [(&str, f64); 5] = [
    ("bit/s", 1e-6),
    ("kbit/s", 1e-3),
    ("Kbit/s", 1e-3),
    ("Mbit/s", 1.0),
    ("Gbit/s", 1e3),
];

const BIT_RATE_LABELS: [&str; 4] = ["bit/s", "Kbit/s", "Mbit/s", "Gbit/s"];

/// Parse a size such as "9.41 GiB" into bytes.
pub fn parse_size(text: &str) -> Result<f64, UnitError> {
    parse_with(text, &SIZE_UNITS)
}

/// Parse a rate such as "44.41 Mbit/s" into Mbit/s.
pub fn parse_rate(text: &str) -> Result<f64, UnitError> {
    parse_with(text, &RATE_UNITS)
}

/// Parse a size that was split into separate number and unit tokens.
pub fn parse_size_parts(number: &str, unit: &str) -> Result<f64, UnitError> {
    convert(number, unit, &SIZE_UNITS, || format!("{number} {unit}"))
}

/// Parse a rate that was split into separate number and unit tokens.
pub fn parse_rate_parts(number: &str, unit: &str) -> Result<f64, UnitError> {
    convert(number, unit, &RATE_UNITS, || format!("{number} {unit}"))
}

fn parse_with(text: &str, table: &[(&str, f64)]) -> Result<f64, UnitError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(UnitError::Empty);
    }
    let (number, unit) = split_number_unit(trimmed);
    convert(number, unit, table, || trimmed.to_string())
}

/// "1.5 GiB" / "1.5   GiB" / "1.5GiB" -> ("1.5", "GiB").
fn split_number_unit(s: &str) -> (&str, &str) {
    let end = s
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | ',' | '-' | '+')))
        .unwrap_or(s.len());
    (s[..end].trim(), s[end..].trim())
}

fn convert(
    number: &str,
    unit: &str,
    table: &[(&str, f64)],
    input: impl Fn() -> String,
) -> Result<f64, UnitError> {
    if number.is_empty() && unit.is_empty() {
        return Err(UnitError::Empty);
    }
    let value: f64 = number
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| UnitError::InvalidNumber { input: input() })?;
    if value < 0.0 {
        return Err(UnitError::Negative { input: input() });
    }
    let multiplier = table
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, m)| *m)
        .ok_or_else(|| UnitError::UnknownUnit {
            unit: unit.to_string(),
            input: input(),
        })?;
    Ok(value * multiplier)
}

/// Format a byte count with the largest binary unit keeping the value >= 1 ("9.41 GiB").
pub fn format_size(bytes: f64) -> String {
    let mut value = bytes.max(0.0);
    let mut idx = 0;
    while value >= KIB && idx < SIZE_UNITS.len() - 1 {
        value /= KIB;
        idx += 1;
    }
    format!("{:.2} {}", value, SIZE_UNITS[idx].0)
}

/// Format bits per second by repeated division by 1000 ("800.00 Kbit/s").
pub fn format_bit_rate(bits_per_sec: f64) -> String {
    let mut value = bits_per_sec.max(0.0);
    let mut idx = 0;
    while value >= 1000.0 && idx < BIT_RATE_LABELS.len() - 1 {
        value /= 1000.0;
        idx += 1;
    }
    format!("{:.2} {}", value, BIT_RATE_LABELS[idx])
}

/// Format a rate already expressed in Mbit/s.
pub fn format_mbps(mbps: f64) -> String {
    format_bit_rate(mbps * 1e6)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_handles_missing_space() {
        assert_eq!(split_number_unit("1.5GiB"), ("1.5", "GiB"));
        assert_eq!(split_number_unit("1.5   GiB"), ("1.5", "GiB"));
        assert_eq!(split_number_unit("42"), ("42", ""));
    }

    #[test]
    fn convert_rejects_missing_unit() {
        let err = parse_size("42").unwrap_err();
        assert!(matches!(err, UnitError::UnknownUnit { ref unit, .. } if unit.is_empty()));
    }

    #[test]
    fn format_size_small_values_stay_in_bytes() {
        assert_eq!(format_size(0.0), "0.00 B");
        assert_eq!(format_size(1023.0), "1023.00 B");
        assert_eq!(format_size(1024.0), "1.00 KiB");
    }

    #[test]
    fn format_bit_rate_caps_at_gbit() {
        assert_eq!(format_bit_rate(5e12), "5000.00 Gbit/s");
    }
}
