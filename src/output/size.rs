//! The file sink's rollover limit is written as "10M" or "1G" in config; the
//! sink itself counts raw bytes.

const KIB: f64 = 1024.0;

/// Longest suffixes first so "MB" isn't read as "B" after a bare "M" check.
const UNITS: &[(&str, f64)] = &[
    ("GB", KIB * KIB * KIB),
    ("MB", KIB * KIB),
    ("KB", KIB),
    ("G", KIB * KIB * KIB),
    ("M", KIB * KIB),
    ("K", KIB),
    ("B", 1.0),
];

/// Parses "500", "64K", "10M", "1.5G" (case-insensitive) into bytes.
#[must_use]
pub fn parse_size(s: &str) -> Option<u64> {
    let s = s.trim().to_uppercase();
    let (num_str, multiplier) = UNITS
        .iter()
        .find_map(|(suffix, mult)| s.strip_suffix(suffix).map(|rest| (rest, *mult)))
        .unwrap_or((s.as_str(), 1.0));

    let n = num_str.trim().parse::<f64>().ok()?;
    if !n.is_finite() || n < 0.0 {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let bytes = (n * multiplier) as u64;
    Some(bytes)
}

/// Human-readable byte count for diagnostics.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let bytes_f = bytes as f64;

    if bytes >= 1024 * 1024 * 1024 {
        format!("{:.2} GB", bytes_f / (KIB * KIB * KIB))
    } else if bytes >= 1024 * 1024 {
        format!("{:.2} MB", bytes_f / (KIB * KIB))
    } else if bytes >= 1024 {
        format!("{:.2} KB", bytes_f / KIB)
    } else {
        format!("{bytes} B")
    }
}
