//! SI-prefixed resistance values.
//!
//! Netlists write resistor values the way they are printed on parts
//! (`4.7k`, `1M`, `220`), and results are reported the same way.

/// Engineering prefixes from largest to smallest.
const PREFIXES: [(f64, &str); 8] = [
    (1e9, "G"),
    (1e6, "M"),
    (1e3, "k"),
    (1.0, ""),
    (1e-3, "m"),
    (1e-6, "µ"),
    (1e-9, "n"),
    (1e-12, "p"),
];

/// Significant digits shown by [`format_ohms`].
const SIGNIFICANT_DIGITS: i32 = 4;

/// Parse a number string with optional unit suffix.
///
/// A trailing `Ω`, `ohm` or `R` is accepted and ignored, so `"10kΩ"` and
/// `"10k"` parse to the same value.
pub fn parse_value(text: &str) -> Option<f64> {
    let mut text = text.trim();
    for unit in ["Ω", "ohm", "Ohm", "R"] {
        if let Some(stripped) = text.strip_suffix(unit) {
            text = stripped;
            break;
        }
    }
    if text.is_empty() {
        return None;
    }

    let last = text.chars().last()?;
    let multiplier = match last {
        'p' => 1e-12,
        'n' => 1e-9,
        'u' | 'µ' => 1e-6,
        'm' => 1e-3,
        'k' | 'K' => 1e3,
        'M' => 1e6,
        'G' => 1e9,
        _ => 1.0,
    };

    let num_str = if multiplier != 1.0 {
        &text[..text.len() - last.len_utf8()]
    } else {
        text
    };

    num_str.parse::<f64>().ok().map(|v| v * multiplier)
}

/// Format a resistance with the best engineering prefix, e.g. `4.7 kΩ`.
pub fn format_ohms(ohms: f64) -> String {
    if ohms == 0.0 || !ohms.is_finite() {
        return format!("{} Ω", ohms);
    }

    let magnitude = ohms.abs();
    let mut index = PREFIXES
        .iter()
        .position(|(scale, _)| magnitude >= *scale)
        .unwrap_or(PREFIXES.len() - 1);

    let mut text = scaled_text(ohms / PREFIXES[index].0);
    // Rounding can carry into the next prefix (999.96 -> "1000")
    if index > 0 && text.trim_start_matches('-').parse::<f64>().is_ok_and(|v| v >= 1000.0) {
        index -= 1;
        text = scaled_text(ohms / PREFIXES[index].0);
    }
    format!("{} {}Ω", text, PREFIXES[index].1)
}

/// `scaled` rounded to [`SIGNIFICANT_DIGITS`], trailing zeros trimmed.
fn scaled_text(scaled: f64) -> String {
    let integer_digits = scaled.abs().log10().floor() as i32 + 1;
    let decimals = (SIGNIFICANT_DIGITS - integer_digits).clamp(0, 3) as usize;

    let text = format!("{:.*}", decimals, scaled);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}
