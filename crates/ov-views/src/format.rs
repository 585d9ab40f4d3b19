//! Number formatting for annotations and readouts

/// Shown wherever a value is missing
pub const PLACEHOLDER: &str = "—";

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Fixed-point with `digits` decimals
pub fn fmt_num(value: Option<f64>, digits: usize) -> String {
    match finite(value) {
        Some(v) => format!("{:.*}", digits, v),
        None => PLACEHOLDER.to_string(),
    }
}

/// Fixed-point with an explicit `+` on positive changes
pub fn format_delta(value: Option<f64>, digits: usize) -> String {
    match finite(value) {
        Some(v) if v > 0.0 => format!("+{:.*}", digits, v),
        Some(v) => format!("{:.*}", digits, v),
        None => PLACEHOLDER.to_string(),
    }
}

/// Scientific notation with a superscript exponent, e.g. `1.23×10⁻³`
pub fn format_sci(value: Option<f64>, digits: usize) -> String {
    let Some(v) = finite(value) else {
        return PLACEHOLDER.to_string();
    };
    if v == 0.0 {
        return "0".to_string();
    }

    let exponent = v.abs().log10().floor() as i32;
    let mantissa = v / 10f64.powi(exponent);
    format!("{:.*}×10{}", digits, mantissa, superscript(exponent))
}

/// [`format_sci`] with an explicit `+` on positive changes
pub fn format_sci_delta(value: Option<f64>, digits: usize) -> String {
    match finite(value) {
        Some(v) if v > 0.0 => format!("+{}", format_sci(Some(v), digits)),
        other => format_sci(other, digits),
    }
}

fn superscript(exponent: i32) -> String {
    let mut out = String::new();
    if exponent < 0 {
        out.push('⁻');
    }
    for digit in exponent.unsigned_abs().to_string().chars() {
        out.push(match digit {
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            _ => '⁹',
        });
    }
    out
}

/// Temperature readout, e.g. `18.64 K`
pub fn temperature_text(value: Option<f64>) -> String {
    match finite(value) {
        Some(_) => format!("{} K", fmt_num(value, 2)),
        None => PLACEHOLDER.to_string(),
    }
}

/// Calcite readout, e.g. `1.23×10⁻³ mol m⁻³`
pub fn calcite_text(value: Option<f64>) -> String {
    match finite(value) {
        Some(_) => format!("{} mol m⁻³", format_sci(value, 2)),
        None => PLACEHOLDER.to_string(),
    }
}
