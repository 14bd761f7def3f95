use std::fmt;

/// Renders a real number in plain decimal with the fewest digits that still
/// round-trip. Never uses an exponent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decimal(pub f64);

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            f.write_str("NaN")
        } else if v.is_infinite() {
            f.write_str(if v > 0.0 { "+Inf" } else { "-Inf" })
        } else if v == 0.0 {
            // also catches -0.0
            f.write_str("0")
        } else {
            // f64's Display is shortest round-trip and never scientific
            write!(f, "{}", v)
        }
    }
}

/// Owned rendering of [`Decimal`].
pub fn format_float(v: f64) -> String {
    Decimal(v).to_string()
}
