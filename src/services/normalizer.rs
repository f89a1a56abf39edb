/// Converts a raw marketplace number ("12 345,67 ₽", "1 069") into a float.
///
/// The marketplace renders prices and review counts with six-per-em or
/// no-break spaces as thousands separators, a decimal comma, and currency
/// glyphs. After the comma swap everything but digits, dots and minus signs
/// is discarded, and the value is truncated to one digit after the first
/// decimal point.
///
/// Failure is a skip signal for the caller, not a fatal error.
pub fn normalize_number(raw: &str) -> Result<f64, NormalizeError> {
    let swapped = raw.replace(['\u{2006}', '\u{a0}'], " ").replace(',', ".");
    let mut residue: String = swapped
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    if let Some(dot) = residue.find('.') {
        residue.truncate(dot + 2);
    }

    if !residue.chars().any(|c| c.is_ascii_digit()) {
        return Err(NormalizeError::Empty);
    }

    residue
        .parse::<f64>()
        .map_err(|_| NormalizeError::Unparseable(residue))
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error("no digits left after cleaning")]
    Empty,
    #[error("residue {0:?} does not parse as a number")]
    Unparseable(String),
}
