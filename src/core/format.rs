/// Number presentation used in reason strings.
///
/// Scoring works on raw numbers; only the text handed back to the caller goes
/// through a formatter, so a different locale can be swapped in without
/// touching the scoring rules.
pub trait NumberFormat: Send + Sync {
    /// Grouped amount without currency, e.g. `2’500`
    fn amount(&self, value: f64) -> String;

    /// Amount with currency, e.g. `CHF 2’500`
    fn price(&self, value: f64) -> String;

    /// Plain number as typed by the user, e.g. `3.5` or `4`
    fn number(&self, value: f64) -> String {
        format!("{}", value)
    }
}

/// Swiss formatting: `’` as thousands separator, up to three fraction digits
#[derive(Debug, Clone)]
pub struct SwissFormat {
    currency: String,
}

pub const DEFAULT_CURRENCY: &str = "CHF";

const THOUSANDS_SEPARATOR: char = '\u{2019}';
const MAX_FRACTION_DIGITS: i32 = 3;

impl SwissFormat {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}

impl Default for SwissFormat {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY)
    }
}

impl NumberFormat for SwissFormat {
    fn amount(&self, value: f64) -> String {
        if !value.is_finite() {
            return format!("{}", value);
        }

        let scale = 10f64.powi(MAX_FRACTION_DIGITS);
        let rounded = (value.abs() * scale).round() / scale;
        // Tiny non-zero amounts would otherwise print as "0"
        if rounded == 0.0 && value != 0.0 {
            return format!("{}", value);
        }
        let negative = value < 0.0 && rounded != 0.0;

        let integer = rounded.trunc();
        let fraction = format!("{:.*}", MAX_FRACTION_DIGITS as usize, rounded - integer);
        // "0.250" -> "25"
        let fraction = fraction
            .trim_start_matches('0')
            .trim_start_matches('.')
            .trim_end_matches('0');

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        out.push_str(&group_thousands(&format!("{:.0}", integer)));
        if !fraction.is_empty() {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }

    fn price(&self, value: f64) -> String {
        format!("{} {}", self.currency, self.amount(value))
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * THOUSANDS_SEPARATOR.len_utf8());

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(THOUSANDS_SEPARATOR);
        }
        out.push(c);
    }
    out
}
