use std::cmp::Ordering;

/// Declared value type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortType {
    Numeric,
    Textual,
}

impl SortType {
    /// `numeric_type` is the declared value meaning numeric; anything else
    /// compares as text.
    pub fn from_declared(declared: &str, numeric_type: &str) -> Self {
        if declared == numeric_type {
            Self::Numeric
        } else {
            Self::Textual
        }
    }
}

/// Active sort direction. "Unset" is `Option::<SortDirection>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Direction after a click: ascending flips to descending, anything
    /// else (unset or descending) becomes ascending.
    pub fn next(current: Option<Self>) -> Self {
        match current {
            Some(Self::Ascending) => Self::Descending,
            Some(Self::Descending) | None => Self::Ascending,
        }
    }
}

/// A cell value converted for comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Number(f64),
    Text(String),
}

impl SortKey {
    pub fn new(raw: &str, sort_type: SortType) -> Self {
        match sort_type {
            SortType::Numeric => Self::Number(parse_number(raw)),
            SortType::Textual => Self::Text(raw.to_lowercase()),
        }
    }
}

/// Three-way comparator. Equal keys compare `Equal` so a stable sort keeps
/// their original order.
pub fn compare(a: &SortKey, b: &SortKey, direction: SortDirection) -> Ordering {
    let natural = match (a, b) {
        (SortKey::Number(a), SortKey::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
        _ => Ordering::Equal,
    };
    match direction {
        SortDirection::Ascending => natural,
        SortDirection::Descending => natural.reverse(),
    }
}

/// Lenient number parsing.
///
/// The first `,` is read as a decimal point, then the longest leading
/// float literal is parsed (`"12 players"` is 12). Text with no leading
/// number is 0, never an error.
pub fn parse_number(raw: &str) -> f64 {
    let normalized = raw.replacen(',', ".", 1);
    let value = float_prefix(normalized.trim_start()).unwrap_or(0.0);
    if value.is_nan() || value == 0.0 {
        0.0
    } else {
        value
    }
}

fn float_prefix(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;

    let negative = matches!(bytes.first(), Some(b'-'));
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        let infinity = if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        return Some(infinity);
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}
