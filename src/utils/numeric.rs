/// Length of the longest leading float literal in `s`: optional sign,
/// digits with an optional fraction, optional exponent. Returns 0 when the
/// value has no numeric prefix at all.
fn float_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;

    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    let mut mantissa_digits = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        mantissa_digits += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            mantissa_digits += 1;
        }
    }

    if mantissa_digits == 0 {
        return 0;
    }

    // An exponent only counts when at least one digit follows it
    let mantissa_end = i;
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let mut exponent_digits = 0;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
            exponent_digits += 1;
        }
        if exponent_digits > 0 {
            return j;
        }
    }

    mantissa_end
}

/// Permissive numeric coercion for survey fields.
///
/// The longest numeric prefix of the trimmed value is used, so a
/// unit-suffixed cell like `"150 kg"` keeps its number. Missing, blank, or
/// entirely non-numeric values become `0.0`; one dirty cell never aborts an
/// ingestion pass and the row still counts toward its area.
pub fn parse_metric(raw: &str) -> f64 {
    parse_metric_checked(raw).0
}

/// Like [`parse_metric`], but also reports whether a non-empty value had no
/// numeric prefix and was coerced to zero. Blank or absent fields are
/// expected in the survey data and are not counted as coercions.
pub fn parse_metric_checked(raw: &str) -> (f64, bool) {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return (0.0, false);
    }

    let prefix_len = float_prefix_len(trimmed);
    if prefix_len == 0 {
        return (0.0, true);
    }

    match trimmed[..prefix_len].parse::<f64>() {
        Ok(value) => (value, false),
        Err(_) => (0.0, true),
    }
}
