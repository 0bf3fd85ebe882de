// ── Integer coercion ──────────────────────────────────────────────────────────

/// Lenient integer parse with the rules browsers use for `parseInt`.
///
/// Leading whitespace is skipped, an optional sign and `0x` prefix are
/// honoured, and parsing stops at the first character that is not a digit.
/// Returns `None` when no digit was consumed. Out-of-range values saturate.
pub fn parse_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else { break };
        seen_digit = true;
        value = value
            .saturating_mul(i64::from(radix))
            .saturating_add(i64::from(d));
    }

    seen_digit.then_some(if negative { -value } else { value })
}

// ── Query parameters ──────────────────────────────────────────────────────────

/// Raw `?offset=&limit=` values. Kept as strings so that garbage input falls
/// back to the defaults instead of failing extraction.
#[derive(Debug, Default)]
pub struct ListParams {
    pub offset: Option<String>,
    pub limit: Option<String>,
}

/// A pagination request after coercion. `None` means "use the default".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl ListParams {
    /// Collect from decoded query pairs. The first occurrence of a key wins;
    /// unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "offset" => &mut params.offset,
                "limit" => &mut params.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    pub fn page(&self) -> Page {
        Page {
            offset: self.offset.as_deref().and_then(parse_int),
            limit: self.limit.as_deref().and_then(parse_int),
        }
    }
}
