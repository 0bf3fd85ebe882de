use serde_json::Value;

/// One entry of a collection. Only the `id` field is ever interpreted.
pub type Record = Value;

/// Integer `id` of a record, if it has one.
///
/// Integral floats (`2.0`) count as integers so they compare equal to `2`.
pub fn record_id(record: &Record) -> Option<i64> {
    let id = record.get("id")?;
    if let Some(n) = id.as_i64() {
        return Some(n);
    }
    let f = id.as_f64()?;
    (f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64).then_some(f as i64)
}
