//! Best-effort salary coercion.

/// Convert a raw salary value into a number ahead of bounds checking.
///
/// Accepts currency formatting (`"$90,000"`), a thousands suffix (`"45k"`),
/// and the legacy alias `"seventy-k"` kept for a known malformed source
/// value. This never errors: unparseable input collapses to a sentinel
/// (`0.0` for a broken `k` amount, `-1.0` otherwise) that sits below any
/// valid minimum bound, so the range check is the single rejection point
/// for bad salary text.
pub fn normalize_salary(raw: &str) -> f64 {
    let cleaned = raw.trim().to_lowercase().replace(['$', ','], "");
    if cleaned == "seventy-k" {
        return 70_000.0;
    }
    if let Some(stem) = cleaned.strip_suffix('k') {
        return stem.parse::<f64>().map(|value| value * 1000.0).unwrap_or(0.0);
    }
    cleaned.parse::<f64>().unwrap_or(-1.0)
}
