//! Text form of decoded JSON numbers.

use serde_json::Number;

use crate::config::NumberFormat;

/// Formats a JSON number as variant text.
///
/// The output depends only on the numeric value and `format`.
#[must_use]
pub fn format_number(n: &Number, format: NumberFormat) -> String {
    match format {
        NumberFormat::Shortest => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                n.as_f64().map_or_else(|| n.to_string(), |f| f.to_string())
            }
        }
        NumberFormat::Fixed => n.as_f64().map_or_else(|| n.to_string(), |f| format!("{f:.6}")),
    }
}
