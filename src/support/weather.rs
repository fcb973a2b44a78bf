//! Wind speed from stored weather snapshots.
//!
//! Weather providers disagree on what to call the wind speed field. A snapshot
//! is kept as the provider's raw JSON object, and [`wind_speed`] pulls a usable
//! value out of it so the stored observation can stand in for a caller-supplied
//! wind speed.

use serde_json::Value;

/// Keys checked for a wind speed, in priority order.
pub const WIND_SPEED_KEYS: [&str; 5] = [
    "windspeed_10m",
    "wind_speed",
    "wind_speed_kph",
    "windSpeed",
    "speed",
];

/// Returns the first numeric wind speed found under [`WIND_SPEED_KEYS`].
///
/// Numbers and numeric strings are returned as stored, with no unit
/// conversion. A key holding `null`, a non-numeric string, or any other JSON
/// type is skipped in favor of the next key. Booleans are skipped too, rather
/// than read as 0 or 1. Returns `None` if the snapshot is not an object or no
/// key yields a number.
///
/// ```
/// use dispersion_models::support::weather::wind_speed;
/// use serde_json::json;
///
/// let snapshot = json!({ "wind_speed": "n/a", "windSpeed": 4.2 });
/// assert_eq!(wind_speed(&snapshot), Some(4.2));
/// assert_eq!(wind_speed(&json!([1, 2, 3])), None);
/// ```
#[must_use]
pub fn wind_speed(snapshot: &Value) -> Option<f64> {
    let fields = snapshot.as_object()?;

    WIND_SPEED_KEYS.iter().find_map(|&key| {
        let value = fields.get(key)?;
        let speed = numeric(value);
        if speed.is_none() && !value.is_null() {
            tracing::debug!(key, %value, "skipping non-numeric wind speed");
        }
        speed
    })
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}
