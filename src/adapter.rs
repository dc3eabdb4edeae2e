// Input normalization for legacy pricing-period shapes.
// Older stores carried a room's pricing periods either as a relational list
// or as a JSON string column, and dates arrived as bare days or full ISO
// timestamps. Everything is normalized into the typed model here, before the
// core ever sees it. A malformed entry is skipped with a warning rather than
// failing the whole room.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::model::PricingPeriod;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPricingPeriod {
    start_date: String,
    end_date: String,
    #[serde(default)]
    price: f64,
}

// Accept a pricing-periods field in any of its legacy shapes: a JSON array,
// a string containing a JSON array, or null/absent.
pub fn normalize_pricing_periods(raw: &Value) -> Vec<PricingPeriod> {
    let entries = match raw {
        Value::Null => return Vec::new(),
        Value::Array(items) => items.clone(),
        Value::String(encoded) => match serde_json::from_str::<Value>(encoded) {
            Ok(Value::Array(items)) => items,
            Ok(_) | Err(_) => {
                warn!("pricing periods string is not a JSON array, treating as none");
                return Vec::new();
            }
        },
        other => {
            warn!(shape = %value_kind(other), "unexpected pricing periods shape, treating as none");
            return Vec::new();
        }
    };

    entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<RawPricingPeriod>(entry) {
            Ok(raw) => convert_period(raw),
            Err(err) => {
                warn!(error = %err, "skipping malformed pricing period entry");
                None
            }
        })
        .collect()
}

fn convert_period(raw: RawPricingPeriod) -> Option<PricingPeriod> {
    match (parse_date(&raw.start_date), parse_date(&raw.end_date)) {
        (Some(start_date), Some(end_date)) => Some(PricingPeriod {
            start_date,
            end_date,
            price: raw.price,
        }),
        _ => {
            warn!(
                start = %raw.start_date,
                end = %raw.end_date,
                "skipping pricing period with unparsable dates"
            );
            None
        }
    }
}

// Dates show up as "2026-01-29" or "2026-01-29T14:58:00.000Z"; only the day
// part matters at night granularity.
fn parse_date(text: &str) -> Option<NaiveDate> {
    let day = text.split('T').next().unwrap_or(text);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
