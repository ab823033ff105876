use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of a Nominatim `/search` response, kept exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchHit(pub Value);

impl SearchHit {
    pub fn display_name(&self) -> Option<&str> {
        self.0.get("display_name").and_then(Value::as_str)
    }

    pub fn lat(&self) -> Option<f64> {
        self.0.get("lat").and_then(coordinate)
    }

    pub fn lon(&self) -> Option<f64> {
        self.0.get("lon").and_then(coordinate)
    }
}

// Nominatim sends coordinates as strings.
fn coordinate(v: &Value) -> Option<f64> {
    match v {
        Value::String(s) => s.parse().ok(),
        other => other.as_f64(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn reads_string_and_numeric_coordinates() {
        let hit = SearchHit(json!({
            "display_name": "Paris, France",
            "lat": "48.8588897",
            "lon": 2.3200410,
        }));

        assert_eq!(hit.display_name(), Some("Paris, France"));
        assert_eq!(hit.lat(), Some(48.8588897));
        assert_eq!(hit.lon(), Some(2.3200410));
    }

    #[test]
    fn serializes_unchanged() {
        let raw = json!({
            "place_id": 88066702,
            "display_name": "Paris",
            "address": { "city": "Paris", "country_code": "fr" },
            "boundingbox": ["48.8155755", "48.9021560", "2.2241220", "2.4697602"],
        });

        let hit: SearchHit = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(serde_json::to_value(&hit).unwrap(), raw);
    }
}
