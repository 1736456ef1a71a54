use crate::models::itinerary::{Coordinate, ItineraryStep};
use serde_json::Value;
use std::error::Error;
use std::fmt;

/// One schema violation, e.g. path "[2].id", reason "expected a number, got a string".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub path: String,
    pub reason: String,
}

#[derive(Debug)]
pub enum ValidationError {
    /// The candidate value is not an array of steps at all.
    NotAnArray { found: &'static str },
    /// One or more elements broke the per-field rules. Validation is
    /// all-or-nothing, so a single bad element rejects the whole batch.
    InvalidSteps(Vec<FieldViolation>),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NotAnArray { found } => {
                write!(f, "Expected a JSON array of itinerary steps, got {}", found)
            }
            ValidationError::InvalidSteps(violations) => {
                let details: Vec<String> = violations
                    .iter()
                    .map(|v| format!("{}: {}", v.path, v.reason))
                    .collect();
                write!(
                    f,
                    "Itinerary failed validation ({} violation(s)): {}",
                    violations.len(),
                    details.join("; ")
                )
            }
        }
    }
}

impl Error for ValidationError {}

/// The shape each itinerary field must satisfy. Null handling differs per
/// rule: some fields coerce null to a default, others treat null as a
/// violation, matching what downstream consumers can tolerate.
#[derive(Debug, Clone, Copy)]
enum FieldRule {
    /// Required JSON number. Numeric strings are not coerced.
    Number,
    /// Required string.
    Text,
    /// Object with numeric `lat`/`lng`, or null/missing for "no geocode".
    CoordinatesOrNull,
    /// Array of strings; null/missing normalize to an empty list.
    TextListOrNull,
    /// String; null/missing normalize to the given default.
    TextOrNullDefault(&'static str),
    /// String; null/missing normalize to absent.
    TextOrNullAbsent,
    /// String if present at all; null is rejected.
    TextIfPresent,
}

const FIELD_RULES: &[(&str, FieldRule)] = &[
    ("id", FieldRule::Number),
    ("time", FieldRule::Text),
    ("title", FieldRule::Text),
    ("description", FieldRule::Text),
    ("image_keyword", FieldRule::Text),
    ("address", FieldRule::Text),
    ("coordinates", FieldRule::CoordinatesOrNull),
    ("stops", FieldRule::TextListOrNull),
    ("color", FieldRule::TextOrNullDefault("blue")),
    ("travelTimeFromPrevious", FieldRule::TextOrNullAbsent),
    ("imageUrl", FieldRule::TextIfPresent),
    ("notes", FieldRule::TextIfPresent),
];

/// Validate an arbitrary parsed JSON value as an itinerary.
///
/// Accepts either a bare array of step objects or an object wrapping one
/// under an "itinerary" key. Every element is checked against the field
/// rules; all violations are collected and reported together rather than
/// stopping at the first.
pub fn validate_itinerary(value: &Value) -> Result<Vec<ItineraryStep>, ValidationError> {
    let candidate = unwrap_candidate(value);

    let items = match candidate.as_array() {
        Some(items) => items,
        None => {
            return Err(ValidationError::NotAnArray {
                found: json_type_name(candidate),
            })
        }
    };

    let mut violations: Vec<FieldViolation> = Vec::new();
    for (index, item) in items.iter().enumerate() {
        check_step(index, item, &mut violations);
    }

    if !violations.is_empty() {
        return Err(ValidationError::InvalidSteps(violations));
    }

    Ok(items.iter().map(build_step).collect())
}

/// Models sometimes return `{"itinerary": [...]}` instead of the bare array.
fn unwrap_candidate(value: &Value) -> &Value {
    if value.is_array() {
        return value;
    }
    if let Some(inner) = value.get("itinerary") {
        if inner.is_array() {
            return inner;
        }
    }
    value
}

fn check_step(index: usize, item: &Value, violations: &mut Vec<FieldViolation>) {
    let obj = match item.as_object() {
        Some(obj) => obj,
        None => {
            violations.push(FieldViolation {
                path: format!("[{}]", index),
                reason: format!("expected an object, got {}", json_type_name(item)),
            });
            return;
        }
    };

    for (name, rule) in FIELD_RULES {
        let path = format!("[{}].{}", index, name);
        let field = obj.get(*name);
        match rule {
            FieldRule::Number => {
                match field {
                    Some(v) if v.is_number() => {}
                    Some(v) => violations.push(FieldViolation {
                        path,
                        reason: format!("expected a number, got {}", json_type_name(v)),
                    }),
                    None => violations.push(FieldViolation {
                        path,
                        reason: "required field is missing".to_string(),
                    }),
                }
            }
            FieldRule::Text => match field {
                Some(v) if v.is_string() => {}
                Some(v) => violations.push(FieldViolation {
                    path,
                    reason: format!("expected a string, got {}", json_type_name(v)),
                }),
                None => violations.push(FieldViolation {
                    path,
                    reason: "required field is missing".to_string(),
                }),
            },
            FieldRule::CoordinatesOrNull => {
                if let Some(v) = field {
                    check_coordinates(&path, v, violations);
                }
            }
            FieldRule::TextListOrNull => {
                if let Some(v) = field {
                    check_text_list(&path, v, violations);
                }
            }
            FieldRule::TextOrNullDefault(_) | FieldRule::TextOrNullAbsent => match field {
                None => {}
                Some(v) if v.is_null() || v.is_string() => {}
                Some(v) => violations.push(FieldViolation {
                    path,
                    reason: format!("expected a string or null, got {}", json_type_name(v)),
                }),
            },
            FieldRule::TextIfPresent => match field {
                None => {}
                Some(v) if v.is_string() => {}
                Some(v) => violations.push(FieldViolation {
                    path,
                    reason: format!("expected a string, got {}", json_type_name(v)),
                }),
            },
        }
    }
}

fn check_coordinates(path: &str, value: &Value, violations: &mut Vec<FieldViolation>) {
    if value.is_null() {
        return;
    }
    let obj = match value.as_object() {
        Some(obj) => obj,
        None => {
            violations.push(FieldViolation {
                path: path.to_string(),
                reason: format!(
                    "expected an object with lat and lng, got {}",
                    json_type_name(value)
                ),
            });
            return;
        }
    };
    for axis in ["lat", "lng"] {
        match obj.get(axis) {
            Some(v) if v.is_number() => {}
            Some(v) => violations.push(FieldViolation {
                path: format!("{}.{}", path, axis),
                reason: format!("expected a number, got {}", json_type_name(v)),
            }),
            None => violations.push(FieldViolation {
                path: format!("{}.{}", path, axis),
                reason: "required field is missing".to_string(),
            }),
        }
    }
}

fn check_text_list(path: &str, value: &Value, violations: &mut Vec<FieldViolation>) {
    if value.is_null() {
        return;
    }
    let items = match value.as_array() {
        Some(items) => items,
        None => {
            violations.push(FieldViolation {
                path: path.to_string(),
                reason: format!("expected an array of strings, got {}", json_type_name(value)),
            });
            return;
        }
    };
    for (i, item) in items.iter().enumerate() {
        if !item.is_string() {
            violations.push(FieldViolation {
                path: format!("{}[{}]", path, i),
                reason: format!("expected a string, got {}", json_type_name(item)),
            });
        }
    }
}

/// Build the typed step from an element that already passed `check_step`.
fn build_step(item: &Value) -> ItineraryStep {
    let text = |name: &str| -> String {
        item.get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    let optional_text = |name: &str| -> Option<String> {
        item.get(name).and_then(Value::as_str).map(str::to_string)
    };

    let id = item
        .get("id")
        .map(|v| v.as_i64().unwrap_or_else(|| v.as_f64().unwrap_or_default() as i64))
        .unwrap_or_default();

    let coordinates = item
        .get("coordinates")
        .and_then(Value::as_object)
        .map(|c| Coordinate {
            lat: c.get("lat").and_then(Value::as_f64).unwrap_or_default(),
            lng: c.get("lng").and_then(Value::as_f64).unwrap_or_default(),
        });

    let stops = item
        .get("stops")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    ItineraryStep {
        id,
        time: text("time"),
        title: text("title"),
        description: text("description"),
        image_keyword: text("image_keyword"),
        address: text("address"),
        coordinates,
        stops,
        color: item
            .get("color")
            .and_then(Value::as_str)
            .unwrap_or("blue")
            .to_string(),
        image_url: optional_text("imageUrl"),
        notes: optional_text("notes"),
        travel_time_from_previous: optional_text("travelTimeFromPrevious"),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
