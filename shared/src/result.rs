use serde::{Deserialize, Serialize};

pub const DEFAULT_CAUSE: &str = "Unknown";
pub const DEFAULT_PRECAUTION: &str = "No specific precautions found";
pub const DEFAULT_FOOD: &str = "Standard bird feed";
pub const DEFAULT_MEDICATION: &str = "Consult your vet";

/// Normalized outcome of one detection. All four lists are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    pub disease_name: String,
    pub causes: Vec<String>,
    pub precautions: Vec<String>,
    pub food_items: Vec<String>,
    pub medications: Vec<String>,
}

impl DetectionResult {
    pub fn new(
        disease_name: impl Into<String>,
        causes: Option<Vec<String>>,
        precautions: Option<Vec<String>>,
        food_items: Option<Vec<String>>,
        medications: Option<Vec<String>>,
    ) -> Self {
        Self {
            disease_name: disease_name.into(),
            causes: or_default(causes, DEFAULT_CAUSE),
            precautions: or_default(precautions, DEFAULT_PRECAUTION),
            food_items: or_default(food_items, DEFAULT_FOOD),
            medications: or_default(medications, DEFAULT_MEDICATION),
        }
    }
}

fn or_default(items: Option<Vec<String>>, default: &str) -> Vec<String> {
    match items {
        Some(items) if !items.is_empty() => items,
        _ => vec![default.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_empty_lists_are_backfilled() {
        let result = DetectionResult::new("Mange", None, Some(vec![]), None, Some(vec![]));
        assert_eq!(result.causes, vec![DEFAULT_CAUSE]);
        assert_eq!(result.precautions, vec![DEFAULT_PRECAUTION]);
        assert_eq!(result.food_items, vec![DEFAULT_FOOD]);
        assert_eq!(result.medications, vec![DEFAULT_MEDICATION]);
    }

    #[test]
    fn present_lists_are_kept_in_order() {
        let causes = vec!["Mites".to_string(), "Stress".to_string()];
        let result = DetectionResult::new("Mange", Some(causes.clone()), None, None, None);
        assert_eq!(result.causes, causes);
    }
}
