use serde::{Deserialize, Serialize};

use crate::error::DetectionError;
use crate::result::DetectionResult;

/// Body returned by `POST /{segment}/predict`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub causes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precautions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_items: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medications: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PredictionResponse {
    /// Rejects application-level errors, then normalizes.
    pub fn into_result(self) -> Result<DetectionResult, DetectionError> {
        if let Some(error) = self.error {
            return Err(DetectionError::Service(error));
        }
        let label = self
            .prediction
            .ok_or_else(|| DetectionError::Decode("missing `prediction` field".into()))?;

        Ok(DetectionResult::new(
            label,
            self.causes,
            self.precautions,
            self.food_items,
            self.medications,
        ))
    }
}

impl From<DetectionResult> for PredictionResponse {
    fn from(result: DetectionResult) -> Self {
        Self {
            prediction: Some(result.disease_name),
            causes: Some(result.causes),
            precautions: Some(result.precautions),
            food_items: Some(result.food_items),
            medications: Some(result.medications),
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{DEFAULT_CAUSE, DEFAULT_FOOD, DEFAULT_MEDICATION, DEFAULT_PRECAUTION};

    #[test]
    fn label_only_response_gets_all_defaults() {
        let response: PredictionResponse =
            serde_json::from_str(r#"{ "prediction": "Canine Dermatitis" }"#).unwrap();
        let result = response.into_result().unwrap();

        assert_eq!(result.disease_name, "Canine Dermatitis");
        assert_eq!(result.causes, vec![DEFAULT_CAUSE]);
        assert_eq!(result.precautions, vec![DEFAULT_PRECAUTION]);
        assert_eq!(result.food_items, vec![DEFAULT_FOOD]);
        assert_eq!(result.medications, vec!["Consult your vet"]);
        assert_eq!(result.medications, vec![DEFAULT_MEDICATION]);
    }

    #[test]
    fn fields_default_independently() {
        let response: PredictionResponse = serde_json::from_str(
            r#"{
                "prediction": "Newcastle Disease",
                "causes": ["Paramyxovirus"],
                "precautions": [],
                "foodItems": ["Electrolyte water", "Vitamin supplements"]
            }"#,
        )
        .unwrap();
        let result = response.into_result().unwrap();

        assert_eq!(result.causes, vec!["Paramyxovirus"]);
        assert_eq!(result.precautions, vec![DEFAULT_PRECAUTION]);
        assert_eq!(result.food_items, vec!["Electrolyte water", "Vitamin supplements"]);
        assert_eq!(result.medications, vec![DEFAULT_MEDICATION]);
    }

    #[test]
    fn error_field_is_a_service_error() {
        let response: PredictionResponse =
            serde_json::from_str(r#"{ "error": "No file part" }"#).unwrap();
        assert_eq!(
            response.into_result(),
            Err(DetectionError::Service("No file part".into()))
        );
    }

    #[test]
    fn error_wins_over_prediction() {
        let response: PredictionResponse =
            serde_json::from_str(r#"{ "prediction": "Healthy", "error": "model not loaded" }"#).unwrap();
        assert!(matches!(response.into_result(), Err(DetectionError::Service(_))));
    }

    #[test]
    fn missing_label_is_a_decode_error() {
        let response: PredictionResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(response.into_result(), Err(DetectionError::Decode(_))));
    }
}
