use serde::{Deserialize, Serialize};

use crate::result::DetectionResult;
use crate::session::{SessionIdentity, UserId};
use crate::species::Species;

/// One past detection as stored by the history service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    #[serde(default)]
    pub animal: String,
    #[serde(default)]
    pub disease: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub causes: Vec<String>,
    #[serde(default)]
    pub precautions: Vec<String>,
    #[serde(default)]
    pub food: Vec<String>,
    #[serde(default)]
    pub medications: Vec<String>,
}

/// Client-side identifier and human-readable date for a new entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStamp {
    pub id: String,
    pub date: String,
}

impl HistoryEntry {
    pub fn new(species: Species, result: &DetectionResult, image: &str, stamp: HistoryStamp) -> Self {
        Self {
            id: stamp.id,
            animal: species.display_name().to_string(),
            disease: result.disease_name.clone(),
            date: stamp.date,
            image: image.to_string(),
            causes: result.causes.clone(),
            precautions: result.precautions.clone(),
            food: result.food_items.clone(),
            medications: result.medications.clone(),
        }
    }

    pub fn to_result(&self) -> DetectionResult {
        DetectionResult {
            disease_name: self.disease.clone(),
            causes: self.causes.clone(),
            precautions: self.precautions.clone(),
            food_items: self.food.clone(),
            medications: self.medications.clone(),
        }
    }
}

/// Body of `POST /auth/history`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryRecord {
    pub user_id: UserId,
    pub history_item: HistoryEntry,
}

impl HistoryRecord {
    pub fn new(identity: &SessionIdentity, entry: HistoryEntry) -> Self {
        Self {
            user_id: identity.id.clone(),
            history_item: entry,
        }
    }
}

/// The service returns entries oldest first.
pub fn newest_first(mut entries: Vec<HistoryEntry>) -> Vec<HistoryEntry> {
    entries.reverse();
    entries
}
