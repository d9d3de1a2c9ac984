use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: Uuid,
    pub full_name: String,
    pub license_number: String,
    pub experience: u32,
    pub specialization: String,
    /// Store-relative path of the uploaded credential file (`uploads/<name>`).
    pub document: String,
}
