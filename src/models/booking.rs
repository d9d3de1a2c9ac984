use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trip booking for assisted travel. The legacy schema marked nothing
/// required, so every field stays optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripBooking {
    pub id: Uuid,
    pub trip_type: Option<String>,
    pub current_location: Option<String>,
    pub destination: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub number_of_members: Option<String>,
    pub selected_car: Option<String>,
}
