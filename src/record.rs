use serde::{Deserialize, Serialize};

// The output schema. Field order here is the serialization order.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PropertyRecord {
    pub property_id: i64,
    pub name: String,
    pub email: String,
    pub total_rooms: f64,
}
