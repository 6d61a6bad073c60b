use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Client-facing projection of an oil price record.
///
/// `id == 0` marks a record that has not been persisted yet; the
/// creation timestamp is stamped by the service, so inbound DTOs may
/// leave it empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OilPriceDto {
    #[serde(default)]
    pub id: i32,
    pub country: String,
    pub product: String,
    pub currency: String,
    pub price: f64,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}
