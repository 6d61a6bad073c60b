use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::Entity;
use crate::domain::filter::{FieldKind, FieldValue, Filterable};

/// A recorded oil product price for one country.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct OilPrice {
    pub id: i32,
    pub country: String,
    pub product: String,
    pub currency: String,
    pub price: f64,
    pub created_at: NaiveDateTime,
}

impl Entity for OilPrice {
    fn id(&self) -> i32 {
        self.id
    }

    fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    fn set_created_at(&mut self, at: NaiveDateTime) {
        self.created_at = at;
    }
}

impl Filterable for OilPrice {
    fn field_kind(name: &str) -> Option<FieldKind> {
        match name {
            "id" => Some(FieldKind::Integer),
            "country" | "product" | "currency" => Some(FieldKind::Text),
            "price" => Some(FieldKind::Float),
            "created_at" => Some(FieldKind::Timestamp),
            _ => None,
        }
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Integer(self.id.into())),
            "country" => Some(FieldValue::Text(self.country.clone())),
            "product" => Some(FieldValue::Text(self.product.clone())),
            "currency" => Some(FieldValue::Text(self.currency.clone())),
            "price" => Some(FieldValue::Float(self.price)),
            "created_at" => Some(FieldValue::Timestamp(self.created_at)),
            _ => None,
        }
    }
}
