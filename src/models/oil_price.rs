use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::oil_price::OilPrice as DomainOilPrice;

/// Diesel row model for [`crate::domain::oil_price::OilPrice`].
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::oil_prices)]
pub struct OilPrice {
    pub id: i32,
    pub country: String,
    pub product: String,
    pub currency: String,
    pub price: f64,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`OilPrice`]; the id is assigned by the database.
#[derive(Insertable)]
#[diesel(table_name = crate::schema::oil_prices)]
pub struct NewOilPrice<'a> {
    pub country: &'a str,
    pub product: &'a str,
    pub currency: &'a str,
    pub price: f64,
    pub created_at: NaiveDateTime,
}

/// Changeset applied when overwriting an existing row.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::oil_prices)]
pub struct UpdateOilPrice<'a> {
    pub country: &'a str,
    pub product: &'a str,
    pub currency: &'a str,
    pub price: f64,
    pub created_at: NaiveDateTime,
}

impl From<OilPrice> for DomainOilPrice {
    fn from(row: OilPrice) -> Self {
        Self {
            id: row.id,
            country: row.country,
            product: row.product,
            currency: row.currency,
            price: row.price,
            created_at: row.created_at,
        }
    }
}

impl<'a> From<&'a DomainOilPrice> for NewOilPrice<'a> {
    fn from(entity: &'a DomainOilPrice) -> Self {
        Self {
            country: &entity.country,
            product: &entity.product,
            currency: &entity.currency,
            price: entity.price,
            created_at: entity.created_at,
        }
    }
}

impl<'a> From<&'a DomainOilPrice> for UpdateOilPrice<'a> {
    fn from(entity: &'a DomainOilPrice) -> Self {
        Self {
            country: &entity.country,
            product: &entity.product,
            currency: &entity.currency,
            price: entity.price,
            created_at: entity.created_at,
        }
    }
}
