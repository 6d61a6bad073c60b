use chrono::Utc;
use serde_json::json;

use fuelwatch::domain::filter::{FilterError, FilterOperator};
use fuelwatch::dto::oil_price::OilPriceDto;
use fuelwatch::dto::search::SearchRequest;
use fuelwatch::repository::oil_price::DieselOilPriceRepository;
use fuelwatch::services::{ServiceError, oil_price};

mod common;

fn dto(country: &str, product: &str, price: f64) -> OilPriceDto {
    OilPriceDto {
        id: 0,
        country: country.to_string(),
        product: product.to_string(),
        currency: "USD".to_string(),
        price,
        created_at: None,
    }
}

#[test]
fn test_create_then_edit_preserves_creation_time() {
    let test_db = common::TestDb::new("test_create_then_edit.db");
    let repo = DieselOilPriceRepository::new(test_db.pool());

    let before = Utc::now().naive_utc();
    let created = oil_price::create_or_edit(&repo, &dto("Norway", "Diesel", 19.9))
        .unwrap()
        .unwrap();
    assert!(created.id > 0);
    let created_at = created.created_at.unwrap();
    assert!(created_at >= before);

    let edited = oil_price::create_or_edit(
        &repo,
        &OilPriceDto {
            price: 21.0,
            product: "Premium Diesel".to_string(),
            ..created.clone()
        },
    )
    .unwrap()
    .unwrap();

    assert_eq!(edited.id, created.id);
    assert_eq!(edited.price, 21.0);
    assert_eq!(edited.product, "Premium Diesel");
    assert_eq!(edited.created_at, Some(created_at));

    let fetched = oil_price::get_by_id(&repo, created.id).unwrap().unwrap();
    assert_eq!(fetched, edited);
}

#[test]
fn test_edit_of_unknown_id_returns_none() {
    let test_db = common::TestDb::new("test_edit_unknown_id.db");
    let repo = DieselOilPriceRepository::new(test_db.pool());

    let mut missing = dto("Norway", "Diesel", 19.9);
    missing.id = 12345;
    assert!(oil_price::create_or_edit(&repo, &missing).unwrap().is_none());
}

#[test]
fn test_create_round_trips_all_client_fields() {
    let test_db = common::TestDb::new("test_create_round_trip.db");
    let repo = DieselOilPriceRepository::new(test_db.pool());

    let input = dto("Japan", "Kerosene", 110.0);
    let created = oil_price::create_or_edit(&repo, &input).unwrap().unwrap();

    // Everything except the assigned id and the stamped timestamp.
    assert_eq!(created.country, input.country);
    assert_eq!(created.product, input.product);
    assert_eq!(created.currency, input.currency);
    assert_eq!(created.price, input.price);
}

#[test]
fn test_page_search_end_to_end() {
    let test_db = common::TestDb::new("test_page_search_e2e.db");
    let repo = DieselOilPriceRepository::new(test_db.pool());

    for (country, product, price) in [
        ("Norway", "Light Oil", 21.4),
        ("Norway", "Diesel", 19.9),
        ("Brazil", "Gasoline", 5.9),
    ] {
        oil_price::create_or_edit(&repo, &dto(country, product, price)).unwrap();
    }

    let request = SearchRequest::new()
        .filter("product", FilterOperator::Like, json!("oil"))
        .paginate(1, 10);
    let result = oil_price::page_search(&repo, &request).unwrap();

    assert_eq!(result.total, 1);
    assert_eq!(result.items[0].product, "Light Oil");

    let request = SearchRequest::new()
        .filter("country", FilterOperator::Equal, json!("Norway"))
        .filter("price", FilterOperator::LessThan, json!(21.0))
        .paginate(1, 10);
    let result = oil_price::page_search(&repo, &request).unwrap();

    assert_eq!(result.total, 1);
    assert_eq!(result.items[0].product, "Diesel");
}

#[test]
fn test_page_search_rejects_unknown_field() {
    let test_db = common::TestDb::new("test_page_search_unknown_field.db");
    let repo = DieselOilPriceRepository::new(test_db.pool());

    let request = SearchRequest::new().filter("Foo", FilterOperator::Equal, json!(1));
    let err = oil_price::page_search(&repo, &request).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Filter(FilterError::UnknownField(field)) if field == "Foo"
    ));
}
