//! Object mapping between entities and their DTOs.

use crate::domain::oil_price::OilPrice;
use crate::dto::oil_price::OilPriceDto;

/// Converts between an entity and its client-facing DTO.
///
/// Kept as a seam so the generic CRUD service never needs to know the
/// two shapes line up field by field.
pub trait EntityMapper<E, D> {
    fn to_entity(&self, dto: &D) -> E;
    fn to_dto(&self, entity: &E) -> D;

    fn to_dtos(&self, entities: &[E]) -> Vec<D> {
        entities.iter().map(|entity| self.to_dto(entity)).collect()
    }
}

/// Field-by-field mapper for [`OilPrice`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OilPriceMapper;

impl EntityMapper<OilPrice, OilPriceDto> for OilPriceMapper {
    fn to_entity(&self, dto: &OilPriceDto) -> OilPrice {
        OilPrice {
            id: dto.id,
            country: dto.country.clone(),
            product: dto.product.clone(),
            currency: dto.currency.clone(),
            price: dto.price,
            created_at: dto.created_at.unwrap_or_default(),
        }
    }

    fn to_dto(&self, entity: &OilPrice) -> OilPriceDto {
        OilPriceDto {
            id: entity.id,
            country: entity.country.clone(),
            product: entity.product.clone(),
            currency: entity.currency.clone(),
            price: entity.price,
            created_at: Some(entity.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_preserves_fields() {
        let dto = OilPriceDto {
            id: 3,
            country: "Norway".to_string(),
            product: "Diesel".to_string(),
            currency: "NOK".to_string(),
            price: 19.9,
            created_at: Some("2026-03-01T12:00:00".parse().unwrap()),
        };

        let entity = OilPriceMapper.to_entity(&dto);
        assert_eq!(OilPriceMapper.to_dto(&entity), dto);
    }

    #[test]
    fn maps_sequences() {
        let entities = vec![OilPrice::default(), OilPrice::default()];
        assert_eq!(OilPriceMapper.to_dtos(&entities).len(), 2);
    }
}
