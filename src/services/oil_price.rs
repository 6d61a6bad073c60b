//! Oil price service: the concrete CRUD surface consumed by callers.

use crate::domain::oil_price::OilPrice;
use crate::dto::oil_price::OilPriceDto;
use crate::dto::search::{PagedResult, SearchRequest};
use crate::mapper::{EntityMapper, OilPriceMapper};
use crate::repository::{EntityReader, EntityWriter};
use crate::services::{ServiceResult, crud};

/// Paged search over oil price records with dynamic filters.
pub fn page_search<R>(repo: &R, request: &SearchRequest) -> ServiceResult<PagedResult<OilPriceDto>>
where
    R: EntityReader<OilPrice> + ?Sized,
{
    crud::page_search(repo, &OilPriceMapper, request, None)
}

/// Insert a new record (`id == 0`) or overwrite an existing one.
pub fn create_or_edit<R>(repo: &R, dto: &OilPriceDto) -> ServiceResult<Option<OilPriceDto>>
where
    R: EntityReader<OilPrice> + EntityWriter<OilPrice> + ?Sized,
{
    crud::create_or_edit(repo, &OilPriceMapper, dto)
}

/// Fetch a single record by its identifier.
pub fn get_by_id<R>(repo: &R, id: i32) -> ServiceResult<Option<OilPriceDto>>
where
    R: EntityReader<OilPrice> + ?Sized,
{
    let entity = repo.get_by_id(id)?;
    Ok(entity.map(|e| OilPriceMapper.to_dto(&e)))
}
