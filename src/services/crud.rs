//! Generic CRUD operations: dynamic paged search and upsert.
//!
//! Both operations are generic over the entity, its DTO, and the
//! repository/mapper seams, so concrete services stay one-line wrappers.

use chrono::Utc;

use crate::domain::Entity;
use crate::domain::filter::{FilterError, Filterable, Predicate};
use crate::dto::search::{PagedResult, SearchRequest};
use crate::mapper::EntityMapper;
use crate::repository::{EntityReader, EntityWriter, Pagination, SortSpec};
use crate::services::ServiceResult;

/// Run a filtered, ordered, paged search and map the page to DTOs.
///
/// `order` is the concrete service's optional override; `None` falls
/// back to descending by identifier. Filter compilation fails before the
/// repository is consulted, so no partial results can escape.
pub fn page_search<E, D, R, M>(
    repo: &R,
    mapper: &M,
    request: &SearchRequest,
    order: Option<SortSpec>,
) -> ServiceResult<PagedResult<D>>
where
    E: Filterable,
    R: EntityReader<E> + ?Sized,
    M: EntityMapper<E, D> + ?Sized,
{
    let predicate = Predicate::<E>::build(&request.filters)?;

    let sort = order.unwrap_or_default();
    if let Some(field) = &sort.field {
        E::field_kind(field).ok_or_else(|| FilterError::UnknownField(field.clone()))?;
    }

    let pagination = Pagination::new(request.page, request.per_page);
    let (total, entities) = repo.search(&predicate, &sort, &pagination)?;

    Ok(PagedResult {
        total,
        page: pagination.page,
        per_page: pagination.per_page,
        items: mapper.to_dtos(&entities),
    })
}

/// Insert the DTO as a new entity (`id == 0`) or overwrite the existing
/// one (`id != 0`).
///
/// Inserts stamp the creation time with the current instant. Updates
/// keep the stored creation time of the fetched row instead of
/// re-stamping it, and an update against an id that no longer exists
/// yields `Ok(None)` rather than an error.
pub fn create_or_edit<E, D, R, M>(repo: &R, mapper: &M, dto: &D) -> ServiceResult<Option<D>>
where
    E: Entity,
    R: EntityReader<E> + EntityWriter<E> + ?Sized,
    M: EntityMapper<E, D> + ?Sized,
{
    let mut entity = mapper.to_entity(dto);

    let saved = if entity.id() == 0 {
        entity.set_created_at(Utc::now().naive_utc());
        repo.insert(&entity)?
    } else {
        let Some(existing) = repo.get_by_id(entity.id())? else {
            return Ok(None);
        };
        entity.set_created_at(existing.created_at());
        repo.update(&entity)?
    };

    Ok(Some(mapper.to_dto(&saved)))
}
