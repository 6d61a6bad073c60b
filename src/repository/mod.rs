//! Repository seams for the CRUD service.
//!
//! The service layer talks to storage through [`EntityReader`] and
//! [`EntityWriter`]; the Diesel implementations live in the sibling
//! modules, a mockall mock behind the `test-mocks` feature.

use crate::domain::filter::Predicate;
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod oil_price;

/// Page size used when a request does not name one.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Normalized 1-indexed page bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Clamps degenerate input: page 0 becomes 1, a zero page size
    /// becomes [`DEFAULT_PAGE_SIZE`].
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page: page.max(1),
            per_page: if per_page == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                per_page
            },
        }
    }

    pub fn offset(&self) -> usize {
        (self.page - 1) * self.per_page
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

/// Ordering applied to a search, named by entity field.
///
/// `field: None` means the default order: descending by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub field: Option<String>,
    pub ascending: bool,
}

impl SortSpec {
    pub fn by(field: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            ascending: false,
        }
    }

    pub fn ascending(mut self) -> Self {
        self.ascending = true;
        self
    }
}

/// Read side of an entity's storage.
pub trait EntityReader<E> {
    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<E>>;

    /// Total match count (before paging) and the requested page, ordered
    /// per `sort`.
    fn search(
        &self,
        predicate: &Predicate<E>,
        sort: &SortSpec,
        pagination: &Pagination,
    ) -> RepositoryResult<(usize, Vec<E>)>;
}

/// Write side of an entity's storage.
pub trait EntityWriter<E> {
    fn insert(&self, entity: &E) -> RepositoryResult<E>;
    fn update(&self, entity: &E) -> RepositoryResult<E>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_clamps_degenerate_input() {
        assert_eq!(Pagination::new(0, 0), Pagination::new(1, DEFAULT_PAGE_SIZE));
        assert_eq!(Pagination::new(3, 10).offset(), 20);
        assert_eq!(Pagination::new(0, 5).offset(), 0);
    }

    #[test]
    fn sort_spec_defaults_to_id_descending() {
        let sort = SortSpec::default();
        assert!(sort.field.is_none());
        assert!(!sort.ascending);
        assert_eq!(SortSpec::by("price").ascending().field.as_deref(), Some("price"));
    }
}
