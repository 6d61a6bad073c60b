//! Mock repository for isolating the service layer in tests.

use mockall::mock;

use crate::domain::filter::Predicate;
use crate::domain::oil_price::OilPrice;
use crate::repository::errors::RepositoryResult;
use crate::repository::{EntityReader, EntityWriter, Pagination, SortSpec};

mock! {
    pub OilPriceRepository {}

    impl EntityReader<OilPrice> for OilPriceRepository {
        fn get_by_id(&self, id: i32) -> RepositoryResult<Option<OilPrice>>;
        fn search(
            &self,
            predicate: &Predicate<OilPrice>,
            sort: &SortSpec,
            pagination: &Pagination,
        ) -> RepositoryResult<(usize, Vec<OilPrice>)>;
    }

    impl EntityWriter<OilPrice> for OilPriceRepository {
        fn insert(&self, entity: &OilPrice) -> RepositoryResult<OilPrice>;
        fn update(&self, entity: &OilPrice) -> RepositoryResult<OilPrice>;
    }
}
