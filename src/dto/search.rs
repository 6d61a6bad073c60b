//! Search request and paged result shapes.

use serde::{Deserialize, Serialize};

use crate::domain::filter::{FilterCondition, FilterOperator};

/// A paged search over an entity's rows with dynamic filters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub page: usize,
    #[serde(default)]
    pub per_page: usize,
    #[serde(default)]
    pub filters: Vec<FilterCondition>,
}

impl SearchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(
        mut self,
        field: impl Into<String>,
        operator: FilterOperator,
        value: serde_json::Value,
    ) -> Self {
        self.filters
            .push(FilterCondition::new(field, operator, value));
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.page = page;
        self.per_page = per_page;
        self
    }
}

/// One page of mapped results plus the total match count before paging.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PagedResult<T> {
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub items: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_builder_accumulates_filters() {
        let request = SearchRequest::new()
            .filter("country", FilterOperator::Equal, json!("Norway"))
            .filter("price", FilterOperator::GreaterThan, json!(10.0))
            .paginate(2, 50);

        assert_eq!(request.page, 2);
        assert_eq!(request.per_page, 50);
        assert_eq!(request.filters.len(), 2);
    }

    #[test]
    fn request_deserializes_with_defaults() {
        let request: SearchRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.page, 0);
        assert!(request.filters.is_empty());

        let request: SearchRequest = serde_json::from_str(
            r#"{"page":1,"per_page":10,"filters":[{"field":"country","operator":"Equal","value":"Norway"}]}"#,
        )
        .unwrap();
        assert_eq!(request.filters[0].field, "country");
    }
}
