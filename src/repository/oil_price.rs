use diesel::expression::expression_types::NotSelectable;
use diesel::prelude::*;
use diesel::sql_types::Bool;
use diesel::sqlite::Sqlite;

use crate::db::{DbPool, get_connection};
use crate::domain::filter::{CompiledCondition, FieldValue, FilterOperator, Predicate};
use crate::domain::oil_price::OilPrice;
use crate::repository::{
    EntityReader, EntityWriter, Pagination, SortSpec,
    errors::{RepositoryError, RepositoryResult},
};
use crate::schema::oil_prices;

type BoxedCondition = Box<dyn BoxableExpression<oil_prices::table, Sqlite, SqlType = Bool>>;
type BoxedOrder = Box<dyn BoxableExpression<oil_prices::table, Sqlite, SqlType = NotSelectable>>;

/// Diesel implementation of the oil price repository.
///
/// Compiled predicate conditions are translated one-to-one into boxed
/// SQL filters, so the database evaluates the same conjunction the
/// in-memory predicate would.
pub struct DieselOilPriceRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> DieselOilPriceRepository<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }
}

macro_rules! comparable_filter {
    ($column:expr, $operator:expr, $value:expr) => {
        match $operator {
            FilterOperator::Equal => Box::new($column.eq($value)) as BoxedCondition,
            FilterOperator::NotEqual => Box::new($column.ne($value)) as BoxedCondition,
            FilterOperator::GreaterThan => Box::new($column.gt($value)) as BoxedCondition,
            FilterOperator::GreaterThanOrEqual => Box::new($column.ge($value)) as BoxedCondition,
            FilterOperator::LessThan => Box::new($column.lt($value)) as BoxedCondition,
            FilterOperator::LessThanOrEqual => Box::new($column.le($value)) as BoxedCondition,
            FilterOperator::Like => {
                return Err(RepositoryError::ValidationError(
                    "LIKE requires a text column".to_string(),
                ));
            }
        }
    };
}

macro_rules! text_filter {
    ($column:expr, $operator:expr, $value:expr) => {{
        let value = $value.to_string();
        match $operator {
            FilterOperator::Like => {
                Box::new($column.like(like_pattern(&value)).escape('\\')) as BoxedCondition
            }
            other => comparable_filter!($column, other, value),
        }
    }};
}

/// Wrap the needle in `%`, escaping LIKE metacharacters so they match
/// literally, the way the in-memory predicate treats them.
fn like_pattern(needle: &str) -> String {
    let escaped = needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// Translate one validated condition into a boxed SQL expression.
///
/// Unknown columns cannot normally reach this point; predicate
/// compilation already resolved each field against the entity schema.
fn condition_to_sql(condition: &CompiledCondition) -> RepositoryResult<BoxedCondition> {
    let expression = match (condition.field.as_str(), &condition.value) {
        ("id", FieldValue::Integer(value)) => {
            let id = i32::try_from(*value).map_err(|_| {
                RepositoryError::ValidationError(format!("id {value} out of range"))
            })?;
            comparable_filter!(oil_prices::id, condition.operator, id)
        }
        ("country", FieldValue::Text(value)) => {
            text_filter!(oil_prices::country, condition.operator, value)
        }
        ("product", FieldValue::Text(value)) => {
            text_filter!(oil_prices::product, condition.operator, value)
        }
        ("currency", FieldValue::Text(value)) => {
            text_filter!(oil_prices::currency, condition.operator, value)
        }
        ("price", FieldValue::Float(value)) => {
            comparable_filter!(oil_prices::price, condition.operator, *value)
        }
        ("created_at", FieldValue::Timestamp(value)) => {
            comparable_filter!(oil_prices::created_at, condition.operator, *value)
        }
        _ => {
            return Err(RepositoryError::ValidationError(format!(
                "no such column: {}",
                condition.field
            )));
        }
    };

    Ok(expression)
}

fn filtered(predicate: &Predicate<OilPrice>) -> RepositoryResult<oil_prices::BoxedQuery<'static, Sqlite>> {
    let mut query = oil_prices::table.into_boxed();
    for condition in predicate.conditions() {
        query = query.filter(condition_to_sql(condition)?);
    }
    Ok(query)
}

fn order_clause(sort: &SortSpec) -> RepositoryResult<BoxedOrder> {
    macro_rules! directed {
        ($column:expr) => {
            if sort.ascending {
                Box::new($column.asc()) as BoxedOrder
            } else {
                Box::new($column.desc()) as BoxedOrder
            }
        };
    }

    let order = match sort.field.as_deref() {
        Some("id") => directed!(oil_prices::id),
        Some("country") => directed!(oil_prices::country),
        Some("product") => directed!(oil_prices::product),
        Some("currency") => directed!(oil_prices::currency),
        Some("price") => directed!(oil_prices::price),
        Some("created_at") => directed!(oil_prices::created_at),
        Some(other) => {
            return Err(RepositoryError::ValidationError(format!(
                "no such column: {other}"
            )));
        }
        None => Box::new(oil_prices::id.desc()),
    };

    Ok(order)
}

impl EntityReader<OilPrice> for DieselOilPriceRepository<'_> {
    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<OilPrice>> {
        use crate::models::oil_price::OilPrice as DbOilPrice;

        let mut conn = get_connection(self.pool)?;
        let row = oil_prices::table
            .find(id)
            .first::<DbOilPrice>(&mut conn)
            .optional()?;

        Ok(row.map(Into::into))
    }

    fn search(
        &self,
        predicate: &Predicate<OilPrice>,
        sort: &SortSpec,
        pagination: &Pagination,
    ) -> RepositoryResult<(usize, Vec<OilPrice>)> {
        use crate::models::oil_price::OilPrice as DbOilPrice;

        let mut conn = get_connection(self.pool)?;

        let total: i64 = filtered(predicate)?.count().get_result(&mut conn)?;

        let items = filtered(predicate)?
            .order(order_clause(sort)?)
            .limit(pagination.per_page as i64)
            .offset(pagination.offset() as i64)
            .load::<DbOilPrice>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<OilPrice>>();

        Ok((total as usize, items))
    }
}

impl EntityWriter<OilPrice> for DieselOilPriceRepository<'_> {
    fn insert(&self, entity: &OilPrice) -> RepositoryResult<OilPrice> {
        use crate::models::oil_price::{NewOilPrice, OilPrice as DbOilPrice};

        let mut conn = get_connection(self.pool)?;
        let new_row: NewOilPrice = entity.into();
        let inserted = diesel::insert_into(oil_prices::table)
            .values(&new_row)
            .get_result::<DbOilPrice>(&mut conn)?;

        Ok(inserted.into())
    }

    fn update(&self, entity: &OilPrice) -> RepositoryResult<OilPrice> {
        use crate::models::oil_price::{OilPrice as DbOilPrice, UpdateOilPrice};

        let mut conn = get_connection(self.pool)?;
        let changes: UpdateOilPrice = entity.into();
        let updated = diesel::update(oil_prices::table.find(entity.id))
            .set(&changes)
            .get_result::<DbOilPrice>(&mut conn)?;

        Ok(updated.into())
    }
}
