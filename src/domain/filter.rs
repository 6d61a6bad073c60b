//! Dynamic filter conditions and their compilation into predicates.
//!
//! Clients describe a search as a list of (field, operator, value)
//! triples. [`Predicate::build`] resolves each triple against the entity's
//! field registry ([`Filterable`]) up front, so that an unknown field, an
//! inapplicable operator, or an unconvertible value fails before any row
//! is touched. The compiled predicate is the logical AND of the
//! conditions, evaluated in input order.

use std::fmt::{Display, Formatter};
use std::marker::PhantomData;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Comparison operator of a single filter condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterOperator {
    Equal,
    NotEqual,
    Like,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
}

impl FilterOperator {
    /// Whether the operator needs an ordering on the field's type.
    pub fn is_ordering(self) -> bool {
        matches!(
            self,
            Self::GreaterThan | Self::GreaterThanOrEqual | Self::LessThan | Self::LessThanOrEqual
        )
    }
}

impl Display for FilterOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Equal => "Equal",
            Self::NotEqual => "NotEqual",
            Self::Like => "Like",
            Self::GreaterThan => "GreaterThan",
            Self::GreaterThanOrEqual => "GreaterThanOrEqual",
            Self::LessThan => "LessThan",
            Self::LessThanOrEqual => "LessThanOrEqual",
        };
        write!(f, "{name}")
    }
}

impl FromStr for FilterOperator {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Equal" => Ok(Self::Equal),
            "NotEqual" => Ok(Self::NotEqual),
            "Like" => Ok(Self::Like),
            "GreaterThan" => Ok(Self::GreaterThan),
            "GreaterThanOrEqual" => Ok(Self::GreaterThanOrEqual),
            "LessThan" => Ok(Self::LessThan),
            "LessThanOrEqual" => Ok(Self::LessThanOrEqual),
            other => Err(FilterError::UnknownOperator(other.to_string())),
        }
    }
}

/// A single client-supplied filter triple. The value stays opaque JSON
/// until it is checked against the field's declared kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCondition {
    pub field: String,
    pub operator: FilterOperator,
    pub value: serde_json::Value,
}

impl FilterCondition {
    pub fn new(
        field: impl Into<String>,
        operator: FilterOperator,
        value: serde_json::Value,
    ) -> Self {
        Self {
            field: field.into(),
            operator,
            value,
        }
    }
}

/// Declared type of a filterable entity field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Integer,
    Float,
    Text,
    Boolean,
    Timestamp,
}

impl FieldKind {
    /// Kinds with a usable ordering. Booleans only support equality.
    pub fn is_ordered(self) -> bool {
        !matches!(self, Self::Boolean)
    }
}

/// A field value after conversion from the opaque JSON representation.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Boolean(bool),
    Timestamp(NaiveDateTime),
}

impl FieldValue {
    fn from_json(kind: FieldKind, value: &serde_json::Value) -> Option<Self> {
        match kind {
            FieldKind::Integer => value.as_i64().map(Self::Integer),
            FieldKind::Float => value.as_f64().map(Self::Float),
            FieldKind::Text => value.as_str().map(|s| Self::Text(s.to_string())),
            FieldKind::Boolean => value.as_bool().map(Self::Boolean),
            FieldKind::Timestamp => value.as_str().and_then(parse_timestamp).map(Self::Timestamp),
        }
    }

    fn compare(&self, other: &Self) -> Option<std::cmp::Ordering> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Some(a.cmp(b)),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b),
            (Self::Text(a), Self::Text(b)) => Some(a.cmp(b)),
            (Self::Timestamp(a), Self::Timestamp(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    s.parse::<NaiveDateTime>()
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
        .ok()
}

/// Errors raised while compiling filter conditions into a predicate.
#[derive(Debug, Error, PartialEq)]
pub enum FilterError {
    /// The filtered entity has no field with the given name.
    #[error("entity has no field named `{0}`")]
    UnknownField(String),

    /// The operator cannot be applied to the field's kind, e.g. `Like`
    /// on a numeric field.
    #[error("operator {operator} is not applicable to field `{field}`")]
    UnsupportedOperator {
        field: String,
        operator: FilterOperator,
    },

    /// The supplied value cannot be converted to the field's kind.
    #[error("value does not convert to the {kind:?} field `{field}`")]
    TypeMismatch { field: String, kind: FieldKind },

    /// An ordering comparison was requested on a kind without one.
    #[error("field `{field}` of kind {kind:?} has no ordering")]
    NotOrdered { field: String, kind: FieldKind },

    /// The operator name is not one of the recognized set.
    #[error("unknown filter operator `{0}`")]
    UnknownOperator(String),
}

/// Entities that expose a closed registry of filterable fields.
///
/// This replaces per-call reflection: the set of fields and their kinds
/// is fixed per entity type, and predicate compilation resolves against
/// it once.
pub trait Filterable {
    /// Declared kind of the named field, or `None` if no such field.
    fn field_kind(name: &str) -> Option<FieldKind>;

    /// Current value of the named field on this instance.
    fn field(&self, name: &str) -> Option<FieldValue>;
}

/// One validated condition with its converted value; the field's kind is
/// carried by the [`FieldValue`] variant.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledCondition {
    pub field: String,
    pub operator: FilterOperator,
    pub value: FieldValue,
}

impl CompiledCondition {
    fn evaluate(&self, actual: &FieldValue) -> bool {
        match self.operator {
            FilterOperator::Equal => actual == &self.value,
            FilterOperator::NotEqual => actual != &self.value,
            FilterOperator::Like => match (actual, &self.value) {
                // ASCII-only case folding, same as SQLite LIKE; non-ASCII
                // characters compare exactly in both backends.
                (FieldValue::Text(haystack), FieldValue::Text(needle)) => haystack
                    .to_ascii_lowercase()
                    .contains(&needle.to_ascii_lowercase()),
                _ => false,
            },
            FilterOperator::GreaterThan => {
                matches!(actual.compare(&self.value), Some(std::cmp::Ordering::Greater))
            }
            FilterOperator::GreaterThanOrEqual => matches!(
                actual.compare(&self.value),
                Some(std::cmp::Ordering::Greater | std::cmp::Ordering::Equal)
            ),
            FilterOperator::LessThan => {
                matches!(actual.compare(&self.value), Some(std::cmp::Ordering::Less))
            }
            FilterOperator::LessThanOrEqual => matches!(
                actual.compare(&self.value),
                Some(std::cmp::Ordering::Less | std::cmp::Ordering::Equal)
            ),
        }
    }
}

/// Conjunction of compiled filter conditions over an entity type.
#[derive(Debug, Clone)]
pub struct Predicate<E> {
    conditions: Vec<CompiledCondition>,
    _entity: PhantomData<E>,
}

impl<E: Filterable> Predicate<E> {
    /// Compile the given conditions, failing fast on the first invalid
    /// one. An empty list yields a predicate that matches everything.
    pub fn build(filters: &[FilterCondition]) -> Result<Self, FilterError> {
        let mut conditions = Vec::with_capacity(filters.len());

        for filter in filters {
            let kind = E::field_kind(&filter.field)
                .ok_or_else(|| FilterError::UnknownField(filter.field.clone()))?;

            if filter.operator == FilterOperator::Like && kind != FieldKind::Text {
                return Err(FilterError::UnsupportedOperator {
                    field: filter.field.clone(),
                    operator: filter.operator,
                });
            }
            if filter.operator.is_ordering() && !kind.is_ordered() {
                return Err(FilterError::NotOrdered {
                    field: filter.field.clone(),
                    kind,
                });
            }

            let value = FieldValue::from_json(kind, &filter.value).ok_or_else(|| {
                FilterError::TypeMismatch {
                    field: filter.field.clone(),
                    kind,
                }
            })?;

            conditions.push(CompiledCondition {
                field: filter.field.clone(),
                operator: filter.operator,
                value,
            });
        }

        Ok(Self {
            conditions,
            _entity: PhantomData,
        })
    }

    /// Evaluate the conjunction against one entity, left to right.
    pub fn matches(&self, entity: &E) -> bool {
        self.conditions.iter().all(|condition| {
            entity
                .field(&condition.field)
                .is_some_and(|actual| condition.evaluate(&actual))
        })
    }

    /// The validated conditions, in input order, for backends that
    /// translate them into native query filters.
    pub fn conditions(&self) -> &[CompiledCondition] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}
