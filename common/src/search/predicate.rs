// WHERE-clause builder shared by the count, data and projection queries

use sqlx::{Postgres, QueryBuilder};

/// A value bound to one placeholder of a predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Text(String),
    Int(i32),
    TextList(Vec<String>),
}

/// How a clause compares its column against the bound value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Equals,
    /// Case-insensitive substring match; the bound value is already a `%..%` pattern.
    Contains,
    MonthOf,
    YearOf,
    OneOf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub name: &'static str,
    pub column: &'static str,
    pub condition: Condition,
    pub value: SqlValue,
}

/// Ordered list of `AND` clauses, each with exactly one named binding.
///
/// Placeholders are numbered in insertion order, so anything a query appends
/// after [`Predicate::push_conditions`] (pagination bounds) binds after the
/// predicate values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predicate {
    clauses: Vec<Clause>,
}

impl Predicate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn equals(mut self, name: &'static str, column: &'static str, value: SqlValue) -> Self {
        self.push(name, column, Condition::Equals, value);
        self
    }

    /// Substring match. `%`, `_` and `\` in `needle` are matched literally.
    pub fn contains(mut self, name: &'static str, column: &'static str, needle: &str) -> Self {
        let pattern = format!("%{}%", escape_like(needle));
        self.push(name, column, Condition::Contains, SqlValue::Text(pattern));
        self
    }

    pub fn month_of(mut self, name: &'static str, column: &'static str, month: i32) -> Self {
        self.push(name, column, Condition::MonthOf, SqlValue::Int(month));
        self
    }

    pub fn year_of(mut self, name: &'static str, column: &'static str, year: i32) -> Self {
        self.push(name, column, Condition::YearOf, SqlValue::Int(year));
        self
    }

    pub fn one_of(mut self, name: &'static str, column: &'static str, values: Vec<String>) -> Self {
        self.push(name, column, Condition::OneOf, SqlValue::TextList(values));
        self
    }

    fn push(
        &mut self,
        name: &'static str,
        column: &'static str,
        condition: Condition,
        value: SqlValue,
    ) {
        self.clauses.push(Clause {
            name,
            column,
            condition,
            value,
        });
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Binding names and values in placeholder order.
    pub fn bindings(&self) -> impl Iterator<Item = (&'static str, &SqlValue)> {
        self.clauses.iter().map(|c| (c.name, &c.value))
    }

    pub fn binding(&self, name: &str) -> Option<&SqlValue> {
        self.clauses.iter().find(|c| c.name == name).map(|c| &c.value)
    }

    /// Appends ` AND <condition>` for every clause, binding each value.
    ///
    /// The builder must already hold a `WHERE` (the table fragments end in
    /// `WHERE 1=1`).
    pub fn push_conditions(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        for clause in &self.clauses {
            builder.push(" AND ");
            match clause.condition {
                Condition::Equals => {
                    builder.push(quoted(clause.column)).push(" = ");
                }
                Condition::Contains => {
                    builder.push(quoted(clause.column)).push(" ILIKE ");
                }
                Condition::MonthOf => {
                    builder
                        .push("EXTRACT(MONTH FROM ")
                        .push(quoted(clause.column))
                        .push(") = ");
                }
                Condition::YearOf => {
                    builder
                        .push("EXTRACT(YEAR FROM ")
                        .push(quoted(clause.column))
                        .push(") = ");
                }
                Condition::OneOf => {
                    builder.push(quoted(clause.column)).push(" = ANY(");
                }
            }

            match &clause.value {
                SqlValue::Text(v) => builder.push_bind(v.clone()),
                SqlValue::Int(v) => builder.push_bind(*v),
                SqlValue::TextList(v) => builder.push_bind(v.clone()),
            };

            if clause.condition == Condition::OneOf {
                builder.push(")");
            }
        }
    }
}

fn quoted(column: &str) -> String {
    format!("\"{column}\"")
}

/// Escapes LIKE metacharacters using the default `\` escape.
pub fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
