use sqlx::MySqlPool;

/// ===============================
/// SQL bindable value enum
/// ===============================
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    String(String),
    U64(u64),
    Null,
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::String(value)
    }
}

impl From<u64> for SqlValue {
    fn from(value: u64) -> Self {
        SqlValue::U64(value)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(SqlValue::Null, Into::into)
    }
}

/// ===============================
/// Column assignments for a partial update
/// ===============================
#[derive(Debug, Default)]
pub struct Assignments {
    columns: Vec<(&'static str, SqlValue)>,
}

impl Assignments {
    /// Records `column = value` only when a value was supplied.
    pub fn set_if_some<T: Into<SqlValue>>(&mut self, column: &'static str, value: Option<T>) {
        if let Some(v) = value {
            self.columns.push((column, v.into()));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// ===============================
/// SQL update container
/// ===============================
#[derive(Debug)]
pub struct SqlUpdate {
    pub sql: String,
    pub values: Vec<SqlValue>,
}

/// ===============================
/// Build UPDATE SQL for live rows
/// ===============================
/// Returns `None` when there is nothing to assign.
pub fn build_update_sql(
    table: &str,
    assignments: Assignments,
    id_column: &str,
    id_value: u64,
) -> Option<SqlUpdate> {
    if assignments.is_empty() {
        return None;
    }

    let set_clause = assignments
        .columns
        .iter()
        .map(|(column, _)| format!("{} = ?", column))
        .collect::<Vec<_>>()
        .join(", ");

    let sql = format!(
        "UPDATE {} SET {} WHERE {} = ? AND deleted_at IS NULL",
        table, set_clause, id_column
    );

    let mut values: Vec<SqlValue> = assignments.columns.into_iter().map(|(_, v)| v).collect();

    // WHERE id = ?
    values.push(SqlValue::U64(id_value));

    Some(SqlUpdate { sql, values })
}

/// ===============================
/// Execute the update
/// ===============================
pub async fn execute_update(pool: &MySqlPool, update: SqlUpdate) -> Result<u64, sqlx::Error> {
    let mut query = sqlx::query(&update.sql);

    for value in update.values {
        query = match value {
            SqlValue::String(v) => query.bind(v),
            SqlValue::U64(v) => query.bind(v),
            SqlValue::Null => query.bind(None::<String>),
        };
    }

    let result = query.execute(pool).await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_supplied_columns_are_assigned() {
        let mut assignments = Assignments::default();
        assignments.set_if_some("full_name", Some("Jane Roe".to_string()));
        assignments.set_if_some::<String>("email", None);
        assignments.set_if_some("department_id", Some(3_u64));

        let update = build_update_sql("employees", assignments, "id", 7).unwrap();

        assert_eq!(
            update.sql,
            "UPDATE employees SET full_name = ?, department_id = ? WHERE id = ? AND deleted_at IS NULL"
        );
        assert_eq!(
            update.values,
            vec![
                SqlValue::String("Jane Roe".into()),
                SqlValue::U64(3),
                SqlValue::U64(7)
            ]
        );
    }

    #[test]
    fn explicit_null_is_bound_as_null() {
        let mut assignments = Assignments::default();
        assignments.set_if_some("description", Some(None::<String>));

        let update = build_update_sql("departments", assignments, "id", 1).unwrap();
        assert_eq!(update.values[0], SqlValue::Null);
    }

    #[test]
    fn nothing_to_assign_yields_no_statement() {
        assert!(build_update_sql("employees", Assignments::default(), "id", 1).is_none());
    }
}
