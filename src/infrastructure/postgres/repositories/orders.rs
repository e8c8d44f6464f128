use anyhow::Result;
use async_trait::async_trait;
use diesel::{
    RunQueryDsl, delete, dsl, insert_into,
    insertable::Insertable,
    pg::Pg,
    prelude::*,
    query_builder::{
        AsChangeset, DeleteStatement, InsertStatement, IntoUpdateTarget, UpdateStatement,
    },
    update,
};
use std::sync::Arc;

use crate::domain;
use crate::infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::orders};
use domain::{
    entities::orders::{InsertOrderEntity, OrderEntity, UpdateOrderEntity},
    repositories::orders::OrderRepository,
    value_objects::orders::ListOrdersFilter,
};

type FindOrder = dsl::Find<orders::table, i32>;
type OrderWhereClause = <FindOrder as IntoUpdateTarget>::WhereClause;

type InsertOrderQuery<'a> =
    InsertStatement<orders::table, <&'a InsertOrderEntity as Insertable<orders::table>>::Values>;

type UpdateOrderQuery<'a> = UpdateStatement<
    orders::table,
    OrderWhereClause,
    <&'a UpdateOrderEntity as AsChangeset>::Changeset,
>;

type DeleteOrderQuery = DeleteStatement<orders::table, OrderWhereClause>;

fn find_query(order_id: i32) -> FindOrder {
    orders::table.find(order_id)
}

fn insert_query(order: &InsertOrderEntity) -> InsertOrderQuery<'_> {
    insert_into(orders::table).values(order)
}

fn update_query(order_id: i32, order: &UpdateOrderEntity) -> UpdateOrderQuery<'_> {
    update(find_query(order_id)).set(order)
}

fn delete_query(order_id: i32) -> DeleteOrderQuery {
    delete(find_query(order_id))
}

/// No ORDER BY: rows come back in whatever order PostgreSQL scans them.
fn list_query(filter: &ListOrdersFilter) -> orders::BoxedQuery<'_, Pg> {
    let mut query = orders::table.into_boxed();

    if let Some(user_id) = &filter.user_id {
        query = query.filter(orders::user_id.eq(user_id));
    }

    query.limit(filter.limit).offset(filter.offset)
}

pub struct OrderPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl OrderPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl OrderRepository for OrderPostgres {
    async fn find_by_id(&self, order_id: i32) -> Result<OrderEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let order = find_query(order_id).first::<OrderEntity>(&mut conn)?;

        Ok(order)
    }

    async fn create(&self, order: InsertOrderEntity) -> Result<i32> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let order_id = insert_query(&order)
            .returning(orders::id)
            .get_result::<i32>(&mut conn)?;

        Ok(order_id)
    }

    async fn update(&self, order_id: i32, order: UpdateOrderEntity) -> Result<usize> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let affected = update_query(order_id, &order).execute(&mut conn)?;

        Ok(affected)
    }

    async fn delete(&self, order_id: i32) -> Result<usize> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let affected = delete_query(order_id).execute(&mut conn)?;

        Ok(affected)
    }

    async fn list(&self, filter: &ListOrdersFilter) -> Result<Vec<OrderEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = list_query(filter).load::<OrderEntity>(&mut conn)?;

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::debug_query;

    const ALL_COLUMNS: &str = concat!(
        r#"SELECT "orders"."id", "orders"."paypal_id", "orders"."user_id", "#,
        r#""orders"."cluster_name", "orders"."has_control_plane", "orders"."has_monitoring", "#,
        r#""orders"."has_alerting", "orders"."images_storage", "orders"."monitoring_storage" "#,
        r#"FROM "orders""#
    );

    fn sample_row() -> InsertOrderEntity {
        InsertOrderEntity {
            paypal_id: "5O190127TN364715T".to_string(),
            user_id: "11111111-1111-1111-1111-111111111111".to_string(),
            cluster_name: "prod-1".to_string(),
            has_control_plane: true,
            has_monitoring: true,
            has_alerting: false,
            images_storage: 10,
            monitoring_storage: 50,
        }
    }

    #[test]
    fn find_selects_every_column_by_primary_key() {
        let sql = debug_query::<Pg, _>(&find_query(7)).to_string();

        assert_eq!(
            sql,
            format!(r#"{ALL_COLUMNS} WHERE ("orders"."id" = $1) -- binds: [7]"#)
        );
    }

    #[test]
    fn insert_binds_every_column_except_id_and_returns_id() {
        let row = sample_row();
        let query = insert_query(&row).returning(orders::id);

        let sql = debug_query::<Pg, _>(&query).to_string();

        assert!(sql.starts_with(concat!(
            r#"INSERT INTO "orders" ("paypal_id", "user_id", "cluster_name", "#,
            r#""has_control_plane", "has_monitoring", "has_alerting", "images_storage", "#,
            r#""monitoring_storage") VALUES ($1, $2, $3, $4, $5, $6, $7, $8) "#,
            r#"RETURNING "orders"."id""#
        )));
        assert!(!sql.contains(r#"("id""#));
    }

    #[test]
    fn update_rewrites_every_column_by_id() {
        let row = sample_row();

        let sql = debug_query::<Pg, _>(&update_query(9, &row)).to_string();

        assert_eq!(
            sql,
            concat!(
                r#"UPDATE "orders" SET "paypal_id" = $1, "user_id" = $2, "cluster_name" = $3, "#,
                r#""has_control_plane" = $4, "has_monitoring" = $5, "has_alerting" = $6, "#,
                r#""images_storage" = $7, "monitoring_storage" = $8 WHERE ("orders"."id" = $9) "#,
                r#"-- binds: ["5O190127TN364715T", "11111111-1111-1111-1111-111111111111", "#,
                r#""prod-1", true, true, false, 10, 50, 9]"#
            )
        );
    }

    #[test]
    fn delete_targets_a_single_id() {
        let sql = debug_query::<Pg, _>(&delete_query(404)).to_string();

        assert_eq!(
            sql,
            r#"DELETE FROM "orders" WHERE ("orders"."id" = $1) -- binds: [404]"#
        );
    }

    #[test]
    fn list_pages_without_ordering() {
        let filter = ListOrdersFilter::new(3, 2);

        let sql = debug_query::<Pg, _>(&list_query(&filter)).to_string();

        assert_eq!(
            sql,
            format!(r#"{ALL_COLUMNS} LIMIT $1 OFFSET $2 -- binds: [2, 3]"#)
        );
        assert!(!sql.contains("ORDER BY"));
    }

    #[test]
    fn list_user_filter_is_bound_not_interpolated() {
        let filter = ListOrdersFilter::new(3, 2).for_user("u");

        let sql = debug_query::<Pg, _>(&list_query(&filter)).to_string();

        assert_eq!(
            sql,
            format!(
                r#"{ALL_COLUMNS} WHERE ("orders"."user_id" = $1) LIMIT $2 OFFSET $3 -- binds: {}"#,
                r#"["u", 2, 3]"#
            )
        );
    }
}
