use async_trait::async_trait;
use bigdecimal::BigDecimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use business::domain::analytics::model::{DayPurchases, MarketPurchases, PurchaseTotals};
use business::domain::analytics::repository::AnalyticsRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::Identity;

/// SQL form of the list visibility rule. Bound as: $1 = caller user id,
/// $2 = caller principal strings (user id + email). Must stay in lockstep
/// with the access authorizer's owner-or-shared decision.
const LIST_IN_SCOPE: &str = r#"(l.owner_user_id = $1 OR EXISTS (
    SELECT 1 FROM list_shares ls WHERE ls.list_id = l.id AND ls.shared_principal = ANY($2)
))"#;

#[derive(Debug, FromRow)]
struct TotalsRow {
    total_spent: BigDecimal,
    total_items: i64,
    total_lists: i64,
}

#[derive(Debug, FromRow)]
struct DayRow {
    day_of_week: i32,
    purchase_count: i64,
    total_spent: BigDecimal,
}

#[derive(Debug, FromRow)]
struct MarketRow {
    market_id: Uuid,
    name: String,
    items_purchased: i64,
    total_spent: BigDecimal,
    lists_count: i64,
}

pub struct AnalyticsRepositoryPostgres {
    pool: PgPool,
}

impl AnalyticsRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnalyticsRepository for AnalyticsRepositoryPostgres {
    async fn purchase_totals(
        &self,
        identity: &Identity,
    ) -> Result<PurchaseTotals, RepositoryError> {
        let row = sqlx::query_as::<_, TotalsRow>(&format!(
            r#"SELECT
                COALESCE(SUM(i.price * i.quantity), 0) AS total_spent,
                COUNT(*) AS total_items,
                COUNT(DISTINCT i.list_id) AS total_lists
            FROM items i
            JOIN lists l ON l.id = i.list_id
            WHERE i.is_purchased = TRUE AND {LIST_IN_SCOPE}"#
        ))
        .bind(identity.user_id.as_str())
        .bind(identity.principals())
        .fetch_one(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(PurchaseTotals {
            total_spent: row.total_spent,
            total_items: row.total_items,
            total_lists: row.total_lists,
        })
    }

    async fn purchased_by_day(
        &self,
        identity: &Identity,
    ) -> Result<Vec<DayPurchases>, RepositoryError> {
        // Grouped on the purchase timestamp's weekday (0 = Sunday);
        // weekdays without purchases produce no row.
        let rows = sqlx::query_as::<_, DayRow>(&format!(
            r#"SELECT
                CAST(EXTRACT(DOW FROM i.updated_at) AS INT4) AS day_of_week,
                COUNT(*) AS purchase_count,
                COALESCE(SUM(i.price * i.quantity), 0) AS total_spent
            FROM items i
            JOIN lists l ON l.id = i.list_id
            WHERE i.is_purchased = TRUE AND {LIST_IN_SCOPE}
            GROUP BY day_of_week
            ORDER BY day_of_week"#
        ))
        .bind(identity.user_id.as_str())
        .bind(identity.principals())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(rows
            .into_iter()
            .map(|row| DayPurchases {
                day_of_week: row.day_of_week as u32,
                purchase_count: row.purchase_count,
                total_spent: row.total_spent,
            })
            .collect())
    }

    async fn purchased_by_market(
        &self,
        identity: &Identity,
    ) -> Result<Vec<MarketPurchases>, RepositoryError> {
        // Every market the caller owns gets a row; the join condition
        // keeps out-of-scope purchases from other users' lists away
        // without dropping zero-purchase markets.
        let rows = sqlx::query_as::<_, MarketRow>(&format!(
            r#"SELECT
                m.id AS market_id,
                m.name,
                COUNT(i.id) AS items_purchased,
                COALESCE(SUM(i.price * i.quantity), 0) AS total_spent,
                COUNT(DISTINCT i.list_id) AS lists_count
            FROM markets m
            LEFT JOIN items i ON i.market_id = m.id AND i.is_purchased = TRUE AND EXISTS (
                SELECT 1 FROM lists l WHERE l.id = i.list_id AND {LIST_IN_SCOPE}
            )
            WHERE m.owner_user_id = $1
            GROUP BY m.id, m.name
            ORDER BY total_spent DESC"#
        ))
        .bind(identity.user_id.as_str())
        .bind(identity.principals())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(rows
            .into_iter()
            .map(|row| MarketPurchases {
                market_id: row.market_id,
                name: row.name,
                items_purchased: row.items_purchased,
                total_spent: row.total_spent,
                lists_count: row.lists_count,
            })
            .collect())
    }
}
