use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::analytics::errors::AnalyticsError;
use crate::domain::analytics::model::{MarketSpending, average};
use crate::domain::analytics::repository::AnalyticsRepository;
use crate::domain::analytics::use_cases::by_market::{
    GetSpendingByMarketParams, GetSpendingByMarketUseCase,
};
use crate::domain::logger::Logger;

pub struct GetSpendingByMarketUseCaseImpl {
    pub repository: Arc<dyn AnalyticsRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetSpendingByMarketUseCase for GetSpendingByMarketUseCaseImpl {
    async fn execute(
        &self,
        params: GetSpendingByMarketParams,
    ) -> Result<Vec<MarketSpending>, AnalyticsError> {
        self.logger.info(&format!(
            "Computing by-market spending for user {}",
            params.identity.user_id
        ));

        let rows = self.repository.purchased_by_market(&params.identity).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let avg_item_cost = average(&row.total_spent, row.items_purchased);
                MarketSpending {
                    market_id: row.market_id,
                    name: row.name,
                    items_purchased: row.items_purchased,
                    total_spent: row.total_spent,
                    avg_item_cost,
                    lists_count: row.lists_count,
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analytics::model::{DayPurchases, MarketPurchases, PurchaseTotals};
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::{Email, Identity, UserId};
    use bigdecimal::BigDecimal;
    use mockall::mock;
    use num_traits::Zero;
    use uuid::Uuid;

    mock! {
        pub AnalyticsRepo {}

        #[async_trait]
        impl AnalyticsRepository for AnalyticsRepo {
            async fn purchase_totals(&self, identity: &Identity) -> Result<PurchaseTotals, RepositoryError>;
            async fn purchased_by_day(&self, identity: &Identity) -> Result<Vec<DayPurchases>, RepositoryError>;
            async fn purchased_by_market(&self, identity: &Identity) -> Result<Vec<MarketPurchases>, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn test_identity() -> Identity {
        Identity::new(UserId::new("user-b"), Email::new("b@example.com").unwrap())
    }

    #[tokio::test]
    async fn computes_average_item_cost_per_market() {
        let market_id = Uuid::new_v4();
        let mut repo = MockAnalyticsRepo::new();
        repo.expect_purchased_by_market().returning(move |_| {
            Ok(vec![MarketPurchases {
                market_id,
                name: "Mercado M".to_string(),
                items_purchased: 1,
                total_spent: BigDecimal::from(20),
                lists_count: 1,
            }])
        });

        let use_case = GetSpendingByMarketUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let markets = use_case
            .execute(GetSpendingByMarketParams {
                identity: test_identity(),
            })
            .await
            .unwrap();

        assert_eq!(markets.len(), 1);
        assert_eq!(markets[0].items_purchased, 1);
        assert_eq!(markets[0].total_spent, BigDecimal::from(20));
        assert_eq!(markets[0].avg_item_cost, BigDecimal::from(20));
        assert_eq!(markets[0].lists_count, 1);
    }

    #[tokio::test]
    async fn zero_purchase_markets_keep_zero_average() {
        let mut repo = MockAnalyticsRepo::new();
        repo.expect_purchased_by_market().returning(|_| {
            Ok(vec![MarketPurchases {
                market_id: Uuid::new_v4(),
                name: "Untouched".to_string(),
                items_purchased: 0,
                total_spent: BigDecimal::zero(),
                lists_count: 0,
            }])
        });

        let use_case = GetSpendingByMarketUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let markets = use_case
            .execute(GetSpendingByMarketParams {
                identity: test_identity(),
            })
            .await
            .unwrap();

        // The market still appears, with zeros instead of an error.
        assert_eq!(markets.len(), 1);
        assert_eq!(markets[0].avg_item_cost, BigDecimal::zero());
    }

    #[tokio::test]
    async fn store_failure_surfaces() {
        let mut repo = MockAnalyticsRepo::new();
        repo.expect_purchased_by_market()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetSpendingByMarketUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetSpendingByMarketParams {
                identity: test_identity(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AnalyticsError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
