use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::list::errors::ListError;
use crate::domain::list::model::{List, ListWithMarkets};
use crate::domain::list::repository::ListRepository;
use crate::domain::list::use_cases::create::{CreateListParams, CreateListUseCase};
use crate::domain::logger::Logger;
use crate::domain::market::repository::MarketRepository;

pub struct CreateListUseCaseImpl {
    pub repository: Arc<dyn ListRepository>,
    pub market_repository: Arc<dyn MarketRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateListUseCase for CreateListUseCaseImpl {
    async fn execute(&self, params: CreateListParams) -> Result<ListWithMarkets, ListError> {
        self.logger
            .info(&format!("Creating list '{}'", params.name));

        let list = List::new(params.name, params.identity.user_id.clone())?;
        self.repository.save(&list).await?;

        if !params.market_ids.is_empty() {
            self.repository
                .set_markets(list.id, &params.market_ids)
                .await?;
        }

        let markets = self.market_repository.get_by_list(list.id).await?;

        Ok(ListWithMarkets {
            list,
            markets,
            is_shared: false,
        })
    }
}
