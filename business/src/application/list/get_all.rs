use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::list::errors::ListError;
use crate::domain::list::model::ListWithMarkets;
use crate::domain::list::repository::ListRepository;
use crate::domain::list::use_cases::get_all::{GetAllListsParams, GetAllListsUseCase};
use crate::domain::logger::Logger;
use crate::domain::market::repository::MarketRepository;

pub struct GetAllListsUseCaseImpl {
    pub repository: Arc<dyn ListRepository>,
    pub market_repository: Arc<dyn MarketRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllListsUseCase for GetAllListsUseCaseImpl {
    async fn execute(&self, params: GetAllListsParams) -> Result<Vec<ListWithMarkets>, ListError> {
        self.logger.info(&format!(
            "Fetching lists for user {}",
            params.identity.user_id
        ));

        let owned = self.repository.get_owned(&params.identity.user_id).await?;
        let shared = self.repository.get_shared(&params.identity).await?;

        let mut result = Vec::with_capacity(owned.len() + shared.len());
        for list in owned.into_iter().chain(shared) {
            let markets = self.market_repository.get_by_list(list.id).await?;
            let is_shared = !list.is_owned_by(&params.identity.user_id);
            result.push(ListWithMarkets {
                list,
                markets,
                is_shared,
            });
        }

        Ok(result)
    }
}
