use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::access::service::ListAccessAuthorizer;
use crate::domain::list::errors::ListError;
use crate::domain::list::model::ListWithMarkets;
use crate::domain::list::repository::ListRepository;
use crate::domain::list::use_cases::update::{UpdateListParams, UpdateListUseCase};
use crate::domain::logger::Logger;
use crate::domain::market::repository::MarketRepository;

/// Rename and market re-association are open to shared users as well as
/// the owner; only manage-level operations are owner-gated.
pub struct UpdateListUseCaseImpl {
    pub repository: Arc<dyn ListRepository>,
    pub market_repository: Arc<dyn MarketRepository>,
    pub authorizer: Arc<dyn ListAccessAuthorizer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateListUseCase for UpdateListUseCaseImpl {
    async fn execute(&self, params: UpdateListParams) -> Result<ListWithMarkets, ListError> {
        let access = self.authorizer.authorize(params.id, &params.identity).await?;
        if !access.can_edit() {
            return Err(ListError::AccessDenied);
        }

        let mut list = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                crate::domain::errors::RepositoryError::NotFound => ListError::NotFound,
                other => ListError::Repository(other),
            })?;

        if let Some(name) = params.name {
            list.rename(name)?;
            self.repository.save(&list).await?;
        }

        if let Some(market_ids) = params.market_ids {
            self.repository.set_markets(list.id, &market_ids).await?;
        }

        let markets = self.market_repository.get_by_list(list.id).await?;
        let is_shared = !list.is_owned_by(&params.identity.user_id);

        self.logger.info(&format!("List {} updated", list.id));
        Ok(ListWithMarkets {
            list,
            markets,
            is_shared,
        })
    }
}
