use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::access::service::ListAccessAuthorizer;
use crate::domain::item::repository::ItemRepository;
use crate::domain::list::errors::ListError;
use crate::domain::list::model::{ListDetail, SharedUser};
use crate::domain::list::repository::ListRepository;
use crate::domain::list::use_cases::get_by_id::{GetListByIdParams, GetListByIdUseCase};
use crate::domain::list_share::repository::ListShareRepository;
use crate::domain::logger::Logger;
use crate::domain::market::repository::MarketRepository;
use crate::domain::profile::repository::ProfileRepository;
use crate::domain::shared::value_objects::UserId;

pub struct GetListByIdUseCaseImpl {
    pub repository: Arc<dyn ListRepository>,
    pub market_repository: Arc<dyn MarketRepository>,
    pub item_repository: Arc<dyn ItemRepository>,
    pub share_repository: Arc<dyn ListShareRepository>,
    pub profile_repository: Arc<dyn ProfileRepository>,
    pub authorizer: Arc<dyn ListAccessAuthorizer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetListByIdUseCase for GetListByIdUseCaseImpl {
    async fn execute(&self, params: GetListByIdParams) -> Result<ListDetail, ListError> {
        let access = self.authorizer.authorize(params.id, &params.identity).await?;

        let list = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                crate::domain::errors::RepositoryError::NotFound => ListError::NotFound,
                other => ListError::Repository(other),
            })?;
        let markets = self.market_repository.get_by_list(params.id).await?;
        let items = self.item_repository.get_by_list(params.id).await?;
        let is_shared = !list.is_owned_by(&params.identity.user_id);

        // Share principals are only disclosed to the owner.
        let shared_users = if access.can_manage() {
            let shares = self.share_repository.get_by_list(params.id).await?;
            let mut users = Vec::with_capacity(shares.len());
            for share in shares {
                let profile = self
                    .profile_repository
                    .find_by_user(&UserId::new(share.shared_principal.clone()))
                    .await?;
                users.push(SharedUser {
                    principal: share.shared_principal,
                    display_name: profile.and_then(|p| p.display_name),
                });
            }
            Some(users)
        } else {
            None
        };

        self.logger
            .debug(&format!("Fetched list {} detail", params.id));

        Ok(ListDetail {
            list,
            markets,
            items,
            is_shared,
            shared_users,
        })
    }
}
