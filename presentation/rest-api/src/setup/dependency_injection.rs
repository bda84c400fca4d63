use std::sync::Arc;

use logger::TracingLogger;
use persistence::analytics::repository::AnalyticsRepositoryPostgres;
use persistence::item::repository::ItemRepositoryPostgres;
use persistence::list::repository::ListRepositoryPostgres;
use persistence::list_share::repository::ListShareRepositoryPostgres;
use persistence::market::repository::MarketRepositoryPostgres;
use persistence::profile::repository::ProfileRepositoryPostgres;

use business::application::access::authorize::ListAccessAuthorizerImpl;
use business::application::analytics::by_day::GetSpendingByDayUseCaseImpl;
use business::application::analytics::by_market::GetSpendingByMarketUseCaseImpl;
use business::application::analytics::summary::GetSpendingSummaryUseCaseImpl;
use business::application::item::create::CreateItemUseCaseImpl;
use business::application::item::delete::DeleteItemUseCaseImpl;
use business::application::item::mark_purchased::MarkItemPurchasedUseCaseImpl;
use business::application::item::unmark_purchased::UnmarkItemPurchasedUseCaseImpl;
use business::application::item::update::UpdateItemUseCaseImpl;
use business::application::list::create::CreateListUseCaseImpl;
use business::application::list::delete::DeleteListUseCaseImpl;
use business::application::list::duplicate::DuplicateListUseCaseImpl;
use business::application::list::get_all::GetAllListsUseCaseImpl;
use business::application::list::get_by_id::GetListByIdUseCaseImpl;
use business::application::list::share::ShareListUseCaseImpl;
use business::application::list::unshare::UnshareListUseCaseImpl;
use business::application::list::update::UpdateListUseCaseImpl;
use business::application::market::create::CreateMarketUseCaseImpl;
use business::application::market::delete::DeleteMarketUseCaseImpl;
use business::application::market::get_all::GetAllMarketsUseCaseImpl;
use business::application::market::update::UpdateMarketUseCaseImpl;
use business::application::profile::get::GetProfileUseCaseImpl;
use business::application::profile::update::UpdateProfileUseCaseImpl;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub market_api: crate::api::market::routes::MarketApi,
    pub list_api: crate::api::list::routes::ListApi,
    pub item_api: crate::api::item::routes::ItemApi,
    pub analytics_api: crate::api::analytics::routes::AnalyticsApi,
    pub profile_api: crate::api::profile::routes::ProfileApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let market_repository = Arc::new(MarketRepositoryPostgres::new(pool.clone()));
        let list_repository = Arc::new(ListRepositoryPostgres::new(pool.clone()));
        let share_repository = Arc::new(ListShareRepositoryPostgres::new(pool.clone()));
        let item_repository = Arc::new(ItemRepositoryPostgres::new(pool.clone()));
        let profile_repository = Arc::new(ProfileRepositoryPostgres::new(pool.clone()));
        let analytics_repository = Arc::new(AnalyticsRepositoryPostgres::new(pool));

        // The single access authority shared by every list-scoped mutation
        let authorizer = Arc::new(ListAccessAuthorizerImpl {
            list_repository: list_repository.clone(),
            share_repository: share_repository.clone(),
            logger: logger.clone(),
        });

        // Market use cases
        let create_market_use_case = Arc::new(CreateMarketUseCaseImpl {
            repository: market_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_markets_use_case = Arc::new(GetAllMarketsUseCaseImpl {
            repository: market_repository.clone(),
            logger: logger.clone(),
        });
        let update_market_use_case = Arc::new(UpdateMarketUseCaseImpl {
            repository: market_repository.clone(),
            logger: logger.clone(),
        });
        let delete_market_use_case = Arc::new(DeleteMarketUseCaseImpl {
            repository: market_repository.clone(),
            logger: logger.clone(),
        });

        // List use cases
        let get_all_lists_use_case = Arc::new(GetAllListsUseCaseImpl {
            repository: list_repository.clone(),
            market_repository: market_repository.clone(),
            logger: logger.clone(),
        });
        let get_list_by_id_use_case = Arc::new(GetListByIdUseCaseImpl {
            repository: list_repository.clone(),
            market_repository: market_repository.clone(),
            item_repository: item_repository.clone(),
            share_repository: share_repository.clone(),
            profile_repository: profile_repository.clone(),
            authorizer: authorizer.clone(),
            logger: logger.clone(),
        });
        let create_list_use_case = Arc::new(CreateListUseCaseImpl {
            repository: list_repository.clone(),
            market_repository: market_repository.clone(),
            logger: logger.clone(),
        });
        let update_list_use_case = Arc::new(UpdateListUseCaseImpl {
            repository: list_repository.clone(),
            market_repository: market_repository.clone(),
            authorizer: authorizer.clone(),
            logger: logger.clone(),
        });
        let delete_list_use_case = Arc::new(DeleteListUseCaseImpl {
            repository: list_repository.clone(),
            authorizer: authorizer.clone(),
            logger: logger.clone(),
        });
        let duplicate_list_use_case = Arc::new(DuplicateListUseCaseImpl {
            repository: list_repository.clone(),
            market_repository: market_repository.clone(),
            item_repository: item_repository.clone(),
            authorizer: authorizer.clone(),
            logger: logger.clone(),
        });
        let share_list_use_case = Arc::new(ShareListUseCaseImpl {
            share_repository: share_repository.clone(),
            authorizer: authorizer.clone(),
            logger: logger.clone(),
        });
        let unshare_list_use_case = Arc::new(UnshareListUseCaseImpl {
            share_repository,
            authorizer: authorizer.clone(),
            logger: logger.clone(),
        });

        // Item use cases
        let create_item_use_case = Arc::new(CreateItemUseCaseImpl {
            repository: item_repository.clone(),
            authorizer: authorizer.clone(),
            logger: logger.clone(),
        });
        let update_item_use_case = Arc::new(UpdateItemUseCaseImpl {
            repository: item_repository.clone(),
            market_repository: market_repository.clone(),
            authorizer: authorizer.clone(),
            logger: logger.clone(),
        });
        let mark_purchased_use_case = Arc::new(MarkItemPurchasedUseCaseImpl {
            repository: item_repository.clone(),
            market_repository: market_repository,
            authorizer: authorizer.clone(),
            logger: logger.clone(),
        });
        let unmark_purchased_use_case = Arc::new(UnmarkItemPurchasedUseCaseImpl {
            repository: item_repository.clone(),
            authorizer: authorizer.clone(),
            logger: logger.clone(),
        });
        let delete_item_use_case = Arc::new(DeleteItemUseCaseImpl {
            repository: item_repository,
            authorizer,
            logger: logger.clone(),
        });

        // Analytics use cases
        let summary_use_case = Arc::new(GetSpendingSummaryUseCaseImpl {
            repository: analytics_repository.clone(),
            logger: logger.clone(),
        });
        let by_day_use_case = Arc::new(GetSpendingByDayUseCaseImpl {
            repository: analytics_repository.clone(),
            logger: logger.clone(),
        });
        let by_market_use_case = Arc::new(GetSpendingByMarketUseCaseImpl {
            repository: analytics_repository,
            logger: logger.clone(),
        });

        // Profile use cases
        let get_profile_use_case = Arc::new(GetProfileUseCaseImpl {
            repository: profile_repository.clone(),
            logger: logger.clone(),
        });
        let update_profile_use_case = Arc::new(UpdateProfileUseCaseImpl {
            repository: profile_repository,
            logger,
        });

        let market_api = crate::api::market::routes::MarketApi::new(
            create_market_use_case,
            get_all_markets_use_case,
            update_market_use_case,
            delete_market_use_case,
        );
        let list_api = crate::api::list::routes::ListApi::new(
            get_all_lists_use_case,
            get_list_by_id_use_case,
            create_list_use_case,
            update_list_use_case,
            delete_list_use_case,
            duplicate_list_use_case,
            share_list_use_case,
            unshare_list_use_case,
        );
        let item_api = crate::api::item::routes::ItemApi::new(
            create_item_use_case,
            update_item_use_case,
            mark_purchased_use_case,
            unmark_purchased_use_case,
            delete_item_use_case,
        );
        let analytics_api = crate::api::analytics::routes::AnalyticsApi::new(
            summary_use_case,
            by_day_use_case,
            by_market_use_case,
        );
        let profile_api = crate::api::profile::routes::ProfileApi::new(
            get_profile_use_case,
            update_profile_use_case,
        );

        Self {
            health_api,
            market_api,
            list_api,
            item_api,
            analytics_api,
            profile_api,
        }
    }
}
