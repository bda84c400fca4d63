use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::analytics::use_cases::by_day::{
    GetSpendingByDayParams, GetSpendingByDayUseCase,
};
use business::domain::analytics::use_cases::by_market::{
    GetSpendingByMarketParams, GetSpendingByMarketUseCase,
};
use business::domain::analytics::use_cases::summary::{
    GetSpendingSummaryParams, GetSpendingSummaryUseCase,
};

use crate::api::analytics::dto::{
    DaySpendingResponse, MarketSpendingResponse, SpendingSummaryResponse,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;

pub struct AnalyticsApi {
    summary_use_case: Arc<dyn GetSpendingSummaryUseCase>,
    by_day_use_case: Arc<dyn GetSpendingByDayUseCase>,
    by_market_use_case: Arc<dyn GetSpendingByMarketUseCase>,
}

impl AnalyticsApi {
    pub fn new(
        summary_use_case: Arc<dyn GetSpendingSummaryUseCase>,
        by_day_use_case: Arc<dyn GetSpendingByDayUseCase>,
        by_market_use_case: Arc<dyn GetSpendingByMarketUseCase>,
    ) -> Self {
        Self {
            summary_use_case,
            by_day_use_case,
            by_market_use_case,
        }
    }
}

/// Spending analytics API
///
/// Read-only aggregates over purchased items on lists the caller owns
/// or is shared into.
#[OpenApi]
impl AnalyticsApi {
    /// Spending summary
    ///
    /// Totals, average list cost, busiest weekday and cheapest market.
    #[oai(path = "/analytics/summary", method = "get", tag = "ApiTags::Analytics")]
    async fn summary(&self, auth: FirebaseBearer) -> SummaryResponse {
        let params = GetSpendingSummaryParams {
            identity: auth.0.identity(),
        };

        match self.summary_use_case.execute(params).await {
            Ok(summary) => SummaryResponse::Ok(Json(summary.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                SummaryResponse::InternalError(json)
            }
        }
    }

    /// Spending by weekday
    ///
    /// One entry per weekday with at least one purchase; quiet weekdays
    /// are omitted.
    #[oai(path = "/analytics/by-day", method = "get", tag = "ApiTags::Analytics")]
    async fn by_day(&self, auth: FirebaseBearer) -> ByDayResponse {
        let params = GetSpendingByDayParams {
            identity: auth.0.identity(),
        };

        match self.by_day_use_case.execute(params).await {
            Ok(days) => {
                let responses: Vec<DaySpendingResponse> =
                    days.into_iter().map(|d| d.into()).collect();
                ByDayResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ByDayResponse::InternalError(json)
            }
        }
    }

    /// Spending by market
    ///
    /// One entry per market the caller owns, including markets with no
    /// purchases yet.
    #[oai(
        path = "/analytics/by-market",
        method = "get",
        tag = "ApiTags::Analytics"
    )]
    async fn by_market(&self, auth: FirebaseBearer) -> ByMarketResponse {
        let params = GetSpendingByMarketParams {
            identity: auth.0.identity(),
        };

        match self.by_market_use_case.execute(params).await {
            Ok(markets) => {
                let responses: Vec<MarketSpendingResponse> =
                    markets.into_iter().map(|m| m.into()).collect();
                ByMarketResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ByMarketResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SummaryResponse {
    #[oai(status = 200)]
    Ok(Json<SpendingSummaryResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ByDayResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<DaySpendingResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ByMarketResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<MarketSpendingResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
