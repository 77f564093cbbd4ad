use actix_web::{web, HttpResponse};
use roaster_core::use_cases::roast::{RoastDeveloperInterface, RoastReport};
use serde::{Deserialize, Serialize};
use shaku::HasComponent;

use crate::{metrics::ROASTS_GENERATED, server::AppContext, Result, ServerError};

#[derive(Debug, Deserialize)]
pub(crate) struct RoastQuery {
    username: Option<String>,
}

#[derive(Debug, Serialize)]
struct RoastStatsResponse {
    total_commits: usize,
    repos_analyzed: usize,
}

#[derive(Debug, Serialize)]
struct RoastResponse {
    username: String,
    roast: String,
    stats: RoastStatsResponse,
}

impl From<RoastReport> for RoastResponse {
    fn from(report: RoastReport) -> Self {
        Self {
            roast: report.roast.to_prose(),
            username: report.username,
            stats: RoastStatsResponse {
                total_commits: report.stats.total_commits,
                repos_analyzed: report.stats.repos_analyzed,
            },
        }
    }
}

/// Query extractor configuration answering malformed queries with a JSON error.
pub(crate) fn roast_query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        ServerError::InvalidQuery {
            message: err.to_string(),
        }
        .into()
    })
}

#[tracing::instrument(skip_all, fields(username = ?query.username))]
pub(crate) async fn roast_route(
    ctx: web::Data<AppContext>,
    query: web::Query<RoastQuery>,
) -> Result<HttpResponse> {
    let username = query
        .into_inner()
        .username
        .filter(|u| !u.is_empty())
        .ok_or(ServerError::MissingUsername)?;

    let roast_developer: &dyn RoastDeveloperInterface = ctx.core_module.resolve_ref();
    let report = roast_developer
        .run(&ctx.as_core_context(), &username)
        .await?;

    ROASTS_GENERATED.inc();
    Ok(HttpResponse::Ok().json(RoastResponse::from(report)))
}
