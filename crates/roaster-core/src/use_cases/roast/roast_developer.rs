use async_trait::async_trait;
use shaku::{Component, HasComponent, Interface};
use tracing::info;

use super::{utils::RoastGenerator, RoastReport, RoastStats};
use crate::{use_cases::activity::AggregateActivityInterface, CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait RoastDeveloperInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, username: &str) -> Result<RoastReport>;
}

#[derive(Component)]
#[shaku(interface = RoastDeveloperInterface)]
pub struct RoastDeveloper;

#[async_trait]
impl RoastDeveloperInterface for RoastDeveloper {
    #[tracing::instrument(skip(self, ctx), ret)]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, username: &str) -> Result<RoastReport> {
        let aggregate_activity: &dyn AggregateActivityInterface = ctx.core_module.resolve_ref();
        let activity = aggregate_activity.run(ctx, username).await?;

        let roast = RoastGenerator::default().generate(&activity.commits);
        let stats = RoastStats {
            total_commits: activity.commits.len(),
            repos_analyzed: activity.repos_considered,
        };

        info!(
            username = username,
            total_commits = stats.total_commits,
            repos_analyzed = stats.repos_analyzed,
            lines = roast.lines().len(),
            message = "Roast generated"
        );

        Ok(RoastReport {
            username: username.into(),
            roast,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use roaster_ghapi_interface::{
        types::{GhCommit, GhRepository, GhUser},
        ApiError, MockApiService,
    };
    use time::{macros::datetime, OffsetDateTime};

    use super::*;
    use crate::{
        context::tests::CoreContextTest,
        use_cases::{
            activity::{AggregatedActivity, MockAggregateActivityInterface},
            roast::{
                utils::{LATE_NIGHT_MESSAGE, NO_ACTIVITY_MESSAGE},
                Roast,
            },
        },
        CoreModule, DomainError,
    };

    fn commit(message: &str, committed_at: OffsetDateTime) -> GhCommit {
        GhCommit {
            message: message.into(),
            committed_at,
        }
    }

    #[tokio::test]
    async fn octocat_scenario() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service = {
            let mut svc = MockApiService::new();
            svc.expect_users_get().once().return_once(|_| {
                Ok(GhUser {
                    login: "octocat".into(),
                })
            });
            svc.expect_repositories_list().once().return_once(|_, _| {
                Ok(vec![
                    GhRepository {
                        name: "repo-a".into(),
                        updated_at: datetime!(2024-05-02 10:00 UTC),
                    },
                    GhRepository {
                        name: "repo-b".into(),
                        updated_at: datetime!(2024-05-01 10:00 UTC),
                    },
                ])
            });
            svc.expect_commits_list()
                .times(2)
                .returning(|_, name, _| match name {
                    "repo-a" => Ok(vec![
                        commit("Add parser", datetime!(2024-05-01 02:00 UTC)),
                        commit("Add lexer", datetime!(2024-05-01 02:10 UTC)),
                        commit("Add tests", datetime!(2024-05-01 02:20 UTC)),
                    ]),
                    _ => Ok(vec![commit("Add docs", datetime!(2024-05-01 14:00 UTC))]),
                });
            svc
        };

        let report = RoastDeveloper
            .run(&ctx.as_context(), "octocat")
            .await
            .unwrap();

        assert_eq!(
            report,
            RoastReport {
                username: "octocat".into(),
                roast: Roast::single(LATE_NIGHT_MESSAGE),
                stats: RoastStats {
                    total_commits: 4,
                    repos_analyzed: 2,
                },
            }
        );
    }

    #[tokio::test]
    async fn no_activity() {
        let mut ctx = CoreContextTest::new();
        ctx.core_module = {
            let mut aggregate_activity = MockAggregateActivityInterface::new();
            aggregate_activity
                .expect_run()
                .once()
                .withf(|_, username| username == "octocat")
                .return_once(|_, _| {
                    Ok(AggregatedActivity {
                        commits: vec![],
                        repos_considered: 3,
                    })
                });

            CoreModule::builder()
                .with_component_override::<dyn AggregateActivityInterface>(Box::new(
                    aggregate_activity,
                ))
                .build()
        };

        let report = RoastDeveloper
            .run(&ctx.as_context(), "octocat")
            .await
            .unwrap();

        assert_eq!(report.roast.lines(), &[NO_ACTIVITY_MESSAGE.to_string()]);
        assert_eq!(
            report.stats,
            RoastStats {
                total_commits: 0,
                repos_analyzed: 3,
            }
        );
    }

    #[tokio::test]
    async fn propagate_errors() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service = {
            let mut svc = MockApiService::new();
            svc.expect_users_get()
                .once()
                .return_once(|_| Err(ApiError::RateLimited { reset_at: None }));
            svc
        };

        let error = RoastDeveloper
            .run(&ctx.as_context(), "octocat")
            .await
            .unwrap_err();

        assert!(matches!(error, DomainError::RateLimited { .. }));
    }
}
