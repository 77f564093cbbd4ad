pub mod aggregate_activity;

pub use aggregate_activity::{
    AggregateActivityInterface, AggregatedActivity, ACTIVITY_WINDOW, REPOSITORIES_LIMIT,
};
#[cfg(any(test, feature = "testkit"))]
pub use aggregate_activity::MockAggregateActivityInterface;
