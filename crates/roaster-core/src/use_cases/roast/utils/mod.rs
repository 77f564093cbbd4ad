mod commit_metrics;
mod roast_generator;

pub use commit_metrics::CommitMetrics;
pub use roast_generator::{
    RoastGenerator, CLEAN_MESSAGE, FIX_MESSAGE, GENERIC_MESSAGE, LATE_NIGHT_MESSAGE,
    MERGE_MESSAGE, NO_ACTIVITY_MESSAGE,
};
