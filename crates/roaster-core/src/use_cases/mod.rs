pub mod activity;
pub mod roast;
