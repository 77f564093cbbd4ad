pub mod roast_developer;
pub mod roast_report;
pub mod utils;

pub use roast_developer::RoastDeveloperInterface;
#[cfg(any(test, feature = "testkit"))]
pub use roast_developer::MockRoastDeveloperInterface;
pub use roast_report::{Roast, RoastReport, RoastStats};
