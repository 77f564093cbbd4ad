mod commit;
mod repository;
mod user;

pub use commit::GhCommit;
pub use repository::GhRepository;
pub use user::GhUser;
