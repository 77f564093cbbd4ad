mod repository_list_options;

pub use repository_list_options::{
    GhRepositoryListOptions, GhRepositorySort, GhRepositoryType, GhSortDirection,
};
