use serde::Serialize;

/// Repository type filter.
#[derive(Debug, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GhRepositoryType {
    /// All repositories.
    All,
    /// Repositories owned by the user.
    #[default]
    Owner,
    /// Repositories the user is a member of.
    Member,
}

/// Repository sort key.
#[derive(Debug, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GhRepositorySort {
    /// Creation date.
    Created,
    /// Last update date.
    #[default]
    Updated,
    /// Last push date.
    Pushed,
    /// Full name.
    FullName,
}

/// Sort direction.
#[derive(Debug, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GhSortDirection {
    /// Ascending.
    Asc,
    /// Descending.
    #[default]
    Desc,
}

/// Repository listing options, serialized as query parameters.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct GhRepositoryListOptions {
    /// Type filter.
    #[serde(rename = "type")]
    pub kind: GhRepositoryType,
    /// Sort key.
    pub sort: GhRepositorySort,
    /// Sort direction.
    pub direction: GhSortDirection,
    /// Page size, which is also the cap on returned repositories.
    pub per_page: u8,
}

impl GhRepositoryListOptions {
    /// Owned repositories, most recently updated first.
    pub fn recently_updated(per_page: u8) -> Self {
        Self {
            kind: GhRepositoryType::Owner,
            sort: GhRepositorySort::Updated,
            direction: GhSortDirection::Desc,
            per_page,
        }
    }
}
