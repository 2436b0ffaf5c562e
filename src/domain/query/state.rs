use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::error::QueryError;
use crate::domain::window::BATCH_SIZE;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    DateAdded,
    Rating,
    Title,
    Visits,
    Clicks,
}

impl FromStr for SortBy {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date_added" | "dateAdded" => Ok(SortBy::DateAdded),
            "rating" => Ok(SortBy::Rating),
            "title" => Ok(SortBy::Title),
            "visits" => Ok(SortBy::Visits),
            "clicks" => Ok(SortBy::Clicks),
            other => Err(QueryError::UnknownSortKey(other.to_string())),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortBy::DateAdded => write!(f, "date_added"),
            SortBy::Rating => write!(f, "rating"),
            SortBy::Title => write!(f, "title"),
            SortBy::Visits => write!(f, "visits"),
            SortBy::Clicks => write!(f, "clicks"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl FromStr for SortDirection {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascending" | "asc" => Ok(SortDirection::Ascending),
            "descending" | "desc" => Ok(SortDirection::Descending),
            other => Err(QueryError::UnknownSortDirection(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Grid,
    List,
}

impl FromStr for ViewMode {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            other => Err(QueryError::UnknownViewMode(other.to_string())),
        }
    }
}

/// Search, filter, sort and window settings for one browsing session.
///
/// Every mutation goes through a setter. Changing the search text or the
/// selected category puts `display_count` back to the batch size so a window
/// grown under one filter never carries over to the next.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QueryState {
    search_query: String,
    selected_category: Option<String>,
    sort_by: SortBy,
    sort_direction: SortDirection,
    view_mode: ViewMode,
    display_count: usize,
    #[serde(skip)]
    batch_size: usize,
}

impl QueryState {
    pub fn new(batch_size: usize) -> Self {
        let batch_size = batch_size.max(1);
        Self {
            search_query: String::new(),
            selected_category: None,
            sort_by: SortBy::DateAdded,
            sort_direction: SortDirection::Descending,
            view_mode: ViewMode::Grid,
            display_count: batch_size,
            batch_size,
        }
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    pub fn sort_by(&self) -> SortBy {
        self.sort_by
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn display_count(&self) -> usize {
        self.display_count
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Returns true when the query actually changed
    pub fn set_search_query(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        if query == self.search_query {
            return false;
        }
        self.search_query = query;
        self.reset_display_count();
        true
    }

    /// Returns true when the selection actually changed
    pub fn set_selected_category(&mut self, category: Option<String>) -> bool {
        if category == self.selected_category {
            return false;
        }
        self.selected_category = category;
        self.reset_display_count();
        true
    }

    pub fn set_sort_by(&mut self, sort_by: SortBy) {
        self.sort_by = sort_by;
    }

    pub fn set_sort_direction(&mut self, direction: SortDirection) {
        self.sort_direction = direction;
    }

    pub fn toggle_sort_direction(&mut self) {
        self.sort_direction = self.sort_direction.toggled();
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }

    /// Never drops below one item
    pub fn set_display_count(&mut self, count: usize) {
        self.display_count = count.max(1);
    }

    pub fn reset_display_count(&mut self) {
        self.display_count = self.batch_size;
    }

    /// Back to session-start defaults, keeping the configured batch size
    pub fn reset(&mut self) {
        *self = Self::new(self.batch_size);
    }
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new(BATCH_SIZE)
    }
}
