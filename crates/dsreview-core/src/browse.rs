//! Filtering and pagination of question views

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::dataset::QuestionView;
use crate::errors::ReviewError;

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Deleted,
    /// Members of a bulk-delete cluster
    Bulk,
    Published,
    Unpublished,
}

impl StatusFilter {
    pub fn matches(&self, view: &QuestionView) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Deleted => view.is_deleted,
            StatusFilter::Bulk => view.is_bulk_delete,
            StatusFilter::Published => view.question.is_published,
            StatusFilter::Unpublished => !view.question.is_published,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ReviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(StatusFilter::All),
            "deleted" => Ok(StatusFilter::Deleted),
            "bulk" => Ok(StatusFilter::Bulk),
            "published" => Ok(StatusFilter::Published),
            "unpublished" => Ok(StatusFilter::Unpublished),
            _ => Err(ReviewError::InvalidStatusFilter {
                value: s.to_string(),
            }),
        }
    }
}

/// Conjunction of a status, an exact difficulty and a text search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionFilter {
    #[serde(default)]
    pub status: StatusFilter,
    /// Exact match; `None` or `"all"` disables the filter
    pub difficulty: Option<String>,
    /// Case-insensitive substring of the question text
    pub search: Option<String>,
}

impl QuestionFilter {
    pub fn matches(&self, view: &QuestionView) -> bool {
        if !self.status.matches(view) {
            return false;
        }
        if let Some(difficulty) = self.difficulty.as_deref() {
            if difficulty != "all" && view.question.difficulty != difficulty {
                return false;
            }
        }
        match self.search.as_deref().map(str::to_lowercase) {
            Some(needle) if !needle.is_empty() => {
                view.question.text.to_lowercase().contains(&needle)
            }
            _ => true,
        }
    }

    /// Matching views, dataset order kept
    pub fn apply<'a>(&self, views: &'a [QuestionView]) -> Vec<&'a QuestionView> {
        views.iter().filter(|v| self.matches(v)).collect()
    }
}

/// One page of results; `page` is zero-based
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            total_pages: self.total_pages,
            total_items: self.total_items,
        }
    }
}

/// Slice `items` into page `page` of `per_page`
///
/// A page past the end is clamped to the last page; a zero `per_page` falls
/// back to [`DEFAULT_PAGE_SIZE`].
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> Page<T> {
    let per_page = if per_page == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        per_page
    };
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);
    let page = page.min(total_pages.saturating_sub(1));

    Page {
        items: items
            .into_iter()
            .skip(page * per_page)
            .take(per_page)
            .collect(),
        page,
        total_pages,
        total_items,
    }
}
