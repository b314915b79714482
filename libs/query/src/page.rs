//! Paging parameters and results.

use crate::error::{Error, Result};
use crate::order::{Direction, SortRequest};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 20;

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// Zero-based page request carrying the sort for the rows query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    #[serde(default)]
    pub page_index: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default)]
    pub sort_fields: Vec<String>,
    #[serde(default)]
    pub sort_direction: Direction,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

impl PageRequest {
    pub fn new(page_index: u32, page_size: u32) -> Self {
        Self {
            page_index,
            page_size,
            sort_fields: Vec::new(),
            sort_direction: Direction::Asc,
        }
    }

    pub fn sorted_by(
        mut self,
        fields: impl IntoIterator<Item = impl Into<String>>,
        direction: Direction,
    ) -> Self {
        self.sort_fields = fields.into_iter().map(Into::into).collect();
        self.sort_direction = direction;
        self
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page_index) * u64::from(self.page_size)
    }

    pub fn validate(&self, max_page_size: u32) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::InvalidPage("page size must be positive".into()));
        }
        if self.page_size > max_page_size {
            return Err(Error::InvalidPage(format!(
                "page size {} exceeds the maximum of {max_page_size}",
                self.page_size
            )));
        }
        Ok(())
    }

    pub fn sort(&self) -> SortRequest {
        SortRequest {
            fields: self.sort_fields.clone(),
            direction: self.sort_direction,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub total: u64,
    pub page_index: u32,
    pub page_size: u32,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.page_size))
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            rows: self.rows.into_iter().map(f).collect(),
            total: self.total,
            page_index: self.page_index,
            page_size: self.page_size,
        }
    }
}
