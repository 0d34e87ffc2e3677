use crate::ProfileRecord;

use serde::Serialize;

/// One page of directory results
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryPage {
    pub items: Vec<ProfileRecord>,
    /// Profiles matching the filter, across all pages
    pub total_count: usize,
    pub total_pages: usize,
    /// 1-based page actually returned (after clamping)
    pub page: usize,
}

impl DirectoryPage {
    pub fn total_pages_for(total_count: usize, page_size: usize) -> usize {
        total_count.div_ceil(page_size)
    }
}
