pub mod directory_filter;
pub mod directory_page;
pub mod directory_state;
pub mod sort_key;

/// Profiles shown per directory page
pub const PAGE_SIZE: usize = 12;
