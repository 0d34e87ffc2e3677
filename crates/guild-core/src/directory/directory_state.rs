use crate::{
    Availability, Category, DirectoryFilter, DirectoryPage, PAGE_SIZE, ProfileRecord, SortKey,
};

/// Search, filter, sort and page selection for the directory.
///
/// Changing the search text or any filter returns to the first page; changing
/// the sort key keeps the current page.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryState {
    filter: DirectoryFilter,
    sort: SortKey,
    page: usize,
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self {
            filter: DirectoryFilter::default(),
            sort: SortKey::default(),
            page: 1,
        }
    }
}

impl DirectoryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &DirectoryFilter {
        &self.filter
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
        self.page = 1;
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.filter.category = category;
        self.page = 1;
    }

    pub fn set_min_rating(&mut self, min_rating: f64) {
        self.filter.min_rating = min_rating;
        self.page = 1;
    }

    pub fn set_availability(&mut self, availability: Option<Availability>) {
        self.filter.availability = availability;
        self.page = 1;
    }

    pub fn set_max_rate(&mut self, max_rate: Option<f64>) {
        self.filter.max_rate = max_rate;
        self.page = 1;
    }

    /// Replace every filter at once (one reset)
    pub fn set_filter(&mut self, filter: DirectoryFilter) {
        self.filter = filter;
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// Select a page; zero is treated as the first page
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Filter, sort and paginate `profiles`.
    ///
    /// A page past the end is clamped to the last page (or 1 when nothing
    /// matches); the returned page number reflects the clamp.
    pub fn view(&self, profiles: &[ProfileRecord]) -> DirectoryPage {
        let mut matching = self.filter.apply(profiles);
        self.sort.sort(&mut matching);

        let total_count = matching.len();
        let total_pages = DirectoryPage::total_pages_for(total_count, PAGE_SIZE);
        let page = self.page.clamp(1, total_pages.max(1));

        let items = matching
            .into_iter()
            .skip((page - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .cloned()
            .collect();

        DirectoryPage {
            items,
            total_count,
            total_pages,
            page,
        }
    }
}
