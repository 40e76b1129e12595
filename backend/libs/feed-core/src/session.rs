use crate::feed::{FeedFilter, FeedQuery, FeedTab};
use serde::{Deserialize, Serialize};

/// One viewer's feed view state.
///
/// Any change to the tab or filters moves the view back to page 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSession {
    query: FeedQuery,
}

impl FeedSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &FeedQuery {
        &self.query
    }

    pub fn tab(&self) -> FeedTab {
        self.query.tab
    }

    pub fn page(&self) -> usize {
        self.query.page
    }

    pub fn filter(&self) -> &FeedFilter {
        &self.query.filter
    }

    pub fn set_tab(&mut self, tab: FeedTab) {
        self.query.tab = tab;
        self.reset_page();
    }

    /// `None` clears the community filter
    pub fn select_community(&mut self, community_id: Option<String>) {
        self.query.filter.community_id = community_id;
        self.reset_page();
    }

    /// Returns true when the hashtag is now active
    pub fn toggle_hashtag(&mut self, name: &str) -> bool {
        let active = if self.query.filter.hashtags.remove(name) {
            false
        } else {
            self.query.filter.hashtags.insert(name.to_string());
            true
        };
        self.reset_page();
        active
    }

    pub fn clear_hashtags(&mut self) {
        self.query.filter.hashtags.clear();
        self.reset_page();
    }

    pub fn set_search(&mut self, text: &str) {
        self.query.filter.search = text.trim().to_string();
        self.reset_page();
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.query.page = page;
    }

    pub fn reset_page(&mut self) {
        self.query.page = 1;
    }
}
