//! Feed filter / sort / paginate pipeline
//!
//! Derives the visible page from the full post collection. Stages run in a
//! fixed order: community, hashtags, search text, tab, page.

use crate::error::{FeedError, Result};
use crate::models::Post;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

pub const POSTS_PER_PAGE: usize = 6;

/// Page count shown for the `new` and `best` tabs, independent of data size.
pub const DISPLAY_TOTAL_PAGES: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedTab {
    #[default]
    New,
    Best,
    Today,
}

impl FromStr for FeedTab {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "new" | "" => Ok(FeedTab::New),
            "best" => Ok(FeedTab::Best),
            "today" => Ok(FeedTab::Today),
            other => Err(FeedError::UnknownTab(other.to_string())),
        }
    }
}

impl fmt::Display for FeedTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FeedTab::New => "new",
            FeedTab::Best => "best",
            FeedTab::Today => "today",
        };
        write!(f, "{}", name)
    }
}

/// Fixed 24-hour window standing in for "today"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceWindow {
    pub start: DateTime<Utc>,
}

impl ReferenceWindow {
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self { start }
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.start + Duration::hours(24)
    }

    /// Half-open: [start, start + 24h)
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        ts >= self.start && ts < self.end()
    }
}

impl Default for ReferenceWindow {
    fn default() -> Self {
        Self {
            start: Utc
                .with_ymd_and_hms(2024, 1, 16, 0, 0, 0)
                .single()
                .unwrap_or_default(),
        }
    }
}

/// Active filters; an empty field means "do not filter on this"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedFilter {
    pub community_id: Option<String>,
    pub hashtags: BTreeSet<String>,
    pub search: String,
}

impl FeedFilter {
    pub fn is_empty(&self) -> bool {
        self.community_id.is_none() && self.hashtags.is_empty() && self.search.trim().is_empty()
    }
}

/// Everything needed to derive one page of the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedQuery {
    pub tab: FeedTab,
    pub filter: FeedFilter,
    /// 1-based
    pub page: usize,
}

impl Default for FeedQuery {
    fn default() -> Self {
        Self {
            tab: FeedTab::New,
            filter: FeedFilter::default(),
            page: 1,
        }
    }
}

/// One derived page plus both page counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedPage {
    pub tab: FeedTab,
    pub page: usize,
    pub posts: Vec<Post>,
    /// Posts left after filtering and tab semantics, before paging
    pub filtered_count: usize,
    /// ceil(filtered_count / page size), at least 1
    pub actual_total_pages: usize,
    /// What the pagination control shows
    pub display_total_pages: usize,
}

/// Stages 1-3: community, hashtags (OR), search text.
pub fn filter_posts(posts: &[Post], filter: &FeedFilter) -> Vec<Post> {
    let needle = filter.search.trim().to_lowercase();

    posts
        .iter()
        .filter(|post| match &filter.community_id {
            Some(id) => &post.community_id == id,
            None => true,
        })
        .filter(|post| filter.hashtags.is_empty() || post.has_any_hashtag(&filter.hashtags))
        .filter(|post| needle.is_empty() || post.matches_text(&needle))
        .cloned()
        .collect()
}

/// Stage 4: tab semantics. Sorts are stable.
pub fn apply_tab(mut posts: Vec<Post>, tab: FeedTab, window: &ReferenceWindow) -> Vec<Post> {
    match tab {
        FeedTab::Best => {
            posts.sort_by(|a, b| b.upvotes.cmp(&a.upvotes));
        }
        FeedTab::Today => {
            posts.retain(|post| window.contains(post.created_at));
            posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
        FeedTab::New => {
            posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
    }
    posts
}

/// Stage 5: the half-open slice [(page-1)*size, page*size). Out of range is empty.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

pub fn actual_total_pages(filtered_count: usize) -> usize {
    filtered_count.div_ceil(POSTS_PER_PAGE).max(1)
}

pub fn display_total_pages(tab: FeedTab, filtered_count: usize) -> usize {
    match tab {
        FeedTab::Today => actual_total_pages(filtered_count),
        FeedTab::New | FeedTab::Best => DISPLAY_TOTAL_PAGES,
    }
}

/// Run the whole pipeline for `query`.
pub fn build_page(posts: &[Post], query: &FeedQuery, window: &ReferenceWindow) -> FeedPage {
    let ordered = apply_tab(filter_posts(posts, &query.filter), query.tab, window);
    let filtered_count = ordered.len();

    FeedPage {
        tab: query.tab,
        page: query.page,
        posts: paginate(&ordered, query.page, POSTS_PER_PAGE).to_vec(),
        filtered_count,
        actual_total_pages: actual_total_pages(filtered_count),
        display_total_pages: display_total_pages(query.tab, filtered_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn post_at(id: &str, upvotes: i64, created_at: DateTime<Utc>) -> Post {
        Post {
            id: id.to_string(),
            title: format!("Post {}", id),
            content: String::new(),
            created_at,
            updated_at: created_at,
            upvotes,
            community_id: "1".to_string(),
            hashtags: Vec::new(),
        }
    }

    fn ids(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_tab_parse() {
        assert_eq!("Best".parse::<FeedTab>().unwrap(), FeedTab::Best);
        assert_eq!("".parse::<FeedTab>().unwrap(), FeedTab::New);
        assert_eq!(
            "hot".parse::<FeedTab>(),
            Err(FeedError::UnknownTab("hot".to_string()))
        );
    }

    #[test]
    fn test_new_tab_sorts_newest_first() {
        let page = build_page(&seed::posts(), &FeedQuery::default(), &ReferenceWindow::default());
        assert_eq!(ids(&page.posts), vec!["4", "5", "6", "1", "2", "3"]);
    }

    #[test]
    fn test_best_tab_is_descending_and_stable() {
        let t = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();
        let posts = vec![
            post_at("a", 5, t),
            post_at("b", 9, t),
            post_at("c", 5, t),
            post_at("d", -2, t),
            post_at("e", 9, t),
        ];
        let sorted = apply_tab(posts, FeedTab::Best, &ReferenceWindow::default());
        assert_eq!(ids(&sorted), vec!["b", "e", "a", "c", "d"]);
        assert!(sorted.windows(2).all(|w| w[0].upvotes >= w[1].upvotes));
    }

    #[test]
    fn test_today_tab_keeps_only_window() {
        let window = ReferenceWindow::default();
        let posts = vec![
            post_at("before", 1, window.start - Duration::seconds(1)),
            post_at("start", 1, window.start),
            post_at("late", 1, window.end() - Duration::seconds(1)),
            post_at("end", 1, window.end()),
        ];
        let today = apply_tab(posts, FeedTab::Today, &window);
        assert_eq!(ids(&today), vec!["late", "start"]);
        assert!(today.iter().all(|p| window.contains(p.created_at)));
    }

    #[test]
    fn test_today_tab_on_seed_data() {
        let page = build_page(
            &seed::posts(),
            &FeedQuery {
                tab: FeedTab::Today,
                ..FeedQuery::default()
            },
            &ReferenceWindow::default(),
        );
        assert_eq!(ids(&page.posts), vec!["4", "5", "6"]);
        assert_eq!(page.filtered_count, 3);
        assert_eq!(page.actual_total_pages, 1);
        assert_eq!(page.display_total_pages, 1);
    }

    #[test]
    fn test_paginate_slices() {
        let items: Vec<u32> = (0..10).collect();
        assert_eq!(paginate(&items, 1, 6), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(paginate(&items, 2, 6), &[6, 7, 8, 9]);
        assert!(paginate(&items, 3, 6).is_empty());
        assert!(paginate(&items, 0, 6).is_empty());
        assert!(paginate(&items, usize::MAX, 6).is_empty());
    }

    #[test]
    fn test_page_counts_are_separate() {
        assert_eq!(actual_total_pages(0), 1);
        assert_eq!(actual_total_pages(6), 1);
        assert_eq!(actual_total_pages(7), 2);
        assert_eq!(display_total_pages(FeedTab::New, 7), DISPLAY_TOTAL_PAGES);
        assert_eq!(display_total_pages(FeedTab::Best, 0), DISPLAY_TOTAL_PAGES);
        assert_eq!(display_total_pages(FeedTab::Today, 13), 3);
    }

    #[test]
    fn test_display_page_past_data_is_empty() {
        let page = build_page(
            &seed::posts(),
            &FeedQuery {
                page: DISPLAY_TOTAL_PAGES,
                ..FeedQuery::default()
            },
            &ReferenceWindow::default(),
        );
        assert!(page.posts.is_empty());
        assert_eq!(page.display_total_pages, DISPLAY_TOTAL_PAGES);
        assert_eq!(page.actual_total_pages, 1);
    }

    #[test]
    fn test_community_filter() {
        let filter = FeedFilter {
            community_id: Some("1".to_string()),
            ..FeedFilter::default()
        };
        let filtered = filter_posts(&seed::posts(), &filter);
        assert_eq!(ids(&filtered), vec!["1", "2", "4", "6"]);
    }

    #[test]
    fn test_hashtag_filter_is_or() {
        let filter = FeedFilter {
            hashtags: ["react", "coffee"].iter().map(|s| s.to_string()).collect(),
            ..FeedFilter::default()
        };
        let filtered = filter_posts(&seed::posts(), &filter);
        assert_eq!(ids(&filtered), vec!["2", "6"]);
    }

    #[test]
    fn test_search_is_case_insensitive_over_fields() {
        let by_title = FeedFilter {
            search: "  CODE reviews ".to_string(),
            ..FeedFilter::default()
        };
        assert_eq!(ids(&filter_posts(&seed::posts(), &by_title)), vec!["5"]);

        let by_tag = FeedFilter {
            search: "ACCESSIB".to_string(),
            ..FeedFilter::default()
        };
        assert_eq!(ids(&filter_posts(&seed::posts(), &by_tag)), vec!["3"]);
    }

    #[test]
    fn test_filters_compose_before_tab() {
        let query = FeedQuery {
            tab: FeedTab::Best,
            filter: FeedFilter {
                community_id: Some("1".to_string()),
                hashtags: ["community"].iter().map(|s| s.to_string()).collect(),
                search: String::new(),
            },
            page: 1,
        };
        let page = build_page(&seed::posts(), &query, &ReferenceWindow::default());
        assert_eq!(ids(&page.posts), vec!["6", "1"]);
        assert_eq!(page.filtered_count, 2);
    }

    #[test]
    fn test_page_wire_format() {
        let query = FeedQuery {
            tab: FeedTab::Today,
            ..FeedQuery::default()
        };
        let page = build_page(&seed::posts(), &query, &ReferenceWindow::default());
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(json["tab"], "today");
        assert_eq!(json["filtered_count"], 3);
        assert_eq!(json["actual_total_pages"], 1);
        assert_eq!(json["display_total_pages"], 1);
        assert_eq!(json["posts"][0]["community_id"], "1");
    }
}
