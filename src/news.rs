// src/news.rs
//! News ranking: filter by category/priority, order by priority rank then
//! recency, truncate to a caller-supplied limit.
//!
//! - Both filters are exact, case-sensitive matches and compose as AND.
//! - Priority order: `urgent` > `high` > `normal` > `low`; anything else ties
//!   with `low`.
//! - The sort is stable: items equal on both keys keep their input order.

use anyhow::Result;

use crate::model::EmergencyNews;

/// Lowest precedence; unrecognized priority labels collapse onto it.
pub const FALLBACK_PRIORITY_RANK: u8 = 3;

/// Map a priority label to its sort rank (ascending = more urgent first).
pub fn priority_rank(priority: &str) -> u8 {
    match priority {
        "urgent" => 0,
        "high" => 1,
        "normal" => 2,
        "low" => 3,
        _ => FALLBACK_PRIORITY_RANK,
    }
}

/// Optional category/priority predicates for [`rank`].
#[derive(Debug, Clone, Default)]
pub struct NewsFilter {
    pub category: Option<String>,
    pub priority: Option<String>,
}

impl NewsFilter {
    pub fn matches(&self, item: &EmergencyNews) -> bool {
        if let Some(c) = &self.category {
            if item.category != *c {
                return false;
            }
        }
        if let Some(p) = &self.priority {
            if item.priority != *p {
                return false;
            }
        }
        true
    }
}

/// Filter, order, and truncate a news snapshot.
///
/// Pure over its input; `limit == 0` yields an empty vec, a limit beyond the
/// filtered count yields the whole ordered filtered set. Callers reject
/// negative limits before reaching this function (the HTTP layer deserializes
/// `limit` as unsigned).
pub fn rank(items: Vec<EmergencyNews>, filter: &NewsFilter, limit: usize) -> Vec<EmergencyNews> {
    let mut filtered: Vec<EmergencyNews> =
        items.into_iter().filter(|n| filter.matches(n)).collect();

    // Stable: ties on (rank, published_at) keep input order.
    filtered.sort_by(|a, b| {
        priority_rank(&a.priority)
            .cmp(&priority_rank(&b.priority))
            .then_with(|| b.published_at.cmp(&a.published_at))
    });

    filtered.truncate(limit);
    filtered
}

/// Capability seam for obtaining the current news snapshot.
///
/// An unavailable backing source is an `Err` so callers can tell "no data
/// available" apart from "empty after filtering" (`Ok(vec![])` is valid).
#[async_trait::async_trait]
pub trait NewsProvider: Send + Sync {
    async fn list_current(&self) -> Result<Vec<EmergencyNews>>;
    fn name(&self) -> &'static str;
}

/// In-memory provider over an injected snapshot. The binary seeds it with the
/// sample dataset; tests inject their own fixtures.
#[derive(Debug, Clone, Default)]
pub struct StaticNewsBoard {
    items: Vec<EmergencyNews>,
}

impl StaticNewsBoard {
    pub fn new(items: Vec<EmergencyNews>) -> Self {
        Self { items }
    }
}

#[async_trait::async_trait]
impl NewsProvider for StaticNewsBoard {
    async fn list_current(&self) -> Result<Vec<EmergencyNews>> {
        Ok(self.items.clone())
    }

    fn name(&self) -> &'static str {
        "static-board"
    }
}
