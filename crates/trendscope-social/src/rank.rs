//! Top-N ranking of trending topics by post volume.

use trendscope_core::Tabular;

use crate::types::TrendingTopic;

/// Default number of topics kept by [`top_by_volume`].
pub const TOP_TRENDS_LIMIT: usize = 10;

/// A topic with a known volume and its 1-based rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedTopic {
    pub rank: usize,
    pub name: String,
    pub volume: u64,
}

/// Keeps topics that report a volume, sorted by volume descending, and
/// truncates to `limit`.
///
/// Ties keep provider order.
#[must_use]
pub fn top_by_volume(topics: &[TrendingTopic], limit: usize) -> Vec<RankedTopic> {
    let mut with_volume: Vec<(&str, u64)> = topics
        .iter()
        .filter_map(|t| t.volume.map(|v| (t.name.as_str(), v)))
        .collect();
    with_volume.sort_by(|a, b| b.1.cmp(&a.1));
    with_volume
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(idx, (name, volume))| RankedTopic {
            rank: idx + 1,
            name: name.to_owned(),
            volume,
        })
        .collect()
}

/// CSV view of a ranked list: `rank`, `name`, `volume`.
#[derive(Debug, Clone, Copy)]
pub struct RankedTable<'a>(pub &'a [RankedTopic]);

impl Tabular for RankedTable<'_> {
    fn headers(&self) -> Vec<String> {
        vec!["rank".to_string(), "name".to_string(), "volume".to_string()]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.0
            .iter()
            .map(|t| vec![t.rank.to_string(), t.name.clone(), t.volume.to_string()])
            .collect()
    }
}
