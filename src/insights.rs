use crate::models::{InsightsResponse, MoodEntry, MoodLevel};
use serde::{Deserialize, Serialize};

pub const TREND_WINDOW: usize = 3;
pub const DEFAULT_HISTORY: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    None,
    Positive,
    Stable,
    NeedsSupport,
}

impl Trend {
    pub fn label(self) -> &'static str {
        match self {
            Trend::None => "No trend yet",
            Trend::Positive => "Doing great! 🌟",
            Trend::Stable => "Stable mood 📈",
            Trend::NeedsSupport => "Needs support 💙",
        }
    }
}

pub fn build_insights(entries: &[MoodEntry], streak: u32, limit: usize) -> InsightsResponse {
    let average = average_mood(entries);
    let trend = trend(entries);

    InsightsResponse {
        entry_count: entries.len(),
        streak,
        average_mood: average,
        average_emoji: average_emoji(average).to_string(),
        trend,
        trend_label: trend.label().to_string(),
        recent: recent_history(entries, limit),
    }
}

pub fn average_mood(entries: &[MoodEntry]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    let sum: u32 = entries.iter().map(|entry| u32::from(entry.mood.value())).sum();
    f64::from(sum) / entries.len() as f64
}

pub fn trend(entries: &[MoodEntry]) -> Trend {
    if entries.len() < 2 {
        return Trend::None;
    }

    let window = &entries[entries.len().saturating_sub(TREND_WINDOW)..];
    let mean = average_mood(window);
    if mean >= 4.0 {
        Trend::Positive
    } else if mean >= 3.0 {
        Trend::Stable
    } else {
        Trend::NeedsSupport
    }
}

/// The last `n` entries, newest first.
pub fn recent_history(entries: &[MoodEntry], n: usize) -> Vec<MoodEntry> {
    entries.iter().rev().take(n).cloned().collect()
}

/// Emoji for the rounded average; neutral for an empty store.
fn average_emoji(average: f64) -> &'static str {
    let rounded = average.round().clamp(0.0, 5.0) as u8;
    MoodLevel::try_from(rounded)
        .unwrap_or(MoodLevel::Neutral)
        .emoji()
}
