use crate::chat::Transcript;
use crate::models::MoodEntry;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Mood,
    Chat,
    Dashboard,
    Resources,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Mood, Tab::Chat, Tab::Dashboard, Tab::Resources];

    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Mood => "mood",
            Tab::Chat => "chat",
            Tab::Dashboard => "dashboard",
            Tab::Resources => "resources",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Mood => "Mood",
            Tab::Chat => "Chat",
            Tab::Dashboard => "Insights",
            Tab::Resources => "Resources",
        }
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        Tab::ALL
            .into_iter()
            .find(|tab| tab.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| format!("unknown tab '{value}'"))
    }
}

/// Everything the page keeps for one session.
#[derive(Debug)]
pub struct Shell {
    active_tab: Tab,
    entries: Vec<MoodEntry>,
    streak: u32,
    transcript: Transcript,
}

impl Default for Shell {
    fn default() -> Self {
        Self {
            active_tab: Tab::default(),
            entries: Vec::new(),
            streak: 1,
            transcript: Transcript::default(),
        }
    }
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Only the visible view changes.
    pub fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    /// Not calendar-aware: every recorded entry bumps the counter by one.
    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn record_mood(&mut self, entry: MoodEntry) {
        self.entries.push(entry);
        self.streak = self.streak.saturating_add(1);
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }
}
