use crate::calendar::ViewDate;
use crate::dialogs::DialogState;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub type HabitId = u32;
pub type MilestoneId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Green,
    Blue,
    Purple,
    Orange,
    Red,
}

impl ColorTag {
    pub const ALL: [ColorTag; 5] = [
        ColorTag::Green,
        ColorTag::Blue,
        ColorTag::Purple,
        ColorTag::Orange,
        ColorTag::Red,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorTag::Green => "green",
            ColorTag::Blue => "blue",
            ColorTag::Purple => "purple",
            ColorTag::Orange => "orange",
            ColorTag::Red => "red",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ColorTag::Green => "Green",
            ColorTag::Blue => "Blue",
            ColorTag::Purple => "Purple",
            ColorTag::Orange => "Orange",
            ColorTag::Red => "Red",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.as_str() == value.trim())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekdays,
    Weekends,
    Custom,
}

impl Frequency {
    pub const ALL: [Frequency; 4] = [
        Frequency::Daily,
        Frequency::Weekdays,
        Frequency::Weekends,
        Frequency::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekdays => "weekdays",
            Frequency::Weekends => "weekends",
            Frequency::Custom => "custom",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::Weekdays => "Weekdays",
            Frequency::Weekends => "Weekends",
            Frequency::Custom => "Custom",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|freq| freq.as_str() == value.trim())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderSlot {
    Morning,
    Afternoon,
    Evening,
    Custom,
}

impl ReminderSlot {
    pub const ALL: [ReminderSlot; 4] = [
        ReminderSlot::Morning,
        ReminderSlot::Afternoon,
        ReminderSlot::Evening,
        ReminderSlot::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReminderSlot::Morning => "morning",
            ReminderSlot::Afternoon => "afternoon",
            ReminderSlot::Evening => "evening",
            ReminderSlot::Custom => "custom",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReminderSlot::Morning => "Morning (8:00 AM)",
            ReminderSlot::Afternoon => "Afternoon (12:00 PM)",
            ReminderSlot::Evening => "Evening (6:00 PM)",
            ReminderSlot::Custom => "Custom Time",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.as_str() == value.trim())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PrivacyLevel {
    Public,
    #[default]
    Friends,
    Private,
}

impl PrivacyLevel {
    pub const ALL: [PrivacyLevel; 3] = [
        PrivacyLevel::Public,
        PrivacyLevel::Friends,
        PrivacyLevel::Private,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PrivacyLevel::Public => "public",
            PrivacyLevel::Friends => "friends",
            PrivacyLevel::Private => "private",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PrivacyLevel::Public => "Public - Anyone with the link",
            PrivacyLevel::Friends => "Friends Only",
            PrivacyLevel::Private => "Private - Only Me",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == value.trim())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Habit {
    pub id: HabitId,
    pub name: String,
    pub streak_count: u32,
    pub color: ColorTag,
    #[serde(default)]
    pub completed_days: BTreeSet<u32>,
    #[serde(default)]
    pub frequency: Option<Frequency>,
    #[serde(default)]
    pub reminder: Option<ReminderSlot>,
}

impl Habit {
    pub fn is_completed_on(&self, day: u32) -> bool {
        self.completed_days.contains(&day)
    }

    /// Streak bar fill: ten points per streak day, capped at 100.
    pub fn streak_progress(&self) -> u32 {
        self.streak_count.saturating_mul(10).min(100)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Milestone {
    pub id: MilestoneId,
    pub name: String,
    pub habit_id: HabitId,
    pub progress: u8,
}

impl Milestone {
    pub fn completed(&self) -> bool {
        self.progress == 100
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DashboardData {
    #[serde(default)]
    pub habits: Vec<Habit>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

impl DashboardData {
    /// Clamps milestone progress and drops completed days no month can hold.
    pub fn normalized(mut self) -> Self {
        for habit in &mut self.habits {
            habit.completed_days.retain(|day| (1..=31).contains(day));
        }
        for milestone in &mut self.milestones {
            milestone.progress = milestone.progress.min(100);
        }
        self
    }
}

/// Validated input for a habit created from the add-habit dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHabit {
    pub name: String,
    pub color: ColorTag,
    pub frequency: Option<Frequency>,
    pub reminder: Option<ReminderSlot>,
}

#[derive(Debug, Deserialize, Default)]
pub struct AddHabitForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub frequency: String,
    #[serde(default)]
    pub reminder: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct ReminderForm {
    #[serde(default)]
    pub habit_id: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub repeat: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct ShareForm {
    #[serde(default)]
    pub privacy: String,
}

#[derive(Debug, Deserialize)]
pub struct MonthRequest {
    pub direction: String,
}

#[derive(Debug, Deserialize)]
pub struct DialogRequest {
    pub dialog: String,
    pub open: bool,
}

#[derive(Debug, Deserialize, Default)]
pub struct CalendarQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CalendarResponse {
    pub year: i32,
    pub month: u32,
    pub label: String,
    pub days_in_month: u32,
    pub weekday_offset: u32,
    pub cells: Vec<Option<u32>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CalendarCell {
    pub day: Option<u32>,
    pub completed: Vec<HabitId>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HabitSummary {
    pub id: HabitId,
    pub name: String,
    pub color: ColorTag,
    pub streak_count: u32,
    pub streak_progress: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MilestoneSummary {
    pub id: MilestoneId,
    pub name: String,
    pub habit_id: HabitId,
    pub habit_name: Option<String>,
    pub progress: u8,
    pub completed: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DayHabitStatus {
    pub id: HabitId,
    pub name: String,
    pub color: ColorTag,
    pub completed: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DayDetail {
    pub date: String,
    pub title: String,
    pub habits: Vec<DayHabitStatus>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CompletionResponse {
    pub habit_id: HabitId,
    pub day: u32,
    pub completed: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ShareSettings {
    pub link: String,
    pub privacy: PrivacyLevel,
    pub channels: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DashboardSnapshot {
    pub view: ViewDate,
    pub month_label: String,
    pub active_tab: crate::dashboard::Tab,
    pub cells: Vec<CalendarCell>,
    pub habits: Vec<HabitSummary>,
    pub milestones: Vec<MilestoneSummary>,
    pub dialogs: DialogState,
    pub day_detail: Option<DayDetail>,
    pub share: ShareSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meditation() -> Habit {
        Habit {
            id: 1,
            name: "Morning Meditation".into(),
            streak_count: 8,
            color: ColorTag::Green,
            completed_days: [1, 2, 3, 5, 8, 9, 10, 11].into_iter().collect(),
            frequency: None,
            reminder: None,
        }
    }

    #[test]
    fn completion_membership_follows_configured_days() {
        let habit = meditation();
        assert!(habit.is_completed_on(5));
        assert!(!habit.is_completed_on(6));
        assert!(!habit.is_completed_on(0));
    }

    #[test]
    fn streak_progress_caps_at_full_bar() {
        let mut habit = meditation();
        assert_eq!(habit.streak_progress(), 80);
        habit.streak_count = 14;
        assert_eq!(habit.streak_progress(), 100);
    }

    #[test]
    fn milestone_completed_only_at_full_progress() {
        let mut milestone = Milestone {
            id: 1,
            name: "7 Day Streak".into(),
            habit_id: 1,
            progress: 100,
        };
        assert!(milestone.completed());
        milestone.progress = 27;
        assert!(!milestone.completed());
    }

    #[test]
    fn normalized_clamps_fixture_values() {
        let mut habit = meditation();
        habit.completed_days.extend([0, 32, 40]);
        let data = DashboardData {
            habits: vec![habit],
            milestones: vec![Milestone {
                id: 1,
                name: "Overshoot".into(),
                habit_id: 1,
                progress: 180,
            }],
        }
        .normalized();

        assert_eq!(data.habits[0].completed_days, meditation().completed_days);
        assert_eq!(data.milestones[0].progress, 100);
        assert!(data.milestones[0].completed());
    }

    #[test]
    fn option_parsing_is_exact() {
        assert_eq!(ColorTag::parse("purple"), Some(ColorTag::Purple));
        assert_eq!(ColorTag::parse("teal"), None);
        assert_eq!(Frequency::parse(" weekends "), Some(Frequency::Weekends));
        assert_eq!(ReminderSlot::parse("evening"), Some(ReminderSlot::Evening));
        assert_eq!(PrivacyLevel::default(), PrivacyLevel::Friends);
    }
}
