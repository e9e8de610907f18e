//! Dashboard view-model.
//!
//! Owns the habit and milestone data, the displayed month, the active tab and
//! the dialog flags. Every user event maps to one synchronous method here; the
//! HTTP layer only locks, calls and renders.

use crate::calendar::{ViewDate, build_calendar};
use crate::dialogs::{Dialog, DialogState};
use crate::errors::DashboardError;
use crate::models::{
    AddHabitForm, CalendarCell, ColorTag, DashboardData, DashboardSnapshot, DayDetail,
    DayHabitStatus, Frequency, Habit, HabitId, HabitSummary, Milestone, MilestoneSummary,
    NewHabit, PrivacyLevel, ReminderForm, ReminderSlot, ShareSettings,
};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

pub const SHARE_CHANNELS: [&str; 4] = ["Email", "Twitter", "Facebook", "WhatsApp"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Calendar,
    Streaks,
    Milestones,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Calendar, Tab::Streaks, Tab::Milestones];

    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Calendar => "calendar",
            Tab::Streaks => "streaks",
            Tab::Milestones => "milestones",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Calendar => "Calendar",
            Tab::Streaks => "Streaks",
            Tab::Milestones => "Milestones",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.as_str() == value.trim())
    }
}

/// A reminder accepted from the reminder dialog. Nothing delivers it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderPlan {
    pub habit_id: Option<HabitId>,
    pub time: NaiveTime,
    pub repeat: Option<Frequency>,
}

pub fn default_reminder_time() -> NaiveTime {
    NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default()
}

impl TryFrom<AddHabitForm> for NewHabit {
    type Error = DashboardError;

    fn try_from(form: AddHabitForm) -> Result<Self, Self::Error> {
        let name = form.name.trim().to_string();
        if name.is_empty() {
            return Err(DashboardError::EmptyHabitName);
        }
        let color = ColorTag::parse(&form.color).ok_or_else(|| DashboardError::UnknownOption {
            field: "color",
            value: form.color.clone(),
        })?;
        let frequency = parse_optional(&form.frequency, "frequency", Frequency::parse)?;
        let reminder = parse_optional(&form.reminder, "reminder", ReminderSlot::parse)?;

        Ok(NewHabit {
            name,
            color,
            frequency,
            reminder,
        })
    }
}

fn parse_optional<T>(
    value: &str,
    field: &'static str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>, DashboardError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse(value).map(Some).ok_or_else(|| DashboardError::UnknownOption {
        field,
        value: value.to_string(),
    })
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    view: ViewDate,
    tab: Tab,
    dialogs: DialogState,
    data: DashboardData,
    share_link: String,
    privacy: PrivacyLevel,
}

impl Dashboard {
    pub fn new(data: DashboardData, view: ViewDate, share_link: impl Into<String>) -> Self {
        Self {
            view,
            tab: Tab::default(),
            dialogs: DialogState::default(),
            data,
            share_link: share_link.into(),
            privacy: PrivacyLevel::default(),
        }
    }

    pub fn view(&self) -> ViewDate {
        self.view
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn dialogs(&self) -> &DialogState {
        &self.dialogs
    }

    pub fn habits(&self) -> &[Habit] {
        &self.data.habits
    }

    pub fn milestones(&self) -> &[Milestone] {
        &self.data.milestones
    }

    pub fn next_month(&mut self) -> ViewDate {
        self.view = self.view.advance();
        self.view
    }

    pub fn previous_month(&mut self) -> ViewDate {
        self.view = self.view.retreat();
        self.view
    }

    pub fn habit(&self, id: HabitId) -> Result<&Habit, DashboardError> {
        self.data
            .habits
            .iter()
            .find(|habit| habit.id == id)
            .ok_or(DashboardError::UnknownHabit(id))
    }

    pub fn is_completed(&self, habit_id: HabitId, day: u32) -> Result<bool, DashboardError> {
        Ok(self.habit(habit_id)?.is_completed_on(day))
    }

    /// Grid cells for the displayed month, each listing the habits done that day.
    pub fn calendar(&self) -> Vec<CalendarCell> {
        build_calendar(self.view.year, self.view.month)
            .into_iter()
            .map(|day| CalendarCell {
                day,
                completed: day
                    .map(|day| {
                        self.data
                            .habits
                            .iter()
                            .filter(|habit| habit.is_completed_on(day))
                            .map(|habit| habit.id)
                            .collect()
                    })
                    .unwrap_or_default(),
            })
            .collect()
    }

    pub fn open_dialog(&mut self, dialog: Dialog) {
        self.dialogs.open(dialog);
    }

    pub fn close_dialog(&mut self, dialog: Dialog) {
        self.dialogs.close(dialog);
    }

    /// Click on a populated calendar cell of the displayed month.
    pub fn select_day(&mut self, day: u32) -> Result<NaiveDate, DashboardError> {
        let date = self.view.date_of(day).ok_or(DashboardError::DayOutOfRange {
            day,
            days_in_month: self.view.days_in_month(),
        })?;
        self.dialogs.select_day(date);
        Ok(date)
    }

    pub fn day_detail(&self) -> Option<DayDetail> {
        use chrono::Datelike;

        let date = self.dialogs.selected_day?;
        let day = date.day();
        Some(DayDetail {
            date: date.to_string(),
            title: date.format("%A, %B %-d").to_string(),
            habits: self
                .data
                .habits
                .iter()
                .map(|habit| DayHabitStatus {
                    id: habit.id,
                    name: habit.name.clone(),
                    color: habit.color,
                    completed: habit.is_completed_on(day),
                })
                .collect(),
        })
    }

    /// Confirm in the add-habit dialog. The habit lives only in memory.
    pub fn add_habit(&mut self, new: NewHabit) -> Habit {
        let id = self
            .data
            .habits
            .iter()
            .map(|habit| habit.id)
            .max()
            .unwrap_or(0)
            + 1;
        let habit = Habit {
            id,
            name: new.name,
            streak_count: 0,
            color: new.color,
            completed_days: Default::default(),
            frequency: new.frequency,
            reminder: new.reminder,
        };
        self.data.habits.push(habit.clone());
        self.dialogs.close(Dialog::AddHabit);
        habit
    }

    /// "Mark Complete" has no state transition behind it.
    pub fn mark_complete(&self, habit_id: HabitId, _day: Option<u32>) -> Result<(), DashboardError> {
        self.habit(habit_id)?;
        Err(DashboardError::MarkCompleteUnimplemented(habit_id))
    }

    pub fn save_reminder(&mut self, form: &ReminderForm) -> Result<ReminderPlan, DashboardError> {
        let habit_id = match form.habit_id.trim() {
            "" => None,
            raw => {
                let id = raw.parse().map_err(|_| DashboardError::UnknownOption {
                    field: "habit",
                    value: raw.to_string(),
                })?;
                Some(self.habit(id)?.id)
            }
        };
        let time = match form.time.trim() {
            "" => default_reminder_time(),
            raw => NaiveTime::parse_from_str(raw, "%H:%M").map_err(|_| {
                DashboardError::UnknownOption {
                    field: "time",
                    value: raw.to_string(),
                }
            })?,
        };
        let repeat = parse_optional(&form.repeat, "repeat", Frequency::parse)?;

        self.dialogs.close(Dialog::Reminder);
        Ok(ReminderPlan {
            habit_id,
            time,
            repeat,
        })
    }

    pub fn confirm_share(&mut self, privacy: &str) -> Result<PrivacyLevel, DashboardError> {
        if let Some(level) = parse_optional(privacy, "privacy", PrivacyLevel::parse)? {
            self.privacy = level;
        }
        self.dialogs.close(Dialog::Share);
        Ok(self.privacy)
    }

    pub fn share_settings(&self) -> ShareSettings {
        ShareSettings {
            link: self.share_link.clone(),
            privacy: self.privacy,
            channels: SHARE_CHANNELS.iter().map(|channel| channel.to_string()).collect(),
        }
    }

    pub fn habit_summaries(&self) -> Vec<HabitSummary> {
        self.data
            .habits
            .iter()
            .map(|habit| HabitSummary {
                id: habit.id,
                name: habit.name.clone(),
                color: habit.color,
                streak_count: habit.streak_count,
                streak_progress: habit.streak_progress(),
            })
            .collect()
    }

    /// Milestones with their habit name resolved by id; `None` marks an orphan.
    pub fn milestone_summaries(&self) -> Vec<MilestoneSummary> {
        self.milestones()
            .iter()
            .map(|milestone| MilestoneSummary {
                id: milestone.id,
                name: milestone.name.clone(),
                habit_id: milestone.habit_id,
                habit_name: self
                    .habit(milestone.habit_id)
                    .ok()
                    .map(|habit| habit.name.clone()),
                progress: milestone.progress,
                completed: milestone.completed(),
            })
            .collect()
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            view: self.view,
            month_label: self.view.label(),
            active_tab: self.tab,
            cells: self.calendar(),
            habits: self.habit_summaries(),
            milestones: self.milestone_summaries(),
            dialogs: self.dialogs.clone(),
            day_detail: self.day_detail(),
            share: self.share_settings(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::mock_data;

    fn dashboard() -> Dashboard {
        Dashboard::new(
            mock_data(),
            ViewDate::new(2024, 2),
            "https://habittracker.app/share/u123456",
        )
    }

    #[test]
    fn calendar_marks_completed_habits_per_day() {
        let dashboard = dashboard();
        let cells = dashboard.calendar();
        // 2024-03-01 was a Friday.
        assert_eq!(cells.len(), 5 + 31);
        assert!(cells[..5].iter().all(|cell| cell.day.is_none() && cell.completed.is_empty()));

        let day_11 = cells.iter().find(|cell| cell.day == Some(11)).unwrap();
        assert_eq!(day_11.completed, vec![1, 2, 3, 4]);
        let day_12 = cells.iter().find(|cell| cell.day == Some(12)).unwrap();
        assert!(day_12.completed.is_empty());
    }

    #[test]
    fn completion_lookup_by_habit() {
        let dashboard = dashboard();
        assert_eq!(dashboard.is_completed(1, 5), Ok(true));
        assert_eq!(dashboard.is_completed(1, 6), Ok(false));
        assert_eq!(dashboard.is_completed(99, 1), Err(DashboardError::UnknownHabit(99)));
    }

    #[test]
    fn month_navigation_moves_view() {
        let mut dashboard = dashboard();
        assert_eq!(dashboard.next_month(), ViewDate::new(2024, 3));
        assert_eq!(dashboard.previous_month(), ViewDate::new(2024, 2));
    }

    #[test]
    fn select_day_opens_detail_without_closing_others() {
        let mut dashboard = dashboard();
        dashboard.open_dialog(Dialog::Share);

        let date = dashboard.select_day(15).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert!(dashboard.dialogs().day_detail);
        assert!(dashboard.dialogs().share);

        let detail = dashboard.day_detail().unwrap();
        assert_eq!(detail.title, "Friday, March 15");
        assert_eq!(detail.habits.len(), 4);
    }

    #[test]
    fn select_day_rejects_days_outside_view() {
        let mut dashboard = dashboard();
        dashboard.previous_month();
        let err = dashboard.select_day(30).unwrap_err();
        assert_eq!(err, DashboardError::DayOutOfRange { day: 30, days_in_month: 29 });
        assert!(dashboard.dialogs().is_idle());
        assert_eq!(dashboard.dialogs().selected_day, None);
    }

    #[test]
    fn day_detail_reports_completion_for_selected_day() {
        let mut dashboard = dashboard();
        dashboard.select_day(5).unwrap();
        let detail = dashboard.day_detail().unwrap();
        let completed: Vec<_> = detail
            .habits
            .iter()
            .filter(|habit| habit.completed)
            .map(|habit| habit.id)
            .collect();
        assert_eq!(completed, vec![1, 4]);
    }

    #[test]
    fn add_habit_assigns_next_id_and_closes_dialog() {
        let mut dashboard = dashboard();
        dashboard.open_dialog(Dialog::AddHabit);
        let form = AddHabitForm {
            name: "  Journal ".into(),
            color: "red".into(),
            frequency: "weekdays".into(),
            reminder: String::new(),
        };

        let habit = dashboard.add_habit(NewHabit::try_from(form).unwrap());
        assert_eq!(habit.id, 5);
        assert_eq!(habit.name, "Journal");
        assert_eq!(habit.streak_count, 0);
        assert!(habit.completed_days.is_empty());
        assert_eq!(habit.frequency, Some(Frequency::Weekdays));
        assert!(!dashboard.dialogs().add_habit);
        assert_eq!(dashboard.habit(5), Ok(&habit));
        assert_eq!(dashboard.habits().len(), 5);
    }

    #[test]
    fn add_habit_form_validation() {
        let blank = AddHabitForm {
            name: "   ".into(),
            color: "green".into(),
            ..Default::default()
        };
        assert_eq!(NewHabit::try_from(blank), Err(DashboardError::EmptyHabitName));

        let bad_color = AddHabitForm {
            name: "Walk".into(),
            color: "teal".into(),
            ..Default::default()
        };
        assert!(matches!(
            NewHabit::try_from(bad_color),
            Err(DashboardError::UnknownOption { field: "color", .. })
        ));
    }

    #[test]
    fn mark_complete_is_explicitly_unimplemented() {
        let dashboard = dashboard();
        assert_eq!(
            dashboard.mark_complete(1, Some(6)),
            Err(DashboardError::MarkCompleteUnimplemented(1))
        );
        assert_eq!(dashboard.mark_complete(42, None), Err(DashboardError::UnknownHabit(42)));
        assert_eq!(dashboard.is_completed(1, 6), Ok(false));
    }

    #[test]
    fn reminder_save_closes_only_reminder() {
        let mut dashboard = dashboard();
        dashboard.select_day(3).unwrap();
        dashboard.open_dialog(Dialog::Reminder);

        let plan = dashboard
            .save_reminder(&ReminderForm {
                habit_id: "2".into(),
                time: String::new(),
                repeat: "daily".into(),
            })
            .unwrap();
        assert_eq!(plan.habit_id, Some(2));
        assert_eq!(plan.time, default_reminder_time());
        assert_eq!(plan.repeat, Some(Frequency::Daily));
        assert!(!dashboard.dialogs().reminder);
        assert!(dashboard.dialogs().day_detail);
    }

    #[test]
    fn reminder_rejects_bad_time() {
        let mut dashboard = dashboard();
        dashboard.open_dialog(Dialog::Reminder);
        let result = dashboard.save_reminder(&ReminderForm {
            time: "25:99".into(),
            ..Default::default()
        });
        assert!(matches!(result, Err(DashboardError::UnknownOption { field: "time", .. })));
        assert!(dashboard.dialogs().reminder);
    }

    #[test]
    fn share_records_privacy() {
        let mut dashboard = dashboard();
        dashboard.open_dialog(Dialog::Share);
        assert_eq!(dashboard.confirm_share("public"), Ok(PrivacyLevel::Public));
        assert!(!dashboard.dialogs().share);
        assert_eq!(dashboard.share_settings().privacy, PrivacyLevel::Public);
        assert_eq!(dashboard.share_settings().channels.len(), 4);
    }

    #[test]
    fn milestones_resolve_habit_names_by_id() {
        let mut data = mock_data();
        data.milestones[0].habit_id = 77;
        let dashboard = Dashboard::new(data, ViewDate::new(2024, 2), "");
        let summaries = dashboard.milestone_summaries();

        assert_eq!(summaries[0].habit_name, None);
        assert_eq!(summaries[1].habit_name.as_deref(), Some("Morning Meditation"));
        assert!(!summaries[1].completed);
        assert!(summaries[2].completed);
    }

    #[test]
    fn snapshot_reflects_current_state() {
        let mut dashboard = dashboard();
        dashboard.set_tab(Tab::Streaks);
        let snapshot = dashboard.snapshot();
        assert_eq!(snapshot.month_label, "March 2024");
        assert_eq!(snapshot.active_tab, Tab::Streaks);
        assert_eq!(snapshot.habits[0].streak_progress, 80);
        assert!(snapshot.day_detail.is_none());
    }
}
