//! Dialog visibility for the dashboard.
//!
//! Each dialog has its own flag and opening one never closes another, so the
//! day-detail and reminder dialogs can be stacked. Closing a dialog clears only
//! its own flag and leaves `selected_day` in place.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialog {
    AddHabit,
    DayDetail,
    Reminder,
    Share,
}

impl Dialog {
    /// Stacking order, bottom first.
    pub const ALL: [Dialog; 4] = [
        Dialog::AddHabit,
        Dialog::DayDetail,
        Dialog::Reminder,
        Dialog::Share,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Dialog::AddHabit => "add_habit",
            Dialog::DayDetail => "day_detail",
            Dialog::Reminder => "reminder",
            Dialog::Share => "share",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().replace('-', "_");
        Self::ALL.into_iter().find(|dialog| dialog.as_str() == value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogState {
    pub add_habit: bool,
    pub day_detail: bool,
    pub reminder: bool,
    pub share: bool,
    pub selected_day: Option<NaiveDate>,
}

impl DialogState {
    pub fn is_open(&self, dialog: Dialog) -> bool {
        match dialog {
            Dialog::AddHabit => self.add_habit,
            Dialog::DayDetail => self.day_detail,
            Dialog::Reminder => self.reminder,
            Dialog::Share => self.share,
        }
    }

    pub fn set(&mut self, dialog: Dialog, open: bool) {
        let flag = match dialog {
            Dialog::AddHabit => &mut self.add_habit,
            Dialog::DayDetail => &mut self.day_detail,
            Dialog::Reminder => &mut self.reminder,
            Dialog::Share => &mut self.share,
        };
        *flag = open;
    }

    pub fn open(&mut self, dialog: Dialog) {
        self.set(dialog, true);
    }

    pub fn close(&mut self, dialog: Dialog) {
        self.set(dialog, false);
    }

    /// Remembers the clicked day and shows its detail dialog.
    pub fn select_day(&mut self, date: NaiveDate) {
        self.selected_day = Some(date);
        self.open(Dialog::DayDetail);
    }

    pub fn open_dialogs(&self) -> Vec<Dialog> {
        Dialog::ALL
            .into_iter()
            .filter(|dialog| self.is_open(*dialog))
            .collect()
    }

    pub fn is_idle(&self) -> bool {
        self.open_dialogs().is_empty()
    }
}
