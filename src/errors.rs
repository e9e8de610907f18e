use crate::models::HabitId;
use axum::http::StatusCode;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DashboardError {
    #[error("habit not found: {0}")]
    UnknownHabit(HabitId),
    #[error("day {day} is outside the displayed month (1-{days_in_month})")]
    DayOutOfRange { day: u32, days_in_month: u32 },
    #[error("month must be between 0 and 11, got {0}")]
    InvalidMonth(u32),
    #[error("year {0} is outside the supported calendar range")]
    YearOutOfRange(i32),
    #[error("habit name must not be empty")]
    EmptyHabitName,
    #[error("unknown {field}: '{value}'")]
    UnknownOption { field: &'static str, value: String },
    #[error("mark complete is not implemented (habit {0})")]
    MarkCompleteUnimplemented(HabitId),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn not_implemented(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_IMPLEMENTED,
            message: message.into(),
        }
    }
}

impl From<DashboardError> for AppError {
    fn from(err: DashboardError) -> Self {
        let message = err.to_string();
        match err {
            DashboardError::UnknownHabit(_) => Self::not_found(message),
            DashboardError::MarkCompleteUnimplemented(_) => Self::not_implemented(message),
            DashboardError::DayOutOfRange { .. }
            | DashboardError::InvalidMonth(_)
            | DashboardError::YearOutOfRange(_)
            | DashboardError::EmptyHabitName
            | DashboardError::UnknownOption { .. } => Self::bad_request(message),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_errors_map_to_statuses() {
        let cases = [
            (DashboardError::UnknownHabit(9), StatusCode::NOT_FOUND),
            (DashboardError::MarkCompleteUnimplemented(1), StatusCode::NOT_IMPLEMENTED),
            (
                DashboardError::DayOutOfRange { day: 31, days_in_month: 30 },
                StatusCode::BAD_REQUEST,
            ),
            (DashboardError::EmptyHabitName, StatusCode::BAD_REQUEST),
            (DashboardError::YearOutOfRange(200_000_000), StatusCode::BAD_REQUEST),
        ];
        for (err, status) in cases {
            assert_eq!(AppError::from(err).status, status);
        }
    }

    #[test]
    fn out_of_range_message_names_bounds() {
        let err = DashboardError::DayOutOfRange { day: 30, days_in_month: 29 };
        assert_eq!(err.to_string(), "day 30 is outside the displayed month (1-29)");
    }
}
