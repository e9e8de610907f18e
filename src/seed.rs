use crate::models::{ColorTag, DashboardData, Habit, Milestone};
use std::path::Path;
use tokio::fs;
use tracing::{error, info, warn};

/// Built-in habits and milestones shown when no fixture is configured.
pub fn mock_data() -> DashboardData {
    let habit = |id, name: &str, streak_count, color, days: &[u32]| Habit {
        id,
        name: name.to_string(),
        streak_count,
        color,
        completed_days: days.iter().copied().collect(),
        frequency: None,
        reminder: None,
    };
    let milestone = |id, name: &str, habit_id, progress| Milestone {
        id,
        name: name.to_string(),
        habit_id,
        progress,
    };

    DashboardData {
        habits: vec![
            habit(1, "Morning Meditation", 8, ColorTag::Green, &[1, 2, 3, 5, 8, 9, 10, 11]),
            habit(2, "Read 30 minutes", 5, ColorTag::Blue, &[2, 4, 6, 9, 11]),
            habit(3, "Drink 8 glasses of water", 3, ColorTag::Purple, &[1, 3, 4, 7, 8, 9, 11]),
            habit(4, "Exercise", 2, ColorTag::Orange, &[2, 5, 8, 11]),
        ],
        milestones: vec![
            milestone(1, "7 Day Streak", 1, 100),
            milestone(2, "30 Day Streak", 1, 27),
            milestone(3, "5 Day Streak", 2, 100),
            milestone(4, "Complete 10 times", 4, 40),
        ],
    }
}

/// Reads a JSON fixture. Any failure falls back to [`mock_data`]; the file is never written.
pub async fn load_seed(path: Option<&Path>) -> DashboardData {
    let Some(path) = path else {
        return mock_data();
    };

    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<DashboardData>(&bytes) {
            Ok(data) => {
                info!(
                    habits = data.habits.len(),
                    milestones = data.milestones.len(),
                    "loaded seed from {}",
                    path.display()
                );
                data.normalized()
            }
            Err(err) => {
                error!("failed to parse seed file: {err}");
                mock_data()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            warn!("seed file {} not found, using built-in habits", path.display());
            mock_data()
        }
        Err(err) => {
            error!("failed to read seed file: {err}");
            mock_data()
        }
    }
}
