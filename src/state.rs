use crate::calendar::ViewDate;
use crate::config::Config;
use crate::dashboard::Dashboard;
use crate::models::DashboardData;
use std::{sync::Arc, time::Duration};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub login_delay: Duration,
    pub dashboard: Arc<Mutex<Dashboard>>,
}

impl AppState {
    pub fn new(config: &Config, data: DashboardData) -> Self {
        let dashboard = Dashboard::new(data, ViewDate::today(), config.share_link());
        Self {
            login_delay: config.login_delay,
            dashboard: Arc::new(Mutex::new(dashboard)),
        }
    }
}
