use crate::shell::Shell;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone, Default)]
pub struct AppState {
    pub shell: Arc<Mutex<Shell>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
