use std::sync::Arc;

use services::CoachApi;

/// What the composition root (e.g. `crates/app`) must provide to the UI.
pub trait UiApp: Send + Sync {
    fn coach(&self) -> Arc<dyn CoachApi>;
}

#[derive(Clone)]
pub struct AppContext {
    coach: Arc<dyn CoachApi>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self { coach: app.coach() }
    }

    #[must_use]
    pub fn coach(&self) -> Arc<dyn CoachApi> {
        Arc::clone(&self.coach)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
