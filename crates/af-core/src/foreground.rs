use serde::Serialize;

/// Platform lifecycle state of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AppVisibility {
    Active,
    Inactive,
    Background,
}

/// Detects background-to-foreground transitions.
///
/// The clipboard is probed on every transition from `Inactive` or
/// `Background` to `Active`, never on repeated `Active` notifications.
#[derive(Debug, Clone)]
pub struct ForegroundTracker {
    current: AppVisibility,
}

impl ForegroundTracker {
    pub fn new(initial: AppVisibility) -> Self {
        Self { current: initial }
    }

    /// Records `next` and reports whether the app just came to the foreground.
    pub fn transition(&mut self, next: AppVisibility) -> bool {
        let came_forward = self.current != AppVisibility::Active && next == AppVisibility::Active;
        self.current = next;
        came_forward
    }
}

impl Default for ForegroundTracker {
    fn default() -> Self {
        Self::new(AppVisibility::Active)
    }
}
