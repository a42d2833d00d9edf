/// Lifecycle of one network-backed action.
///
/// Each action owns exactly one of these, which keeps "result or error,
/// never both" structural instead of a convention across separate flags.
#[derive(Clone, Debug, PartialEq)]
pub enum ActionState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> ActionState<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
