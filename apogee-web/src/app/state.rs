use apogee_core::VisibilityController;
use yew::prelude::*;

/// App-wide state: the visibility controller and the unlock-dialog flags.
/// The controller is the only owner of the private-mode flag; pages receive
/// the current mode as a prop and re-render when it changes.
#[derive(Clone)]
pub struct AppState {
    pub visibility: UseStateHandle<VisibilityController>,
    pub show_unlock: UseStateHandle<bool>,
    pub unlock_failed: UseStateHandle<bool>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        visibility: use_state(VisibilityController::new),
        show_unlock: use_state(|| false),
        unlock_failed: use_state(|| false),
    }
}
