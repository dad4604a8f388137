use crate::error::StorageError;
use crate::route::{resolve, Resolution, Route};
use crate::state::{clear_state, load_state, save_state, ApplicationState, Role, UserProfile};
use crate::storage::KeyValueStore;
use crate::views::{render_page, View};

pub const SIMULATED_UPLOAD_NOTICE: &str = "File uploaded (Simulated)";

/// What the host must do after a controller action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Effect {
    pub navigate: Option<Route>,
    pub rerender: bool,
    pub notice: Option<String>,
    pub storage_error: Option<StorageError>,
}

impl Effect {
    fn navigate(route: Route) -> Self {
        Self {
            navigate: Some(route),
            ..Self::default()
        }
    }

    fn with_storage(mut self, result: Result<(), StorageError>) -> Self {
        self.storage_error = result.err();
        self
    }
}

/// Owns the application state of the workspace shell.
///
/// State changes only through the action methods, each of which writes the
/// whole state back to the store before returning.
pub struct ShellController<S: KeyValueStore> {
    store: S,
    state: ApplicationState,
}

impl<S: KeyValueStore> ShellController<S> {
    /// Loads the persisted state; a corrupt blob is returned alongside the
    /// controller so the caller can log it.
    pub fn load(store: S) -> (Self, Option<StorageError>) {
        let loaded = load_state(&store);
        let controller = Self {
            store,
            state: loaded.state,
        };
        (controller, loaded.corruption)
    }

    pub fn state(&self) -> &ApplicationState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn resolve(&self, fragment: &str) -> Resolution {
        resolve(fragment, self.state.signed_in())
    }

    pub fn render(&self, route: Route) -> View {
        render_page(&self.state, route)
    }

    pub fn authenticate(&mut self, profile: UserProfile) -> Effect {
        self.state.user = Some(profile);
        Effect::navigate(Route::Dashboard).with_storage(self.save())
    }

    pub fn logout(&mut self) -> Effect {
        clear_state(&self.store);
        self.state.user = None;
        Effect::navigate(Route::Login)
    }

    pub fn toggle_role(&mut self) -> Effect {
        let Some(user) = self.state.user.as_mut() else {
            return Effect::default();
        };
        user.role = user.role.toggled();
        let role = user.role;
        Effect {
            rerender: true,
            notice: Some(role_notice(role)),
            ..Effect::default()
        }
        .with_storage(self.save())
    }

    fn save(&self) -> Result<(), StorageError> {
        save_state(&self.store, &self.state)
    }
}

pub fn role_notice(role: Role) -> String {
    format!("Switched to {role} mode")
}
