use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::storage::KeyValueStore;

pub const STATE_STORAGE_KEY: &str = "queryquill_state";

pub const DEMO_USER_NAME: &str = "Demo User";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Teacher,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Student, Role::Teacher];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Teacher => "Teacher",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Role::Student => Role::Teacher,
            Role::Teacher => Role::Student,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(trimmed))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub role: Role,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }

    /// The fixed profile used by the one-click login.
    pub fn demo() -> Self {
        Self::new(DEMO_USER_NAME, Role::Student)
    }

    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

/// Raw signup form values as read from the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub role: String,
}

impl SignupForm {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
        }
    }

    /// Builds the profile; `None` when the required name is blank.
    pub fn into_profile(self) -> Option<UserProfile> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        let role = Role::parse(&self.role).unwrap_or_default();
        Some(UserProfile::new(name, role))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gamification {
    pub level: u32,
    pub xp: u32,
    pub streak: u32,
}

impl Default for Gamification {
    fn default() -> Self {
        Self {
            level: 1,
            xp: 0,
            streak: 0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationState {
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub gamification: Gamification,
}

impl ApplicationState {
    pub fn signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn decode(raw: &str) -> Result<Self, StorageError> {
        serde_json::from_str(raw).map_err(|err| StorageError::Corrupt(err.to_string()))
    }

    pub fn encode(&self) -> Result<String, StorageError> {
        serde_json::to_string(self).map_err(|err| StorageError::WriteFailed(err.to_string()))
    }
}

/// Result of reading the persisted state once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedState {
    pub state: ApplicationState,
    /// Set when a stored blob existed but could not be decoded.
    pub corruption: Option<StorageError>,
}

pub fn load_state<S: KeyValueStore + ?Sized>(store: &S) -> LoadedState {
    let Some(raw) = store.get(STATE_STORAGE_KEY) else {
        return LoadedState {
            state: ApplicationState::default(),
            corruption: None,
        };
    };
    match ApplicationState::decode(&raw) {
        Ok(state) => LoadedState {
            state,
            corruption: None,
        },
        Err(err) => LoadedState {
            state: ApplicationState::default(),
            corruption: Some(err),
        },
    }
}

pub fn save_state<S: KeyValueStore + ?Sized>(
    store: &S,
    state: &ApplicationState,
) -> Result<(), StorageError> {
    let raw = state.encode()?;
    store.set(STATE_STORAGE_KEY, &raw)
}

pub fn clear_state<S: KeyValueStore + ?Sized>(store: &S) {
    store.remove(STATE_STORAGE_KEY);
}
