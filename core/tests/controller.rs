use queryquill_core::state::{STATE_STORAGE_KEY, UserProfile};
use queryquill_core::theme::{load_theme, save_theme, THEME_STORAGE_KEY};
use queryquill_core::{
    ApplicationState, Gamification, KeyValueStore, MemoryStore, Role, Route, ShellController,
    StorageError, Theme,
};

const MALFORMED_BLOBS: &[&str] = &[
    "",
    "not json",
    "{",
    "[]",
    "null",
    "42",
    r#"{"user":{"name":"Ada"}}"#,
    r#"{"user":{"name":"Ada","role":"admin"},"gamification":{"level":1,"xp":0,"streak":0}}"#,
    r#"{"user":null,"gamification":{"level":-1,"xp":0,"streak":0}}"#,
];

fn persisted(store: &MemoryStore) -> Option<ApplicationState> {
    store
        .get(STATE_STORAGE_KEY)
        .map(|raw| ApplicationState::decode(&raw).expect("persisted state decodes"))
}

#[test]
fn absent_blob_loads_default_state() {
    let (controller, corruption) = ShellController::load(MemoryStore::new());
    assert!(corruption.is_none());
    assert_eq!(controller.state().user, None);
    assert_eq!(
        controller.state().gamification,
        Gamification { level: 1, xp: 0, streak: 0 }
    );
}

#[test]
fn malformed_blobs_load_default_state() {
    for raw in MALFORMED_BLOBS {
        let store = MemoryStore::with_entry(STATE_STORAGE_KEY, raw);
        let (controller, corruption) = ShellController::load(store);
        assert_eq!(controller.state(), &ApplicationState::default(), "blob {raw:?}");
        assert!(
            matches!(corruption, Some(StorageError::Corrupt(_))),
            "blob {raw:?}"
        );
    }
}

#[test]
fn valid_blob_is_restored() {
    let raw = r#"{"user":{"name":"Lin","role":"teacher"},"gamification":{"level":3,"xp":450,"streak":5}}"#;
    let (controller, corruption) = ShellController::load(MemoryStore::with_entry(STATE_STORAGE_KEY, raw));
    assert!(corruption.is_none());
    assert_eq!(controller.state().user, Some(UserProfile::new("Lin", Role::Teacher)));
    assert_eq!(controller.state().gamification.xp, 450);
    assert_eq!(controller.resolve("#login").route, Route::Dashboard);
}

#[test]
fn authenticate_persists_profile_and_navigates_to_dashboard() {
    let store = MemoryStore::new();
    let (mut controller, _) = ShellController::load(&store);
    let effect = controller.authenticate(UserProfile::new("Ada", Role::Teacher));
    assert_eq!(effect.navigate, Some(Route::Dashboard));
    assert!(effect.storage_error.is_none());

    let state = persisted(&store).expect("state persisted");
    assert_eq!(state.user, Some(UserProfile::new("Ada", Role::Teacher)));
}

#[test]
fn demo_login_uses_fixed_profile() {
    let store = MemoryStore::new();
    let (mut controller, _) = ShellController::load(&store);
    controller.authenticate(UserProfile::demo());
    let user = persisted(&store).and_then(|state| state.user).expect("user persisted");
    assert_eq!(user.name, "Demo User");
    assert_eq!(user.role, Role::Student);
}

#[test]
fn logout_clears_user_and_blob() {
    let signed_in = r#"{"user":{"name":"Lin","role":"student"},"gamification":{"level":2,"xp":10,"streak":1}}"#;
    let starts = [
        MemoryStore::new(),
        MemoryStore::with_entry(STATE_STORAGE_KEY, signed_in),
        MemoryStore::with_entry(STATE_STORAGE_KEY, "garbage"),
    ];
    for store in &starts {
        let (mut controller, _) = ShellController::load(store);
        let effect = controller.logout();
        assert_eq!(effect.navigate, Some(Route::Login));
        assert_eq!(controller.state().user, None);
        assert!(!store.contains(STATE_STORAGE_KEY));
    }
}

#[test]
fn logout_after_login_leaves_no_blob() {
    let store = MemoryStore::new();
    let (mut controller, _) = ShellController::load(&store);
    controller.authenticate(UserProfile::new("Ada", Role::Teacher));
    controller.logout();
    assert!(!store.contains(STATE_STORAGE_KEY));
    assert_eq!(controller.resolve("#dashboard").route, Route::Login);
}

#[test]
fn toggle_role_flips_persists_and_keeps_counters() {
    let raw = r#"{"user":{"name":"Lin","role":"student"},"gamification":{"level":3,"xp":450,"streak":5}}"#;
    let store = MemoryStore::with_entry(STATE_STORAGE_KEY, raw);
    let (mut controller, _) = ShellController::load(&store);

    let effect = controller.toggle_role();
    assert!(effect.rerender);
    assert_eq!(effect.navigate, None);
    assert_eq!(effect.notice.as_deref(), Some("Switched to teacher mode"));

    let state = persisted(&store).expect("state persisted");
    assert_eq!(state.user.map(|user| user.role), Some(Role::Teacher));
    assert_eq!(state.gamification, Gamification { level: 3, xp: 450, streak: 5 });

    controller.toggle_role();
    assert_eq!(controller.state().user.as_ref().map(|user| user.role), Some(Role::Student));
}

#[test]
fn toggle_role_without_user_does_nothing() {
    let store = MemoryStore::new();
    let (mut controller, _) = ShellController::load(&store);
    let effect = controller.toggle_role();
    assert!(!effect.rerender);
    assert!(store.is_empty());
}

#[test]
fn theme_is_independent_of_application_state() {
    let store = MemoryStore::new();
    assert_eq!(load_theme(&store), Theme::Light);
    save_theme(&store, Theme::Dark).unwrap();
    assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("dark"));

    let (mut controller, _) = ShellController::load(&store);
    controller.authenticate(UserProfile::demo());
    controller.logout();
    assert_eq!(load_theme(&store), Theme::Dark);
}

#[test]
fn unknown_theme_value_means_light() {
    let store = MemoryStore::with_entry(THEME_STORAGE_KEY, "sepia");
    assert_eq!(load_theme(&store), Theme::Light);
}
