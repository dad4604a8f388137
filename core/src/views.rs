//! Route renderers for the workspace shell.
//!
//! Every function here is `(&ApplicationState) -> View`; none of them touch
//! the state they are given.

use crate::markup::{el, Element, EventKind, Node};
use crate::route::Route;
use crate::state::{ApplicationState, Role};

pub const BRAND_NAME: &str = "QueryQuill";
pub const DEMO_EMAIL: &str = "user@demo.com";
pub const DEMO_PASSWORD: &str = "password";
pub const BADGE_COUNT: u32 = 4;

pub const SIGNUP_NAME_ID: &str = "signup-name";
pub const SIGNUP_ROLE_ID: &str = "signup-role";
pub const SIDEBAR_ID: &str = "sidebar";
pub const SIDEBAR_OVERLAY_ID: &str = "sidebar-overlay";

/// Everything a rendered shell page can ask the controller to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShellAction {
    DemoLogin,
    Signup,
    Logout,
    ToggleRole,
    ToggleSidebar,
    CloseSidebar,
    SimulateUpload,
    PickAnswer { correct: bool },
    FlipFlashcard,
}

pub type View = Node<ShellAction>;

fn tag(name: &'static str) -> Element<ShellAction> {
    el(name)
}

fn icon(name: &str) -> Element<ShellAction> {
    tag("ion-icon").attr("name", name)
}

pub struct SidebarLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub route: Route,
}

pub const SIDEBAR_LINKS: [SidebarLink; 8] = [
    SidebarLink { icon: "grid-outline", label: "Dashboard", route: Route::Dashboard },
    SidebarLink { icon: "document-text-outline", label: "Workspace", route: Route::Workspace },
    SidebarLink { icon: "create-outline", label: "Practice", route: Route::Practice },
    SidebarLink { icon: "albums-outline", label: "Flashcards", route: Route::Flashcards },
    SidebarLink { icon: "stats-chart-outline", label: "Progress", route: Route::Progress },
    SidebarLink { icon: "trophy-outline", label: "Leaderboard", route: Route::Leaderboard },
    SidebarLink { icon: "settings-outline", label: "Settings", route: Route::Settings },
    SidebarLink { icon: "information-circle-outline", label: "About", route: Route::About },
];

pub fn render_route(state: &ApplicationState, route: Route) -> View {
    match route {
        Route::Login => render_login(state),
        Route::Signup => render_signup(state),
        Route::Dashboard => render_dashboard(state),
        Route::Workspace => render_workspace(state),
        Route::Practice => render_practice(state),
        Route::Flashcards => render_flashcards(state),
        Route::Progress => render_progress(state),
        Route::Leaderboard => render_leaderboard(state),
        Route::Settings => render_settings(state),
        Route::About => render_about(state),
    }
}

/// Full content of the `#app` container for `route`.
pub fn render_page(state: &ApplicationState, route: Route) -> View {
    let content = render_route(state, route);
    if !state.signed_in() {
        return tag("div").class("auth-layout fade-in").child(content).into();
    }
    let mobile_header = tag("div")
        .class("mobile-header")
        .child(
            tag("div")
                .class("brand")
                .child(icon("book"))
                .text(format!(" {BRAND_NAME}")),
        )
        .child(
            tag("button")
                .class("mobile-nav-toggle")
                .attr("type", "button")
                .on(EventKind::Click, ShellAction::ToggleSidebar)
                .child(icon("menu-outline")),
        );
    let shell = tag("div")
        .class("app-shell")
        .child(render_sidebar(state, route))
        .child(tag("main").class("main-content fade-in").child(content));
    let overlay = tag("div")
        .id(SIDEBAR_OVERLAY_ID)
        .class("sidebar-overlay")
        .attr("style", "display: none;")
        .on(EventKind::Click, ShellAction::CloseSidebar);
    tag("div")
        .class("app-root")
        .child(mobile_header)
        .child(shell)
        .child(overlay)
        .into()
}

pub fn render_sidebar(state: &ApplicationState, current: Route) -> View {
    let links = SIDEBAR_LINKS.into_iter().map(|link| {
        let class = if link.route == current {
            "nav-item active"
        } else {
            "nav-item"
        };
        tag("a")
            .attr("href", link.route.fragment())
            .class(class)
            .on(EventKind::Click, ShellAction::CloseSidebar)
            .child(icon(link.icon))
            .text(format!(" {}", link.label))
    });
    let mut sidebar = tag("aside")
        .class("sidebar")
        .id(SIDEBAR_ID)
        .child(
            tag("div")
                .class("brand")
                .child(icon("book"))
                .child(tag("span").text(BRAND_NAME)),
        )
        .child(tag("nav").class("nav-menu").children(links));
    if let Some(user) = state.user.as_ref() {
        sidebar = sidebar.child(
            tag("div")
                .class("user-mini")
                .child(tag("div").class("avatar").text(user.initial()))
                .child(
                    tag("div")
                        .child(tag("div").class("user-name").text(user.name.clone()))
                        .child(tag("div").class("user-role").text(user.role.as_str())),
                ),
        );
    }
    sidebar.into()
}

fn form_group(label: &str, input: Element<ShellAction>) -> Element<ShellAction> {
    tag("div")
        .class("form-group")
        .child(tag("label").class("form-label").text(label))
        .child(input)
}

fn auth_card(title: Element<ShellAction>, subtitle: &str) -> Element<ShellAction> {
    tag("div").class("card auth-card").child(
        tag("div")
            .class("auth-heading")
            .child(title)
            .child(tag("p").class("text-muted").text(subtitle)),
    )
}

pub fn render_login(_state: &ApplicationState) -> View {
    let form = tag("form")
        .on(EventKind::Submit, ShellAction::DemoLogin)
        .child(form_group(
            "Email",
            tag("input")
                .attr("type", "email")
                .class("form-input")
                .attr("value", DEMO_EMAIL)
                .attr("required", ""),
        ))
        .child(form_group(
            "Password",
            tag("input")
                .attr("type", "password")
                .class("form-input")
                .attr("value", DEMO_PASSWORD)
                .attr("required", ""),
        ))
        .child(
            tag("button")
                .attr("type", "submit")
                .class("btn btn-primary btn-full")
                .text("Log In"),
        );
    auth_card(tag("h1").class("brand-title").text(BRAND_NAME), "Login to your workspace")
        .child(form)
        .child(
            tag("p")
                .class("auth-switch")
                .text("No account? ")
                .child(tag("a").attr("href", Route::Signup.fragment()).text("Sign up")),
        )
        .into()
}

pub fn render_signup(_state: &ApplicationState) -> View {
    let roles = Role::ALL
        .into_iter()
        .map(|role| tag("option").attr("value", role.as_str()).text(role.label()));
    let form = tag("form")
        .on(EventKind::Submit, ShellAction::Signup)
        .child(form_group(
            "Full Name",
            tag("input")
                .attr("type", "text")
                .id(SIGNUP_NAME_ID)
                .class("form-input")
                .attr("required", "")
                .attr("placeholder", "John Doe"),
        ))
        .child(form_group(
            "Role",
            tag("select")
                .id(SIGNUP_ROLE_ID)
                .class("form-input")
                .children(roles),
        ))
        .child(
            tag("button")
                .attr("type", "submit")
                .class("btn btn-primary btn-full")
                .text("Sign Up"),
        );
    auth_card(tag("h1").text("Create Account"), "Join the learning community")
        .child(form)
        .child(
            tag("p")
                .class("auth-switch")
                .text("Already have an account? ")
                .child(tag("a").attr("href", Route::Login.fragment()).text("Log In")),
        )
        .into()
}

fn page_header(title: &str) -> Element<ShellAction> {
    tag("header")
        .class("page-header")
        .child(tag("h1").class("page-title").text(title))
}

fn stat_card(label: &str, value: String, accent: &str) -> Element<ShellAction> {
    tag("div")
        .class("card stat-card")
        .child(tag("div").class("text-muted stat-label").text(label))
        .child(tag("div").class(format!("stat-value {accent}")).text(value))
}

fn quick_action(route: Route, icon_name: &str, accent: &str, label: &str) -> Element<ShellAction> {
    tag("a")
        .attr("href", route.fragment())
        .class("card quick-action")
        .child(icon(icon_name).class(accent))
        .child(tag("h4").text(label))
}

pub fn render_dashboard(state: &ApplicationState) -> View {
    let name = state
        .user
        .as_ref()
        .map(|user| user.name.as_str())
        .unwrap_or_default();
    let stats = &state.gamification;
    tag("div")
        .child(
            page_header("Dashboard")
                .child(tag("p").class("text-muted").text(format!("Welcome back, {name}."))),
        )
        .child(
            tag("div")
                .class("grid grid-4 stats")
                .child(stat_card("Level", stats.level.to_string(), "primary"))
                .child(stat_card("Streak", format!("{} days", stats.streak), "accent"))
                .child(stat_card("XP Earned", stats.xp.to_string(), "secondary"))
                .child(stat_card("Badges", BADGE_COUNT.to_string(), "")),
        )
        .child(tag("h3").text("Quick Actions"))
        .child(
            tag("div")
                .class("grid grid-3")
                .child(quick_action(
                    Route::Workspace,
                    "cloud-upload-outline",
                    "primary",
                    "Upload Document",
                ))
                .child(quick_action(Route::Practice, "create-outline", "secondary", "Start Practice"))
                .child(quick_action(Route::Flashcards, "albums-outline", "accent", "Flashcards")),
        )
        .into()
}

pub fn render_workspace(_state: &ApplicationState) -> View {
    tag("div")
        .child(
            page_header("Document Workspace")
                .child(tag("p").class("text-muted").text("Upload notes to generate AI summaries.")),
        )
        .child(
            tag("div")
                .class("grid grid-2")
                .child(
                    tag("div")
                        .class("card drop-target")
                        .child(icon("document-text-outline"))
                        .child(tag("h3").text("Drop PDF here"))
                        .child(
                            tag("button")
                                .attr("type", "button")
                                .class("btn btn-primary")
                                .on(EventKind::Click, ShellAction::SimulateUpload)
                                .text("Select File"),
                        ),
                )
                .child(
                    tag("div")
                        .class("card output-placeholder")
                        .child(tag("p").class("text-muted").text("AI output will appear here.")),
                ),
        )
        .into()
}

pub const PRACTICE_QUESTION: &str = "Which organelle produces ATP?";
pub const PRACTICE_ANSWERS: [(&str, bool); 3] =
    [("Nucleus", false), ("Mitochondria", true), ("Ribosome", false)];

pub fn render_practice(_state: &ApplicationState) -> View {
    let answers = PRACTICE_ANSWERS
        .into_iter()
        .zip('A'..)
        .map(|((answer, correct), letter)| {
            tag("button")
                .attr("type", "button")
                .class("btn btn-outline answer")
                .on(EventKind::Click, ShellAction::PickAnswer { correct })
                .text(format!("{letter}. {answer}"))
        });
    tag("div")
        .child(
            page_header("Practice Zone")
                .child(tag("p").class("text-muted").text("Biology - Cell Structure")),
        )
        .child(
            tag("div")
                .class("card practice-card")
                .child(
                    tag("div")
                        .class("practice-meta")
                        .child(tag("span").class("badge badge-primary").text("Q3 / 10"))
                        .child(tag("span").text("Time: 04:20")),
                )
                .child(tag("h3").text(PRACTICE_QUESTION))
                .child(tag("div").class("grid grid-1").children(answers))
                .child(
                    tag("div").class("practice-next").child(
                        tag("button")
                            .attr("type", "button")
                            .class("btn btn-primary")
                            .text("Next ")
                            .child(icon("arrow-forward")),
                    ),
                ),
        )
        .into()
}

pub fn render_flashcards(_state: &ApplicationState) -> View {
    let card = tag("div")
        .class("flashcard-container")
        .on(EventKind::Click, ShellAction::FlipFlashcard)
        .child(
            tag("div")
                .class("flashcard-inner")
                .child(
                    tag("div")
                        .class("flashcard-front")
                        .child(tag("h3").text("Photosynthesis"))
                        .child(tag("p").class("text-muted").text("Tap to reveal definition")),
                )
                .child(tag("div").class("flashcard-back").child(tag("p").text(
                    "The process by which green plants use sunlight to synthesize nutrients.",
                ))),
        );
    tag("div")
        .child(page_header("Flashcards"))
        .child(tag("div").class("flashcard-stage").child(card))
        .into()
}

pub const SUBJECT_MASTERY: [(&str, u8, &str); 2] = [("Biology", 85, "secondary"), ("History", 40, "accent")];

pub fn render_progress(_state: &ApplicationState) -> View {
    let bars = SUBJECT_MASTERY.into_iter().map(|(subject, percent, accent)| {
        tag("div")
            .class("mastery")
            .text(format!("{subject}: "))
            .child(
                tag("div").class("progress-track").child(
                    tag("div")
                        .class(format!("progress-fill {accent}"))
                        .attr("style", format!("width: {percent}%;")),
                ),
            )
    });
    tag("div")
        .child(page_header("Progress"))
        .child(tag("div").class("card").child(tag("h3").text("Subject Mastery")).children(bars))
        .into()
}

pub const LEADERBOARD_ROWS: [(&str, &str); 2] = [("Sarah", "14,500"), ("Mike", "12,200")];

pub fn render_leaderboard(state: &ApplicationState) -> View {
    let fixed = LEADERBOARD_ROWS.into_iter().map(|(name, xp)| (name.to_string(), xp.to_string()));
    let you = std::iter::once(("You".to_string(), state.gamification.xp.to_string()));
    let rows = fixed.chain(you).enumerate().map(|(index, (name, xp))| {
        tag("tr")
            .child(tag("td").text(format!("#{}", index + 1)))
            .child(tag("td").text(name))
            .child(tag("td").text(xp))
    });
    let header = tag("tr")
        .child(tag("th").text("Rank"))
        .child(tag("th").text("User"))
        .child(tag("th").text("XP"));
    tag("div")
        .child(page_header("Leaderboard"))
        .child(
            tag("div")
                .class("card")
                .child(tag("table").class("leaderboard").child(header).children(rows)),
        )
        .into()
}

pub fn render_settings(state: &ApplicationState) -> View {
    let role = state
        .user
        .as_ref()
        .map(|user| user.role.as_str())
        .unwrap_or_default();
    tag("div")
        .child(page_header("Settings"))
        .child(
            tag("div")
                .class("card")
                .child(
                    tag("div")
                        .class("form-group setting-row")
                        .child(
                            tag("div")
                                .child(tag("strong").text("User Role"))
                                .child(tag("br"))
                                .child(tag("span").class("text-muted").text(format!("Current: {role}"))),
                        )
                        .child(
                            tag("button")
                                .attr("type", "button")
                                .class("btn btn-outline")
                                .on(EventKind::Click, ShellAction::ToggleRole)
                                .text("Switch Role"),
                        ),
                )
                .child(
                    tag("div").class("danger-zone").child(
                        tag("button")
                            .attr("type", "button")
                            .class("btn btn-outline btn-danger")
                            .on(EventKind::Click, ShellAction::Logout)
                            .text("Logout & Reset"),
                    ),
                ),
        )
        .into()
}

pub fn render_about(_state: &ApplicationState) -> View {
    tag("div")
        .class("card about-card")
        .child(tag("h1").text(BRAND_NAME))
        .child(tag("p").class("text-muted").text("A Smart Study Workspace."))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::UserProfile;

    fn signed_in() -> ApplicationState {
        ApplicationState {
            user: Some(UserProfile::new("Ada", Role::Teacher)),
            ..ApplicationState::default()
        }
    }

    #[test]
    fn sidebar_marks_only_current_route_active() {
        let view = render_sidebar(&signed_in(), Route::Progress);
        let active = view.find_all(|element| element.tag == "a" && element.has_class("active"));
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].attr_value("href"), Some("#progress"));
    }

    #[test]
    fn sidebar_shows_user_initial_and_role() {
        let text = render_sidebar(&signed_in(), Route::Dashboard).text_content();
        assert!(text.contains("A Ada teacher"));
    }

    #[test]
    fn signed_out_page_has_no_sidebar() {
        let view = render_page(&ApplicationState::default(), Route::Login);
        assert!(view.find_by_id(SIDEBAR_ID).is_none());
        assert!(view.text_content().contains("Login to your workspace"));
    }

    #[test]
    fn settings_binds_role_toggle_and_logout() {
        let view = render_settings(&signed_in());
        let actions: Vec<ShellAction> = view.bindings().into_iter().map(|(_, action)| *action).collect();
        assert_eq!(actions, vec![ShellAction::ToggleRole, ShellAction::Logout]);
        assert!(view.text_content().contains("Current: teacher"));
    }

    #[test]
    fn practice_answers_are_lettered_with_one_correct() {
        let view = render_practice(&signed_in());
        let answers = view.find_all(|element| element.has_class("answer"));
        assert_eq!(answers.len(), 3);
        let correct: Vec<_> = answers
            .iter()
            .filter(|answer| answer.bindings == vec![(EventKind::Click, ShellAction::PickAnswer { correct: true })])
            .collect();
        assert_eq!(correct.len(), 1);
        assert!(view.text_content().contains("B. Mitochondria"));
    }

    #[test]
    fn leaderboard_ranks_user_third_with_current_xp() {
        let mut state = signed_in();
        state.gamification.xp = 321;
        let text = render_leaderboard(&state).text_content();
        assert!(text.contains("#3 You 321"));
    }
}
