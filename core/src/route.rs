use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Signup,
    Dashboard,
    Workspace,
    Practice,
    Flashcards,
    Progress,
    Leaderboard,
    Settings,
    About,
}

pub const ROUTES: [Route; 10] = [
    Route::Login,
    Route::Signup,
    Route::Dashboard,
    Route::Workspace,
    Route::Practice,
    Route::Flashcards,
    Route::Progress,
    Route::Leaderboard,
    Route::Settings,
    Route::About,
];

impl Route {
    pub fn fragment(self) -> &'static str {
        match self {
            Route::Login => "#login",
            Route::Signup => "#signup",
            Route::Dashboard => "#dashboard",
            Route::Workspace => "#workspace",
            Route::Practice => "#practice",
            Route::Flashcards => "#flashcards",
            Route::Progress => "#progress",
            Route::Leaderboard => "#leaderboard",
            Route::Settings => "#settings",
            Route::About => "#about",
        }
    }

    /// Exact match against the route table; the leading `#` is optional.
    pub fn from_fragment(fragment: &str) -> Option<Self> {
        let raw = fragment.trim();
        let name = raw.strip_prefix('#').unwrap_or(raw);
        if name.is_empty() {
            return None;
        }
        ROUTES
            .into_iter()
            .find(|route| &route.fragment()[1..] == name)
    }

    pub fn is_auth_page(self) -> bool {
        matches!(self, Route::Login | Route::Signup)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fragment())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub route: Route,
    /// The requested fragment did not name `route` exactly.
    pub redirected: bool,
}

/// Maps a location fragment to the route to render.
///
/// Unknown or missing fragments become login before the auth guard runs.
/// Signed out, everything but signup is forced to login; signed in, login
/// and signup are forced to the dashboard.
pub fn resolve(fragment: &str, signed_in: bool) -> Resolution {
    let requested = Route::from_fragment(fragment);
    let route = requested.unwrap_or(Route::Login);
    let guarded = if !signed_in && route != Route::Signup {
        Route::Login
    } else if signed_in && route.is_auth_page() {
        Route::Dashboard
    } else {
        route
    };
    Resolution {
        route: guarded,
        redirected: requested != Some(guarded),
    }
}
