use queryquill_core::route::{resolve, Route, ROUTES};

const UNKNOWN_FRAGMENTS: &[&str] = &["", "#", "#nope", "#Dashboard", "dashboard/x", "#login?x=1", "   "];

#[test]
fn unknown_fragments_fall_back_to_login_when_signed_out() {
    for fragment in UNKNOWN_FRAGMENTS {
        let resolution = resolve(fragment, false);
        assert_eq!(resolution.route, Route::Login, "fragment {fragment:?}");
    }
}

#[test]
fn unknown_fragments_land_on_dashboard_when_signed_in() {
    for fragment in UNKNOWN_FRAGMENTS {
        let resolution = resolve(fragment, true);
        assert_eq!(resolution.route, Route::Dashboard, "fragment {fragment:?}");
        assert!(resolution.redirected);
    }
}

#[test]
fn auth_pages_redirect_to_dashboard_when_signed_in() {
    for route in [Route::Login, Route::Signup] {
        let resolution = resolve(route.fragment(), true);
        assert_eq!(resolution.route, Route::Dashboard);
        assert!(resolution.redirected);
    }
}

#[test]
fn signed_out_users_only_reach_login_and_signup() {
    for route in ROUTES {
        let resolution = resolve(route.fragment(), false);
        let expected = if route == Route::Signup {
            Route::Signup
        } else {
            Route::Login
        };
        assert_eq!(resolution.route, expected, "route {route}");
        assert_eq!(resolution.redirected, route != expected);
    }
}

#[test]
fn signed_in_users_reach_every_app_route() {
    for route in ROUTES.into_iter().filter(|route| !route.is_auth_page()) {
        let resolution = resolve(route.fragment(), true);
        assert_eq!(resolution.route, route);
        assert!(!resolution.redirected);
    }
}

#[test]
fn fragments_round_trip_through_the_table() {
    for route in ROUTES {
        assert_eq!(Route::from_fragment(route.fragment()), Some(route));
        assert_eq!(Route::from_fragment(&route.fragment()[1..]), Some(route));
    }
}
