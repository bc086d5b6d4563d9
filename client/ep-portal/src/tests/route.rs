use crate::Route;

#[test]
fn given_known_paths_when_parse_then_routes() {
    assert_eq!(Route::parse("/login"), Some(Route::Login));
    assert_eq!(Route::parse("/users"), Some(Route::Users));
    assert_eq!(Route::parse("/users/edit/5"), Some(Route::EditUser(5)));
}

#[test]
fn given_trailing_slash_or_query_when_parse_then_ignored() {
    assert_eq!(Route::parse("/users/"), Some(Route::Users));
    assert_eq!(Route::parse("/users?page=2"), Some(Route::Users));
    assert_eq!(Route::parse("/users/edit/7#top"), Some(Route::EditUser(7)));
}

#[test]
fn given_unknown_paths_when_parse_then_none() {
    assert_eq!(Route::parse("/"), None);
    assert_eq!(Route::parse(""), None);
    assert_eq!(Route::parse("/admin"), None);
    assert_eq!(Route::parse("/users/edit/"), None);
    assert_eq!(Route::parse("/users/edit/abc"), None);
    assert_eq!(Route::parse("/users/edit/-1"), None);
}

#[test]
fn given_routes_when_path_then_round_trips_through_parse() {
    for route in [Route::Login, Route::Users, Route::EditUser(12)] {
        assert_eq!(Route::parse(&route.path()), Some(route));
    }
}

#[test]
fn given_routes_when_is_protected_then_only_login_is_public() {
    assert!(!Route::Login.is_protected());
    assert!(Route::Users.is_protected());
    assert!(Route::EditUser(1).is_protected());
}
