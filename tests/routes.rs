//! Checks the route patterns the app mounts, independent of any DOM.

use leptos_router::PossibleRouteMatch;
use leptos_router::path;

#[test]
fn user_jobs_route_captures_the_id_param() {
    let matched = path!("/user/:id/jobs")
        .test("/user/42/jobs")
        .expect("route should match");
    assert!(matched.remaining().is_empty());
    let params: Vec<(String, String)> = matched
        .params()
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    assert_eq!(params, vec![(String::from("id"), String::from("42"))]);
}

#[test]
fn user_jobs_route_rejects_shorter_paths() {
    let matched = path!("/user/:id/jobs").test("/user/42");
    assert!(matched.is_none());
}

#[test]
fn static_routes_match_exactly() {
    for (pattern, example) in [
        (path!("/register"), "/register"),
        (path!("/login"), "/login"),
        (path!("/user-panel"), "/user-panel"),
    ] {
        let matched = pattern.test(example).expect("route should match");
        assert_eq!(matched.matched(), example);
        assert!(matched.remaining().is_empty());
    }
}
