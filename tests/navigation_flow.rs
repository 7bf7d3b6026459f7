//! End-to-end navigation: start, programmatic navigation, history traversal,
//! link interception and configuration-driven assembly.

use std::sync::{Arc, Mutex};

use spa_router::config::parse_config;
use spa_router::navigation::{LinkClick, LinkInterceptor, NavigationSource, UrlMode};
use spa_router::{App, Dispatch};
use url::Url;

mod common;

#[test]
fn test_start_then_navigate_then_back() {
    let rec = common::Recorder::new("/home/9", &["/", "/home/{homeId}", "/about"]);
    rec.router.start().unwrap();
    rec.router.navigate("/about");
    rec.router.back();

    assert_eq!(
        rec.routes(),
        vec!["/home/{homeId}", "/about", "/home/{homeId}"]
    );
    let calls = rec.calls();
    assert!(calls[0].1.initial_load);
    assert!(!calls[1].1.initial_load);
    assert!(!calls[2].1.initial_load);
    assert_eq!(calls[2].1.params.get("homeId"), Some("9"));
    assert_eq!(rec.history.current_path(), "/home/9");
}

#[test]
fn test_forward_and_external_visit() {
    let rec = common::Recorder::new("/", &["/", "/a", "/b"]);
    rec.router.start().unwrap();
    rec.router.navigate("/a");
    rec.router.back();
    rec.history.go_forward();
    rec.history.visit("/b");

    assert_eq!(rec.routes(), vec!["/", "/a", "/", "/a", "/b"]);
}

#[test]
fn test_stop_ignores_history_but_navigate_still_dispatches() {
    let rec = common::Recorder::new("/", &["/", "/a"]);
    rec.router.start().unwrap();
    rec.router.stop();

    rec.history.visit("/a");
    assert_eq!(rec.routes(), vec!["/"]);

    rec.router.navigate("/a");
    assert_eq!(rec.routes(), vec!["/", "/a"]);

    rec.router.start().unwrap();
    assert_eq!(rec.last().unwrap().0, "/a");
    assert!(rec.last().unwrap().1.initial_load);
}

#[test]
fn test_link_interception_drives_router() {
    let rec = common::Recorder::new("/", &["/", "/docs/{page}"]);
    let links = LinkInterceptor::new(
        rec.router.clone(),
        Url::parse("https://app.test/").unwrap(),
        UrlMode::History,
    );
    rec.router.start().unwrap();

    assert!(links.intercept(&LinkClick::new("/docs/intro?ref=nav")));
    assert!(!links.intercept(&LinkClick::new("https://elsewhere.test/docs/x")));
    assert!(!links.intercept(&LinkClick::new("/docs/new-tab").with_target("_blank")));

    assert_eq!(rec.routes(), vec!["/", "/docs/{page}"]);
    assert_eq!(rec.last().unwrap().1.params.get("page"), Some("intro"));
    assert_eq!(rec.history.current_path(), "/docs/intro");
}

#[test]
fn test_app_from_manifest() {
    let config = parse_config(
        r#"
        mode = "hash"
        origin = "https://app.test"

        [[routes]]
        pattern = "/"
        name = "index"

        [[routes]]
        pattern = "/greet/{name}"
        name = "greet"
        "#,
    )
    .unwrap();

    let seen: Arc<Mutex<Vec<Dispatch>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let app = App::from_config(&config, "/", move |d| sink.lock().unwrap().push(d)).unwrap();
    app.router().start().unwrap();
    assert!(app.click(&LinkClick::new("#/greet/ada")));
    app.router().navigate("/missing");

    assert_eq!(app.history().location(), "#/missing");
    let seen = seen.lock().unwrap();
    let routes: Vec<_> = seen.iter().map(|d| d.route.as_deref()).collect();
    assert_eq!(routes, vec![Some("index"), Some("greet"), None]);
    assert_eq!(seen[1].params.get("name"), Some("ada"));
    assert_eq!(
        serde_json::to_value(&seen[1]).unwrap(),
        serde_json::json!({
            "route": "greet",
            "path": "/greet/ada",
            "params": { "name": "ada" },
            "initial_load": false,
        })
    );
}
