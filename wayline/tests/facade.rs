//! Cross-controller access: data, helpers and actions reached from inside
//! running page code.

use wayline::{
    Actions, DispatchConfig, Facade, HelperBundle, InvocationError, Value, call_helper,
    serde_json::json,
};

mod common;
use common::page;

#[test]
fn test_data_round_trip() {
    let page = page();

    assert_eq!(page.app.set("a.global.variable", json!("foo")), json!("foo"));

    assert!(page.app.get("a").is_some());
    assert!(page.app.get("a.global").is_some());
    assert_eq!(page.app.get("a.global.variable"), Some(json!("foo")));
    assert_eq!(
        page.app.data(),
        json!({"foo": "bar", "a": {"global": {"variable": "foo"}}})
    );
}

#[test]
fn test_initial_data_is_readable() {
    let page = page();

    assert_eq!(page.app.get("foo"), Some(json!("bar")));
    assert_eq!(page.app.get("missing"), None);
}

#[test]
fn test_global_helper() {
    let page = page();

    assert_eq!(page.app.invoke_global_helper("answer", &[]).unwrap(), json!(42));
    assert_eq!(call_helper!(&*page.app, None, "answer").unwrap(), json!(42));
}

#[test]
fn test_foreign_helper_from_action() {
    let page = page();
    page.app
        .register_controller(
            "admin/users",
            Actions::new().action("index", |scope| {
                scope.invoke_helper(Some("users"), "aHelper", &[])?;
                Ok(())
            }),
            HelperBundle::new(),
        )
        .unwrap();

    page.app
        .configure(DispatchConfig::new("users", "index").with_namespace("admin"));
    page.app.execute_current().unwrap();

    assert!(page.called("users.aHelper"));
    assert!(!page.called("users#index"));
}

#[test]
fn test_foreign_action_from_action() {
    let page = page();
    page.app
        .register_controller(
            "admin/users",
            Actions::new().action("index", |scope| {
                scope.invoke_action_target("users#index")?;
                Ok(())
            }),
            HelperBundle::new(),
        )
        .unwrap();

    page.app
        .configure(DispatchConfig::new("users", "index").with_namespace("admin"));
    page.app.execute_current().unwrap();

    assert_eq!(page.recorder.count("users#index"), 1);
    assert_eq!(page.recorder.count("pre-hook"), 1);
    assert_eq!(
        page.app.dispatch_config(),
        DispatchConfig::new("users", "index").with_namespace("admin")
    );
}

#[test]
fn test_helper_runs_with_owning_bundle() {
    let page = page();
    page.app
        .register_controller(
            "reports",
            Actions::new(),
            HelperBundle::new()
                .helper("title", |scope, args| {
                    let name = scope.call("upper", args)?;
                    Ok(json!(format!("Report: {}", name.as_str().unwrap_or_default())))
                })
                .helper("upper", |_scope, args| {
                    let text = args.first().and_then(Value::as_str).unwrap_or_default();
                    Ok(json!(text.to_uppercase()))
                }),
        )
        .unwrap();

    let title = page
        .app
        .invoke_helper(Some("reports"), "title", &[json!("sales")])
        .unwrap();

    assert_eq!(title, json!("Report: SALES"));
}

#[test]
fn test_helper_can_touch_shared_data() {
    let page = page();
    page.app
        .register_controller(
            "counter",
            Actions::new(),
            HelperBundle::new().helper("bump", |scope, _args| {
                let next = scope.get("count").and_then(|v| v.as_i64()).unwrap_or(0) + 1;
                Ok(scope.set("count", json!(next)))
            }),
        )
        .unwrap();

    page.app.invoke_helper(Some("counter"), "bump", &[]).unwrap();
    page.app.invoke_helper(Some("counter"), "bump", &[]).unwrap();

    assert_eq!(page.app.get("count"), Some(json!(2)));
}

#[test]
fn test_undefined_helper_names_controller() {
    let page = page();

    let err = page
        .app
        .invoke_helper(Some("users"), "missing", &[])
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Helper 'missing' not defined for controller 'users'"
    );

    let err = page.app.invoke_global_helper("missing", &[]).unwrap_err();
    assert_eq!(err.to_string(), "Global helper 'missing' not defined");
}

#[test]
fn test_action_errors() {
    let page = page();

    assert!(matches!(
        page.app.invoke_action_target("users#destroy"),
        Err(InvocationError::UnknownAction { .. })
    ));
    assert!(matches!(
        page.app.invoke_action("ghosts", "index"),
        Err(InvocationError::UnknownController { .. })
    ));
    assert!(matches!(
        page.app.invoke_action_target("users"),
        Err(InvocationError::UnknownAction { ref action, .. }) if action.is_empty()
    ));
}

#[test]
fn test_nested_invocation_does_not_deadlock() {
    let page = page();
    page.app
        .register_controller(
            "outer",
            Actions::new().action("run", |scope| {
                scope.set("trail.outer", json!(true));
                scope.invoke_action("inner", "run")?;
                Ok(())
            }),
            HelperBundle::new(),
        )
        .unwrap();
    page.app
        .register_controller(
            "inner",
            Actions::new().action("run", |scope| {
                let seen = scope.get("trail.outer").unwrap_or_default();
                scope.set("trail.inner", seen);
                scope.invoke_global_helper("answer", &[])?;
                Ok(())
            }),
            HelperBundle::new(),
        )
        .unwrap();

    page.app.configure(DispatchConfig::new("outer", "run"));
    page.app.execute_current().unwrap();

    assert_eq!(page.app.get("trail.inner"), Some(json!(true)));
}
