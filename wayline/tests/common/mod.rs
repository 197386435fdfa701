#![allow(dead_code)]

use wayline::{
    App, DispatchConfig, HelperBundle, actions, serde_json::json, testing::CallRecorder,
};

// ============================================================================
// Page Fixture
// ============================================================================

/// An app set up the way a typical page would be: one global helper,
/// some initial data, a recording pre-hook and a `users` controller.
pub struct Page {
    pub app: App,
    pub recorder: CallRecorder,
}

impl Page {
    /// Labels recorded so far.
    pub fn calls(&self) -> Vec<String> {
        self.recorder.calls()
    }

    /// Whether `label` was recorded at least once.
    pub fn called(&self, label: &str) -> bool {
        self.recorder.count(label) > 0
    }
}

pub fn page() -> Page {
    let recorder = CallRecorder::new();

    let app = App::builder()
        .global_helpers(HelperBundle::new().helper("answer", |_scope, _args| Ok(json!(42))))
        .data(json!({"foo": "bar"}))
        .pre_hook(recorder.hook("pre-hook"))
        .config(DispatchConfig::new("users", "index"))
        .build()
        .unwrap();

    app.register_controller(
        "users",
        actions! {
            "index" => recorder.action("users#index"),
            "new" => |scope| {
                scope.call("aHelper", &[])?;
                Ok(())
            },
        },
        HelperBundle::new().helper("aHelper", recorder.helper("users.aHelper", json!(null))),
    )
    .unwrap();

    Page { app, recorder }
}
