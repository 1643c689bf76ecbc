// File: src/handlers.rs
// Purpose: HTTP handlers driving the form state machine

use axum::{
    extract::State,
    http::HeaderMap,
    response::Html,
    routing::{get, post},
    Form, Router,
};
use dynaform::{FormConfiguration, FormRenderer, FormState};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;
use tracing::debug;

/// The single form session. The mutex admits one transition at a time.
pub struct AppState {
    session: Mutex<FormState>,
    config: FormConfiguration,
    renderer: FormRenderer,
}

impl AppState {
    pub fn new(session: FormState, config: FormConfiguration, renderer: FormRenderer) -> Self {
        Self {
            session: Mutex::new(session),
            config,
            renderer,
        }
    }
}

type SharedState = Arc<AppState>;

/// Posted `name=value` pairs, in document order
type Inputs = Vec<(String, String)>;

/// Header htmx sets to the `name` of the element that fired the request
const TRIGGER_NAME: &str = "HX-Trigger-Name";

pub fn router(state: SharedState) -> Router {
    let form = &state.renderer.settings().form;
    let edit_action = form.edit_action.clone();
    let submit_action = form.submit_action.clone();

    Router::new()
        .route("/", get(page))
        .route(&edit_action, post(edit))
        .route(&submit_action, post(submit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn page(State(app): State<SharedState>) -> Html<String> {
    let session = app.session.lock().await;
    Html(app.renderer.render_page(&session, &app.config).into_string())
}

/// One input changed; answers with the re-rendered form fragment.
///
/// htmx posts every input of the enclosing form, but only the one that
/// fired becomes an edit.
async fn edit(
    State(app): State<SharedState>,
    headers: HeaderMap,
    Form(inputs): Form<Inputs>,
) -> Html<String> {
    let trigger = headers.get(TRIGGER_NAME).and_then(|value| value.to_str().ok());
    let input = triggering_input(&inputs, trigger);

    let mut session = app.session.lock().await;
    let applied = app.renderer.apply_inputs(&mut session, &app.config, input);
    debug!("Applied {} edit(s), revision {}", applied, session.revision());
    Html(app.renderer.render_form(&session, &app.config).into_string())
}

/// Whole form posted; edits are applied before validating and committing
async fn submit(State(app): State<SharedState>, Form(inputs): Form<Inputs>) -> Html<String> {
    let mut session = app.session.lock().await;
    app.renderer.apply_inputs(&mut session, &app.config, pairs(&inputs));
    session.submit(&app.config);
    Html(app.renderer.render_page(&session, &app.config).into_string())
}

fn pairs(inputs: &Inputs) -> impl Iterator<Item = (&str, &str)> {
    inputs.iter().map(|(name, raw)| (name.as_str(), raw.as_str()))
}

/// The input named by the trigger header, or the last posted one without it
fn triggering_input<'a>(
    inputs: &'a Inputs,
    trigger: Option<&str>,
) -> Option<(&'a str, &'a str)> {
    let found = match trigger {
        Some(name) => inputs.iter().rev().find(|(posted, _)| posted == name),
        None => inputs.last(),
    };
    found.map(|(name, raw)| (name.as_str(), raw.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use dynaform::build_empty_object;
    use tower::ServiceExt;

    fn app() -> (Router, SharedState) {
        let config = FormConfiguration::from_json_str(
            r#"[
                { "type": "textInput", "label": "Name", "path": "name", "required": true },
                { "type": "integerInput", "label": "Age", "path": "age", "min": 0, "max": 120 }
            ]"#,
        )
        .unwrap();
        let session = FormState::new(build_empty_object(&config));
        let state = Arc::new(AppState::new(session, config, FormRenderer::default()));
        (router(state.clone()), state)
    }

    fn form_post(uri: &str, body: &'static str) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_page_renders() {
        let (router, _) = app();
        let response = router
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains(r#"name="name""#));
        assert!(html.contains(r#"name="age""#));
    }

    #[tokio::test]
    async fn test_edit_returns_fragment_with_error() {
        let (router, state) = app();
        let response = router.oneshot(form_post("/edit", "age=130")).await.unwrap();

        let html = body_text(response).await;
        assert!(html.starts_with("<form"));
        assert!(html.contains("Value cannot be more than 120"));
        assert_eq!(state.session.lock().await.revision(), 1);
    }

    #[tokio::test]
    async fn test_edit_applies_only_the_changed_input() {
        let (router, state) = app();
        let request = Request::post("/edit")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(TRIGGER_NAME, "age")
            .body(Body::from("name=&age=45"))
            .unwrap();
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(!html.contains("This field is required"));

        let session = state.session.lock().await;
        assert_eq!(session.revision(), 1);
        assert!(session.is_valid());
        assert_eq!(session.working()["age"], serde_json::json!(45));
    }

    #[tokio::test]
    async fn test_edit_without_trigger_header_takes_last_input() {
        let (router, state) = app();
        let response = router
            .oneshot(form_post("/edit", "name=&age=45"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let session = state.session.lock().await;
        assert_eq!(session.revision(), 1);
        assert!(!session.errors().has_error(&"name".parse().unwrap()));
    }

    #[test]
    fn test_triggering_input_selection() {
        let inputs: Inputs = vec![
            ("name".to_string(), "Ada".to_string()),
            ("age".to_string(), "45".to_string()),
        ];
        assert_eq!(triggering_input(&inputs, Some("name")), Some(("name", "Ada")));
        assert_eq!(triggering_input(&inputs, None), Some(("age", "45")));
        assert_eq!(triggering_input(&inputs, Some("salary")), None);
        assert_eq!(triggering_input(&Vec::new(), None), None);
    }

    #[tokio::test]
    async fn test_submit_commits_valid_form() {
        let (router, state) = app();
        let response = router
            .oneshot(form_post("/submit", "name=Ada&age=36"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let session = state.session.lock().await;
        assert_eq!(
            session.saved(),
            Some(&serde_json::json!({ "name": "Ada", "age": 36 }))
        );
    }
}
