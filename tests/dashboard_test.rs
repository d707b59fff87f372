//! End-to-end tests for [`Dashboard`]: trigger → store → rendered output.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::oneshot;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use evalboard::{
    Config, Dashboard, ErrorPolicy, EvalboardError, ExplanationCatalog, Format, Layout, Phase,
    Result, ResultsByModel, ResultsSource, TriggerOutcome,
};

const SINGLE_CLASS_BODY: &str = r#"{"ModelA": {"accuracy": 0.8, "report": {"0": {"precision":0.5,"recall":0.6,"f1-score":0.55,"support":10}, "accuracy": 0.8}}}"#;

// =============================================================================
// Helpers
// =============================================================================

fn config_for(server: &MockServer, layout: Layout, on_error: ErrorPolicy) -> Config {
    let mut config = Config::default();
    config.endpoint.url = format!("{}/api/models", server.uri());
    config.display.layout = layout;
    config.display.on_error = on_error;
    config
}

async fn serve(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path("/api/models"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body.to_string()))
        .mount(server)
        .await;
}

/// Source whose responses are released one by one by the test.
struct Scripted {
    pending: Mutex<VecDeque<oneshot::Receiver<Result<ResultsByModel>>>>,
    calls: AtomicUsize,
}

impl Scripted {
    fn new(count: usize) -> (Arc<Self>, Vec<oneshot::Sender<Result<ResultsByModel>>>) {
        let (senders, receivers): (Vec<_>, VecDeque<_>) =
            (0..count).map(|_| oneshot::channel()).unzip();
        let source = Arc::new(Self {
            pending: Mutex::new(receivers),
            calls: AtomicUsize::new(0),
        });
        (source, senders)
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn wait_for_calls(&self, n: usize) {
        while self.calls() < n {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl ResultsSource for Scripted {
    async fn fetch_model_results(&self) -> Result<ResultsByModel> {
        let rx = self
            .pending
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted response left");
        self.calls.fetch_add(1, Ordering::SeqCst);
        rx.await
            .unwrap_or_else(|_| Err(EvalboardError::Network("script dropped".into())))
    }
}

fn results(body: &str) -> ResultsByModel {
    ResultsByModel::from_json(body).unwrap()
}

// =============================================================================
// Rendering properties
// =============================================================================

#[tokio::test]
async fn one_section_per_model_in_response_order() {
    let server = MockServer::start().await;
    serve(
        &server,
        200,
        r#"{
            "XGBoost": {"accuracy": 0.88, "report": {}},
            "Logistic Regression": {"accuracy": 0.86, "report": {}},
            "Support Vector Machine": {"accuracy": 0.87, "report": {}}
        }"#,
    )
    .await;

    let dashboard =
        Dashboard::from_config(&config_for(&server, Layout::Plain, ErrorPolicy::Clear)).unwrap();
    assert_eq!(dashboard.trigger().await, TriggerOutcome::Succeeded);

    let view = dashboard.view();
    let models: Vec<_> = view.sections.iter().map(|s| s.model.as_str()).collect();
    assert_eq!(
        models,
        vec!["XGBoost", "Logistic Regression", "Support Vector Machine"]
    );
}

#[tokio::test]
async fn scalar_report_entry_is_not_a_row() {
    let server = MockServer::start().await;
    serve(&server, 200, SINGLE_CLASS_BODY).await;

    let dashboard =
        Dashboard::from_config(&config_for(&server, Layout::Plain, ErrorPolicy::Clear)).unwrap();
    dashboard.trigger().await;

    let view = dashboard.view();
    assert_eq!(view.sections.len(), 1);
    assert_eq!(view.sections[0].rows.len(), 1);
    assert_eq!(view.sections[0].accuracy_text(), "80.00%");

    let text = dashboard.render(Format::Text);
    assert!(text.contains("Accuracy: 80.00%"));
    let html = dashboard.render(Format::Html);
    assert_eq!(html.matches("<tr><td>").count(), 1);
}

#[tokio::test]
async fn http_500_shows_banner_and_no_sections() {
    let server = MockServer::start().await;
    serve(&server, 500, "internal error").await;

    let dashboard =
        Dashboard::from_config(&config_for(&server, Layout::Rich, ErrorPolicy::Clear)).unwrap();
    assert_eq!(dashboard.trigger().await, TriggerOutcome::Failed);

    let view = dashboard.view();
    assert_eq!(
        view.error_banner.as_deref(),
        Some("Error: HTTP error! status: 500")
    );
    assert!(view.sections.is_empty());
    assert_eq!(view.button.label, "Calculate");
    assert!(view.button.enabled);
}

#[tokio::test]
async fn unknown_model_gets_fallback_explanation() {
    let server = MockServer::start().await;
    serve(&server, 200, SINGLE_CLASS_BODY).await;

    let dashboard =
        Dashboard::from_config(&config_for(&server, Layout::Rich, ErrorPolicy::Clear)).unwrap();
    dashboard.trigger().await;

    assert_eq!(
        dashboard.view().sections[0].explanation.as_deref(),
        Some("No explanation available for this model.")
    );
    assert!(
        dashboard
            .render(Format::Html)
            .contains("<p>No explanation available for this model.</p>")
    );
}

#[tokio::test]
async fn configured_explanation_is_used() {
    let server = MockServer::start().await;
    serve(&server, 200, SINGLE_CLASS_BODY).await;

    let mut config = config_for(&server, Layout::Rich, ErrorPolicy::Clear);
    config.explanations.push(evalboard::ModelExplanation::new(
        "ModelA",
        "ModelA is the in-house baseline.",
    ));
    let dashboard = Dashboard::from_config(&config).unwrap();
    dashboard.trigger().await;

    assert_eq!(
        dashboard.view().sections[0].explanation.as_deref(),
        Some("ModelA is the in-house baseline.")
    );
}

#[tokio::test]
async fn repeated_trigger_with_same_response_renders_identically() {
    let server = MockServer::start().await;
    serve(&server, 200, SINGLE_CLASS_BODY).await;

    let dashboard =
        Dashboard::from_config(&config_for(&server, Layout::Rich, ErrorPolicy::Clear)).unwrap();

    dashboard.trigger().await;
    let first = (dashboard.render(Format::Text), dashboard.render(Format::Html));
    dashboard.trigger().await;
    let second = (dashboard.render(Format::Text), dashboard.render(Format::Html));

    assert_eq!(first, second);
    assert_eq!(dashboard.snapshot().generation(), 2);
}

// =============================================================================
// Error policy
// =============================================================================

#[tokio::test]
async fn failed_refetch_clears_results_by_default() {
    let (source, mut senders) = Scripted::new(2);
    let dashboard = Dashboard::new(source, ErrorPolicy::Clear);

    senders.remove(0).send(Ok(results(SINGLE_CLASS_BODY))).unwrap();
    assert_eq!(dashboard.trigger().await, TriggerOutcome::Succeeded);

    senders
        .remove(0)
        .send(Err(EvalboardError::Network("connection refused".into())))
        .unwrap();
    assert_eq!(dashboard.trigger().await, TriggerOutcome::Failed);

    let view = dashboard.view();
    assert_eq!(
        view.error_banner.as_deref(),
        Some("Error: network error: connection refused")
    );
    assert!(view.sections.is_empty());
}

#[tokio::test]
async fn keep_policy_shows_previous_results_under_banner() {
    let (source, mut senders) = Scripted::new(2);
    let dashboard = Dashboard::new(source, ErrorPolicy::Keep);

    senders.remove(0).send(Ok(results(SINGLE_CLASS_BODY))).unwrap();
    dashboard.trigger().await;
    senders
        .remove(0)
        .send(Err(EvalboardError::Http { status: 502 }))
        .unwrap();
    dashboard.trigger().await;

    let view = dashboard.view();
    assert!(view.error_banner.is_some());
    assert_eq!(view.sections.len(), 1);
}

// =============================================================================
// Overlapping fetches
// =============================================================================

#[tokio::test]
async fn button_is_disabled_while_in_flight_and_second_trigger_is_busy() {
    let (source, mut senders) = Scripted::new(1);
    let dashboard = Dashboard::new(source.clone(), ErrorPolicy::Clear).with_layout(Layout::Plain);

    let background = dashboard.clone();
    let first = tokio::spawn(async move { background.trigger().await });
    source.wait_for_calls(1).await;

    let view = dashboard.view();
    assert_eq!(view.button.label, "Calculating...");
    assert!(!view.button.enabled);
    assert_eq!(dashboard.snapshot().phase(), Phase::Loading);

    assert_eq!(dashboard.trigger().await, TriggerOutcome::Busy);
    assert_eq!(source.calls(), 1);

    senders.remove(0).send(Ok(results(SINGLE_CLASS_BODY))).unwrap();
    assert_eq!(first.await.unwrap(), TriggerOutcome::Succeeded);
    assert_eq!(dashboard.view().button.label, "Calculate");
}

#[tokio::test]
async fn late_response_from_superseded_fetch_is_discarded() {
    let (source, mut senders) = Scripted::new(2);
    let dashboard = Dashboard::new(source.clone(), ErrorPolicy::Clear)
        .with_catalog(ExplanationCatalog::empty());

    let d1 = dashboard.clone();
    let older = tokio::spawn(async move { d1.refresh().await });
    source.wait_for_calls(1).await;

    let d2 = dashboard.clone();
    let newer = tokio::spawn(async move { d2.refresh().await });
    source.wait_for_calls(2).await;

    let tx_older = senders.remove(0);
    let tx_newer = senders.remove(0);

    tx_newer
        .send(Ok(results(r#"{"Newer": {"accuracy": 0.9, "report": {}}}"#)))
        .unwrap();
    assert_eq!(newer.await.unwrap(), TriggerOutcome::Succeeded);

    tx_older
        .send(Ok(results(r#"{"Older": {"accuracy": 0.1, "report": {}}}"#)))
        .unwrap();
    assert_eq!(older.await.unwrap(), TriggerOutcome::Stale);

    let view = dashboard.view();
    assert_eq!(view.sections.len(), 1);
    assert_eq!(view.sections[0].model, "Newer");
    assert!(!dashboard.snapshot().is_loading());
}

#[tokio::test]
async fn stale_error_does_not_override_newer_success() {
    let (source, mut senders) = Scripted::new(2);
    let dashboard = Dashboard::new(source.clone(), ErrorPolicy::Clear);

    let d1 = dashboard.clone();
    let older = tokio::spawn(async move { d1.refresh().await });
    source.wait_for_calls(1).await;
    let d2 = dashboard.clone();
    let newer = tokio::spawn(async move { d2.refresh().await });
    source.wait_for_calls(2).await;

    let tx_older = senders.remove(0);
    senders.remove(0).send(Ok(results(SINGLE_CLASS_BODY))).unwrap();
    newer.await.unwrap();
    tx_older
        .send(Err(EvalboardError::Http { status: 500 }))
        .unwrap();
    assert_eq!(older.await.unwrap(), TriggerOutcome::Stale);

    assert!(dashboard.view().error_banner.is_none());
    assert_eq!(dashboard.snapshot().phase(), Phase::Success);
}

#[tokio::test]
async fn dropping_in_flight_trigger_releases_loading() {
    let (source, _senders) = Scripted::new(1);
    let dashboard = Dashboard::new(source.clone(), ErrorPolicy::Clear);

    let background = dashboard.clone();
    let handle = tokio::spawn(async move { background.trigger().await });
    source.wait_for_calls(1).await;
    assert!(dashboard.snapshot().is_loading());

    handle.abort();
    assert!(handle.await.unwrap_err().is_cancelled());

    let snapshot = dashboard.snapshot();
    assert!(!snapshot.is_loading());
    assert_eq!(snapshot.phase(), Phase::Idle);
    assert_eq!(dashboard.view().button.label, "Calculate");
}
