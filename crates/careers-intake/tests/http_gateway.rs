//! Exercises the multipart HTTP gateway against a local intake receiver.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use url::Url;

use careers_intake::workflows::careers::applications::{
    ApplicationGateway, Endpoint, FileAttachment, FormSettings, GatewayError,
    GeneralApplicationForm, HttpApplicationGateway, JobApplicationForm, OutcomePolicy,
    SubmissionState,
};
use careers_intake::workflows::careers::JobCatalog;

#[derive(Debug, Clone)]
struct ReceivedField {
    name: String,
    file_name: Option<String>,
    content_type: Option<String>,
    data: Vec<u8>,
}

struct Receiver {
    status: StatusCode,
    delay: Duration,
    requests: Mutex<Vec<(String, Vec<ReceivedField>)>>,
}

impl Receiver {
    fn requests(&self) -> Vec<(String, Vec<ReceivedField>)> {
        self.requests.lock().expect("receiver lock").clone()
    }
}

async fn receive(
    path: &'static str,
    receiver: Arc<Receiver>,
    mut multipart: Multipart,
) -> StatusCode {
    let mut fields = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.map(|bytes| bytes.to_vec()).unwrap_or_default();
        fields.push(ReceivedField {
            name,
            file_name,
            content_type,
            data,
        });
    }
    receiver
        .requests
        .lock()
        .expect("receiver lock")
        .push((path.to_string(), fields));

    tokio::time::sleep(receiver.delay).await;
    receiver.status
}

async fn spawn_receiver(status: StatusCode, delay: Duration) -> (Url, Arc<Receiver>) {
    let receiver = Arc::new(Receiver {
        status,
        delay,
        requests: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route(
            "/api/apply-job",
            post(|State(rx): State<Arc<Receiver>>, multipart: Multipart| async move {
                receive("/api/apply-job", rx, multipart).await
            }),
        )
        .route(
            "/api/general-application",
            post(|State(rx): State<Arc<Receiver>>, multipart: Multipart| async move {
                receive("/api/general-application", rx, multipart).await
            }),
        )
        .with_state(receiver.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind receiver");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("receiver runs");
    });

    let base = Url::parse(&format!("http://{addr}/api/")).expect("valid url");
    (base, receiver)
}

fn filled_job_form(settings: FormSettings) -> JobApplicationForm {
    let mut form = JobApplicationForm::new(settings);
    let draft = form.draft_mut();
    draft.set_name("Jane Doe");
    draft.set_email("jane@example.com");
    draft.set_message("Happy to relocate.");
    draft.select_attachment(FileAttachment::new("resume.pdf", b"%PDF-1.7".to_vec()).unwrap());
    form
}

#[tokio::test]
async fn apply_job_posts_multipart_fields() {
    let (base, receiver) = spawn_receiver(StatusCode::OK, Duration::ZERO).await;
    let gateway = HttpApplicationGateway::new(base, Duration::from_secs(5)).unwrap();
    let job = JobCatalog::standard().find("3").cloned().unwrap();

    let mut form = filled_job_form(FormSettings::default());
    let state = form.submit(&job, &gateway).await.unwrap();
    assert_eq!(state, &SubmissionState::Submitted);
    assert_eq!(form.last_receipt().map(|receipt| receipt.status), Some(200));

    let requests = receiver.requests();
    assert_eq!(requests.len(), 1);
    let (path, fields) = &requests[0];
    assert_eq!(path, "/api/apply-job");

    let names: Vec<&str> = fields.iter().map(|field| field.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["name", "email", "message", "jobTitle", "jobLocation", "jobType", "resume"]
    );
    assert_eq!(fields[3].data, b"DevOps Engineer");
    assert_eq!(fields[2].data, b"Happy to relocate.");

    let resume = &fields[6];
    assert_eq!(resume.file_name.as_deref(), Some("resume.pdf"));
    assert_eq!(resume.content_type.as_deref(), Some("application/pdf"));
    assert_eq!(resume.data, b"%PDF-1.7");
}

#[tokio::test]
async fn general_application_posts_without_resume() {
    let (base, receiver) = spawn_receiver(StatusCode::CREATED, Duration::ZERO).await;
    let gateway = HttpApplicationGateway::new(base, Duration::from_secs(5)).unwrap();

    let mut form = GeneralApplicationForm::new(FormSettings::default());
    form.draft_mut().set_name("Ali Raza");
    form.draft_mut().set_email("ali@example.com");
    form.submit(&gateway).await.unwrap();

    let requests = receiver.requests();
    let (path, fields) = &requests[0];
    assert_eq!(path, "/api/general-application");
    assert_eq!(fields.len(), 2);
    assert!(fields.iter().all(|field| field.file_name.is_none()));
}

#[tokio::test]
async fn server_errors_are_acknowledged_by_default() {
    let (base, _) = spawn_receiver(StatusCode::INTERNAL_SERVER_ERROR, Duration::ZERO).await;
    let gateway = HttpApplicationGateway::new(base, Duration::from_secs(5)).unwrap();
    let job = JobCatalog::standard().find("3").cloned().unwrap();

    let mut form = filled_job_form(FormSettings::default());
    let state = form.submit(&job, &gateway).await.unwrap();
    assert_eq!(state, &SubmissionState::Submitted);
}

#[tokio::test]
async fn server_errors_surface_when_configured() {
    let (base, _) = spawn_receiver(StatusCode::BAD_GATEWAY, Duration::ZERO).await;
    let gateway = HttpApplicationGateway::new(base, Duration::from_secs(5)).unwrap();
    let job = JobCatalog::standard().find("3").cloned().unwrap();

    let settings = FormSettings {
        outcome_policy: OutcomePolicy::SurfaceFailures,
        ..FormSettings::default()
    };
    let mut form = filled_job_form(settings);
    let state = form.submit(&job, &gateway).await.unwrap();
    assert_eq!(
        state,
        &SubmissionState::Failed {
            reason: "the server responded with status 502".to_string()
        }
    );
    assert!(form.is_submit_enabled());
}

#[tokio::test]
async fn slow_intake_times_out() {
    let (base, _) = spawn_receiver(StatusCode::OK, Duration::from_secs(5)).await;
    let gateway = HttpApplicationGateway::new(base, Duration::from_millis(200)).unwrap();
    let job = JobCatalog::standard().find("1").cloned().unwrap();

    let mut form = filled_job_form(FormSettings::default());
    let pending = form.begin_submit(&job).unwrap();
    let result = gateway.deliver(pending.submission).await;
    assert_eq!(
        result.as_ref().unwrap_err(),
        &GatewayError::Timeout {
            endpoint: Endpoint::ApplyJob
        }
    );

    let state = form.complete_submit(pending.attempt, result).unwrap();
    assert_eq!(state, &SubmissionState::Submitted);
}

#[tokio::test]
async fn unreachable_intake_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let base = Url::parse(&format!("http://{addr}/api")).unwrap();
    let gateway = HttpApplicationGateway::new(base, Duration::from_secs(2)).unwrap();
    let job = JobCatalog::standard().find("1").cloned().unwrap();

    let mut form = filled_job_form(FormSettings::default());
    let pending = form.begin_submit(&job).unwrap();
    let result = gateway.deliver(pending.submission).await;
    assert!(matches!(
        result,
        Err(GatewayError::Transport {
            endpoint: Endpoint::ApplyJob,
            ..
        })
    ));
}

#[test]
fn endpoint_urls_tolerate_trailing_slashes() {
    let with_slash = HttpApplicationGateway::new(
        Url::parse("http://localhost:5000/api/").unwrap(),
        Duration::from_secs(1),
    )
    .unwrap();
    let without = HttpApplicationGateway::new(
        Url::parse("http://localhost:5000/api").unwrap(),
        Duration::from_secs(1),
    )
    .unwrap();

    for gateway in [with_slash, without] {
        assert_eq!(
            gateway.endpoint_url(Endpoint::GeneralApplication).unwrap().as_str(),
            "http://localhost:5000/api/general-application"
        );
    }
}
