use resume_coach::core::{AnalysisService, Endpoint, ServiceClient, ServiceConfig};
use resume_coach::{
    connect, AnalysisError, AnalysisInput, AnalysisStatus, ResumeFile, TargetRole,
};
use serde_json::json;
use wiremock::matchers::{body_json, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_body() -> serde_json::Value {
    json!({
        "summary": "ok",
        "skills_found": [],
        "skills_missing": [],
        "score": 50,
        "recommendations": [],
        "error": "ignored"
    })
}

fn client_for(server: &MockServer) -> ServiceClient {
    ServiceClient::new(&ServiceConfig::new(server.uri())).unwrap()
}

#[tokio::test]
async fn test_text_endpoint_sends_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze_resume"))
        .and(body_json(json!({"text": "SQL and Tableau", "target_role": "Data Analyst"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "summary": "2 of 9 skills found",
            "skills_found": ["sql", "tableau"],
            "skills_missing": ["excel", "power bi"],
            "score": 22
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .analyze(
            Endpoint::RuleBased,
            &AnalysisInput::Text("SQL and Tableau".into()),
            TargetRole::DataAnalyst,
        )
        .await
        .unwrap();

    assert_eq!(result.skills_found, vec!["sql", "tableau"]);
    assert_eq!(result.skills_missing, vec!["excel", "power bi"]);
    assert_eq!(result.score, 22.0);
    assert!(result.recommendations.is_empty());
}

#[tokio::test]
async fn test_file_endpoint_sends_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload_resume_ai"))
        .and(header_regex("content-type", "^multipart/form-data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "summary": "Strong portfolio",
            "skills_found": ["figma"],
            "skills_missing": [],
            "score": 81,
            "recommendations": ["Add case studies"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let file = ResumeFile::new("jane.pdf", b"%PDF-1.7 resume".to_vec());
    let result = client_for(&server)
        .analyze(Endpoint::AiFile, &AnalysisInput::File(file), TargetRole::UiUxDesigner)
        .await
        .unwrap();
    assert_eq!(result.recommendations, vec!["Add case studies"]);

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains(r#"name="file"; filename="jane.pdf""#));
    assert!(body.contains("application/pdf"));
    assert!(body.contains("%PDF-1.7 resume"));
    assert!(body.contains(r#"name="target_role""#));
    assert!(body.contains("UI/UX Designer"));
}

#[tokio::test]
async fn test_non_success_status_maps_to_service_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze_resume_ai"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .analyze(
            Endpoint::AiText,
            &AnalysisInput::Text("resume".into()),
            TargetRole::default(),
        )
        .await
        .unwrap_err();

    assert_eq!(err, AnalysisError::Service { status: 500 });
    assert_eq!(err.user_message(), "Server error (status: 500)");
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze_resume_ai"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .analyze(
            Endpoint::AiText,
            &AnalysisInput::Text("resume".into()),
            TargetRole::default(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AnalysisError::Decode(_)));
    assert!(!err.user_message().is_empty());
}

#[tokio::test]
async fn test_unreachable_service_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = ServiceClient::new(&ServiceConfig::new(format!("http://127.0.0.1:{}", port)))
        .unwrap();
    let err = client
        .analyze(
            Endpoint::RuleBased,
            &AnalysisInput::Text("resume".into()),
            TargetRole::default(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AnalysisError::Transport(_)));
}

#[tokio::test]
async fn test_mismatched_input_is_rejected_locally() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = client
        .analyze(
            Endpoint::AiText,
            &AnalysisInput::File(ResumeFile::new("cv.pdf", vec![1, 2, 3])),
            TargetRole::default(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AnalysisError::Validation(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hello"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "KangHire AI backend is running (Groq)!"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = ServiceClient::new(&ServiceConfig::new(format!("{}/", server.uri()))).unwrap();
    assert_eq!(client.base_url(), server.uri());

    let hello = client.hello().await.unwrap();
    assert_eq!(hello.message, "KangHire AI backend is running (Groq)!");
}

#[tokio::test]
async fn test_controller_over_http_keeps_endpoint_asymmetry() {
    let server = MockServer::start().await;
    for route in ["/analyze_resume", "/analyze_resume_ai", "/upload_resume_ai"] {
        Mock::given(method("POST"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_body()))
            .mount(&server)
            .await;
    }

    let controller = connect(&ServiceConfig::new(server.uri())).unwrap();
    let role = TargetRole::SoftwareDeveloper;

    controller.submit_text_rule_based("Rust", role).await.unwrap();
    assert_eq!(controller.state().await.status(), AnalysisStatus::Success);

    controller.submit_text_ai("Rust", role).await.unwrap_err();
    let state = controller.state().await;
    assert_eq!(state.status(), AnalysisStatus::Error);
    assert_eq!(state.error_message(), Some("ignored"));

    let file = ResumeFile::new("cv.docx", b"PK".to_vec());
    controller.submit_file_ai(Some(file), role).await.unwrap_err();
    assert_eq!(controller.state().await.error_message(), Some("ignored"));
}
