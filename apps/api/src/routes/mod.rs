pub mod api;
pub mod health;
pub mod pages;

use axum::{extract::DefaultBodyLimit, routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // HTML pages
        .route("/", get(pages::home))
        .route(
            "/upload",
            get(pages::upload_form).post(pages::upload_submit),
        )
        .route("/dashboard", get(pages::dashboard))
        .route("/scoring", get(pages::scoring))
        .route("/results", get(pages::results))
        .route("/clear", get(pages::clear))
        // JSON mirrors
        .route("/api/stats", get(api::stats))
        .route("/api/recent-activities", get(api::recent_activities))
        .route("/api/scoring-data", get(api::scoring_data))
        .route("/api/results-data", get(api::results_data))
        .fallback(pages::fallback)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tempfile::TempDir;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::extract::testing::PlainTextExtractor;

    const BOUNDARY: &str = "ranker-test-boundary";
    const REFERENCE_JD: &str =
        "We need Python, SQL, and AWS experience, with strong communication skills";

    fn test_state(dir: &TempDir, max_upload_bytes: usize) -> AppState {
        let config = Config {
            upload_dir: dir.path().join("uploads"),
            max_upload_bytes,
            ..Config::default()
        };
        AppState::new(config, Arc::new(PlainTextExtractor))
    }

    fn upload_request(job_description: &str, files: &[(String, String)]) -> Request<Body> {
        let mut body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"job_description\"\r\n\r\n{job_description}\r\n"
        );
        for (name, content) in files {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"resumes\"; filename=\"{name}\"\r\nContent-Type: application/pdf\r\n\r\n{content}\r\n"
            ));
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));

        Request::builder()
            .method("POST")
            .uri("/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn resumes(count: usize) -> Vec<(String, String)> {
        (0..count)
            .map(|i| {
                let text = if i == 0 {
                    "Python, SQL and AWS. Strong communication."
                } else {
                    "Python scripting"
                };
                (format!("candidate{i}.pdf"), text.to_string())
            })
            .collect()
    }

    async fn send(state: &AppState, request: Request<Body>) -> Response {
        build_router(state.clone()).oneshot(request).await.unwrap()
    }

    async fn get(state: &AppState, uri: &str) -> Response {
        send(state, Request::get(uri).body(Body::empty()).unwrap()).await
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn get_json(state: &AppState, uri: &str) -> Value {
        let response = get(state, uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        serde_json::from_str(&body_text(response).await).unwrap()
    }

    fn location(response: &Response) -> &str {
        response.headers()[header::LOCATION].to_str().unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir, 1024 * 1024);
        let json = get_json(&state, "/health").await;
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_successful_batch_populates_views() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir, 1024 * 1024);

        let response = send(&state, upload_request(REFERENCE_JD, &resumes(10))).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/dashboard");

        let stats = get_json(&state, "/api/stats").await;
        assert_eq!(stats["total_uploaded"], 10);
        assert_eq!(stats["total_selected"], 3);
        assert_eq!(stats["highest_score"], 100.0);

        let scoring = get_json(&state, "/api/scoring-data").await;
        let rows = scoring["results"].as_array().unwrap();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0]["candidate_name"], "candidate0.pdf");
        assert_eq!(rows[0]["match_level"], "High");
        assert_eq!(rows[1]["score"], 25.0);
        assert_eq!(rows[1]["matched_skills"], serde_json::json!(["python"]));

        let results = get_json(&state, "/api/results-data").await;
        assert_eq!(results["results"].as_array().unwrap().len(), 3);
        assert_eq!(results["results"][0]["final_score"], 100.0);
        assert_eq!(results["total_uploaded"], 10);
        assert_eq!(results["top_3_selected"], 3);

        let dashboard = get(&state, "/dashboard").await;
        assert_eq!(dashboard.status(), StatusCode::OK);
        let html = body_text(dashboard).await;
        assert!(html.contains("Successfully processed 10 resume(s)!"));
        assert!(html.contains("python, sql, aws, communication"));

        // Flash notices are shown once.
        let html = body_text(get(&state, "/scoring").await).await;
        assert!(!html.contains("Successfully processed"));
        assert!(html.contains("candidate9.pdf"));
    }

    #[tokio::test]
    async fn test_too_few_files_rerenders_form() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir, 1024 * 1024);

        let response = send(&state, upload_request(REFERENCE_JD, &resumes(9))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = body_text(response).await;
        assert!(html.contains("Minimum 10 resumes required. You selected only 9 files."));
        assert!(html.contains("strong communication skills"));

        let stats = get_json(&state, "/api/stats").await;
        assert_eq!(stats["total_uploaded"], 0);
    }

    #[tokio::test]
    async fn test_too_many_files_rerenders_form() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir, 1024 * 1024);

        let response = send(&state, upload_request(REFERENCE_JD, &resumes(21))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response)
            .await
            .contains("Maximum 20 files allowed. You selected 21 files."));
    }

    #[tokio::test]
    async fn test_no_skills_rerenders_form() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir, 1024 * 1024);

        let response = send(
            &state,
            upload_request("Friendly barista wanted", &resumes(10)),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body_text(response)
            .await
            .contains("No recognizable skills found in job description."));
    }

    #[tokio::test]
    async fn test_oversized_upload_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir, 1024);

        let big = vec![("huge.pdf".to_string(), "python ".repeat(4096))];
        let response = send(&state, upload_request(REFERENCE_JD, &big)).await;
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert!(body_text(response).await.contains("File too large!"));
    }

    #[tokio::test]
    async fn test_non_multipart_post_rerenders_form() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir, 1024 * 1024);

        let request = Request::post("/upload")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("job_description=python"))
            .unwrap();
        let response = send(&state, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));

        let body = body_text(response).await;
        assert!(body.contains("action=\"/upload\""));
        assert!(body.contains("flash-error"));
    }

    #[tokio::test]
    async fn test_truncated_multipart_rerenders_form() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir, 1024 * 1024);

        let body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"job_description\"\r\n\r\npython"
        );
        let request = Request::post("/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();
        let response = send(&state, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_text(response).await;
        assert!(body.contains("action=\"/upload\""));
        assert!(body.contains("flash-error"));

        let stats = get_json(&state, "/api/stats").await;
        assert_eq!(stats["total_uploaded"], 0);
    }

    #[tokio::test]
    async fn test_clear_twice_leaves_same_empty_state() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir, 1024 * 1024);
        send(&state, upload_request(REFERENCE_JD, &resumes(10))).await;

        let mut snapshots = Vec::new();
        for _ in 0..2 {
            let response = get(&state, "/clear").await;
            assert_eq!(response.status(), StatusCode::SEE_OTHER);
            assert_eq!(location(&response), "/");

            let stats = get_json(&state, "/api/stats").await;
            let activities = get_json(&state, "/api/recent-activities").await;
            let messages: Vec<String> = activities["activities"]
                .as_array()
                .unwrap()
                .iter()
                .map(|a| a["message"].as_str().unwrap().to_string())
                .collect();
            snapshots.push((stats, messages));
        }

        assert_eq!(snapshots[0], snapshots[1]);
        assert_eq!(snapshots[1].0["total_uploaded"], 0);
        assert_eq!(snapshots[1].1, vec!["All data cleared and system reset"]);
    }

    #[tokio::test]
    async fn test_page_views_are_logged_but_api_reads_are_not() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir, 1024 * 1024);

        assert_eq!(get(&state, "/").await.status(), StatusCode::OK);
        get(&state, "/api/stats").await;
        assert_eq!(get(&state, "/upload").await.status(), StatusCode::OK);

        let activities = get_json(&state, "/api/recent-activities").await;
        let entries = activities["activities"].as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["message"], "Accessed upload page");
        assert_eq!(entries[1]["message"], "Visited landing page");
        assert_eq!(entries[1]["type"], "info");
    }

    #[tokio::test]
    async fn test_unknown_route_redirects_home() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir, 1024 * 1024);
        let response = get(&state, "/no/such/page").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");
    }
}
