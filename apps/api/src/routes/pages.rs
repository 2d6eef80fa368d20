//! HTML page handlers. Every page view drains pending flash notices; most
//! also record themselves in the activity log.

use askama::Template;
use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::info;

use crate::errors::AppError;
use crate::session::flash::Notice;
use crate::session::models::Severity;
use crate::state::AppState;
use crate::upload::orchestrator::{
    clear_session, run_batch, BatchError, BatchSubmission, IncomingFile,
};
use crate::views::{CandidateRow, DashboardPage, IndexPage, ResultsPage, ScoringPage, UploadPage};

/// GET /
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    state
        .store
        .lock()
        .await
        .log("Visited landing page", Severity::Info);

    let page = IndexPage {
        notices: state.flash.take(),
        min_files: state.config.min_files,
        max_files: state.config.max_files,
    };
    Ok(Html(page.render()?))
}

/// GET /upload
pub async fn upload_form(State(state): State<AppState>) -> Result<Response, AppError> {
    state
        .store
        .lock()
        .await
        .log("Accessed upload page", Severity::Info);

    render_upload_form(&state, StatusCode::OK, None, String::new())
}

/// POST /upload
///
/// Multipart form: `job_description` text plus repeated `resumes` files.
/// Redirects to the dashboard once the batch ran; rejected submissions
/// re-render the form with the reason, including bodies that are not
/// valid multipart at all.
pub async fn upload_submit(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, AppError> {
    let multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            info!("Upload rejected before reading the body: {rejection}");
            return render_upload_form(
                &state,
                rejection.status(),
                Some(Notice::new(Severity::Error, rejection.body_text())),
                String::new(),
            );
        }
    };

    let submission = match read_submission(multipart).await {
        Ok(submission) => submission,
        Err(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            return render_upload_form(
                &state,
                StatusCode::PAYLOAD_TOO_LARGE,
                Some(Notice::new(
                    Severity::Error,
                    "File too large! Please upload smaller files.",
                )),
                String::new(),
            );
        }
        Err(e) => {
            info!("Upload body could not be read: {e}");
            return render_upload_form(
                &state,
                e.status(),
                Some(Notice::new(Severity::Error, e.body_text())),
                String::new(),
            );
        }
    };

    let job_description = submission.job_description.clone();
    let limits = state.config.batch_limits();

    let outcome = {
        let mut store = state.store.lock().await;
        run_batch(
            &mut store,
            &state.storage,
            state.extractor.as_ref(),
            limits,
            submission,
        )
        .await
    };

    match outcome {
        Ok(report) => {
            info!(
                "Batch scored against {} required skills: {}",
                report.required_skills.len(),
                report.required_skills.join(", ")
            );
            state.flash.extend(report.notices());
            Ok(Redirect::to("/dashboard").into_response())
        }
        Err(e) => {
            info!("Upload rejected: {e}");
            let status = match e {
                BatchError::Validation(_) => StatusCode::BAD_REQUEST,
                BatchError::NoSkillsFound => StatusCode::UNPROCESSABLE_ENTITY,
            };
            render_upload_form(
                &state,
                status,
                Some(Notice::new(Severity::Error, e.to_string())),
                job_description,
            )
        }
    }
}

/// GET /dashboard
pub async fn dashboard(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let mut store = state.store.lock().await;
    store.log("Viewed dashboard", Severity::Info);

    let stats = store.stats(state.config.min_files);
    let page = DashboardPage {
        notices: state.flash.take(),
        highest_score: format!("{:.1}", stats.highest_score),
        stats,
        total_resumes: store.documents().len(),
        job_description: store.job_description().to_string(),
        required_skills: store.required_skills().join(", "),
        activities: store.activities(),
    };
    Ok(Html(page.render()?))
}

/// GET /scoring
pub async fn scoring(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let mut store = state.store.lock().await;
    store.log("Viewed CV scoring results", Severity::Info);

    let page = ScoringPage {
        notices: state.flash.take(),
        rows: CandidateRow::from_ranked(&store.ranking()),
        job_description: store.job_description().to_string(),
        total_resumes: store.documents().len(),
    };
    Ok(Html(page.render()?))
}

/// GET /results
pub async fn results(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let mut store = state.store.lock().await;
    store.log("Viewed top 3 selected candidates", Severity::Info);

    let page = ResultsPage {
        notices: state.flash.take(),
        rows: CandidateRow::from_ranked(&store.top_candidates()),
        total_candidates: store.scores().len(),
    };
    Ok(Html(page.render()?))
}

/// GET /clear
pub async fn clear(State(state): State<AppState>) -> Redirect {
    {
        let mut store = state.store.lock().await;
        clear_session(&mut store, &state.storage).await;
    }
    state.flash.push(Notice::new(
        Severity::Success,
        "All data cleared successfully!",
    ));
    Redirect::to("/")
}

/// Unknown paths go back to the landing page.
pub async fn fallback() -> Redirect {
    Redirect::to("/")
}

fn render_upload_form(
    state: &AppState,
    status: StatusCode,
    notice: Option<Notice>,
    job_description: String,
) -> Result<Response, AppError> {
    let mut notices = state.flash.take();
    notices.extend(notice);

    let page = UploadPage {
        notices,
        min_files: state.config.min_files,
        max_files: state.config.max_files,
        job_description,
    };
    Ok((status, Html(page.render()?)).into_response())
}

async fn read_submission(mut multipart: Multipart) -> Result<BatchSubmission, MultipartError> {
    let mut submission = BatchSubmission::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "job_description" => submission.job_description = field.text().await?,
            "resumes" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                submission.files.push(IncomingFile { filename, bytes });
            }
            _ => {}
        }
    }

    Ok(submission)
}
