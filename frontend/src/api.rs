use gloo_net::http::Request;
use shared::{Analysis, AnalyzeRequest, AnalyzeResponse, SchemaVersion, parse_analysis};

use crate::state::AnalysisOutcome;

/// The report shape this build renders. Must match the server's
/// ANALYSIS_SCHEMA for the deployment.
pub const SCHEMA: SchemaVersion = SchemaVersion::Extended;

/// One analyze round trip. Every failure mode collapses into
/// `AnalysisOutcome::Failed` with a human-readable description.
pub async fn request_analysis(image: String) -> AnalysisOutcome {
    let body = AnalyzeRequest { image: Some(image) };

    let request = match Request::post("/api/analyze").json(&body) {
        Ok(request) => request,
        Err(e) => return AnalysisOutcome::Failed(format!("Failed to build request: {}", e)),
    };

    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => return AnalysisOutcome::Failed(format!("Network error: {}", e)),
    };

    if !response.ok() {
        return AnalysisOutcome::Failed(format!("Server error: {}", response.status()));
    }

    let analyze = match response.json::<AnalyzeResponse>().await {
        Ok(analyze) => analyze,
        Err(e) => return AnalysisOutcome::Failed(format!("Failed to parse response: {}", e)),
    };

    match parse_analysis(&analyze.content, analyze.is_snake_image, SCHEMA) {
        Ok(Analysis::Report(report)) => AnalysisOutcome::Report(report),
        Ok(Analysis::NotSnake(message)) => AnalysisOutcome::NotSnake(message),
        Err(e) => AnalysisOutcome::Failed(e.to_string()),
    }
}
