use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use shared::{
    AuthError, DetectionError, HistoryEntry, HistoryRecord, LoginRequest, LoginResponse,
    PredictionResponse, SessionIdentity,
};
use wasm_bindgen_futures::spawn_local;

/// Uploads the image as the single `file` field of a multipart form.
pub async fn predict(url: String, file: GlooFile) -> Result<PredictionResponse, DetectionError> {
    let form_data = web_sys::FormData::new()
        .map_err(|e| DetectionError::Request(format!("{:?}", e)))?;
    form_data
        .append_with_blob("file", file.as_ref())
        .map_err(|e| DetectionError::Request(format!("{:?}", e)))?;

    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| DetectionError::Request(e.to_string()))?;

    log::info!("Submitting {} to {}", file.name(), url);
    let response = request.send().await.map_err(|e| {
        log::error!("Detection request failed: {}", e);
        DetectionError::Unreachable(e.to_string())
    })?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::warn!("Detection service answered {}: {}", status, body);
        return Err(DetectionError::Status { status, body });
    }

    let body = response
        .text()
        .await
        .map_err(|e| DetectionError::Decode(e.to_string()))?;
    serde_json::from_str::<PredictionResponse>(&body).map_err(|e| {
        log::error!("Unexpected detection payload: {}", body);
        DetectionError::Decode(e.to_string())
    })
}

/// Fire-and-forget append to the user's history. Failures are logged only.
pub fn record_history(url: String, record: HistoryRecord) {
    spawn_local(async move {
        let request = match Request::post(&url).json(&record) {
            Ok(request) => request,
            Err(e) => {
                log::warn!("Could not encode history entry: {}", e);
                return;
            }
        };

        match request.send().await {
            Ok(response) if response.ok() => {
                log::info!("History entry {} recorded", record.history_item.id);
            }
            Ok(response) => {
                log::warn!("History write rejected with status {}", response.status());
            }
            Err(e) => {
                log::warn!("History write failed: {}", e);
            }
        }
    });
}

pub async fn fetch_history(url: String) -> Result<Vec<HistoryEntry>, String> {
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(format!("Server error: {} - {}", status, body));
    }

    response
        .json::<Vec<HistoryEntry>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn login(url: String, credentials: LoginRequest) -> Result<SessionIdentity, AuthError> {
    let request = Request::post(&url)
        .json(&credentials)
        .map_err(|e| AuthError::Decode(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| AuthError::Unreachable(e.to_string()))?;

    let ok = response.ok();
    let body = response
        .json::<LoginResponse>()
        .await
        .map_err(|e| AuthError::Decode(e.to_string()))?;

    body.into_identity(ok)
}
