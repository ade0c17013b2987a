use actix_multipart::{Field, Multipart, MultipartError};
use actix_web::{web, HttpMessage, HttpRequest, HttpResponse, Responder};
use futures_util::TryStreamExt;
use log::{info, warn};
use serde_json::json;

use crate::web::errors::ApiError;
use crate::web::models::{ChatRequest, ChatResponse, ErrorDetail};
use crate::AppState;

const UPLOAD_FIELD: &str = "file";
const LOG_PREVIEW_CHARS: usize = 50;

// Root endpoint
pub async fn index(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": format!(
            "Welcome to {} API. See /docs for API documentation.",
            data.project_name
        )
    }))
}

// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "healthy" }))
}

pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(ErrorDetail {
        detail: "Not Found".to_string(),
    })
}

// Chat API endpoint
pub async fn chat(
    data: web::Data<AppState>,
    req: web::Json<ChatRequest>,
) -> Result<HttpResponse, ApiError> {
    let preview: String = req.message.chars().take(LOG_PREVIEW_CHARS).collect();
    info!(
        "Received chat request: {}... ({} history messages, {} options)",
        preview,
        req.history().len(),
        req.options.as_ref().map_or(0, |options| options.len())
    );

    let response = data
        .model
        .model
        .chat_reply(&req.message, req.history())
        .map_err(|e| ApiError::internal("Error processing request", e))?;

    Ok(HttpResponse::Ok().json(ChatResponse { response }))
}

// Image upload endpoint. Only the `file` part is used; guidance comes from
// its filename once the whole payload has been read.
pub async fn upload(
    req: HttpRequest,
    data: web::Data<AppState>,
    mut payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    if !is_multipart_form(&req) {
        warn!("Rejecting upload that is not multipart/form-data");
        return Err(ApiError::bad_request("No file uploaded"));
    }

    let mut field = loop {
        match payload.try_next().await {
            Ok(Some(field)) if field.content_disposition().get_name() == Some(UPLOAD_FIELD) => {
                break field
            }
            Ok(Some(mut other)) => drain(&mut other)
                .await
                .map_err(|e| ApiError::internal("Error processing image", e))?,
            Ok(None) => return Err(ApiError::bad_request("No file uploaded")),
            Err(e) => return Err(ApiError::internal("Error processing image", e)),
        }
    };

    let filename = field
        .content_disposition()
        .get_filename()
        .unwrap_or_default()
        .to_string();
    info!("Received image upload: {}", filename);

    let is_image = field
        .content_type()
        .map(|mime| mime.essence_str().starts_with("image/"))
        .unwrap_or(false);
    if !is_image {
        return Err(ApiError::bad_request("File must be an image"));
    }
    if filename.is_empty() {
        return Err(ApiError::bad_request("File must have a filename"));
    }

    let mut content = Vec::new();
    while let Some(chunk) = field
        .try_next()
        .await
        .map_err(|e| ApiError::internal("Error processing image", e))?
    {
        if content.len() + chunk.len() > data.max_upload_bytes {
            warn!("Rejecting {}: larger than {} bytes", filename, data.max_upload_bytes);
            return Err(ApiError::bad_request("File is too large"));
        }
        content.extend_from_slice(&chunk);
    }
    info!("Read {} bytes from {}", content.len(), filename);

    let response = data
        .model
        .model
        .analyze_image(&content, &filename)
        .map_err(|e| ApiError::internal("Error processing image", e))?;

    Ok(HttpResponse::Ok().json(ChatResponse { response }))
}

// A boundary parameter is required for the part stream to be parsed at all.
fn is_multipart_form(req: &HttpRequest) -> bool {
    match req.mime_type() {
        Ok(Some(mime)) => {
            mime.essence_str() == "multipart/form-data" && mime.get_param("boundary").is_some()
        }
        _ => false,
    }
}

async fn drain(field: &mut Field) -> Result<(), MultipartError> {
    while field.try_next().await?.is_some() {}
    Ok(())
}
