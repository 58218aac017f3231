use crate::error::ApiError;
use crate::store::UrlStore;
use actix_web::error::JsonPayloadError;
use actix_web::{get, http::header, post, web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Serialize, Deserialize)]
pub struct StoreUrlRequest {
    #[serde(default)]
    pub url: String,
}

#[derive(Serialize, Deserialize)]
pub struct StoreUrlResponse {
    pub key: String,
}

#[post("/")]
async fn store_url(
    body: web::Json<StoreUrlRequest>,
    urls: web::Data<UrlStore>,
) -> Result<HttpResponse, ApiError> {
    let url = body.into_inner().url;
    // Anything stored must fit in a Location header later.
    header::HeaderValue::from_bytes(url.as_bytes())
        .map_err(|err| ApiError::BadRequest(format!("url unusable as Location: {err}")))?;

    let key = urls.add(url);
    debug!(%key, stored = urls.len(), "stored url");
    Ok(HttpResponse::Created().json(StoreUrlResponse { key }))
}

#[get("/{key}")]
async fn retrieve_url(
    path: web::Path<String>,
    urls: web::Data<UrlStore>,
) -> Result<HttpResponse, ApiError> {
    let key = path.into_inner();
    let url = urls.get(&key).ok_or_else(|| ApiError::NotFound(key.clone()))?;
    debug!(%key, %url, "redirecting");
    Ok(HttpResponse::MovedPermanently()
        .insert_header((header::LOCATION, url))
        .finish())
}

fn reject_payload(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(err.to_string()).into()
}

/// Mounts the shortener endpoints. The `UrlStore` itself is expected as
/// `web::Data` app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .content_type_required(false)
            .error_handler(reject_payload),
    )
    .service(store_url)
    .service(retrieve_url);
}
