use gloo_file::{Blob, File as GlooFile};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use shared::{ApiConfig, DetectionResult, MediaKind, ResultEnvelope, VideoFrames};
use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("failed to build request: {0}")]
    Build(gloo_net::Error),
    #[error("network error: {0}")]
    Network(gloo_net::Error),
    #[error("server error: {status} - {body}")]
    Status { status: u16, body: String },
    #[error("failed to parse response: {0}")]
    Decode(gloo_net::Error),
}

/// Thin wrapper around the detection API. Stateless apart from its config.
#[derive(Clone, PartialEq)]
pub struct DetectionClient {
    config: ApiConfig,
}

impl DetectionClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub async fn upload_image(
        &self,
        file: &GlooFile,
    ) -> Result<ResultEnvelope<DetectionResult>, UploadError> {
        self.post_media(MediaKind::Image, file).await
    }

    pub async fn upload_video(
        &self,
        file: &GlooFile,
    ) -> Result<ResultEnvelope<VideoFrames>, UploadError> {
        self.post_media(MediaKind::Video, file).await
    }

    async fn post_media<T: DeserializeOwned>(
        &self,
        kind: MediaKind,
        file: &GlooFile,
    ) -> Result<ResultEnvelope<T>, UploadError> {
        let url = self.config.endpoint(kind);
        let blob: &Blob = file;

        let request = Request::post(&url)
            .header("Content-Type", "application/octet-stream")
            .body(JsValue::from(blob.clone()))
            .map_err(UploadError::Build)?;

        log::info!("POST {} ({} bytes)", url, file.size());
        let response = request.send().await.map_err(UploadError::Network)?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(UploadError::Status { status, body });
        }

        response
            .json::<ResultEnvelope<T>>()
            .await
            .map_err(UploadError::Decode)
    }
}
