use serde::{Deserialize, Serialize};

/// One label/score pair returned by the detection API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DetectionResult {
    pub entity: String,
    pub confidence_score: f64,
    /// Representative frame image, only sent for video frames.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl DetectionResult {
    pub fn label(&self) -> String {
        self.entity.to_uppercase()
    }

    pub fn score_label(&self) -> String {
        format!("Score: {}", self.confidence_score)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VideoFrames {
    #[serde(default)]
    pub frames: Vec<DetectionResult>,
}

/// Wrapper around every detection API response.
///
/// `data` is only meaningful when `is_success` is true, and `error` only when
/// it is false. Both may be missing or null on the wire.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResultEnvelope<T> {
    pub is_success: bool,
    pub error: Option<String>,
    pub data: Option<T>,
}

impl<T> ResultEnvelope<T> {
    /// Splits the envelope into the payload or the message to display.
    pub fn into_result(self, fallback: &str) -> Result<T, String> {
        match (self.is_success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err(fallback.to_string()),
            (false, _) => Err(self
                .error
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| fallback.to_string())),
        }
    }
}
