pub mod config;
pub mod envelope;
pub mod media;
pub mod state;

pub use config::{ApiConfig, ConfigError};
pub use envelope::{DetectionResult, ResultEnvelope, VideoFrames};
pub use media::MediaKind;
pub use state::{
    DetectError, DetectionOutcome, PendingUpload, RequestToken, ResultPanel, SelectedMedia,
    UploadMachine, ViewState,
};
