//! View state of the upload screen.
//!
//! The screen moves between a small set of states; every transition goes
//! through [`UploadMachine`] so that a result can never be shown together with
//! a loading indicator, and a response that arrives after the user moved on is
//! dropped instead of overwriting what is on screen.

use crate::envelope::{DetectionResult, ResultEnvelope, VideoFrames};
use crate::media::MediaKind;
use derive_more::Display;

/// A file picked by the user. `F` is the platform handle (the browser file
/// and its preview URL in the web client).
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedMedia<F> {
    pub name: String,
    pub mime: String,
    pub kind: MediaKind,
    pub handle: F,
}

/// Generation number of an upload request.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "request#{}", _0)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<F> {
    Idle,
    Selected(SelectedMedia<F>),
    Loading {
        media: SelectedMedia<F>,
        token: RequestToken,
    },
    ImageResult {
        media: SelectedMedia<F>,
        result: DetectionResult,
    },
    VideoResult {
        media: SelectedMedia<F>,
        frames: Vec<DetectionResult>,
    },
    Failed {
        media: SelectedMedia<F>,
        message: String,
    },
}

impl<F> Default for ViewState<F> {
    fn default() -> Self {
        ViewState::Idle
    }
}

impl<F> ViewState<F> {
    pub fn media(&self) -> Option<&SelectedMedia<F>> {
        match self {
            ViewState::Idle => None,
            ViewState::Selected(media)
            | ViewState::Loading { media, .. }
            | ViewState::ImageResult { media, .. }
            | ViewState::VideoResult { media, .. }
            | ViewState::Failed { media, .. } => Some(media),
        }
    }

    fn into_media(self) -> Option<SelectedMedia<F>> {
        match self {
            ViewState::Idle => None,
            ViewState::Selected(media)
            | ViewState::Loading { media, .. }
            | ViewState::ImageResult { media, .. }
            | ViewState::VideoResult { media, .. }
            | ViewState::Failed { media, .. } => Some(media),
        }
    }
}

/// What the results card shows. Exactly one branch applies at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultPanel<'a> {
    NoResults,
    Loading,
    Error(&'a str),
    Image(&'a DetectionResult),
    Video(&'a [DetectionResult]),
}

/// Everything an upload can come back with.
#[derive(Debug, Clone, PartialEq)]
pub enum DetectionOutcome {
    Image(ResultEnvelope<DetectionResult>),
    Video(ResultEnvelope<VideoFrames>),
    /// Transport failure: no envelope could be obtained.
    UploadFailed,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DetectError {
    #[error("Please select a file first.")]
    NoFileSelected,
}

/// Work handed to the network layer when a detection starts.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingUpload<F> {
    pub token: RequestToken,
    pub kind: MediaKind,
    pub handle: F,
}

#[derive(Debug)]
pub struct UploadMachine<F> {
    state: ViewState<F>,
    generation: u64,
}

impl<F> Default for UploadMachine<F> {
    fn default() -> Self {
        Self {
            state: ViewState::Idle,
            generation: 0,
        }
    }
}

impl<F> UploadMachine<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState<F> {
        &self.state
    }

    pub fn selection(&self) -> Option<&SelectedMedia<F>> {
        self.state.media()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading { .. })
    }

    /// Remove and detect buttons are offered only for a settled selection.
    pub fn shows_actions(&self) -> bool {
        self.selection().is_some() && !self.is_loading()
    }

    pub fn panel(&self) -> ResultPanel<'_> {
        match &self.state {
            ViewState::Idle | ViewState::Selected(_) => ResultPanel::NoResults,
            ViewState::Loading { .. } => ResultPanel::Loading,
            ViewState::Failed { message, .. } => ResultPanel::Error(message),
            ViewState::ImageResult { result, .. } => ResultPanel::Image(result),
            ViewState::VideoResult { frames, .. } if frames.is_empty() => ResultPanel::NoResults,
            ViewState::VideoResult { frames, .. } => ResultPanel::Video(frames),
        }
    }

    /// Replaces whatever is on screen with a freshly picked file. Any upload
    /// still in flight becomes stale.
    pub fn select(&mut self, media: SelectedMedia<F>) {
        self.invalidate();
        log::info!("Selected {} file {} ({})", media.kind, media.name, media.mime);
        self.state = ViewState::Selected(media);
    }

    /// Back to the initial screen. Any upload still in flight becomes stale.
    pub fn remove(&mut self) {
        self.invalidate();
        self.state = ViewState::Idle;
    }

    /// Settles the current request. Returns `false` when the outcome belongs
    /// to a request that is no longer current; the state is then untouched.
    pub fn complete(&mut self, token: RequestToken, outcome: DetectionOutcome) -> bool {
        let current = match &self.state {
            ViewState::Loading { token: current, .. } => Some(*current),
            _ => None,
        };
        if current != Some(token) {
            log::debug!("Ignoring response for {} (current: {:?})", token, current);
            return false;
        }

        let Some(media) = std::mem::take(&mut self.state).into_media() else {
            return false;
        };
        let kind = media.kind;

        self.state = match outcome {
            DetectionOutcome::Image(envelope) => {
                match envelope.into_result(kind.detection_failed_message()) {
                    Ok(result) => ViewState::ImageResult { media, result },
                    Err(message) => ViewState::Failed { media, message },
                }
            }
            DetectionOutcome::Video(envelope) => {
                match envelope.into_result(kind.detection_failed_message()) {
                    Ok(data) => ViewState::VideoResult {
                        media,
                        frames: data.frames,
                    },
                    Err(message) => ViewState::Failed { media, message },
                }
            }
            DetectionOutcome::UploadFailed => ViewState::Failed {
                media,
                message: kind.upload_failed_message().to_string(),
            },
        };
        true
    }

    fn invalidate(&mut self) -> RequestToken {
        self.generation += 1;
        RequestToken(self.generation)
    }
}

impl<F: Clone> UploadMachine<F> {
    /// Clears any previous result or error and enters the loading state with
    /// a new request token.
    pub fn begin_detection(&mut self) -> Result<PendingUpload<F>, DetectError> {
        let media = std::mem::take(&mut self.state)
            .into_media()
            .ok_or(DetectError::NoFileSelected)?;

        let token = self.invalidate();
        let pending = PendingUpload {
            token,
            kind: media.kind,
            handle: media.handle.clone(),
        };
        log::info!("Starting {} detection for {} ({})", media.kind, media.name, token);
        self.state = ViewState::Loading { media, token };
        Ok(pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media(name: &str, mime: &str) -> SelectedMedia<u32> {
        SelectedMedia {
            name: name.to_string(),
            mime: mime.to_string(),
            kind: MediaKind::detect(name, mime).unwrap(),
            handle: 7,
        }
    }

    fn result(entity: &str, score: f64) -> DetectionResult {
        DetectionResult {
            entity: entity.to_string(),
            confidence_score: score,
            url: None,
        }
    }

    fn image_success(entity: &str, score: f64) -> DetectionOutcome {
        DetectionOutcome::Image(ResultEnvelope {
            is_success: true,
            error: None,
            data: Some(result(entity, score)),
        })
    }

    #[test]
    fn test_initial_state_is_idle() {
        let machine = UploadMachine::<u32>::new();

        assert_eq!(machine.state(), &ViewState::Idle);
        assert_eq!(machine.panel(), ResultPanel::NoResults);
        assert!(!machine.shows_actions());
    }

    #[test]
    fn test_detect_without_file_is_rejected() {
        let mut machine = UploadMachine::<u32>::new();

        assert_eq!(machine.begin_detection(), Err(DetectError::NoFileSelected));
        assert_eq!(machine.state(), &ViewState::Idle);
        assert_eq!(DetectError::NoFileSelected.to_string(), "Please select a file first.");
    }

    #[test]
    fn test_image_detection_success() {
        let mut machine = UploadMachine::new();
        machine.select(media("cat.jpg", "image/jpeg"));
        assert!(machine.shows_actions());

        let pending = machine.begin_detection().unwrap();
        assert_eq!(pending.kind, MediaKind::Image);
        assert_eq!(pending.handle, 7);
        assert!(machine.is_loading());
        assert!(!machine.shows_actions());
        assert_eq!(machine.panel(), ResultPanel::Loading);

        assert!(machine.complete(pending.token, image_success("cat", 0.93)));
        match machine.panel() {
            ResultPanel::Image(shown) => {
                assert_eq!(shown.label(), "CAT");
                assert_eq!(shown.score_label(), "Score: 0.93");
            }
            other => panic!("unexpected panel {:?}", other),
        }
        assert!(machine.shows_actions());
    }

    #[test]
    fn test_application_failure_uses_server_message() {
        let mut machine = UploadMachine::new();
        machine.select(media("cat.gif", "image/gif"));
        let pending = machine.begin_detection().unwrap();

        let outcome = DetectionOutcome::Image(ResultEnvelope {
            is_success: false,
            error: Some("unsupported format".into()),
            data: None,
        });
        assert!(machine.complete(pending.token, outcome));
        assert_eq!(machine.panel(), ResultPanel::Error("unsupported format"));
    }

    #[test]
    fn test_application_failure_without_message_falls_back() {
        let mut machine = UploadMachine::new();
        machine.select(media("clip.mp4", "video/mp4"));
        let pending = machine.begin_detection().unwrap();

        let outcome = DetectionOutcome::Video(ResultEnvelope {
            is_success: false,
            error: None,
            data: None,
        });
        assert!(machine.complete(pending.token, outcome));
        assert_eq!(
            machine.panel(),
            ResultPanel::Error("An error occurred during video detection.")
        );
    }

    #[test]
    fn test_upload_failure_shows_fixed_message() {
        let mut machine = UploadMachine::new();
        machine.select(media("cat.png", "image/png"));
        let pending = machine.begin_detection().unwrap();

        assert!(machine.complete(pending.token, DetectionOutcome::UploadFailed));
        assert_eq!(
            machine.panel(),
            ResultPanel::Error("Failed to upload the image. Please try again.")
        );
        assert!(machine.selection().is_some());
    }

    #[test]
    fn test_video_frames_preserve_order() {
        let mut machine = UploadMachine::new();
        machine.select(media("walk.mov", "video/quicktime"));
        let pending = machine.begin_detection().unwrap();
        assert_eq!(pending.kind, MediaKind::Video);

        let frames = vec![result("dog", 0.9), result("person", 0.6), result("dog", 0.8)];
        let outcome = DetectionOutcome::Video(ResultEnvelope {
            is_success: true,
            error: None,
            data: Some(VideoFrames {
                frames: frames.clone(),
            }),
        });
        assert!(machine.complete(pending.token, outcome));
        assert_eq!(machine.panel(), ResultPanel::Video(&frames));
    }

    #[test]
    fn test_empty_frame_list_shows_no_results() {
        let mut machine = UploadMachine::new();
        machine.select(media("walk.avi", ""));
        let pending = machine.begin_detection().unwrap();

        let outcome = DetectionOutcome::Video(ResultEnvelope {
            is_success: true,
            error: None,
            data: Some(VideoFrames { frames: vec![] }),
        });
        assert!(machine.complete(pending.token, outcome));
        assert_eq!(machine.panel(), ResultPanel::NoResults);
    }

    #[test]
    fn test_new_upload_clears_previous_result() {
        let mut machine = UploadMachine::new();
        machine.select(media("cat.jpg", "image/jpeg"));
        let first = machine.begin_detection().unwrap();
        machine.complete(first.token, DetectionOutcome::UploadFailed);
        assert!(matches!(machine.panel(), ResultPanel::Error(_)));

        let second = machine.begin_detection().unwrap();
        assert_ne!(first.token, second.token);
        assert_eq!(machine.panel(), ResultPanel::Loading);
        assert_eq!(machine.selection().map(|m| m.name.as_str()), Some("cat.jpg"));
    }

    #[test]
    fn test_remove_returns_to_idle() {
        let mut machine = UploadMachine::new();
        machine.select(media("cat.jpg", "image/jpeg"));
        let pending = machine.begin_detection().unwrap();
        machine.complete(pending.token, image_success("cat", 0.5));

        machine.remove();
        assert_eq!(machine.state(), &ViewState::Idle);
        assert_eq!(machine.panel(), ResultPanel::NoResults);
        assert!(machine.selection().is_none());
    }

    #[test]
    fn test_response_after_remove_is_ignored() {
        let mut machine = UploadMachine::new();
        machine.select(media("cat.jpg", "image/jpeg"));
        let pending = machine.begin_detection().unwrap();

        machine.remove();
        assert!(!machine.complete(pending.token, image_success("cat", 0.9)));
        assert_eq!(machine.state(), &ViewState::Idle);
    }

    #[test]
    fn test_response_for_previous_file_is_ignored() {
        let mut machine = UploadMachine::new();
        machine.select(media("cat.jpg", "image/jpeg"));
        let pending = machine.begin_detection().unwrap();

        machine.select(media("dog.png", "image/png"));
        assert!(!machine.complete(pending.token, image_success("cat", 0.9)));
        assert_eq!(machine.panel(), ResultPanel::NoResults);
        assert_eq!(machine.selection().map(|m| m.name.as_str()), Some("dog.png"));
    }

    #[test]
    fn test_superseded_request_is_ignored() {
        let mut machine = UploadMachine::new();
        machine.select(media("cat.jpg", "image/jpeg"));
        let first = machine.begin_detection().unwrap();
        let second = machine.begin_detection().unwrap();

        assert!(!machine.complete(first.token, image_success("stale", 0.1)));
        assert!(machine.is_loading());

        assert!(machine.complete(second.token, image_success("cat", 0.9)));
        assert!(!machine.complete(second.token, image_success("again", 0.2)));
        match machine.panel() {
            ResultPanel::Image(shown) => assert_eq!(shown.entity, "cat"),
            other => panic!("unexpected panel {:?}", other),
        }
    }

    #[test]
    fn test_token_display() {
        assert_eq!(RequestToken(3).to_string(), "request#3");
    }
}
