use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn mime_prefix(self) -> &'static str {
        match self {
            MediaKind::Image => "image/",
            MediaKind::Video => "video/",
        }
    }

    /// Extensions offered by the file picker, lowercase and without the dot.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            MediaKind::Image => &["jpg", "png", "gif"],
            MediaKind::Video => &["mp4", "avi", "mov"],
        }
    }

    pub fn endpoint_path(self) -> String {
        format!("/identifications/{}", self)
    }

    pub fn detect_label(self) -> &'static str {
        match self {
            MediaKind::Image => "DETECT IMAGE",
            MediaKind::Video => "DETECT VIDEO",
        }
    }

    pub fn detection_failed_message(self) -> &'static str {
        match self {
            MediaKind::Image => "An error occurred during image detection.",
            MediaKind::Video => "An error occurred during video detection.",
        }
    }

    pub fn upload_failed_message(self) -> &'static str {
        match self {
            MediaKind::Image => "Failed to upload the image. Please try again.",
            MediaKind::Video => "Failed to upload the video. Please try again.",
        }
    }

    pub fn from_mime(mime: &str) -> Option<Self> {
        let mime = mime.trim().to_ascii_lowercase();
        MediaKind::iter().find(|kind| mime.starts_with(kind.mime_prefix()))
    }

    pub fn from_file_name(name: &str) -> Option<Self> {
        let extension = extension_of(name)?;
        MediaKind::iter().find(|kind| kind.extensions().contains(&extension.as_str()))
    }

    /// Resolves the kind of a picked file. The declared MIME type wins; the
    /// extension is only consulted when the MIME type is not image or video.
    pub fn detect(name: &str, mime: &str) -> Option<Self> {
        Self::from_mime(mime).or_else(|| Self::from_file_name(name))
    }
}

fn extension_of(name: &str) -> Option<String> {
    let (stem, extension) = name.rsplit_once('.')?;
    if stem.is_empty() || extension.is_empty() {
        return None;
    }
    Some(extension.to_ascii_lowercase())
}

/// Value for the file input `accept` attribute.
pub fn accept_attribute() -> String {
    MediaKind::iter()
        .flat_map(|kind| {
            std::iter::once(format!("{}*", kind.mime_prefix()))
                .chain(kind.extensions().iter().map(|ext| format!(".{}", ext)))
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Client-side drop filter: a file passes when either its MIME type or its
/// extension matches one of the accepted entries.
pub fn is_accepted(name: &str, mime: &str) -> bool {
    MediaKind::detect(name, mime).is_some()
}

/// Picks the file to use from a multi-file drop or paste: the first one that
/// passes the filter. Takes `(name, mime)` pairs and returns the index of the
/// chosen file with its kind.
pub fn first_accepted<'a, I>(files: I) -> Option<(usize, MediaKind)>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    files
        .into_iter()
        .enumerate()
        .find_map(|(index, (name, mime))| MediaKind::detect(name, mime).map(|kind| (index, kind)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_kind_from_mime_prefix() {
        assert_eq!(MediaKind::from_mime("image/png"), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_mime("image/webp"), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_mime("video/quicktime"), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_mime("Video/MP4"), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_mime("application/pdf"), None);
        assert_eq!(MediaKind::from_mime(""), None);
    }

    #[test]
    fn test_mime_wins_over_extension() {
        assert_eq!(MediaKind::detect("clip.mp4", "image/gif"), Some(MediaKind::Image));
        assert_eq!(MediaKind::detect("clip.MOV", ""), Some(MediaKind::Video));
        assert_eq!(MediaKind::detect("notes.txt", ""), None);
        assert_eq!(MediaKind::detect(".png", ""), None);
    }

    #[test]
    fn test_accept_filter() {
        assert!(is_accepted("cat.jpg", "image/jpeg"));
        assert!(is_accepted("cat.webp", "image/webp"));
        assert!(is_accepted("holiday.avi", ""));
        assert!(is_accepted("holiday.avi", "application/octet-stream"));
        assert!(!is_accepted("report.pdf", "application/pdf"));
        assert!(!is_accepted("archive", ""));
    }

    #[test]
    fn test_first_accepted_skips_rejected_files() {
        let files = [
            ("notes.pdf", "application/pdf"),
            ("walk.mov", ""),
            ("cat.jpg", "image/jpeg"),
        ];
        assert_eq!(first_accepted(files), Some((1, MediaKind::Video)));
    }

    #[test]
    fn test_first_accepted_takes_first_of_several() {
        let files = [("cat.png", "image/png"), ("clip.mp4", "video/mp4")];
        assert_eq!(first_accepted(files), Some((0, MediaKind::Image)));
    }

    #[test]
    fn test_first_accepted_without_match() {
        let files = [("notes.pdf", "application/pdf"), ("archive", "")];
        assert_eq!(first_accepted(files), None);
        assert_eq!(first_accepted(std::iter::empty()), None);
    }

    #[test]
    fn test_accept_attribute() {
        assert_eq!(accept_attribute(), "image/*,.jpg,.png,.gif,video/*,.mp4,.avi,.mov");
    }

    #[test]
    fn test_endpoint_paths_and_names() {
        assert_eq!(MediaKind::Image.endpoint_path(), "/identifications/image");
        assert_eq!(MediaKind::Video.endpoint_path(), "/identifications/video");
        assert_eq!(MediaKind::from_str("video").unwrap(), MediaKind::Video);
        let name: &str = MediaKind::Image.as_ref();
        assert_eq!(name, "image");
    }
}
