use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Yêu cầu truy cập thiết bị. Luôn là audio + video, không thương lượng thêm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaRequest {
    pub audio: bool,
    pub video: bool,
}

impl MediaRequest {
    pub const AUDIO_VIDEO: MediaRequest = MediaRequest {
        audio: true,
        video: true,
    };
}

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("no capture device found for {0}")]
    NotFound(&'static str),
    #[error("access to {} was denied", .0.display())]
    PermissionDenied(PathBuf),
    #[error("media capture is not supported on this platform")]
    Unsupported,
    #[error("failed to open {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

/// Open device handles for the local self-preview. Released on drop.
#[derive(Debug)]
pub struct MediaStream {
    video: Option<(PathBuf, File)>,
    audio: Option<PathBuf>,
}

impl MediaStream {
    pub fn new(video: Option<(PathBuf, File)>, audio: Option<PathBuf>) -> Self {
        Self { video, audio }
    }

    pub fn video_device(&self) -> Option<&Path> {
        self.video.as_ref().map(|(path, _)| path.as_path())
    }

    pub fn audio_device(&self) -> Option<&Path> {
        self.audio.as_deref()
    }

    pub fn label(&self) -> String {
        match (self.video_device(), self.audio_device()) {
            (Some(path), _) => path.display().to_string(),
            (None, Some(path)) => format!("audio only ({})", path.display()),
            (None, None) => "empty".to_string(),
        }
    }
}

impl Drop for MediaStream {
    fn drop(&mut self) {
        log::debug!("Releasing media stream ({})", self.label());
    }
}

/// Khả năng thu camera/micro của hệ điều hành.
pub trait MediaDevices: Send + Sync + 'static {
    /// Blocking; callers run it off the UI thread.
    fn open(&self, request: MediaRequest) -> Result<MediaStream, MediaError>;
}

/// Opens the first V4L2 capture node and checks for ALSA devices.
pub struct SystemMedia {
    dev_dir: PathBuf,
}

impl SystemMedia {
    pub fn new() -> Self {
        Self::with_dev_dir("/dev")
    }

    pub fn with_dev_dir<P: AsRef<Path>>(dev_dir: P) -> Self {
        Self {
            dev_dir: dev_dir.as_ref().to_path_buf(),
        }
    }

    fn first_video_node(&self) -> Result<PathBuf, MediaError> {
        let entries = std::fs::read_dir(&self.dev_dir).map_err(|source| MediaError::Io {
            path: self.dev_dir.clone(),
            source,
        })?;

        let mut nodes: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with("video"))
            })
            .collect();
        nodes.sort();

        nodes.into_iter().next().ok_or(MediaError::NotFound("video"))
    }

    fn open_video(&self) -> Result<(PathBuf, File), MediaError> {
        let path = self.first_video_node()?;
        match File::open(&path) {
            Ok(file) => Ok((path, file)),
            Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
                Err(MediaError::PermissionDenied(path))
            }
            Err(source) => Err(MediaError::Io { path, source }),
        }
    }

    fn audio_dir(&self) -> Result<PathBuf, MediaError> {
        let path = self.dev_dir.join("snd");
        if path.is_dir() {
            Ok(path)
        } else {
            Err(MediaError::NotFound("audio"))
        }
    }
}

impl Default for SystemMedia {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaDevices for SystemMedia {
    fn open(&self, request: MediaRequest) -> Result<MediaStream, MediaError> {
        if !cfg!(target_os = "linux") {
            return Err(MediaError::Unsupported);
        }

        let video = if request.video {
            Some(self.open_video()?)
        } else {
            None
        };
        let audio = if request.audio {
            Some(self.audio_dir()?)
        } else {
            None
        };

        Ok(MediaStream::new(video, audio))
    }
}

#[cfg(all(test, target_os = "linux"))]
mod tests {
    use super::*;

    fn temp_dev_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "rust_messenger_{name}_{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn opens_first_video_node_and_audio_dir() {
        let dir = temp_dev_dir("ok");
        File::create(dir.join("video1")).unwrap();
        File::create(dir.join("video0")).unwrap();
        std::fs::create_dir(dir.join("snd")).unwrap();

        let stream = SystemMedia::with_dev_dir(&dir)
            .open(MediaRequest::AUDIO_VIDEO)
            .unwrap();
        assert_eq!(stream.video_device(), Some(dir.join("video0").as_path()));
        assert_eq!(stream.audio_device(), Some(dir.join("snd").as_path()));

        drop(stream);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_camera_is_not_found() {
        let dir = temp_dev_dir("nocam");
        std::fs::create_dir(dir.join("snd")).unwrap();

        let err = SystemMedia::with_dev_dir(&dir)
            .open(MediaRequest::AUDIO_VIDEO)
            .unwrap_err();
        assert!(matches!(err, MediaError::NotFound("video")));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_audio_is_not_found() {
        let dir = temp_dev_dir("nomic");
        File::create(dir.join("video0")).unwrap();

        let err = SystemMedia::with_dev_dir(&dir)
            .open(MediaRequest::AUDIO_VIDEO)
            .unwrap_err();
        assert!(matches!(err, MediaError::NotFound("audio")));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
