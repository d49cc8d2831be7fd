//! Voice Message Storage
//!
//! Voice notes attached to orders are written to `<work_dir>/uploads/voice/`
//! under a generated `<uuid>.<ext>` name. The name is the only reference the
//! order keeps; the file is removed once the order is delivered.

use std::path::{Path, PathBuf};

use shared::{AppError, ErrorCode};
use thiserror::Error;
use uuid::Uuid;

/// Maximum voice message size (10MB)
pub const MAX_VOICE_SIZE: usize = 10 * 1024 * 1024;

/// Accepted audio containers
pub const SUPPORTED_FORMATS: &[&str] = &["webm", "ogg", "mp3", "m4a", "wav", "mp4"];

/// Browsers upload MediaRecorder blobs without a file name
const DEFAULT_EXTENSION: &str = "webm";

#[derive(Debug, Error)]
pub enum VoiceError {
    #[error("File too large. Maximum size is {max} bytes")]
    TooLarge { size: usize, max: usize },

    #[error("Unsupported file format '{0}'. Supported: webm, ogg, mp3, m4a, wav, mp4")]
    UnsupportedFormat(String),

    #[error("Invalid voice reference: {0}")]
    InvalidReference(String),

    #[error("Voice message not found")]
    NotFound,

    #[error("Voice storage error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<VoiceError> for AppError {
    fn from(err: VoiceError) -> Self {
        let message = err.to_string();
        match err {
            VoiceError::TooLarge { size, max } => {
                AppError::with_message(ErrorCode::FileTooLarge, message)
                    .with_detail("size", size)
                    .with_detail("max", max)
            }
            VoiceError::UnsupportedFormat(ext) => {
                AppError::with_message(ErrorCode::UnsupportedFileFormat, message)
                    .with_detail("extension", ext)
            }
            VoiceError::InvalidReference(_) => {
                AppError::with_message(ErrorCode::InvalidFileExtension, message)
            }
            VoiceError::NotFound => AppError::new(ErrorCode::VoiceMessageNotFound),
            VoiceError::Io(e) => {
                AppError::with_message(ErrorCode::FileStorageFailed, format!("{}", e))
            }
        }
    }
}

pub type VoiceResult<T> = Result<T, VoiceError>;

/// A stored voice message read back for playback
#[derive(Debug)]
pub struct VoiceFile {
    pub data: Vec<u8>,
    pub content_type: String,
}

/// 只接受不含路径分隔符的文件名
fn validate_reference(reference: &str) -> VoiceResult<()> {
    if reference.is_empty()
        || reference.contains("..")
        || reference.contains('/')
        || reference.contains('\\')
    {
        return Err(VoiceError::InvalidReference(reference.to_string()));
    }
    Ok(())
}

fn extension_of(original_name: Option<&str>) -> VoiceResult<String> {
    let ext = original_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

    if !SUPPORTED_FORMATS.contains(&ext.as_str()) {
        return Err(VoiceError::UnsupportedFormat(ext));
    }
    Ok(ext)
}

#[derive(Debug, Clone)]
pub struct VoiceStorage {
    dir: PathBuf,
}

impl VoiceStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store an upload and return its reference; empty payloads are ignored
    pub async fn save(&self, data: &[u8], original_name: Option<&str>) -> VoiceResult<Option<String>> {
        if data.is_empty() {
            return Ok(None);
        }
        if data.len() > MAX_VOICE_SIZE {
            return Err(VoiceError::TooLarge {
                size: data.len(),
                max: MAX_VOICE_SIZE,
            });
        }
        let ext = extension_of(original_name)?;

        tokio::fs::create_dir_all(&self.dir).await?;
        let reference = format!("{}.{}", Uuid::new_v4(), ext);
        tokio::fs::write(self.dir.join(&reference), data).await?;

        tracing::info!(voice = %reference, size = data.len(), "Voice message stored");
        Ok(Some(reference))
    }

    pub async fn open(&self, reference: &str) -> VoiceResult<VoiceFile> {
        validate_reference(reference)?;
        let data = match tokio::fs::read(self.dir.join(reference)).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(VoiceError::NotFound),
            Err(e) => return Err(e.into()),
        };
        // mime_guess 把 webm 识别为 video/webm，语音留言按音频返回
        let content_type = if reference.ends_with(".webm") {
            "audio/webm".to_string()
        } else {
            mime_guess::from_path(reference)
                .first_or_octet_stream()
                .to_string()
        };
        Ok(VoiceFile { data, content_type })
    }

    /// 删除语音文件，失败只记录警告
    pub async fn release(&self, reference: &str) {
        if let Err(e) = validate_reference(reference) {
            tracing::warn!(voice = %reference, error = %e, "Refusing to remove voice message");
            return;
        }
        match tokio::fs::remove_file(self.dir.join(reference)).await {
            Ok(()) => tracing::info!(voice = %reference, "Voice message released"),
            Err(e) => tracing::warn!(voice = %reference, error = %e, "Failed to remove voice message"),
        }
    }
}
