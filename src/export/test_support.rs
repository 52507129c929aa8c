//! Shared test doubles for the export pipeline.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::domain::Note;
use crate::export::{
    DestinationPicker, ExportSummary, ExtractError, ImageExtractor, Notifier, ProbeError,
    SizeProbe,
};

pub(crate) fn test_datetime() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

pub(crate) fn test_note(id: &str, title: &str, body: &str) -> Note {
    Note::builder(id, title, test_datetime(), test_datetime())
        .body(body)
        .build()
}

/// Extracts exactly one known image id as `<id>.png`.
pub(crate) struct SingleImageExtractor {
    id: String,
}

impl SingleImageExtractor {
    pub(crate) fn new(id: &str) -> Self {
        Self { id: id.to_string() }
    }
}

impl ImageExtractor for SingleImageExtractor {
    fn export_image(&self, uri: &str, dir: &Path) -> Result<Option<PathBuf>, ExtractError> {
        if !uri.ends_with(&format!("file:{}", self.id)) {
            return Ok(None);
        }
        let path = dir.join(format!("{}.png", self.id));
        std::fs::write(&path, b"png").map_err(|e| ExtractError::Io {
            path: path.clone(),
            source: e,
        })?;
        Ok(Some(path))
    }
}

/// A probe that can never read anything.
pub(crate) struct FailingProbe;

impl SizeProbe for FailingProbe {
    fn probe(&self, path: &Path) -> Result<(u32, u32), ProbeError> {
        Err(ProbeError {
            path: path.to_path_buf(),
            source: "no probe in tests".into(),
        })
    }
}

/// Answers every prompt with a fixed path (or cancels), recording prompts.
pub(crate) struct ScriptedPicker {
    pub(crate) answer: Option<PathBuf>,
    pub(crate) prompts: Vec<String>,
}

impl ScriptedPicker {
    pub(crate) fn answering(path: impl Into<PathBuf>) -> Self {
        Self {
            answer: Some(path.into()),
            prompts: Vec::new(),
        }
    }

    pub(crate) fn cancelling() -> Self {
        Self {
            answer: None,
            prompts: Vec::new(),
        }
    }
}

impl DestinationPicker for ScriptedPicker {
    fn pick_directory(&mut self, prompt: &str) -> Option<PathBuf> {
        self.prompts.push(prompt.to_string());
        self.answer.clone()
    }

    fn pick_file(&mut self, default_name: &str) -> Option<PathBuf> {
        self.prompts.push(default_name.to_string());
        self.answer.clone()
    }
}

/// Records every notification.
#[derive(Default)]
pub(crate) struct RecordingNotifier {
    pub(crate) infos: Vec<String>,
    pub(crate) errors: Vec<(String, String)>,
}

impl Notifier for RecordingNotifier {
    fn info(&mut self, message: &str, _summary: &ExportSummary) {
        self.infos.push(message.to_string());
    }

    fn error(&mut self, message: &str, detail: &str) {
        self.errors.push((message.to_string(), detail.to_string()));
    }
}
