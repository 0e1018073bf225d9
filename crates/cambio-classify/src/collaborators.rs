use crate::{CaptureError, ClassificationResult, PipelineError};

/// Still-image capture. Implementations return the encoded frame (JPEG, PNG, ...).
#[allow(async_fn_in_trait)]
pub trait StillCamera {
    async fn capture(&mut self) -> Result<Vec<u8>, CaptureError>;
}

/// Speech or display output for results.
pub trait Announcer {
    /// Say `text`, cutting off anything still being said.
    fn speak(&mut self, text: &str);
}

/// Writes announcements to the log and remembers the latest one.
#[derive(Debug, Default)]
pub struct LogAnnouncer {
    last: Option<String>,
}

impl LogAnnouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }
}

impl Announcer for LogAnnouncer {
    fn speak(&mut self, text: &str) {
        log::info!("announce: {text}");
        self.last = Some(text.to_string());
    }
}

/// Announce a classification outcome. Unresolved results and failures both
/// announce `unknown_label`, so the user always hears something.
///
/// Returns the text that was announced.
pub fn announce(
    outcome: &Result<ClassificationResult, PipelineError>,
    announcer: &mut dyn Announcer,
    unknown_label: &str,
) -> String {
    let text = match outcome {
        Ok(result) => result.display_text(unknown_label).to_string(),
        Err(err) => {
            log::warn!("classification failed at {} stage: {err}", err.stage());
            unknown_label.to_string()
        }
    };
    announcer.speak(&text);
    text
}
