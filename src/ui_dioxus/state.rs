use crate::api::types::PhotoAttachment;

/// Explicit lifecycle for one logical network operation. `Pending` doubles as
/// the single-flight guard: a submit control is disabled while its operation
/// is pending, so one in-flight request can never become two.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

impl RequestState {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }

    /// Moves to `Pending` unless a request is already in flight. Returns
    /// false when the caller must not start another request.
    pub fn try_begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = RequestState::Pending;
        true
    }
}

/// Photo selection state for the submission form. One photo at a time; the
/// epoch feeds the file input's key so clearing remounts the control and the
/// same file can be picked again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhotoPicker {
    pub attachment: Option<PhotoAttachment>,
    pub preview: Option<String>,
    pub epoch: u32,
}

impl PhotoPicker {
    /// Replaces whatever was selected before.
    pub fn select(&mut self, attachment: PhotoAttachment, preview: String) {
        self.attachment = Some(attachment);
        self.preview = Some(preview);
    }

    pub fn clear(&mut self) {
        self.attachment = None;
        self.preview = None;
        self.epoch = self.epoch.wrapping_add(1);
    }

    pub fn has_photo(&self) -> bool {
        self.attachment.is_some()
    }
}
