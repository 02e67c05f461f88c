use crate::common::{CallKind, Contact};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallPhase {
    Ringing,
    Connected,
}

/// Trạng thái hiển thị của một cuộc gọi. Không có tác dụng phụ nào ra ngoài.
#[derive(Debug, Clone)]
pub struct CallState {
    contact: Contact,
    kind: CallKind,
    phase: CallPhase,
    elapsed_secs: u64,
    muted: bool,
    camera_off: bool,
    speaker_on: bool,
}

impl CallState {
    pub fn new(contact: Contact, kind: CallKind) -> Self {
        Self {
            contact,
            kind,
            phase: CallPhase::Ringing,
            elapsed_secs: 0,
            muted: false,
            camera_off: false,
            speaker_on: false,
        }
    }

    pub fn contact(&self) -> &Contact {
        &self.contact
    }

    pub fn kind(&self) -> CallKind {
        self.kind
    }

    pub fn phase(&self) -> CallPhase {
        self.phase
    }

    pub fn is_connecting(&self) -> bool {
        self.phase == CallPhase::Ringing
    }

    /// Ringing -> Connected. Returns `true` only for the first transition.
    pub fn connect(&mut self) -> bool {
        if self.phase == CallPhase::Connected {
            return false;
        }
        self.phase = CallPhase::Connected;
        true
    }

    /// Takes the connected-seconds total from the timer. Ignored while
    /// ringing; the counter never goes backwards.
    pub fn sync_elapsed(&mut self, secs: u64) {
        if self.phase == CallPhase::Connected && secs > self.elapsed_secs {
            self.elapsed_secs = secs;
        }
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn duration_label(&self) -> String {
        format_duration(self.elapsed_secs)
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    pub fn camera_off(&self) -> bool {
        self.camera_off
    }

    pub fn speaker_on(&self) -> bool {
        self.speaker_on
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    pub fn toggle_camera(&mut self) {
        self.camera_off = !self.camera_off;
    }

    pub fn toggle_speaker(&mut self) {
        self.speaker_on = !self.speaker_on;
    }
}

/// `M:SS`, minutes unpadded.
pub fn format_duration(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
