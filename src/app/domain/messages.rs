use super::content::SectionId;
use crate::app::services::submit::SubmitError;

/// Contact form fields, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Email,
    Message,
}

impl FieldId {
    pub const ALL: [FieldId; 3] = [FieldId::Name, FieldId::Email, FieldId::Message];

    /// Wire name used when posting the form.
    pub fn form_name(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Message => "message",
        }
    }
}

/// Notification severity, mapped to a glyph and an accent color by the
/// toast surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

/// All messages that can be sent through the FLTK channel.
/// Widget callbacks and timers send one of these; the dispatch loop in main
/// handles them. Timer-driven variants carry the generation they were
/// scheduled under so stale firings can be ignored.
#[derive(Debug, Clone)]
pub enum Message {
    // Theme
    ToggleTheme,
    SystemThemeTick,

    // Navigation
    ToggleMenu,
    NavigateTo(SectionId),
    ScrollChanged,
    ScrollSettled,
    SmoothScrollTick(u64),
    WindowResized,
    ResizeSettled(u64),

    // Scroll effects
    RevealCard(usize),
    StatsTick,

    // Contact form
    FieldBlurred(FieldId),
    FieldEdited(FieldId),
    SubmitForm,
    SubmissionFinished(Result<(), SubmitError>),
    SubmitUnlock(u64),

    // Notifications
    NotificationExpired(u64),
    CloseNotification,

    // Previews and links
    OpenProjectPreview(usize),
    OpenCertificatePreview(usize),
    OpenProjectLink(usize),

    // Lifecycle
    WindowClose,
}
