use shared_types::{Notice, NoticeTone};
use shared_ui::{announce, ToastTone, Toasts};

fn tone(notice: &Notice) -> ToastTone {
    match notice.tone {
        NoticeTone::Success => ToastTone::Success,
        NoticeTone::Info => ToastTone::Info,
        NoticeTone::Destructive => ToastTone::Error,
    }
}

/// Show a session notice as an in-app toast.
pub fn show(toast: &Toasts, notice: &Notice) {
    announce(toast, tone(notice), &notice.title, &notice.description);
}
