use crate::config::NotificationMessages;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Saved,
    Failed,
    Invalid,
}

/// One-shot status message shown after a submit, then cleared by the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn saved(messages: &NotificationMessages) -> Self {
        Self {
            kind: NotificationKind::Saved,
            message: messages.saved.clone(),
        }
    }

    pub fn failed(messages: &NotificationMessages) -> Self {
        Self {
            kind: NotificationKind::Failed,
            message: messages.failed.clone(),
        }
    }

    pub fn invalid(messages: &NotificationMessages) -> Self {
        Self {
            kind: NotificationKind::Invalid,
            message: messages.invalid.clone(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind != NotificationKind::Saved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_follow_config() {
        let messages = NotificationMessages::indonesian();

        assert_eq!(Notification::saved(&messages).message, "Data berhasil disimpan");
        assert_eq!(Notification::failed(&messages).message, "Data gagal disimpan");
        assert!(!Notification::saved(&messages).is_error());
        assert!(Notification::invalid(&messages).is_error());
    }
}
