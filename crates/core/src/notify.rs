//! Notification subjects and bodies sent to thesis authors.
//!
//! The api layer writes these into the in-app notification table and the
//! outbound mail outbox. Bodies always carry the thesis title so the author
//! can tell which work the message is about.

/// Mail subject for a free-text message from a practice curator.
pub const CURATOR_MESSAGE_SUBJECT: &str = "Notification from the practice curator";

/// Mail subject when a work is moved to the archive.
pub const ARCHIVED_SUBJECT: &str = "Your work was moved to the practice and thesis archive";

/// In-app/mail body for a free-text message from a curator.
pub fn curator_message(curator: &str, title: &str, content: &str) -> String {
    format!("Practice curator {curator} sent you a notification about \"{title}\": {content}")
}

/// In-app/mail body announcing a title change.
pub fn title_changed(old_title: &str, new_title: &str) -> String {
    format!("The practice curator renamed your work \"{old_title}\" to \"{new_title}\"")
}

/// In-app/mail body announcing archival.
pub fn work_archived(curator: &str, title: &str) -> String {
    format!(
        "Practice curator {curator} moved your work \"{title}\" to the practice and thesis archive"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bodies_contain_the_thesis_title() {
        let title = "Incremental parsing";
        assert!(curator_message("A. Curator", title, "please fix").contains(title));
        assert!(title_changed(title, "Better parsing").contains(title));
        assert!(work_archived("A. Curator", title).contains(title));
    }

    #[test]
    fn curator_message_carries_content_and_sender() {
        let body = curator_message("A. Curator", "T", "deadline is Friday");
        assert!(body.contains("A. Curator"));
        assert!(body.contains("deadline is Friday"));
    }
}
