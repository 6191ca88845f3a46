//! AI writing helpers for the active note.

use platform_host::parse_reply;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Writing assist flavor.
pub enum AssistKind {
    /// Rewrite the note with corrected grammar and style.
    Fix,
    /// Append a creative continuation.
    Continue,
}

impl AssistKind {
    /// Button label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fix => "Fix",
            Self::Continue => "Continue",
        }
    }
}

/// Builds the completion prompt for `content`.
pub fn prompt(kind: AssistKind, content: &str) -> String {
    match kind {
        AssistKind::Fix => {
            format!("Fix the grammar and improve the writing style of this text:\n\n{content}")
        }
        AssistKind::Continue => format!("Continue writing this text creatively:\n\n{content}"),
    }
}

/// Computes the new note content from a raw assistant reply.
///
/// Returns `None` when the reply carries no text, leaving the note untouched.
pub fn apply(kind: AssistKind, content: &str, raw_reply: &str) -> Option<String> {
    let reply = parse_reply(raw_reply);
    if reply.response.is_empty() {
        return None;
    }
    Some(match kind {
        AssistKind::Fix => reply.response,
        AssistKind::Continue => format!("{content}\n{}", reply.response),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn prompts_embed_the_note_body() {
        assert_eq!(
            prompt(AssistKind::Fix, "teh cat"),
            "Fix the grammar and improve the writing style of this text:\n\nteh cat"
        );
        assert_eq!(
            prompt(AssistKind::Continue, "Once"),
            "Continue writing this text creatively:\n\nOnce"
        );
    }

    #[test]
    fn fix_replaces_and_continue_appends() {
        let raw = r#"{"response":"The cat.","action":{"type":"NONE","payload":null}}"#;
        assert_eq!(
            apply(AssistKind::Fix, "teh cat", raw).as_deref(),
            Some("The cat.")
        );
        assert_eq!(
            apply(AssistKind::Continue, "Once", raw).as_deref(),
            Some("Once\nThe cat.")
        );
    }

    #[test]
    fn plain_text_reply_is_used_verbatim() {
        assert_eq!(
            apply(AssistKind::Fix, "x", "just text").as_deref(),
            Some("just text")
        );
    }

    #[test]
    fn empty_response_leaves_note_unchanged() {
        assert_eq!(apply(AssistKind::Fix, "x", r#"{"response":""}"#), None);
    }
}
