use super::types::ChatResponse;

/// Return the text of the first choice, if the model produced any.
///
/// Whitespace-only replies count as missing.
pub fn extract_reply(response: &ChatResponse) -> Option<&str> {
    response
        .choices
        .first()
        .and_then(|choice| choice.message.content.as_deref())
        .filter(|text| !text.trim().is_empty())
}
