/// The instruction template sent to the completion service.
///
/// Loaded from `prompt.txt` at compile time. It contains a single
/// `{description}` placeholder that [`build_prompt`] fills in.
pub const SPONSOR_EXTRACTION_PROMPT: &str = include_str!("prompt.txt");

const DESCRIPTION_PLACEHOLDER: &str = "{description}";

/// Substitute the video description into the instruction template.
///
/// The description is inserted verbatim; braces or JSON inside it are not
/// escaped.
pub fn build_prompt(description: &str) -> String {
    SPONSOR_EXTRACTION_PROMPT.replace(DESCRIPTION_PLACEHOLDER, description)
}
