//! Sentence composition.

use snomed_cnl::join_list;

use crate::render::Phrase;

/// Separator between definition sentences.
const SENTENCE_BREAK: &str = ".  ";

/// Composes a definition from its head, classification and role phrases.
///
/// The first sentence classifies the concept. Brief phrases are joined into a
/// second sentence starting with "It"; each lengthy phrase becomes its own
/// trailing "It" sentence. Empty phrases are dropped.
///
/// # Example
///
/// ```rust
/// use snomed_cnl_renderer::{compose, Phrase};
///
/// let text = compose(
///     "Fracture of femur",
///     &["a fracture of bone".to_string()],
///     &[Phrase::brief("is located in a femur structure")],
/// );
/// assert_eq!(
///     text,
///     "Fracture of femur is a fracture of bone.  It is located in a femur structure."
/// );
/// ```
pub fn compose(head: &str, classification: &[String], phrases: &[Phrase]) -> String {
    let mut text = if classification.is_empty() {
        head.to_string()
    } else {
        format!("{} is {}", head, join_list(classification, ", and "))
    };

    let (lengthy, brief): (Vec<&Phrase>, Vec<&Phrase>) = phrases
        .iter()
        .filter(|p| !p.is_empty())
        .partition(|p| p.lengthy);

    if !brief.is_empty() {
        let clauses: Vec<&str> = brief.iter().map(|p| p.text.as_str()).collect();
        text.push_str(SENTENCE_BREAK);
        text.push_str("It ");
        text.push_str(&join_list(&clauses, ", and "));
    }
    for phrase in lengthy {
        text.push_str(SENTENCE_BREAK);
        text.push_str("It ");
        text.push_str(&phrase.text);
    }
    text.push('.');
    text
}
