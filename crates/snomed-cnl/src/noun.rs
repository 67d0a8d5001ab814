//! Noun phrase construction.
//!
//! Turns a concept's FSN into the lower-case, tag-free name used inside
//! controlled English sentences, and decorates it with an indefinite article
//! and an optional id suffix.

use std::fmt;

use crate::fsn::Fsn;
use crate::SctId;

/// Semantic tags whose concepts read as mass nouns and never take an article.
pub const MASS_NOUN_TAGS: &[&str] = &["organism"];

/// An indefinite article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Article {
    /// "a"
    A,
    /// "an"
    An,
}

impl Article {
    /// Chooses the article for a word: "an" iff it starts with a vowel.
    pub fn for_word(word: &str) -> Self {
        match word.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('a' | 'e' | 'i' | 'o' | 'u') => Article::An,
            _ => Article::A,
        }
    }

    /// Returns the article text.
    pub fn as_str(self) -> &'static str {
        match self {
            Article::A => "a",
            Article::An => "an",
        }
    }
}

/// Prefixes a phrase with "a" or "an".
pub fn with_indefinite_article(phrase: &str) -> String {
    format!("{} {}", Article::for_word(phrase).as_str(), phrase)
}

/// A concept name normalized for use inside a sentence.
///
/// This is what the name cache stores: it depends on the concept id alone, so
/// article and id decoration are applied afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedName {
    /// Lower-case name with tag, disambiguating qualifier and ", device"
    /// suffix removed.
    pub text: String,
    /// Whether the concept's semantic tag marks it as a mass noun.
    pub mass_noun: bool,
}

impl NormalizedName {
    /// Normalizes an FSN.
    ///
    /// # Example
    ///
    /// ```rust
    /// use snomed_cnl::NormalizedName;
    ///
    /// let name = NormalizedName::from_fsn("Catheter, device (physical object)");
    /// assert_eq!(name.text, "catheter");
    /// ```
    pub fn from_fsn(term: &str) -> Self {
        let fsn = Fsn::parse(term);
        let lowered = fsn.name.to_lowercase();
        let mut text = lowered.split(" - ").next().unwrap_or_default();
        if let Some(stripped) = text.strip_suffix(", device") {
            text = stripped;
        }

        Self {
            text: text.to_string(),
            mass_noun: fsn
                .semantic_tag
                .is_some_and(|tag| MASS_NOUN_TAGS.contains(&tag)),
        }
    }

    /// Builds the noun phrase for this name.
    ///
    /// The article is only applied when requested and the name is not a mass
    /// noun; the id suffix only when `id_suffix` is given.
    pub fn phrase(&self, with_article: bool, id_suffix: Option<SctId>) -> NounPhrase {
        let article = (with_article && !self.mass_noun).then(|| Article::for_word(&self.text));
        NounPhrase {
            text: self.text.clone(),
            article,
            id_suffix,
        }
    }
}

/// A rendered noun phrase: normalized text, optional article, optional id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NounPhrase {
    /// Normalized concept name.
    pub text: String,
    /// Leading indefinite article.
    pub article: Option<Article>,
    /// Concept id appended as ` (<id>)`.
    pub id_suffix: Option<SctId>,
}

impl fmt::Display for NounPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(article) = self.article {
            write!(f, "{} ", article.as_str())?;
        }
        f.write_str(&self.text)?;
        if let Some(id) = self.id_suffix {
            write!(f, " ({})", id)?;
        }
        Ok(())
    }
}

/// Joins phrases as an English list: `a`, `a, and b`, `a, b, and c`.
///
/// `and_sep` is placed before the last item (usually `", and "`).
pub fn join_list<S: AsRef<str>>(items: &[S], and_sep: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let head = init
                .iter()
                .map(|s| s.as_ref())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}{}{}", head, and_sep, last.as_ref())
        }
    }
}
