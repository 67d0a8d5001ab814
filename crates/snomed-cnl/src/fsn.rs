//! Fully Specified Name parsing using nom.
//!
//! An FSN is a name followed by a parenthesised semantic tag, e.g.
//! `Heart structure (body structure)`. Names may contain parentheses of their
//! own, so the tag is always the *last* parenthesised group ending the term.

use nom::{
    bytes::complete::{tag, take_while1},
    character::complete::char,
    combinator::all_consuming,
    sequence::delimited,
    IResult,
};

/// A Fully Specified Name split into its name and semantic tag.
///
/// # Example
///
/// ```rust
/// use snomed_cnl::Fsn;
///
/// let fsn = Fsn::parse("Heart structure (body structure)");
/// assert_eq!(fsn.name, "Heart structure");
/// assert_eq!(fsn.semantic_tag, Some("body structure"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fsn<'a> {
    /// The name without its semantic tag, in its original casing.
    pub name: &'a str,
    /// The semantic tag, if the term carries one.
    pub semantic_tag: Option<&'a str>,
}

impl<'a> Fsn<'a> {
    /// Splits a term into name and semantic tag.
    ///
    /// Terms without a trailing `" (<tag>)"` are returned whole with no tag.
    pub fn parse(term: &'a str) -> Self {
        let term = term.trim_end();
        let mut search_end = term.len();

        while let Some(start) = term[..search_end].rfind(" (") {
            if let Ok((_, semantic_tag)) = all_consuming(semantic_tag_suffix)(&term[start..]) {
                return Self {
                    name: &term[..start],
                    semantic_tag: Some(semantic_tag),
                };
            }
            search_end = start;
        }

        Self {
            name: term,
            semantic_tag: None,
        }
    }
}

/// Parse a trailing semantic tag: ` (<tag>)`
fn semantic_tag_suffix(input: &str) -> IResult<&str, &str> {
    delimited(
        tag(" ("),
        take_while1(|c: char| c != '(' && c != ')'),
        char(')'),
    )(input)
}

/// Strips the semantic tag from a term, keeping the original casing.
pub fn strip_semantic_tag(term: &str) -> &str {
    Fsn::parse(term).name
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Heart structure (body structure)", "Heart structure", Some("body structure"))]
    #[case("Fracture of bone (disorder)", "Fracture of bone", Some("disorder"))]
    #[case("Escherichia coli (organism)", "Escherichia coli", Some("organism"))]
    #[case(
        "Structure of aortic valve (cusp) (body structure)",
        "Structure of aortic valve (cusp)",
        Some("body structure")
    )]
    #[case("Plain name", "Plain name", None)]
    #[case("Unterminated (tag", "Unterminated (tag", None)]
    fn test_parse(
        #[case] term: &str,
        #[case] name: &str,
        #[case] semantic_tag: Option<&str>,
    ) {
        let fsn = Fsn::parse(term);
        assert_eq!(fsn.name, name);
        assert_eq!(fsn.semantic_tag, semantic_tag);
    }

    #[test]
    fn test_parse_trailing_whitespace() {
        let fsn = Fsn::parse("Asthma (disorder)  ");
        assert_eq!(fsn.name, "Asthma");
        assert_eq!(fsn.semantic_tag, Some("disorder"));
    }

    #[test]
    fn test_parse_ignores_inner_group_not_at_end() {
        let fsn = Fsn::parse("Closed (simple) fracture");
        assert_eq!(fsn.name, "Closed (simple) fracture");
        assert!(fsn.semantic_tag.is_none());
    }

    #[test]
    fn test_strip_semantic_tag() {
        assert_eq!(strip_semantic_tag("Asthma (disorder)"), "Asthma");
    }
}
