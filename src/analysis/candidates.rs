//! Candidate filtering over tagged tokens.
//!
//! Adjectives only become candidates when the lexicon knows them; nouns
//! are taken as-is.

use crate::lexicon::Lexicon;
use crate::models::TaggedToken;

/// True for any Penn adjective tag (`JJ`, `JJR`, `JJS`).
pub fn is_adjective_tag(tag: &str) -> bool {
    tag.starts_with("JJ")
}

/// True for any Penn noun tag (`NN`, `NNS`, `NNP`, `NNPS`).
pub fn is_noun_tag(tag: &str) -> bool {
    tag.starts_with("NN")
}

/// Adjectives present in either lexicon, in sentence order.
pub fn adjective_candidates<'a>(
    tokens: &'a [TaggedToken],
    lexicon: &Lexicon,
) -> Vec<&'a TaggedToken> {
    tokens
        .iter()
        .filter(|t| is_adjective_tag(&t.tag) && lexicon.contains(&t.surface))
        .collect()
}

/// Nouns of any subtype, in sentence order.
pub fn noun_candidates(tokens: &[TaggedToken]) -> Vec<&TaggedToken> {
    tokens.iter().filter(|t| is_noun_tag(&t.tag)).collect()
}
