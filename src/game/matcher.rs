//! Answer matching for free-text player names
//!
//! Accepts an answer when it matches any candidate name ignoring case,
//! whitespace variation, and a single trailing generational suffix
//! (Jr/Sr/II/III/IV/V, with or without a period). Deliberately narrow
//! beyond that: no diacritic folding, no hyphen variants, no nicknames.

/// Suffix tokens stripped during relaxed comparison, lowercase.
const GENERATIONAL_SUFFIXES: [&str; 8] = ["jr", "jr.", "sr", "sr.", "ii", "iii", "iv", "v"];

/// Trim and collapse internal whitespace runs to a single space.
pub fn normalize(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Drop one trailing suffix token, if present. A bare suffix with nothing
/// before it is left alone, and stripping never cascades.
fn strip_suffix(name: &str) -> &str {
    if let Some((head, last)) = name.rsplit_once(' ') {
        if GENERATIONAL_SUFFIXES.contains(&last) {
            return head;
        }
    }
    name
}

/// Case-insensitive match of a user answer against one candidate name.
/// Two comparisons only: as typed, then with one trailing suffix stripped
/// from both sides. Mixed forms (one side stripped, the other not) do not
/// match.
pub fn is_match(user_answer: &str, candidate_name: &str) -> bool {
    let u = normalize(user_answer).to_lowercase();
    let c = normalize(candidate_name).to_lowercase();
    if u.is_empty() || c.is_empty() {
        return false;
    }
    u == c || strip_suffix(&u) == strip_suffix(&c)
}

/// True iff the answer matches at least one candidate name.
/// An empty candidate set never matches.
pub fn matches_any<S: AsRef<str>>(user_answer: &str, candidate_names: &[S]) -> bool {
    candidate_names
        .iter()
        .any(|name| is_match(user_answer, name.as_ref()))
}
