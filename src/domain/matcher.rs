//! Literal substring matching with two-tier inclusion and highlight ranges.
//!
//! The query is always treated as literal text: every regex metacharacter is
//! escaped before the pattern is compiled, and matching is case-insensitive.
//!
//! # Inclusion Rule
//!
//! Each candidate is tested independently:
//!
//! 1. **Whole-query match**: the candidate contains the entire query as one
//!    contiguous substring. Highlights every occurrence of the query.
//! 2. **Partial-token match**: only when (1) fails for that candidate, the
//!    candidate contains at least one whitespace-separated token of the
//!    query. Highlights every occurrence of any token.
//!
//! Candidates are scanned once, in original order. With
//! [`MatchOrder::Original`] the output keeps that order; the two tiers decide
//! inclusion only. [`MatchOrder::WholeQueryFirst`] stably moves whole-query
//! matches ahead of partial-token matches.
//!
//! # Example
//!
//! ```
//! use autoprompt::domain::{Candidate, MatchOrder, Matcher};
//!
//! let candidates = Candidate::from_texts(["build 1 widget", "run a report"]);
//! let matcher = Matcher::new("WIDGET", MatchOrder::Original)?;
//! let matches = matcher.match_candidates(&candidates);
//!
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].highlight_ranges, vec![(8, 14)]);
//! # Ok::<(), autoprompt::PromptError>(())
//! ```

use crate::domain::candidate::{Candidate, MatchResult};
use crate::domain::error::Result;
use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use std::str::FromStr;

/// Output ordering policy for matched candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchOrder {
    /// Preserve original candidate order.
    #[default]
    Original,
    /// Whole-query matches first, then partial-token matches, each group in
    /// original order.
    WholeQueryFirst,
}

impl FromStr for MatchOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "original" => Ok(Self::Original),
            "whole-query-first" | "whole-first" => Ok(Self::WholeQueryFirst),
            other => Err(format!("unknown match order `{other}`")),
        }
    }
}

/// Escapes a query so it can be embedded in a pattern as literal text.
///
/// Neutralizes `. * + ? ^ $ { } ( ) | [ ] \` and every other character the
/// regex engine treats as special. `/` carries no meaning in this engine and
/// is passed through unchanged.
///
/// ```
/// use autoprompt::domain::escape_pattern;
///
/// assert_eq!(escape_pattern("a.b"), r"a\.b");
/// ```
#[must_use]
pub fn escape_pattern(query: &str) -> String {
    regex::escape(query)
}

/// Compiled matcher for a single query.
///
/// Built once per query change and applied to the full candidate list.
#[derive(Debug, Clone)]
pub struct Matcher {
    /// `None` for the empty query (every candidate matches, unhighlighted).
    whole: Option<Regex>,
    /// Alternation of escaped tokens. `None` when the query has no
    /// non-whitespace tokens.
    tokens: Option<Regex>,
    order: MatchOrder,
}

impl Matcher {
    /// Compiles the whole-query and token patterns for `query`.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Pattern`](crate::PromptError::Pattern) if a
    /// pattern fails to compile. Escaping makes this unreachable for any
    /// input; it is reported rather than panicking.
    pub fn new(query: &str, order: MatchOrder) -> Result<Self> {
        if query.is_empty() {
            return Ok(Self {
                whole: None,
                tokens: None,
                order,
            });
        }

        let whole = Some(build_pattern(&escape_pattern(query))?);

        let escaped_tokens: Vec<String> = query.split_whitespace().map(escape_pattern).collect();
        let tokens = if escaped_tokens.is_empty() {
            None
        } else {
            Some(build_pattern(&format!("(?:{})", escaped_tokens.join("|")))?)
        };

        Ok(Self {
            whole,
            tokens,
            order,
        })
    }

    /// Returns `true` if this matcher was built from the empty query.
    #[must_use]
    pub const fn is_empty_query(&self) -> bool {
        self.whole.is_none()
    }

    /// Applies the matcher to `candidates`, producing ordered match results.
    #[must_use]
    pub fn match_candidates(&self, candidates: &[Candidate]) -> Vec<MatchResult> {
        let _span = tracing::debug_span!(
            "match_candidates",
            total_candidates = candidates.len(),
            order = ?self.order
        )
        .entered();

        let Some(whole) = &self.whole else {
            return candidates
                .iter()
                .cloned()
                .map(MatchResult::unhighlighted)
                .collect();
        };

        let mut results: Vec<MatchResult> = candidates
            .iter()
            .filter_map(|candidate| {
                if whole.is_match(&candidate.text) {
                    return Some(MatchResult {
                        candidate: candidate.clone(),
                        highlight_ranges: find_ranges(whole, &candidate.text),
                        whole_query: true,
                    });
                }

                let tokens = self.tokens.as_ref()?;
                tokens.is_match(&candidate.text).then(|| MatchResult {
                    candidate: candidate.clone(),
                    highlight_ranges: find_ranges(tokens, &candidate.text),
                    whole_query: false,
                })
            })
            .collect();

        if self.order == MatchOrder::WholeQueryFirst {
            // sort_by_key is stable, so each group keeps original order
            results.sort_by_key(|m| !m.whole_query);
        }

        tracing::trace!(matched = results.len(), "candidates matched");
        results
    }
}

/// Convenience wrapper: compiles a [`Matcher`] for `query` and applies it.
///
/// # Errors
///
/// See [`Matcher::new`].
pub fn match_candidates(
    candidates: &[Candidate],
    query: &str,
    order: MatchOrder,
) -> Result<Vec<MatchResult>> {
    Ok(Matcher::new(query, order)?.match_candidates(candidates))
}

fn build_pattern(pattern: &str) -> Result<Regex> {
    Ok(RegexBuilder::new(pattern).case_insensitive(true).build()?)
}

fn find_ranges(pattern: &Regex, text: &str) -> Vec<(usize, usize)> {
    pattern
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn widgets() -> Vec<Candidate> {
        Candidate::from_texts(["build 1 widget", "build 2 widgets", "sell some widgets"])
    }

    fn texts(matches: &[MatchResult]) -> Vec<&str> {
        matches.iter().map(MatchResult::text).collect()
    }

    #[test]
    fn empty_query_returns_everything_unhighlighted() {
        assert!(Matcher::new("", MatchOrder::Original).unwrap().is_empty_query());
        assert!(!Matcher::new(" ", MatchOrder::Original).unwrap().is_empty_query());

        let matches = match_candidates(&widgets(), "", MatchOrder::Original).unwrap();
        assert_eq!(
            texts(&matches),
            vec!["build 1 widget", "build 2 widgets", "sell some widgets"]
        );
        assert!(matches.iter().all(|m| m.highlight_ranges.is_empty()));
    }

    #[test]
    fn whole_query_highlights_literal_substring() {
        let matches = match_candidates(&widgets(), "widget", MatchOrder::Original).unwrap();
        assert_eq!(matches.len(), 3);
        for m in &matches {
            assert!(m.whole_query);
            assert_eq!(m.highlight_ranges.len(), 1);
            let (start, end) = m.highlight_ranges[0];
            assert_eq!(&m.text()[start..end], "widget");
        }
    }

    #[test]
    fn token_fallback_highlights_each_token() {
        let matches = match_candidates(&widgets(), "build wid", MatchOrder::Original).unwrap();
        assert_eq!(
            texts(&matches),
            vec!["build 1 widget", "build 2 widgets", "sell some widgets"]
        );
        assert!(matches.iter().all(|m| !m.whole_query));
        assert_eq!(matches[0].highlight_ranges, vec![(0, 5), (8, 11)]);
        assert_eq!(matches[1].highlight_ranges, vec![(0, 5), (8, 11)]);
        assert_eq!(matches[2].highlight_ranges, vec![(10, 13)]);
    }

    #[test]
    fn whole_query_candidate_skips_token_highlighting() {
        let candidates = Candidate::from_texts(["charm fun", "charm", "nothing"]);
        let matches = match_candidates(&candidates, "charm fun", MatchOrder::Original).unwrap();
        assert_eq!(texts(&matches), vec!["charm fun", "charm"]);
        assert_eq!(matches[0].highlight_ranges, vec![(0, 9)]);
        assert_eq!(matches[1].highlight_ranges, vec![(0, 5)]);
    }

    #[test]
    fn matching_ignores_case() {
        let candidates = Candidate::from_texts(["Restart Service"]);
        let matches = match_candidates(&candidates, "sERVICE", MatchOrder::Original).unwrap();
        assert_eq!(matches[0].highlight_ranges, vec![(8, 15)]);
    }

    #[test]
    fn metacharacters_are_literal() {
        let candidates = Candidate::from_texts(["a.b", "axb", "(x)"]);
        let dot = match_candidates(&candidates, "a.b", MatchOrder::Original).unwrap();
        assert_eq!(texts(&dot), vec!["a.b"]);

        let parens = match_candidates(&candidates, "(x)", MatchOrder::Original).unwrap();
        assert_eq!(texts(&parens), vec!["(x)"]);
    }

    #[test]
    fn whitespace_only_query_has_no_token_fallback() {
        let candidates = Candidate::from_texts(["two words", "single"]);
        let matches = match_candidates(&candidates, " ", MatchOrder::Original).unwrap();
        assert_eq!(texts(&matches), vec!["two words"]);
    }

    #[test]
    fn empty_candidate_list_yields_no_matches() {
        let matches = match_candidates(&[], "anything", MatchOrder::Original).unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn original_order_interleaves_tiers() {
        let candidates = Candidate::from_texts(["fun", "charm fun", "charm"]);
        let matches = match_candidates(&candidates, "charm fun", MatchOrder::Original).unwrap();
        assert_eq!(texts(&matches), vec!["fun", "charm fun", "charm"]);
    }

    #[test]
    fn whole_query_first_is_stable_partition() {
        let candidates = Candidate::from_texts(["fun", "charm fun", "charm", "more charm fun"]);
        let matches =
            match_candidates(&candidates, "charm fun", MatchOrder::WholeQueryFirst).unwrap();
        assert_eq!(
            texts(&matches),
            vec!["charm fun", "more charm fun", "fun", "charm"]
        );
    }

    #[test]
    fn match_order_parses_from_str() {
        assert_eq!("original".parse::<MatchOrder>(), Ok(MatchOrder::Original));
        assert_eq!(
            "Whole-First".parse::<MatchOrder>(),
            Ok(MatchOrder::WholeQueryFirst)
        );
        assert!("ranked".parse::<MatchOrder>().is_err());
    }

    proptest! {
        #[test]
        fn metacharacter_queries_never_fail(query in r"[.*+?^$(){}|\[\]/\\ ]{1,12}") {
            let candidates = Candidate::from_texts(["a.b", "(x)", "[y]", "c:\\d", "x/y"]);
            prop_assert!(match_candidates(&candidates, &query, MatchOrder::Original).is_ok());
        }

        #[test]
        fn inclusion_matches_substring_rule(
            items in proptest::collection::vec("[a-cA-C ]{0,8}", 0..8),
            query in "[a-cA-C ]{1,4}",
        ) {
            let candidates = Candidate::from_texts(items.clone());
            let matches = match_candidates(&candidates, &query, MatchOrder::Original).unwrap();
            let included: Vec<usize> = matches.iter().map(|m| m.candidate.index).collect();

            let lowered_query = query.to_lowercase();
            let tokens: Vec<&str> = lowered_query.split_whitespace().collect();
            let expected: Vec<usize> = items
                .iter()
                .enumerate()
                .filter(|(_, text)| {
                    let lowered = text.to_lowercase();
                    lowered.contains(&lowered_query)
                        || tokens.iter().any(|token| lowered.contains(token))
                })
                .map(|(index, _)| index)
                .collect();

            prop_assert_eq!(included, expected);
        }

        #[test]
        fn ranges_are_sorted_disjoint_and_in_bounds(
            items in proptest::collection::vec("[a-d ]{0,12}", 0..8),
            query in "[a-d ]{1,5}",
        ) {
            let candidates = Candidate::from_texts(items);
            let matches = match_candidates(&candidates, &query, MatchOrder::Original).unwrap();
            for m in &matches {
                let mut previous_end = 0;
                for &(start, end) in &m.highlight_ranges {
                    prop_assert!(start >= previous_end);
                    prop_assert!(start < end);
                    prop_assert!(end <= m.text().len());
                    previous_end = end;
                }
            }
        }
    }
}
