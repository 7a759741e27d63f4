//! # Filtered List
//!
//! A static list of people narrowed by a live search term.
//!
//! Matching is a case-sensitive substring test on the name. The filtered
//! indices are cached and only recomputed when the term or the source list
//! changes; the cache is purely an optimization, `filter_by_name` is the
//! reference behavior.

use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: u32,
    pub name: String,
}

impl Person {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

pub const DEFAULT_NAMES: [&str; 4] = ["Alice", "Bob", "Charlie", "David"];

/// Builds a list with 1-based ids from plain names.
pub fn people_from_names<S: AsRef<str>>(names: &[S]) -> Vec<Person> {
    names
        .iter()
        .zip(1u32..)
        .map(|(name, id)| Person::new(id, name.as_ref()))
        .collect()
}

pub fn default_people() -> Vec<Person> {
    people_from_names(&DEFAULT_NAMES)
}

/// Every person whose name contains `term`. An empty term matches all.
pub fn filter_by_name<'a>(people: &'a [Person], term: &str) -> Vec<&'a Person> {
    people.iter().filter(|p| p.name.contains(term)).collect()
}

struct Memo {
    term: String,
    revision: u64,
    indices: Vec<usize>,
}

/// Source list + search term with a memoized filtered view.
///
/// The view is rebuilt when the term or the source list changes, so reads
/// (`visible`, `shown`) never run the filter. The app builds its source list
/// once from config; `set_people` is for callers that swap it at runtime.
pub struct FilterList {
    people: Vec<Person>,
    term: String,
    revision: u64,
    memo: Memo,
    recomputations: usize,
}

impl FilterList {
    pub fn new(people: Vec<Person>) -> Self {
        let mut list = Self {
            people,
            term: String::new(),
            revision: 0,
            memo: Memo {
                term: String::new(),
                revision: 0,
                indices: Vec::new(),
            },
            recomputations: 0,
        };
        list.recompute();
        list
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
        self.refresh();
    }

    pub fn set_people(&mut self, people: Vec<Person>) {
        self.people = people;
        self.revision += 1;
        self.refresh();
    }

    /// Number of times the filter actually ran.
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }

    /// The filtered view for the current term.
    pub fn visible(&self) -> Vec<&Person> {
        self.memo
            .indices
            .iter()
            .filter_map(|&i| self.people.get(i))
            .collect()
    }

    /// How many people match the current term.
    pub fn shown(&self) -> usize {
        self.memo.indices.len()
    }

    fn refresh(&mut self) {
        if self.memo.revision != self.revision || self.memo.term != self.term {
            self.recompute();
        }
    }

    fn recompute(&mut self) {
        let indices = self
            .people
            .iter()
            .enumerate()
            .filter(|(_, p)| p.name.contains(self.term.as_str()))
            .map(|(i, _)| i)
            .collect::<Vec<_>>();
        debug!(
            "Filter recomputed: term={:?}, {} of {} match",
            self.term,
            indices.len(),
            self.people.len()
        );
        self.recomputations += 1;
        self.memo = Memo {
            term: self.term.clone(),
            revision: self.revision,
            indices,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(people: &[&Person]) -> Vec<String> {
        people.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_empty_term_matches_all() {
        let people = default_people();
        assert_eq!(filter_by_name(&people, "").len(), 4);
    }

    #[test]
    fn test_substring_match_is_case_sensitive() {
        let people = default_people();
        assert_eq!(names(&filter_by_name(&people, "li")), vec!["Alice", "Charlie"]);
        assert!(filter_by_name(&people, "alice").is_empty());
        assert_eq!(names(&filter_by_name(&people, "A")), vec!["Alice"]);
    }

    #[test]
    fn test_filter_matches_exact_subset_for_all_terms() {
        let people = default_people();
        for term in ["", "a", "e", "Bo", "vid", "x", "Charlie", "Charlies"] {
            let got = filter_by_name(&people, term);
            let expected: Vec<&Person> =
                people.iter().filter(|p| p.name.contains(term)).collect();
            assert_eq!(got, expected, "term {term:?}");
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let people = default_people();
        for term in ["", "a", "li", "D", "zz"] {
            let once: Vec<Person> =
                filter_by_name(&people, term).into_iter().cloned().collect();
            let twice: Vec<Person> =
                filter_by_name(&once, term).into_iter().cloned().collect();
            assert_eq!(once, twice, "term {term:?}");
        }
    }

    #[test]
    fn test_people_from_names_assigns_ids() {
        let people = people_from_names(&["Zed", "Yara"]);
        assert_eq!(people, vec![Person::new(1, "Zed"), Person::new(2, "Yara")]);
    }

    #[test]
    fn test_visible_is_memoized_on_term() {
        let mut list = FilterList::new(default_people());
        assert_eq!(list.recomputations(), 1);

        list.set_term("a");
        assert_eq!(names(&list.visible()), vec!["Charlie", "David"]);
        assert_eq!(names(&list.visible()), vec!["Charlie", "David"]);
        assert_eq!(list.shown(), 2);
        assert_eq!(list.recomputations(), 2);

        // Same term again does not invalidate
        list.set_term("a");
        list.visible();
        assert_eq!(list.recomputations(), 2);

        list.set_term("Al");
        assert_eq!(names(&list.visible()), vec!["Alice"]);
        assert_eq!(list.recomputations(), 3);
    }

    #[test]
    fn test_visible_recomputes_when_source_changes() {
        let mut list = FilterList::new(default_people());
        list.set_term("S");
        assert!(list.visible().is_empty());
        list.set_people(people_from_names(&["Eve", "Steve"]));
        assert_eq!(names(&list.visible()), vec!["Steve"]);
        assert_eq!(list.shown(), 1);
        assert_eq!(list.recomputations(), 3);
    }
}
