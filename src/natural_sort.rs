// SPDX-License-Identifier: MPL-2.0
//! Natural ("human") ordering for file names and paths.
//!
//! Each string is split into alternating text and number chunks, always
//! starting with a (possibly empty) text chunk: `img10.png` becomes
//! `["img", 10, ".png"]`. Chunks are compared pairwise, text without regard to
//! case and numbers by magnitude, and a sequence that is a prefix of the other
//! sorts first. So `img2` sorts before `img10`, and `img10.png` before
//! `img.png` because the text chunk `img` is a prefix of `img.png`.
//!
//! Strings that are equal under those rules fall back to plain ordinal order,
//! which keeps sorting deterministic for names such as `A.png` / `a.png` or
//! `img01` / `img1`.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

/// Compares two strings in natural, case-insensitive order.
pub fn compare(a: &str, b: &str) -> Ordering {
    compare_ignoring_case(a, b).then_with(|| a.cmp(b))
}

/// Compares two paths by their full (lossy UTF-8) string form.
pub fn compare_paths(a: &Path, b: &Path) -> Ordering {
    compare(&a.to_string_lossy(), &b.to_string_lossy())
}

/// Sorts paths in place in natural, case-insensitive order.
pub fn sort_paths(paths: &mut [PathBuf]) {
    paths.sort_by(|a, b| compare_paths(a, b));
}

fn compare_ignoring_case(a: &str, b: &str) -> Ordering {
    let mut a_chunks = Chunks::new(a);
    let mut b_chunks = Chunks::new(b);

    loop {
        let ordering = match (a_chunks.next(), b_chunks.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(Chunk::Number(a_digits)), Some(Chunk::Number(b_digits))) => {
                compare_digit_runs(a_digits, b_digits)
            }
            (Some(a_chunk), Some(b_chunk)) => compare_text(a_chunk.as_str(), b_chunk.as_str()),
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chunk<'a> {
    Text(&'a str),
    Number(&'a str),
}

impl<'a> Chunk<'a> {
    fn as_str(self) -> &'a str {
        match self {
            Chunk::Text(s) | Chunk::Number(s) => s,
        }
    }
}

/// Splits a string into alternating text and digit-run chunks.
///
/// The first chunk is always text, empty when the string starts with a digit,
/// so chunks at the same position in two strings have the same kind.
struct Chunks<'a> {
    rest: &'a str,
    expect_text: bool,
}

impl<'a> Chunks<'a> {
    fn new(s: &'a str) -> Self {
        Self {
            rest: s,
            expect_text: true,
        }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let is_digit_run = !self.expect_text;
        let split = self
            .rest
            .find(|c: char| c.is_ascii_digit() != is_digit_run)
            .unwrap_or(self.rest.len());
        let (chunk, rest) = self.rest.split_at(split);
        self.rest = rest;
        self.expect_text = !self.expect_text;

        Some(if is_digit_run {
            Chunk::Number(chunk)
        } else {
            Chunk::Text(chunk)
        })
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Compares digit runs by magnitude without parsing, so arbitrarily long
/// numbers cannot overflow.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut names: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        names.sort_by(|a, b| compare(a, b));
        names
    }

    #[test]
    fn numbers_compare_by_magnitude() {
        assert_eq!(
            sorted(&["img10.png", "img2.png", "img1.png"]),
            vec!["img1.png", "img2.png", "img10.png"]
        );
    }

    #[test]
    fn letters_compare_ignoring_case() {
        assert_eq!(
            sorted(&["C.png", "b.png", "A.png"]),
            vec!["A.png", "b.png", "C.png"]
        );
    }

    #[test]
    fn mixed_case_and_numbers() {
        assert_eq!(
            sorted(&["c10.jpg", "B.JPG", "c2.jpg", "a.jpg"]),
            vec!["a.jpg", "B.JPG", "c2.jpg", "c10.jpg"]
        );
    }

    #[test]
    fn case_only_difference_is_broken_ordinally() {
        assert_eq!(compare("A.png", "a.png"), Ordering::Less);
        assert_eq!(compare("a.png", "A.png"), Ordering::Greater);
        assert_eq!(compare("a.png", "a.png"), Ordering::Equal);
    }

    #[test]
    fn leading_zeros_do_not_change_magnitude() {
        assert_eq!(compare_ignoring_case("img007", "img7"), Ordering::Equal);
        assert_eq!(compare("img007", "img8"), Ordering::Less);
        // Equal magnitude falls back to ordinal order.
        assert_eq!(compare("img01", "img1"), Ordering::Less);
    }

    #[test]
    fn huge_numbers_do_not_overflow() {
        let big = "frame99999999999999999999999999.png";
        let bigger = "frame100000000000000000000000000.png";
        assert_eq!(compare(big, bigger), Ordering::Less);
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(compare("img", "img1"), Ordering::Less);
        assert_eq!(compare("img1", "img1a"), Ordering::Less);
    }

    #[test]
    fn digits_sort_before_letters() {
        assert_eq!(sorted(&["ab", "a1"]), vec!["a1", "ab"]);
    }

    #[test]
    fn shorter_text_chunk_sorts_before_longer_one() {
        assert_eq!(
            sorted(&["img.png", "img10.png"]),
            vec!["img10.png", "img.png"]
        );
        assert_eq!(
            sorted(&["x (1).png", "x1.png"]),
            vec!["x1.png", "x (1).png"]
        );
        assert_eq!(
            sorted(&["photo.jpg", "photo2.jpg", "photo10.jpg"]),
            vec!["photo2.jpg", "photo10.jpg", "photo.jpg"]
        );
    }

    #[test]
    fn leading_number_compares_after_empty_text_chunk() {
        assert_eq!(
            sorted(&["b.png", "10.png", "2.png"]),
            vec!["2.png", "10.png", "b.png"]
        );
    }

    #[test]
    fn chunks_alternate_starting_with_text() {
        assert_eq!(
            Chunks::new("img10.png").collect::<Vec<_>>(),
            vec![Chunk::Text("img"), Chunk::Number("10"), Chunk::Text(".png")]
        );
        assert_eq!(
            Chunks::new("7up").collect::<Vec<_>>(),
            vec![Chunk::Text(""), Chunk::Number("7"), Chunk::Text("up")]
        );
        assert_eq!(Chunks::new("").count(), 0);
    }

    #[test]
    fn sort_paths_orders_full_paths() {
        let mut paths = vec![
            PathBuf::from("/photos/img10.png"),
            PathBuf::from("/photos/IMG3.png"),
            PathBuf::from("/photos/img1.png"),
        ];
        sort_paths(&mut paths);
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/photos/img1.png"),
                PathBuf::from("/photos/IMG3.png"),
                PathBuf::from("/photos/img10.png"),
            ]
        );
    }
}
