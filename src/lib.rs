//! orgmatch: org-mode hyperlinks for source-code match reports.
//!
//! This crate is the output side of a semantic-patch / code-matching tool
//! chain: the matching engine hands it positions where a rule matched, and it
//! emits editor-navigable annotations, either a bare `[[view:...][...]]`
//! hyperlink or an org-mode `* TODO` item wrapping one. The public API lets
//! you:
//! - Describe a match location via MatchPosition (file, line, column range).
//! - Build the link string itself (build_link).
//! - Print TODO items or bare links to any writer (print_todo, print_link).
//!
//! Quick example: annotate one match
//!
//! ```
//! use orgmatch::{print_link, Annotation, MatchPosition};
//! let m = vec![MatchPosition::new("a.c", 3, 1, 5)];
//! let mut out = Vec::new();
//! print_link(&mut out, &m, Annotation { message: "bug", ..Default::default() }).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "[[view:a.c::face=ovl-face1::linb=3::colb=1::cole=5][bug]]\n",
//! );
//! ```
//!
//! Quick example: TODO item on stdout
//!
//! ```no_run
//! use orgmatch::{print_todo, Annotation, MatchPosition};
//! let m = vec![MatchPosition::new("src/main.c", 42, 8, 13)];
//! let mut out = std::io::stdout().lock();
//! print_todo(&mut out, &m, Annotation::default()).unwrap();
//! ```
//!
//! Face names ("ovl-face1" etc.) are opaque to this crate and passed through
//! verbatim for the editor side to interpret.

pub mod error;
pub mod org;
pub mod position;

pub use error::OrgError;
pub use org::{Annotation, DEFAULT_FACE, SECONDARY_FACE, build_link, print_link, print_todo};
#[allow(deprecated)]
pub use org::{print_main, print_sec, print_secs};
pub use position::MatchPosition;

// -----------------------
// Tests
// -----------------------
#[cfg(test)]
mod tests {
    use super::*;

    fn pos(file: &str, line: u32, column: u32, column_end: u32) -> Vec<MatchPosition> {
        vec![MatchPosition::new(file, line, column, column_end)]
    }

    #[test]
    fn build_link_exact_format() {
        let m = pos("a.c", 3, 1, 5);
        let link = build_link(&m, "bug", "ovl-face1").unwrap();
        assert_eq!(
            link,
            "[[view:a.c::face=ovl-face1::linb=3::colb=1::cole=5][bug]]"
        );
    }

    #[test]
    fn build_link_is_pure() {
        let m = pos("a.c", 3, 1, 5);
        let first = build_link(&m, "bug", "ovl-face1").unwrap();
        let second = build_link(&m, "bug", "ovl-face1").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn build_link_reads_only_first_position() {
        let mut m = pos("a.c", 3, 1, 5);
        m.push(MatchPosition::new("other.c", 99, 7, 8));
        let link = build_link(&m, "", DEFAULT_FACE).unwrap();
        assert!(link.contains("view:a.c"));
        assert!(!link.contains("other.c"));
    }

    #[test]
    fn build_link_substitutes_verbatim() {
        // No escaping: embedded separators and brackets pass through as-is.
        let m = pos("dir::x/a.c", 3, 1, 5);
        let link = build_link(&m, "msg ]] tail", "my face").unwrap();
        assert_eq!(
            link,
            "[[view:dir::x/a.c::face=my face::linb=3::colb=1::cole=5][msg ]] tail]]"
        );
    }

    #[test]
    fn print_todo_default_annotation() {
        let m = pos("a.c", 3, 1, 5);
        let mut out = Vec::new();
        print_todo(&mut out, &m, Annotation::default()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "* TODO [[view:a.c::face=ovl-face1::linb=3::colb=1::cole=5][]]\n"
        );
    }

    #[test]
    fn print_link_single_line() {
        let m = pos("a.c", 3, 1, 5);
        let mut out = Vec::new();
        print_link(
            &mut out,
            &m,
            Annotation {
                message: "msg",
                ..Default::default()
            },
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "[[view:a.c::face=ovl-face1::linb=3::colb=1::cole=5][msg]]\n"
        );
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn print_output_follows_call_order() {
        let m1 = pos("a.c", 1, 0, 1);
        let m2 = pos("b.c", 2, 0, 1);
        let mut out = Vec::new();
        print_link(&mut out, &m1, Annotation::default()).unwrap();
        print_link(&mut out, &m2, Annotation::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("view:a.c"));
        assert!(lines[1].contains("view:b.c"));
    }
}
