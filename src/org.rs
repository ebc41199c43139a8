//! Org-mode link construction and printing.
//!
//! `build_link` is the pure core: it formats the first position of a match
//! into a `[[view:...][...]]` hyperlink understood by the editor side. The
//! `print_*` functions write exactly one line per call to the injected sink,
//! in call order. Field values are substituted verbatim; no escaping, and the
//! face name is passed through uninterpreted.

use std::io::Write;

use crate::error::OrgError;
use crate::position::{self, MatchPosition};

/// Default highlight face for the primary entry points.
pub const DEFAULT_FACE: &str = "ovl-face1";

/// Face conventionally passed to the deprecated secondary entry points.
pub const SECONDARY_FACE: &str = "ovl-face2";

/// Message and face attached to a link.
///
/// `Default` carries the documented defaults (empty message, `DEFAULT_FACE`),
/// so callers override only what they need:
///
/// ```
/// # use orgmatch::Annotation;
/// let ann = Annotation { message: "bug", ..Default::default() };
/// assert_eq!(ann.face, "ovl-face1");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Annotation<'a> {
    pub message: &'a str,
    pub face: &'a str,
}

impl Default for Annotation<'_> {
    fn default() -> Self {
        Self {
            message: "",
            face: DEFAULT_FACE,
        }
    }
}

/// Build the hyperlink string for the first position of `positions`.
///
/// The result always carries five `::`-delimited fields inside the first
/// bracket pair, then the message in the second:
/// `[[view:FILE::face=FACE::linb=LINE::colb=COL::cole=COL_END][MESSAGE]]`.
/// Identical inputs produce byte-identical output.
pub fn build_link(
    positions: &[MatchPosition],
    message: &str,
    face: &str,
) -> Result<String, OrgError> {
    let p = position::first(positions)?;
    Ok(format!(
        "[[view:{}::face={}::linb={}::colb={}::cole={}][{}]]",
        p.file, face, p.line, p.column, p.column_end, message
    ))
}

/// Write one `* TODO <link>` line for `positions`.
pub fn print_todo<W: Write>(
    out: &mut W,
    positions: &[MatchPosition],
    annotation: Annotation,
) -> Result<(), OrgError> {
    let link = build_link(positions, annotation.message, annotation.face)?;
    writeln!(out, "* TODO {}", link)?;
    Ok(())
}

/// Write one bare link line for `positions`.
pub fn print_link<W: Write>(
    out: &mut W,
    positions: &[MatchPosition],
    annotation: Annotation,
) -> Result<(), OrgError> {
    let link = build_link(positions, annotation.message, annotation.face)?;
    writeln!(out, "{}", link)?;
    Ok(())
}

/// Legacy TODO item: composes the message `"<message> <file>::<line>"` from
/// the first position, then emits the TODO form with the given face
/// (conventionally [`SECONDARY_FACE`]).
#[deprecated(note = "legacy report format; use `print_todo`")]
pub fn print_main<W: Write>(
    out: &mut W,
    message: &str,
    positions: &[MatchPosition],
    face: &str,
) -> Result<(), OrgError> {
    let p = position::first(positions)?;
    let composed = format!("{} {}::{}", message, p.file, p.line);
    print_todo(
        out,
        positions,
        Annotation {
            message: &composed,
            face,
        },
    )
}

/// Legacy alias for the bare link form.
#[deprecated(note = "use `print_link`")]
pub fn print_sec<W: Write>(
    out: &mut W,
    message: &str,
    positions: &[MatchPosition],
    face: &str,
) -> Result<(), OrgError> {
    print_link(out, positions, Annotation { message, face })
}

/// Legacy multi-match form: one bare link line per element of `matches`, in
/// input order, all sharing the same message and face. An empty sequence
/// writes nothing; the first failure stops the loop.
#[deprecated(note = "iterate `print_link` instead")]
pub fn print_secs<W, M>(
    out: &mut W,
    message: &str,
    matches: &[M],
    face: &str,
) -> Result<(), OrgError>
where
    W: Write,
    M: AsRef<[MatchPosition]>,
{
    for m in matches {
        print_link(out, m.as_ref(), Annotation { message, face })?;
    }
    Ok(())
}
