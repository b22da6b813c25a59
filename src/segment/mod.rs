//! Concept segmentation.
//!
//! Splits raw text into [`ConceptSequence`]s: one concept per bullet item when
//! the text carries list markers, otherwise one per sentence. Periods inside a
//! fixed set of abbreviations are shielded so `Dr. Smith` never ends a sentence.
//!
//! [`try_segment`] reports failures; [`segment`] is the degrading wrapper the
//! grading pipeline uses, returning the whole text as one concept instead.

mod error;
mod types;


pub use error::SegmentError;
pub use types::ConceptSequence;

use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::constants::{MIN_CONCEPT_CHARS, MIN_CONCEPT_WORDS};

/// Abbreviations whose periods never end a sentence.
pub const ABBREVIATIONS: [&str; 10] = [
    "Mr.", "Mrs.", "Dr.", "Ph.D.", "e.g.", "i.e.", "etc.", "vs.", "fig.", "eq.",
];

/// Private-use stand-in for a shielded period.
const SHIELDED_PERIOD: char = '\u{E000}';

static MARKER_LINE_RE: OnceLock<Regex> = OnceLock::new();
static LEADING_MARKER_RE: OnceLock<Regex> = OnceLock::new();
static SENTENCE_BREAK_RE: OnceLock<Regex> = OnceLock::new();
static ALPHA_RUN_RE: OnceLock<Regex> = OnceLock::new();

fn marker_line_re() -> &'static Regex {
    MARKER_LINE_RE
        .get_or_init(|| Regex::new(r"^\s*(?:[-•*→]|\d+[).])\s+\S").expect("marker line pattern"))
}

fn leading_marker_re() -> &'static Regex {
    LEADING_MARKER_RE
        .get_or_init(|| Regex::new(r"^(?:\d+[).]|[-•*→])\s+").expect("leading marker pattern"))
}

fn sentence_break_re() -> &'static Regex {
    SENTENCE_BREAK_RE
        .get_or_init(|| Regex::new(r"[.!?]\s+(\p{Lu})").expect("sentence break pattern"))
}

fn alpha_run_re() -> &'static Regex {
    ALPHA_RUN_RE.get_or_init(|| Regex::new(r"[a-zA-Z]{3,}").expect("alpha run pattern"))
}

/// Segments `text`, falling back to the whole (trimmed) text as a single
/// concept when [`try_segment`] fails. Never fails itself.
pub fn segment(text: &str) -> ConceptSequence {
    match try_segment(text) {
        Ok(concepts) => concepts,
        Err(err) => {
            warn!(error = %err, "Segmentation failed, treating whole text as one concept");
            let whole = text.trim();
            if whole.is_empty() {
                ConceptSequence::new()
            } else {
                ConceptSequence::single(whole)
            }
        }
    }
}

/// Segments `text` into concepts.
///
/// Empty or whitespace-only input yields an empty sequence, not an error.
pub fn try_segment(text: &str) -> Result<ConceptSequence, SegmentError> {
    if let Some(offset) = text.find(SHIELDED_PERIOD) {
        return Err(SegmentError::ReservedCharacter {
            codepoint: SHIELDED_PERIOD as u32,
            offset,
        });
    }

    if text.trim().is_empty() {
        return Ok(ConceptSequence::new());
    }

    let shielded = shield_abbreviations(text);
    let fragments = match bullet_fragments(&shielded) {
        Some(items) => {
            debug!(items = items.len(), "Segmenting by list markers");
            items
        }
        None => split_sentences(&normalize_whitespace(&shielded)),
    };

    let concepts: ConceptSequence = fragments
        .iter()
        .map(|fragment| unshield(fragment))
        .map(|fragment| strip_leading_marker(fragment.trim()).trim().to_string())
        .filter(|fragment| is_concept(fragment))
        .collect();

    debug!(
        fragments = fragments.len(),
        concepts = concepts.len(),
        "Segmentation complete"
    );

    Ok(concepts)
}

/// Collapses every whitespace run (newlines included) to one space and trims.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns `true` if `fragment` satisfies the concept filter: at least
/// [`MIN_CONCEPT_CHARS`] characters, a run of three ASCII letters, and more
/// than [`MIN_CONCEPT_WORDS`] words.
pub fn is_concept(fragment: &str) -> bool {
    fragment.chars().count() >= MIN_CONCEPT_CHARS
        && alpha_run_re().is_match(fragment)
        && fragment.split_whitespace().count() > MIN_CONCEPT_WORDS
}

fn shield_abbreviations(text: &str) -> String {
    ABBREVIATIONS.iter().fold(text.to_string(), |acc, abbrev| {
        acc.replace(abbrev, &abbrev.replace('.', &SHIELDED_PERIOD.to_string()))
    })
}

fn unshield(fragment: &str) -> String {
    fragment.replace(SHIELDED_PERIOD, ".")
}

fn strip_leading_marker(fragment: &str) -> &str {
    match leading_marker_re().find(fragment) {
        Some(m) => &fragment[m.end()..],
        None => fragment,
    }
}

/// Splits at `.`, `!` or `?` followed by whitespace and an uppercase letter.
/// The punctuation stays with the preceding sentence.
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for caps in sentence_break_re().captures_iter(text) {
        let (Some(whole), Some(next)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        sentences.push(text[start..whole.start() + 1].to_string());
        start = next.start();
    }

    if start < text.len() {
        sentences.push(text[start..].to_string());
    }

    sentences
}

enum Block<'a> {
    Item(Vec<&'a str>),
    Prose(Vec<&'a str>),
}

/// Groups lines into list items when any line starts with a list marker.
///
/// An item runs from its marker line to the next marker line or blank line.
/// Unmarked text between items is sentence-split. Returns `None` when the text
/// has no list structure at all.
fn bullet_fragments(text: &str) -> Option<Vec<String>> {
    let marker = marker_line_re();
    if !text.lines().any(|line| marker.is_match(line)) {
        return None;
    }

    let mut blocks: Vec<Block<'_>> = Vec::new();
    let mut current: Option<Block<'_>> = None;

    for line in text.lines() {
        if line.trim().is_empty() {
            blocks.extend(current.take());
        } else if marker.is_match(line) {
            blocks.extend(current.take());
            current = Some(Block::Item(vec![line]));
        } else {
            // Unmarked lines continue the open item: wrapped list entries
            // (common in text pulled from PDFs) stay one concept.
            match current.as_mut() {
                Some(Block::Item(lines)) | Some(Block::Prose(lines)) => lines.push(line),
                None => current = Some(Block::Prose(vec![line])),
            }
        }
    }
    blocks.extend(current);

    let fragments = blocks
        .into_iter()
        .flat_map(|block| match block {
            Block::Item(lines) => vec![normalize_whitespace(&lines.join(" "))],
            Block::Prose(lines) => split_sentences(&normalize_whitespace(&lines.join(" "))),
        })
        .collect();

    Some(fragments)
}
