// ============================================================
// Layer 4 — Text Normalizer
// ============================================================
// Cleans raw example text before it is handed to a classifier.
//
// Why do we need to clean text?
//   Raw review sentences contain punctuation glued to words
//   ("great,movie!"), mixed case, and stray characters. A
//   word-level classifier sees "movie" and "movie!" as two
//   different tokens unless punctuation is split off.
//
// Cleaning steps (applied in order):
//   1. Replace every character outside the whitelist
//      A-Z a-z 0-9 ( ) , ! ? ' `    with a space
//   2. Lowercase — this MUST happen before the contraction
//      pass, or "DON'T" survives the first pass intact and
//      only gets split on the second
//   3. Split common contractions off their stem:
//      "don't" → "do n't", "it's" → "it 's", etc.
//   4. Pad , ! ( ) ? with surrounding spaces so they
//      become standalone tokens
//   5. Collapse whitespace runs into a single space, trim
//
// The whole transformation is a pure function, total over all
// strings, and idempotent: cleaning already-clean text changes
// nothing. The regexes are compiled once via lazy_static.
//
// Reference: Rust Book §8 (Strings in Rust)
//            regex crate documentation

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Everything outside the token whitelist becomes a space
    static ref NON_TOKEN_RE: Regex = Regex::new(r"[^A-Za-z0-9(),!?'`]").unwrap();
    /// Contraction suffixes that get split into their own token
    static ref CONTRACTION_RE: Regex = Regex::new(r"('s|'ve|n't|'re|'d|'ll)").unwrap();
    /// Punctuation that becomes a standalone token
    static ref PUNCT_RE: Regex = Regex::new(r"([,!?()])").unwrap();
    /// Two or more whitespace characters in a row
    static ref MULTI_WS_RE: Regex = Regex::new(r"\s{2,}").unwrap();
}

/// Normalises raw example text into lowercase, punctuation-spaced
/// token form.
pub struct Normalizer;

impl Normalizer {
    /// Create a new Normalizer instance
    pub fn new() -> Self {
        Self
    }

    /// Clean a raw string for downstream classification.
    /// Takes a &str and returns an owned String.
    pub fn clean(&self, text: &str) -> String {
        // ── Step 1: strip everything outside the whitelist ───────────────────
        let step1 = NON_TOKEN_RE.replace_all(text, " ");

        // ── Step 2: lowercase ─────────────────────────────────────────────────
        // The contraction pattern only matches lowercase suffixes,
        // so lowercasing must come first or "DON'T" would need a
        // second pass to split.
        let step2 = step1.to_lowercase();

        // ── Step 3: split contractions ────────────────────────────────────────
        // "don't" contains "n't" → "do n't". Re-running this on
        // already-split text only inserts an extra space, which
        // step 5 collapses again — that's what keeps clean() idempotent.
        let step3 = CONTRACTION_RE.replace_all(&step2, " $1");

        // ── Step 4: pad punctuation into standalone tokens ────────────────────
        let step4 = PUNCT_RE.replace_all(&step3, " $1 ");

        // ── Step 5: collapse whitespace runs, then trim ───────────────────────
        MULTI_WS_RE.replace_all(&step4, " ").trim().to_string()
    }
}

/// Implement Default so Normalizer can be created with Normalizer::default()
impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
