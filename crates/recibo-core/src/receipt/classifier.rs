//! Transcript layout classification.

/// Layout of a receipt transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineLayout {
    /// Column headers followed by grouped quantity/product/price triplets.
    Tabular,
    /// No recognizable headers; requires line-by-line pattern matching.
    Freeform,
}

/// Split a transcript into its non-blank lines.
///
/// Lines keep their original surrounding whitespace; trimming happens at
/// the point of use so the transcript itself is never rewritten.
pub fn transcript_lines(text: &str) -> Vec<&str> {
    text.split('\n').filter(|l| !l.trim().is_empty()).collect()
}

/// Decide whether a transcript is laid out as a tabular block or free-form.
///
/// Header detection is positional and substring-based: a transcript is
/// tabular only when it has at least three lines and either the first
/// line names a quantity column ("cantidad"/"cant") or the second names a
/// product column ("concepto"/"product"). Anything else, including
/// transcripts shorter than three lines, is free-form.
pub fn classify(lines: &[&str]) -> LineLayout {
    if lines.len() >= 3 {
        let first = lines[0].to_lowercase();
        let second = lines[1].to_lowercase();

        if first.contains("cantidad")
            || first.contains("cant")
            || second.contains("concepto")
            || second.contains("product")
        {
            return LineLayout::Tabular;
        }
    }

    LineLayout::Freeform
}
