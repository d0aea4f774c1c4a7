use crate::analysis::Analysis;
use std::io::{self, Write};

pub fn write_report<W: Write>(out: &mut W, analysis: &Analysis) -> io::Result<()> {
    for segment in &analysis.segments {
        writeln!(out, "Segment {}: {}", segment.position, segment.segment)?;
        writeln!(out, "Top {} frequent letters:", analysis.top_n)?;

        for (rank, suggestion) in segment.suggestions.iter().enumerate() {
            writeln!(
                out,
                "{}. Letter: {} | Frequency: {} | Offset (Suggested letter for key index {}): {}",
                rank + 1,
                suggestion.letter,
                suggestion.count,
                segment.position,
                suggestion.key_letter
            )?;
        }

        writeln!(out)?;
    }

    writeln!(out, "Most likely key: {}", analysis.key)?;
    writeln!(out, "Decryption attempt using most likely key: {}", analysis.decoded)
}
