//! Terminal rendering of analysis results and history.

use std::fmt::Write;

use moodscope_core::{AnalysisResult, Sentiment};
use moodscope_storage::HistoryRecord;

/// Width of the confidence bar in cells.
pub const BAR_WIDTH: usize = 20;

/// Face glyph for a sentiment.
pub fn sentiment_glyph(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "😊",
        Sentiment::Negative => "☹️",
        Sentiment::Neutral | Sentiment::Mixed => "😐",
    }
}

/// Horizontal bar filled in proportion to `confidence` (0.0 to 1.0).
pub fn confidence_bar(confidence: f64, width: usize) -> String {
    let filled = (confidence.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Renders a full analysis for the terminal.
pub fn render_result(result: &AnalysisResult) -> String {
    let stats = &result.stats;
    let readability = stats
        .readability_level
        .map(|level| format!("{} ({:.1})", level.label(), stats.readability_score))
        .unwrap_or_else(|| "N/A".to_string());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {}",
        sentiment_glyph(result.sentiment),
        result.sentiment.label()
    );
    let _ = writeln!(
        out,
        "Confidence: {} {}%",
        confidence_bar(result.confidence, BAR_WIDTH),
        result.confidence_percent()
    );
    let _ = writeln!(
        out,
        "Hits: {} positive, {} negative",
        result.positive_hits, result.negative_hits
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Words:           {}", stats.word_count);
    let _ = writeln!(out, "Characters:      {}", stats.char_count);
    let _ = writeln!(out, "Sentences:       {}", stats.sentence_count);
    let _ = writeln!(out, "Unique words:    {}", stats.unique_word_count);
    let _ = writeln!(out, "Emoji:           {}", stats.emoji_count);
    let _ = writeln!(out, "Avg word length: {:.2}", stats.avg_word_length);
    let _ = writeln!(out, "Diversity:       {:.2}", stats.vocabulary_diversity);
    let _ = write!(out, "Readability:     {}", readability);
    out
}

/// Renders history records, one per line, newest first.
pub fn render_history(records: &[HistoryRecord]) -> String {
    if records.is_empty() {
        return "No history yet.".to_string();
    }

    records
        .iter()
        .map(|record| {
            format!(
                "{}  {} {:>3}%  {}",
                record
                    .created_at
                    .with_timezone(&chrono::Local)
                    .format("%Y-%m-%d %H:%M:%S"),
                sentiment_glyph(record.sentiment),
                (record.confidence * 100.0).round() as u8,
                record.preview
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
