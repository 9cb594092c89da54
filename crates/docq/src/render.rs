// SPDX-FileCopyrightText: 2026 Docq Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Display formatting helpers: percentages, byte sizes, excerpts.

/// Formats a [0, 1] score as a percentage with one decimal, e.g. `0.81` ->
/// `81.0%`.
pub fn percent(score: f32) -> String {
    format!("{:.1}%", score * 100.0)
}

/// Badge text for a source citation, e.g. `92.0% match`.
pub fn citation_badge(similarity: f32) -> String {
    format!("{} match", percent(similarity))
}

/// Human-readable byte size with binary units.
pub fn format_bytes(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;
    if bytes >= MIB {
        format!("{:.1} MiB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.1} KiB", bytes as f64 / KIB as f64)
    } else {
        format!("{bytes} B")
    }
}

/// Truncates an excerpt for single-line display.
pub fn excerpt(content: &str, max_chars: usize) -> String {
    let flat = content.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let cut: String = flat.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}
