//! Output formatting utilities

use crate::application::{Action, OutputShape, RunConfig, SearchOutcome};
use crate::domain::tags::{SimilarTags, TagSummary};

/// Render a search outcome for standard output
pub fn render(outcome: &SearchOutcome, config: &RunConfig) -> String {
    match outcome {
        SearchOutcome::Files(paths) => format_file_list(paths, config.vim, ""),
        SearchOutcome::Untagged(paths) => {
            format_file_list(paths, config.vim, UNTAGGED_QUICKFIX_TEXT)
        }
        SearchOutcome::Tags {
            summaries,
            untagged_hint,
        } => {
            let mut output = String::new();
            if let Some(count) = untagged_hint {
                output.push_str(&format_untagged_hint(*count));
            }
            if config.action == Action::Summarise {
                output.push_str(&format_tag_summary(summaries, config.numeric));
            } else {
                output.push_str(&format_tag_list(summaries, config.shape, config.numeric));
            }
            output
        }
        SearchOutcome::Similar(similar) => format_similar_tags(similar),
    }
}

/// Quickfix text attached to untagged entries, so the editor jumps to the
/// file without treating it as a match
pub const UNTAGGED_QUICKFIX_TEXT: &str = "Ignore this message";

/// Format a list of file paths, one per line.
///
/// With `vim`, each line is a `path:1:<text>` quickfix entry.
pub fn format_file_list(paths: &[String], vim: bool, text: &str) -> String {
    let mut output = String::new();
    for path in paths {
        if vim {
            output.push_str(&format!("{}:1:{}\n", path, text));
        } else {
            output.push_str(&format!("{}\n", path));
        }
    }
    output
}

fn tag_title(summary: &TagSummary, numeric: bool) -> String {
    if numeric {
        format!("{} - {}", summary.tag, summary.count)
    } else {
        summary.tag.clone()
    }
}

/// Format a flat tag listing.
pub fn format_tag_list(summaries: &[TagSummary], shape: OutputShape, numeric: bool) -> String {
    if summaries.is_empty() {
        return "No tags found\n".to_string();
    }

    let separator = match shape {
        OutputShape::Compact => ", ",
        OutputShape::Long => "\n",
    };
    let titles: Vec<String> = summaries.iter().map(|s| tag_title(s, numeric)).collect();
    format!("{}\n", titles.join(separator))
}

/// Format a grouped listing: each tag followed by its indented files
pub fn format_tag_summary(summaries: &[TagSummary], numeric: bool) -> String {
    if summaries.is_empty() {
        return "No tags found\n".to_string();
    }

    let mut output = String::new();
    for summary in summaries {
        output.push_str(&tag_title(summary, numeric));
        output.push('\n');
        for file in summary.files.iter().flatten() {
            output.push_str(&format!("\t{}\n", file));
        }
    }
    output
}

pub fn format_untagged_hint(count: usize) -> String {
    format!(
        "{} untagged files. View with `tagsearch --untagged`.\n\n",
        count
    )
}

pub fn format_similar_tags(similar: &[SimilarTags]) -> String {
    if similar.is_empty() {
        return String::new();
    }

    let mut output = String::from("Similar tags:\n");
    for pair in similar {
        output.push_str(&format!("{}\n", pair));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::RunFlags;
    use crate::domain::tags::SimilarityKind;
    use crate::infrastructure::Config;
    use std::path::PathBuf;

    fn summary(tag: &str, count: usize, files: Option<&[&str]>) -> TagSummary {
        TagSummary {
            tag: tag.to_string(),
            count,
            files: files.map(|f| f.iter().map(|s| s.to_string()).collect()),
        }
    }

    fn config(flags: RunFlags) -> RunConfig {
        RunConfig::resolve(PathBuf::from("."), flags, &Config::default())
    }

    #[test]
    fn test_format_file_list() {
        let paths = vec!["a.md".to_string(), "sub/b.md".to_string()];
        assert_eq!(format_file_list(&paths, false, ""), "a.md\nsub/b.md\n");
        assert_eq!(format_file_list(&paths, true, ""), "a.md:1:\nsub/b.md:1:\n");
        assert_eq!(format_file_list(&paths, false, "note"), "a.md\nsub/b.md\n");
        assert_eq!(format_file_list(&[], false, ""), "");
    }

    #[test]
    fn test_format_tag_list_shapes() {
        let tags = vec![summary("alpha", 2, None), summary("beta", 1, None)];
        assert_eq!(
            format_tag_list(&tags, OutputShape::Compact, false),
            "alpha, beta\n"
        );
        assert_eq!(
            format_tag_list(&tags, OutputShape::Long, false),
            "alpha\nbeta\n"
        );
        assert_eq!(
            format_tag_list(&tags, OutputShape::Compact, true),
            "alpha - 2, beta - 1\n"
        );
    }

    #[test]
    fn test_format_empty_tag_list() {
        assert_eq!(
            format_tag_list(&[], OutputShape::Compact, false),
            "No tags found\n"
        );
    }

    #[test]
    fn test_format_tag_summary() {
        let tags = vec![
            summary("alpha", 2, Some(&["A", "B"][..])),
            summary("beta", 1, Some(&["A"][..])),
        ];
        assert_eq!(
            format_tag_summary(&tags, false),
            "alpha\n\tA\n\tB\nbeta\n\tA\n"
        );
        assert!(format_tag_summary(&tags, true).starts_with("alpha - 2\n"));
    }

    #[test]
    fn test_format_similar_tags() {
        assert_eq!(format_similar_tags(&[]), "");
        let similar = vec![SimilarTags {
            kind: SimilarityKind::Plural,
            first: "idea".to_string(),
            second: "ideas".to_string(),
        }];
        assert_eq!(
            format_similar_tags(&similar),
            "Similar tags:\nPLURAL - idea & ideas\n"
        );
    }

    #[test]
    fn test_render_listing_with_hint() {
        let outcome = SearchOutcome::Tags {
            summaries: vec![summary("alpha", 1, None)],
            untagged_hint: Some(3),
        };
        let output = render(&outcome, &config(RunFlags::default()));
        assert_eq!(
            output,
            "3 untagged files. View with `tagsearch --untagged`.\n\nalpha\n"
        );
    }

    #[test]
    fn test_render_untagged_vim() {
        let outcome = SearchOutcome::Untagged(vec!["x.md".to_string()]);
        let output = render(
            &outcome,
            &config(RunFlags {
                vim: true,
                untagged: true,
                ..Default::default()
            }),
        );
        assert_eq!(output, "x.md:1:Ignore this message\n");
    }

    #[test]
    fn test_render_matched_files_vim() {
        let outcome = SearchOutcome::Files(vec!["x.md".to_string()]);
        let output = render(
            &outcome,
            &config(RunFlags {
                vim: true,
                keywords: vec!["alpha".to_string()],
                ..Default::default()
            }),
        );
        assert_eq!(output, "x.md:1:\n");
    }
}
