//! Note display formatting
//!
//! Formats the notes listing as a table of names and tags.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::NoteSummary;

#[derive(Tabled)]
struct NoteRow {
    #[tabled(rename = "Note")]
    name: String,
    #[tabled(rename = "Tags")]
    tags: String,
}

impl From<&NoteSummary> for NoteRow {
    fn from(summary: &NoteSummary) -> Self {
        Self {
            name: summary.name.clone(),
            tags: summary.tags.join(", "),
        }
    }
}

/// Format notes and their tags as a table
pub fn format_note_list(notes: &[NoteSummary]) -> String {
    if notes.is_empty() {
        return "No notes found.\n".to_string();
    }

    let rows: Vec<NoteRow> = notes.iter().map(NoteRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::psql());

    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        assert_eq!(format_note_list(&[]), "No notes found.\n");
    }

    #[test]
    fn test_table_contents() {
        let notes = vec![
            NoteSummary {
                name: "hello_world".into(),
                tags: vec!["foo".into(), "bar".into()],
            },
            NoteSummary {
                name: "untagged".into(),
                tags: vec![],
            },
        ];

        let output = format_note_list(&notes);
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].contains("Note"));
        assert!(lines[0].contains("Tags"));
        assert!(output.contains("hello_world"));
        assert!(output.contains("foo, bar"));
        assert!(output.contains("untagged"));
    }
}
