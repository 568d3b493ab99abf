use chrono::NaiveDate;

use super::ReportRenderer;

/// GitHub-flavoured Markdown.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownRenderer;

fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|")
}

impl ReportRenderer for MarkdownRenderer {
    fn format_name(&self) -> &'static str {
        "markdown"
    }

    fn extension(&self) -> &'static str {
        "md"
    }

    fn title(&self, out: &mut String, title: &str, generated_on: Option<NaiveDate>) {
        out.push_str(&format!("# {title}\n\n"));
        if let Some(date) = generated_on {
            out.push_str(&format!("_Generated on {}_\n\n", date.format("%Y-%m-%d")));
        }
    }

    fn heading(&self, out: &mut String, heading: &str) {
        out.push_str(&format!("## {heading}\n\n"));
    }

    fn paragraph(&self, out: &mut String, text: &str) {
        out.push_str(text);
        out.push_str("\n\n");
    }

    fn key_values(&self, out: &mut String, pairs: &[(String, String)]) {
        for (key, value) in pairs {
            out.push_str(&format!("- **{key}:** {value}\n"));
        }
        out.push('\n');
    }

    fn table(&self, out: &mut String, headers: &[String], rows: &[Vec<String>]) {
        let header: Vec<String> = headers.iter().map(|h| escape_cell(h)).collect();
        out.push_str(&format!("| {} |\n", header.join(" | ")));
        out.push_str(&format!("|{}\n", "---|".repeat(headers.len())));
        for row in rows {
            let cells: Vec<String> = row.iter().map(|c| escape_cell(c)).collect();
            out.push_str(&format!("| {} |\n", cells.join(" | ")));
        }
        out.push('\n');
    }

    fn bullets(&self, out: &mut String, items: &[String]) {
        for item in items {
            out.push_str(&format!("- {item}\n"));
        }
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{Report, Section};

    #[test]
    fn test_markdown_layout() {
        let report = Report {
            title: "Ratio analysis".into(),
            generated_on: None,
            sections: vec![Section::new("Diagnosis")
                .table(
                    &["Indicator", "Trend"],
                    vec![vec!["ROA (%)".into(), "Improved".into()]],
                )
                .bullets(vec!["Refinance 30% of short-term debt".into()])],
        };
        let md = MarkdownRenderer.render(&report);
        assert!(md.starts_with("# Ratio analysis\n\n## Diagnosis\n\n"));
        assert!(md.contains("| Indicator | Trend |\n|---|---|\n| ROA (%) | Improved |\n"));
        assert!(md.contains("- Refinance 30% of short-term debt\n"));
        assert!(!md.contains("Generated"));
    }

    #[test]
    fn test_pipes_in_cells_are_escaped() {
        assert_eq!(escape_cell("a|b"), "a\\|b");
    }
}
