use chrono::NaiveDate;

use super::{column_widths, ReportRenderer};

const RULE_WIDTH: usize = 72;

/// Fixed-width plain text, suitable for a terminal or a `.txt` export.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextRenderer;

impl ReportRenderer for PlainTextRenderer {
    fn format_name(&self) -> &'static str {
        "text"
    }

    fn extension(&self) -> &'static str {
        "txt"
    }

    fn title(&self, out: &mut String, title: &str, generated_on: Option<NaiveDate>) {
        out.push_str(&"=".repeat(RULE_WIDTH));
        out.push('\n');
        out.push_str(&title.to_uppercase());
        out.push('\n');
        if let Some(date) = generated_on {
            out.push_str(&format!("Generated on {}\n", date.format("%Y-%m-%d")));
        }
        out.push_str(&"=".repeat(RULE_WIDTH));
        out.push('\n');
    }

    fn heading(&self, out: &mut String, heading: &str) {
        out.push('\n');
        out.push_str(heading);
        out.push('\n');
        out.push_str(&"-".repeat(heading.chars().count()));
        out.push_str("\n\n");
    }

    fn paragraph(&self, out: &mut String, text: &str) {
        out.push_str(text);
        out.push_str("\n\n");
    }

    fn key_values(&self, out: &mut String, pairs: &[(String, String)]) {
        let width = pairs.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
        for (key, value) in pairs {
            out.push_str(&format!("  {key:<width$} : {value}\n"));
        }
        out.push('\n');
    }

    fn table(&self, out: &mut String, headers: &[String], rows: &[Vec<String>]) {
        let widths = column_widths(headers, rows);
        let line = |cells: &[String]| {
            let padded: Vec<String> = cells
                .iter()
                .enumerate()
                .map(|(i, c)| format!("{c:<w$}", w = widths[i]))
                .collect();
            format!("  {}\n", padded.join(" | ").trim_end())
        };
        out.push_str(&line(headers));
        let total: usize = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);
        out.push_str(&format!("  {}\n", "-".repeat(total)));
        for row in rows {
            out.push_str(&line(row));
        }
        out.push('\n');
    }

    fn bullets(&self, out: &mut String, items: &[String]) {
        for item in items {
            out.push_str(&format!("  * {item}\n"));
        }
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{Report, Section};

    #[test]
    fn test_plain_text_layout() {
        let report = Report {
            title: "Ratio analysis".into(),
            generated_on: NaiveDate::from_ymd_opt(2024, 12, 31),
            sections: vec![Section::new("Liquidity")
                .key_values([("Current ratio", "2.33"), ("Cash ratio", "0.09")])
                .table(
                    &["Ratio", "Prior", "Current"],
                    vec![vec!["Current".into(), "2.50".into(), "2.33".into()]],
                )],
        };
        let text = PlainTextRenderer.render(&report);
        assert!(text.contains("RATIO ANALYSIS"));
        assert!(text.contains("Generated on 2024-12-31"));
        assert!(text.contains("Liquidity\n---------"));
        assert!(text.contains("  Current ratio : 2.33"));
        assert!(text.contains("  Cash ratio    : 0.09"));
        assert!(text.contains("  Ratio   | Prior | Current"));
        assert!(text.contains("  Current | 2.50  | 2.33"));
    }
}
