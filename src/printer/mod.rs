//! Console report rendering (plain or owo-colors).

use std::fmt::{self, Debug};

use owo_colors::OwoColorize;

use crate::stats::Summary;

/// Number of ids shown per outcome category.
pub const SAMPLE_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportPrinter {
    pub color: bool,
}

impl ReportPrinter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn print(&self, summary: &Summary) {
        print!("{}", self.render(summary));
    }

    pub fn render(&self, summary: &Summary) -> String {
        let mut out = String::new();
        out.push_str(&self.paint("=== Evaluation Statistics ===", "bold"));
        out.push_str("\n\n");

        for (context, counts) in &summary.counts {
            out.push_str(&format!("Evaluation Context: {}\n", self.paint(context, "cyan")));
            out.push_str(&format!("  Total     : {}\n", counts.total));
            out.push_str(&format!("  Correct   : {}\n", counts.correct));
            out.push_str(&format!("  Incorrect : {}\n", counts.incorrect));
            out.push_str(&format!("  Errors    : {}\n", counts.error));

            if let Some(ids) = summary.ids.get(context) {
                if !ids.correct.is_empty() {
                    let line = format!("    ✓ Correct IDs (sample): {}", sample(&ids.correct));
                    out.push_str(&self.paint(&line, "green"));
                    out.push('\n');
                }
                if !ids.incorrect.is_empty() {
                    let line = format!("    ✗ Incorrect IDs (sample): {}", sample(&ids.incorrect));
                    out.push_str(&self.paint(&line, "yellow"));
                    out.push('\n');
                }
                if !ids.error.is_empty() {
                    let errors: Vec<_> = ids
                        .error
                        .iter()
                        .map(|(db, q, msg)| (db.as_str(), q.as_str(), Message(msg.as_deref())))
                        .collect();
                    let line = format!("    ! Error IDs (sample): {}", sample(&errors));
                    out.push_str(&self.paint(&line, "red"));
                    out.push('\n');
                }
            }
            out.push('\n');
        }
        out
    }

    fn paint(&self, text: &str, style: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        match style {
            "bold" => format!("{}", text.bold()),
            "cyan" => format!("{}", text.cyan()),
            "green" => format!("{}", text.green()),
            "yellow" => format!("{}", text.yellow()),
            "red" => format!("{}", text.red()),
            _ => text.to_string(),
        }
    }
}

// Ids arrive already sorted, so the sample is the head of the sort order.
fn sample<T: Debug>(items: &[T]) -> String {
    format!("{:?}", &items[..items.len().min(SAMPLE_SIZE)])
}

// Shows a text message quoted and a null one as a bare `None`.
struct Message<'a>(Option<&'a str>);

impl Debug for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(msg) => write!(f, "{:?}", msg),
            None => f.write_str("None"),
        }
    }
}
