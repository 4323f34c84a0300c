use crate::core::ProviderReport;

pub const HEADERS: [&str; 4] = [
    "Language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

/// Plain `+-|` table with an optional title set into the top border.
#[derive(Debug, Clone)]
pub struct AsciiTable {
    title: Option<String>,
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl AsciiTable {
    pub fn new(header: Vec<String>) -> Self {
        Self {
            title: None,
            header,
            rows: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn column_widths(&self) -> Vec<usize> {
        let columns = std::iter::once(&self.header)
            .chain(self.rows.iter())
            .map(Vec::len)
            .max()
            .unwrap_or(0);

        let mut widths = vec![0; columns];
        for row in std::iter::once(&self.header).chain(self.rows.iter()) {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
        widths
    }

    fn border(widths: &[usize]) -> String {
        let mut line = String::from("+");
        for width in widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line
    }

    fn line(widths: &[usize], row: &[String]) -> String {
        let mut line = String::from("|");
        for (i, width) in widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            let pad = width - cell.chars().count();
            line.push(' ');
            line.push_str(cell);
            line.push_str(&" ".repeat(pad + 1));
            line.push('|');
        }
        line
    }

    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let border = Self::border(&widths);

        // The title replaces border dashes right after the first corner, and
        // is dropped when it does not fit.
        let top = match &self.title {
            Some(title) if title.chars().count() + 2 <= border.chars().count() => {
                let rest: String = border.chars().skip(1 + title.chars().count()).collect();
                format!("+{}{}", title, rest)
            }
            _ => border.clone(),
        };

        let mut lines = vec![top, Self::line(&widths, &self.header), border.clone()];
        for row in &self.rows {
            lines.push(Self::line(&widths, row));
        }
        lines.push(border);
        lines.join("\n")
    }
}

impl From<&ProviderReport> for AsciiTable {
    fn from(report: &ProviderReport) -> Self {
        let mut table =
            AsciiTable::new(HEADERS.iter().map(|h| h.to_string()).collect()).with_title(&report.title);
        for row in &report.rows {
            table.push_row(vec![
                row.language.clone(),
                row.stats.vacancies_found.to_string(),
                row.stats.vacancies_processed.to_string(),
                row.stats.avg_salary.to_string(),
            ]);
        }
        table
    }
}
