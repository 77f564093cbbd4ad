const PROSE_SEPARATOR: &str = "\n\n";

/// Ordered roast lines, never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roast {
    lines: Vec<String>,
}

impl Roast {
    /// Build a roast from lines, `None` when there is no line.
    pub fn from_lines(lines: Vec<String>) -> Option<Self> {
        if lines.is_empty() {
            None
        } else {
            Some(Self { lines })
        }
    }

    pub(crate) fn single<T: Into<String>>(line: T) -> Self {
        Self {
            lines: vec![line.into()],
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Render the lines as paragraphs.
    pub fn to_prose(&self) -> String {
        self.lines.join(PROSE_SEPARATOR)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoastStats {
    pub total_commits: usize,
    pub repos_analyzed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoastReport {
    pub username: String,
    pub roast: Roast,
    pub stats: RoastStats,
}
