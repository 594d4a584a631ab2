use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("[{}:{}]", start, end)]
pub struct Span {
    // inclusive range, counted in characters
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn one(start: usize) -> Self {
        Span { start, end: start }
    }

    pub fn width(&self) -> usize {
        self.end - self.start + 1
    }

    /// Underline the span below a copy of the source line, for error reports.
    pub fn marker(&self) -> String {
        format!("{}{}", " ".repeat(self.start), "^".repeat(self.width()))
    }
}
