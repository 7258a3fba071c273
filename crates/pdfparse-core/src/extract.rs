/// Per-page text pulled out of a single document, in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedText {
    pages: Vec<String>,
}

impl ExtractedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the text of the next page.
    ///
    /// Trailing line breaks are dropped so each page contributes exactly one
    /// separator when joined, whatever convention the PDF library uses for
    /// ending text objects.
    pub fn push_page(&mut self, text: impl Into<String>) {
        let mut text = text.into();
        let kept = text.trim_end_matches(['\r', '\n']).len();
        text.truncate(kept);
        self.pages.push(text);
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Every page followed by a newline, concatenated, then trimmed.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for page in &self.pages {
            text.push_str(page);
            text.push('\n');
        }
        text.trim().to_string()
    }
}

impl<S: Into<String>> FromIterator<S> for ExtractedText {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut extracted = ExtractedText::new();
        for page in iter {
            extracted.push_page(page);
        }
        extracted
    }
}
