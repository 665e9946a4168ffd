use std::str::Lines;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::SyntaxError;
use crate::section::{DEFAULT_SECTION, Document};
use crate::util::trim_with_quotes;

// name[] = value
static ASSIGN_ARRAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^=\[\]]+)\[\][^=]*=(.*)$").expect("valid regex"));
// key = value
static ASSIGN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^=]+)=(.*)$").expect("valid regex"));
// [name]
static SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(.*)\]$").expect("valid regex"));

/// Settings for a single parse.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    ignore_case: bool,
    no_default_section: bool,
    default_section: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            ignore_case: false,
            no_default_section: false,
            default_section: DEFAULT_SECTION.to_owned(),
        }
    }
}

impl ParseOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lower-case section names and keys before they are stored.
    #[must_use]
    pub fn ignore_case(mut self, yes: bool) -> Self {
        self.ignore_case = yes;
        self
    }

    // Stored only; the scan does not consult it yet.
    #[must_use]
    pub fn no_default_section(mut self, yes: bool) -> Self {
        self.no_default_section = yes;
        self
    }

    /// Section that receives assignments written before the first header.
    #[must_use]
    pub fn default_section(mut self, name: impl Into<String>) -> Self {
        self.default_section = name.into();
        self
    }

    #[must_use]
    pub fn is_ignore_case(&self) -> bool {
        self.ignore_case
    }

    #[must_use]
    pub fn is_no_default_section(&self) -> bool {
        self.no_default_section
    }

    #[must_use]
    pub fn default_section_name(&self) -> &str {
        &self.default_section
    }
}

/// What a trimmed, non-blank, non-comment line turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    /// `key[] = value`. Recognized, but contributes nothing to the document.
    ArrayAssignment { key: &'a str, value: &'a str },
    Assignment { key: &'a str, value: &'a str },
    Section(&'a str),
}

/// Classifies `line`, checking array assignments, then assignments, then headers.
///
/// Order matters: `[a=b]` is an assignment with key `[a`, and `tags[] = x` would otherwise
/// be an assignment to `tags[]`.
pub(crate) fn classify(line: &str) -> Option<Line<'_>> {
    if let Some(groups) = ASSIGN_ARRAY.captures(line) {
        let key = groups.get(1).map_or("", |m| m.as_str().trim());
        let value = groups.get(2).map_or("", |m| trim_with_quotes(m.as_str()));
        Some(Line::ArrayAssignment { key, value })
    } else if let Some(groups) = ASSIGN.captures(line) {
        let key = groups.get(1).map_or("", |m| m.as_str().trim());
        let value = groups.get(2).map_or("", |m| trim_with_quotes(m.as_str()));
        Some(Line::Assignment { key, value })
    } else {
        SECTION
            .captures(line)
            .map(|groups| Line::Section(groups.get(1).map_or("", |m| m.as_str().trim())))
    }
}

/// Represents an on-going parse.
#[derive(Debug)]
pub struct Parser<'a> {
    lines: Lines<'a>,
    line_number: usize,
    options: &'a ParseOptions,
    section: &'a str,
    document: Document,
}

impl<'a> Parser<'a> {
    #[must_use]
    pub fn new(text: &'a str, options: &'a ParseOptions) -> Self {
        Self {
            lines: text.lines(),
            line_number: 0,
            options,
            section: options.default_section_name(),
            document: Document::default(),
        }
    }

    /// Scans every line and returns the accumulated document, stopping at the first line
    /// that cannot be classified.
    pub fn into_document(mut self) -> Result<Document, SyntaxError> {
        while let Some(raw) = self.lines.next() {
            self.line_number += 1;
            self.parse_line(raw.trim())?;
        }

        tracing::debug!(
            lines = self.line_number,
            sections = self.document.len(),
            "parsed INI document"
        );

        Ok(self.document)
    }

    fn parse_line(&mut self, line: &'a str) -> Result<(), SyntaxError> {
        if line.is_empty() || line.starts_with([';', '#']) {
            return Ok(());
        }

        match classify(line) {
            Some(Line::ArrayAssignment { key, .. }) => {
                tracing::trace!(line = self.line_number, key, "skipping array assignment");
            }
            Some(Line::Assignment { key, value }) => {
                self.document
                    .set(self.section, key, value.to_owned(), self.options.is_ignore_case());
            }
            Some(Line::Section(name)) => {
                tracing::debug!(line = self.line_number, section = name, "entering section");
                self.section = name;
            }
            None => {
                return Err(SyntaxError {
                    line: self.line_number,
                    text: line.to_owned(),
                });
            }
        }

        Ok(())
    }
}
