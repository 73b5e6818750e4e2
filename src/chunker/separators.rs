/// Which side of a split a separator stays on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Attach {
    /// Kept at the end of the piece before the split (sentence ends, blank lines)
    #[default]
    Trailing,
    /// Kept at the start of the piece after the split (markdown headings)
    Leading,
}

/// A single boundary pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separator {
    pattern: String,
    attach: Attach,
}

impl Separator {
    pub fn trailing(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            attach: Attach::Trailing,
        }
    }

    pub fn leading(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            attach: Attach::Leading,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn attach(&self) -> Attach {
        self.attach
    }

    /// The empty pattern cuts between characters and always matches
    pub fn is_fallback(&self) -> bool {
        self.pattern.is_empty()
    }
}

/// Priority-ordered separator list, most preferred boundary first.
///
/// Every list ends with the empty-string fallback so recursion always
/// bottoms out in a hard character cut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separators(Vec<Separator>);

const PROSE: [&str; 6] = ["\n\n", "\n", ". ", "! ", "? ", " "];

const MARKDOWN_HEADINGS: [&str; 5] = ["\n## ", "\n### ", "\n#### ", "\n##### ", "\n###### "];

impl Separators {
    /// Paragraph > line > sentence > word > character
    pub fn prose() -> Self {
        let mut list: Vec<Separator> = PROSE.iter().map(|p| Separator::trailing(*p)).collect();
        list.push(Separator::trailing(""));
        Self(list)
    }

    /// Heading and code-fence boundaries ahead of the prose list.
    /// Horizontal rules are deliberately not split on.
    pub fn markdown() -> Self {
        let mut list: Vec<Separator> = MARKDOWN_HEADINGS
            .iter()
            .map(|p| Separator::leading(*p))
            .collect();
        list.push(Separator::trailing("```\n\n"));
        list.extend(Self::prose().0);
        Self(list)
    }

    /// Caller-supplied patterns, all trailing. Appends the fallback if missing.
    pub fn custom<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list: Vec<Separator> = patterns.into_iter().map(Separator::trailing).collect();
        if !list.iter().any(Separator::is_fallback) {
            list.push(Separator::trailing(""));
        }
        Self(list)
    }

    pub fn as_slice(&self) -> &[Separator] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Separators {
    fn default() -> Self {
        Self::prose()
    }
}
