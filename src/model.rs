//! Line classification model — targets, sections, subsections and heights.

use crate::error::Error;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Output flavour of a conversion job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Readme,
    Library,
    QuickStart,
}

impl Target {
    pub fn as_str(self) -> &'static str {
        match self {
            Target::Readme => "README",
            Target::Library => "LIBRARY",
            Target::QuickStart => "QUICK-START",
        }
    }
}

impl FromStr for Target {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "README" => Ok(Target::Readme),
            "LIBRARY" => Ok(Target::Library),
            "QUICK-START" => Ok(Target::QuickStart),
            _ => Err(Error::InvalidTarget(s.to_string())),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sticky document region, changed only by `!=== <NAME>` marker lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    None,
    Skip,
    Nav,
    Main,
    Direct,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Section::None => "NONE",
            Section::Skip => "SKIP",
            Section::Nav => "NAV",
            Section::Main => "MAIN",
            Section::Direct => "DIRECT",
        })
    }
}

/// Per-line role, recomputed on every line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Subsection {
    #[default]
    None,
    Header,
    Footer,
    Blank,
    Link,
    JsdocStart,
    Jsdoc,
    JsdocEnd,
    FuncStart,
    Func,
    FuncEnd,
    ExStart,
    Ex,
    ExEnd,
    Skip,
    /// Body of a `!=== DIRECT <TARGET>` block.
    Target(Target),
}

impl fmt::Display for Subsection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Subsection::None => "NONE",
            Subsection::Header => "HEADER",
            Subsection::Footer => "FOOTER",
            Subsection::Blank => "BLANK",
            Subsection::Link => "LINK",
            Subsection::JsdocStart => "JSDOC_START",
            Subsection::Jsdoc => "JSDOC",
            Subsection::JsdocEnd => "JSDOC_END",
            Subsection::FuncStart => "FUNC_START",
            Subsection::Func => "FUNC",
            Subsection::FuncEnd => "FUNC_END",
            Subsection::ExStart => "EX_START",
            Subsection::Ex => "EX",
            Subsection::ExEnd => "EX_END",
            Subsection::Skip => "SKIP",
            Subsection::Target(target) => target.as_str(),
        })
    }
}

static RE_HEIGHT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#|-+").unwrap());

/// Nesting marker taken from a line: a lone `#` or a run of `-`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Height(String);

impl Height {
    /// First `#` or `-` run anywhere in the line; empty when there is none.
    pub fn extract(line: &str) -> Self {
        Height(
            RE_HEIGHT
                .find(line)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `#` → 0, `-` → 1, `--` → 2, `---` → 3.
    pub fn depth(&self) -> Option<usize> {
        match self.0.as_str() {
            "#" => Some(0),
            "-" => Some(1),
            "--" => Some(2),
            "---" => Some(3),
            _ => None,
        }
    }
}

/// Classifier output for one line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineState {
    pub section: Section,
    pub subsection: Subsection,
    pub height: Height,
}
