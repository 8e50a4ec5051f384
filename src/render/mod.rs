//! Renderer module — per-target dispatch onto a fixed set of line operations.

pub mod library;
pub mod markdown;
pub mod quick_start;
pub mod readme;

use crate::model::{Height, LineState, Section, Subsection, Target};

/// Leading comment token removed by direct and example output.
pub const COMMENT_PREFIX: &str = "// ";

/// Formatting operation applied to one classified line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Suppress,
    PassThrough,
    DirectPassThrough,
    NavLink,
    Heading,
    CodeBlockStart,
    ExampleLine,
    ExampleEnd { fence: bool },
}

/// Trait mapping a classified line to the operation a target applies to it.
pub trait Renderer {
    fn operation(&self, state: &LineState) -> Op;
}

/// Create the renderer for a target.
pub fn create_renderer(target: Target) -> Box<dyn Renderer> {
    match target {
        Target::Readme => Box::new(readme::ReadmeRenderer),
        Target::Library => Box::new(library::LibraryRenderer),
        Target::QuickStart => Box::new(quick_start::QuickStartRenderer),
    }
}

/// Result of rendering one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Text appended to the document buffer, if any.
    pub appended: Option<String>,
    /// Most recent rendered output, carried to the next line.
    pub output: String,
    pub height: Height,
}

/// Apply `op` to the raw line.
///
/// `previous_output` is the output carried from the line before; pass-through
/// operations use it to drop a second consecutive blank line.
pub fn apply(op: Op, line: &str, height: &Height, previous_output: &str) -> Rendered {
    match op {
        Op::Suppress => Rendered {
            appended: None,
            output: String::new(),
            height: Height::default(),
        },
        Op::PassThrough => pass_through(line, line, height, previous_output),
        Op::DirectPassThrough => pass_through(line, strip_comment(line), height, previous_output),
        Op::NavLink => emit(markdown::nav_link(line, height), height),
        Op::Heading => emit(markdown::heading(line, height), height),
        Op::CodeBlockStart => emit(markdown::code_block_start(line), height),
        Op::ExampleLine => emit(markdown::example_line(line), height),
        Op::ExampleEnd { fence } => emit(markdown::example_end(line, fence), height),
    }
}

/// MAIN subsections kept by the library and quick-start targets.
pub(crate) fn is_main_body(state: &LineState) -> bool {
    state.section == Section::Main
        && matches!(
            state.subsection,
            Subsection::Blank
                | Subsection::Link
                | Subsection::JsdocStart
                | Subsection::Jsdoc
                | Subsection::JsdocEnd
                | Subsection::FuncStart
                | Subsection::Func
                | Subsection::FuncEnd
        )
}

pub(crate) fn strip_comment(line: &str) -> &str {
    line.strip_prefix(COMMENT_PREFIX).unwrap_or(line)
}

fn pass_through(raw: &str, text: &str, height: &Height, previous_output: &str) -> Rendered {
    let previous = previous_output.strip_suffix('\n').unwrap_or(previous_output);
    if previous.is_empty() && raw.is_empty() {
        return Rendered {
            appended: None,
            output: previous_output.to_string(),
            height: height.clone(),
        };
    }

    let output = format!("{}\n", text);
    Rendered {
        appended: Some(output.clone()),
        output,
        height: height.clone(),
    }
}

fn emit(output: String, height: &Height) -> Rendered {
    Rendered {
        appended: (!output.is_empty()).then(|| output.clone()),
        output,
        height: height.clone(),
    }
}
