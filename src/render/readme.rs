//! Full reference document: navigation, headings and fenced examples.

use crate::model::{LineState, Section, Subsection, Target};
use crate::render::{Op, Renderer};

pub struct ReadmeRenderer;

impl Renderer for ReadmeRenderer {
    fn operation(&self, state: &LineState) -> Op {
        match (state.section, state.subsection) {
            (Section::Direct, Subsection::Target(Target::Readme)) => Op::DirectPassThrough,
            (_, Subsection::Header | Subsection::Footer) => Op::Suppress,
            (Section::Nav, Subsection::Link) => Op::NavLink,
            (Section::Main, Subsection::Link) => Op::Heading,
            (_, Subsection::JsdocStart) => Op::CodeBlockStart,
            (_, Subsection::ExStart | Subsection::Ex) => Op::ExampleLine,
            (_, Subsection::ExEnd) => Op::ExampleEnd { fence: true },
            _ => Op::PassThrough,
        }
    }
}
