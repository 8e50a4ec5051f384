//! Abbreviated guide: the library listing plus unfenced examples.

use crate::model::{LineState, Section, Subsection, Target};
use crate::render::{is_main_body, Op, Renderer};

pub struct QuickStartRenderer;

impl Renderer for QuickStartRenderer {
    fn operation(&self, state: &LineState) -> Op {
        match (state.section, state.subsection) {
            (Section::Direct, Subsection::Target(Target::QuickStart)) => Op::DirectPassThrough,
            _ if is_main_body(state) => Op::PassThrough,
            (_, Subsection::ExStart | Subsection::Ex) => Op::PassThrough,
            (_, Subsection::ExEnd) => Op::ExampleEnd { fence: false },
            _ => Op::Suppress,
        }
    }
}
