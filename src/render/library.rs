//! Condensed API listing: doc comments and function bodies from MAIN only.

use crate::model::{LineState, Section, Subsection, Target};
use crate::render::{is_main_body, Op, Renderer};

pub struct LibraryRenderer;

impl Renderer for LibraryRenderer {
    fn operation(&self, state: &LineState) -> Op {
        match (state.section, state.subsection) {
            (Section::Direct, Subsection::Target(Target::Library)) => Op::DirectPassThrough,
            _ if is_main_body(state) => Op::PassThrough,
            _ => Op::Suppress,
        }
    }
}
