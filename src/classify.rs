//! Line classifier — sticky sections plus an ordered subsection cascade.
//!
//! Each line first updates the section (marker lines only), then the
//! subsection. Inside `MAIN` the rules in [`MAIN_RULES`] run top to bottom
//! and every matching rule overwrites the result of the ones before it, so
//! the table order is part of the output format.

use crate::model::*;

// -- Markers ------------------------------------------------------------------

const HEADER_MARKER: &str = "!===";
const FOOTER_MARKER: &str = "===!";
const DIRECT_MARKER: &str = "!=== DIRECT";

const SECTION_MARKERS: &[(&str, Section)] = &[
    ("!=== SKIP", Section::Skip),
    ("!=== NAV", Section::Nav),
    ("!=== MAIN", Section::Main),
    (DIRECT_MARKER, Section::Direct),
];

/// Call token that opens an example block.
pub const EXAMPLE_CALL: &str = "Logger.log";
/// Declaration token allowed inside an example block.
pub const EXAMPLE_DECL: &str = "var";
/// Trailing token closing an example block.
pub const EXAMPLE_END: &str = "//!EX";

// -- MAIN rule table ----------------------------------------------------------

/// What a matching rule does to the height marker.
#[derive(Debug, Clone, Copy)]
enum HeightEffect {
    Keep,
    Clear,
    Extract,
}

struct Rule {
    /// Called with the subsection produced so far on this line.
    when: fn(Subsection, &str) -> bool,
    then: Subsection,
    height: HeightEffect,
}

const MAIN_RULES: &[Rule] = &[
    Rule {
        when: |sub, line| sub == Subsection::Header && line.is_empty(),
        then: Subsection::Blank,
        height: HeightEffect::Clear,
    },
    Rule {
        when: |_, line| line.contains('#'),
        then: Subsection::Link,
        height: HeightEffect::Extract,
    },
    Rule {
        when: |sub, line| sub != Subsection::Func && line.contains("// -"),
        then: Subsection::Link,
        height: HeightEffect::Extract,
    },
    Rule {
        when: |sub, line| sub == Subsection::Link && line.is_empty(),
        then: Subsection::Blank,
        height: HeightEffect::Clear,
    },
    Rule {
        when: |sub, line| sub == Subsection::JsdocStart && !line.is_empty(),
        then: Subsection::Jsdoc,
        height: HeightEffect::Clear,
    },
    Rule {
        when: |sub, line| sub == Subsection::Blank && line.contains("/**"),
        then: Subsection::JsdocStart,
        height: HeightEffect::Keep,
    },
    Rule {
        when: |_, line| line.contains("*/"),
        then: Subsection::JsdocEnd,
        height: HeightEffect::Keep,
    },
    Rule {
        when: |sub, line| sub == Subsection::JsdocEnd && line.is_empty(),
        then: Subsection::Blank,
        height: HeightEffect::Clear,
    },
    Rule {
        when: |sub, _| sub == Subsection::FuncStart,
        then: Subsection::Func,
        height: HeightEffect::Keep,
    },
    Rule {
        when: |_, line| line.contains("function"),
        then: Subsection::FuncStart,
        height: HeightEffect::Keep,
    },
    Rule {
        when: |sub, line| sub == Subsection::Func && line == "}",
        then: Subsection::FuncEnd,
        height: HeightEffect::Clear,
    },
    Rule {
        when: |sub, line| sub == Subsection::FuncEnd && line.is_empty(),
        then: Subsection::Blank,
        height: HeightEffect::Clear,
    },
    Rule {
        when: |sub, line| sub == Subsection::ExStart && !line.is_empty(),
        then: Subsection::Ex,
        height: HeightEffect::Keep,
    },
    Rule {
        when: |sub, line| sub == Subsection::Blank && line.contains(EXAMPLE_CALL),
        then: Subsection::ExStart,
        height: HeightEffect::Keep,
    },
    Rule {
        when: |_, line| line.contains("!EX"),
        then: Subsection::ExEnd,
        height: HeightEffect::Clear,
    },
    Rule {
        when: |sub, line| sub == Subsection::ExEnd && line.is_empty(),
        then: Subsection::Blank,
        height: HeightEffect::Clear,
    },
    // Footer again, so it wins over anything above.
    Rule {
        when: |_, line| line.contains(FOOTER_MARKER),
        then: Subsection::Footer,
        height: HeightEffect::Clear,
    },
];

// -- Public API ---------------------------------------------------------------

/// Classify `line` given the state left by `previous`.
pub fn classify(state: &LineState, target: Target, previous: &str, line: &str) -> LineState {
    let section = next_section(state.section, line);
    let mut next = LineState {
        section,
        subsection: state.subsection,
        height: state.height.clone(),
    };

    if line.contains(HEADER_MARKER) {
        next.subsection = Subsection::Header;
        return next;
    }
    if line.contains(FOOTER_MARKER) {
        next.subsection = Subsection::Footer;
        next.height = Height::default();
        return next;
    }

    match section {
        Section::Main => {
            for rule in MAIN_RULES {
                if (rule.when)(next.subsection, line) {
                    next.subsection = rule.then;
                    match rule.height {
                        HeightEffect::Keep => {}
                        HeightEffect::Clear => next.height = Height::default(),
                        HeightEffect::Extract => next.height = Height::extract(line),
                    }
                }
            }
        }
        Section::Nav => {
            next.subsection = Subsection::Link;
            next.height = Height::extract(line);
        }
        Section::Skip => {
            next.subsection = Subsection::Skip;
            next.height = Height::default();
        }
        Section::Direct => {
            if previous.contains(DIRECT_MARKER) && previous.contains(target.as_str()) {
                next.subsection = Subsection::Target(target);
            }
        }
        Section::None => {}
    }

    next
}

/// Marker checks are independent; the last match wins.
fn next_section(current: Section, line: &str) -> Section {
    SECTION_MARKERS
        .iter()
        .filter(|(marker, _)| line.contains(*marker))
        .map(|&(_, section)| section)
        .last()
        .unwrap_or(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(target: Target, lines: &[&str]) -> Vec<LineState> {
        let mut state = LineState::default();
        let mut previous = "";
        let mut out = Vec::new();
        for &line in lines {
            state = classify(&state, target, previous, line);
            out.push(state.clone());
            previous = line;
        }
        out
    }

    fn main_state(subsection: Subsection) -> LineState {
        LineState {
            section: Section::Main,
            subsection,
            height: Height::default(),
        }
    }

    #[test]
    fn section_is_sticky() {
        let states = run(Target::Readme, &["// !=== SKIP", "a", "b"]);
        assert!(states.iter().all(|s| s.section == Section::Skip));
        assert_eq!(states[1].subsection, Subsection::Skip);
    }

    #[test]
    fn nav_link_with_height() {
        let states = run(Target::Readme, &["// !=== NAV", "// | | # Introduction"]);
        assert_eq!(states[0].section, Section::Nav);
        assert_eq!(states[0].subsection, Subsection::Header);
        assert_eq!(states[1].subsection, Subsection::Link);
        assert_eq!(states[1].height.as_str(), "#");
    }

    #[test]
    fn header_preempts_section_rules() {
        // Contains "function", "*/" and "#", all of which would match in MAIN.
        let line = "// !=== MAIN function */ #";
        let next = classify(&main_state(Subsection::Blank), Target::Readme, "", line);
        assert_eq!(next.subsection, Subsection::Header);
    }

    #[test]
    fn footer_preempts_section_rules() {
        let next = classify(&main_state(Subsection::Func), Target::Library, "", "} // ===!");
        assert_eq!(next.subsection, Subsection::Footer);
        assert!(next.height.is_empty());
    }

    #[test]
    fn main_jsdoc_and_function_flow() {
        let lines = [
            "// !=== MAIN",
            "",
            "/**",
            " * Adds two numbers.",
            " */",
            "function add(a, b) {",
            "  return a + b;",
            "}",
            "",
        ];
        let subs: Vec<Subsection> = run(Target::Library, &lines)
            .into_iter()
            .map(|s| s.subsection)
            .collect();
        assert_eq!(
            subs,
            vec![
                Subsection::Header,
                Subsection::Blank,
                Subsection::JsdocStart,
                Subsection::Jsdoc,
                Subsection::JsdocEnd,
                Subsection::FuncStart,
                Subsection::Func,
                Subsection::FuncEnd,
                Subsection::Blank,
            ]
        );
    }

    #[test]
    fn closing_brace_ends_function() {
        let next = classify(&main_state(Subsection::Func), Target::Library, "", "}");
        assert_eq!(next.subsection, Subsection::FuncEnd);
    }

    #[test]
    fn comments_inside_function_stay_in_body() {
        let lines = [
            "// !=== MAIN",
            "",
            "function f() {",
            "  var x = 1;",
            "// - note",
            "// Logger.log(1)",
            "}",
        ];
        let subs: Vec<Subsection> = run(Target::Library, &lines)
            .into_iter()
            .map(|s| s.subsection)
            .collect();
        assert_eq!(
            subs[2..],
            [
                Subsection::FuncStart,
                Subsection::Func,
                Subsection::Func,
                Subsection::Func,
                Subsection::FuncEnd,
            ]
        );
    }

    #[test]
    fn example_call_needs_blank_before() {
        for sub in [Subsection::JsdocEnd, Subsection::Func, Subsection::Link] {
            let next = classify(&main_state(sub), Target::Readme, "", "// Logger.log(1)");
            assert_eq!(next.subsection, sub);
        }
        let next = classify(&main_state(Subsection::Blank), Target::Readme, "", "// Logger.log(1)");
        assert_eq!(next.subsection, Subsection::ExStart);
    }

    #[test]
    fn indented_brace_stays_in_function() {
        let next = classify(&main_state(Subsection::Func), Target::Library, "", "  }");
        assert_eq!(next.subsection, Subsection::Func);
    }

    #[test]
    fn main_link_heights() {
        let states = run(Target::Readme, &["// !=== MAIN", "", "// # Usage", "// -- Options", ""]);
        assert_eq!(states[2].subsection, Subsection::Link);
        assert_eq!(states[2].height.as_str(), "#");
        assert_eq!(states[3].subsection, Subsection::Link);
        assert_eq!(states[3].height.as_str(), "--");
        assert_eq!(states[4].subsection, Subsection::Blank);
        assert!(states[4].height.is_empty());
    }

    #[test]
    fn example_flow() {
        let lines = [
            "// !=== MAIN",
            "",
            "// Logger.log(add(1, 2));",
            "// var x = 3;",
            "// Logger.log(x); //!EX",
            "",
        ];
        let subs: Vec<Subsection> = run(Target::Readme, &lines)
            .into_iter()
            .map(|s| s.subsection)
            .collect();
        assert_eq!(
            subs,
            vec![
                Subsection::Header,
                Subsection::Blank,
                Subsection::ExStart,
                Subsection::Ex,
                Subsection::ExEnd,
                Subsection::Blank,
            ]
        );
    }

    #[test]
    fn height_cleared_on_terminal_subsections() {
        let mut state = main_state(Subsection::Func);
        state.height = Height::extract("--");
        let next = classify(&state, Target::Library, "", "}");
        assert_eq!(next.subsection, Subsection::FuncEnd);
        assert!(next.height.is_empty());

        let mut state = main_state(Subsection::Ex);
        state.height = Height::extract("-");
        let next = classify(&state, Target::Readme, "", "x(); //!EX");
        assert_eq!(next.subsection, Subsection::ExEnd);
        assert!(next.height.is_empty());
    }

    #[test]
    fn direct_block_for_own_target() {
        let lines = ["// !=== DIRECT README", "// # Title", "// text", "// ===!", "after"];
        let states = run(Target::Readme, &lines);
        assert_eq!(states[0].subsection, Subsection::Header);
        assert_eq!(states[1].subsection, Subsection::Target(Target::Readme));
        assert_eq!(states[2].subsection, Subsection::Target(Target::Readme));
        assert_eq!(states[3].subsection, Subsection::Footer);
        assert_eq!(states[4].subsection, Subsection::Footer);
    }

    #[test]
    fn direct_block_for_other_target_keeps_subsection() {
        let lines = ["// !=== DIRECT LIBRARY", "// text"];
        let states = run(Target::Readme, &lines);
        assert_eq!(states[1].subsection, Subsection::Header);
    }

    #[test]
    fn last_section_marker_wins() {
        assert_eq!(next_section(Section::None, "!=== SKIP !=== MAIN"), Section::Main);
        assert_eq!(next_section(Section::Nav, "plain"), Section::Nav);
    }
}
