//! Hand-checked pattern/text corpus exercising the full supported
//! syntax, run through both backends by the crate-level tests.

#[derive(Debug)]
pub struct MatchSample {
    pub pattern: &'static str,
    pub matches: &'static [&'static str],
    pub nomatches: &'static [&'static str],
    pub valid: bool,
}

pub static MATCH_SAMPLES: &[MatchSample] = &[
    MatchSample {
        pattern: "",
        matches: &[""],
        nomatches: &["a", " ", "\n"],
        valid: true,
    },
    MatchSample {
        pattern: "a",
        matches: &["a"],
        nomatches: &["", "b", "aa"],
        valid: true,
    },
    MatchSample {
        pattern: "ab",
        matches: &["ab"],
        nomatches: &["a", "b", "abc", "ba"],
        valid: true,
    },
    MatchSample {
        pattern: "a|b",
        matches: &["a", "b"],
        nomatches: &["", "c", "ab"],
        valid: true,
    },
    MatchSample {
        pattern: "a|bc",
        matches: &["a", "bc"],
        nomatches: &["b", "c", "abc"],
        valid: true,
    },
    // Trailing empty branch: matches the empty string too.
    MatchSample {
        pattern: "a|",
        matches: &["a", ""],
        nomatches: &["b", "aa"],
        valid: true,
    },
    MatchSample {
        pattern: ".",
        matches: &["a", "Z", ".", " "],
        nomatches: &["", "ab"],
        valid: true,
    },
    MatchSample {
        pattern: "x.z",
        matches: &["xyz", "xaz", "x.z"],
        nomatches: &["xz", "xyyz", "ayz"],
        valid: true,
    },
    MatchSample {
        pattern: "a*",
        matches: &["", "a", "aaaa"],
        nomatches: &["b", "ab", "ba"],
        valid: true,
    },
    MatchSample {
        pattern: ".*",
        matches: &["", "abc", "zzzz"],
        nomatches: &[],
        valid: true,
    },
    MatchSample {
        pattern: "a+",
        matches: &["a", "aa", "aaaaa"],
        nomatches: &["", "b", "ab"],
        valid: true,
    },
    MatchSample {
        pattern: "a{3}",
        matches: &["aaa"],
        nomatches: &["aa", "aaaa", ""],
        valid: true,
    },
    MatchSample {
        pattern: "a{3,}",
        matches: &["aaa", "aaaaaaaa"],
        nomatches: &["aa", ""],
        valid: true,
    },
    MatchSample {
        pattern: "a{3,6}",
        matches: &["aaa", "aaaaa", "aaaaaa"],
        nomatches: &["aa", "aaaaaaa", ""],
        valid: true,
    },
    MatchSample {
        pattern: "(a|b)c",
        matches: &["ac", "bc"],
        nomatches: &["c", "b", "abc"],
        valid: true,
    },
    MatchSample {
        pattern: "a(b|c)d",
        matches: &["abd", "acd"],
        nomatches: &["ad", "abcd", "abd "],
        valid: true,
    },
    MatchSample {
        pattern: "(ab)+",
        matches: &["ab", "abab", "ababab"],
        nomatches: &["", "a", "aba", "abb"],
        valid: true,
    },
    MatchSample {
        pattern: "(a|b)*",
        matches: &["", "a", "abba", "bbbb"],
        nomatches: &["c", "abc"],
        valid: true,
    },
    // Iterations may take different paths through the alternation.
    MatchSample {
        pattern: "(a|aa){2}",
        matches: &["aa", "aaa", "aaaa"],
        nomatches: &["a", "aaaaa", ""],
        valid: true,
    },
    MatchSample {
        pattern: "(a{1,2}b){2}",
        matches: &["abab", "aabab", "abaab", "aabaab"],
        nomatches: &["ab", "aabb", "ababab"],
        valid: true,
    },
    MatchSample {
        pattern: "(a|b){2,3}c",
        matches: &["abc", "babc", "aac"],
        nomatches: &["ac", "abbac", "ab"],
        valid: true,
    },
    MatchSample {
        pattern: "()*",
        matches: &[""],
        nomatches: &["a"],
        valid: true,
    },
    MatchSample {
        pattern: "*a",
        matches: &[],
        nomatches: &[],
        valid: false,
    },
    MatchSample {
        pattern: "a|*",
        matches: &[],
        nomatches: &[],
        valid: false,
    },
    MatchSample {
        pattern: "(a",
        matches: &[],
        nomatches: &[],
        valid: false,
    },
    MatchSample {
        pattern: "a)",
        matches: &[],
        nomatches: &[],
        valid: false,
    },
    MatchSample {
        pattern: "a{",
        matches: &[],
        nomatches: &[],
        valid: false,
    },
    MatchSample {
        pattern: "a{2,1}",
        matches: &[],
        nomatches: &[],
        valid: false,
    },
    MatchSample {
        pattern: "a{x}",
        matches: &[],
        nomatches: &[],
        valid: false,
    },
];
