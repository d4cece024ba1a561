//! Shared sources and helpers for parser tests.
//!
//!     Scenario scripts are easy to get subtly wrong by hand; an ad-hoc
//!     string with a stray delimiter tests the wrong grammar. Tests should
//!     take their sources from the verified samples here and only build
//!     inputs inline when the test is specifically about a malformed
//!     construct.

use crate::kag::scan::parse_events;
use crate::kag::token::TokenEvent;

/// Minimal page marker followed by nothing else.
pub const PAGE_LABEL: &str = "*page1|\n";

/// Scene excerpt exercising every construct: a multi-segment label line,
/// directive lines with arguments, CJK prose with inline `[lr]` tags, and a
/// closing `@pg`.
pub const SCENE: &str = "*page0|&f.scripttitle
@setdaytime
@se storage=se247.wav
@fadein rule=カーテン左から time=800 storage=oアインツ森入り口-(朝靄)
　经过长途跋涉，到达了郊外的森林。[lr]
　从这里走二小时左右，可以走到越来越熟悉的爱因兹贝伦城。[lr]
@sestop time=2000 nowait=1
@fg index=1000 time=300 pos=c storage=バーサーカー01a(近)
　但、为什么森林入口处堵着不得了的人啊。
@pg
";

/// Parse a verified source, panicking on error. Test helper only.
pub fn collect_events(source: &str) -> Vec<TokenEvent> {
    parse_events(source).expect("verified sample failed to parse")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kag::token::TokenKind;

    #[test]
    fn samples_parse_cleanly() {
        assert!(!collect_events(PAGE_LABEL).is_empty());
        assert!(!collect_events(SCENE).is_empty());
    }

    #[test]
    fn scene_ends_with_the_sentinel() {
        let events = collect_events(SCENE);
        assert_eq!(events.last().unwrap().kind, TokenKind::EndOfInput);
    }
}
