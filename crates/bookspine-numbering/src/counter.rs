//! The per-division section counter.
//!
//! One counter exists per division being compiled. The traversal logic calls
//! [`SectionCounter::inc`] once per heading in document order; the rendering
//! stage calls [`SectionCounter::anchor`] and [`SectionCounter::prefix`] on
//! demand to label each heading. The counter holds no cross-division state
//! and is rebuilt fresh for every division.

use bookspine_locale::{MessageArg, MessageLookup};

use crate::division::{Division, DivisionKind};

/// Maps a heading level to its slot in the counter vector.
///
/// Level 1 is the division itself and has no slot; level 2 maps to slot 0,
/// level 3 to slot 1, and so on.
fn level_slot(level: usize) -> Option<usize> {
    level.checked_sub(2)
}

/// Hierarchical counter for the headings of a single division.
///
/// Tracks one count per level below the division, restarting deeper counts
/// whenever a shallower heading advances, so that numbering like `3.2.1`
/// always reflects the path through the current heading hierarchy.
///
/// ```rust
/// use bookspine_locale::Catalog;
/// use bookspine_numbering::{Division, SectionCounter};
///
/// let division = Division::chapter(3);
/// let mut counter = SectionCounter::new(3, &division);
/// let catalog = Catalog::builtin("en").unwrap();
///
/// counter.inc(2);
/// assert_eq!(counter.anchor(2), "3-1");
/// assert_eq!(counter.prefix(2, 3, &catalog).as_deref(), Some("3.1. "));
/// ```
#[derive(Debug, Clone)]
pub struct SectionCounter<'d> {
    counts: Vec<u32>,
    division: &'d Division,
}

impl<'d> SectionCounter<'d> {
    /// Create a counter tracking `depth_limit` levels below the division.
    pub fn new(depth_limit: usize, division: &'d Division) -> Self {
        Self {
            counts: vec![0; depth_limit],
            division,
        }
    }

    /// Reinitialize to `depth_limit` zeroed slots, discarding prior counts.
    pub fn reset(&mut self, depth_limit: usize) {
        self.counts = vec![0; depth_limit];
    }

    /// Current counts, slot 0 first (structural level 2).
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Number of levels tracked below the division.
    pub fn depth_limit(&self) -> usize {
        self.counts.len()
    }

    /// Advance the count for `level` and restart every deeper level.
    ///
    /// Counting a heading invalidates the numbering of everything nested
    /// below it: after a new level-2 heading, the level-3 sequence starts
    /// over rather than continuing a stale one. For `level <= 1` nothing is
    /// incremented but every slot restarts (the division itself is an
    /// ancestor of every tracked level).
    ///
    /// Panics if the level's slot lies beyond the configured depth; valid
    /// callers only count levels within the depth they configured.
    pub fn inc(&mut self, level: usize) {
        let cascade_from = match level_slot(level) {
            Some(slot) => {
                self.counts[slot] += 1;
                slot + 1
            }
            None => 0,
        };
        // The slot indexing above keeps cascade_from <= counts.len().
        for count in &mut self.counts[cascade_from..] {
            *count = 0;
        }
    }

    /// Stable cross-reference identifier for the heading at `level`.
    ///
    /// The division number (empty when absent) followed by one hyphen-joined
    /// count per level: `anchor(1)` is just the division number, `anchor(3)`
    /// at position 4.1.2 is `"4-1-2"`. Locale-independent, so anchors stay
    /// valid across output languages. Pure projection of current state.
    ///
    /// Panics if the level's slot lies beyond the configured depth.
    pub fn anchor(&self, level: usize) -> String {
        let mut id = match self.division.number() {
            Some(number) => number.to_string(),
            None => String::new(),
        };
        if let Some(last) = level_slot(level) {
            for count in &self.counts[..=last] {
                id.push('-');
                id.push_str(&count.to_string());
            }
        }
        id
    }

    /// Localized display label for the heading at `level`, or `None` when
    /// numbering is suppressed.
    ///
    /// `numbering_depth` is the deepest level that still receives a numeric
    /// prefix. An unnumbered division never receives one. At level 1 the
    /// label is the division kind's message ("Chapter 3", "Part 2",
    /// "Appendix A") plus the chapter postfix; deeper levels receive the
    /// dotted count run ("4.1.2") plus the postfix, except inside an
    /// appendix, whose sub-levels are never numbered.
    pub fn prefix(
        &self,
        level: usize,
        numbering_depth: usize,
        messages: &dyn MessageLookup,
    ) -> Option<String> {
        let number = self.division.number()?;

        if level == 1 {
            if numbering_depth < 1 {
                return None;
            }
            let label = messages.message(
                self.division.kind().message_key(),
                &[MessageArg::Number(number)],
            );
            let postfix = messages.message("chapter_postfix", &[]);
            return Some(format!("{label}{postfix}"));
        }

        if numbering_depth < level || self.division.kind() == DivisionKind::Appendix {
            return None;
        }

        let last = level_slot(level)?;
        let mut label = number.to_string();
        for count in &self.counts[..=last] {
            label.push('.');
            label.push_str(&count.to_string());
        }
        label.push_str(&messages.message("chapter_postfix", &[]));
        Some(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookspine_locale::Catalog;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::collections::HashMap;

    fn en() -> Catalog {
        Catalog::builtin("en").unwrap()
    }

    #[test]
    fn level_slot_domain_starts_at_level_two() {
        assert_eq!(level_slot(0), None);
        assert_eq!(level_slot(1), None);
        assert_eq!(level_slot(2), Some(0));
        assert_eq!(level_slot(5), Some(3));
    }

    #[test]
    fn fresh_counter_anchors_at_zero() {
        let division = Division::chapter(3);
        let counter = SectionCounter::new(3, &division);
        assert_eq!(counter.anchor(2), "3-0");
        assert_eq!(counter.counts(), &[0, 0, 0]);
    }

    #[test]
    fn reset_discards_prior_counts() {
        let division = Division::chapter(3);
        let mut counter = SectionCounter::new(2, &division);
        counter.inc(2);
        counter.inc(3);

        counter.reset(4);

        assert_eq!(counter.depth_limit(), 4);
        assert_eq!(counter.counts(), &[0, 0, 0, 0]);
    }

    #[test]
    fn repeated_inc_advances_only_that_level() {
        let division = Division::chapter(1);
        let mut counter = SectionCounter::new(3, &division);
        counter.inc(2);
        counter.inc(2);
        assert_eq!(counter.counts(), &[2, 0, 0]);
    }

    #[test]
    fn shallower_inc_restarts_deeper_counts() {
        let division = Division::chapter(1);
        let mut counter = SectionCounter::new(3, &division);
        counter.inc(2);
        counter.inc(3);
        counter.inc(3);
        counter.inc(2);
        assert_eq!(counter.counts(), &[2, 0, 0]);
    }

    #[test]
    fn division_level_inc_restarts_everything() {
        let division = Division::chapter(1);
        let mut counter = SectionCounter::new(3, &division);
        counter.inc(2);
        counter.inc(3);

        counter.inc(1);

        assert_eq!(counter.counts(), &[0, 0, 0]);
    }

    #[test]
    fn deepest_level_inc_keeps_the_configured_depth() {
        let division = Division::chapter(1);
        let mut counter = SectionCounter::new(2, &division);
        counter.inc(2);
        counter.inc(3);
        assert_eq!(counter.counts(), &[1, 1]);

        counter.inc(3);
        assert_eq!(counter.counts(), &[1, 2]);
        assert_eq!(counter.depth_limit(), 2);
    }

    #[test]
    fn anchor_is_a_pure_projection() {
        let division = Division::chapter(4);
        let mut counter = SectionCounter::new(3, &division);
        counter.inc(2);
        counter.inc(3);
        assert_eq!(counter.anchor(3), counter.anchor(3));
    }

    #[test]
    fn anchor_at_level_one_is_the_division_number() {
        let division = Division::chapter(4);
        let counter = SectionCounter::new(3, &division);
        assert_eq!(counter.anchor(1), "4");
    }

    #[test]
    fn anchor_renders_absent_number_as_empty() {
        let division = Division::unnumbered(DivisionKind::Chapter);
        let mut counter = SectionCounter::new(2, &division);
        counter.inc(2);
        assert_eq!(counter.anchor(2), "-1");
    }

    #[test]
    fn mixed_walk_matches_document_order() {
        let division = Division::chapter(4);
        let mut counter = SectionCounter::new(3, &division);
        counter.inc(2);
        counter.inc(3);
        counter.inc(2);
        counter.inc(3);
        counter.inc(3);

        assert_eq!(counter.anchor(3), "4-2-2");
        assert_eq!(counter.prefix(3, 3, &en()).as_deref(), Some("4.2.2. "));
    }

    #[rstest]
    #[case(1, 0, None)]
    #[case(1, 1, Some("Chapter 3. "))]
    #[case(2, 1, None)]
    #[case(2, 2, Some("3.1. "))]
    #[case(3, 2, None)]
    #[case(3, 3, Some("3.1.1. "))]
    fn prefix_follows_numbering_depth(
        #[case] level: usize,
        #[case] numbering_depth: usize,
        #[case] expected: Option<&str>,
    ) {
        let division = Division::chapter(3);
        let mut counter = SectionCounter::new(3, &division);
        counter.inc(2);
        counter.inc(3);

        assert_eq!(
            counter.prefix(level, numbering_depth, &en()).as_deref(),
            expected
        );
    }

    #[test]
    fn unnumbered_division_never_gets_a_prefix() {
        let division = Division::unnumbered(DivisionKind::Part);
        let mut counter = SectionCounter::new(3, &division);
        counter.inc(2);

        for level in 1..=3 {
            for numbering_depth in 0..=4 {
                assert_eq!(counter.prefix(level, numbering_depth, &en()), None);
            }
        }
    }

    #[test]
    fn part_division_resolves_the_part_label() {
        let division = Division::part(2);
        let counter = SectionCounter::new(3, &division);
        assert_eq!(counter.prefix(1, 1, &en()).as_deref(), Some("Part 2. "));
    }

    #[test]
    fn appendix_division_resolves_the_appendix_label() {
        let division = Division::appendix(1);
        let counter = SectionCounter::new(3, &division);
        assert_eq!(
            counter.prefix(1, 1, &en()).as_deref(),
            Some("Appendix A. ")
        );
    }

    #[test]
    fn appendix_sub_levels_are_never_numbered() {
        let division = Division::appendix(1);
        let mut counter = SectionCounter::new(3, &division);
        counter.inc(2);

        // Depth would allow level 2, but the appendix region suppresses it.
        assert_eq!(counter.prefix(2, 5, &en()), None);
        // The anchor stays available for cross-references.
        assert_eq!(counter.anchor(2), "1-1");
    }

    #[test]
    fn ja_catalog_renders_cjk_labels() {
        let division = Division::chapter(3);
        let mut counter = SectionCounter::new(3, &division);
        let catalog = Catalog::builtin("ja").unwrap();

        assert_eq!(
            counter.prefix(1, 1, &catalog).as_deref(),
            Some("第3章\u{3000}")
        );

        counter.inc(2);
        assert_eq!(
            counter.prefix(2, 2, &catalog).as_deref(),
            Some("3.1\u{3000}")
        );
    }

    /// A map-backed stub standing in for a real catalog: the counter only
    /// depends on the lookup capability, not on any catalog type.
    struct StubMessages(HashMap<&'static str, &'static str>);

    impl MessageLookup for StubMessages {
        fn message(&self, key: &str, _args: &[MessageArg<'_>]) -> String {
            self.0.get(key).copied().unwrap_or(key).to_string()
        }
    }

    #[test]
    fn prefix_resolves_through_any_lookup_implementation() {
        let stub = StubMessages(HashMap::from([
            ("chapter", "Kapitel drei"),
            ("chapter_postfix", "!"),
        ]));
        let division = Division::chapter(3);
        let counter = SectionCounter::new(3, &division);

        assert_eq!(
            counter.prefix(1, 1, &stub).as_deref(),
            Some("Kapitel drei!")
        );
    }

    #[test]
    #[should_panic]
    fn inc_beyond_the_configured_depth_is_caller_misuse() {
        let division = Division::chapter(1);
        let mut counter = SectionCounter::new(2, &division);
        counter.inc(5);
    }

    #[test]
    #[should_panic]
    fn anchor_beyond_the_configured_depth_is_caller_misuse() {
        let division = Division::chapter(1);
        let counter = SectionCounter::new(2, &division);
        counter.anchor(5);
    }
}
