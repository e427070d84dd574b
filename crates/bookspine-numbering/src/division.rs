//! The structural-container collaborator: what the counter needs to know
//! about the chapter, part, or appendix that owns it.

/// The closed classification of a structural container.
///
/// Decided once when the division is constructed; numbering policy
/// dispatches on it and never re-derives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivisionKind {
    /// An ordinary body chapter.
    Chapter,
    /// A part-level grouping above chapters.
    Part,
    /// A back-matter division ("Appendix A"); its sub-levels are never
    /// given numeric prefixes.
    Appendix,
}

impl DivisionKind {
    /// The lookup key for this kind's level-1 label.
    pub fn message_key(self) -> &'static str {
        match self {
            DivisionKind::Chapter => "chapter",
            DivisionKind::Part => "part",
            DivisionKind::Appendix => "appendix",
        }
    }
}

/// A structural container with its own number sequence scope.
///
/// The counter borrows a division read-only for its number, its kind, and
/// whether its number is absent. An absent number marks an unnumbered
/// division (e.g. a preface); that is a defined state, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Division {
    kind: DivisionKind,
    number: Option<u32>,
}

impl Division {
    pub fn new(kind: DivisionKind, number: Option<u32>) -> Self {
        Self { kind, number }
    }

    /// An ordinary numbered chapter.
    pub fn chapter(number: u32) -> Self {
        Self::new(DivisionKind::Chapter, Some(number))
    }

    /// A numbered part grouping.
    pub fn part(number: u32) -> Self {
        Self::new(DivisionKind::Part, Some(number))
    }

    /// A numbered appendix.
    pub fn appendix(number: u32) -> Self {
        Self::new(DivisionKind::Appendix, Some(number))
    }

    /// An unnumbered division of the given kind.
    pub fn unnumbered(kind: DivisionKind) -> Self {
        Self::new(kind, None)
    }

    pub fn kind(&self) -> DivisionKind {
        self.kind
    }

    pub fn number(&self) -> Option<u32> {
        self.number
    }

    /// True when the division has no number (the "blank" state).
    pub fn is_unnumbered(&self) -> bool {
        self.number.is_none()
    }
}
