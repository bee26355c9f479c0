/// How an emitted line changes block nesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScopeEffect {
    #[default]
    None,
    /// The line ends with `{`; depth goes up after it is written.
    Open,
    /// The line is `}`; depth goes down before it is written.
    Close,
}

/// Current block nesting level. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Depth(usize);

impl Depth {
    pub const ZERO: Depth = Depth(0);

    pub fn level(self) -> usize {
        self.0
    }

    pub fn open(self) -> Depth {
        Depth(self.0 + 1)
    }

    /// One level shallower. Returns `None` at depth zero so the caller can
    /// record the unmatched close; the depth itself stays at zero.
    pub fn close(self) -> Option<Depth> {
        self.0.checked_sub(1).map(Depth)
    }
}
