/// Opaque handle of a committed primitive.
///
/// Handles are handed out in increasing order, so sorting by handle gives the
/// order in which primitives were committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrimitiveId(u64);

impl std::fmt::Display for PrimitiveId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// Per-canvas counter; handles are never reused, even after removal
#[derive(Debug, Default)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn generate(&mut self) -> PrimitiveId {
        let id = PrimitiveId(self.next.max(1));
        self.next = id.0 + 1;
        id
    }
}
