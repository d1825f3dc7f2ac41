/// No multiset of the given denominations sums exactly to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InfeasibleTarget {
    target: u64,
}

impl InfeasibleTarget {
    pub fn new(target: u64) -> Self {
        Self { target }
    }

    pub fn target(&self) -> u64 {
        self.target
    }
}

impl std::fmt::Display for InfeasibleTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "No combination of denominations sums exactly to {}",
            self.target
        )
    }
}

impl std::error::Error for InfeasibleTarget {}
