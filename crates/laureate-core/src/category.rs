// File: crates/laureate-core/src/category.rs
// Summary: Coarse STEM / Non-STEM grouping of award categories.

use std::fmt;

/// Award categories counted as STEM. Matched case-sensitively.
pub const STEM_CATEGORIES: [&str; 3] = ["chemistry", "physics", "medicine"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CategoryGroup {
    Stem,
    NonStem,
}

impl CategoryGroup {
    /// Label used in the legend.
    pub const fn label(self) -> &'static str {
        match self {
            CategoryGroup::Stem => "STEM",
            CategoryGroup::NonStem => "Non-STEM",
        }
    }
}

impl fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a raw award category to its group.
///
/// No case folding happens here: `"Physics"` lands in [`CategoryGroup::NonStem`].
pub fn categorize(category: &str) -> CategoryGroup {
    if STEM_CATEGORIES.contains(&category) {
        CategoryGroup::Stem
    } else {
        CategoryGroup::NonStem
    }
}

