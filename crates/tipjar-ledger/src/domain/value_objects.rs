//! Value objects for the tip ledger.
//!
//! Small immutable types shared across the domain: identity and id
//! aliases, the closed category set, and the message capacity bound.

use serde::{Deserialize, Serialize};

/// A 20-byte account address.
///
/// Caller identity always arrives as an explicit argument, taken from the
/// host's authenticated envelope. The ledger never derives identity from
/// ambient state.
pub type Address = [u8; 20];

/// Identifier assigned to a tip at creation.
///
/// Dense and zero-based: the first accepted tip gets 0, each subsequent
/// one exactly the next integer. Rejected submissions consume nothing.
pub type TipId = u64;

/// Unix timestamp in seconds, supplied by the host chain clock.
pub type Timestamp = u64;

/// Maximum tip message length in bytes (the host string capacity).
pub const MAX_MESSAGE_BYTES: usize = 280;

/// Number of tip categories.
pub const CATEGORY_COUNT: usize = 7;

/// Purpose classification for a tip.
///
/// The set is closed: exactly seven variants, and [`Category::ALL`] fixes
/// the canonical order every aggregated query reports in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Tips for published content.
    Content,
    /// Tips for a rendered service.
    Service,
    /// Plain donations.
    Donation,
    /// Tips for educational material.
    Education,
    /// Tips for entertainment.
    Entertainment,
    /// Tips thanking someone for help.
    Help,
    /// Anything that fits none of the above.
    Other,
}

impl Category {
    /// All categories in canonical order.
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Content,
        Category::Service,
        Category::Donation,
        Category::Education,
        Category::Entertainment,
        Category::Help,
        Category::Other,
    ];

    /// The lowercase wire label for this category.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Content => "content",
            Category::Service => "service",
            Category::Donation => "donation",
            Category::Education => "education",
            Category::Entertainment => "entertainment",
            Category::Help => "help",
            Category::Other => "other",
        }
    }

    /// Parses a wire label.
    ///
    /// Case-sensitive and total over the seven canonical labels only;
    /// anything else is `None`.
    #[must_use]
    pub fn parse(label: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.label() == label)
    }

    /// The seven labels in canonical order.
    #[must_use]
    pub fn labels() -> [&'static str; CATEGORY_COUNT] {
        Category::ALL.map(Category::label)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
