//! ID prefix constants.
//!
//! IDs are generated by the database layer as `{prefix}-{8 hex chars}`.

pub const PREFIX_BRAND: &str = "brd";
pub const PREFIX_COLLECTION: &str = "col";
pub const PREFIX_COLLECTION_ITEM: &str = "itm";
pub const PREFIX_COMPARISON: &str = "cmp";
pub const PREFIX_INSIGHT: &str = "ins";

/// Every prefix in use, for exhaustive tests.
pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_BRAND,
    PREFIX_COLLECTION,
    PREFIX_COLLECTION_ITEM,
    PREFIX_COMPARISON,
    PREFIX_INSIGHT,
];
