//! Entity structs for every record the application reads or writes.

mod brand;
mod collection;
mod comparison;
mod insight;

pub use brand::{FranchiseBrand, NewFranchiseBrand};
pub use collection::{Collection, CollectionItem, CollectionItemWithBrand, CollectionWithItems};
pub use comparison::{Comparison, ComparisonWithBrands};
pub use insight::{InsightArticle, NewInsightArticle};
