pub mod info_tag;
pub mod segment;
pub mod sort;
pub mod variant;

// re-export for cleaner imports
pub use self::info_tag::{InfoTagDeclaration, TagSource};
pub use self::segment::CnaSegment;
pub use self::sort::{SortDomain, SortKey};
pub use self::variant::VariantRecord;
