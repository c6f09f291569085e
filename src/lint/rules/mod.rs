//! Built-in lint rules.
//!
//! One rule per lint section, in the order the sections are reported.

pub mod dates;
pub mod document_structure;
pub mod keywords;
pub mod naming;
pub mod paths;
pub mod status_codes;
pub mod time_series;
pub mod versioning;

pub use dates::DatesRule;
pub use document_structure::DocumentStructureRule;
pub use keywords::KeywordsRule;
pub use naming::NamingRule;
pub use paths::PathsRule;
pub use status_codes::StatusCodesRule;
pub use time_series::TimeSeriesRule;
pub use versioning::VersioningRule;
