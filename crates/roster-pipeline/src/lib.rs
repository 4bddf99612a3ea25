//! Tabular data pipeline shared by every roster listing page.
//!
//! ```text
//! records -> scope -> filter(query) -> sort(spec) -> paginate(page) -> page rows
//!                                                 \-> export (unpaginated)
//! ```
//!
//! Every stage is a pure function over borrowed records; the only state is the
//! caller-owned [`ViewState`].

pub mod filter;
pub mod format;
pub mod normalize;
pub mod paginate;
pub mod projection;
pub mod reports;
pub mod scope;
pub mod sort;
pub mod view;

pub use filter::filter;
pub use format::{DisplayFormatter, StandardFormatter};
pub use normalize::{ComparableValue, display_value, normalize, parse_datetime, search_text};
pub use paginate::{PageWindow, page_count, paginate};
pub use projection::{headers, project_row, project_rows};
pub use reports::{builtin_layouts, layout_by_key};
pub use scope::apply_scope;
pub use sort::sort;
pub use view::{ViewOutput, ViewState};
