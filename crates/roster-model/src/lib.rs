//! Data model for roster reports.
//!
//! Records arrive from the backend as loosely-shaped JSON rows; everything a
//! listing page needs to shape them (field kinds, columns, layouts, and the
//! transient query/sort/page selections) is described here.

pub mod error;
pub mod field;
pub mod layout;
pub mod record;
pub mod scope;
pub mod view;

pub use error::{Result, RosterError};
pub use field::{ColumnSpec, FieldKind, FieldRef};
pub use layout::ReportLayout;
pub use record::{FieldValue, Record};
pub use scope::{DateRange, RecordScope};
pub use view::{Page, Query, SortDirection, SortSpec};
