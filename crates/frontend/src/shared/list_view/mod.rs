//! Client-side list view core: filtering, sorting, pagination, row
//! selection and inline editing over an in-memory record set.
//!
//! Each view owns one `ListViewModel` per table plus a
//! `SelectionTracker` and a `RecordEditor`; rendering composes their
//! output but the components themselves never touch the network.

pub mod editor;
pub mod model;
pub mod selection;

pub use editor::{Editable, EditError, RecordEditor};
pub use model::{DateWindow, FilterSpec, ListRecord, ListViewModel, CATEGORY_ALL};
pub use selection::SelectionTracker;
