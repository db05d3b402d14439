//! Pattern selection and distance-field computation.
//!
//! Two stages run here, in order. Selection compiles the user's regular
//! expression and filters the address matrix down to the immutable
//! [`SelectedSet`] snapshot. Distance computation then maps every cell
//! to its minimum digit-wise mismatch count against that snapshot,
//! producing the [`DistanceField`] consumed by colorization.
//!
//! Both stages are data-parallel maps over independent cells. The
//! selected set is constructed once by a single owner and only ever
//! borrowed by workers, so no synchronization is involved.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod distance;
pub mod error;
pub mod select;

pub use distance::DistanceField;
pub use error::FieldError;
pub use select::SelectedSet;
