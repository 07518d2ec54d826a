//! Shape emitters, one per kind of generated declaration.
//!
//! Each emitter registers the types its declaration references with the
//! [`Context`](crate::context::Context), then renders its template with the
//! resolved names.

pub mod list;
pub mod map;
pub mod set;
pub mod structs;
