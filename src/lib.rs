//! Local-first to-do list core.
//!
//! Two pieces: [`ops::store::TaskStore`] owns the canonical task collection
//! and keeps a durable snapshot in sync after every mutation, and
//! [`ops::project::project`] turns that collection plus a transient
//! [`model::filter::FilterSpec`] into the ordered sequence a presentation
//! layer displays. Rendering itself lives outside this crate.

pub mod io;
pub mod model;
pub mod ops;
