//! Prize resolution: the weighted draw and the rotation math that makes the
//! animation land on the drawn wedge.

pub mod rotation;
pub mod selector;
