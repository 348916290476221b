//! Provider implementations

pub mod ernie;
