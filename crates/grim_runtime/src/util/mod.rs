pub mod appendable;

pub use appendable::{Appendable, render};
