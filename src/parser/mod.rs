mod list;

pub use list::{ListEntry, ListReader};
