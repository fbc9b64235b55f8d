mod cursor;
mod list;
mod node;

pub use cursor::Cursor;
pub use list::{ForwardList, IntoIter, Iter, IterMut};
