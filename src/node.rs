#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) id: usize,
    pub(crate) next: Option<usize>,
    pub(crate) value: Option<T>,
}

impl<T> Node<T> {
    /// Is this node live (not the sentinel)?
    pub(crate) fn is_live(&self) -> bool {
        self.value.is_some()
    }
}
