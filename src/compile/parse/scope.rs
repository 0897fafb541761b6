use crate::compile::tree::Tree;

/// A distinct set of Tree instances.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scope<'source> {
    pub data: Vec<Tree<'source>>,
}

impl<'source> Scope<'source> {
    /// Create a new Scope.
    #[inline]
    pub fn new() -> Self {
        Self { data: vec![] }
    }

    /// Return an iterator over the Tree instances.
    pub fn iter(&self) -> std::slice::Iter<'_, Tree<'source>> {
        self.data.iter()
    }
}
