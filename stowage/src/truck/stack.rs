use crate::entities::Package;

/// LIFO record of the packages currently committed to the truck,
/// in physical load order. Top = most recently loaded.
/// No random-access removal: popping mirrors exactly the push order.
#[derive(Debug, Clone, Default)]
pub struct TruckStack {
    loads: Vec<Package>,
}

impl TruckStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a package on top of the stack. Always succeeds.
    pub fn push(&mut self, pkg: Package) {
        self.loads.push(pkg);
    }

    /// Unloads the most recently loaded package, `None` if the truck is empty.
    pub fn pop(&mut self) -> Option<Package> {
        self.loads.pop()
    }

    pub fn peek(&self) -> Option<&Package> {
        self.loads.last()
    }

    /// Packages currently on the truck, bottom to top
    pub fn loads(&self) -> &[Package] {
        &self.loads
    }

    pub fn len(&self) -> usize {
        self.loads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }
}
