// Disk representation

/// A sized unit; larger disks may never rest atop smaller ones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disk {
    size: usize,
}

impl Disk {
    pub fn new(size: usize) -> Self {
        Disk { size }
    }

    /// Size doubles as the stacking key and the render width
    pub fn size(&self) -> usize {
        self.size
    }
}
