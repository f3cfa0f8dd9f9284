use crate::gametypes::Location;

/// Read only view of a maze as the search engine sees it.
pub trait Grid {
    fn width(&self) -> usize;

    fn depth(&self) -> usize;

    /// Cells outside the maze count as blocked.
    fn is_blocked(&self, location: Location) -> bool;

    /// Ordered neighbor offsets, used identically by every expansion.
    fn directions(&self) -> &[Location];

    /// True for the searchable interior. The outermost ring of cells is excluded.
    fn in_bounds(&self, location: Location) -> bool {
        location.x >= 1
            && location.z >= 1
            && (location.x as i64) < self.width() as i64 - 1
            && (location.z as i64) < self.depth() as i64 - 1
    }

    fn is_open(&self, location: Location) -> bool {
        self.in_bounds(location) && !self.is_blocked(location)
    }
}

impl<T: Grid + ?Sized> Grid for &T {
    fn width(&self) -> usize {
        (**self).width()
    }

    fn depth(&self) -> usize {
        (**self).depth()
    }

    fn is_blocked(&self, location: Location) -> bool {
        (**self).is_blocked(location)
    }

    fn directions(&self) -> &[Location] {
        (**self).directions()
    }

    fn in_bounds(&self, location: Location) -> bool {
        (**self).in_bounds(location)
    }
}
