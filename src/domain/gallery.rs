// src/domain/gallery.rs

/// Which image the detail page shows and whether the full-screen viewer is open.
/// The index is always valid for the gallery it was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gallery {
    len: usize,
    active: usize,
    viewer_open: bool,
}

impl Gallery {
    /// `len` is clamped to at least one image (the cover).
    pub fn new(len: usize) -> Self {
        Self {
            len: len.max(1),
            active: 0,
            viewer_open: false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_viewer_open(&self) -> bool {
        self.viewer_open
    }

    /// Out-of-range indexes clamp to the last image.
    pub fn select(&mut self, index: usize) {
        self.active = index.min(self.len - 1);
    }

    pub fn open(&mut self, index: usize) {
        self.select(index);
        self.viewer_open = true;
    }

    pub fn close(&mut self) {
        self.viewer_open = false;
    }

    pub fn next(&mut self) {
        self.active = (self.active + 1) % self.len;
    }

    pub fn previous(&mut self) {
        self.active = (self.active + self.len - 1) % self.len;
    }

    /// Binds `photo` and `viewer` query parameters. Anything unparsable is ignored.
    pub fn from_pairs<'a, I>(len: usize, pairs: I) -> Gallery
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut gallery = Gallery::new(len);
        for (key, value) in pairs {
            match key {
                "photo" => {
                    if let Ok(index) = value.trim().parse::<usize>() {
                        gallery.select(index);
                    }
                }
                "viewer" => gallery.viewer_open = matches!(value.trim(), "1" | "true" | "on"),
                _ => {}
            }
        }
        gallery
    }

    /// Query string for this state, e.g. `photo=2&viewer=1`.
    pub fn to_query(&self) -> String {
        if self.viewer_open {
            format!("photo={}&viewer=1", self.active)
        } else {
            format!("photo={}", self.active)
        }
    }

    /// Copy of `self` with one change applied, for building links.
    pub fn with(&self, change: impl FnOnce(&mut Gallery)) -> Gallery {
        let mut next = *self;
        change(&mut next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_clamps_to_last_image() {
        let mut g = Gallery::new(5);
        g.select(3);
        assert_eq!(g.active(), 3);
        g.select(42);
        assert_eq!(g.active(), 4);
    }

    #[test]
    fn next_and_previous_wrap() {
        let mut g = Gallery::new(3);
        g.previous();
        assert_eq!(g.active(), 2);
        g.next();
        assert_eq!(g.active(), 0);
        g.next();
        g.next();
        g.next();
        assert_eq!(g.active(), 0);
    }

    #[test]
    fn empty_gallery_still_has_the_cover() {
        let mut g = Gallery::new(0);
        assert_eq!(g.len(), 1);
        g.next();
        g.select(7);
        assert_eq!(g.active(), 0);
    }

    #[test]
    fn open_and_close_viewer() {
        let mut g = Gallery::new(5);
        g.open(2);
        assert!(g.is_viewer_open());
        assert_eq!(g.to_query(), "photo=2&viewer=1");
        g.close();
        assert!(!g.is_viewer_open());
        assert_eq!(g.active(), 2);
    }

    #[test]
    fn query_binding_ignores_garbage() {
        let g = Gallery::from_pairs(5, [("photo", "x"), ("viewer", "1")]);
        assert_eq!(g.active(), 0);
        assert!(g.is_viewer_open());

        let g = Gallery::from_pairs(5, [("photo", "9")]);
        assert_eq!(g.active(), 4);
        assert!(!g.is_viewer_open());
    }
}
