//! Page-wide side effects owned by an open dialog.

/// A resource taken when a dialog opens and handed back when it closes.
///
/// At most one value is held at a time, so re-syncing an open dialog acquires nothing twice
/// and closing hands back exactly what was taken.
#[derive(Debug)]
pub struct Hold<T> {
    held: Option<T>,
}

impl<T> Default for Hold<T> {
    fn default() -> Self {
        Self { held: None }
    }
}

impl<T> Hold<T> {
    pub fn is_held(&self) -> bool {
        self.held.is_some()
    }

    /// Bring the hold in line with `open`.
    ///
    /// Opening calls `acquire`; closing returns the held value for the caller to release.
    pub fn sync(&mut self, open: bool, acquire: impl FnOnce() -> T) -> Option<T> {
        match (open, self.held.is_some()) {
            (true, false) => {
                self.held = Some(acquire());
                None
            }
            (false, true) => self.held.take(),
            _ => None,
        }
    }

    /// Give back whatever is held, e.g. on unmount.
    pub fn release(&mut self) -> Option<T> {
        self.held.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_acquires_once() {
        let mut hold = Hold::default();
        let mut acquired = 0;

        assert_eq!(hold.sync(true, || { acquired += 1; "listener" }), None);
        assert_eq!(hold.sync(true, || { acquired += 1; "second" }), None);
        assert_eq!(acquired, 1);
        assert!(hold.is_held());
    }

    #[test]
    fn test_close_releases_what_was_taken() {
        let mut hold = Hold::default();
        hold.sync(true, || 7);

        assert_eq!(hold.sync(false, || unreachable!()), Some(7));
        assert!(!hold.is_held());
        // already closed: nothing left to release
        assert_eq!(hold.sync(false, || unreachable!()), None);
    }

    #[test]
    fn test_closed_dialog_holds_nothing() {
        let mut hold: Hold<u8> = Hold::default();
        assert_eq!(hold.sync(false, || unreachable!()), None);
        assert_eq!(hold.release(), None);
    }

    #[test]
    fn test_unmount_while_open() {
        let mut hold = Hold::default();
        hold.sync(true, || "listener");

        assert_eq!(hold.release(), Some("listener"));
        assert_eq!(hold.release(), None);

        // reopened after release: acquired afresh
        assert_eq!(hold.sync(true, || "again"), None);
        assert!(hold.is_held());
    }
}
