use yewdux::Store;

/// Whether the login modal is showing. There is only ever one modal.
#[derive(Debug, Default, Clone, PartialEq, Eq, Store)]
pub struct LoginModalState {
    pub open: bool,
}

impl LoginModalState {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Sidebar visibility on the dashboard. The sidebar's `open` class is derived
/// from this flag and nothing else.
#[derive(Debug, Default, Clone, PartialEq, Eq, Store)]
pub struct SidebarState {
    pub open: bool,
}

impl SidebarState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_flag_transitions() {
        let mut modal = LoginModalState::default();
        assert!(!modal.open);
        modal.open();
        modal.open();
        assert!(modal.open);
        modal.close();
        assert!(!modal.open);
    }

    #[test]
    fn sidebar_toggle_and_close() {
        let mut sidebar = SidebarState::default();
        sidebar.toggle();
        assert!(sidebar.open);
        sidebar.toggle();
        assert!(!sidebar.open);
        sidebar.toggle();
        sidebar.close();
        sidebar.close();
        assert!(!sidebar.open);
    }
}
