pub(crate) mod dashboard_layout;
pub(crate) mod layout;
