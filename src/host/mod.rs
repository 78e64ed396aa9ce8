pub(crate) mod api;
pub(crate) mod headless;
pub(crate) mod theme;
