pub(crate) mod polygon;
pub(crate) mod sections;
pub(crate) mod state;
