pub(crate) mod ops;
pub(crate) mod palette;
pub(crate) mod parse;
