pub(crate) mod config;
pub(crate) mod format;
pub(crate) mod page;
pub(crate) mod records;
pub(crate) mod series;
pub(crate) mod source;
