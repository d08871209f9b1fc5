pub(crate) mod aspect;
pub(crate) mod canvas;
pub(crate) mod program;
pub(crate) mod raster;
pub(crate) mod script;
pub(crate) mod svg;
