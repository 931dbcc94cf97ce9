pub(crate) mod cpu;
pub(crate) mod recording;
pub(crate) mod surface;
