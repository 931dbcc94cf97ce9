pub(crate) mod config;
pub(crate) mod sprite;
pub(crate) mod state;
