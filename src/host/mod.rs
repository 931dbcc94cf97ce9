//! Collaborators the host environment injects into an [`crate::Animator`].

pub(crate) mod feedback;
pub(crate) mod scheduler;
