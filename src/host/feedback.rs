use std::cell::RefCell;
use std::rc::Rc;

use crate::animation::sprite::AnimationInfo;

/// Receives a snapshot after every rendered tick and every manual step.
pub trait FeedbackSink {
    fn notify(&mut self, info: &AnimationInfo);
}

impl<F> FeedbackSink for F
where
    F: FnMut(&AnimationInfo),
{
    fn notify(&mut self, info: &AnimationInfo) {
        self(info)
    }
}

/// Logs each snapshot at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingFeedback;

impl FeedbackSink for TracingFeedback {
    fn notify(&mut self, info: &AnimationInfo) {
        tracing::debug!(
            frame = info.frame_index,
            tick = info.tick_count,
            total_ticks = info.total_ticks,
            total_frames = info.total_frames,
            total_loops = info.total_loops,
            ticks_per_frame = info.current_ticks_per_frame,
            "animation feedback"
        );
    }
}

/// Keeps every snapshot. Clones share the same log, so one clone can be handed to an
/// animator while another is read back.
#[derive(Clone, Debug, Default)]
pub struct RecordingFeedback {
    log: Rc<RefCell<Vec<AnimationInfo>>>,
}

impl RecordingFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshots(&self) -> Vec<AnimationInfo> {
        self.log.borrow().clone()
    }

    pub fn last(&self) -> Option<AnimationInfo> {
        self.log.borrow().last().copied()
    }

    pub fn len(&self) -> usize {
        self.log.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.borrow().is_empty()
    }
}

impl FeedbackSink for RecordingFeedback {
    fn notify(&mut self, info: &AnimationInfo) {
        self.log.borrow_mut().push(*info);
    }
}

/// A host range input bound to the current frame.
///
/// Its range is `0..=max`; the animator keeps `max` at `number_of_frames - 1` and pushes the
/// current frame after each notification. User input flows back through
/// [`crate::Animator::seek`].
pub trait FrameSlider {
    fn set_range(&mut self, max: u32);
    fn set_value(&mut self, index: u32);
}

#[cfg(test)]
#[path = "../../tests/unit/host/feedback.rs"]
mod tests;
