use super::*;

fn info(frame_index: u32) -> AnimationInfo {
    AnimationInfo {
        frame_index,
        tick_count: 0,
        total_ticks: 0,
        total_frames: 0,
        total_loops: 0,
        ticks_per_frame: 1,
        current_ticks_per_frame: 1,
        slomo: false,
        number_of_frames: 4,
        frame_width: 8.0,
        sheet_width: 32,
        sheet_height: 8,
        render_width: 32,
        render_height: 8,
    }
}

#[test]
fn recording_clones_share_one_log() {
    let rec = RecordingFeedback::new();
    let mut sink: Box<dyn FeedbackSink> = Box::new(rec.clone());
    assert!(rec.is_empty());

    sink.notify(&info(1));
    sink.notify(&info(2));
    assert_eq!(rec.len(), 2);
    assert_eq!(rec.last().map(|i| i.frame_index), Some(2));
    assert_eq!(
        rec.snapshots().iter().map(|i| i.frame_index).collect::<Vec<_>>(),
        vec![1, 2]
    );
}

#[test]
fn closures_are_sinks() {
    let mut seen = Vec::new();
    {
        let mut sink = |i: &AnimationInfo| seen.push(i.frame_index);
        sink.notify(&info(3));
    }
    assert_eq!(seen, vec![3]);
}

#[test]
fn tracing_sink_accepts_snapshots() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    TracingFeedback.notify(&info(0));
}
