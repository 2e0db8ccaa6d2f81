use std::time::{Duration, Instant};

/// Decides when the window loop should issue the next redraw.
///
/// With no target FPS every turn of the loop is ready and Fifo presentation
/// provides the per-frame wait; with a cap the pacer hands the event loop a
/// deadline to sleep until.
#[derive(Debug)]
pub(crate) struct FramePacer {
    interval: Option<Duration>,
    next_frame: Instant,
}

impl FramePacer {
    pub(crate) fn new(target_fps: Option<f32>) -> Self {
        let interval = target_fps
            .filter(|fps| *fps > 0.0)
            .map(|fps| Duration::from_secs_f32(1.0 / fps));
        Self {
            interval,
            next_frame: Instant::now(),
        }
    }

    pub(crate) fn ready_for_frame(&self, now: Instant) -> bool {
        match self.interval {
            Some(_) => now >= self.next_frame,
            None => true,
        }
    }

    pub(crate) fn mark_rendered(&mut self, now: Instant) {
        if let Some(interval) = self.interval {
            self.next_frame = now + interval;
        }
    }

    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        self.interval.map(|_| self.next_frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncapped_pacer_is_always_ready() {
        let mut pacer = FramePacer::new(None);
        let now = Instant::now();
        assert!(pacer.ready_for_frame(now));
        pacer.mark_rendered(now);
        assert!(pacer.ready_for_frame(now));
        assert_eq!(pacer.next_deadline(), None);
    }

    #[test]
    fn capped_pacer_waits_out_the_interval() {
        let mut pacer = FramePacer::new(Some(10.0));
        let now = Instant::now();
        assert!(pacer.ready_for_frame(now));
        pacer.mark_rendered(now);
        assert!(!pacer.ready_for_frame(now));
        let deadline = pacer.next_deadline().unwrap();
        assert_eq!(deadline, now + Duration::from_secs_f32(0.1));
        assert!(pacer.ready_for_frame(deadline));
    }

    #[test]
    fn zero_fps_means_uncapped() {
        let pacer = FramePacer::new(Some(0.0));
        assert_eq!(pacer.next_deadline(), None);
        assert!(pacer.ready_for_frame(Instant::now()));
    }
}
