/// Collapses a burst of values into one delivery per animation frame.
///
/// The caller offers every incoming value. The first offer after a delivery
/// returns `true`, and the caller then schedules a frame. The frame callback
/// calls [`FrameCoalescer::take`] and gets the most recent value. Values
/// offered in between replace each other, so nothing but the latest one is
/// ever delivered.
#[derive(Debug)]
pub struct FrameCoalescer<T> {
    latest: Option<T>,
}

impl<T> Default for FrameCoalescer<T> {
    fn default() -> Self {
        FrameCoalescer { latest: None }
    }
}

impl<T> FrameCoalescer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a frame has to be scheduled for this value.
    pub fn offer(&mut self, value: T) -> bool {
        self.latest.replace(value).is_none()
    }

    pub fn take(&mut self) -> Option<T> {
        self.latest.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_offer_requests_a_frame() {
        let mut coalescer = FrameCoalescer::new();
        assert!(coalescer.offer(1));
        assert!(!coalescer.offer(2));
        assert!(!coalescer.offer(3));
        assert_eq!(coalescer.take(), Some(3));
    }

    #[test]
    fn take_yields_the_last_value_and_rearms() {
        let mut coalescer = FrameCoalescer::new();
        coalescer.offer(10.0);
        coalescer.offer(20.0);
        coalescer.offer(35.5);
        assert_eq!(coalescer.take(), Some(35.5));
        assert_eq!(coalescer.take(), None);

        assert!(coalescer.offer(40.0));
        assert_eq!(coalescer.take(), Some(40.0));
    }

    #[test]
    fn stream_ends_on_its_final_value() {
        let mut coalescer = FrameCoalescer::new();
        let mut delivered = Vec::new();
        for (i, v) in (0..50).enumerate() {
            coalescer.offer(v);
            // A frame boundary every 7 events.
            if i % 7 == 6 {
                delivered.extend(coalescer.take());
            }
        }
        delivered.extend(coalescer.take());
        assert_eq!(delivered.last(), Some(&49));
        assert!(delivered.windows(2).all(|w| w[0] < w[1]));
    }
}
