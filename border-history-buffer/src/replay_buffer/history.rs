//! Location of the history window of a sampled transition.

/// The run `[start, start + len)` of chronological indices preceding an anchor.
///
/// The run ends right before the anchor. Every transition in it belongs to the
/// episode of the anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistorySegment {
    /// Chronological index of the first transition of the window.
    pub start: usize,

    /// Number of real (non-padded) transitions in the window.
    pub len: usize,
}

impl HistorySegment {
    /// Locates the history window of `anchor`.
    ///
    /// The window starts at `anchor - max_his_len` (or 0) and is moved right past the
    /// last index `k` in `[anchor - max_his_len, anchor)` for which `is_done(k)` holds.
    ///
    /// ```rust
    /// use border_history_buffer::HistorySegment;
    ///
    /// let dones = [false, false, true, false, false, false];
    /// let seg = HistorySegment::locate(|k| dones[k], 5, 4);
    /// assert_eq!(seg, HistorySegment { start: 3, len: 2 });
    /// ```
    pub fn locate(is_done: impl Fn(usize) -> bool, anchor: usize, max_his_len: usize) -> Self {
        let lower = anchor.saturating_sub(max_his_len);
        let start = (lower..anchor)
            .rev()
            .find(|&k| is_done(k))
            .map_or(lower, |k| k + 1);

        Self {
            start,
            len: anchor - start,
        }
    }

    /// Number of padded rows in a window of `max_his_len` rows.
    pub fn n_pads(&self, max_his_len: usize) -> usize {
        max_his_len - self.len
    }

    /// Chronological index of the transition copied into row `t` of the window.
    ///
    /// Padded rows repeat the first transition of the segment.
    pub fn source(&self, t: usize, max_his_len: usize) -> usize {
        self.start + t.saturating_sub(self.n_pads(max_his_len))
    }
}

#[cfg(test)]
mod test {
    use super::HistorySegment;

    fn locate(dones: &[u8], anchor: usize, max_his_len: usize) -> HistorySegment {
        HistorySegment::locate(|k| dones[k] == 1, anchor, max_his_len)
    }

    #[test]
    fn test_no_boundary() {
        let dones = [0, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(locate(&dones, 5, 3), HistorySegment { start: 2, len: 3 });
        assert_eq!(locate(&dones, 3, 3), HistorySegment { start: 0, len: 3 });
    }

    #[test]
    fn test_boundary_in_window() {
        // Episodes: [0, 1, 2], [3, 4, 5, 6], [7]
        let dones = [0, 0, 1, 0, 0, 0, 1, 0];
        assert_eq!(locate(&dones, 5, 4), HistorySegment { start: 3, len: 2 });
        assert_eq!(locate(&dones, 6, 4), HistorySegment { start: 3, len: 3 });
        assert_eq!(locate(&dones, 7, 4), HistorySegment { start: 7, len: 0 });
    }

    #[test]
    fn test_last_boundary_wins() {
        let dones = [0, 1, 0, 1, 0, 0];
        assert_eq!(locate(&dones, 5, 5), HistorySegment { start: 4, len: 1 });
    }

    #[test]
    fn test_boundary_before_window_is_ignored() {
        let dones = [1, 0, 0, 0, 0];
        assert_eq!(locate(&dones, 4, 3), HistorySegment { start: 1, len: 3 });
    }

    #[test]
    fn test_source() {
        let seg = HistorySegment { start: 3, len: 2 };
        let rows = (0..4).map(|t| seg.source(t, 4)).collect::<Vec<_>>();
        assert_eq!(rows, vec![3, 3, 3, 4]);

        let seg = HistorySegment { start: 2, len: 3 };
        let rows = (0..3).map(|t| seg.source(t, 3)).collect::<Vec<_>>();
        assert_eq!(rows, vec![2, 3, 4]);

        let seg = HistorySegment { start: 7, len: 0 };
        let rows = (0..2).map(|t| seg.source(t, 2)).collect::<Vec<_>>();
        assert_eq!(rows, vec![7, 7]);
    }
}
