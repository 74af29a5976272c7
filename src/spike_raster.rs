const WORD_BITS: usize = u64::BITS as usize;

/// Sliding window over the most recent `depth` rows of the step-by-neuron spike raster.
///
/// Rows are bit packed. A row is cleared only when its slot is reused for a step `depth` steps
/// later, so within the window a set bit stays set.
#[derive(Debug)]
pub struct SpikeRaster {
    rows: Vec<Vec<u64>>,
    current_t: usize,
}

impl SpikeRaster {
    pub fn new(num_neurons: usize, depth: usize) -> SpikeRaster {
        let num_words = (num_neurons + WORD_BITS - 1) / WORD_BITS;

        SpikeRaster {
            rows: vec![vec![0; num_words]; depth.max(1)],
            current_t: 0,
        }
    }

    pub fn is_within_horizon(&self, t: usize) -> bool {
        t <= self.current_t && self.current_t - t < self.rows.len()
    }

    /// Moves the window forward so that `t` is the newest row. Rows skipped over start empty.
    pub fn advance_to(&mut self, t: usize) {
        #[cfg(debug_assertions)]
        assert!(t >= self.current_t);

        let num_cleared = (t - self.current_t).min(self.rows.len());

        for offset in 0..num_cleared {
            let pos = self.get_pos(t - offset);
            self.rows[pos].iter_mut().for_each(|word| *word = 0);
        }

        self.current_t = t;
    }

    pub fn mark(&mut self, t: usize, nid: usize) {
        #[cfg(debug_assertions)]
        assert!(self.is_within_horizon(t));

        let pos = self.get_pos(t);
        self.rows[pos][nid / WORD_BITS] |= 1 << (nid % WORD_BITS);
    }

    pub fn is_marked(&self, t: usize, nid: usize) -> bool {
        #[cfg(debug_assertions)]
        assert!(self.is_within_horizon(t));

        let pos = self.get_pos(t);
        self.rows[pos][nid / WORD_BITS] & (1 << (nid % WORD_BITS)) != 0
    }

    pub fn count_marked(&self, t: usize, nids: &[usize]) -> usize {
        nids.iter().filter(|&&nid| self.is_marked(t, nid)).count()
    }

    fn get_pos(&self, t: usize) -> usize {
        t % self.rows.len()
    }
}
