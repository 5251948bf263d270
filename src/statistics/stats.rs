#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    expanded: usize,
    pushed: usize,
    peak_frontier: usize,
    peak_retained: usize,
}

impl Stats {
    pub fn new() -> Self {
        Stats {
            expanded: 0,
            pushed: 0,
            peak_frontier: 0,
            peak_retained: 0,
        }
    }

    /// Record that a vertex had its neighbors pushed onto the frontier
    pub fn bump_expanded(&mut self) {
        self.expanded += 1
    }

    /// Record that `amount` entries were pushed onto the frontier
    pub fn bump_pushed(&mut self, amount: usize) {
        self.pushed += amount
    }

    /// Record the current frontier size, keeping the largest one seen
    pub fn observe_frontier(&mut self, frontier_len: usize) {
        self.peak_frontier = self.peak_frontier.max(frontier_len)
    }

    /// Record how many vertex entries the traversal currently holds in memory
    /// (frontier plus whatever it keeps to rebuild paths), keeping the largest
    pub fn observe_retained(&mut self, entries: usize) {
        self.peak_retained = self.peak_retained.max(entries)
    }

    pub fn get_expanded(&self) -> usize {
        self.expanded
    }

    pub fn get_pushed(&self) -> usize {
        self.pushed
    }

    pub fn get_peak_frontier(&self) -> usize {
        self.peak_frontier
    }

    pub fn get_peak_retained(&self) -> usize {
        self.peak_retained
    }

    /// Sums the counters; peaks take the larger of the two.
    pub fn merge(&self, other: &Stats) -> Stats {
        Stats {
            expanded: self.expanded + other.expanded,
            pushed: self.pushed + other.pushed,
            peak_frontier: self.peak_frontier.max(other.peak_frontier),
            peak_retained: self.peak_retained.max(other.peak_retained),
        }
    }
}

impl Default for Stats {
    fn default() -> Self {
        Stats::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_initialized_to_zero() {
        let stats = Stats::new();
        assert_eq!(stats.get_expanded(), 0);
        assert_eq!(stats.get_pushed(), 0);
        assert_eq!(stats.get_peak_frontier(), 0);
        assert_eq!(stats.get_peak_retained(), 0);
        assert_eq!(stats, Stats::default());
    }

    #[test]
    fn test_bump_expanded_multiple_times() {
        let mut stats = Stats::new();
        stats.bump_expanded();
        stats.bump_expanded();
        stats.bump_expanded();
        assert_eq!(stats.get_expanded(), 3);
        assert_eq!(stats.get_pushed(), 0);
    }

    #[test]
    fn test_bump_pushed_accumulates() {
        let mut stats = Stats::new();
        stats.bump_pushed(5);
        stats.bump_pushed(10);
        stats.bump_pushed(0);
        assert_eq!(stats.get_pushed(), 15);
    }

    #[test]
    fn test_peak_frontier_keeps_maximum() {
        let mut stats = Stats::new();
        stats.observe_frontier(4);
        stats.observe_frontier(9);
        stats.observe_frontier(2);
        assert_eq!(stats.get_peak_frontier(), 9);
    }

    #[test]
    fn test_merge() {
        let mut a = Stats::new();
        a.bump_expanded();
        a.bump_pushed(3);
        a.observe_frontier(3);
        a.observe_retained(11);

        let mut b = Stats::new();
        b.bump_expanded();
        b.bump_expanded();
        b.bump_pushed(7);
        b.observe_frontier(6);
        b.observe_retained(8);

        let merged = a.merge(&b);
        assert_eq!(merged.get_expanded(), 3);
        assert_eq!(merged.get_pushed(), 10);
        assert_eq!(merged.get_peak_frontier(), 6);
        assert_eq!(merged.get_peak_retained(), 11);
    }
}
