/// How many past generations a repeat is searched in.
pub(super) const HISTORY_LEN: usize = 10;

/// Ring of recent alive-plane checksums.
#[derive(Debug, Clone, Default)]
pub(super) struct ChecksumHistory {
    ring: [u64; HISTORY_LEN],
    len: usize,
    next: usize,
}

impl ChecksumHistory {
    /// History whose only entry is the board a run starts from.
    pub(super) fn starting_at(hash: u64) -> Self {
        let mut history = Self::default();
        history.record(hash);
        history
    }

    /// Record `hash`; true when it matches one of the stored entries.
    pub(super) fn record(&mut self, hash: u64) -> bool {
        let seen = self.ring[..self.len].contains(&hash);
        self.ring[self.next] = hash;
        self.next = (self.next + 1) % HISTORY_LEN;
        self.len = (self.len + 1).min(HISTORY_LEN);
        seen
    }

    pub(super) fn restart(&mut self, hash: u64) {
        *self = Self::starting_at(hash);
    }
}
