use crate::character::ActiveBuff;
use crate::item::Item;
use crate::stats::StatId;

/// What a mutation did besides the change that was asked for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecomputeReport {
    /// Stats materialised with zero values because something referenced them.
    pub repaired: Vec<StatId>,
    /// Buffs dropped, newest first, because capacity shrank below usage.
    pub evicted: Vec<ActiveBuff>,
    /// Items taken out of slots that were equipped over.
    pub displaced: Vec<Item>,
}

impl RecomputeReport {
    pub fn is_clean(&self) -> bool {
        self.repaired.is_empty() && self.evicted.is_empty() && self.displaced.is_empty()
    }

    pub(crate) fn note_repaired(&mut self, stats: impl IntoIterator<Item = StatId>) {
        self.repaired.extend(stats);
        self.repaired.sort_unstable();
        self.repaired.dedup();
    }
}

/// Result of an accepted buff cast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CastOutcome {
    /// Same-strain buff the cast replaced.
    pub replaced: Option<ActiveBuff>,
    pub report: RecomputeReport,
}
