//! Aggregate result of one clear-all run.

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The server had no collections; nothing was prompted or deleted.
    AlreadyEmpty,
    /// The operator did not type the confirmation phrase.
    Cancelled,
    /// Deletion was attempted for every listed collection.
    Completed {
        /// Number of successful deletions.
        deleted: usize,
        /// Names whose deletion failed, in listing order.
        failed: Vec<String>,
    },
}

/// Totals gathered over one run. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of collections the server listed.
    pub collections: usize,
    /// Sum of point counts over all listed collections.
    pub total_points: u64,
    pub outcome: RunOutcome,
}

impl RunSummary {
    pub(crate) fn empty() -> Self {
        Self {
            collections: 0,
            total_points: 0,
            outcome: RunOutcome::AlreadyEmpty,
        }
    }

    /// Number of collections successfully deleted.
    pub fn deleted(&self) -> usize {
        match &self.outcome {
            RunOutcome::Completed { deleted, .. } => *deleted,
            _ => 0,
        }
    }

    /// Number of deletion requests issued.
    pub fn attempted(&self) -> usize {
        match &self.outcome {
            RunOutcome::Completed { deleted, failed } => deleted + failed.len(),
            _ => 0,
        }
    }

    /// Returns `true` if deletion ran and every collection was removed.
    pub fn all_deleted(&self) -> bool {
        matches!(&self.outcome, RunOutcome::Completed { failed, .. } if failed.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_for_partial_failure() {
        let summary = RunSummary {
            collections: 3,
            total_points: 10,
            outcome: RunOutcome::Completed {
                deleted: 2,
                failed: vec!["logs".into()],
            },
        };
        assert_eq!(summary.deleted(), 2);
        assert_eq!(summary.attempted(), 3);
        assert!(!summary.all_deleted());
    }

    #[test]
    fn early_exits_attempt_nothing() {
        let empty = RunSummary::empty();
        assert_eq!(empty.attempted(), 0);
        assert!(!empty.all_deleted());

        let cancelled = RunSummary {
            outcome: RunOutcome::Cancelled,
            ..RunSummary::empty()
        };
        assert_eq!(cancelled.deleted(), 0);
        assert_eq!(cancelled.attempted(), 0);
    }
}
