//! Parameter-sweep driver.
//!
//! Runs the miner once per support threshold and the rule generator once
//! per confidence value. Runs are independent; a rejected threshold is
//! logged and skipped rather than aborting the rest of the sweep.

use basket_core::{
    generate_rules, mine_frequent_itemsets, AssociationRule, FrequentItemsets, TransactionStore,
};
use serde::Serialize;
use tracing::{info, warn};

/// Full results of one sweep, itemsets and rules included.
pub struct SweepOutcome {
    pub runs: Vec<SupportRun>,
}

/// One mining run at a single support threshold.
pub struct SupportRun {
    pub min_support: u64,
    pub frequent: FrequentItemsets,
    pub rule_passes: Vec<RulePass>,
}

/// One rule-generation pass at a single confidence value.
pub struct RulePass {
    pub min_confidence: f64,
    pub rules: Vec<AssociationRule>,
}

pub fn run_sweep(
    store: &TransactionStore,
    min_supports: &[u64],
    min_confidences: &[f64],
) -> SweepOutcome {
    let mut runs = Vec::new();

    for &min_support in min_supports {
        info!(min_support, "mining frequent itemsets");
        let frequent = match mine_frequent_itemsets(store, min_support) {
            Ok(frequent) => frequent,
            Err(err) => {
                warn!(min_support, %err, "skipping support threshold");
                continue;
            }
        };
        info!(
            min_support,
            frequent = frequent.len(),
            max_size = frequent.max_size(),
            "mining finished"
        );

        let mut rule_passes = Vec::new();
        for &min_confidence in min_confidences {
            match generate_rules(&frequent, min_confidence) {
                Ok(rules) => {
                    info!(min_confidence, rules = rules.len(), "rules generated");
                    rule_passes.push(RulePass {
                        min_confidence,
                        rules,
                    });
                }
                Err(err) => warn!(min_confidence, %err, "skipping confidence threshold"),
            }
        }

        runs.push(SupportRun {
            min_support,
            frequent,
            rule_passes,
        });
    }

    SweepOutcome { runs }
}

/// Count-level summary of a sweep, the machine-readable output surface.
#[derive(Debug, Serialize)]
pub struct SweepReport {
    pub transactions: usize,
    pub distinct_items: usize,
    pub runs: Vec<RunSummary>,
}

#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub min_support: u64,
    pub frequent_itemsets: usize,
    pub rule_counts: Vec<RuleCount>,
}

#[derive(Debug, Serialize)]
pub struct RuleCount {
    pub min_confidence: f64,
    pub rules: usize,
}

impl SweepReport {
    pub fn summarize(store: &TransactionStore, outcome: &SweepOutcome) -> Self {
        Self {
            transactions: store.len(),
            distinct_items: store.item_count(),
            runs: outcome
                .runs
                .iter()
                .map(|run| RunSummary {
                    min_support: run.min_support,
                    frequent_itemsets: run.frequent.len(),
                    rule_counts: run
                        .rule_passes
                        .iter()
                        .map(|pass| RuleCount {
                            min_confidence: pass.min_confidence,
                            rules: pass.rules.len(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> TransactionStore {
        let mut store = TransactionStore::new();
        store.push_transaction(["a", "b"]);
        store.push_transaction(["a", "b", "c"]);
        store.push_transaction(["a"]);
        store.push_transaction(["b", "c"]);
        store
    }

    #[test]
    fn test_sweep_runs_every_threshold() {
        let store = store();
        let outcome = run_sweep(&store, &[1, 2, 10], &[0.5, 0.9]);

        assert_eq!(outcome.runs.len(), 3);
        assert_eq!(outcome.runs[1].min_support, 2);
        assert_eq!(outcome.runs[1].frequent.len(), 5);
        assert_eq!(outcome.runs[1].rule_passes.len(), 2);
        // threshold 10 admits nothing but still reports a run
        assert!(outcome.runs[2].frequent.is_empty());
    }

    #[test]
    fn test_bad_thresholds_are_skipped_not_fatal() {
        let store = store();
        let outcome = run_sweep(&store, &[0, 2], &[1.5, 0.5]);

        // support 0 skipped entirely, confidence 1.5 skipped within the run
        assert_eq!(outcome.runs.len(), 1);
        assert_eq!(outcome.runs[0].min_support, 2);
        assert_eq!(outcome.runs[0].rule_passes.len(), 1);
        assert_eq!(outcome.runs[0].rule_passes[0].min_confidence, 0.5);
    }

    #[test]
    fn test_summary_counts() {
        let store = store();
        let outcome = run_sweep(&store, &[2], &[0.6]);
        let report = SweepReport::summarize(&store, &outcome);

        assert_eq!(report.transactions, 4);
        assert_eq!(report.distinct_items, 3);
        assert_eq!(report.runs[0].frequent_itemsets, 5);
        assert_eq!(report.runs[0].rule_counts[0].rules, 4);
    }
}
