//! Human-readable rendering of sweep results.

use basket_core::{AssociationRule, Itemset, TransactionStore};

use crate::sweep::SweepOutcome;

/// Render an itemset with resolved item names: `{bread, milk}`.
pub fn render_itemset(store: &TransactionStore, itemset: &Itemset) -> String {
    let names: Vec<&str> = itemset
        .iter()
        .map(|id| store.interner().resolve(id).unwrap_or("?"))
        .collect();
    format!("{{{}}}", names.join(", "))
}

/// Render a rule: `{bread} => {milk} (confidence 0.667)`.
pub fn render_rule(store: &TransactionStore, rule: &AssociationRule) -> String {
    format!(
        "{} => {} (confidence {:.3})",
        render_itemset(store, &rule.antecedent),
        render_itemset(store, &rule.consequent),
        rule.confidence
    )
}

/// Print per-threshold summaries, and the full pattern/rule listings when
/// `show_patterns` is set.
pub fn print_outcome(store: &TransactionStore, outcome: &SweepOutcome, show_patterns: bool) {
    for run in &outcome.runs {
        println!(
            "minimum support {}: {} frequent itemsets",
            run.min_support,
            run.frequent.len()
        );
        if show_patterns {
            for (itemset, support) in run.frequent.iter() {
                println!("  {} (support {support})", render_itemset(store, itemset));
            }
        }

        for pass in &run.rule_passes {
            println!(
                "  minimum confidence {}: {} rules",
                pass.min_confidence,
                pass.rules.len()
            );
            if show_patterns {
                for rule in &pass.rules {
                    println!("    {}", render_rule(store, rule));
                }
            }
        }
    }
}
