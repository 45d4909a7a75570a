//! Rule enumeration and confidence filtering.

use smallvec::SmallVec;

use super::types::AssociationRule;
use crate::errors::RuleError;
use crate::mining::FrequentItemsets;
use crate::types::{ItemId, Itemset};

/// Derive every rule meeting `min_confidence` from the collection.
///
/// For each frequent itemset of size >= 2, every bipartition into a
/// non-empty antecedent and non-empty consequent is considered exactly
/// once; the rule is kept when
/// support(itemset) / support(antecedent) >= min_confidence (note `>=`,
/// the boundary value is included).
///
/// Emission order is deterministic: itemsets in collection iteration
/// order, antecedents by ascending size, combinations of one size in
/// lexicographic order over the itemset's sorted items.
///
/// Needs no transaction access; all support counts come from the
/// collection. An antecedent absent from the collection is an error
/// ([`RuleError::MissingAntecedentSupport`]) rather than a silent skip:
/// it means the caller supplied a collection that skips size levels,
/// which the miner never produces.
pub fn generate_rules(
    frequent: &FrequentItemsets,
    min_confidence: f64,
) -> Result<Vec<AssociationRule>, RuleError> {
    // NaN fails the range check and is rejected with everything else.
    if !(0.0..=1.0).contains(&min_confidence) {
        return Err(RuleError::InvalidConfidence(min_confidence));
    }

    let mut rules = Vec::new();
    for (itemset, support) in frequent.iter() {
        if itemset.len() < 2 {
            continue;
        }

        for antecedent_size in 1..itemset.len() {
            for antecedent in Combinations::new(itemset.items(), antecedent_size) {
                let antecedent_support = frequent.support(&antecedent).ok_or_else(|| {
                    RuleError::MissingAntecedentSupport {
                        antecedent: antecedent.clone(),
                        itemset: itemset.clone(),
                    }
                })?;

                let confidence = support as f64 / antecedent_support as f64;
                if confidence >= min_confidence {
                    rules.push(AssociationRule {
                        consequent: itemset.difference(&antecedent),
                        antecedent,
                        confidence,
                    });
                }
            }
        }
    }

    Ok(rules)
}

/// Lexicographic size-`r` combinations over a sorted item slice.
///
/// Selections of a sorted slice at increasing indices are themselves
/// sorted, so each combination is a valid itemset as-is.
struct Combinations<'a> {
    items: &'a [ItemId],
    indices: Vec<usize>,
    done: bool,
}

impl<'a> Combinations<'a> {
    fn new(items: &'a [ItemId], r: usize) -> Self {
        Self {
            items,
            indices: (0..r).collect(),
            done: r == 0 || r > items.len(),
        }
    }
}

impl Iterator for Combinations<'_> {
    type Item = Itemset;

    fn next(&mut self) -> Option<Itemset> {
        if self.done {
            return None;
        }

        let selected: SmallVec<[ItemId; 4]> =
            self.indices.iter().map(|&i| self.items[i]).collect();
        let current = Itemset::from_sorted(&selected);

        // Advance: bump the rightmost index that has room, reset the tail.
        let n = self.items.len();
        let r = self.indices.len();
        let mut pos = r;
        loop {
            if pos == 0 {
                self.done = true;
                break;
            }
            pos -= 1;
            if self.indices[pos] != pos + n - r {
                self.indices[pos] += 1;
                for next in pos + 1..r {
                    self.indices[next] = self.indices[next - 1] + 1;
                }
                break;
            }
        }

        Some(current)
    }
}
