//! Association-rule types.

use serde::Serialize;

use crate::types::Itemset;

/// A directional implication: transactions containing the antecedent also
/// tend to contain the consequent.
///
/// Antecedent and consequent are disjoint and their union is a frequent
/// itemset of size >= 2. Confidence is
/// support(antecedent u consequent) / support(antecedent), always within
/// (0, 1].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssociationRule {
    pub antecedent: Itemset,
    pub consequent: Itemset,
    pub confidence: f64,
}
