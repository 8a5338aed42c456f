//! Essential prime implicant generation.
//!
//! # Algorithm
//!
//! This is a bucketed Quine-McCluskey join with don't-care handling and a
//! cover-count redundancy pass instead of an explicit prime-implicant table.
//!
//! Implicants are processed level by level, where the level index is the
//! number of don't-care positions (level 0 holds the raw minterms). Within a
//! level, implicants are bucketed by their one-count: two implicants can only
//! join if they are identical except for a single `0`/`1` position, so each
//! bucket needs to be compared only against the next one. Although a join
//! pass looks quadratic, the bucket adjacency prunes it down considerably in
//! practice.
//!
//! Every successful join marks both parents as covered. A freshly joined
//! implicant is deduplicated against the others of its level by literal
//! vector: for implicants with an odd number of don't-cares, two different
//! join paths legitimately produce the same result, and the duplicates merge
//! into one node whose minterm lineage is the union of both paths.
//!
//! After a level's children exist, every current-level implicant that was
//! never joined (and is not optional) is an essential prime implicant. Then,
//! before the next level starts, a redundancy pass walks the new children:
//! a child all of whose lineage minterms are covered by at least two of the
//! new children is marked covered outright, and each of its minterms'
//! cover counts is decremented as it is subtracted out. Such "false EPIs"
//! still participate in later joins but are never emitted. This generalizes
//! prime-implicant-table redundancy elimination without building the table;
//! it is a heuristic, not exact covering, and on functions with several
//! equally-sized minimal covers it may return a non-minimum (but still
//! sound) cover.
//!
//! The whole pass is deterministic: buckets preserve insertion order, levels
//! and buckets are walked in ascending order, and hash maps are only used
//! for keyed lookup, never iterated.

use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::implicant::Implicant;
use crate::types::Literal;

/// Index of an implicant in the per-run arena.
type ImpId = usize;

/// An arena node: the implicant plus the ids of the level-0 minterms it
/// descends from. Level-0 nodes are their own lineage.
struct Node {
    imp: Implicant,
    lineage: BTreeSet<ImpId>,
}

struct Engine {
    num_vars: usize,
    nodes: Vec<Node>,
    /// Parallel to `nodes`: joined into a larger implicant, or subtracted
    /// out by the redundancy pass. Covered implicants are never emitted.
    covered: Vec<bool>,
}

/// Compute the essential prime implicants covering the given minterms.
///
/// Minterms built from don't-care rows must be passed with
/// `optional = true`; they can enlarge the result implicants but are never
/// required to be covered. The returned list is ordered deterministically
/// (by level, then one-count, then discovery order) and forms a sound cover
/// of the required minterms, though not necessarily a minimum-cardinality
/// one.
pub fn essential_prime_implicants(
    minterms: Vec<Implicant>,
    num_vars: usize,
) -> Result<Vec<Implicant>> {
    for m in &minterms {
        if m.len() != num_vars {
            return Err(Error::LiteralLengthMismatch {
                got: m.len(),
                expected: num_vars,
            });
        }
    }

    let mut engine = Engine::new(num_vars);
    let mut buckets = engine.seed(minterms);
    let mut essential: Vec<ImpId> = Vec::new();

    for level in 0..=num_vars {
        let next = engine.join_level(&buckets);

        // Anything in the current level that was never joined is prime;
        // prime and required means essential.
        for &id in buckets.iter().flatten() {
            if !engine.covered[id] && !engine.nodes[id].imp.is_optional() {
                trace!("EPI at level {}: {}", level, engine.nodes[id].imp);
                essential.push(id);
            }
        }

        let pruned = engine.prune_redundant(&next);
        debug!(
            "level {}: {} implicants joined to {} children ({} pruned as redundant), {} essential so far",
            level,
            buckets.iter().map(Vec::len).sum::<usize>(),
            next.iter().map(Vec::len).sum::<usize>(),
            pruned,
            essential.len()
        );
        buckets = next;
    }

    Ok(essential
        .into_iter()
        .map(|id| engine.nodes[id].imp.clone())
        .collect())
}

impl Engine {
    fn new(num_vars: usize) -> Self {
        Self {
            num_vars,
            nodes: Vec::new(),
            covered: Vec::new(),
        }
    }

    fn push(&mut self, imp: Implicant, lineage: BTreeSet<ImpId>) -> ImpId {
        let id = self.nodes.len();
        self.nodes.push(Node { imp, lineage });
        self.covered.push(false);
        id
    }

    /// Place the level-0 minterms into one-count buckets.
    fn seed(&mut self, minterms: Vec<Implicant>) -> Vec<Vec<ImpId>> {
        let mut buckets = vec![Vec::new(); self.num_vars + 1];
        for imp in minterms {
            let ones = imp.one_count();
            let id = self.nodes.len();
            self.push(imp, BTreeSet::from([id]));
            buckets[ones].push(id);
        }
        buckets
    }

    /// Join adjacent buckets of the current level into the next level.
    fn join_level(&mut self, buckets: &[Vec<ImpId>]) -> Vec<Vec<ImpId>> {
        let mut next = vec![Vec::new(); self.num_vars + 1];
        let mut seen: HashMap<Vec<Literal>, ImpId> = HashMap::new();

        for ones in 0..self.num_vars {
            for &a in &buckets[ones] {
                for &b in &buckets[ones + 1] {
                    let Some(child) = self.nodes[a].imp.join(&self.nodes[b].imp) else {
                        continue;
                    };
                    // Even a join that turns out to be a duplicate proves
                    // the parents are not prime.
                    self.covered[a] = true;
                    self.covered[b] = true;

                    match seen.entry(child.literals().to_vec()) {
                        Entry::Occupied(entry) => {
                            // Odd-parity collision: a second join path
                            // reached the same implicant. Merge lineages.
                            let id = *entry.get();
                            trace!("duplicate join {} + {} -> {}", a, b, id);
                            let extra: Vec<ImpId> = self.nodes[a]
                                .lineage
                                .union(&self.nodes[b].lineage)
                                .copied()
                                .collect();
                            self.nodes[id].lineage.extend(extra);
                        }
                        Entry::Vacant(entry) => {
                            let lineage: BTreeSet<ImpId> = self.nodes[a]
                                .lineage
                                .union(&self.nodes[b].lineage)
                                .copied()
                                .collect();
                            let ones = child.one_count();
                            let id = self.nodes.len();
                            entry.insert(id);
                            self.nodes.push(Node { imp: child, lineage });
                            self.covered.push(false);
                            next[ones].push(id);
                        }
                    }
                }
            }
        }
        next
    }

    /// Subtract out newly joined implicants whose every lineage minterm is
    /// already covered by at least two implicants of the new level.
    fn prune_redundant(&mut self, buckets: &[Vec<ImpId>]) -> usize {
        // Cover count of a minterm: how many distinct next-level implicants
        // carry it in their lineage.
        let mut cover: HashMap<ImpId, usize> = HashMap::new();
        for &id in buckets.iter().flatten() {
            for &m in &self.nodes[id].lineage {
                *cover.entry(m).or_insert(0) += 1;
            }
        }

        let mut pruned = 0;
        for &id in buckets.iter().flatten() {
            let redundant = self.nodes[id].lineage.iter().all(|m| cover[m] > 1);
            if redundant {
                for m in &self.nodes[id].lineage {
                    if let Some(count) = cover.get_mut(m) {
                        *count -= 1;
                    }
                }
                self.covered[id] = true;
                pruned += 1;
            }
        }
        pruned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::pattern;

    use test_log::test;

    fn minterm(s: &str) -> Implicant {
        Implicant::minterm(pattern(s).unwrap())
    }

    fn optional(s: &str) -> Implicant {
        Implicant::new(pattern(s).unwrap(), true)
    }

    fn epi_strings(minterms: Vec<Implicant>, num_vars: usize) -> Vec<String> {
        essential_prime_implicants(minterms, num_vars)
            .unwrap()
            .iter()
            .map(|imp| imp.to_string())
            .collect()
    }

    #[test]
    fn test_always_true_single_variable() {
        // Target is ONE on every row: the two minterms collapse into a
        // single all-don't-care implicant.
        let epis = epi_strings(vec![minterm("0"), minterm("1")], 1);
        assert_eq!(epis, vec!["-"]);
    }

    #[test]
    fn test_empty_input() {
        let epis = epi_strings(vec![], 3);
        assert!(epis.is_empty());
    }

    #[test]
    fn test_two_prime_implicants() {
        // f(a, i, j) = i' + j': all assignments except i = j = 1.
        let minterms = ["000", "001", "010", "100", "101", "110"]
            .iter()
            .map(|s| minterm(s))
            .collect();
        let epis = epi_strings(minterms, 3);
        assert_eq!(epis, vec!["-0-", "--0"]);
    }

    #[test]
    fn test_redundant_middle_implicant_is_pruned() {
        // f = sum of minterms 0, 1, 3, 7 over (a, b, c). The chain implicant
        // 0-1 is doubly covered by 00- and -11 and must be subtracted out by
        // the cover-count pass, leaving the classic two-term cover.
        let minterms = ["000", "001", "011", "111"]
            .iter()
            .map(|s| minterm(s))
            .collect();
        let epis = epi_strings(minterms, 3);
        assert_eq!(epis, vec!["00-", "-11"]);
    }

    #[test]
    fn test_dont_care_enlarges_cover() {
        // ON = {11}, DC = {10}: the don't-care lets the single required
        // minterm grow into "1-".
        let epis = epi_strings(vec![minterm("11"), optional("10")], 2);
        assert_eq!(epis, vec!["1-"]);

        // Without the don't-care the minterm stays as-is.
        let epis = epi_strings(vec![minterm("11")], 2);
        assert_eq!(epis, vec!["11"]);
    }

    #[test]
    fn test_all_optional_yields_nothing() {
        let epis = epi_strings(vec![optional("00"), optional("01")], 2);
        assert!(epis.is_empty());
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let err = essential_prime_implicants(vec![minterm("01")], 3).unwrap_err();
        assert_eq!(
            err,
            Error::LiteralLengthMismatch {
                got: 2,
                expected: 3
            }
        );
    }

    #[test]
    fn test_cover_is_sound_and_consistent() {
        // Arbitrary 4-variable function with a few don't-cares.
        let on = ["0000", "0010", "0101", "0111", "1101"];
        let dc = ["1111", "1000"];
        let off = [
            "0001", "0011", "0100", "0110", "1001", "1010", "1011", "1100", "1110",
        ];

        let mut minterms: Vec<Implicant> = on.iter().map(|s| minterm(s)).collect();
        minterms.extend(dc.iter().map(|s| optional(s)));
        let epis = essential_prime_implicants(minterms, 4).unwrap();

        // Soundness: every required minterm is covered by some EPI.
        for s in on {
            let row = pattern(s).unwrap();
            assert!(
                epis.iter().any(|imp| imp.covers(&row)),
                "minterm {} not covered",
                s
            );
        }
        // Non-contradiction: no EPI covers a strictly-zero row.
        for s in off {
            let row = pattern(s).unwrap();
            assert!(
                epis.iter().all(|imp| !imp.covers(&row)),
                "off-set row {} covered",
                s
            );
        }
    }
}
