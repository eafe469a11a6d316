//! Hairpin (stem-loop) prediction.
//!
//! A hairpin is a run of bases at `start..` that pairs, Watson-Crick only,
//! with a run ending at `end` read backwards, enclosing an unpaired loop.
//! Every `(start, end)` pair that closes a long enough stem around a long
//! enough loop is reported, so nested and overlapping candidates all appear.

use molarray_core::LinkedArray;

use crate::molecule::MolecularArray;

/// Default minimum number of paired bases in the stem.
pub const MIN_STEM: usize = 3;

/// Default minimum number of unpaired bases in the loop.
pub const MIN_LOOP: usize = 3;

/// Parameters for [`MolecularArray::predict_hairpins`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HairpinParams {
    /// Minimum stem length in base pairs (default: 3). Zero is treated as 1.
    pub min_stem: usize,
    /// Minimum loop size in bases (default: 3).
    pub min_loop: usize,
}

impl Default for HairpinParams {
    fn default() -> Self {
        Self {
            min_stem: MIN_STEM,
            min_loop: MIN_LOOP,
        }
    }
}

/// Outermost closing pair of a predicted hairpin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hairpin {
    /// 5' base of the closing pair.
    pub start: usize,
    /// 3' base of the closing pair (inclusive).
    pub end: usize,
}

impl Hairpin {
    /// Number of bases spanned, closing pair included.
    pub fn span(&self) -> usize {
        self.end - self.start + 1
    }
}

impl MolecularArray {
    /// Predict hairpins with the given stem and loop minimums.
    pub fn predict_hairpins(&self, params: &HairpinParams) -> LinkedArray<Hairpin> {
        let bases = self.sequence().to_vec();
        let n = bases.len();
        let min_stem = params.min_stem.max(1);
        let kind = self.kind();
        let mut hairpins = LinkedArray::new();

        for i in 0..n {
            let first = i.saturating_add(min_stem).saturating_add(params.min_loop);
            if first >= n {
                break;
            }
            for j in first..n {
                let mut stem = 0;
                while i + stem < j - stem
                    && kind.complement(bases[i + stem]) == Some(bases[j - stem])
                {
                    stem += 1;
                    let loop_len = j + 1 - i - 2 * stem;
                    if stem >= min_stem && loop_len >= params.min_loop {
                        hairpins.append(Hairpin { start: i, end: j });
                        break;
                    }
                }
            }
        }
        hairpins
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::alphabet::NucleicAcid;
    use proptest::prelude::*;

    fn dna_strategy() -> impl Strategy<Value = String> {
        proptest::collection::vec(prop_oneof![Just('A'), Just('C'), Just('G'), Just('T')], 0..80)
            .prop_map(|v| v.into_iter().collect())
    }

    proptest! {
        #[test]
        fn reported_stems_pair(s in dna_strategy()) {
            let seq = MolecularArray::new(&s, NucleicAcid::Dna).unwrap();
            let bases: Vec<char> = s.chars().collect();
            for h in seq.predict_hairpins(&HairpinParams::default()).iter() {
                prop_assert!(h.span() >= MIN_STEM * 2 + MIN_LOOP);
                for k in 0..MIN_STEM {
                    prop_assert_eq!(
                        NucleicAcid::Dna.complement(bases[h.start + k]),
                        Some(bases[h.end - k])
                    );
                }
            }
        }
    }
}
