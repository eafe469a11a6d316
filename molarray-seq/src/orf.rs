//! Open reading frames and translation.
//!
//! An ORF starts at a start codon (`ATG`/`AUG`) and runs to the first stop
//! codon in the same frame. Only the forward strand is scanned. Codon
//! lookups go through the container's subsequence search.

use molarray_core::{LinkedArray, MolError, Result};

use crate::codon;
use crate::molecule::MolecularArray;

/// An open reading frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Orf {
    /// Position of the first base of the start codon.
    pub start: usize,
    /// Position of the first base of the stop codon.
    pub stop: usize,
}

impl Orf {
    /// One past the last base of the stop codon.
    pub fn end(&self) -> usize {
        self.stop + 3
    }

    /// Number of codons before the stop codon.
    pub fn codon_count(&self) -> usize {
        (self.stop - self.start) / 3
    }
}

impl MolecularArray {
    /// Leftmost start codon at or after `from`.
    pub fn start_codon_index(&self, from: usize) -> Result<usize> {
        let start = self.kind().start_codon();
        self.sequence()
            .position_of_slice(&start, from)
            .map_err(|_| MolError::NotFound(format!("no start codon at or after {}", from)))
    }

    /// Leftmost stop codon of any kind at or after `from`.
    pub fn stop_codon_index(&self, from: usize) -> Result<usize> {
        self.kind()
            .stop_codons()
            .iter()
            .filter_map(|c| self.sequence().position_of_slice(c, from).ok())
            .min()
            .ok_or_else(|| MolError::NotFound(format!("no stop codon at or after {}", from)))
    }

    /// Whether a stop codon occurs downstream of the first start codon.
    ///
    /// The frames are not required to agree. A stop codon that only occurs
    /// upstream of every start codon does not count, so `TAGATGCCC` is not
    /// protein coding.
    pub fn is_protein_coding(&self) -> bool {
        match self.start_codon_index(0) {
            Ok(start) => self.stop_codon_index(start + 3).is_ok(),
            Err(_) => false,
        }
    }

    /// First stop codon in the frame of `start`, searching after the start
    /// codon.
    fn in_frame_stop(&self, start: usize) -> Option<usize> {
        let mut from = start + 3;
        loop {
            let stop = self.stop_codon_index(from).ok()?;
            if (stop - start) % 3 == 0 {
                return Some(stop);
            }
            from = stop + 1;
        }
    }

    /// Scan left to right for non-overlapping ORFs.
    ///
    /// After each ORF the scan resumes past its stop codon. A start codon
    /// with no in-frame stop is skipped.
    pub fn find_orfs(&self) -> LinkedArray<Orf> {
        let mut orfs = LinkedArray::new();
        let mut pos = 0;
        while pos < self.len() {
            let start = match self.start_codon_index(pos) {
                Ok(start) => start,
                Err(_) => break,
            };
            match self.in_frame_stop(start) {
                Some(stop) => {
                    orfs.append(Orf { start, stop });
                    pos = stop + 3;
                }
                None => pos = start + 1,
            }
        }
        orfs
    }

    /// Translate every ORF into a peptide of three-letter amino acid names
    /// joined by `-`, stop codon excluded.
    pub fn translate(&self) -> Result<LinkedArray<String>> {
        let mut peptides = LinkedArray::new();
        for orf in self.find_orfs().iter() {
            let mut names = Vec::with_capacity(orf.codon_count());
            for i in (orf.start..orf.stop).step_by(3) {
                let triplet = self.codon_at(i)?;
                let name = codon::amino_acid(triplet).ok_or_else(|| {
                    MolError::InvalidInput(format!("no amino acid for codon at {}", i))
                })?;
                names.push(name);
            }
            peptides.append(names.join("-"));
        }
        Ok(peptides)
    }

    fn codon_at(&self, i: usize) -> Result<[char; 3]> {
        let seq = self.sequence();
        Ok([
            *seq.get(i as isize)?,
            *seq.get(i as isize + 1)?,
            *seq.get(i as isize + 2)?,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::NucleicAcid;
    use molarray_core::ErrorKind;

    fn dna(s: &str) -> MolecularArray {
        MolecularArray::new(s, NucleicAcid::Dna).unwrap()
    }

    fn rna(s: &str) -> MolecularArray {
        MolecularArray::new(s, NucleicAcid::Rna).unwrap()
    }

    #[test]
    fn codon_positions() {
        let seq = dna("CCATGAAATAGTGA");
        assert_eq!(seq.start_codon_index(0).unwrap(), 2);
        // TGA at 3 comes before TAG at 8
        assert_eq!(seq.stop_codon_index(0).unwrap(), 3);
        assert_eq!(seq.stop_codon_index(5).unwrap(), 8);
        assert_eq!(
            seq.start_codon_index(3).unwrap_err().kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn stop_codon_is_leftmost_of_all_kinds() {
        // TGA appears before TAG and TAA
        let seq = dna("ATGTGATAGTAA");
        assert_eq!(seq.stop_codon_index(0).unwrap(), 3);
    }

    #[test]
    fn rna_uses_u_codons() {
        let seq = rna("GAUGCCUAA");
        assert_eq!(seq.start_codon_index(0).unwrap(), 1);
        assert_eq!(seq.stop_codon_index(0).unwrap(), 6);
        assert!(dna("GATGCCTAA").is_protein_coding());
    }

    #[test]
    fn protein_coding() {
        assert!(dna("ATGCGTACGTAG").is_protein_coding());
        assert!(!dna("CGTACGTAG").is_protein_coding());
        // stop only before the start
        assert!(!dna("TAGATGCCC").is_protein_coding());
        assert!(!dna("").is_protein_coding());
    }

    #[test]
    fn upstream_stop_does_not_count() {
        assert!(!dna("TGACCCATG").is_protein_coding());
        assert!(dna("TGACCCATGTAA").is_protein_coding());
        // out-of-frame stop downstream still counts
        assert!(dna("ATGCTAG").is_protein_coding());
    }

    #[test]
    fn single_orf() {
        let orfs = dna("ATGCGTACGTAG").find_orfs();
        assert_eq!(orfs, [Orf { start: 0, stop: 9 }]);
        assert_eq!(orfs.get(0).unwrap().end(), 12);
    }

    #[test]
    fn no_start_codon() {
        assert!(dna("CGTACGTAG").find_orfs().is_empty());
    }

    #[test]
    fn multiple_orfs() {
        let orfs = dna("ATGCGTACGTAGATGCCCTGA").find_orfs();
        assert_eq!(
            orfs,
            [Orf { start: 0, stop: 9 }, Orf { start: 12, stop: 18 }]
        );
    }

    #[test]
    fn out_of_frame_stop_is_skipped() {
        // TAG at 4 is out of frame, TAA at 9 is in frame
        let orfs = dna("ATGCTAGCATAA").find_orfs();
        assert_eq!(orfs, [Orf { start: 0, stop: 9 }]);
    }

    #[test]
    fn start_without_stop_is_skipped() {
        // first ATG has no in-frame stop; the second one does
        let orfs = dna("ATGAATGCCCTGA").find_orfs();
        assert_eq!(orfs, [Orf { start: 4, stop: 10 }]);
    }

    #[test]
    fn translate_each_orf() {
        let peptides = dna("ATGCGTACGTAGATGCCCTGA").translate().unwrap();
        assert_eq!(peptides.len(), 2);
        assert_eq!(peptides.get(0).unwrap(), "Met-Arg-Thr");
        assert_eq!(peptides.get(1).unwrap(), "Met-Pro");
    }

    #[test]
    fn translate_rna() {
        let peptides = rna("AUGUUUUGGUAA").translate().unwrap();
        assert_eq!(peptides.to_vec(), vec!["Met-Phe-Trp".to_string()]);
        assert!(rna("CCCUAA").translate().unwrap().is_empty());
    }

    #[test]
    fn orf_lengths() {
        let orf = Orf { start: 3, stop: 12 };
        assert_eq!(orf.end(), 15);
        assert_eq!(orf.codon_count(), 3);
    }
}
