//! Nucleic-acid sequences stored in a [`LinkedArray`].
//!
//! [`MolecularArray`] validates its bases on construction and keeps them as
//! uppercase characters. Everything else in this crate (ORFs, translation,
//! hairpins) reads the sequence through the container's public API.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use molarray_core::{LinkedArray, MolError, Result, Summarizable, DEFAULT_CAPACITY};

use crate::alphabet::NucleicAcid;

/// A validated DNA or RNA sequence.
#[derive(Clone, PartialEq, Eq)]
pub struct MolecularArray {
    sequence: LinkedArray<char>,
    kind: NucleicAcid,
}

impl MolecularArray {
    /// Build a sequence of type `kind` from text.
    ///
    /// Input is uppercased, then every base is checked against the alphabet.
    /// On the first invalid base the partially built sequence is discarded
    /// and an [`MolError::InvalidInput`] is returned.
    pub fn new(input: &str, kind: NucleicAcid) -> Result<Self> {
        let mut sequence = LinkedArray::with_capacity((input.len() * 2).max(DEFAULT_CAPACITY));
        for (i, raw) in input.chars().enumerate() {
            let base = raw.to_ascii_uppercase();
            if !kind.is_valid(base) {
                sequence.clear(true);
                debug!("rejected {} input: {:?} at position {}", kind, raw, i);
                return Err(MolError::InvalidInput(format!(
                    "invalid {} base '{}' at position {}",
                    kind, raw, i
                )));
            }
            sequence.try_append(base)?;
        }
        Ok(Self { sequence, kind })
    }

    /// Load a sequence from the first line of a text file.
    pub fn from_file(path: impl AsRef<Path>, kind: NucleicAcid) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            MolError::Io(std::io::Error::new(
                e.kind(),
                format!("{}: {}", path.display(), e),
            ))
        })?;
        let mut line = String::new();
        BufReader::new(file).read_line(&mut line)?;
        Self::new(line.trim_end(), kind)
    }

    /// Write the bases, without a trailing newline, to `path`.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_string())?;
        Ok(())
    }

    /// Molecule type.
    pub fn kind(&self) -> NucleicAcid {
        self.kind
    }

    /// The underlying base container.
    pub fn sequence(&self) -> &LinkedArray<char> {
        &self.sequence
    }

    /// Length in bases.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Whether the sequence has no bases.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// DNA to RNA text (T -> U). An RNA sequence is returned unchanged.
    pub fn transcribe(&self) -> String {
        self.convert(NucleicAcid::Rna)
    }

    /// RNA to DNA text (U -> T). A DNA sequence is returned unchanged.
    pub fn reverse_transcribe(&self) -> String {
        self.convert(NucleicAcid::Dna)
    }

    fn convert(&self, to: NucleicAcid) -> String {
        let (from_base, to_base) = match (self.kind, to) {
            (NucleicAcid::Dna, NucleicAcid::Rna) => ('T', 'U'),
            (NucleicAcid::Rna, NucleicAcid::Dna) => ('U', 'T'),
            _ => return self.to_string(),
        };
        self.sequence
            .iter()
            .map(|&b| if b == from_base { to_base } else { b })
            .collect()
    }

    /// Reverse complement, spelled in the `to` alphabet.
    pub fn complement_sequence(&self, to: NucleicAcid) -> Result<String> {
        if self.is_empty() {
            return Ok(String::new());
        }
        let reversed = self.sequence.slice(0, -1, -1)?;
        reversed
            .iter()
            .map(|&b| {
                to.complement(b)
                    .ok_or_else(|| MolError::InvalidInput(format!("'{}' is not a base", b)))
            })
            .collect()
    }

    /// Fraction of bases that are G or C, in [0.0, 1.0].
    ///
    /// Returns 0.0 for an empty sequence.
    pub fn gc_content(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let gc = self.sequence.count_if(|&b| b == 'G' || b == 'C');
        gc as f64 / self.len() as f64
    }

    /// Whether the sequence reads the same backwards.
    pub fn is_palindrome(&self) -> bool {
        if self.is_empty() {
            return true;
        }
        match self.sequence.slice(0, -1, -1) {
            Ok(reversed) => reversed == self.sequence,
            Err(_) => false,
        }
    }

    /// Remove the intron regions and return the joined exons.
    ///
    /// Regions are half-open `[start, end)` and may be given in any order.
    /// Only RNA can be spliced.
    pub fn splice(&self, introns: &[(usize, usize)]) -> Result<String> {
        if self.kind == NucleicAcid::Dna {
            return Err(MolError::InvalidInput("DNA cannot be spliced".into()));
        }
        let mut sorted = introns.to_vec();
        sorted.sort_unstable();

        let mut previous_end = 0;
        for &(start, end) in &sorted {
            if start >= end || start < previous_end {
                return Err(MolError::InvalidInput(format!(
                    "invalid or overlapping intron region [{}, {})",
                    start, end
                )));
            }
            if end > self.len() {
                return Err(MolError::InvalidInput(format!(
                    "intron region [{}, {}) exceeds sequence length {}",
                    start,
                    end,
                    self.len()
                )));
            }
            previous_end = end;
        }

        let mut spliced = String::with_capacity(self.len());
        let mut current = 0;
        for &(start, end) in &sorted {
            spliced.extend(self.sequence.iter().skip(current).take(start - current));
            current = end;
        }
        spliced.extend(self.sequence.iter().skip(current));
        Ok(spliced)
    }

    /// Overwrite bases starting at `position` with `bases`.
    ///
    /// The whole replacement must fit inside the sequence; nothing is changed
    /// if it does not.
    pub fn induce_substitution(&mut self, position: usize, bases: &str) -> Result<()> {
        self.check_position(position)?;
        let bases = self.validate_bases(bases)?;
        if position + bases.len() > self.len() {
            return Err(MolError::Index(format!(
                "substitution of {} bases at position {} runs past length {}",
                bases.len(),
                position,
                self.len()
            )));
        }
        for (offset, base) in bases.into_iter().enumerate() {
            self.sequence.set((position + offset) as isize, base)?;
        }
        Ok(())
    }

    /// Insert `bases` before the base currently at `position`, keeping their
    /// order.
    pub fn induce_insertion(&mut self, position: usize, bases: &str) -> Result<()> {
        self.check_position(position)?;
        let bases = self.validate_bases(bases)?;
        for (offset, base) in bases.into_iter().enumerate() {
            self.sequence.insert(base, (position + offset) as isize)?;
        }
        Ok(())
    }

    /// Delete up to `count` bases starting at `position`.
    ///
    /// Stops early when the end of the sequence is reached.
    pub fn induce_deletion(&mut self, position: usize, count: usize) -> Result<()> {
        self.check_position(position)?;
        for _ in 0..count {
            if position >= self.len() {
                break;
            }
            self.sequence.pop_at(position as isize)?;
        }
        Ok(())
    }

    fn check_position(&self, position: usize) -> Result<()> {
        if position >= self.len() {
            return Err(MolError::Index(format!(
                "invalid nucleotide position {} for length {}",
                position,
                self.len()
            )));
        }
        Ok(())
    }

    fn validate_bases(&self, bases: &str) -> Result<Vec<char>> {
        bases
            .chars()
            .map(|raw| {
                let base = raw.to_ascii_uppercase();
                if self.kind.is_valid(base) {
                    Ok(base)
                } else {
                    Err(MolError::InvalidInput(format!(
                        "invalid {} base '{}'",
                        self.kind, raw
                    )))
                }
            })
            .collect()
    }
}

impl fmt::Display for MolecularArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sequence.join(""))
    }
}

impl fmt::Debug for MolecularArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(\"{}\")", self.kind, self)
    }
}

impl Summarizable for MolecularArray {
    fn summary(&self) -> String {
        let preview: String = self.sequence.iter().take(20).collect();
        if self.len() > 20 {
            format!("{} sequence ({} bp): {}...", self.kind, self.len(), preview)
        } else {
            format!("{} sequence ({} bp): {}", self.kind, self.len(), preview)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use molarray_core::ErrorKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn dna(s: &str) -> MolecularArray {
        MolecularArray::new(s, NucleicAcid::Dna).unwrap()
    }

    fn rna(s: &str) -> MolecularArray {
        MolecularArray::new(s, NucleicAcid::Rna).unwrap()
    }

    // --- construction ---

    #[test]
    fn stores_uppercase() {
        let seq = dna("acgt");
        assert_eq!(seq.to_string(), "ACGT");
        assert_eq!(seq.len(), 4);
        assert_eq!(seq.kind(), NucleicAcid::Dna);
    }

    #[test]
    fn empty_sequence_ok() {
        let seq = rna("");
        assert!(seq.is_empty());
        assert_eq!(seq.to_string(), "");
    }

    #[test]
    fn rejects_wrong_alphabet() {
        let err = MolecularArray::new("ACGU", NucleicAcid::Dna).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(MolecularArray::new("ACGT", NucleicAcid::Rna).is_err());
        assert!(MolecularArray::new("ACNG", NucleicAcid::Dna).is_err());
    }

    // --- file I/O ---

    #[test]
    fn loads_first_line_of_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "AUGGCC").unwrap();
        writeln!(file, "this line is ignored").unwrap();
        file.flush().unwrap();

        let seq = MolecularArray::from_file(file.path(), NucleicAcid::Rna).unwrap();
        assert_eq!(seq.to_string(), "AUGGCC");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = MolecularArray::from_file("/nonexistent/seq.txt", NucleicAcid::Dna).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn write_then_read_back() {
        let file = NamedTempFile::new().unwrap();
        let seq = dna("GATTACA");
        seq.write_to_file(file.path()).unwrap();
        assert_eq!(std::fs::read_to_string(file.path()).unwrap(), "GATTACA");
        let back = MolecularArray::from_file(file.path(), NucleicAcid::Dna).unwrap();
        assert_eq!(back, seq);
    }

    // --- transcription / complement ---

    #[test]
    fn dna_to_rna() {
        assert_eq!(dna("ATCG").transcribe(), "AUCG");
        assert_eq!(dna("ATCG").reverse_transcribe(), "ATCG");
    }

    #[test]
    fn rna_to_dna() {
        assert_eq!(rna("AUCG").reverse_transcribe(), "ATCG");
        assert_eq!(rna("AUCG").transcribe(), "AUCG");
    }

    #[test]
    fn reverse_complement_into_either_alphabet() {
        let seq = dna("AACG");
        assert_eq!(seq.complement_sequence(NucleicAcid::Dna).unwrap(), "CGTT");
        assert_eq!(seq.complement_sequence(NucleicAcid::Rna).unwrap(), "CGUU");
        assert_eq!(rna("AUGC").complement_sequence(NucleicAcid::Rna).unwrap(), "GCAU");
        assert_eq!(dna("").complement_sequence(NucleicAcid::Dna).unwrap(), "");
    }

    // --- composition ---

    #[test]
    fn gc_content_basic() {
        assert!((dna("ATGC").gc_content() - 0.5).abs() < 1e-10);
        assert!((dna("GGGC").gc_content() - 1.0).abs() < 1e-10);
        assert_eq!(dna("").gc_content(), 0.0);
    }

    #[test]
    fn palindrome() {
        assert!(dna("ACGGCA").is_palindrome());
        assert!(dna("A").is_palindrome());
        assert!(dna("").is_palindrome());
        assert!(!dna("ACGT").is_palindrome());
    }

    // --- splicing ---

    #[test]
    fn splice_removes_introns() {
        let seq = rna("AAACCCGGGUUU");
        assert_eq!(seq.splice(&[(3, 6)]).unwrap(), "AAAGGGUUU");
        // unsorted input
        assert_eq!(seq.splice(&[(9, 12), (0, 3)]).unwrap(), "CCCGGG");
        assert_eq!(seq.splice(&[]).unwrap(), "AAACCCGGGUUU");
    }

    #[test]
    fn splice_rejects_bad_regions() {
        let seq = rna("AAACCCGGGUUU");
        assert!(seq.splice(&[(4, 4)]).is_err());
        assert!(seq.splice(&[(0, 5), (3, 8)]).is_err());
        assert!(seq.splice(&[(10, 13)]).is_err());
    }

    #[test]
    fn dna_cannot_be_spliced() {
        let err = dna("ACGT").splice(&[(0, 1)]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    // --- mutations ---

    #[test]
    fn substitution() {
        let mut seq = dna("AAAAAA");
        seq.induce_substitution(2, "gc").unwrap();
        assert_eq!(seq.to_string(), "AAGCAA");
    }

    #[test]
    fn substitution_past_end_changes_nothing() {
        let mut seq = dna("AAAA");
        let err = seq.induce_substitution(3, "GC").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Index);
        assert_eq!(seq.to_string(), "AAAA");
        assert!(seq.induce_substitution(1, "GU").is_err());
        assert_eq!(seq.to_string(), "AAAA");
    }

    #[test]
    fn insertion_keeps_order() {
        let mut seq = dna("AAAA");
        seq.induce_insertion(1, "GCT").unwrap();
        assert_eq!(seq.to_string(), "AGCTAAA");
    }

    #[test]
    fn insertion_out_of_range() {
        let mut seq = dna("AAAA");
        assert_eq!(seq.induce_insertion(4, "G").unwrap_err().kind(), ErrorKind::Index);
        assert_eq!(seq.to_string(), "AAAA");
    }

    #[test]
    fn deletion_stops_at_end() {
        let mut seq = dna("ACGTAC");
        seq.induce_deletion(1, 2).unwrap();
        assert_eq!(seq.to_string(), "ATAC");
        seq.induce_deletion(2, 10).unwrap();
        assert_eq!(seq.to_string(), "AT");
        assert!(seq.induce_deletion(2, 1).is_err());
    }

    // --- display ---

    #[test]
    fn summary_truncates_long_sequences() {
        let short = dna("ACGT");
        assert_eq!(short.summary(), "DNA sequence (4 bp): ACGT");
        let long = dna(&"ACGT".repeat(10));
        assert_eq!(
            long.summary(),
            "DNA sequence (40 bp): ACGTACGTACGTACGTACGT..."
        );
        assert_eq!(format!("{:?}", rna("AUG")), "RNA(\"AUG\")");
    }
}
