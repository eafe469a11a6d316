//! Nucleic-acid alphabets.
//!
//! [`NucleicAcid`] selects between the DNA alphabet (`ACGT`) and the RNA
//! alphabet (`ACGU`). It also owns the base-pairing rules and the start/stop
//! codon spellings for its alphabet.

use std::fmt;

/// Molecule type of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NucleicAcid {
    Dna,
    Rna,
}

impl NucleicAcid {
    /// Human-readable name ("DNA" or "RNA").
    pub const fn name(self) -> &'static str {
        match self {
            NucleicAcid::Dna => "DNA",
            NucleicAcid::Rna => "RNA",
        }
    }

    /// The valid uppercase bases.
    pub const fn valid_bases(self) -> &'static [char] {
        match self {
            NucleicAcid::Dna => &['A', 'C', 'G', 'T'],
            NucleicAcid::Rna => &['A', 'C', 'G', 'U'],
        }
    }

    /// Check whether `base` (assumed already uppercased) belongs to this
    /// alphabet.
    pub fn is_valid(self, base: char) -> bool {
        self.valid_bases().contains(&base)
    }

    /// Watson-Crick partner of `base`, spelled in this alphabet.
    ///
    /// Both `T` and `U` pair with `A`; `A` pairs with `T` in DNA and `U` in
    /// RNA. Returns `None` for anything that is not a base.
    pub const fn complement(self, base: char) -> Option<char> {
        match base {
            'A' => match self {
                NucleicAcid::Dna => Some('T'),
                NucleicAcid::Rna => Some('U'),
            },
            'T' | 'U' => Some('A'),
            'G' => Some('C'),
            'C' => Some('G'),
            _ => None,
        }
    }

    /// The start codon (`ATG` / `AUG`).
    pub const fn start_codon(self) -> [char; 3] {
        match self {
            NucleicAcid::Dna => ['A', 'T', 'G'],
            NucleicAcid::Rna => ['A', 'U', 'G'],
        }
    }

    /// The three stop codons, amber, ochre, then opal.
    pub const fn stop_codons(self) -> [[char; 3]; 3] {
        match self {
            NucleicAcid::Dna => [['T', 'A', 'G'], ['T', 'A', 'A'], ['T', 'G', 'A']],
            NucleicAcid::Rna => [['U', 'A', 'G'], ['U', 'A', 'A'], ['U', 'G', 'A']],
        }
    }
}

impl fmt::Display for NucleicAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
