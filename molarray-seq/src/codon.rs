//! Codon translation with the standard genetic code (NCBI Table 1).
//!
//! Codons may be spelled with `T` or `U`. Amino acids are reported either as
//! one-letter codes (`*` for stop) or as three-letter names (`Stop` for stop).

// ---------------------------------------------------------------------------
// Base encoding: A=0, C=1, G=2, T/U=3
// ---------------------------------------------------------------------------

fn base_index(b: char) -> Option<usize> {
    match b.to_ascii_uppercase() {
        'A' => Some(0),
        'C' => Some(1),
        'G' => Some(2),
        'T' | 'U' => Some(3),
        _ => None,
    }
}

/// Convert a codon to an index in [0, 64).
fn codon_index(codon: [char; 3]) -> Option<usize> {
    let b1 = base_index(codon[0])?;
    let b2 = base_index(codon[1])?;
    let b3 = base_index(codon[2])?;
    Some(b1 * 16 + b2 * 4 + b3)
}

// Codon order: AAA, AAC, AAG, AAU, ACA, ..., UUU (base order A, C, G, U).
const STANDARD_AA: [u8; 64] = [
    b'K', b'N', b'K', b'N', b'T', b'T', b'T', b'T', b'R', b'S', b'R', b'S',
    b'I', b'I', b'M', b'I', b'Q', b'H', b'Q', b'H', b'P', b'P', b'P', b'P',
    b'R', b'R', b'R', b'R', b'L', b'L', b'L', b'L', b'E', b'D', b'E', b'D',
    b'A', b'A', b'A', b'A', b'G', b'G', b'G', b'G', b'V', b'V', b'V', b'V',
    b'*', b'Y', b'*', b'Y', b'S', b'S', b'S', b'S', b'*', b'C', b'W', b'C',
    b'L', b'F', b'L', b'F',
];

/// Three-letter name for a one-letter amino acid code.
pub fn three_letter(aa: u8) -> Option<&'static str> {
    let name = match aa {
        b'A' => "Ala",
        b'R' => "Arg",
        b'N' => "Asn",
        b'D' => "Asp",
        b'C' => "Cys",
        b'Q' => "Gln",
        b'E' => "Glu",
        b'G' => "Gly",
        b'H' => "His",
        b'I' => "Ile",
        b'L' => "Leu",
        b'K' => "Lys",
        b'M' => "Met",
        b'F' => "Phe",
        b'P' => "Pro",
        b'S' => "Ser",
        b'T' => "Thr",
        b'W' => "Trp",
        b'Y' => "Tyr",
        b'V' => "Val",
        b'*' => "Stop",
        _ => return None,
    };
    Some(name)
}

/// One-letter amino acid for a codon, `*` for stop.
pub fn translate_codon(codon: [char; 3]) -> Option<u8> {
    codon_index(codon).map(|i| STANDARD_AA[i])
}

/// Three-letter amino acid name for a codon, `Stop` for stop codons.
///
/// Returns `None` if any position is not a nucleotide.
pub fn amino_acid(codon: [char; 3]) -> Option<&'static str> {
    translate_codon(codon).and_then(three_letter)
}

/// Whether `codon` is a stop codon in the standard code.
pub fn is_stop(codon: [char; 3]) -> bool {
    translate_codon(codon) == Some(b'*')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codon(s: &str) -> [char; 3] {
        let c: Vec<char> = s.chars().collect();
        [c[0], c[1], c[2]]
    }

    #[test]
    fn start_codon_is_met() {
        assert_eq!(amino_acid(codon("AUG")), Some("Met"));
        assert_eq!(amino_acid(codon("ATG")), Some("Met"));
        assert_eq!(translate_codon(codon("AUG")), Some(b'M'));
    }

    #[test]
    fn stop_codons() {
        for s in ["UAA", "UAG", "UGA", "TAA", "TAG", "TGA"] {
            assert!(is_stop(codon(s)), "{} should be a stop codon", s);
            assert_eq!(amino_acid(codon(s)), Some("Stop"));
        }
        assert!(!is_stop(codon("UGG")));
    }

    #[test]
    fn spot_checks() {
        assert_eq!(amino_acid(codon("UUU")), Some("Phe"));
        assert_eq!(amino_acid(codon("UUA")), Some("Leu"));
        assert_eq!(amino_acid(codon("CUG")), Some("Leu"));
        assert_eq!(amino_acid(codon("AGU")), Some("Ser"));
        assert_eq!(amino_acid(codon("AGA")), Some("Arg"));
        assert_eq!(amino_acid(codon("UGG")), Some("Trp"));
        assert_eq!(amino_acid(codon("GGC")), Some("Gly"));
        assert_eq!(amino_acid(codon("CAC")), Some("His"));
        assert_eq!(amino_acid(codon("aaa")), Some("Lys"));
    }

    #[test]
    fn invalid_codon() {
        assert_eq!(amino_acid(codon("AXG")), None);
        assert_eq!(translate_codon(codon("NNN")), None);
    }

    #[test]
    fn every_code_has_a_name() {
        for &aa in STANDARD_AA.iter() {
            assert!(three_letter(aa).is_some(), "missing name for {}", aa as char);
        }
    }
}
