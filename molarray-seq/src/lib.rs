//! DNA and RNA sequences on top of the molarray linked array.
//!
//! Provides a validated nucleic-acid type and the usual transformations,
//! all expressed through the [`LinkedArray`](molarray_core::LinkedArray)
//! public API:
//!
//! - **Alphabets**: [`NucleicAcid`] with base validation and pairing rules
//! - **Sequences**: [`MolecularArray`], with file load/save, transcription,
//!   reverse complement, GC content, splicing, and point mutations
//! - **Codon translation**: standard genetic code (NCBI Table 1) in [`codon`]
//! - **ORFs**: [`Orf`] detection and peptide translation
//! - **Hairpins**: stem-loop prediction with [`HairpinParams`]
//!
//! # Example
//!
//! ```
//! use molarray_seq::{MolecularArray, NucleicAcid, Orf};
//!
//! // Lowercase input is normalized
//! let dna = MolecularArray::new("atgcgtacgtag", NucleicAcid::Dna).unwrap();
//! assert_eq!(dna.to_string(), "ATGCGTACGTAG");
//!
//! // Reverse complement and transcription
//! assert_eq!(dna.complement_sequence(NucleicAcid::Dna).unwrap(), "CTACGTACGCAT");
//! assert_eq!(dna.transcribe(), "AUGCGUACGUAG");
//!
//! // One ORF, translated up to the stop codon
//! assert_eq!(dna.find_orfs(), [Orf { start: 0, stop: 9 }]);
//! let peptides = dna.translate().unwrap();
//! assert_eq!(peptides.get(0).unwrap(), "Met-Arg-Thr");
//! ```

pub mod alphabet;
pub mod codon;
pub mod hairpin;
pub mod molecule;
pub mod orf;

pub use alphabet::NucleicAcid;
pub use codon::{amino_acid, translate_codon};
pub use hairpin::{Hairpin, HairpinParams, MIN_LOOP, MIN_STEM};
pub use molecule::MolecularArray;
pub use orf::Orf;
