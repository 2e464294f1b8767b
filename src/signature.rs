//! Groups codes by the exact set of files that contain them.

use std::collections::{BTreeMap, BTreeSet};

use fxhash::FxBuildHasher;
use indexmap::IndexMap;

use crate::extract::CodeSet;

/// The per-file code sets, keyed by file name in discovery order.
pub type FileSets = IndexMap<String, CodeSet, FxBuildHasher>;

/// A code's signature: the ascending-sorted names of every file containing
/// it. Two codes with the same signature land in the same bucket. The sorted
/// name list is the signature's whole identity, so a plain derived `Ord`
/// suffices for use as a `BTreeMap` key; the report applies its own
/// display ordering on top.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Signature {
    files: Vec<String>,
}

impl Signature {
    fn new(files: Vec<String>) -> Self {
        debug_assert!(files.windows(2).all(|w| w[0] < w[1]), "file names must be sorted");
        Signature { files }
    }

    /// How many files share this signature.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// A signature is never empty: every code came from at least one file.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// The file names, ascending.
    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// The comma-joined file names, used both for display and as the
    /// tie-break sort key among signatures of equal size.
    #[must_use]
    pub fn joined(&self) -> String {
        self.files.join(", ")
    }
}

/// Buckets of codes, keyed by their shared signature.
pub type Buckets = BTreeMap<Signature, CodeSet>;

/// One pass over the union of all codes: for each code, scan the sorted file
/// names and collect those whose set contains it. That ordered list is the
/// code's signature; the code joins the bucket keyed by it. O(codes × files),
/// fine for the intended envelope of up to ~10 files.
#[must_use]
pub fn build(file_sets: &FileSets) -> Buckets {
    let mut names: Vec<&String> = file_sets.keys().collect();
    names.sort();

    let mut all_codes = BTreeSet::new();
    for set in file_sets.values() {
        all_codes.extend(set.iter());
    }

    let mut buckets = Buckets::new();
    for code in all_codes {
        let files: Vec<String> = names
            .iter()
            .filter(|name| file_sets[name.as_str()].contains(code))
            .map(|name| (*name).clone())
            .collect();
        buckets.entry(Signature::new(files)).or_default().insert(code.clone());
    }
    buckets
}
