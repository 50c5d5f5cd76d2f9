//! Categorical encoding tables
//!
//! Each categorical feature is encoded as the index of its label in a fixed,
//! ordered label list. The same two statics are used when fitting and when
//! encoding form input, so the codes always agree with the fitted weights.

/// Fixed label → code mapping for one categorical feature
#[derive(Debug, PartialEq, Eq)]
pub struct EncodingTable {
    feature: &'static str,
    labels: &'static [&'static str],
}

/// Location tier: Budget = 0, Standard = 1, Premium = 2
pub static LOCATION: EncodingTable = EncodingTable::new("Location", &["Budget", "Standard", "Premium"]);

/// Parking flag: No = 0, Yes = 1
pub static PARKING: EncodingTable = EncodingTable::new("Parking", &["No", "Yes"]);

impl EncodingTable {
    pub const fn new(feature: &'static str, labels: &'static [&'static str]) -> Self {
        Self { feature, labels }
    }

    /// Name of the feature this table encodes
    pub fn feature(&self) -> &'static str {
        self.feature
    }

    /// Labels in code order; these are also the selector choices
    pub fn labels(&self) -> &'static [&'static str] {
        self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Look up the code for a label (exact, case-sensitive match)
    pub fn encode(&self, label: &str) -> Option<u8> {
        self.labels
            .iter()
            .position(|l| *l == label)
            .and_then(|idx| u8::try_from(idx).ok())
    }

    /// Reverse lookup of a code
    pub fn decode(&self, code: u8) -> Option<&'static str> {
        self.labels.get(code as usize).copied()
    }
}
