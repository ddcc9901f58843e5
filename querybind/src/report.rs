/// How the values of one bound field were converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every value converted.
    Converted,
    /// Some values did not convert; those positions kept their zero value.
    Malformed {
        /// Indices into the key's value list that were rejected.
        rejected: Vec<usize>,
    },
}

/// A field the binder wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundField {
    /// The binding key from the annotation.
    pub key: String,
    /// The field's name as declared.
    pub field: &'static str,
    /// Annotation modifiers after the key, which binding ignores.
    pub modifiers: Vec<String>,
    /// Conversion result.
    pub outcome: Outcome,
}

impl BoundField {
    /// Returns true if any value failed to convert.
    pub fn is_malformed(&self) -> bool {
        matches!(self.outcome, Outcome::Malformed { .. })
    }
}

/// Per-field account of one bind call, in field declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindReport {
    fields: Vec<BoundField>,
}

impl BindReport {
    pub(crate) fn push(&mut self, field: BoundField) {
        self.fields.push(field);
    }

    /// The bound fields.
    pub fn fields(&self) -> &[BoundField] {
        &self.fields
    }

    /// The keys of the bound fields; what [`Binder::bind`](crate::Binder::bind) returns.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.key.as_str())
    }

    /// Consumes the report, keeping only the keys.
    pub fn into_keys(self) -> Vec<String> {
        self.fields.into_iter().map(|f| f.key).collect()
    }

    /// The bound field for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&BoundField> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Returns true if no field had a rejected value.
    pub fn is_clean(&self) -> bool {
        !self.fields.iter().any(BoundField::is_malformed)
    }

    /// Fields with at least one rejected value.
    pub fn malformed(&self) -> impl Iterator<Item = &BoundField> {
        self.fields.iter().filter(|f| f.is_malformed())
    }

    /// Number of bound fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if nothing was bound.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl IntoIterator for BindReport {
    type Item = BoundField;
    type IntoIter = std::vec::IntoIter<BoundField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
