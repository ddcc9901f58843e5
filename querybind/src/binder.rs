use querybind_core::{Reflect, Type};
use tracing::{debug, trace};

use crate::convert::{Assignment, assign};
use crate::{BindError, BindReport, BoundField, Outcome, TagValue, ValueSource};

/// Binds `values` onto the fields of `target` annotated under `tag`.
///
/// Shorthand for `Binder::new(tag).bind(values, target)`. Returns the keys of
/// the fields that were written, in field declaration order.
///
/// ```
/// use querybind::{Reflect, Values, unmarshal};
///
/// #[derive(Default, Reflect)]
/// struct Page {
///     #[tag(url = "page")]
///     page: u32,
///     #[tag(url = "sort,omitempty")]
///     sort: String,
/// }
///
/// let q: Values = [("page", "3"), ("unrelated", "x")].into_iter().collect();
/// let mut page = Page::default();
/// let bound = unmarshal(&q, &mut page, "url")?;
/// assert_eq!(bound, ["page"]);
/// assert_eq!(page.page, 3);
/// # Ok::<(), querybind::BindError>(())
/// ```
pub fn unmarshal<V: ValueSource + ?Sized>(
    values: &V,
    target: &mut dyn Reflect,
    tag: &str,
) -> Result<Vec<String>, BindError> {
    Binder::new(tag).bind(values, target)
}

/// Writes query values into annotated struct fields.
///
/// A binder is configured once and reused. It holds no state between calls.
///
/// ```
/// use querybind::{Binder, Reflect, Values};
///
/// #[derive(Default, Reflect)]
/// struct Filter {
///     #[tag(form = "ids;required")]
///     ids: Vec<u64>,
///     #[tag(form = "skip")]
///     internal: String,
/// }
///
/// let q: Values = [("ids", "4"), ("ids", "x"), ("skip", "y")].into_iter().collect();
/// let mut filter = Filter::default();
/// let report = Binder::new("form")
///     .separator(';')
///     .exclusion_sentinel("skip")
///     .bind_report(&q, &mut filter)?;
///
/// assert_eq!(filter.ids, [4, 0]);
/// assert_eq!(report.keys().collect::<Vec<_>>(), ["ids"]);
/// assert!(!report.is_clean());
/// # Ok::<(), querybind::BindError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binder<'a> {
    tag: &'a str,
    separator: char,
    exclusion_sentinel: &'a str,
}

impl<'a> Binder<'a> {
    /// Separates the key from its modifiers unless overridden.
    pub const DEFAULT_SEPARATOR: char = ',';

    /// Marks a field as excluded unless overridden.
    pub const DEFAULT_EXCLUSION_SENTINEL: &'static str = "-";

    /// Creates a binder reading annotations from the `tag` namespace.
    pub const fn new(tag: &'a str) -> Self {
        Self {
            tag,
            separator: Self::DEFAULT_SEPARATOR,
            exclusion_sentinel: Self::DEFAULT_EXCLUSION_SENTINEL,
        }
    }

    /// Sets the character that ends the key in an annotation.
    pub const fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Sets the annotation that excludes a field from binding.
    pub const fn exclusion_sentinel(mut self, sentinel: &'a str) -> Self {
        self.exclusion_sentinel = sentinel;
        self
    }

    /// The annotation namespace.
    pub const fn tag(&self) -> &'a str {
        self.tag
    }

    /// Binds and returns the keys of the written fields.
    pub fn bind<V: ValueSource + ?Sized>(
        &self,
        values: &V,
        target: &mut dyn Reflect,
    ) -> Result<Vec<String>, BindError> {
        self.bind_report(values, target).map(BindReport::into_keys)
    }

    /// Binds and returns a per-field account, including values that did not
    /// convert.
    ///
    /// Fails with [`BindError::NotAStruct`] before touching anything when
    /// `target` is neither a struct nor a `Box` of one.
    pub fn bind_report<V: ValueSource + ?Sized>(
        &self,
        values: &V,
        target: &mut dyn Reflect,
    ) -> Result<BindReport, BindError> {
        let outer = target.shape();
        let target: &mut dyn Reflect = match outer.ty {
            Type::Pointer(_) => match target.pointee_mut() {
                Some(pointee) => pointee,
                None => {
                    debug!(target_type = outer.type_identifier, "pointer has no pointee");
                    return Err(BindError::NotAStruct {
                        type_identifier: outer.type_identifier,
                    });
                }
            },
            _ => target,
        };

        let shape = target.shape();
        let Some(st) = shape.struct_type() else {
            debug!(
                target_type = shape.type_identifier,
                kind = shape.ty.kind_str(),
                "target is not a struct"
            );
            return Err(BindError::NotAStruct {
                type_identifier: shape.type_identifier,
            });
        };
        debug!(
            target_type = shape.type_identifier,
            tag = self.tag,
            fields = st.fields.len(),
            "binding query values"
        );

        let mut report = BindReport::default();
        for (index, field) in st.fields.iter().enumerate() {
            if !field.is_settable() {
                trace!(field = field.name, "skipping readonly field");
                continue;
            }
            let Some(raw) = field.tag(self.tag) else {
                trace!(field = field.name, tag = self.tag, "skipping field without annotation");
                continue;
            };
            let tag = TagValue::parse(raw, self.separator);
            if raw.is_empty() || tag.is_excluded(self.exclusion_sentinel) {
                trace!(field = field.name, annotation = raw, "skipping excluded field");
                continue;
            }
            let key = tag.key();
            // `",omitempty"` names no parameter, so a `""` query key is never matched.
            if key.is_empty() {
                trace!(field = field.name, annotation = raw, "skipping field with empty key");
                continue;
            }
            let Some(field_values) = values.values(key) else {
                trace!(field = field.name, key, "key not present");
                continue;
            };
            if matches!(field.shape().ty, Type::Opaque) {
                trace!(
                    field = field.name,
                    field_type = field.shape().type_identifier,
                    "skipping opaque field"
                );
                continue;
            }
            let Some(slot) = target.field_mut(index) else {
                trace!(field = field.name, "field is not reachable");
                continue;
            };

            match assign(slot, field_values) {
                Assignment::Unsupported => {
                    trace!(
                        field = field.name,
                        field_type = field.shape().type_identifier,
                        "skipping field of unsupported type"
                    );
                }
                Assignment::Emptied => {
                    trace!(field = field.name, key, "key has no values, sequence emptied");
                }
                Assignment::Attempted { rejected } => {
                    for &at in &rejected {
                        let value = field_values.get(at).map_or("", String::as_str);
                        trace!(key, index = at, value, "value did not convert");
                    }
                    let outcome = if rejected.is_empty() {
                        Outcome::Converted
                    } else {
                        Outcome::Malformed { rejected }
                    };
                    report.push(BoundField {
                        key: key.to_owned(),
                        field: field.name,
                        modifiers: tag.modifiers().map(str::to_owned).collect(),
                        outcome,
                    });
                }
            }
        }

        debug!(bound = report.len(), "bound query values");
        Ok(report)
    }
}

static_assertions::assert_impl_all!(Binder<'static>: Copy, Send, Sync);
