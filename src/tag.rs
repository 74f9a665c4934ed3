use std::collections::{BTreeMap, BTreeSet};

/// A resource tag.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    /// The tag key.
    pub key: String,

    /// The tag value.
    pub value: String,
}

impl Tag {
    /// Construct a tag from a key and value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub(crate) fn from_sdk(tag: aws_sdk_cloudformation::types::Tag) -> Self {
        Self {
            key: tag.key.expect("Tag without key"),
            value: tag.value.expect("Tag without value"),
        }
    }

    pub(crate) fn into_sdk(self) -> aws_sdk_cloudformation::types::Tag {
        aws_sdk_cloudformation::types::Tag::builder()
            .key(self.key)
            .value(self.value)
            .build()
    }
}

pub(crate) fn into_sdk_tags(tags: &[Tag]) -> Vec<aws_sdk_cloudformation::types::Tag> {
    tags.iter().cloned().map(Tag::into_sdk).collect()
}

/// Compute the tags to submit when updating a stack set.
///
/// `active` holds the tags currently attached to the live stack set, `previous_template` the tags
/// the resource model declared on the last successful update, and `new_template` the tags the
/// model declares now.
///
/// The template owns every key it declares; tags added outside the template survive the update
/// unless the template now declares the same key. Concretely:
///
/// - Every tag in `new_template` is included.
/// - A tag in `active` that was not put there by the previous template (an "out-of-band" tag) is
///   retained, unless its key appears in `new_template` (the template's value wins).
/// - A key that was declared previously but is declared no longer is dropped, removing the tag
///   from the stack set.
///
/// Should an out-of-band key somehow carry two values, the greatest value wins: candidates are
/// visited in ascending (key, value) order and later candidates overwrite. The returned tags are
/// sorted by key.
#[must_use]
pub fn reconcile(active: &[Tag], previous_template: &[Tag], new_template: &[Tag]) -> Vec<Tag> {
    let previous_template: BTreeSet<&Tag> = previous_template.iter().collect();

    // Out-of-band tags are active tags the previous template didn't declare, keyed for the
    // precedence check below. Insertion order is ascending (key, value), so a duplicate key
    // resolves to the greatest value rather than to whatever a hash set happens to yield.
    let mut out_of_band: BTreeMap<&str, &Tag> = BTreeMap::new();
    let mut candidates: Vec<&Tag> = active
        .iter()
        .filter(|tag| !previous_template.contains(tag))
        .collect();
    candidates.sort_unstable();
    for tag in candidates {
        out_of_band.insert(tag.key.as_str(), tag);
    }

    let declared_keys: BTreeSet<&str> = new_template.iter().map(|tag| tag.key.as_str()).collect();

    let mut tags_to_set: Vec<Tag> = new_template.to_vec();
    tags_to_set.extend(
        out_of_band
            .into_values()
            .filter(|tag| !declared_keys.contains(tag.key.as_str()))
            .cloned(),
    );
    tags_to_set.sort_unstable();
    tags_to_set.dedup();
    tags_to_set
}
