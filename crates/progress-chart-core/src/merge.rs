// File: crates/progress-chart-core/src/merge.rs
// Summary: Folds the primary per-day series and secondary timelines into one ordered bucket list.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::Serialize;

use crate::source::{PrimaryBucketRaw, RawEventPoint, SourceKind};
use crate::timekey::{TimeKey, TimeKeyNormalizer};
use crate::types::FieldId;

/// One point on the merged time axis.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CanonicalBucket {
    /// `"DD.MM"` or `"DD.MM HH:MM"`, unique within one build.
    pub key: String,
    /// Assigned once during the merge; buckets are sorted by it.
    pub order: i64,
    pub label: String,
    /// Every field seen anywhere in the build; unoffered ones read `0`.
    pub fields: BTreeMap<FieldId, f64>,
    /// Fields some source actually supplied for this bucket.
    pub field_presence: BTreeSet<FieldId>,
}

impl CanonicalBucket {
    fn new(key: &TimeKey, order: i64) -> Self {
        Self {
            key: key.key(),
            order,
            label: key.label(),
            fields: BTreeMap::new(),
            field_presence: BTreeSet::new(),
        }
    }

    /// Value of `field`, `0` when absent.
    pub fn value(&self, field: &str) -> f64 {
        self.fields.get(field).copied().unwrap_or(0.0)
    }

    /// Whether any source offered `field` for this bucket.
    pub fn offers(&self, field: &str) -> bool {
        self.field_presence.contains(field)
    }

    /// First value wins: fields already offered are never overwritten.
    fn absorb<'a, I>(&mut self, incoming: I)
    where
        I: IntoIterator<Item = (&'a FieldId, &'a f64)>,
    {
        for (field, value) in incoming {
            if self.field_presence.insert(field.clone()) {
                let value = if value.is_finite() { *value } else { 0.0 };
                self.fields.insert(field.clone(), value);
            }
        }
    }
}

/// Result of one merge pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MergeOutcome {
    pub buckets: Vec<CanonicalBucket>,
    /// Records dropped because their date/time could not be parsed.
    pub normalization_failures: usize,
}

/// Merges feeds under a fixed source priority.
///
/// Sources named in `priority` are folded first, in that order; any other source
/// follows in [`SourceKind`] declaration order. Map iteration order never matters.
#[derive(Clone, Debug)]
pub struct SeriesMerger {
    normalizer: TimeKeyNormalizer,
    priority: Vec<SourceKind>,
}

impl SeriesMerger {
    pub fn new(normalizer: TimeKeyNormalizer, priority: &[SourceKind]) -> Self {
        let mut order: Vec<SourceKind> = Vec::with_capacity(SourceKind::ALL.len());
        for kind in priority.iter().copied().chain(SourceKind::ALL) {
            if !order.contains(&kind) {
                order.push(kind);
            }
        }
        Self { normalizer, priority: order }
    }

    /// Effective fold order of the secondary sources.
    pub fn source_order(&self) -> &[SourceKind] {
        &self.priority
    }

    pub fn merge(
        &self,
        primary: &[PrimaryBucketRaw],
        secondary: &HashMap<SourceKind, Vec<RawEventPoint>>,
    ) -> MergeOutcome {
        let mut state = MergeState::default();

        for (index, raw) in primary.iter().enumerate() {
            let Some(key) = self.normalizer.normalize(Some(&raw.date), raw.time.as_deref()) else {
                tracing::debug!(date = %raw.date, index, "dropping primary record with unparsable date");
                state.failures += 1;
                continue;
            };
            let order = i64::try_from(index).unwrap_or(i64::MAX);
            state.upsert(&key, Some(order)).absorb(&raw.fields);
        }

        for source in &self.priority {
            let Some(records) = secondary.get(source) else { continue };
            for record in records {
                if record.source != *source {
                    tracing::debug!(listed = %source, record = %record.source, "record filed under another source; using the listed one");
                }
                let Some(key) = self
                    .normalizer
                    .normalize(record.raw_date.as_deref(), record.raw_time.as_deref())
                else {
                    tracing::debug!(
                        source = %source,
                        date = ?record.raw_date,
                        time = ?record.raw_time,
                        "dropping secondary record with unparsable date/time"
                    );
                    state.failures += 1;
                    continue;
                };
                let extracted = source.extract(&record.fields);
                state.upsert(&key, None).absorb(&extracted);
            }
        }

        MergeOutcome { buckets: state.finish(), normalization_failures: state.failures }
    }
}

#[derive(Default)]
struct MergeState {
    buckets: Vec<CanonicalBucket>,
    index: HashMap<String, usize>,
    max_order: Option<i64>,
    failures: usize,
}

impl MergeState {
    /// Finds the bucket for `key`, creating it with `order` (or `max + 1`) when new.
    fn upsert(&mut self, key: &TimeKey, order: Option<i64>) -> &mut CanonicalBucket {
        let k = key.key();
        let existing = self.index.get(&k).copied();
        let slot = match existing {
            Some(slot) => slot,
            None => {
                let order = order.unwrap_or_else(|| self.max_order.map_or(0, |m| m + 1));
                self.max_order = Some(self.max_order.map_or(order, |m| m.max(order)));
                self.buckets.push(CanonicalBucket::new(key, order));
                self.index.insert(k, self.buckets.len() - 1);
                self.buckets.len() - 1
            }
        };
        &mut self.buckets[slot]
    }

    fn finish(&mut self) -> Vec<CanonicalBucket> {
        let mut buckets = std::mem::take(&mut self.buckets);
        let all_fields: BTreeSet<FieldId> =
            buckets.iter().flat_map(|b| b.fields.keys().cloned()).collect();
        for bucket in &mut buckets {
            for field in &all_fields {
                bucket.fields.entry(field.clone()).or_insert(0.0);
            }
        }
        // Stable: equal orders keep insertion order.
        buckets.sort_by_key(|b| b.order);
        buckets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn merger(priority: &[SourceKind]) -> SeriesMerger {
        let today = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        SeriesMerger::new(TimeKeyNormalizer::new(today), priority)
    }

    #[test]
    fn source_order_puts_priority_first_then_declaration_order() {
        let m = merger(&[SourceKind::Quiz, SourceKind::Video, SourceKind::Quiz]);
        assert_eq!(
            m.source_order(),
            &[
                SourceKind::Quiz,
                SourceKind::Video,
                SourceKind::Theory,
                SourceKind::Challenge,
                SourceKind::Exercise
            ]
        );
    }

    #[test]
    fn duplicate_primary_keys_collapse_into_first_bucket() {
        let primary = vec![
            PrimaryBucketRaw::new("01.03").with_field("theory", 2.0),
            PrimaryBucketRaw::new("2025-03-01").with_field("theory", 5.0).with_field("efficiency", 40.0),
        ];
        let out = merger(&[]).merge(&primary, &HashMap::new());
        assert_eq!(out.buckets.len(), 1);
        assert_eq!(out.buckets[0].order, 0);
        assert_eq!(out.buckets[0].value("theory"), 2.0);
        assert_eq!(out.buckets[0].value("efficiency"), 40.0);
    }

    #[test]
    fn dropped_primary_rows_leave_gaps_but_keep_order() {
        let primary = vec![
            PrimaryBucketRaw::new("N/A"),
            PrimaryBucketRaw::new("02.03"),
            PrimaryBucketRaw::new("01.03"),
        ];
        let out = merger(&[]).merge(&primary, &HashMap::new());
        assert_eq!(out.normalization_failures, 1);
        let keys: Vec<_> = out.buckets.iter().map(|b| (b.key.as_str(), b.order)).collect();
        assert_eq!(keys, vec![("02.03", 1), ("01.03", 2)]);
    }
}
