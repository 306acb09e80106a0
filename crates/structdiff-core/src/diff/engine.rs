//! Difference computation.
//!
//! The core entry point is [`find_differences`], which compares two values of
//! the same declared shape and returns every leaf divergence point.

use crate::config::DiffOptions;
use crate::diff::model::{Difference, Reason};
use crate::diff::path::{build_path, index_step, key_step};
use crate::render::{key_identity, key_text};
use crate::value::{Entry, Inspect, Record, Value};
use crate::{log_op_end, log_op_start};
use std::collections::HashMap;
use std::time::Instant;
use structdiff_core_types::schema::{EVENT_DIFFERENCE, OP_FIND_DIFFERENCES};

/// Compare `expected` with `actual` using default options.
///
/// Returns an empty list when the two values are structurally equal.
pub fn find_differences<'a, T: Inspect>(expected: &'a T, actual: &'a T) -> Vec<Difference<'a>> {
    find_differences_with(expected, actual, &DiffOptions::default())
}

/// Compare `expected` with `actual`.
///
/// Kind-dispatched, recursive:
///
/// 1. Different kinds: one `KindMismatch` at the current path, no recursion.
/// 2. Records: visible fields in declaration order, path `parent.field`.
/// 3. Scalars: exact `==`; one `ValueMismatch` if unequal.
/// 4. Optional references: `Presence` if exactly one side is absent; both
///    present recurse into the referents at the same path.
/// 5. Sequences: `Presence` for nil against present (even empty); one
///    `LengthMismatch` holding both sequences when lengths differ; otherwise
///    every element at `parent.[i]`.
/// 6. Mappings: `Presence` for nil against present; one `LengthMismatch`
///    when sizes differ; otherwise every expected key at `parent.[key]`,
///    with `MissingKey` and an absent `actual` when the key is missing.
/// 7. Unknown: never compared.
///
/// With `options.max_depth` set, a composite at that depth is not walked
/// further. It yields one `DepthExceeded` difference at its own path when a
/// full comparison of the two subtrees would find anything, and nothing
/// otherwise.
pub fn find_differences_with<'a, T: Inspect>(
    expected: &'a T,
    actual: &'a T,
    options: &DiffOptions,
) -> Vec<Difference<'a>> {
    let start = Instant::now();
    log_op_start!(OP_FIND_DIFFERENCES, max_depth = ?options.max_depth);

    let mut walker = Walker::new(options, Mode::Collect);
    walker.compare(expected, actual, "", 0);

    log_op_end!(
        OP_FIND_DIFFERENCES,
        duration_ms = start.elapsed().as_millis() as u64,
        diff_count = walker.differences.len()
    );
    walker.differences
}

/// Whether a walk reports every difference or stops at the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Collect,
    Detect,
}

struct Walker<'a, 'o> {
    options: &'o DiffOptions,
    mode: Mode,
    differences: Vec<Difference<'a>>,
}

/// True when the two subtrees differ anywhere, at any depth.
fn diverges<'a>(expected: &'a dyn Inspect, actual: &'a dyn Inspect) -> bool {
    let unlimited = DiffOptions::default();
    let mut detector = Walker::new(&unlimited, Mode::Detect);
    detector.compare(expected, actual, "", 0);
    !detector.differences.is_empty()
}

impl<'a, 'o> Walker<'a, 'o> {
    fn new(options: &'o DiffOptions, mode: Mode) -> Self {
        Self {
            options,
            mode,
            differences: Vec::new(),
        }
    }

    fn halted(&self) -> bool {
        self.mode == Mode::Detect && !self.differences.is_empty()
    }

    fn record(
        &mut self,
        path: &str,
        expected: Option<&'a dyn Inspect>,
        actual: Option<&'a dyn Inspect>,
        reason: Reason,
    ) {
        if self.mode == Mode::Collect {
            tracing::trace!(
                op = OP_FIND_DIFFERENCES,
                event = EVENT_DIFFERENCE,
                path = path,
                reason = reason.code(),
            );
        }
        self.differences
            .push(Difference::new(path, expected, actual, reason));
    }

    /// True when children at `depth` lie past the configured limit. A
    /// differing subtree there is reported once, coarsely.
    fn beyond_limit(
        &mut self,
        expected: &'a dyn Inspect,
        actual: &'a dyn Inspect,
        path: &str,
        depth: usize,
    ) -> bool {
        match self.options.max_depth {
            Some(max_depth) if depth >= max_depth => {
                if diverges(expected, actual) {
                    self.record(path, Some(expected), Some(actual), Reason::DepthExceeded);
                }
                true
            }
            _ => false,
        }
    }

    fn compare(&mut self, expected: &'a dyn Inspect, actual: &'a dyn Inspect, path: &str, depth: usize) {
        if self.halted() {
            return;
        }
        let (left, right) = (expected.inspect(), actual.inspect());
        if left.kind() != right.kind() {
            self.record(path, Some(expected), Some(actual), Reason::KindMismatch);
            return;
        }

        match (left, right) {
            (Value::Record(left), Value::Record(right)) => {
                if !self.beyond_limit(expected, actual, path, depth) {
                    self.compare_records(&left, &right, path, depth);
                }
            }
            (Value::String(l), Value::String(r)) => self.scalar(l == r, expected, actual, path),
            (Value::Bool(l), Value::Bool(r)) => self.scalar(l == r, expected, actual, path),
            (Value::Int(l), Value::Int(r)) => self.scalar(l == r, expected, actual, path),
            (Value::Uint(l), Value::Uint(r)) => self.scalar(l == r, expected, actual, path),
            (Value::Float(l), Value::Float(r)) => self.scalar(l == r, expected, actual, path),
            (Value::Optional(left), Value::Optional(right)) => match (left, right) {
                (Some(l), Some(r)) => self.compare(l, r, path, depth),
                (None, None) => {}
                _ => self.record(path, Some(expected), Some(actual), Reason::Presence),
            },
            (Value::Sequence(left), Value::Sequence(right)) => match (left, right) {
                (Some(l), Some(r)) => self.compare_sequences(&l, &r, expected, actual, path, depth),
                (None, None) => {}
                _ => self.record(path, Some(expected), Some(actual), Reason::Presence),
            },
            (Value::Mapping(left), Value::Mapping(right)) => match (left, right) {
                (Some(l), Some(r)) => self.compare_mappings(&l, &r, expected, actual, path, depth),
                (None, None) => {}
                _ => self.record(path, Some(expected), Some(actual), Reason::Presence),
            },
            // Unknown on both sides: nothing to compare.
            _ => {}
        }
    }

    fn scalar(&mut self, equal: bool, expected: &'a dyn Inspect, actual: &'a dyn Inspect, path: &str) {
        if !equal {
            self.record(path, Some(expected), Some(actual), Reason::ValueMismatch);
        }
    }

    fn compare_records(&mut self, left: &Record<'a>, right: &Record<'a>, path: &str, depth: usize) {
        for field in left.visible_fields() {
            let field_path = build_path(path, field.name);
            match right.visible_field(field.name) {
                Some(other) => self.compare(field.value, other.value, &field_path, depth + 1),
                None => self.record(&field_path, Some(field.value), None, Reason::MissingKey),
            }
        }
        // Same declared type means identical field sets; this only fires for
        // hand-written views of unrelated records.
        for field in right.visible_fields() {
            if left.visible_field(field.name).is_none() {
                let field_path = build_path(path, field.name);
                self.record(&field_path, None, Some(field.value), Reason::MissingKey);
            }
        }
    }

    fn compare_sequences(
        &mut self,
        left: &[&'a dyn Inspect],
        right: &[&'a dyn Inspect],
        expected: &'a dyn Inspect,
        actual: &'a dyn Inspect,
        path: &str,
        depth: usize,
    ) {
        if left.is_empty() && right.is_empty() {
            return;
        }
        if left.len() != right.len() {
            self.record(path, Some(expected), Some(actual), Reason::LengthMismatch);
            return;
        }
        if self.beyond_limit(expected, actual, path, depth) {
            return;
        }
        for (index, (l, r)) in left.iter().zip(right).enumerate() {
            let element_path = build_path(path, &index_step(index));
            self.compare(*l, *r, &element_path, depth + 1);
        }
    }

    fn compare_mappings(
        &mut self,
        left: &[Entry<'a>],
        right: &[Entry<'a>],
        expected: &'a dyn Inspect,
        actual: &'a dyn Inspect,
        path: &str,
        depth: usize,
    ) {
        if left.len() != right.len() {
            self.record(path, Some(expected), Some(actual), Reason::LengthMismatch);
            return;
        }
        if left.is_empty() || self.beyond_limit(expected, actual, path, depth) {
            return;
        }

        let lookup: HashMap<String, &'a dyn Inspect> = right
            .iter()
            .map(|entry| (key_identity(entry.key), entry.value))
            .collect();

        // Visited by key text; paired by identity, which never collides.
        let mut keyed: Vec<(String, String, &'a dyn Inspect)> = left
            .iter()
            .map(|entry| (key_text(entry.key), key_identity(entry.key), entry.value))
            .collect();
        keyed.sort_by(|a, b| (&a.0, &a.1).cmp(&(&b.0, &b.1)));

        for (key, identity, value) in keyed {
            let entry_path = build_path(path, &key_step(&key));
            match lookup.get(&identity) {
                Some(other) => self.compare(value, *other, &entry_path, depth + 1),
                None => self.record(&entry_path, Some(value), None, Reason::MissingKey),
            }
        }
    }
}
