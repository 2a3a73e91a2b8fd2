//! Writer for persisted snapshots.
//!
//! Produces the exact layout `mkgrokdump` generates, so that a snapshot written by this
//! crate diffs cleanly against one generated by V8: tables in a fixed order, one entry per
//! line with a trailing comma, heap offsets as five hex digits and page addresses as eight.
//!
//! The canonical rendering uses the same layout with the keyed tables sorted by key. Two
//! snapshots that compare equal render to the same canonical text, whatever order their
//! entries were loaded in. `FRAME_MARKERS` keeps its order in both renderings.

use std::fmt::{self, Write};

use crate::snapshot::Snapshot;

const HEADER: &str = "\
#!/usr/bin/env python3
# Copyright 2019 the V8 project authors. All rights reserved.
# Use of this source code is governed by a BSD-style license that can
# be found in the LICENSE file.

# This file is automatically generated by mkgrokdump and should not
# be modified manually.

# List of known V8 instance types.
# yapf: disable

";

const FOOTER: &str = "\n# This set of constants is generated from a shipping build.\n";

/// Entry order of the keyed tables in the output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Order {
    /// As stored, which is the order the entries were loaded in
    Stored,
    /// Sorted by key
    Canonical,
}

/// Write `snapshot` to `out` in the generated format.
///
/// # Errors
/// Returns [`fmt::Error`] if `out` fails.
pub(crate) fn write<W: Write>(snapshot: &Snapshot, out: &mut W) -> fmt::Result {
    write_ordered(snapshot, Order::Stored, out)
}

/// Write `snapshot` to `out` in the generated format with the keyed tables sorted by key.
///
/// # Errors
/// Returns [`fmt::Error`] if `out` fails.
pub(crate) fn write_canonical<W: Write>(snapshot: &Snapshot, out: &mut W) -> fmt::Result {
    write_ordered(snapshot, Order::Canonical, out)
}

fn write_ordered<W: Write>(snapshot: &Snapshot, order: Order, out: &mut W) -> fmt::Result {
    let mut instance_types: Vec<_> = snapshot.instance_types().iter().collect();
    let mut known_maps: Vec<_> = snapshot.known_maps().iter().collect();
    let mut known_objects: Vec<_> = snapshot.known_objects().iter().collect();
    let mut heap_first_pages: Vec<_> = snapshot.heap_first_pages().iter().collect();

    // Keys are unique within a table, so the sorted order is total
    if order == Order::Canonical {
        instance_types.sort_unstable_by_key(|entry| entry.code);
        known_maps.sort_unstable_by_key(|entry| entry.key);
        known_objects.sort_unstable_by_key(|entry| entry.key);
        heap_first_pages.sort_unstable_by_key(|entry| entry.page);
    }

    out.write_str(HEADER)?;

    writeln!(out, "INSTANCE_TYPES = {{")?;
    for entry in instance_types {
        writeln!(out, "  {}: {},", entry.code, Quoted(&entry.name))?;
    }
    writeln!(out, "}}")?;

    writeln!(out, "\n# List of known V8 maps.")?;
    writeln!(out, "KNOWN_MAPS = {{")?;
    for entry in known_maps {
        writeln!(
            out,
            "    ({}, 0x{:05x}): ({}, {}),",
            Quoted(entry.key.space.name()),
            entry.key.offset,
            entry.instance_type,
            Quoted(&entry.name)
        )?;
    }
    writeln!(out, "}}")?;

    writeln!(out, "\n# List of known V8 objects.")?;
    writeln!(out, "KNOWN_OBJECTS = {{")?;
    for entry in known_objects {
        writeln!(
            out,
            "  ({}, 0x{:05x}): {},",
            Quoted(entry.key.space.name()),
            entry.key.offset,
            Quoted(&entry.name)
        )?;
    }
    writeln!(out, "}}")?;

    writeln!(
        out,
        "\n# Lower 32 bits of first page addresses for various heap spaces."
    )?;
    writeln!(out, "HEAP_FIRST_PAGES = {{")?;
    for entry in heap_first_pages {
        writeln!(
            out,
            "  0x{:08x}: {},",
            entry.page,
            Quoted(entry.space.name())
        )?;
    }
    writeln!(out, "}}")?;

    writeln!(out, "\n# List of known V8 Frame Markers.")?;
    writeln!(out, "FRAME_MARKERS = (")?;
    for name in snapshot.frame_marker_list() {
        writeln!(out, "  {},", Quoted(name))?;
    }
    writeln!(out, ")")?;

    out.write_str(FOOTER)
}

/// A double-quoted string literal, escaped so the reader gets the same text back.
struct Quoted<'a>(&'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for c in self.0.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\t' => f.write_str("\\t")?,
                '\r' => f.write_str("\\r")?,
                c => f.write_char(c)?,
            }
        }
        f.write_char('"')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        snapshot::{FrameMarkers, InstanceTypes, LoadConfig, SnapshotBuilder},
        test::SMALL_SNAPSHOT,
    };

    fn render(snapshot: &Snapshot) -> String {
        let mut out = String::new();
        write(snapshot, &mut out).unwrap();
        out
    }

    #[test]
    fn layout() {
        let snapshot = Snapshot::parse(SMALL_SNAPSHOT).unwrap();
        let source = render(&snapshot);

        assert!(source.starts_with("#!/usr/bin/env python3\n"));
        assert!(source.contains("\nINSTANCE_TYPES = {\n  131: \"ODDBALL_TYPE\",\n  247: \"MAP_TYPE\",\n}\n"));
        assert!(source.contains("\n    (\"read_only_space\", 0x02139): (247, \"MetaMap\"),\n"));
        assert!(source.contains("\n  (\"old_space\", 0x0439d): \"ExternalMap\",\n}\n"));
        assert!(source.contains(
            "HEAP_FIRST_PAGES = {\n  0x000c0000: \"old_space\",\n  0x00000000: \"read_only_space\",\n}\n"
        ));
        assert!(source.ends_with(
            "FRAME_MARKERS = (\n  \"ENTRY\",\n  \"CONSTRUCT_ENTRY\",\n  \"EXIT\",\n)\n\n# This set of constants is generated from a shipping build.\n"
        ));
    }

    #[test]
    fn output_reads_back() {
        let snapshot = Snapshot::parse(SMALL_SNAPSHOT).unwrap();
        let source = render(&snapshot);
        let reread = Snapshot::parse_with_config(&source, LoadConfig::strict()).unwrap();
        assert_eq!(reread, snapshot);
        assert_eq!(render(&reread), source);
    }

    #[test]
    fn canonical_sorts_keyed_tables() {
        let snapshot = Snapshot::parse(SMALL_SNAPSHOT).unwrap();
        let mut canonical = String::new();
        write_canonical(&snapshot, &mut canonical).unwrap();

        // Stored order keeps the file's page order, canonical order sorts by page
        assert!(render(&snapshot).contains(
            "HEAP_FIRST_PAGES = {\n  0x000c0000: \"old_space\",\n  0x00000000: \"read_only_space\",\n}\n"
        ));
        assert!(canonical.contains(
            "HEAP_FIRST_PAGES = {\n  0x00000000: \"read_only_space\",\n  0x000c0000: \"old_space\",\n}\n"
        ));
        assert!(canonical.ends_with(
            "FRAME_MARKERS = (\n  \"ENTRY\",\n  \"CONSTRUCT_ENTRY\",\n  \"EXIT\",\n)\n\n# This set of constants is generated from a shipping build.\n"
        ));

        let reread = Snapshot::parse(&canonical).unwrap();
        assert_eq!(reread, snapshot);
    }

    #[test]
    fn builtin_starts_with_generated_header() {
        let source = render(Snapshot::builtin().unwrap());
        assert!(source.starts_with(HEADER));
        assert!(source.contains("\nINSTANCE_TYPES = {\n  0: \"INTERNALIZED_STRING_TYPE\",\n"));
        assert_eq!(source.lines().filter(|line| line.starts_with("    (")).count(), 181);
    }

    #[test]
    fn names_are_escaped() {
        let snapshot = SnapshotBuilder::new()
            .instance_types(InstanceTypes::from_entries([(1, "QUOTE\"D\\")]).unwrap())
            .frame_markers(FrameMarkers::from_names(["TAB\tBED"]).unwrap())
            .build(LoadConfig::lenient())
            .unwrap();

        let source = render(&snapshot);
        assert!(source.contains("  1: \"QUOTE\\\"D\\\\\",\n"));
        assert!(source.contains("  \"TAB\\tBED\",\n"));

        let reread = Snapshot::parse(&source).unwrap();
        assert_eq!(reread.lookup_instance_type(1), Some("QUOTE\"D\\"));
        assert_eq!(reread.frame_marker(0), Some("TAB\tBED"));
    }
}
