//! Shared fixtures for unit tests.

/// A complete snapshot in the generated format, small enough to reason about by hand.
///
/// Mixes the layouts a hand-edited file may show: single quotes, decimal and hex
/// integers, comments between entries and a missing trailing comma.
pub const SMALL_SNAPSHOT: &str = r#"#!/usr/bin/env python3
# Trimmed snapshot used by the unit tests.

# List of known V8 instance types.
INSTANCE_TYPES = {
  131: "ODDBALL_TYPE",
  247: 'MAP_TYPE',
}

# List of known V8 maps.
KNOWN_MAPS = {
    ("read_only_space", 0x02139): (247, "MetaMap"),
    # oddballs share one instance type
    ("read_only_space", 0x02161): (131, "NullMap"),
    ("read_only_space", 0x021b1): (131, "UndefinedMap"),
}

# List of known V8 objects.
KNOWN_OBJECTS = {
  ("read_only_space", 0x023d9): "UndefinedValue",
  ("old_space", 0x0439d): "ExternalMap"
}

# Lower 32 bits of first page addresses for various heap spaces.
HEAP_FIRST_PAGES = {
  0x000c0000: "old_space",
  0: "read_only_space",
}

# List of known V8 Frame Markers.
FRAME_MARKERS = (
  "ENTRY",
  "CONSTRUCT_ENTRY",
  "EXIT",
)
"#;

/// Builds a snapshot source defining only the given assignments.
pub fn snapshot_source(assignments: &[&str]) -> String {
    let mut source = String::from("# yapf: disable\n");
    for assignment in assignments {
        source.push_str(assignment);
        source.push('\n');
    }
    source
}
