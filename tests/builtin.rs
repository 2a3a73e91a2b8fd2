//! Checks the embedded snapshot against the generated file it was taken from.

use std::path::PathBuf;

use v8heapconst::{HeapSpace, LoadConfig, Snapshot, TableKind};

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/samples/v8heapconst.py")
}

#[test]
fn builtin() {
    let snapshot = Snapshot::builtin().unwrap();

    verify_instance_types(snapshot);
    verify_known_maps(snapshot);
    verify_known_objects(snapshot);
    verify_heap_first_pages(snapshot);
    verify_frame_markers(snapshot);
}

#[test]
fn sample_equals_builtin() {
    let sample = Snapshot::from_file_with_config(&sample_path(), LoadConfig::strict()).unwrap();
    let builtin = Snapshot::builtin().unwrap();

    assert_eq!(&sample, builtin);
    assert_eq!(sample.fingerprint(), builtin.fingerprint());

    verify_instance_types(&sample);
    verify_known_maps(&sample);
    verify_known_objects(&sample);
    verify_heap_first_pages(&sample);
    verify_frame_markers(&sample);
}

#[test]
fn writer_reproduces_sample() {
    let expected = std::fs::read(sample_path()).unwrap();

    let mut written = Vec::new();
    Snapshot::builtin().unwrap().write_to(&mut written).unwrap();

    assert_eq!(written.len(), expected.len());
    assert!(written == expected, "written snapshot differs from the sample");
}

#[test]
fn declaration_order_kept() {
    let snapshot = Snapshot::builtin().unwrap();

    let first_maps: Vec<&str> = snapshot
        .known_maps()
        .iter()
        .take(3)
        .map(|entry| entry.name.as_str())
        .collect();
    assert_eq!(first_maps, ["MetaMap", "NullMap", "StrongDescriptorArrayMap"]);

    let codes: Vec<u16> = snapshot.instance_types().iter().map(|entry| entry.code).collect();
    assert_eq!(codes.first(), Some(&0));
    assert_eq!(codes.last(), Some(&2152));
    assert_eq!(codes.len(), 270);
}

fn verify_instance_types(snapshot: &Snapshot) {
    let table = snapshot.instance_types();
    assert_eq!(table.len(), 270);

    assert_eq!(snapshot.lookup_instance_type(247), Some("MAP_TYPE"));
    assert_eq!(snapshot.lookup_instance_type(131), Some("ODDBALL_TYPE"));
    assert_eq!(snapshot.lookup_instance_type(2152), Some("WASM_VALUE_OBJECT_TYPE"));
    assert_eq!(snapshot.lookup_instance_type(99999), None);
    assert_eq!(snapshot.lookup_instance_type(u32::from(u16::MAX)), None);
    assert_eq!(snapshot.lookup_instance_type(65_536 + 247), None);

    for entry in table {
        assert_eq!(
            snapshot.lookup_instance_type(u32::from(entry.code)),
            Some(entry.name.as_str())
        );
    }
}

fn verify_known_maps(snapshot: &Snapshot) {
    let table = snapshot.known_maps();
    assert_eq!(table.len(), 181);

    let meta = snapshot.lookup_map(HeapSpace::ReadOnly, 0x02139).unwrap();
    assert_eq!(meta.as_tuple(), (247, "MetaMap"));
    assert!(snapshot.lookup_map(HeapSpace::ReadOnly, 0x0213a).is_none());

    // Oddballs and fillers share their instance types
    let fillers: Vec<&str> = table.maps_of_type(243).map(|entry| entry.name.as_str()).collect();
    assert_eq!(fillers, ["OnePointerFillerMap", "TwoPointerFillerMap"]);
    assert!(table.maps_of_type(131).any(|entry| entry.name == "NullMap"));

    for entry in table {
        let map = snapshot.lookup_map(entry.key.space, entry.key.offset).unwrap();
        assert_eq!(map.instance_type, entry.instance_type);
        assert_eq!(map.name, entry.name);
        assert!(snapshot.lookup_instance_type(u32::from(map.instance_type)).is_some());
    }

    let spaces: Vec<HeapSpace> = table.iter().map(|entry| entry.key.space).collect();
    assert!(spaces.contains(&HeapSpace::ReadOnly));
    assert!(spaces.contains(&HeapSpace::Old));
}

fn verify_known_objects(snapshot: &Snapshot) {
    let table = snapshot.known_objects();
    assert_eq!(table.len(), 109);

    assert_eq!(
        snapshot.lookup_object(HeapSpace::Old, 0x0439d),
        Some("ExternalMap")
    );
    // Same key, separate namespaces
    assert_eq!(
        snapshot.lookup_map(HeapSpace::Old, 0x0439d).map(|map| map.name),
        Some("ExternalMap")
    );
    assert_eq!(snapshot.lookup_object(HeapSpace::ReadOnly, 0x02139), None);

    for entry in table {
        assert_eq!(
            snapshot.lookup_object(entry.key.space, entry.key.offset),
            Some(entry.name.as_str())
        );
    }
}

fn verify_heap_first_pages(snapshot: &Snapshot) {
    assert_eq!(snapshot.heap_first_pages().len(), 2);
    assert_eq!(snapshot.lookup_heap_space(0x000c_0000), Some(HeapSpace::Old));
    assert_eq!(snapshot.lookup_heap_space(0x0000_0000), Some(HeapSpace::ReadOnly));
    assert_eq!(snapshot.lookup_heap_space(0x0004_0000), None);
}

fn verify_frame_markers(snapshot: &Snapshot) {
    let markers = snapshot.frame_markers();
    assert_eq!(markers.len(), 26);
    assert_eq!(markers[0], "ENTRY");
    assert_eq!(markers[25], "NATIVE");
    assert_eq!(snapshot.frame_marker_index("CONSTRUCT_ENTRY"), Some(1));
    assert_eq!(snapshot.frame_marker(26), None);
    assert_eq!(markers, snapshot.frame_marker_list().as_slice());

    assert_eq!(TableKind::FrameMarkers.to_string(), "FRAME_MARKERS");
}
