//! Loading snapshots from disk, including damaged and partial files.

use std::{fs, io::Write, path::PathBuf};

use tempfile::NamedTempFile;
use v8heapconst::{Error, HeapSpace, LoadConfig, Snapshot, TableKind};

fn sample() -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/samples/v8heapconst.py");
    fs::read_to_string(path).unwrap()
}

fn write_temp(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn load_written_snapshot() {
    let builtin = Snapshot::builtin().unwrap();

    let mut file = NamedTempFile::new().unwrap();
    builtin.write_to(&mut file).unwrap();
    file.flush().unwrap();

    let loaded = Snapshot::from_file(file.path()).unwrap();
    assert_eq!(&loaded, builtin);
    assert_eq!(
        loaded.lookup_map(HeapSpace::ReadOnly, 0x02139).unwrap().as_tuple(),
        (247, "MetaMap")
    );
}

#[test]
fn from_mem_matches_from_file() {
    let source = sample();
    let file = write_temp(source.as_bytes());

    let from_file = Snapshot::from_file(file.path()).unwrap();
    let from_mem = Snapshot::from_mem(source.into_bytes()).unwrap();
    assert_eq!(from_file, from_mem);
}

#[test]
fn empty_file() {
    let file = write_temp(b"");
    assert!(matches!(Snapshot::from_file(file.path()), Err(Error::Empty)));
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = Snapshot::from_file(&dir.path().join("v8heapconst.py"));
    assert!(matches!(result, Err(Error::FileError(_))));
}

#[test]
fn not_utf8() {
    let file = write_temp(&[b'#', b' ', 0xc3, 0x28, b'\n']);
    assert!(matches!(
        Snapshot::from_file(file.path()),
        Err(Error::Malformed { .. })
    ));
}

#[test]
fn duplicate_map_rejected() {
    // Repeat the MetaMap entry at the end of KNOWN_MAPS
    let source = sample().replacen(
        "}\n\n# List of known V8 objects.",
        "    (\"read_only_space\", 0x02139): (131, \"NullMap\"),\n}\n\n# List of known V8 objects.",
        1,
    );
    let file = write_temp(source.as_bytes());

    match Snapshot::from_file_with_config(file.path(), LoadConfig::lenient()) {
        Err(Error::DuplicateKey { table, key }) => {
            assert_eq!(table, TableKind::KnownMaps);
            assert_eq!(key, "read_only_space+0x02139");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn partial_snapshot() {
    // Only the tables up to KNOWN_MAPS
    let source = sample();
    let end = source.find("# List of known V8 objects.").unwrap();
    let file = write_temp(source[..end].as_bytes());

    assert!(matches!(
        Snapshot::from_file(file.path()),
        Err(Error::MissingTable(TableKind::KnownObjects))
    ));

    let snapshot = Snapshot::from_file_with_config(file.path(), LoadConfig::lenient()).unwrap();
    assert_eq!(snapshot.known_maps().len(), 181);
    assert!(snapshot.known_objects().is_empty());
    assert_eq!(snapshot.lookup_heap_space(0x000c_0000), None);
    assert!(snapshot.frame_markers().is_empty());
}

#[test]
fn unknown_assignment() {
    let source = format!("{}\nBUILD_FLAGS = {{ 'pointer_compression': 1 }}\n", sample());

    let snapshot = Snapshot::parse(&source).unwrap();
    assert_eq!(&snapshot, Snapshot::builtin().unwrap());

    assert!(matches!(
        Snapshot::parse_with_config(&source, LoadConfig::strict()),
        Err(Error::Malformed { .. })
    ));
}

#[test]
fn undefined_instance_type() {
    let source = sample().replace("  247: \"MAP_TYPE\",\n", "");

    let snapshot = Snapshot::parse(&source).unwrap();
    assert_eq!(snapshot.lookup_instance_type(247), None);
    assert_eq!(
        snapshot.lookup_map(HeapSpace::ReadOnly, 0x02139).unwrap().as_tuple(),
        (247, "MetaMap")
    );
    assert_eq!(snapshot.instance_type_name_of_map(HeapSpace::ReadOnly, 0x02139), None);

    match Snapshot::parse_with_config(&source, LoadConfig::strict()) {
        Err(Error::Malformed { message, .. }) => assert!(message.contains("MetaMap")),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn fingerprint_tracks_content() {
    let builtin = Snapshot::builtin().unwrap();
    let changed = Snapshot::parse(&sample().replace("\"MetaMap\"", "\"MetaMapV2\"")).unwrap();

    assert_ne!(&changed, builtin);
    assert_ne!(changed.fingerprint(), builtin.fingerprint());
    assert_eq!(
        Snapshot::from_builtin().unwrap().fingerprint(),
        builtin.fingerprint()
    );
}
