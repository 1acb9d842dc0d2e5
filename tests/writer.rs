use std::fs;

use smf_fixtures::prelude::*;

#[test]
fn writes_every_preset() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("tests").join("test_data");

    let written = write_fixtures(&out, &Fixture::ALL, Validation::Strict).unwrap();

    assert_eq!(written.len(), 3);
    for (fixture, path) in Fixture::ALL.iter().zip(&written) {
        assert_eq!(path, &out.join(fixture.file_name()));
        assert_eq!(fs::read(path).unwrap(), fixture.encode().unwrap());
    }
    // no temporary files are left behind
    assert_eq!(fs::read_dir(&out).unwrap().count(), 3);
}

#[test]
fn overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("simple_melody.mid");
    fs::write(&path, b"stale").unwrap();

    let bytes = Fixture::SimpleMelody.encode().unwrap();
    write_fixture(&path, &bytes).unwrap();

    assert_eq!(fs::read(&path).unwrap(), bytes);
}

#[test]
fn io_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    // a regular file where the output directory should be
    let blocker = dir.path().join("blocked");
    fs::write(&blocker, b"").unwrap();

    let err = write_fixture(blocker.join("out.mid"), &[0x00]).unwrap_err();
    assert!(matches!(err, WriteError::Io(_)));
}

#[test]
fn encode_failure_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");

    let bad = SmfBuilder::new(Format::SingleMultiChannel, 480)
        .track([MidiEvent::note_on(0, 0, 60, 100)])
        .strict()
        .build();
    let files = [
        ("simple_melody.mid", Fixture::SimpleMelody.encode()),
        ("unterminated.mid", bad),
    ];

    let err = write_all(&out, files).unwrap_err();
    assert!(matches!(
        err,
        WriteError::Encode(EncodeError::Encoding(EncodingError::MissingEndOfTrack {
            track: 0
        }))
    ));
    assert!(!out.exists());
}
