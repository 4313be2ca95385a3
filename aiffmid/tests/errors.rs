mod utils;

use aiffmid_common::read::ReadError;
use utils::*;

fn sample() -> Vec<u8> {
    AiffBuilder::new()
        .chunk(b"COMM", &comm_body())
        .chunk(b"ANNO", b"made with a sequencer")
        .chunk(b".mid", &smf_payload())
        .build()
}

#[test]
fn corrupted_outer_tag() {
    for i in 0..4 {
        for flip in [0x01, 0x20, 0xFF] {
            let mut data = sample();
            data[i] ^= flip;

            let err = extract_midi(data.as_slice()).unwrap_err();
            assert!(err.is_format(), "byte {i} ^ {flip:#x}: {err}");
            assert!(matches!(
                err,
                Error::Format(FormatError::MissingOuterTag(_))
            ));

            let mut sink = Vec::new();
            assert!(extract_midi_to(data.as_slice(), &mut sink).is_err());
            assert!(sink.is_empty());
        }
    }
}

#[test]
fn corrupted_format_tag() {
    for i in 8..12 {
        for flip in [0x01, 0x20, 0xFF] {
            let mut data = sample();
            data[i] ^= flip;

            let err = extract_midi(data.as_slice()).unwrap_err();
            assert!(err.is_format(), "byte {i} ^ {flip:#x}: {err}");
            assert!(matches!(
                err,
                Error::Format(FormatError::MissingFormatTag(_))
            ));

            let mut sink = Vec::new();
            assert!(extract_midi_to(data.as_slice(), &mut sink).is_err());
            assert!(sink.is_empty());
        }
    }
}

#[test]
fn wave_instead_of_aiff() {
    let data = AiffBuilder::new()
        .format(b"WAVE")
        .chunk(b".mid", b"MTh")
        .build();

    let err = extract_midi(data.as_slice()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid format: missing format tag, found WAVE"
    );
}

#[test]
fn riff_instead_of_form() {
    let data = AiffBuilder::new()
        .outer(b"RIFF")
        .chunk(b".mid", b"MTh")
        .build();

    let Error::Format(FormatError::MissingOuterTag(id)) = extract_midi(data.as_slice()).unwrap_err()
    else {
        panic!("Expected missing outer tag");
    };
    assert_eq!(id.bytes(), *b"RIFF");
}

#[test]
fn compressed_files_are_rejected() {
    let data = AiffBuilder::new()
        .format(b"AIFC")
        .chunk(b".mid", b"MTh")
        .build();

    assert!(matches!(
        extract_midi(data.as_slice()),
        Err(Error::Format(FormatError::MissingFormatTag(ChunkId::AIFC)))
    ));
}

#[test]
fn truncated_at_every_offset() {
    let data = sample();

    for end in 0..data.len() {
        let truncated = &data[..end];

        let err = extract_midi(truncated).unwrap_err();
        assert!(err.is_truncated(), "truncated at {end}: {err}");

        let mut sink = Vec::new();
        assert!(extract_midi_to(truncated, &mut sink).is_err());
        assert!(sink.is_empty(), "output for truncation at {end}");
    }

    assert_eq!(extract_midi(data.as_slice()).unwrap(), smf_payload());
}

#[test]
fn truncated_at_every_offset_streamed() {
    let data = sample();

    for end in 0..data.len() {
        let err = extract_midi(Streamed::new(&data[..end])).unwrap_err();
        assert!(err.is_truncated(), "truncated at {end}: {err}");
    }
}

#[test]
fn truncated_at_every_offset_seekable() {
    let data = sample();

    for end in 0..data.len() {
        let source = Seekable::new(std::io::Cursor::new(&data[..end])).unwrap();

        let err = extract_midi(source).unwrap_err();
        assert!(err.is_truncated(), "truncated at {end}: {err}");

        let source = Seekable::new(std::io::Cursor::new(&data[..end])).unwrap();
        let mut sink = Vec::new();
        assert!(extract_midi_to(source, &mut sink).is_err());
        assert!(sink.is_empty(), "output for truncation at {end}");
    }
}

#[test]
fn declared_length_beyond_end() {
    let data = AiffBuilder::new()
        .chunk(b"COMM", &comm_body())
        .chunk_with_length(b".mid", 10, b"MThd")
        .build();

    let err = extract_midi(data.as_slice()).unwrap_err();

    assert!(matches!(
        err,
        Error::Truncated(ReadError::UnexpectedEof {
            requested: 10,
            available: 4
        })
    ));
}

#[test]
fn skipped_length_beyond_end() {
    let data = AiffBuilder::new()
        .chunk_with_length(b"SSND", 1000, &[0; 10])
        .build();

    for result in [
        extract_midi(data.as_slice()),
        extract_midi(std::io::Cursor::new(&data)),
        extract_midi(Streamed::new(data.as_slice())),
        extract_midi(Seekable::new(std::io::Cursor::new(&data)).unwrap()),
    ] {
        assert!(matches!(
            result,
            Err(Error::Truncated(ReadError::UnexpectedEof {
                requested: 1000,
                available: 10
            }))
        ));
    }
}

#[test]
fn missing_target_is_end_of_stream() {
    let data = AiffBuilder::new()
        .chunk(b"COMM", &comm_body())
        .chunk(b"SSND", &[0; 16])
        .build();

    let err = extract_midi(data.as_slice()).unwrap_err();

    assert!(matches!(
        err,
        Error::Truncated(ReadError::UnexpectedEof {
            requested: 4,
            available: 0
        })
    ));
}

#[test]
fn huge_declared_length_does_not_allocate() {
    let data = AiffBuilder::new()
        .chunk_with_length(b".mid", u32::MAX, b"MThd")
        .build();

    let err = extract_midi(data.as_slice()).unwrap_err();
    assert!(err.is_truncated());
}
