use authfuzz::authentication::AuthError;
use authfuzz::harness::Finding;
use authfuzz::startup::{CorpusReplay, ReplayError, ReplaySummary};
use claims::{assert_err, assert_ok, assert_ok_eq};

use crate::helpers::{TestCorpus, init_tracing};

#[test]
fn a_clean_corpus_replays_to_a_summary() {
    init_tracing();
    let corpus = TestCorpus::new();
    corpus.add("a_empty", b"");
    corpus.add("b_admin", b"username:admin\npassword:admin\n");
    corpus.add("c_positional", &[0x41, 0x42, 0x43, 0x44]);
    corpus.add("d_guest", b"username:guest\r\npassword:hunter2\r\n");

    let replay = assert_ok!(CorpusReplay::from_dir(corpus.path()));
    assert_eq!(replay.test_cases().len(), 4);

    assert_ok_eq!(
        replay.run_until_complete(),
        ReplaySummary {
            executed: 3,
            skipped: 1,
            granted: 1,
            rejected: 2,
        }
    );
}

#[test]
fn test_cases_are_replayed_in_path_order() {
    init_tracing();
    let corpus = TestCorpus::new();
    let second = corpus.add("b", b"b");
    let first = corpus.add("a", b"a");

    let replay = assert_ok!(CorpusReplay::from_dir(corpus.path()));
    assert_eq!(replay.test_cases(), &[first, second]);
}

#[test]
fn sub_folders_are_ignored() {
    init_tracing();
    let corpus = TestCorpus::new();
    corpus.add("seed", b"abcd");
    std::fs::create_dir(corpus.path().join("nested")).unwrap();

    let replay = assert_ok!(CorpusReplay::from_dir(corpus.path()));
    assert_eq!(replay.test_cases().len(), 1);
}

#[test]
fn the_first_finding_stops_the_replay_and_names_the_file() {
    init_tracing();
    let corpus = TestCorpus::new();
    corpus.add("a_fine", b"abcd");
    let culprit = corpus.add("b_nul", b"username:bob\npassword:a\0b\n");
    corpus.add("c_too_long", &[b'x'; 600]);

    let replay = assert_ok!(CorpusReplay::from_dir(corpus.path()));
    let err = assert_err!(replay.run_until_complete());

    match err {
        ReplayError::Finding { path, finding } => {
            assert_eq!(path, culprit);
            assert!(matches!(
                finding,
                Finding::Authentication(AuthError::InvalidPasswordCharacter)
            ));
        }
        other => panic!("Expected a finding, got {other:?}"),
    }
}

#[test]
fn a_missing_corpus_folder_is_an_error() {
    init_tracing();
    let corpus = TestCorpus::new();
    let missing = corpus.path().join("missing");
    assert_err!(CorpusReplay::from_dir(&missing));
}
