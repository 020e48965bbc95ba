use std::fs;
use std::path::PathBuf;

use collider::hashes::{ChainingState, Digest, HashFunction, ScheduleVariant};
use collider::search::{search_file, SearchOutcome};

const WORD_LIST: &str = "123456\npassword\niloveyou\nsunshine\npassword123\nletmein\n";

/// Writes the word list to a file that is removed again when dropped.
struct WordListFile(PathBuf);

impl WordListFile {
    fn create(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!("collider-{}-{}.txt", name, std::process::id()));
        fs::write(&path, WORD_LIST).unwrap();
        WordListFile(path)
    }
}

impl Drop for WordListFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

#[test]
fn test_finds_password_in_word_list() {
    let word_list = WordListFile::create("found");
    let target = ChainingState::digest_message(&ScheduleVariant::Sha1, b"password123");
    assert_eq!(target.to_hex(), "CBFDAC6008F9CAB4083784CBD1874F76618D2A97");

    let mut progress = Vec::new();
    let outcome = search_file(&word_list.0, ScheduleVariant::Sha1, &target, |comparison| {
        progress.push(comparison.line_number)
    })
    .unwrap();

    match outcome {
        SearchOutcome::Found(found) => {
            assert_eq!(found.line_number, 5);
            assert_eq!(found.line, b"password123");
            assert_eq!(found.digest.as_bytes()[..], hex::decode("cbfdac6008f9cab4083784cbd1874f76618d2a97").unwrap()[..]);
        }
        other => panic!("expected a match, got {:?}", other),
    }
    assert_eq!(progress, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_sha0_word_list() {
    let word_list = WordListFile::create("sha0");
    let target = ChainingState::digest_message(&ScheduleVariant::Sha0, b"password123");
    assert_eq!(target.to_hex(), "40E43BFB5F73A156BFC863708BA7C66CE9E69B9D");

    let outcome = search_file(&word_list.0, ScheduleVariant::Sha0, &target, |_| {}).unwrap();
    assert!(matches!(outcome, SearchOutcome::Found(ref found) if found.line_number == 5));
}

#[test]
fn test_absent_password_exhausts_word_list() {
    let word_list = WordListFile::create("absent");
    let target: Digest = ChainingState::digest_message(&ScheduleVariant::Sha1, b"not-in-the-list");

    let mut last_line = 0;
    let outcome = search_file(&word_list.0, ScheduleVariant::Sha1, &target, |comparison| {
        assert!(!comparison.digest.ct_eq(&target));
        last_line = comparison.line_number;
    })
    .unwrap();

    assert_eq!(outcome, SearchOutcome::Exhausted { lines: 6 });
    assert_eq!(last_line, 6);
}
