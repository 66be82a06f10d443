//! Save/load behavior of the companion store against a temporary directory.

use std::fs;

use buddy_core::{Companion, LifecycleState, ValidationError};
use buddy_store::{FILE_NAME, Store, StoreError};
use chrono::{DateTime, Duration, Utc};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use tempfile::TempDir;

struct Harness {
    _tmp: TempDir,
    store: Store,
}

#[fixture]
fn harness() -> Harness {
    let tmp = TempDir::new().expect("tmp dir");
    let store = Store::new(tmp.path().join(".ccbuddy"));
    Harness { _tmp: tmp, store }
}

fn assert_close(a: DateTime<Utc>, b: DateTime<Utc>) {
    assert!((a - b).abs() <= Duration::seconds(1), "{a} vs {b}");
}

#[rstest]
fn round_trip_preserves_companion(harness: Harness) {
    let now = Utc::now();
    let original = Companion::from_parts(
        LifecycleState::Hatched,
        75,
        now - Duration::hours(24),
        now - Duration::hours(2),
    );

    harness.store.save(&original).expect("save");
    let loaded = harness.store.load().expect("load");

    assert_eq!(loaded.state(), original.state());
    assert_eq!(loaded.health(), original.health());
    assert_close(loaded.created_at(), original.created_at());
    assert_close(loaded.last_fed_at(), original.last_fed_at());
}

#[rstest]
fn save_creates_missing_directory(harness: Harness) {
    assert!(!harness.store.dir().exists());
    harness.store.save(&Companion::new()).expect("save");
    assert!(harness.store.dir().is_dir());
    assert!(harness.store.path().ends_with(FILE_NAME));
}

#[rstest]
fn save_replaces_previous_record(harness: Harness) {
    let mut companion = Companion::new();
    harness.store.save(&companion).expect("first save");
    companion.hatch().expect("hatch");
    harness.store.save(&companion).expect("second save");

    let loaded = harness.store.load().expect("load");
    assert_eq!(loaded.state(), &LifecycleState::Hatched);
}

#[rstest]
fn save_leaves_no_temporary_files(harness: Harness) {
    harness.store.save(&Companion::new()).expect("save");
    harness.store.save(&Companion::new()).expect("save again");
    let names: Vec<String> = fs::read_dir(harness.store.dir())
        .expect("read dir")
        .map(|entry| entry.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, [FILE_NAME]);
}

#[rstest]
fn saved_record_is_pretty_json_with_wire_tokens(harness: Harness) {
    harness.store.save(&Companion::new()).expect("save");
    let text = fs::read_to_string(harness.store.path()).expect("read");
    assert!(text.contains("\n  \"state\": \"egg\""), "{text}");
    assert!(text.contains("\"health\": 100"));
    assert!(text.contains("\"created_at\""));
    assert!(text.contains("\"last_fed_at\""));
}

#[cfg(unix)]
#[rstest]
fn saved_record_is_owner_only(harness: Harness) {
    use std::os::unix::fs::PermissionsExt;

    harness.store.save(&Companion::new()).expect("save");
    let mode = fs::metadata(harness.store.path())
        .expect("metadata")
        .permissions()
        .mode()
        & 0o777;
    assert_eq!(mode, 0o600, "record should be 0600");
}

#[rstest]
fn save_rejects_invalid_companion_and_keeps_prior_record(harness: Harness) {
    let good = Companion::new();
    harness.store.save(&good).expect("save");

    let now = Utc::now();
    let bad = Companion::from_parts(LifecycleState::Egg, 101, now, now);
    let err = harness.store.save(&bad).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::HealthOutOfRange(101))
    ));

    let loaded = harness.store.load().expect("prior record survives");
    assert_eq!(loaded.health(), 100);
}

#[rstest]
fn save_none_is_nil_input(harness: Harness) {
    let current: Option<Companion> = None;
    let err = harness.store.save(current.as_ref()).unwrap_err();
    assert!(matches!(err, StoreError::NilInput));
    assert!(!harness.store.exists());
}

#[rstest]
fn load_without_record_is_not_found(harness: Harness) {
    let err = harness.store.load().unwrap_err();
    assert!(err.is_not_found(), "got {err:?}");
}

#[rstest]
#[case::garbage("not json at all")]
#[case::empty("")]
#[case::wrong_shape("[1, 2, 3]")]
#[case::health_is_text(r#"{"state":"egg","health":"full","created_at":"2025-06-01T10:00:00Z","last_fed_at":"2025-06-01T10:00:00Z"}"#)]
#[case::truncated(r#"{"state":"egg","health":10"#)]
#[case::missing_health(r#"{"state":"egg","created_at":"2025-06-01T10:00:00Z","last_fed_at":"2025-06-01T10:00:00Z"}"#)]
fn load_unparseable_record_is_corrupt(harness: Harness, #[case] content: &str) {
    fs::create_dir_all(harness.store.dir()).expect("mkdir");
    fs::write(harness.store.path(), content).expect("write");

    let err = harness.store.load().unwrap_err();
    assert!(matches!(err, StoreError::CorruptRecord { .. }), "got {err:?}");
}

#[rstest]
#[case::unknown_state(
    r#"{"state":"dragon","health":50,"created_at":"2025-06-01T10:00:00Z","last_fed_at":"2025-06-01T10:00:00Z"}"#,
    ValidationError::UnknownState("dragon".into())
)]
#[case::negative_health(
    r#"{"state":"egg","health":-1,"created_at":"2025-06-01T10:00:00Z","last_fed_at":"2025-06-01T10:00:00Z"}"#,
    ValidationError::HealthOutOfRange(-1)
)]
#[case::zero_created_at(
    r#"{"state":"egg","health":50,"created_at":"0001-01-01T00:00:00Z","last_fed_at":"2025-06-01T10:00:00Z"}"#,
    ValidationError::MissingCreatedAt
)]
#[case::missing_last_fed_at(
    r#"{"state":"hatched","health":50,"created_at":"2025-06-01T10:00:00Z"}"#,
    ValidationError::MissingLastFedAt
)]
fn load_invalid_record_propagates_validation_error(
    harness: Harness,
    #[case] content: &str,
    #[case] expected: ValidationError,
) {
    fs::create_dir_all(harness.store.dir()).expect("mkdir");
    fs::write(harness.store.path(), content).expect("write");

    match harness.store.load() {
        Err(StoreError::Validation(actual)) => assert_eq!(actual, expected),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[rstest]
fn exists_follows_save_and_remove(harness: Harness) {
    assert!(!harness.store.exists());
    harness.store.save(&Companion::new()).expect("save");
    assert!(harness.store.exists());

    harness.store.remove().expect("remove");
    assert!(!harness.store.exists());
    harness.store.remove().expect("second remove is a no-op");
    assert!(harness.store.load().unwrap_err().is_not_found());
}

#[rstest]
fn exists_is_false_for_a_directory_in_place_of_the_record(harness: Harness) {
    fs::create_dir_all(harness.store.path()).expect("mkdir");
    assert!(!harness.store.exists());
}

#[rstest]
fn save_into_directory_blocked_by_a_file_is_io_error(harness: Harness) {
    let blocker = harness.store.dir().to_path_buf();
    fs::write(&blocker, "not a directory").expect("write blocker");

    let store = Store::new(blocker.join("sub"));
    let err = store.save(&Companion::new()).unwrap_err();
    assert!(matches!(err, StoreError::Io(_)), "got {err:?}");
    assert_eq!(
        fs::read_to_string(&blocker).expect("blocker untouched"),
        "not a directory"
    );
}

#[rstest]
fn load_of_a_directory_in_place_of_the_record_is_io_error(harness: Harness) {
    fs::create_dir_all(harness.store.path()).expect("mkdir");

    let err = harness.store.load().unwrap_err();
    assert!(matches!(err, StoreError::Io(_)), "got {err:?}");
}

#[rstest]
fn failed_save_keeps_prior_record_and_leaves_no_temporary_files(harness: Harness) {
    let mut companion = Companion::new();
    companion.hatch().expect("hatch");
    harness.store.save(&companion).expect("save");
    let before = fs::read_to_string(harness.store.path()).expect("read");

    let now = Utc::now();
    let bad = Companion::from_parts(LifecycleState::Egg, -5, now, now);
    assert!(harness.store.save(&bad).is_err());

    assert_eq!(fs::read_to_string(harness.store.path()).expect("read"), before);
    let entries = fs::read_dir(harness.store.dir()).expect("read dir").count();
    assert_eq!(entries, 1);
}
