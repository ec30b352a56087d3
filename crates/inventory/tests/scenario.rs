use stockledger_core::DomainError;
use stockledger_inventory::{ActivityLog, Ledger, TIMESTAMP_FORMAT};

#[test]
fn apple_banana_scenario() {
    let mut ledger = Ledger::new();
    let mut log = ActivityLog::new();

    ledger.add("apple", 10.0, &mut log).unwrap();
    ledger.add("banana", 5.0, &mut log).unwrap();
    assert_eq!(ledger.quantity_of("apple"), 10.0);

    assert!(ledger.remove("apple", 3.0));
    assert_eq!(ledger.quantity_of("apple"), 7.0);

    assert!(!ledger.remove("orange", 1.0));

    assert_eq!(ledger.low_stock(8.0), ["apple", "banana"]);
    assert_eq!(log.len(), 2);
    assert!(log.entries()[0].ends_with(": Added 10 of apple"));
    assert!(log.entries()[1].ends_with(": Added 5 of banana"));
}

#[test]
fn log_timestamps_use_documented_format() {
    let mut ledger = Ledger::new();
    let mut log = ActivityLog::new();

    ledger.add("apple", 1.0, &mut log).unwrap();

    let (stamp, rest) = log.entries()[0].split_once(": ").unwrap();
    assert!(chrono::NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).is_ok());
    assert_eq!(rest, "Added 1 of apple");
}

#[test]
fn rejected_addition_leaves_everything_untouched() {
    let mut ledger = Ledger::new();
    let mut log = ActivityLog::new();
    ledger.add("apple", 10.0, &mut log).unwrap();

    let err = ledger.add("apple", f64::NAN, &mut log).unwrap_err();

    assert_eq!(err, DomainError::invalid_argument("Quantity must be a number"));
    assert_eq!(ledger.quantity_of("apple"), 10.0);
    assert_eq!(log.len(), 1);
}

#[test]
fn persisted_ledger_survives_a_fresh_process() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");

    let mut ledger = Ledger::new();
    let mut log = ActivityLog::new();
    ledger.add("apple", 10.0, &mut log).unwrap();
    ledger.add("banana", 5.0, &mut log).unwrap();
    ledger.remove("apple", 3.0);
    assert!(ledger.save(&path));

    let mut reopened = Ledger::new();
    assert!(reopened.load(&path));
    assert_eq!(reopened, ledger);
    assert_eq!(reopened.format_report(), "apple -> 7\nbanana -> 5");
}
