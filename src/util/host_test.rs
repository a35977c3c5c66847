use super::*;

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_round_trips_values() {
    let store = MemoryStore::new();
    store.set("theme", "dark").expect("write");
    assert_eq!(store.get("theme").expect("read"), Some("dark".to_owned()));

    store.set("theme", "light").expect("overwrite");
    assert_eq!(store.peek("theme"), Some("light".to_owned()));

    store.remove("theme").expect("remove");
    assert_eq!(store.get("theme").expect("read"), None);
}

#[test]
fn read_only_store_rejects_writes_but_still_reads() {
    let store = MemoryStore::read_only();
    assert!(store.set("theme", "dark").is_err());
    assert!(store.remove("theme").is_err());
    assert_eq!(store.get("theme").expect("read"), None);
}

#[test]
fn store_reference_forwards_to_owner() {
    let store = MemoryStore::new();
    let by_ref = &store;
    by_ref.set("k", "v").expect("write through reference");
    assert_eq!(store.peek("k"), Some("v".to_owned()));
}

// =============================================================
// Mail launchers
// =============================================================

#[test]
fn recording_mailer_keeps_launch_order() {
    let mailer = RecordingMailer::new();
    mailer.launch("mailto:a@b.com").expect("launch");
    mailer.launch("mailto:c@d.com").expect("launch");
    assert_eq!(mailer.launched(), vec!["mailto:a@b.com".to_owned(), "mailto:c@d.com".to_owned()]);
}

#[test]
fn failing_mailer_records_nothing() {
    let mailer = RecordingMailer::failing();
    assert!(mailer.launch("mailto:a@b.com").is_err());
    assert!(mailer.launched().is_empty());
}

// =============================================================
// Browser stubs outside csr
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn browser_capabilities_report_unavailable_natively() {
    assert_eq!(BrowserStorage.get("theme"), Err(HostError::unavailable("localStorage")));
    assert!(BrowserStorage.set("theme", "dark").is_err());
    assert_eq!(BrowserMailer.launch("mailto:x@y.z"), Err(HostError::unavailable("location")));
}

#[test]
fn host_error_messages_name_the_capability() {
    assert_eq!(HostError::unavailable("clipboard").to_string(), "clipboard is unavailable");
    let failed = HostError::Failed { capability: "localStorage", message: "quota".to_owned() };
    assert_eq!(failed.to_string(), "localStorage failed: quota");
}
