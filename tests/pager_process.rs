use rtab::output::{OutputOption, PrintOptions};
use rtab::pager::{suggest_pager, Pager, STDOUT_PAGER};
use rtab::OutputFlags;
use std::io::Write;

#[test]
fn test_stdout_sentinel_returns_direct_stream() {
    let flags = OutputFlags {
        pager: Some(STDOUT_PAGER.to_string()),
        ..OutputFlags::default()
    };

    let mut pager = Pager::new(&flags, &PrintOptions::default(), "less");
    assert!(!pager.is_paged());
    assert!(pager.close().is_ok());
}

#[test]
fn test_no_pager_flag_returns_direct_stream() {
    let flags = OutputFlags {
        no_pager: true,
        ..OutputFlags::default()
    };

    let pager = Pager::new(&flags, &PrintOptions::default(), "less");
    assert!(!pager.is_paged());
}

#[test]
fn test_nonexistent_pager_falls_back_without_error() {
    let flags = OutputFlags {
        pager: Some("no-such-pager-anywhere-on-path".to_string()),
        ..OutputFlags::default()
    };

    let mut pager = Pager::new(&flags, &PrintOptions::default(), "less");
    assert!(!pager.is_paged());
    pager.write_all(b"still fine\n").ok();
    assert!(pager.close().is_ok());
}

#[test]
fn test_pager_suggestion_tracks_output_format() {
    assert_eq!(suggest_pager(Some(OutputOption::Table)), "less");
    assert_eq!(suggest_pager(Some(OutputOption::Json)), "more");
    assert_eq!(suggest_pager(None), STDOUT_PAGER);
}

/// Full subprocess round-trip: a pager script that drains its stdin into
/// a file proves the pipe wiring and the close-then-wait teardown.
#[cfg(unix)]
#[test]
fn test_spawned_pager_receives_all_output() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let sink_path = dir.path().join("drained.txt");
    let script_path = dir.path().join("fake-pager");

    fs::write(
        &script_path,
        format!("#!/bin/sh\ncat > '{}'\n", sink_path.display()),
    )
    .unwrap();
    fs::set_permissions(&script_path, fs::Permissions::from_mode(0o755)).unwrap();

    let flags = OutputFlags {
        pager: Some(script_path.display().to_string()),
        ..OutputFlags::default()
    };

    let mut pager = Pager::new(&flags, &PrintOptions::default(), "less");
    assert!(pager.is_paged());

    pager.write_all(b"Name  Status\nfoo1  ok\n").unwrap();
    pager.close().unwrap();

    // close() blocks until the child exits, so the file is complete
    let drained = fs::read_to_string(&sink_path).unwrap();
    assert_eq!(drained, "Name  Status\nfoo1  ok\n");
}

#[cfg(unix)]
#[test]
fn test_teardown_runs_once_even_when_called_twice() {
    let flags = OutputFlags {
        pager: Some("cat".to_string()),
        ..OutputFlags::default()
    };

    let mut pager = Pager::new(&flags, &PrintOptions::default(), "less");
    assert!(pager.is_paged());

    pager.write_all(b"one line\n").unwrap();
    assert!(pager.close().is_ok());
    assert!(pager.close().is_ok());
    assert!(!pager.is_paged());
}

#[cfg(unix)]
#[test]
fn test_abnormally_exiting_pager_surfaces_an_error() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let script_path = dir.path().join("broken-pager");

    fs::write(&script_path, "#!/bin/sh\ncat > /dev/null\nexit 3\n").unwrap();
    fs::set_permissions(&script_path, fs::Permissions::from_mode(0o755)).unwrap();

    let flags = OutputFlags {
        pager: Some(script_path.display().to_string()),
        ..OutputFlags::default()
    };

    let mut pager = Pager::new(&flags, &PrintOptions::default(), "less");
    assert!(pager.is_paged());

    pager.write_all(b"data\n").unwrap();
    assert!(pager.close().is_err());
}
