// tests/integration_tests/report_test.rs
use anyhow::Result;

use potodo::core::aggregate::build_reports;
use potodo::core::discover::scan_tree;
use potodo::core::render::{render_directory, render_file_line};
use potodo::core::reservation::{Issue, IssueUser, ReservationMap, reservation_map};
use potodo::models::ThresholdRange;

use crate::common::{create_po_file, setup_test_directory};

#[test]
fn test_default_report_hides_complete_files() -> Result<()> {
    let dir = setup_test_directory()?;
    let tree = scan_tree(dir.path())?;
    let range = ThresholdRange::new(None, None)?;
    let reports = build_reports(&tree, &range, &ReservationMap::new(), false);

    assert_eq!(reports.len(), 1);
    let report = &reports[0];
    assert_eq!(report.name, "folder");
    assert_eq!(report.mean_percent(), 60.0);

    let shown: Vec<&str> = report.visible().map(|e| e.filename.as_str()).collect();
    assert_eq!(shown, vec!["b.po", "c.po"]);

    let block = render_directory(report, false).expect("folder should be reported");
    assert!(block.starts_with("\n\n# folder/ (60.00% done)\n\n"), "got: {block}");
    let b_line = block.lines().find(|l| l.contains("b.po")).expect("b.po line");
    assert!(b_line.ends_with(", 2 fuzzy"), "got: {b_line}");
    Ok(())
}

#[test]
fn test_fuzzy_only_excludes_files_from_the_mean() -> Result<()> {
    let dir = tempfile::TempDir::new()?;
    // a.po: 50% done without fuzzies, b.po: 40% done with one fuzzy
    create_po_file(dir.path(), "folder/a.po", 2, 0, 2)?;
    create_po_file(dir.path(), "folder/b.po", 2, 1, 2)?;

    let tree = scan_tree(dir.path())?;
    let range = ThresholdRange::new(None, None)?;
    let reports = build_reports(&tree, &range, &ReservationMap::new(), true);

    assert_eq!(reports.len(), 1);
    let report = &reports[0];
    assert_eq!(report.outcomes.len(), 1);
    assert_eq!(report.mean_percent(), 40.0);
    assert_eq!(report.visible().count(), 1);
    Ok(())
}

#[test]
fn test_counts_mode_line() -> Result<()> {
    let dir = tempfile::TempDir::new()?;
    create_po_file(dir.path(), "folder/a.po", 2, 3, 5)?;

    let tree = scan_tree(dir.path())?;
    let range = ThresholdRange::new(None, None)?;
    let reports = build_reports(&tree, &range, &ReservationMap::new(), false);
    let entry = reports[0].visible().next().expect("a.po should be shown");

    let line = render_file_line(entry, true);
    assert!(line.contains("  8 to do, including 3 fuzzies."), "got: {line}");
    Ok(())
}

#[test]
fn test_reserved_files_get_a_suffix() -> Result<()> {
    let dir = setup_test_directory()?;
    let tree = scan_tree(dir.path())?;
    let range = ThresholdRange::new(None, None)?;

    // The map comes from issue titles naming directory/filename, not from
    // on-disk paths; the scanned file must still match it.
    let issues = vec![Issue {
        title: String::from("Traduction de Folder/b.po"),
        user: IssueUser { login: String::from("alice") },
    }];
    let reservations = reservation_map(&issues);

    let reports = build_reports(&tree, &range, &reservations, false);
    let block = render_directory(&reports[0], false).expect("folder should be reported");
    let b_line = block.lines().find(|l| l.contains("b.po")).expect("b.po line");
    assert!(b_line.ends_with(", reserved by alice"), "got: {b_line}");
    let c_line = block.lines().find(|l| l.contains("c.po")).expect("c.po line");
    assert!(!c_line.contains("reserved"), "got: {c_line}");
    Ok(())
}

#[test]
fn test_runs_are_deterministic() -> Result<()> {
    let dir = setup_test_directory()?;
    let tree = scan_tree(dir.path())?;
    let range = ThresholdRange::new(None, None)?;

    let first = build_reports(&tree, &range, &ReservationMap::new(), false);
    let second = build_reports(&tree, &range, &ReservationMap::new(), false);
    assert_eq!(
        render_directory(&first[0], false),
        render_directory(&second[0], false)
    );
    Ok(())
}
