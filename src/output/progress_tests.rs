use super::*;

#[test]
fn quiet_progress_still_counts() {
    let progress = ScanProgress::new(100, true);
    progress.inc();
    progress.inc();
    progress.finish();

    assert_eq!(progress.checked(), 2);
}

#[test]
fn clones_share_the_counter() {
    let progress = ScanProgress::new(10, true);
    let cloned = progress.clone();

    progress.inc();
    cloned.inc();

    assert_eq!(progress.checked(), 2);
    progress.finish();
}

#[test]
fn visible_bar_accepts_updates() {
    let progress = ScanProgress::with_visibility(3, true);
    for _ in 0..3 {
        progress.inc();
    }
    progress.finish();

    assert_eq!(progress.checked(), 3);
}
