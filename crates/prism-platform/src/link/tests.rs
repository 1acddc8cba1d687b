use super::*;
use prism_common::ErrorCode;

struct FailingLinker(io::ErrorKind);

impl Linker for FailingLinker {
    fn link(&self, _target: &Path, _link: &Path) -> io::Result<()> {
        Err(io::Error::new(self.0, "injected link failure"))
    }
}

fn theme_dirs(root: &Path) -> (PathBuf, PathBuf) {
    let a = root.join("themes/alpha");
    let b = root.join("themes/beta");
    fs::create_dir_all(&a).unwrap();
    fs::create_dir_all(&b).unwrap();
    (a, b)
}

#[test]
fn retarget_creates_missing_link() {
    let tmp = tempfile::tempdir().unwrap();
    let (alpha, _) = theme_dirs(tmp.path());
    let link = tmp.path().join("current");

    retarget(&SystemLinker, &link, &alpha).unwrap();
    assert_eq!(read_link_target(&link), Some(alpha));
}

#[test]
fn retarget_switches_existing_link() {
    let tmp = tempfile::tempdir().unwrap();
    let (alpha, beta) = theme_dirs(tmp.path());
    let link = tmp.path().join("current");

    retarget(&SystemLinker, &link, &alpha).unwrap();
    retarget(&SystemLinker, &link, &beta).unwrap();

    assert_eq!(read_link_target(&link), Some(beta));
    assert!(alpha.is_dir(), "old target must survive retargeting");
    assert!(!temp_link_path(&link).exists());
}

#[test]
fn retarget_replaces_plain_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let (alpha, _) = theme_dirs(tmp.path());
    let link = tmp.path().join("current");
    fs::create_dir_all(link.join("nested")).unwrap();
    fs::write(link.join("nested/stray.conf"), "x").unwrap();

    retarget(&SystemLinker, &link, &alpha).unwrap();
    assert_eq!(read_link_target(&link), Some(alpha));
}

#[test]
fn failed_link_leaves_current_untouched() {
    let tmp = tempfile::tempdir().unwrap();
    let (alpha, beta) = theme_dirs(tmp.path());
    let link = tmp.path().join("current");
    retarget(&SystemLinker, &link, &alpha).unwrap();

    let err = retarget(
        &FailingLinker(io::ErrorKind::PermissionDenied),
        &link,
        &beta,
    )
    .unwrap_err();

    assert_eq!(err.code(), ErrorCode::PermissionError);
    assert_eq!(err.path(), Some(link.as_path()));
    assert_eq!(read_link_target(&link), Some(alpha));
}

#[test]
fn failed_link_classifies_storage_full() {
    let tmp = tempfile::tempdir().unwrap();
    let (alpha, _) = theme_dirs(tmp.path());
    let link = tmp.path().join("current");

    let err = retarget(&FailingLinker(io::ErrorKind::StorageFull), &link, &alpha).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ResourceExhausted);
    assert!(fs::symlink_metadata(&link).is_err());
}

#[test]
fn stale_temp_link_is_cleared() {
    let tmp = tempfile::tempdir().unwrap();
    let (alpha, beta) = theme_dirs(tmp.path());
    let link = tmp.path().join("current");
    SystemLinker.link(&alpha, &temp_link_path(&link)).unwrap();

    retarget(&SystemLinker, &link, &beta).unwrap();
    assert_eq!(read_link_target(&link), Some(beta));
}

#[test]
fn remove_link_tolerates_absence() {
    let tmp = tempfile::tempdir().unwrap();
    let (alpha, _) = theme_dirs(tmp.path());
    let link = tmp.path().join("current");

    remove_link(&link).unwrap();
    retarget(&SystemLinker, &link, &alpha).unwrap();
    remove_link(&link).unwrap();

    assert_eq!(read_link_target(&link), None);
    assert!(alpha.is_dir());
}

#[test]
fn cross_device_link_is_a_conflict() {
    let tmp = tempfile::tempdir().unwrap();
    let (alpha, beta) = theme_dirs(tmp.path());
    let link = tmp.path().join("current");
    retarget(&SystemLinker, &link, &alpha).unwrap();

    let err = retarget(&FailingLinker(io::ErrorKind::CrossesDevices), &link, &beta).unwrap_err();

    assert_eq!(err.code(), ErrorCode::Conflict);
    assert_eq!(read_link_target(&link), Some(alpha));
}

#[cfg(unix)]
#[test]
fn undeletable_directory_at_link_is_a_conflict() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = tempfile::tempdir().unwrap();
    let (alpha, _) = theme_dirs(tmp.path());
    let link = tmp.path().join("current");
    let locked = link.join("locked");
    fs::create_dir_all(&locked).unwrap();
    fs::write(locked.join("stray.conf"), "x").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

    // Permission bits do not bind a privileged user.
    if fs::write(locked.join("write-check"), "x").is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let err = retarget(&SystemLinker, &link, &alpha).unwrap_err();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(err.code(), ErrorCode::Conflict);
    assert_eq!(err.path(), Some(link.as_path()));
    assert!(link.is_dir());
    assert!(!temp_link_path(&link).exists());
}
