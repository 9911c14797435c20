//! Upload guard behavior at the documented 1,000,000-byte ceiling.

use rolodex_directory::upload::{DEFAULT_MAX_UPLOAD_BYTES, UploadError, UploadGuard};

#[tokio::test]
async fn one_byte_over_the_ceiling_is_rejected_with_no_file_left() {
    let dir = tempfile::tempdir().unwrap();
    let guard = UploadGuard::new(dir.path());

    let data = vec![0_u8; 1_000_001];
    let err = guard
        .store("too-big.bin", data.as_slice())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        UploadError::TooLarge {
            limit: DEFAULT_MAX_UPLOAD_BYTES
        }
    ));
    assert!(!dir.path().join("too-big.bin").exists());
}

#[tokio::test]
async fn stream_under_the_ceiling_is_stored_byte_for_byte() {
    let dir = tempfile::tempdir().unwrap();
    let guard = UploadGuard::new(dir.path());

    let data = vec![42_u8; 999_999];
    let path = guard.store("fits.bin", data.as_slice()).await.unwrap();

    let stored = tokio::fs::read(&path).await.unwrap();
    assert_eq!(stored.len(), 999_999);
    assert_eq!(stored, data);
}

#[tokio::test]
async fn custom_ceiling_is_respected() {
    let dir = tempfile::tempdir().unwrap();
    let guard = UploadGuard::with_ceiling(dir.path(), 10);
    assert_eq!(guard.ceiling(), 10);

    let err = guard.store("over.bin", &[0_u8; 11][..]).await.unwrap_err();
    assert!(matches!(err, UploadError::TooLarge { limit: 10 }));

    let path = guard.store("at.bin", &[0_u8; 10][..]).await.unwrap();
    assert_eq!(tokio::fs::metadata(&path).await.unwrap().len(), 10);
}

#[tokio::test]
async fn empty_stream_stores_an_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let guard = UploadGuard::new(dir.path());

    let path = guard.store("empty.bin", &[][..]).await.unwrap();
    assert_eq!(tokio::fs::metadata(&path).await.unwrap().len(), 0);
}
