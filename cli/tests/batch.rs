use std::fs;
use std::path::Path;

use image::RgbImage;

use gallery_prep::driver;
use gallery_prep_core::config::{BatchConfig, DerivativeSpec};

fn small_config() -> BatchConfig {
    BatchConfig {
        thumbnail: DerivativeSpec {
            target_width: 40,
            quality: 75.0,
        },
        fullsize: DerivativeSpec {
            target_width: 80,
            quality: 85.0,
        },
    }
}

fn save_image(path: &Path, width: u32, height: u32) {
    RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x * 3 % 256) as u8, (y * 5 % 256) as u8, 64])
    })
    .save(path)
    .unwrap();
}

fn webp_dimensions(path: &Path) -> (u32, u32) {
    let data = fs::read(path).unwrap();
    let decoded = webp::Decoder::new(&data).decode().unwrap();
    (decoded.width(), decoded.height())
}

#[test]
fn batch_produces_both_variants_per_input() {
    let dir = tempfile::tempdir().unwrap();
    save_image(&dir.path().join("photo1.png"), 160, 120);
    save_image(&dir.path().join("photo2.jpg"), 100, 50);

    let report = driver::run(dir.path(), &small_config()).unwrap();
    assert_eq!(report.success_count(), 2);
    assert_eq!(report.error_count(), 0);

    assert_eq!(webp_dimensions(&dir.path().join("thumbnails/photo1.webp")), (40, 30));
    assert_eq!(webp_dimensions(&dir.path().join("compressed/photo1.webp")), (80, 60));
    assert_eq!(webp_dimensions(&dir.path().join("thumbnails/photo2.webp")), (40, 20));
    assert_eq!(webp_dimensions(&dir.path().join("compressed/photo2.webp")), (80, 40));
}

#[test]
fn corrupt_and_empty_inputs_do_not_abort_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    save_image(&dir.path().join("good.png"), 120, 60);
    fs::write(dir.path().join("broken.jpg"), b"not an image at all").unwrap();
    fs::write(dir.path().join("empty.bmp"), b"").unwrap();

    let report = driver::run(dir.path(), &small_config()).unwrap();
    assert_eq!(report.success_count(), 1);
    assert_eq!(report.error_count(), 2);

    // The valid sibling is still fully processed.
    assert!(dir.path().join("thumbnails/good.webp").exists());
    assert!(dir.path().join("compressed/good.webp").exists());
    assert!(!dir.path().join("thumbnails/broken.webp").exists());
    assert!(!dir.path().join("compressed/empty.webp").exists());
}

#[test]
fn unsupported_files_are_skipped_without_output() {
    let dir = tempfile::tempdir().unwrap();
    save_image(&dir.path().join("photo.png"), 90, 90);
    fs::write(dir.path().join("notes.txt"), b"hello").unwrap();
    fs::write(dir.path().join("anim.gif"), b"GIF89a").unwrap();

    let report = driver::run(dir.path(), &small_config()).unwrap();
    assert_eq!(report.success_count(), 1);
    assert_eq!(report.skipped, 2);

    assert!(!dir.path().join("thumbnails/notes.webp").exists());
    assert!(!dir.path().join("thumbnails/anim.webp").exists());
}

#[test]
fn empty_directory_is_a_successful_no_op() {
    let dir = tempfile::tempdir().unwrap();

    let report = driver::run(dir.path(), &small_config()).unwrap();
    assert_eq!(report.success_count(), 0);
    assert_eq!(report.error_count(), 0);

    // Output directories are still created up front.
    assert!(dir.path().join("thumbnails").is_dir());
    assert!(dir.path().join("compressed").is_dir());
}

#[test]
fn rerun_overwrites_existing_outputs() {
    let dir = tempfile::tempdir().unwrap();
    save_image(&dir.path().join("photo.png"), 120, 120);

    let first = driver::run(dir.path(), &small_config()).unwrap();
    assert_eq!(first.success_count(), 1);

    let second = driver::run(dir.path(), &small_config()).unwrap();
    assert_eq!(second.success_count(), 1);
    assert_eq!(second.error_count(), 0);
    assert_eq!(webp_dimensions(&dir.path().join("thumbnails/photo.webp")), (40, 40));
}

#[test]
fn nested_directories_are_not_scanned() {
    let dir = tempfile::tempdir().unwrap();
    let sub = dir.path().join("archive");
    fs::create_dir(&sub).unwrap();
    save_image(&sub.join("old.png"), 60, 60);

    let report = driver::run(dir.path(), &small_config()).unwrap();
    assert_eq!(report.success_count(), 0);
    assert!(!dir.path().join("thumbnails/old.webp").exists());
}
