use std::fs;

use icon_render::{IconOptions, IconRenderer, PreferredFont, DEFAULT_SIZES};
use image::GenericImageView;
use pretty_assertions::assert_eq;

fn options_without_font() -> IconOptions {
    IconOptions {
        font: PreferredFont::with_search_dirs("not-installed-anywhere.ttf", Vec::new()),
        ..IconOptions::default()
    }
}

#[test]
fn writes_one_square_png_per_size() {
    let dir = tempfile::tempdir().unwrap();
    let options = options_without_font();

    let mut confirmed = Vec::new();
    let written = IconRenderer
        .generate_all(&DEFAULT_SIZES, &options, dir.path(), |path| {
            confirmed.push(path.file_name().unwrap().to_string_lossy().into_owned())
        })
        .unwrap();

    assert_eq!(confirmed, ["icon16.png", "icon48.png", "icon128.png"]);
    assert_eq!(written.len(), DEFAULT_SIZES.len());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 3);

    for (path, size) in written.iter().zip(DEFAULT_SIZES) {
        let decoded = image::open(path).unwrap();
        assert_eq!(decoded.dimensions(), (size, size));

        let rgb = decoded.to_rgb8();
        assert_eq!(*rgb.get_pixel(0, 0), options.background);
        assert_eq!(*rgb.get_pixel(size - 1, size - 1), options.background);
        assert!(rgb.pixels().any(|pixel| *pixel == options.foreground));
    }
}

#[test]
fn rerunning_overwrites_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("icon48.png");
    fs::write(&path, b"stale").unwrap();

    let options = options_without_font();
    let first = IconRenderer.write_icon(48, &options, dir.path()).unwrap();
    let first_bytes = fs::read(&first).unwrap();
    let second = IconRenderer.write_icon(48, &options, dir.path()).unwrap();

    assert_eq!(first, path);
    assert_eq!(second, path);
    assert_eq!(fs::read(&second).unwrap(), first_bytes);
    assert_eq!(image::open(&path).unwrap().dimensions(), (48, 48));
}

#[test]
fn custom_prefix_and_colors() {
    let dir = tempfile::tempdir().unwrap();
    let options = IconOptions {
        label: "Ab".to_owned(),
        background: image::Rgb([0, 0, 0]),
        prefix: "logo-".to_owned(),
        ..options_without_font()
    };

    let written = IconRenderer.generate_all(&[32], &options, dir.path(), |_| {}).unwrap();

    assert_eq!(written, [dir.path().join("logo-32.png")]);
    let rgb = image::open(&written[0]).unwrap().to_rgb8();
    assert_eq!(*rgb.get_pixel(0, 31), image::Rgb([0, 0, 0]));
}

#[test]
fn output_directory_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("public").join("icons");

    IconRenderer.generate_all(&[16], &options_without_font(), &nested, |_| {}).unwrap();

    assert!(nested.join("icon16.png").is_file());
}
