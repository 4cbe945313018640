use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use icon_render::{
    parse_color, system_font_dirs, IconOptions, IconRenderer, PreferredFont, DEFAULT_SIZES,
};
use image::Rgb;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate square letter icons at several sizes")]
struct Cli {
    /// Icon edge lengths in pixels
    #[arg(long, env = "ICON_SIZES", value_delimiter = ',', default_values_t = DEFAULT_SIZES)]
    sizes: Vec<u32>,
    /// Text drawn in the middle of each icon
    #[arg(long, env = "ICON_LABEL", default_value = "N")]
    label: String,
    /// Background color (#rrggbb, #rgb or a basic name)
    #[arg(long, env = "ICON_BACKGROUND", default_value = "#2383e2", value_parser = parse_color)]
    background: Rgb<u8>,
    /// Label color (#rrggbb, #rgb or a basic name)
    #[arg(long, env = "ICON_FOREGROUND", default_value = "white", value_parser = parse_color)]
    foreground: Rgb<u8>,
    /// Preferred font file, as a path or a file name searched in font directories
    #[arg(long, env = "ICON_FONT", default_value = "arial.ttf")]
    font: PathBuf,
    /// Extra directories searched for the preferred font
    #[arg(long = "font-dir")]
    font_dirs: Vec<PathBuf>,
    /// Font pixel size as a fraction of the icon size
    #[arg(long, env = "ICON_FONT_SCALE", default_value_t = 0.6)]
    font_scale: f32,
    /// Output file name prefix
    #[arg(long, env = "ICON_PREFIX", default_value = "icon")]
    prefix: String,
    /// Directory the icons are written to
    #[arg(short, long, env = "ICON_OUT_DIR", default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(size) = cli.sizes.iter().find(|&&size| size == 0) {
        anyhow::bail!("invalid icon size {size}, sizes must be positive");
    }

    let options = cli.to_options();
    debug!("generating {:?} into {:?} with {:?}", cli.sizes, cli.out_dir, options);
    let progress = ProgressBar::new(cli.sizes.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{spinner} [{bar:30.cyan/blue}] {pos}/{len} icons")
            .context("invalid progress template")?
            .progress_chars("=> "),
    );

    IconRenderer
        .generate_all(&cli.sizes, &options, &cli.out_dir, |path| {
            let name = path.file_name().unwrap_or(path.as_os_str()).to_string_lossy();
            progress.suspend(|| println!("Created {name}"));
            progress.inc(1);
        })
        .with_context(|| format!("failed to generate icons in {:?}", cli.out_dir))?;

    progress.finish_and_clear();
    println!("All icons created successfully!");
    Ok(())
}

impl Cli {
    fn to_options(&self) -> IconOptions {
        let search_dirs = self.font_dirs.iter().cloned().chain(system_font_dirs()).collect();
        let font = PreferredFont::with_search_dirs(&self.font, search_dirs);

        IconOptions {
            label: self.label.clone(),
            background: self.background,
            foreground: self.foreground,
            font,
            font_scale: self.font_scale.max(0.01),
            prefix: self.prefix.clone(),
        }
    }
}
