//! Generates the 192px and 512px app icons.

use color_eyre::eyre::WrapErr as _;

fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    let output_dir: std::path::PathBuf =
        envfury::or("ICON_GEN_OUTPUT_DIR", std::path::PathBuf::from("."))?;
    let font_path: Option<std::path::PathBuf> = envfury::maybe("ICON_GEN_FONT")?;

    tracing::info!(
        output_dir = %output_dir.display(),
        font = ?font_path,
        "generating icons"
    );

    let mut generator = icon_generator::Generator::new();

    if let Some(font_path) = font_path {
        icon_render::load_font_file(generator.font_db_mut(), &font_path)
            .wrap_err_with(|| format!("loading font {}", font_path.display()))?;
    }

    let specs = icon_spec::standard_set(&output_dir);

    let mut stdout = std::io::stdout().lock();
    let created = icon_generator::report::run(&mut generator, &specs, &mut stdout)?;

    tracing::debug!(created, "done");

    Ok(())
}
