//! App icon generation: render a spec, encode it as PNG and save it.

mod data;
mod error;
pub mod png;
pub mod report;

pub use data::Icon;
pub use error::GenerateError;
use icon_spec::IconSpec;

/// Renders and saves icons, reusing the loaded fonts across calls.
pub struct Generator {
    /// Font system used for text layout.
    font_system: cosmic_text::FontSystem,

    /// Glyph rasterization cache.
    cache: cosmic_text::SwashCache,
}

impl Generator {
    /// Create a generator using the fonts installed on the system.
    pub fn new() -> Self {
        Self::with_font_system(cosmic_text::FontSystem::new())
    }

    /// Create a generator with a preconfigured font system.
    pub fn with_font_system(font_system: cosmic_text::FontSystem) -> Self {
        tracing::debug!(faces = font_system.db().len(), "font system ready");
        Self {
            font_system,
            cache: cosmic_text::SwashCache::new(),
        }
    }

    /// Access the font database, e.g. to load extra font files.
    pub fn font_db_mut(&mut self) -> &mut cosmic_text::fontdb::Database {
        self.font_system.db_mut()
    }

    /// Whether text can be drawn at all.
    pub fn has_fonts(&self) -> bool {
        icon_render::has_fonts(self.font_system.db())
    }

    /// Render the icon described by the spec.
    pub fn render(&mut self, spec: &IconSpec) -> Result<Icon, GenerateError> {
        if spec.size == 0 {
            return Err(GenerateError::EmptySize);
        }
        if !self.has_fonts() {
            return Err(GenerateError::FontsUnavailable);
        }

        let params = icon_render::Params {
            text: &spec.label,
            width: spec.size,
            height: spec.size,
            font_size: spec.font_size(),
            background: spec.background,
            text_color: spec.text_color,
        };
        tracing::debug!(
            size = spec.size,
            font_size = params.font_size,
            background = %spec.background,
            text_color = %spec.text_color,
            "rendering icon"
        );
        let pixels = icon_render::render(&params, &mut self.font_system, &mut self.cache);

        Icon::new(spec.size, spec.size, pixels)
    }

    /// Render the icon and write it as a PNG file to the spec's output path.
    pub fn generate(&mut self, spec: &IconSpec) -> Result<(), GenerateError> {
        let icon = self.render(spec)?;
        png::write(icon, &spec.output_path)
    }

    /// Like [`Self::generate`], but reports the outcome to `out` instead of failing.
    ///
    /// Returns whether the icon was created; only writing the report can fail.
    pub fn generate_reported<W: std::io::Write>(
        &mut self,
        spec: &IconSpec,
        out: &mut W,
    ) -> std::io::Result<bool> {
        let path = spec.output_path.display();
        match self.generate(spec) {
            Ok(()) => {
                writeln!(out, "Created {path}")?;
                Ok(true)
            }
            Err(error) => {
                tracing::warn!(%path, %error, "icon generation failed");
                writeln!(out, "Failed to create {path}: {error}")?;
                Ok(false)
            }
        }
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("faces", &self.font_system.db().len())
            .finish_non_exhaustive()
    }
}
