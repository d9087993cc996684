//! Console reporting for a batch of icons.

use std::io::Write;

use icon_spec::IconSpec;

use crate::Generator;

/// Printed once every icon in the batch was created.
pub const SUCCESS: &str = "All icons created successfully!";

/// Printed when at least one icon could not be created.
pub const REMEDIATION: &str = "\
To create icons, make a font available for text rendering:
  install a system font (e.g. `apt install fonts-dejavu-core`)
  or set ICON_GEN_FONT=/path/to/font.ttf

Or use the create-icons.html file in a browser";

/// Generate every icon, then print a summary or remediation hints.
///
/// All specs are attempted even after a failure. Returns whether every icon
/// was created.
pub fn run<W: Write>(
    generator: &mut Generator,
    specs: &[IconSpec],
    out: &mut W,
) -> std::io::Result<bool> {
    let mut created = true;
    for spec in specs {
        created &= generator.generate_reported(spec, out)?;
    }

    if created {
        writeln!(out, "{SUCCESS}")?;
    } else {
        writeln!(out)?;
        writeln!(out, "{REMEDIATION}")?;
    }

    Ok(created)
}
