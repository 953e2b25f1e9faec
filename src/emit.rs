//! JSON output
//!
//! The merged component list is the tool's only stdout payload: pretty
//! printed, UTF-8, slashes and non-ASCII characters left literal, trailing
//! newline. Consumers diff and pipe this output, so the rendering must stay
//! byte stable for identical input.

use std::io::Write;

use serde_json::Value;

use crate::error::{DumpError, Result};

/// Render merged components as a pretty-printed JSON document.
pub fn render(components: &[Value]) -> Result<String> {
    let mut rendered =
        serde_json::to_string_pretty(components).map_err(|e| DumpError::EmitFailed {
            reason: e.to_string(),
        })?;
    rendered.push('\n');
    Ok(rendered)
}

/// Write the rendered document to `out`.
pub fn write(out: &mut dyn Write, components: &[Value]) -> Result<()> {
    let rendered = render(components)?;
    out.write_all(rendered.as_bytes())?;
    Ok(())
}
