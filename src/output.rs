use anyhow::{Context as _, Result};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::{
    render::{render, Token},
    templates::JniTemplates,
};

/// Generated files: file name -> content.
pub type OutputSet = BTreeMap<String, String>;

pub const HEADER_SUFFIX: &str = ".h";
pub const ANDROID_MK_FILE: &str = "Android.mk";
pub const MODULE_ID_PREFIX: &str = "react_codegen";

pub fn header_file_name(spec_name: &str) -> String {
    format!("{spec_name}{HEADER_SUFFIX}")
}

/// `Sample` -> `react_codegen_sample`. Only case changes; nothing is escaped.
pub fn normalized_module_id(library_name: &str) -> String {
    format!("{MODULE_ID_PREFIX}_{}", library_name.to_lowercase())
}

/// Bundle the rendered header with its `Android.mk`.
///
/// The two keys cannot collide: one always ends in `.h`, the other is the
/// fixed build file name.
pub fn assemble(
    templates: &JniTemplates<'_>,
    library_name: &str,
    spec_name: &str,
    header: String,
) -> OutputSet {
    let module_id = normalized_module_id(library_name);
    let android_mk = render(templates.android_mk, &[(Token::LIBRARY_NAME, module_id.as_str())]);

    let mut out = OutputSet::new();
    out.insert(header_file_name(spec_name), header);
    out.insert(ANDROID_MK_FILE.to_string(), android_mk);
    out
}

/// Write every file of `files` into `dir`, creating it if needed.
/// Returns the written paths in file name order.
pub fn write_output_set(dir: &Path, files: &OutputSet) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let mut written = Vec::with_capacity(files.len());
    for (name, text) in files {
        let path = dir.join(name);
        fs::write(&path, text).with_context(|| format!("failed to write {}", path.display()))?;
        debug!(path = %path.display(), bytes = text.len(), "Wrote generated file.");
        written.push(path);
    }

    Ok(written)
}
