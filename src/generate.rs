//! The generation pipeline: collect, filter, sort, render, assemble.
//!
//! Everything here is a pure function of its arguments. No file access, no
//! shared state; only trace events leave the call.

use tracing::debug;

use crate::{
    order::sorted_module_names,
    output::{assemble, OutputSet},
    platform::{filter_for_platform, TargetPlatform},
    render::{render, render_each, Token},
    schema::{collect_modules, SchemaType},
    templates::JniTemplates,
};

/// Generate the JNI header and `Android.mk` with the built-in templates.
pub fn generate(
    library_name: &str,
    schema: &SchemaType,
    spec_name: &str,
    platform: &TargetPlatform,
) -> OutputSet {
    generate_with(&JniTemplates::default(), library_name, schema, spec_name, platform)
}

pub fn generate_with(
    templates: &JniTemplates<'_>,
    library_name: &str,
    schema: &SchemaType,
    spec_name: &str,
    platform: &TargetPlatform,
) -> OutputSet {
    let names = eligible_module_names(schema, platform);
    debug!(
        library = library_name,
        platform = %platform,
        modules = names.len(),
        "Rendering JNI header."
    );

    let header = render_header(templates, library_name, &names);
    assemble(templates, library_name, spec_name, header)
}

/// Native modules that survive the platform filter, in output order.
pub fn eligible_module_names<'a>(schema: &'a SchemaType, platform: &TargetPlatform) -> Vec<&'a str> {
    let collected = collect_modules(schema);
    let kept = filter_for_platform(&collected, platform);
    sorted_module_names(&kept)
}

/// Two passes: one block per module, then the outer file around them.
pub fn render_header(templates: &JniTemplates<'_>, library_name: &str, names: &[&str]) -> String {
    let modules = render_each(templates.module, Token::MODULE_NAME, names.iter().copied());
    render(
        templates.header,
        &[(Token::MODULES, modules.as_str()), (Token::LIBRARY_NAME, library_name)],
    )
}
