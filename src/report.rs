use crate::{
    cli::ReportMode,
    order::sorted_module_names,
    output::OutputSet,
    platform::{module_supports_platform, TargetPlatform},
    schema::{collect_modules, Modules, SchemaType},
};

/// What one run kept, dropped and produced. Built next to generation,
/// never fed back into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub library_name: String,
    pub platform: TargetPlatform,
    pub kept: Vec<ModuleLine>,
    pub excluded: Vec<ModuleLine>,
    pub files: Vec<(String, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleLine {
    pub name: String,
    pub excluded_platforms: Vec<String>,
}

impl GenerationReport {
    pub fn build(
        library_name: &str,
        schema: &SchemaType,
        platform: &TargetPlatform,
        files: &OutputSet,
    ) -> Self {
        let collected = collect_modules(schema);
        let (kept, excluded): (Modules<'_>, Modules<'_>) = collected
            .iter()
            .map(|(name, m)| (*name, *m))
            .partition(|(_, m)| module_supports_platform(m, platform));

        Self {
            library_name: library_name.to_string(),
            platform: platform.clone(),
            kept: lines(&kept),
            excluded: lines(&excluded),
            files: files.iter().map(|(k, v)| (k.clone(), v.len())).collect(),
        }
    }

    pub fn render(&self, mode: ReportMode) -> String {
        match mode {
            ReportMode::Off => String::new(),
            ReportMode::Summary => self.summary(false),
            ReportMode::Full => self.summary(true),
        }
    }

    fn summary(&self, full: bool) -> String {
        let mut out = String::new();

        out.push_str("jni-codegen report\n");
        out.push_str("==================\n");
        out.push_str(&format!("library: {}\n", self.library_name));
        out.push_str(&format!("platform: {}\n", self.platform));

        out.push_str(&format!("\nmodules: kept={} excluded={}\n", self.kept.len(), self.excluded.len()));
        for m in &self.kept {
            push_module(&mut out, "+", m, full);
        }
        for m in &self.excluded {
            push_module(&mut out, "-", m, full);
        }

        out.push_str("\nfiles\n");
        for (name, bytes) in &self.files {
            out.push_str(&format!("  {name} ({bytes} bytes)\n"));
        }

        out
    }
}

fn lines(modules: &Modules<'_>) -> Vec<ModuleLine> {
    sorted_module_names(modules)
        .into_iter()
        .map(|name| ModuleLine {
            name: name.to_string(),
            excluded_platforms: modules[name].excluded_platforms.clone().unwrap_or_default(),
        })
        .collect()
}

fn push_module(out: &mut String, mark: &str, m: &ModuleLine, full: bool) {
    if full && !m.excluded_platforms.is_empty() {
        out.push_str(&format!(
            "  {mark} {} (excludedPlatforms: {})\n",
            m.name,
            m.excluded_platforms.join(", ")
        ));
    } else {
        out.push_str(&format!("  {mark} {}\n", m.name));
    }
}
