use anyhow::{bail, Context as _, Result};
use serde::Deserialize;
use std::{
    collections::{BTreeSet, HashMap},
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

/// Parsed codegen schema: one entry per spec file, keyed by name.
///
/// Key order carries no meaning; generation sorts explicitly.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaType {
    #[serde(default)]
    pub modules: HashMap<String, SchemaEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum SchemaEntry {
    NativeModule(NativeModule),
    Component(ComponentFile),
}

/// The part of a native module definition this generator consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeModule {
    #[serde(default)]
    pub excluded_platforms: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComponentFile {
    #[serde(default)]
    pub components: serde_json::Value,
}

/// Module name -> definition, borrowed from a [`SchemaType`].
pub type Modules<'a> = HashMap<&'a str, &'a NativeModule>;

impl SchemaType {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Native modules of the schema, exactly as declared.
///
/// Component entries are skipped; nothing else is filtered or rewritten.
pub fn collect_modules(schema: &SchemaType) -> Modules<'_> {
    schema
        .modules
        .iter()
        .filter_map(|(name, entry)| match entry {
            SchemaEntry::NativeModule(m) => Some((name.as_str(), m)),
            SchemaEntry::Component(_) => None,
        })
        .collect()
}

pub fn load_schema(path: &Path) -> Result<SchemaType> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read schema file at {}", path.display()))?;
    let schema = SchemaType::from_json(&text)
        .with_context(|| format!("failed to parse schema file at {}", path.display()))?;

    debug!(
        path = %path.display(),
        entries = schema.modules.len(),
        "Loaded schema."
    );
    Ok(schema)
}

/// Merge several schemas into one. A later schema wins on a duplicate key.
pub fn combine_schemas<I>(schemas: I) -> SchemaType
where
    I: IntoIterator<Item = SchemaType>,
{
    let mut out = SchemaType::default();
    for s in schemas {
        out.modules.extend(s.modules);
    }
    out
}

/// Resolve schema inputs (plain paths or glob patterns) to a sorted path list.
pub fn expand_schema_inputs(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut out: BTreeSet<PathBuf> = BTreeSet::new();

    for raw in inputs {
        let pattern = raw.trim();
        if pattern.is_empty() {
            continue;
        }

        let mut matched = false;
        let paths = glob::glob(pattern).with_context(|| format!("invalid schema pattern: {pattern}"))?;
        for entry in paths {
            let p = entry.with_context(|| format!("failed to read match for pattern: {pattern}"))?;
            if p.is_file() {
                out.insert(p);
                matched = true;
            }
        }

        if !matched {
            bail!("schema input matched no files: {pattern}");
        }
    }

    Ok(out.into_iter().collect())
}

/// Load every input and combine them, in sorted path order.
pub fn load_schemas(inputs: &[String]) -> Result<SchemaType> {
    let paths = expand_schema_inputs(inputs)?;
    let mut schemas = Vec::with_capacity(paths.len());
    for p in &paths {
        schemas.push(load_schema(p)?);
    }
    Ok(combine_schemas(schemas))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
  "modules": {
    "NativeSampleTurboModule": {
      "type": "NativeModule",
      "aliasMap": {},
      "spec": { "properties": [] },
      "moduleName": "SampleTurboModule"
    },
    "NativeIosOnly": {
      "type": "NativeModule",
      "excludedPlatforms": ["android"],
      "spec": { "properties": [] }
    },
    "SliderFile": {
      "type": "Component",
      "components": { "Slider": {} }
    }
  }
}"#;

    #[test]
    fn parses_module_and_component_entries() {
        let schema = SchemaType::from_json(SAMPLE).unwrap();
        assert_eq!(schema.modules.len(), 3);

        match &schema.modules["NativeIosOnly"] {
            SchemaEntry::NativeModule(m) => {
                assert_eq!(m.excluded_platforms, Some(vec!["android".to_string()]));
            }
            other => panic!("unexpected entry: {other:?}"),
        }
        assert!(matches!(schema.modules["SliderFile"], SchemaEntry::Component(_)));
    }

    #[test]
    fn collector_yields_native_modules_unchanged() {
        let schema = SchemaType::from_json(SAMPLE).unwrap();
        let modules = collect_modules(&schema);

        let mut names: Vec<&str> = modules.keys().copied().collect();
        names.sort();
        assert_eq!(names, vec!["NativeIosOnly", "NativeSampleTurboModule"]);
        assert_eq!(modules["NativeSampleTurboModule"].excluded_platforms, None);
    }

    #[test]
    fn missing_modules_key_is_an_empty_schema() {
        let schema = SchemaType::from_json("{}").unwrap();
        assert!(collect_modules(&schema).is_empty());
    }

    #[test]
    fn unknown_entry_type_is_rejected() {
        let err = SchemaType::from_json(r#"{"modules": {"X": {"type": "Widget"}}}"#);
        assert!(err.is_err());
    }

    #[test]
    fn later_schema_wins_when_combining() {
        let a = SchemaType::from_json(
            r#"{"modules": {"Shared": {"type": "NativeModule"}, "OnlyA": {"type": "NativeModule"}}}"#,
        )
        .unwrap();
        let b = SchemaType::from_json(
            r#"{"modules": {"Shared": {"type": "NativeModule", "excludedPlatforms": ["iOS"]}}}"#,
        )
        .unwrap();

        let combined = combine_schemas([a, b]);
        let modules = collect_modules(&combined);
        assert_eq!(modules.len(), 2);
        assert_eq!(
            modules["Shared"].excluded_platforms,
            Some(vec!["iOS".to_string()])
        );
    }

    #[test]
    fn expands_globs_and_rejects_empty_matches() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.json"), "{}").unwrap();
        fs::write(dir.path().join("a.json"), "{}").unwrap();

        let pattern = format!("{}/*.json", dir.path().display());
        let paths = expand_schema_inputs(&[pattern]).unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json"]);

        let missing = format!("{}/*.nope", dir.path().display());
        assert!(expand_schema_inputs(&[missing]).is_err());
    }

    #[test]
    fn load_error_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("broken.json");
        fs::write(&p, "{ not json").unwrap();

        let err = load_schema(&p).unwrap_err();
        assert!(format!("{err:#}").contains("broken.json"));
    }
}
