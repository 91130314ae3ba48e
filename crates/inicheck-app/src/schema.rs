use anyhow::Context;
use schemars::schema_for;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaKind {
    /// `inicheck.toml`
    Config,
    /// `inicheck.report.v1`
    Report,
}

/// JSON schema for one of the user-facing documents, pretty-printed with a trailing newline.
pub fn schema_json(kind: SchemaKind) -> anyhow::Result<String> {
    let schema = match kind {
        SchemaKind::Config => schema_for!(inicheck_settings::InicheckConfigV1),
        SchemaKind::Report => schema_for!(inicheck_types::InicheckReport),
    };
    let mut json = serde_json::to_string_pretty(&schema).context("serialize schema")?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schemas_describe_their_documents() {
        let config = schema_json(SchemaKind::Config).expect("config schema");
        assert!(config.contains("restricted_mode_key"));
        assert!(config.contains("literal_match"));

        let report = schema_json(SchemaKind::Report).expect("report schema");
        assert!(report.contains("rules_skipped_mode"));
        assert!(report.contains("started_at"));
    }
}
