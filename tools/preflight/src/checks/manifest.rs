use std::io::{self, Write};

use serde_json::Value;

use crate::checks::CheckFindings;
use crate::reporter;

const REQUIRED_SCRIPTS: &[&str] = &["test", "test:ci"];

pub fn check(writer: &mut dyn Write, manifest: &Value) -> io::Result<CheckFindings> {
    let mut findings = CheckFindings::default();

    match manifest.get("scripts") {
        Some(scripts) => {
            for script in REQUIRED_SCRIPTS {
                if scripts.get(script).is_some() {
                    reporter::print_note(writer, &format!("Script \"{script}\" found"))?;
                } else {
                    findings.error(format!("package.json missing script: {script}"));
                }
            }
        }
        None => findings.error(r#"package.json missing "scripts" section"#),
    }

    match manifest.get("devDependencies") {
        Some(dependencies) => match dependencies.get("newman") {
            Some(version) => {
                let declared = version
                    .as_str()
                    .map(str::to_owned)
                    .unwrap_or_else(|| version.to_string());
                reporter::print_note(writer, &format!("Newman dependency: {declared}"))?;
            }
            None => findings.error(r#"package.json missing "newman" dependency"#),
        },
        None => findings.error(r#"package.json missing "devDependencies" section"#),
    }

    Ok(findings)
}
