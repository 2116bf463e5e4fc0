//! Configuration validation logic.

use crate::schema::{LATEST_VERSION, TableProject, TableSetDef};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing {what}")]
    Missing { what: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_project(project: &TableProject) -> Result<(), ValidationError> {
    if project.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    if project.tables.is_empty() {
        return Err(ValidationError::Missing {
            what: "table definitions".to_string(),
        });
    }

    for (index, table) in project.tables.iter().enumerate() {
        validate_table(index, table)?;
    }

    Ok(())
}

fn validate_table(index: usize, table: &TableSetDef) -> Result<(), ValidationError> {
    let context = format!("tables[{}]", index);

    if table.gamma_values.is_empty() {
        return Err(ValidationError::Missing {
            what: format!("{} gamma_values", context),
        });
    }

    for (i, &gamma) in table.gamma_values.iter().enumerate() {
        if !gamma.is_finite() || gamma <= 1.0 {
            return Err(ValidationError::InvalidValue {
                field: format!("{}.gamma_values[{}]", context, i),
                value: gamma.to_string(),
                reason: "specific-heat ratio must be finite and greater than 1".to_string(),
            });
        }
    }

    if let Err(e) = table.sweeps() {
        return Err(ValidationError::InvalidValue {
            field: format!("{}.mach", context),
            value: format!(
                "{}..{} step {}",
                table.mach_start, table.mach_stop, table.mach_step
            ),
            reason: e.to_string(),
        });
    }

    if table.output.as_os_str().is_empty() {
        return Err(ValidationError::Missing {
            what: format!("{} output path", context),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cf_tables::FlowRegime;

    fn one_table(def: TableSetDef) -> TableProject {
        TableProject {
            version: LATEST_VERSION,
            name: "test".to_string(),
            tables: vec![def],
        }
    }

    #[test]
    fn default_project_is_valid() {
        validate_project(&TableProject::default()).unwrap();
    }

    #[test]
    fn rejects_empty_project() {
        let project = TableProject {
            version: LATEST_VERSION,
            name: "empty".to_string(),
            tables: vec![],
        };
        assert!(matches!(
            validate_project(&project),
            Err(ValidationError::Missing { .. })
        ));
    }

    #[test]
    fn rejects_future_version() {
        let mut project = TableProject::default();
        project.version = LATEST_VERSION + 1;
        assert!(matches!(
            validate_project(&project),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn rejects_gamma_of_one() {
        let project = one_table(TableSetDef::new(
            FlowRegime::Fanno,
            0.1,
            1.0,
            vec![1.4, 1.0],
            "f.tex",
        ));
        let err = validate_project(&project).unwrap_err();
        assert!(err.to_string().contains("gamma_values[1]"));
    }

    #[test]
    fn rejects_empty_gamma_list() {
        let project = one_table(TableSetDef::new(FlowRegime::Fanno, 0.1, 1.0, vec![], "f.tex"));
        assert!(validate_project(&project).is_err());
    }

    #[test]
    fn rejects_reversed_mach_range() {
        let project = one_table(TableSetDef::new(
            FlowRegime::Rayleigh,
            3.0,
            1.0,
            vec![1.4],
            "r.tex",
        ));
        let err = validate_project(&project).unwrap_err();
        assert!(err.to_string().contains("tables[0].mach"));
    }

    #[test]
    fn rejects_oversized_mach_grid() {
        let mut def = TableSetDef::new(FlowRegime::Fanno, 0.0, 1e300, vec![1.4], "f.tex");
        def.mach_step = 1e-300;
        let err = validate_project(&one_table(def)).unwrap_err();
        assert!(err.to_string().contains("tables[0].mach"));
    }

    #[test]
    fn rejects_empty_output() {
        let project = one_table(TableSetDef::new(FlowRegime::Rayleigh, 0.1, 1.0, vec![1.4], ""));
        assert!(validate_project(&project).is_err());
    }
}
