//! Generate operation - writing the client package.

use axgen_codegen_typescript::{Generator, LanguageCodegen};
use eyre::{Context, Result};

use super::Project;
use crate::reports::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions {
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(project: &Project, opts: GenerateOptions) -> Result<GenerateReport> {
    let settings = &project.settings;
    let generator = Generator::new(settings, &project.routes);
    let shadowed_routes = generator
        .trees()
        .shadowed(&project.routes)
        .iter()
        .map(|route| route.folders.to_string())
        .collect();

    let result = if opts.dry_run {
        GenerationResult::Preview(PreviewResult {
            files: generator.preview(),
        })
    } else {
        let result = generator
            .generate(&settings.client_folder)
            .wrap_err("Failed to generate the client")?;
        GenerationResult::Written(WrittenResult {
            client_folder: settings.client_folder.clone(),
            written: result.written.len(),
            kept: result
                .skipped
                .iter()
                .map(|path| {
                    path.strip_prefix(&settings.client_folder)
                        .unwrap_or(path)
                        .display()
                        .to_string()
                })
                .collect(),
        })
    };

    Ok(GenerateReport {
        package_name: settings.package_name.clone(),
        version: settings.version.to_string(),
        service_name: settings.service_name.clone(),
        route_count: project.routes.len(),
        shadowed_routes,
        result,
    })
}

#[cfg(test)]
mod tests {
    use axgen_manifest::Overrides;
    use tempfile::TempDir;

    use super::*;

    fn project() -> TempDir {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("package.json"), r#"{"name": "enutrof"}"#).unwrap();
        let route = temp.path().join("src/routes/public/Health");
        std::fs::create_dir_all(&route).unwrap();
        std::fs::write(route.join("health.route.ts"), "export default {};\n").unwrap();
        std::fs::write(route.join("health.doc.toml"), "method = \"get\"\npath = \"/health\"\n").unwrap();
        temp
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = project();
        let project = Project::load(temp.path(), &Overrides::default()).unwrap();
        let report = generate(&project, GenerateOptions { dry_run: true }).unwrap();

        assert!(matches!(report.result, GenerationResult::Preview(_)));
        assert_eq!(report.route_count, 1);
        assert!(!project.settings.client_folder.exists());
    }

    #[test]
    fn test_second_run_keeps_gitignore() {
        let temp = project();
        let project = Project::load(temp.path(), &Overrides::default()).unwrap();
        generate(&project, GenerateOptions { dry_run: false }).unwrap();
        let report = generate(&project, GenerateOptions { dry_run: false }).unwrap();

        let GenerationResult::Written(written) = report.result else {
            panic!("expected written files");
        };
        assert_eq!(written.kept, vec![".gitignore".to_string()]);
        assert_eq!(written.written, 9);
        assert!(project.settings.client_folder.join("src/index.ts").is_file());
    }
}
