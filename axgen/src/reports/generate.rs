//! Generate command report data structures.

use std::path::PathBuf;

use axgen_codegen_typescript::PreviewFile;

use super::output::{Output, Report};

/// Report data from client generation.
#[derive(Debug)]
pub struct GenerateReport {
    pub package_name: String,
    pub version: String,
    pub service_name: String,
    /// Number of scanned routes.
    pub route_count: usize,
    /// Routes left out of the client because of a namespace conflict.
    pub shadowed_routes: Vec<String>,
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

#[derive(Debug)]
pub struct WrittenResult {
    pub client_folder: PathBuf,
    pub written: usize,
    /// Files that already existed and are never overwritten.
    pub kept: Vec<String>,
}

#[derive(Debug)]
pub struct PreviewResult {
    pub files: Vec<PreviewFile>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for route in &self.shadowed_routes {
            out.warning(&format!("route {route} is shadowed by another route and was left out"));
        }
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.preformatted(&format!(
            "{} v{} (client of {})",
            self.package_name, self.version, self.service_name
        ));
        out.newline();

        out.key_value("Routes", &self.route_count.to_string());
        out.key_value(
            "Generated",
            &format!(
                "{} files in {}",
                written.written,
                written.client_folder.display()
            ),
        );

        if !written.kept.is_empty() {
            out.newline();
            out.section("Kept");
            for file in &written.kept {
                out.list_item(file);
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::render_to_strings;

    fn report(result: GenerationResult) -> GenerateReport {
        GenerateReport {
            package_name: "enutrof-client".to_string(),
            version: "1.0.1".to_string(),
            service_name: "enutrof".to_string(),
            route_count: 3,
            shadowed_routes: Vec::new(),
            result,
        }
    }

    #[test]
    fn test_written_lists_kept_files() {
        let report = report(GenerationResult::Written(WrittenResult {
            client_folder: PathBuf::from("/srv/enutrof-client"),
            written: 13,
            kept: vec![".gitignore".to_string()],
        }));
        let (out, err) = render_to_strings(&report);
        assert!(out.starts_with("enutrof-client v1.0.1 (client of enutrof)\n"));
        assert!(out.contains("Generated: 13 files in /srv/enutrof-client\n"));
        assert!(out.ends_with("Kept:\n  - .gitignore\n"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_preview_prints_every_file() {
        let mut report = report(GenerationResult::Preview(PreviewResult {
            files: vec![PreviewFile {
                path: "src/index.ts".to_string(),
                content: "export {};".to_string(),
            }],
        }));
        report.shadowed_routes = vec!["public/get".to_string()];
        let (out, err) = render_to_strings(&report);
        assert_eq!(
            out,
            "── src/index.ts ──\nexport {};\n── Summary ──\n1 files would be generated\n"
        );
        assert_eq!(
            err,
            "warning: route public/get is shadowed by another route and was left out\n"
        );
    }
}
