//! TypeScript axios client generator.

use std::path::{Component, Path};

use axgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
use axgen_core::{GeneratedFile, relative_import};
use axgen_ir::RouteRecord;
use axgen_manifest::ClientSettings;
use eyre::Result;

use crate::{
    ast::{Export, Import},
    files::{
        ClientLayout, ClientTypesTs, GitIgnore, IndexTs, MockTs, PackageJson, Readme,
        RequestTypesTs, RouteClientTs, RouteTypesTs, TsConfig,
    },
    trees::ClientTrees,
};

/// Generates the client package of one project from its scanned routes.
pub struct Generator<'a> {
    settings: &'a ClientSettings,
    routes: &'a [RouteRecord],
    trees: ClientTrees,
    layout: ClientLayout,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.files()
            .iter()
            .map(|file| PreviewFile {
                path: slash_path(&file.path(Path::new(""))),
                content: file.contents(),
            })
            .collect()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();
        for file in self.files() {
            let path = file.path(output_dir);
            let outcome = file.write(output_dir)?;
            tracing::trace!(path = %path.display(), ?outcome, "client file");
            result.record(path, outcome);
        }
        tracing::info!(
            written = result.written.len(),
            skipped = result.skipped.len(),
            "client generated"
        );
        Ok(result)
    }
}

impl<'a> Generator<'a> {
    pub fn new(settings: &'a ClientSettings, routes: &'a [RouteRecord]) -> Self {
        Self {
            settings,
            routes,
            trees: ClientTrees::build(routes),
            layout: ClientLayout::new(&settings.client_folder, &settings.src_folder),
        }
    }

    pub fn trees(&self) -> &ClientTrees {
        &self.trees
    }

    /// Every file of the package, shared files first, then two per route.
    fn files(&self) -> Vec<Box<dyn GeneratedFile + '_>> {
        let settings = self.settings;
        let mut files: Vec<Box<dyn GeneratedFile + '_>> = vec![
            Box::new(
                PackageJson::new(&settings.package_name, settings.version)
                    .with_author(settings.author.clone()),
            ),
            Box::new(TsConfig {
                paths: settings.ts_paths.relative_to(&settings.src_folder),
            }),
            Box::new(GitIgnore),
            Box::new(Readme {
                package_name: settings.package_name.clone(),
                service_name: settings.service_name.clone(),
                version: settings.version,
                docs: self.trees.client_docs(),
            }),
            Box::new(RequestTypesTs),
            Box::new(ClientTypesTs {
                imports: self.type_imports(),
                typings: self.trees.client_typings(),
            }),
            Box::new(MockTs {
                client_mock: self.trees.client_mock(),
            }),
            Box::new(IndexTs {
                imports: self.client_imports(),
                exports: self.index_exports(),
                client_object: self.trees.client_object(),
            }),
        ];
        for route in self.routes {
            files.push(Box::new(RouteTypesTs {
                route,
                layout: &self.layout,
            }));
            files.push(Box::new(RouteClientTs {
                route,
                layout: &self.layout,
            }));
        }
        files
    }

    fn from_src(&self, to: &Path) -> String {
        relative_import(&self.settings.src_folder, to)
    }

    fn type_imports(&self) -> Vec<Import> {
        self.routes
            .iter()
            .map(|route| {
                Import::new(self.from_src(&route.generated.type_file))
                    .named(&route.function_interface_name)
            })
            .collect()
    }

    fn client_imports(&self) -> Vec<Import> {
        self.routes
            .iter()
            .map(|route| {
                Import::new(self.from_src(&route.generated.client_file))
                    .named(&route.function_name)
            })
            .collect()
    }

    /// Route interface files and generated types, then the extra exports.
    fn index_exports(&self) -> Vec<Export> {
        let mut exports = Vec::new();
        for route in self.routes {
            if let Some(interface_file) = &route.interface_file {
                exports.push(Export::all(self.from_src(interface_file)));
            }
            exports.push(Export::all(self.from_src(&route.generated.type_file)));
        }
        exports.extend(
            self.settings
                .extra_exports
                .iter()
                .map(|extra| Export::all(self.from_src(extra))),
        );
        exports
    }
}

fn slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
