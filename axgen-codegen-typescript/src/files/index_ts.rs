//! src/index.ts: the client entry point.

use std::path::{Path, PathBuf};

use axgen_codegen::builder::CodeBuilder;
use axgen_core::{FileRules, GeneratedFile};

use crate::{
    ast::{Export, Import},
    code_file::{CodeFile, RawCode},
};

pub struct IndexTs {
    /// One import per route client function.
    pub imports: Vec<Import>,
    /// Route interface files, generated type files and extra exports.
    pub exports: Vec<Export>,
    /// Compact client object tree.
    pub client_object: String,
}

impl GeneratedFile for IndexTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("src").join("index.ts")
    }

    fn rules(&self) -> FileRules {
        FileRules::generated()
    }

    fn render(&self) -> String {
        let get_client = CodeBuilder::typescript()
            .block_with_close(
                "export const getAxiosClient = (baseParams: BaseParams): AxiosClient => {",
                "};",
                |b| {
                    b.block_with_close("return {", "};", |b| {
                        b.block_with_close(
                            "setHeaders: (headers: BaseParams['headers']) => {",
                            "},",
                            |b| b.line("return getAxiosClient({ ...baseParams, headers });"),
                        )
                        .block_with_close("setBaseUrl: (baseUrl: string) => {", "},", |b| {
                            b.line("return getAxiosClient({ ...baseParams, baseUrl });")
                        })
                        .when(!self.client_object.is_empty(), |b| {
                            b.line(&format!("{},", self.client_object))
                        })
                    })
                },
            )
            .build();

        CodeFile::new()
            .import(
                Import::new("./client.types")
                    .named("AxiosClient")
                    .named("BaseParams"),
            )
            .imports(self.imports.iter().cloned())
            .export(Export::all("./client.types"))
            .export(Export::all("./request.types"))
            .export(Export::all("./mock").named("getAxiosClientMock"))
            .exports(self.exports.iter().cloned())
            .add(RawCode::new(get_client))
            .render()
    }
}
