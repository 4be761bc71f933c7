//! src/client.types.ts: `BaseParams` and the `AxiosClient` type.

use std::path::{Path, PathBuf};

use axgen_codegen::builder::CodeBuilder;
use axgen_core::{FileRules, GeneratedFile};

use crate::{
    ast::Import,
    code_file::{CodeFile, RawCode},
};

pub struct ClientTypesTs {
    /// One import per route function type.
    pub imports: Vec<Import>,
    /// Compact type tree of every route function.
    pub typings: String,
}

impl ClientTypesTs {
    pub const FILE_NAME: &'static str = "client.types.ts";
}

impl GeneratedFile for ClientTypesTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("src").join(Self::FILE_NAME)
    }

    fn rules(&self) -> FileRules {
        FileRules::generated()
    }

    fn render(&self) -> String {
        let client_type = CodeBuilder::typescript()
            .block_with_close("export type AxiosClient = {", "};", |b| {
                b.line("setHeaders: (headers: BaseParams['headers']) => AxiosClient;")
                    .line("setBaseUrl: (baseUrl: BaseParams['baseUrl']) => AxiosClient;")
                    .when(!self.typings.is_empty(), |b| b.line(&self.typings))
            })
            .build();

        CodeFile::new()
            .import(Import::new("axios").named("AxiosRequestConfig").type_only())
            .imports(self.imports.iter().cloned())
            .add(RawCode::new(
                "export type BaseParams = { baseUrl: string; headers: AxiosRequestConfig['headers'] };",
            ))
            .add(RawCode::new(client_type))
            .render()
    }
}
