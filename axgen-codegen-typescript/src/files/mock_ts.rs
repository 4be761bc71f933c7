//! src/mock.ts: a client whose every route is a caller-provided mock.

use std::path::{Path, PathBuf};

use axgen_codegen::builder::CodeBuilder;
use axgen_core::{FileRules, GeneratedFile};

use crate::{
    ast::Import,
    code_file::{CodeFile, RawCode},
};

pub struct MockTs {
    /// Compact mock tree.
    pub client_mock: String,
}

impl GeneratedFile for MockTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("src").join("mock.ts")
    }

    fn rules(&self) -> FileRules {
        FileRules::generated()
    }

    fn render(&self) -> String {
        let get_mock = CodeBuilder::typescript()
            .block_with_close(
                "export const getAxiosClientMock = (mockFunction: () => any): AxiosClient => {",
                "};",
                |b| {
                    b.block_with_close("const client: AxiosClient = {", "};", |b| {
                        b.line("setHeaders: () => client,")
                            .line("setBaseUrl: () => client,")
                            .when(!self.client_mock.is_empty(), |b| {
                                b.line(&format!("{},", self.client_mock))
                            })
                    })
                    .line("return client;")
                },
            )
            .build();

        CodeFile::new()
            .import(Import::new("./client.types").named("AxiosClient"))
            .add(RawCode::new(get_mock))
            .render()
    }
}
