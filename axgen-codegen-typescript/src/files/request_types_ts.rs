//! src/request.types.ts: the result types every request resolves to.

use std::path::{Path, PathBuf};

use axgen_core::{FileRules, GeneratedFile};

use crate::code_file::{CodeFile, RawCode};

pub struct RequestTypesTs;

impl RequestTypesTs {
    pub const FILE_NAME: &'static str = "request.types.ts";
}

impl GeneratedFile for RequestTypesTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("src").join(Self::FILE_NAME)
    }

    fn rules(&self) -> FileRules {
        FileRules::generated()
    }

    fn render(&self) -> String {
        CodeFile::new()
            .add(RawCode::new(
                r#"export type RequestError<
  T = {
    code: string;
    message: string;
  },
> = {
  hasFailed: true;
  status: number;
  data: T;
};"#,
            ))
            .add(RawCode::new(
                r#"export type RequestSuccess<T> = {
  hasFailed: false;
  status: number;
  data: T;
};"#,
            ))
            .render()
    }
}
