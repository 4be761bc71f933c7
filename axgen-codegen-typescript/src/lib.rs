//! TypeScript axios client generator for axgen.
//!
//! # Usage
//!
//! This crate is used internally by the `axgen` CLI tool. You typically don't
//! need to use it directly.
//!
//! ```ignore
//! use axgen_codegen_typescript::{Generator, LanguageCodegen};
//! use axgen_manifest::{ClientSettings, Overrides};
//! use std::path::Path;
//!
//! let settings = ClientSettings::resolve(Path::new("."), &Overrides::default())?;
//! let routes = axgen_scan::scan_project(&settings)?;
//! let generator = Generator::new(&settings, &routes);
//!
//! // Preview files without writing
//! let files = generator.preview();
//!
//! // Generate files to disk
//! let result = generator.generate(&settings.client_folder)?;
//! ```
//!
//! # Generated Output
//!
//! - `src/<folders...>/<fn>.types.ts` - Function type of each route
//! - `src/<folders...>/<fn>.client.ts` - axios call of each route
//! - `src/client.types.ts` - `BaseParams` and the `AxiosClient` type
//! - `src/request.types.ts` - `RequestSuccess` and `RequestError`
//! - `src/index.ts` - `getAxiosClient` and re-exports
//! - `src/mock.ts` - `getAxiosClientMock`
//! - `package.json`, `tsconfig.json`, `README.md`, `.gitignore`

mod code_file;
mod generator;
mod route_path;
mod trees;

pub mod ast;
pub mod files;

pub use ast::{Export, Import};
pub use axgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use code_file::{CodeFile, RawCode};
pub use generator::Generator;
pub use route_path::interpolate_route_path;
pub use trees::{ClientTrees, MOCK_LEAF};
