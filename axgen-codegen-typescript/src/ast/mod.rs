//! TypeScript statement builders, rendered through `CodeBuilder`.

mod exports;
mod imports;

pub use exports::Export;
pub use imports::Import;
