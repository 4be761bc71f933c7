//! Relative path helpers for generated import statements.

use std::path::{Component, Path, PathBuf};

/// Compute the path of `to` relative to the directory `from`.
///
/// Both paths are compared component by component; they are expected to be
/// either both absolute or both relative to the same base.
pub fn relative_path(from: &Path, to: &Path) -> PathBuf {
    let from: Vec<Component> = from.components().collect();
    let to: Vec<Component> = to.components().collect();

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut result = PathBuf::new();
    for _ in common..from.len() {
        result.push("..");
    }
    for component in &to[common..] {
        result.push(component.as_os_str());
    }
    result
}

/// Build a TypeScript import specifier from `from_dir` to the file `to`.
///
/// Uses forward slashes, drops the `.ts` extension and prefixes `./` when the
/// target is not above `from_dir`.
pub fn relative_import(from_dir: &Path, to: &Path) -> String {
    let relative = relative_path(from_dir, to);
    let mut specifier = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/");

    if let Some(stripped) = specifier.strip_suffix(".ts") {
        specifier = stripped.to_string();
    }

    if specifier.starts_with("..") {
        specifier
    } else {
        format!("./{}", specifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path_sibling() {
        assert_eq!(
            relative_path(Path::new("/a/b"), Path::new("/a/c/d.ts")),
            PathBuf::from("../c/d.ts")
        );
    }

    #[test]
    fn test_relative_path_nested() {
        assert_eq!(
            relative_path(Path::new("/a"), Path::new("/a/b/c.ts")),
            PathBuf::from("b/c.ts")
        );
    }

    #[test]
    fn test_relative_import_strips_extension() {
        assert_eq!(
            relative_import(
                Path::new("/client/src"),
                Path::new("/client/src/private/Quotas/getQuotas.types.ts")
            ),
            "./private/Quotas/getQuotas.types"
        );
    }

    #[test]
    fn test_relative_import_walks_up() {
        assert_eq!(
            relative_import(
                Path::new("/client/src/private/Quotas"),
                Path::new("/client/src/client.types.ts")
            ),
            "../../client.types"
        );
    }
}
