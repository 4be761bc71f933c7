//! README.md of the generated client, listing every route.

use std::path::{Path, PathBuf};

use axgen_core::{GeneratedFile, Version};

pub struct Readme {
    pub package_name: String,
    pub service_name: String,
    pub version: Version,
    /// Markdown outline of the routes.
    pub docs: String,
}

impl GeneratedFile for Readme {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("README.md")
    }

    fn render(&self) -> String {
        format!(
            r#"# {package}

Typed axios client for `{service}` (version {version}).

## Usage

```ts
import {{ getAxiosClient }} from '{package}';

const client = getAxiosClient({{ baseUrl: 'http://localhost:3000', headers: {{}} }});
```

Tests can use `getAxiosClientMock(mockFunction)`, which puts `mockFunction()` at every route.

## Routes
{docs}
"#,
            package = self.package_name,
            service = self.service_name,
            version = self.version,
            docs = self.docs,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docs_are_appended() {
        let readme = Readme {
            package_name: "enutrof-client".to_string(),
            service_name: "enutrof".to_string(),
            version: Version::new(1, 0, 1),
            docs: "\n- **public**\n\t- **get**: *Home*".to_string(),
        };
        let content = readme.render();
        assert!(content.starts_with("# enutrof-client\n"));
        assert!(content.contains("(version 1.0.1)"));
        assert!(content.ends_with("## Routes\n\n- **public**\n\t- **get**: *Home*\n"));
    }
}
