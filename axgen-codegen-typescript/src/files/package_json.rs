//! package.json of the generated client.

use std::path::{Path, PathBuf};

use axgen_core::{GeneratedFile, Version};
use serde_json::{Map, Value, json};

const AXIOS_VERSION: &str = "^1.7.0";
const TYPESCRIPT_VERSION: &str = "^5.0.0";

pub struct PackageJson {
    pub name: String,
    pub version: Version,
    pub author: Option<String>,
}

impl PackageJson {
    pub fn new(name: impl Into<String>, version: Version) -> Self {
        Self {
            name: name.into(),
            version,
            author: None,
        }
    }

    pub fn with_author(mut self, author: Option<String>) -> Self {
        self.author = author;
        self
    }
}

impl GeneratedFile for PackageJson {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("package.json")
    }

    fn render(&self) -> String {
        let mut package = Map::new();
        package.insert("name".into(), json!(self.name));
        package.insert("version".into(), json!(self.version.to_string()));
        if let Some(author) = &self.author {
            package.insert("author".into(), json!(author));
        }
        package.insert("main".into(), json!("dist/index.js"));
        package.insert("types".into(), json!("dist/index.d.ts"));
        package.insert("files".into(), json!(["dist"]));
        package.insert("scripts".into(), json!({ "build": "tsc" }));
        package.insert("dependencies".into(), json!({ "axios": AXIOS_VERSION }));
        package.insert(
            "devDependencies".into(),
            json!({ "typescript": TYPESCRIPT_VERSION }),
        );
        format!("{:#}\n", Value::Object(package))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let content = PackageJson::new("@acme/api-client", Version::new(1, 0, 3)).render();
        let value: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["name"], "@acme/api-client");
        assert_eq!(value["version"], "1.0.3");
        assert_eq!(value["dependencies"]["axios"], AXIOS_VERSION);
        assert!(value.get("author").is_none());
    }

    #[test]
    fn test_author_is_kept() {
        let content = PackageJson::new("client", Version::initial())
            .with_author(Some("ACME".to_string()))
            .render();
        assert!(content.contains("\"author\": \"ACME\""));
    }
}
