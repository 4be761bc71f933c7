//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a discovery pass that writes nothing.
#[derive(Debug)]
pub struct CheckReport {
    pub service_name: String,
    pub package_name: String,
    pub client_folder: PathBuf,
    /// One `METHOD /path (folders)` line per route.
    pub routes: Vec<String>,
    pub shadowed_routes: Vec<String>,
    /// Markdown outline of the client namespaces.
    pub docs: String,
}

impl CheckReport {
    /// Whether every route made it into the client.
    pub fn is_clean(&self) -> bool {
        self.shadowed_routes.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for route in &self.shadowed_routes {
            out.warning(&format!("route {route} is shadowed by another route"));
        }
        if !self.is_clean() {
            out.newline();
        }

        out.preformatted(&format!("✓ {} routes are valid", self.service_name));
        out.newline();
        out.key_value("Package", &self.package_name);
        out.key_value("Client folder", &self.client_folder.display().to_string());

        if self.routes.is_empty() {
            return;
        }
        out.newline();
        out.section(&format!("Routes ({})", self.routes.len()));
        for route in &self.routes {
            out.list_item(route);
        }
        out.newline();
        out.section("Client");
        out.preformatted(self.docs.trim_start_matches('\n'));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::render_to_strings;

    #[test]
    fn test_render() {
        let report = CheckReport {
            service_name: "enutrof".to_string(),
            package_name: "enutrof-client".to_string(),
            client_folder: PathBuf::from("/srv/enutrof-client"),
            routes: vec!["POST /login (public/Auth/Login)".to_string()],
            shadowed_routes: Vec::new(),
            docs: "\n- **public**\n\t- **auth**\n\t\t- **login**unknown".to_string(),
        };
        let (out, err) = render_to_strings(&report);
        assert!(err.is_empty());
        assert_eq!(
            out,
            "✓ enutrof routes are valid\n\
             \n\
             Package: enutrof-client\n\
             Client folder: /srv/enutrof-client\n\
             \n\
             Routes (1):\n\
             \x20 - POST /login (public/Auth/Login)\n\
             \n\
             Client:\n\
             - **public**\n\t- **auth**\n\t\t- **login**unknown\n"
        );
    }

    #[test]
    fn test_shadowed_routes_are_warned() {
        let report = CheckReport {
            service_name: "enutrof".to_string(),
            package_name: "enutrof-client".to_string(),
            client_folder: PathBuf::from("/srv/enutrof-client"),
            routes: Vec::new(),
            shadowed_routes: vec!["public/get".to_string()],
            docs: String::new(),
        };
        assert!(!report.is_clean());
        let (out, err) = render_to_strings(&report);
        assert_eq!(err, "warning: route public/get is shadowed by another route\n");
        assert!(out.starts_with("\n✓ enutrof routes are valid\n"));
    }
}
