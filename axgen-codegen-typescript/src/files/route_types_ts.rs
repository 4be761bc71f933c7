//! `<route>.types.ts`: the function type of one route.

use std::path::{Path, PathBuf};

use axgen_core::{FileRules, GeneratedFile, relative_import};
use axgen_ir::RouteRecord;

use super::{ClientLayout, RequestTypesTs};
use crate::{
    ast::Import,
    code_file::{CodeFile, RawCode},
};

pub struct RouteTypesTs<'a> {
    pub route: &'a RouteRecord,
    pub layout: &'a ClientLayout,
}

/// `name: Type;` members of the params object, in body/query/path order.
pub(crate) fn param_members(route: &RouteRecord) -> Vec<(&'static str, &str)> {
    let Some(interfaces) = &route.interfaces else {
        return Vec::new();
    };
    [
        ("body", interfaces.body_interface.as_deref()),
        ("query", interfaces.query_interface.as_deref()),
        ("pathParams", interfaces.path_interface.as_deref()),
    ]
    .into_iter()
    .filter_map(|(name, ty)| ty.map(|ty| (name, ty)))
    .collect()
}

impl RouteTypesTs<'_> {
    fn signature(&self) -> String {
        let success = self
            .route
            .interfaces
            .as_ref()
            .and_then(|i| i.success_response())
            .unwrap_or("unknown");
        let params = param_members(self.route);
        let result = format!("Promise<RequestSuccess<{success}> | RequestError>");
        let name = &self.route.function_interface_name;

        if params.is_empty() {
            return format!("export type {name} = () => {result};");
        }
        let members: String = params
            .iter()
            .map(|(param, ty)| format!("  {param}: {ty};\n"))
            .collect();
        format!("export type {name} = (params: {{\n{members}}}) => {result};")
    }
}

impl GeneratedFile for RouteTypesTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        self.layout.rebase(base, &self.route.generated.type_file)
    }

    fn rules(&self) -> FileRules {
        FileRules::generated()
    }

    fn render(&self) -> String {
        let folder = &self.route.generated.folder;
        let request_types = self.layout.src_file(RequestTypesTs::FILE_NAME);

        let mut file = CodeFile::new().import(
            Import::new(relative_import(folder, &request_types))
                .named("RequestError")
                .named("RequestSuccess"),
        );
        if let (Some(interface_file), Some(interfaces)) =
            (&self.route.interface_file, &self.route.interfaces)
        {
            file = file.import(
                Import::new(relative_import(folder, interface_file))
                    .named_all(interfaces.imported_names()),
            );
        }
        file.add(RawCode::new(self.signature())).render()
    }
}
