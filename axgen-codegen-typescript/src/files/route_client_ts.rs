//! `<route>.client.ts`: the axios call of one route.

use std::path::{Path, PathBuf};

use axgen_codegen::builder::{CodeBuilder, CodeFragment};
use axgen_core::{FileRules, GeneratedFile, relative_import};
use axgen_ir::RouteRecord;

use super::{ClientLayout, ClientTypesTs, RequestTypesTs, route_types_ts::param_members};
use crate::{
    ast::Import,
    code_file::{CodeFile, RawCode},
    route_path::interpolate_route_path,
};

pub struct RouteClientTs<'a> {
    pub route: &'a RouteRecord,
    pub layout: &'a ClientLayout,
}

impl RouteClientTs<'_> {
    fn function(&self) -> String {
        let route = self.route;
        let params = param_members(route);
        let destructured = if params.is_empty() {
            "()".to_string()
        } else {
            let names: Vec<&str> = params.iter().map(|(name, _)| *name).collect();
            format!("({{ {} }})", names.join(", "))
        };
        let has = |name: &str| params.iter().any(|(param, _)| *param == name);

        CodeBuilder::typescript()
            .block_with_close(
                &format!(
                    "export const {} = (baseParams: BaseParams): {} => async {destructured} => {{",
                    route.function_name, route.function_interface_name
                ),
                "};",
                |b| {
                    b.line("try {")
                        .indent()
                        .block_with_close("const response = await axios.request({", "});", |b| {
                            b.line("baseURL: baseParams.baseUrl,")
                                .line("headers: baseParams.headers,")
                                .line(&format!("method: '{}',", route.method.as_str()))
                                .line(&format!(
                                    "url: `{}`,",
                                    interpolate_route_path(&route.path)
                                ))
                                .when(has("body"), |b| b.line("data: body,"))
                                .when(has("query"), |b| b.line("params: query,"))
                        })
                        .line("return { hasFailed: false, status: response.status, data: response.data };")
                        .dedent()
                        .line("} catch (error) {")
                        .indent()
                        .block_with_close("if (axios.isAxiosError(error) && error.response) {", "}", |b| {
                            b.render(&CodeFragment::block(
                                "const failure: RequestError = {",
                                vec![
                                    CodeFragment::line("hasFailed: true,"),
                                    CodeFragment::line("status: error.response.status,"),
                                    CodeFragment::line("data: error.response.data,"),
                                ],
                                "};",
                            ))
                            .line("return failure;")
                        })
                        .line("throw error;")
                        .dedent()
                        .line("}")
                },
            )
            .build()
    }
}

impl GeneratedFile for RouteClientTs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        self.layout.rebase(base, &self.route.generated.client_file)
    }

    fn rules(&self) -> FileRules {
        FileRules::generated()
    }

    fn render(&self) -> String {
        let folder = &self.route.generated.folder;
        CodeFile::new()
            .import(Import::new("axios").default("axios"))
            .import(
                Import::new(relative_import(
                    folder,
                    &self.layout.src_file(ClientTypesTs::FILE_NAME),
                ))
                .named("BaseParams"),
            )
            .import(
                Import::new(relative_import(
                    folder,
                    &self.layout.src_file(RequestTypesTs::FILE_NAME),
                ))
                .named("RequestError"),
            )
            .import(
                Import::new(relative_import(folder, &self.route.generated.type_file))
                    .named(&self.route.function_interface_name),
            )
            .add(RawCode::new(self.function()))
            .render()
    }
}
