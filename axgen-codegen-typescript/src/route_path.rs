/// Turn a URL template into the body of a template literal:
/// `/campaigns/:campaignId` becomes `/campaigns/${pathParams.campaignId}`.
pub fn interpolate_route_path(path: &str) -> String {
    path.split('/')
        .map(|segment| match segment.split_once(':') {
            Some((before, name)) => format!("{before}${{pathParams.{name}}}"),
            None => segment.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}
