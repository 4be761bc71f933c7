use serde::Serialize;

/// Names of the conventional type declarations found in a route's interface file.
///
/// Every field is filled independently, so a file declaring only a body and a
/// response leaves `path_interface` and `query_interface` empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteInterfaces {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_interface: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_interface: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_interface: Option<String>,
    /// Every `...Response<status>` declaration, in file order.
    pub responses_interfaces: Vec<String>,
}

impl RouteInterfaces {
    /// True when the file declared none of the four conventional types.
    pub fn is_empty(&self) -> bool {
        self.path_interface.is_none()
            && self.query_interface.is_none()
            && self.body_interface.is_none()
            && self.responses_interfaces.is_empty()
    }

    /// The first response whose status code is a 2xx.
    pub fn success_response(&self) -> Option<&str> {
        self.responses_interfaces
            .iter()
            .find(|name| status_code(name).is_some_and(|s| (200..300).contains(&s)))
            .map(String::as_str)
    }

    /// All declared names, in path/query/body/success order, without duplicates.
    pub fn imported_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        let candidates = [
            self.path_interface.as_deref(),
            self.query_interface.as_deref(),
            self.body_interface.as_deref(),
            self.success_response(),
        ];
        for name in candidates.into_iter().flatten() {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}

/// Status code encoded in the trailing digits of a response name.
fn status_code(name: &str) -> Option<u16> {
    let digits_start = name
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i)?;
    name[digits_start..].parse().ok()
}
