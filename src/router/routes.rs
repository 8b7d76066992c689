use serde::Serialize;
use std::collections::BTreeMap;

use crate::auth::ADMIN_ROLE;
use crate::error::UiError;

/// Route names used by the guard and the rest of the app
pub mod names {
    pub const HOME: &str = "home";
    pub const ABOUT: &str = "about-me";
    pub const PROJECTS: &str = "projects";
    pub const PROJECT_DETAIL: &str = "project-detail";
    pub const ADMIN_DASHBOARD: &str = "admin-dashboard";
    pub const ADMIN_PROJECTS: &str = "admin-projects";
    pub const AUTH_HOME: &str = "auth-home";
    pub const LOGIN: &str = "login";
    pub const NOT_FOUND: &str = "NotFound";
}

const CATCH_ALL: &str = "*";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub required_role: Option<String>,
}

impl RouteMeta {
    pub fn protected(role: impl Into<String>) -> Self {
        Self {
            requires_auth: true,
            required_role: Some(role.into()),
        }
    }
}

/// One entry of the route tree. Records without a name are layouts and only
/// match through their children. Child paths starting with '/' are absolute.
#[derive(Debug, Clone, Serialize)]
pub struct RouteRecord {
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub meta: RouteMeta,
    pub children: Vec<RouteRecord>,
}

impl RouteRecord {
    pub fn page(path: &'static str, name: &'static str) -> Self {
        Self {
            path,
            name: Some(name),
            meta: RouteMeta::default(),
            children: Vec::new(),
        }
    }

    pub fn layout(path: &'static str, children: Vec<RouteRecord>) -> Self {
        Self {
            path,
            name: None,
            meta: RouteMeta::default(),
            children,
        }
    }

    pub fn with_meta(mut self, meta: RouteMeta) -> Self {
        self.meta = meta;
        self
    }
}

/// A resolved navigation target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteLocation {
    pub path: String,
    pub name: String,
    pub params: BTreeMap<String, String>,
    /// Meta of every record on the matched chain, outermost first
    pub matched: Vec<RouteMeta>,
}

impl RouteLocation {
    pub fn requires_auth(&self) -> bool {
        self.matched.iter().any(|m| m.requires_auth)
    }

    /// Innermost role requirement on the chain
    pub fn required_role(&self) -> Option<&str> {
        self.matched.iter().rev().find_map(|m| m.required_role.as_deref())
    }

    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }
}

/// A flattened leaf: full pattern plus the meta chain leading to it
#[derive(Debug, Clone, Serialize)]
pub struct RouteEntry {
    pub name: &'static str,
    pub pattern: String,
    pub matched: Vec<RouteMeta>,
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new(records: Vec<RouteRecord>) -> Self {
        let mut entries = Vec::new();
        for record in &records {
            flatten(record, "", &[], &mut entries);
        }
        Self { entries }
    }

    /// Public site, admin panel and auth pages of the portfolio
    pub fn portfolio() -> Self {
        Self::new(vec![
            RouteRecord::layout(
                "/",
                vec![
                    RouteRecord::page("", names::HOME),
                    RouteRecord::page("/about", names::ABOUT),
                    RouteRecord::page("/proyectos", names::PROJECTS),
                    RouteRecord::page("/proyectos/:slug", names::PROJECT_DETAIL),
                ],
            ),
            RouteRecord::layout(
                "/admin",
                vec![
                    RouteRecord::page("", names::ADMIN_DASHBOARD),
                    RouteRecord::page("projects", names::ADMIN_PROJECTS),
                ],
            )
            .with_meta(RouteMeta::protected(ADMIN_ROLE)),
            RouteRecord::layout(
                "/auth",
                vec![
                    RouteRecord::page("", names::AUTH_HOME),
                    RouteRecord::page("/login", names::LOGIN),
                ],
            ),
            RouteRecord::page(CATCH_ALL, names::NOT_FOUND),
        ])
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Match a path, ignoring any query string or fragment
    pub fn resolve(&self, path: &str) -> Result<RouteLocation, UiError> {
        if !path.starts_with('/') {
            return Err(UiError::InvalidPath(path.to_string()));
        }

        let clean = path.split(['?', '#']).next().unwrap_or("/");
        let segments = split_segments(clean);

        for entry in &self.entries {
            if let Some(params) = match_pattern(&entry.pattern, &segments) {
                return Ok(RouteLocation {
                    path: clean.to_string(),
                    name: entry.name.to_string(),
                    params,
                    matched: entry.matched.clone(),
                });
            }
        }

        // Only reachable for tables without a catch-all
        Err(UiError::UnknownRoute(clean.to_string()))
    }

    /// Resolve a route by name; only routes without params can be targeted
    pub fn resolve_name(&self, name: &str) -> Result<RouteLocation, UiError> {
        let entry = self
            .entries
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| UiError::UnknownRoute(name.to_string()))?;

        if entry.pattern == CATCH_ALL || entry.pattern.contains(':') {
            return Err(UiError::UnknownRoute(name.to_string()));
        }

        Ok(RouteLocation {
            path: entry.pattern.clone(),
            name: entry.name.to_string(),
            params: BTreeMap::new(),
            matched: entry.matched.clone(),
        })
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::portfolio()
    }
}

fn flatten(record: &RouteRecord, parent: &str, chain: &[RouteMeta], out: &mut Vec<RouteEntry>) {
    let pattern = join_path(parent, record.path);
    let mut chain = chain.to_vec();
    chain.push(record.meta.clone());

    if let Some(name) = record.name {
        out.push(RouteEntry {
            name,
            pattern: pattern.clone(),
            matched: chain.clone(),
        });
    }

    for child in &record.children {
        flatten(child, &pattern, &chain, out);
    }
}

fn join_path(parent: &str, path: &str) -> String {
    if path == CATCH_ALL {
        return CATCH_ALL.to_string();
    }
    if path.starts_with('/') {
        return path.to_string();
    }
    if path.is_empty() {
        return if parent.is_empty() { "/".to_string() } else { parent.to_string() };
    }
    format!("{}/{}", parent.trim_end_matches('/'), path)
}

fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn match_pattern(pattern: &str, segments: &[&str]) -> Option<BTreeMap<String, String>> {
    let mut params = BTreeMap::new();

    if pattern == CATCH_ALL {
        params.insert("path_match".to_string(), segments.join("/"));
        return Some(params);
    }

    let parts = split_segments(pattern);
    if parts.len() != segments.len() {
        return None;
    }

    for (part, segment) in parts.iter().zip(segments) {
        match part.strip_prefix(':') {
            Some(param) => {
                params.insert(param.to_string(), segment.to_string());
            }
            None if part == segment => {}
            None => return None,
        }
    }

    Some(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_public_pages() {
        let table = RouteTable::portfolio();
        assert_eq!(table.resolve("/").unwrap().name, names::HOME);
        assert_eq!(table.resolve("/about").unwrap().name, names::ABOUT);
        assert!(!table.resolve("/proyectos").unwrap().requires_auth());
    }

    #[test]
    fn captures_slug_params() {
        let table = RouteTable::portfolio();
        let location = table.resolve("/proyectos/rust-cli?ref=home").unwrap();
        assert_eq!(location.name, names::PROJECT_DETAIL);
        assert_eq!(location.path, "/proyectos/rust-cli");
        assert_eq!(location.params.get("slug").map(String::as_str), Some("rust-cli"));
    }

    #[test]
    fn admin_children_inherit_protection() {
        let table = RouteTable::portfolio();
        for path in ["/admin", "/admin/projects", "/admin/projects/"] {
            let location = table.resolve(path).unwrap();
            assert!(location.requires_auth(), "{} should require auth", path);
            assert_eq!(location.required_role(), Some(ADMIN_ROLE));
        }
        assert_eq!(table.resolve("/admin/projects").unwrap().name, names::ADMIN_PROJECTS);
    }

    #[test]
    fn login_is_absolute_under_auth_layout() {
        let table = RouteTable::portfolio();
        assert_eq!(table.resolve("/login").unwrap().name, names::LOGIN);
        assert_eq!(table.resolve("/auth").unwrap().name, names::AUTH_HOME);
        assert_eq!(table.resolve("/auth/login").unwrap().name, names::NOT_FOUND);
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        let table = RouteTable::portfolio();
        let location = table.resolve("/nope/deeper").unwrap();
        assert_eq!(location.name, names::NOT_FOUND);
        assert_eq!(location.params.get("path_match").map(String::as_str), Some("nope/deeper"));
    }

    #[test]
    fn relative_paths_are_rejected() {
        let table = RouteTable::portfolio();
        assert_eq!(table.resolve("admin"), Err(UiError::InvalidPath("admin".to_string())));
    }

    #[test]
    fn resolve_by_name() {
        let table = RouteTable::portfolio();
        assert_eq!(table.resolve_name(names::LOGIN).unwrap().path, "/login");
        assert_eq!(table.resolve_name(names::ADMIN_PROJECTS).unwrap().path, "/admin/projects");
        assert!(table.resolve_name(names::PROJECT_DETAIL).is_err());
        assert!(table.resolve_name("missing").is_err());
    }
}
