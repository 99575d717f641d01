//! Fixed contents for the files generated inside a route directory.

/// Kind of file that can be generated in a route directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Page,
    Layout,
    Loading,
    Error,
    NotFound,
}

impl FileKind {
    /// Optional files offered for the deepest route directory, in prompt order.
    pub const EXTRAS: [FileKind; 4] = [
        FileKind::Layout,
        FileKind::Loading,
        FileKind::Error,
        FileKind::NotFound,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            FileKind::Page => "page.tsx",
            FileKind::Layout => "layout.tsx",
            FileKind::Loading => "loading.tsx",
            FileKind::Error => "error.tsx",
            FileKind::NotFound => "not-found.tsx",
        }
    }

    /// Question asked before generating an extra. Pages are always generated.
    pub fn prompt(self) -> Option<&'static str> {
        match self {
            FileKind::Page => None,
            FileKind::Layout => Some("🧱 Add layout.tsx to last route? (y/n): "),
            FileKind::Loading => Some("⏳ Add loading.tsx to last route? (y/n): "),
            FileKind::Error => Some("❌ Add error.tsx to last route? (y/n): "),
            FileKind::NotFound => Some("🔍 Add not-found.tsx to last route? (y/n): "),
        }
    }

    /// Contents of an extra file. Pages use [`page_content`] instead.
    pub fn static_content(self) -> Option<&'static str> {
        match self {
            FileKind::Page => None,
            FileKind::Layout => Some(
                "export default function Layout({ children }: { children: React.ReactNode }) {\n  return <>{children}</>;\n}",
            ),
            FileKind::Loading => {
                Some("export default function Loading() {\n  return <p>Loading...</p>;\n}")
            }
            FileKind::Error => Some(
                "export default function Error({ error }: { error: Error }) {\n  return <p>Error: {error.message}</p>;\n}",
            ),
            FileKind::NotFound => {
                Some("export default function NotFound() {\n  return <p>Not found</p>;\n}")
            }
        }
    }
}

/// Renders a page component named `identifier` for the route `route_path`.
pub fn page_content(identifier: &str, route_path: &str) -> String {
    format!(
        "export default function {}() {{\n  return <div>/{} page</div>;\n}}",
        identifier, route_path
    )
}
