use crate::config::NavigationItem;

const INDEX_PAGE: &str = "index.html";
const POSTS_SEGMENT: &str = "/posts/";

/// Where the current document sits in the site, derived once from
/// `location.pathname`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLocation {
    path_prefix: &'static str,
    current_page: String,
}

/// A navigation item resolved against the current page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: String,
    pub href: String,
    pub active: bool,
}

impl PageLocation {
    pub fn from_pathname(pathname: &str) -> Self {
        let path_prefix = if pathname.contains(POSTS_SEGMENT) {
            "../"
        } else {
            ""
        };

        let trimmed = pathname.strip_suffix('/').unwrap_or(pathname);
        let current_page = match trimmed.rsplit('/').next() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => INDEX_PAGE.to_string(),
        };

        Self {
            path_prefix,
            current_page,
        }
    }

    /// `"../"` on pages under `/posts/`, empty otherwise.
    pub fn path_prefix(&self) -> &str {
        self.path_prefix
    }

    pub fn current_page_id(&self) -> &str {
        &self.current_page
    }

    pub fn href_for(&self, target: &str) -> String {
        format!("{}{}", self.path_prefix, target)
    }

    /// Whether a navigation target points at the current page. The index page
    /// only ever matches `index.html`; other pages accept an exact match or a
    /// match with the `.html` suffix dropped on either side.
    pub fn is_current_page(&self, target: &str) -> bool {
        let current = self.current_page.as_str();

        // `from_pathname` already maps "" and "/" to the index page; the extra
        // checks keep parity with the older script.
        if current == INDEX_PAGE || current.is_empty() || current == "/" {
            return target == INDEX_PAGE;
        }

        if target == current {
            return true;
        }

        if current.strip_suffix(".html") == Some(target) {
            return true;
        }

        // Kept for parity with older markup; already covered by the exact match.
        target.ends_with(".html") && current == target
    }

    /// Resolves every item to an href and active flag, in input order.
    pub fn entries(&self, items: &[NavigationItem]) -> Vec<NavEntry> {
        items
            .iter()
            .map(|item| NavEntry {
                label: item.label.clone(),
                href: self.href_for(&item.target),
                active: self.is_current_page(&item.target),
            })
            .collect()
    }
}
