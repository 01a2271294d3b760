//! Console pages and the sidebar section each belongs to.

/// Paths listed under the "Home" section of the sidebar.
pub const HOME_PATHS: &[&str] = &["/", "/counter", "/testimonial", "/certificate", "/blog"];
/// Paths listed under the "About" section.
pub const ABOUT_PATHS: &[&str] = &["/about"];
/// Paths listed under the "Product" section.
pub const PRODUCT_PATHS: &[&str] = &[
    "/productAdminToggle",
    "/ProductData",
    "/extraSubProduct",
    "/extraSubHeading",
];

/// Which sidebar sections are expanded.
///
/// The three flags are computed independently; at most one is set only
/// because the path lists do not overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub home: bool,
    pub about: bool,
    pub product: bool,
}

impl NavigationState {
    pub fn from_path(path: &str) -> Self {
        let path = normalize(path);
        Self {
            home: HOME_PATHS.contains(&path),
            about: ABOUT_PATHS.contains(&path),
            product: PRODUCT_PATHS.contains(&path),
        }
    }
}

/// Drops a trailing slash, except on the root.
fn normalize(path: &str) -> &str {
    match path.strip_suffix('/') {
        Some("") | None => path,
        Some(trimmed) => trimmed,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Testimonials,
    Certificates,
    Blogs,
    About,
    Products,
    ProductData,
    ExtraSubProducts,
    Headings,
}

impl Page {
    /// Sidebar entries in display order.
    pub const ALL: [Page; 9] = [
        Page::Dashboard,
        Page::Testimonials,
        Page::Certificates,
        Page::Blogs,
        Page::About,
        Page::Products,
        Page::ProductData,
        Page::ExtraSubProducts,
        Page::Headings,
    ];

    pub fn from_path(path: &str) -> Option<Self> {
        match normalize(path) {
            "/" | "/counter" => Some(Page::Dashboard),
            "/testimonial" => Some(Page::Testimonials),
            "/certificate" => Some(Page::Certificates),
            "/blog" => Some(Page::Blogs),
            "/about" => Some(Page::About),
            "/productAdminToggle" => Some(Page::Products),
            "/ProductData" => Some(Page::ProductData),
            "/extraSubProduct" => Some(Page::ExtraSubProducts),
            "/extraSubHeading" => Some(Page::Headings),
            _ => None,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Page::Dashboard => "/counter",
            Page::Testimonials => "/testimonial",
            Page::Certificates => "/certificate",
            Page::Blogs => "/blog",
            Page::About => "/about",
            Page::Products => "/productAdminToggle",
            Page::ProductData => "/ProductData",
            Page::ExtraSubProducts => "/extraSubProduct",
            Page::Headings => "/extraSubHeading",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Testimonials => "Testimonials",
            Page::Certificates => "Certificates",
            Page::Blogs => "Blogs",
            Page::About => "About Us Images",
            Page::Products => "Products",
            Page::ProductData => "Product Data",
            Page::ExtraSubProducts => "Extra Sub Products",
            Page::Headings => "Sub Product Headings",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_paths_expand_only_the_product_section() {
        assert_eq!(
            NavigationState::from_path("/productAdminToggle"),
            NavigationState {
                home: false,
                about: false,
                product: true,
            }
        );
    }

    #[test]
    fn sections() {
        assert!(NavigationState::from_path("/").home);
        assert!(NavigationState::from_path("/blog/").home);
        assert!(NavigationState::from_path("/about").about);
        assert_eq!(NavigationState::from_path("/faq"), NavigationState::default());
        // Paths are case sensitive.
        assert_eq!(NavigationState::from_path("/productdata"), NavigationState::default());
    }

    #[test]
    fn path_sets_are_disjoint() {
        for path in HOME_PATHS.iter().chain(ABOUT_PATHS).chain(PRODUCT_PATHS) {
            let state = NavigationState::from_path(path);
            let set = [state.home, state.about, state.product]
                .into_iter()
                .filter(|flag| *flag)
                .count();
            assert_eq!(set, 1, "{path}");
        }
    }

    #[test]
    fn every_page_is_in_a_section_and_round_trips() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
            assert_ne!(NavigationState::from_path(page.path()), NavigationState::default());
        }
        assert_eq!(Page::from_path("/"), Some(Page::Dashboard));
        assert_eq!(Page::from_path("/nowhere"), None);
    }
}
