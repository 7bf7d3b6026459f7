//! In-app link interception.
//!
//! # Responsibilities
//! - Decide whether an activated link stays inside the app
//! - Translate in-app links into `Router::navigate` calls
//!
//! # Design Decisions
//! - Links are resolved against the current page with `url`, like a browser would
//! - In-page anchors are left to the host; only `#/path` routes in hash mode
//! - Only the pathname is routed; query and fragment are dropped
//! - Anything ambiguous (new tab, download, external rel) is left to the host

use url::Url;

use crate::navigation::location::UrlMode;
use crate::routing::Router;

/// A link activation reported by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkClick {
    /// The raw `href` attribute.
    pub href: String,
    /// The `target` attribute, if any.
    pub target: Option<String>,
    /// The `rel` attribute, if any.
    pub rel: Option<String>,
    /// A modifier key (ctrl, meta, shift, alt) was held.
    pub modifier: bool,
    /// The link carries a `download` attribute.
    pub download: bool,
}

impl LinkClick {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            ..Self::default()
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = Some(rel.into());
        self
    }

    pub fn with_modifier(mut self) -> Self {
        self.modifier = true;
        self
    }

    pub fn with_download(mut self) -> Self {
        self.download = true;
        self
    }

    fn leaves_app(&self) -> bool {
        self.modifier
            || self.download
            || self.target.as_deref().is_some_and(|t| t != "_self")
            || self
                .rel
                .as_deref()
                .is_some_and(|rel| rel.split_whitespace().any(|r| r == "external"))
    }
}

/// Turns in-app link clicks into router navigations.
#[derive(Debug, Clone)]
pub struct LinkInterceptor {
    router: Router,
    origin: Url,
    mode: UrlMode,
}

impl LinkInterceptor {
    pub fn new(router: Router, origin: Url, mode: UrlMode) -> Self {
        Self {
            router,
            origin,
            mode,
        }
    }

    /// The route path `click` should navigate to, or `None` if the host
    /// should perform its default action.
    ///
    /// Relative hrefs resolve against the current page, as a browser does.
    pub fn in_app_path(&self, click: &LinkClick) -> Option<String> {
        if click.leaves_app() {
            return None;
        }

        if let Some(fragment) = click.href.strip_prefix('#') {
            // In-page anchors scroll; only `#/path` is a route in hash mode.
            return match self.mode {
                UrlMode::Hash if fragment.starts_with('/') => Some(fragment.to_string()),
                _ => None,
            };
        }

        let base = self.current_page()?;
        let target = base.join(&click.href).ok()?;
        if target.origin() != self.origin.origin() {
            return None;
        }

        match (self.mode, target.fragment()) {
            (UrlMode::Hash, Some(fragment)) if fragment.starts_with('/') => {
                Some(fragment.to_string())
            }
            (UrlMode::History, Some(_)) if same_document(&target, &base) => None,
            _ => Some(target.path().to_string()),
        }
    }

    /// The URL of the document currently shown.
    fn current_page(&self) -> Option<Url> {
        match self.mode {
            UrlMode::History => self.origin.join(&self.router.current_path()).ok(),
            // The document stays put in hash mode; only the fragment changes.
            UrlMode::Hash => Some(self.origin.clone()),
        }
    }

    /// Navigate if `click` is in-app. Returns true when the host must
    /// suppress its default page load.
    pub fn intercept(&self, click: &LinkClick) -> bool {
        match self.in_app_path(click) {
            Some(path) => {
                tracing::debug!(href = %click.href, path = %path, "Intercepted link");
                self.router.navigate(&path);
                true
            }
            None => {
                tracing::trace!(href = %click.href, "Link left to host");
                false
            }
        }
    }
}

/// True when `target` only differs from `page` by its fragment.
fn same_document(target: &Url, page: &Url) -> bool {
    let mut target = target.clone();
    let mut page = page.clone();
    target.set_fragment(None);
    page.set_fragment(None);
    target == page
}
