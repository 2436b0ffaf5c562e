use serde::{Deserialize, Serialize};

use crate::domain::resource::Resource;

/// Category name that stands for the sponsored tier as a whole
pub const SPONSORED_CATEGORY: &str = "Sponsored";

/// Caller entitlements supplied by the auth collaborator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessContext {
    pub is_authenticated: bool,
    pub is_premium_tier: bool,
}

impl AccessContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn member(is_premium_tier: bool) -> Self {
        Self {
            is_authenticated: true,
            is_premium_tier,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Visible,
    RequiresAuth,
    RequiresPremium,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnnotatedResource<'a> {
    pub resource: &'a Resource,
    pub visibility: Visibility,
}

impl<'a> AnnotatedResource<'a> {
    /// The external link, withheld while the resource is gated
    pub fn link_for_consumer(&self) -> Option<&'a str> {
        match self.visibility {
            Visibility::Visible => Some(self.resource.link.as_str()),
            Visibility::RequiresAuth | Visibility::RequiresPremium => None,
        }
    }
}

/// Missing context is treated as anonymous, so sponsored content never fails open
pub fn visibility_for(resource: &Resource, access: Option<&AccessContext>) -> Visibility {
    if !resource.is_sponsored_tier() {
        return Visibility::Visible;
    }

    match access {
        None => Visibility::RequiresAuth,
        Some(ctx) if !ctx.is_authenticated => Visibility::RequiresAuth,
        Some(ctx) if !ctx.is_premium_tier => Visibility::RequiresPremium,
        Some(_) => Visibility::Visible,
    }
}

pub fn annotate<'a>(resource: &'a Resource, access: Option<&AccessContext>) -> AnnotatedResource<'a> {
    AnnotatedResource {
        resource,
        visibility: visibility_for(resource, access),
    }
}

/// Annotates in place order; nothing is ever dropped
pub fn annotate_all<'a>(
    resources: &[&'a Resource],
    access: Option<&AccessContext>,
) -> Vec<AnnotatedResource<'a>> {
    resources.iter().map(|r| annotate(r, access)).collect()
}
