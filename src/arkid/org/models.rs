//! Request shapes for the organization service
//!
//! Organization and member payloads stay untyped (`serde_json::Value`); the
//! server owns their schema. Only the bodies and queries the client itself
//! builds are typed here.

use serde::Serialize;
use std::collections::BTreeMap;

/// Direction of a membership change
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MembershipSubject {
    Add,
    Delete,
}

/// Body of `PATCH /siteapi/v1/org/<oid>/user/`
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MembershipChange {
    pub subject: MembershipSubject,
    pub usernames: Vec<String>,
}

impl MembershipChange {
    /// Add the given users to an organization
    pub fn add<I, S>(usernames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            subject: MembershipSubject::Add,
            usernames: usernames.into_iter().map(Into::into).collect(),
        }
    }

    /// Remove the given users from an organization
    pub fn delete<I, S>(usernames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            subject: MembershipSubject::Delete,
            usernames: usernames.into_iter().map(Into::into).collect(),
        }
    }
}

/// Query for listing the caller's organizations
///
/// `extra` carries any other filter the server understands; its keys are
/// sent after the typed ones.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OrgListParams {
    /// Role of the caller inside the organization (e.g. `admin`)
    pub role: Option<String>,
    pub extra: BTreeMap<String, String>,
}

impl OrgListParams {
    pub fn with_role(role: impl Into<String>) -> Self {
        Self {
            role: Some(role.into()),
            ..Self::default()
        }
    }

    /// Add an arbitrary query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub(crate) fn to_query(&self) -> Vec<(&str, String)> {
        let mut query = Vec::new();
        if let Some(role) = &self.role {
            query.push(("role", role.clone()));
        }
        append_extra(&mut query, &self.extra);
        query
    }
}

/// Page selection for member listings
///
/// Unset fields are left to the server (page 1, 30 per page). `extra` is
/// forwarded untouched.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub extra: BTreeMap<String, String>,
}

impl PageParams {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
            ..Self::default()
        }
    }

    /// Add an arbitrary query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub(crate) fn to_query(&self) -> Vec<(&str, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(size) = self.page_size {
            query.push(("page_size", size.to_string()));
        }
        append_extra(&mut query, &self.extra);
        query
    }
}

// Typed keys win over an `extra` entry with the same name.
fn append_extra<'a>(query: &mut Vec<(&'a str, String)>, extra: &'a BTreeMap<String, String>) {
    for (key, value) in extra {
        if !query.iter().any(|(k, _)| *k == key.as_str()) {
            query.push((key.as_str(), value.clone()));
        }
    }
}
