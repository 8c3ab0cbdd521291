use std::fmt;

/// The five collections the backend serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Profile,
    Experience,
    Projects,
    Skills,
    Certifications,
}

impl Resource {
    pub const ALL: [Resource; 5] = [
        Resource::Profile,
        Resource::Experience,
        Resource::Projects,
        Resource::Skills,
        Resource::Certifications,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Resource::Profile => "profile",
            Resource::Experience => "experience",
            Resource::Projects => "projects",
            Resource::Skills => "skills",
            Resource::Certifications => "certifications",
        }
    }

    /// Path under the backend base address.
    pub fn path(self) -> &'static str {
        match self {
            Resource::Profile => "/api/v1/profile",
            Resource::Experience => "/api/v1/experience",
            Resource::Projects => "/api/v1/projects",
            Resource::Skills => "/api/v1/skills",
            Resource::Certifications => "/api/v1/certifications",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One entry in the session store. Featured projects get their own key so
/// that the filtered and unfiltered lists never answer for each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Profile,
    Experience,
    Projects,
    FeaturedProjects,
    Skills,
    Certifications,
}

impl CacheKey {
    pub const ALL: [CacheKey; 6] = [
        CacheKey::Profile,
        CacheKey::Experience,
        CacheKey::Projects,
        CacheKey::FeaturedProjects,
        CacheKey::Skills,
        CacheKey::Certifications,
    ];

    pub fn for_resource(resource: Resource) -> Self {
        match resource {
            Resource::Profile => CacheKey::Profile,
            Resource::Experience => CacheKey::Experience,
            Resource::Projects => CacheKey::Projects,
            Resource::Skills => CacheKey::Skills,
            Resource::Certifications => CacheKey::Certifications,
        }
    }

    pub fn for_projects(featured: bool) -> Self {
        if featured {
            CacheKey::FeaturedProjects
        } else {
            CacheKey::Projects
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CacheKey::Profile => "portfolio_profile",
            CacheKey::Experience => "portfolio_experience",
            CacheKey::Projects => "portfolio_projects",
            CacheKey::FeaturedProjects => "portfolio_projects_featured",
            CacheKey::Skills => "portfolio_skills",
            CacheKey::Certifications => "portfolio_certifications",
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
