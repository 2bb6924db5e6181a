//! Seeding configuration.

/// Users created for every seeded property.
#[derive(Clone, Debug)]
pub struct UsersPerProperty {
    /// Client admins (`cadmin`, unrestricted role).
    pub client_admins: usize,
    /// Property users, assigned restricted roles in rotation.
    pub property_users: usize,
}

impl Default for UsersPerProperty {
    fn default() -> Self {
        Self {
            client_admins: 1,
            property_users: 6,
        }
    }
}

/// Complete configuration for database seeding.
#[derive(Clone, Debug)]
pub struct SeedConfig {
    pub num_properties: usize,
    pub users_per_property: UsersPerProperty,
    /// Organization admins, not tied to a property.
    pub org_admins: usize,
    /// Give properties a placeholder logo.
    pub with_logos: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            num_properties: 3,
            users_per_property: UsersPerProperty::default(),
            org_admins: 1,
            with_logos: true,
        }
    }
}

impl SeedConfig {
    pub fn new(num_properties: usize) -> Self {
        Self {
            num_properties,
            ..Default::default()
        }
    }

    pub fn with_users(mut self, users: UsersPerProperty) -> Self {
        self.users_per_property = users;
        self
    }

    pub fn with_org_admins(mut self, count: usize) -> Self {
        self.org_admins = count;
        self
    }

    pub fn with_logos(mut self, with_logos: bool) -> Self {
        self.with_logos = with_logos;
        self
    }

    pub fn total_users(&self) -> usize {
        self.org_admins
            + self.num_properties
                * (self.users_per_property.client_admins + self.users_per_property.property_users)
    }
}
