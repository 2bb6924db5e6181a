//! Profile generation.

use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use facilityhub_models::{AccountTier, Property, PropertyId, UserId, UserProfile};
use facilityhub_nav::{ADMIN_ROLE, PermissionTable};

use super::models::UsersPerProperty;

fn generate_user(
    tier: AccountTier,
    role: &str,
    property_id: Option<PropertyId>,
    scope: &str,
    index: usize,
) -> UserProfile {
    let first_name: String = FirstName().fake();
    let last_name: String = LastName().fake();
    let email = format!(
        "{}.{}.{}{}@facilityhub.test",
        first_name.to_lowercase(),
        last_name.to_lowercase(),
        scope,
        index
    )
    .replace(' ', "");

    UserProfile {
        id: UserId::new(),
        first_name,
        last_name,
        email,
        user_role: role.to_string(),
        user_type: tier,
        property_id,
    }
}

/// Roles property users rotate through: every role with a restricted set.
pub fn restricted_roles(table: &PermissionTable) -> Vec<&str> {
    table
        .iter()
        .filter(|(_, set)| !set.is_unrestricted())
        .map(|(role, _)| role)
        .collect()
}

/// The unrestricted role given to client admins.
fn client_admin_role(table: &PermissionTable) -> &str {
    table
        .iter()
        .find(|(role, set)| set.is_unrestricted() && *role != ADMIN_ROLE)
        .map(|(role, _)| role)
        .unwrap_or(ADMIN_ROLE)
}

pub fn generate_org_admins(count: usize) -> Vec<UserProfile> {
    (0..count)
        .map(|i| generate_user(AccountTier::Admin, ADMIN_ROLE, None, "org", i))
        .collect()
}

/// Client admins and property users for each property.
pub fn generate_property_users(
    properties: &[Property],
    users: &UsersPerProperty,
    table: &PermissionTable,
) -> Vec<UserProfile> {
    let roles = restricted_roles(table);
    let cadmin_role = client_admin_role(table);

    properties
        .iter()
        .enumerate()
        .flat_map(|(property_idx, property)| {
            let scope = format!("p{property_idx}-");
            let mut profiles = Vec::with_capacity(users.client_admins + users.property_users);

            for i in 0..users.client_admins {
                profiles.push(generate_user(
                    AccountTier::ClientAdmin,
                    cadmin_role,
                    Some(property.id),
                    &format!("{scope}cadmin"),
                    i,
                ));
            }

            if !roles.is_empty() {
                for i in 0..users.property_users {
                    profiles.push(generate_user(
                        AccountTier::PropertyUser,
                        roles[i % roles.len()],
                        Some(property.id),
                        &format!("{scope}user"),
                        i,
                    ));
                }
            }

            profiles
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeder::properties::generate_properties;
    use std::collections::HashSet;

    #[test]
    fn test_property_users_rotate_restricted_roles() {
        let table = PermissionTable::builtin();
        let properties = generate_properties(2, false);
        let users = UsersPerProperty {
            client_admins: 1,
            property_users: 3,
        };

        let profiles = generate_property_users(&properties, &users, &table);
        assert_eq!(profiles.len(), 8);

        let cadmins: Vec<_> = profiles
            .iter()
            .filter(|p| p.user_type == AccountTier::ClientAdmin)
            .collect();
        assert_eq!(cadmins.len(), 2);
        assert!(cadmins.iter().all(|p| table.permissions_for(&p.user_role).is_unrestricted()));

        assert!(
            profiles
                .iter()
                .filter(|p| p.user_type == AccountTier::PropertyUser)
                .all(|p| !table.permissions_for(&p.user_role).is_unrestricted())
        );
        assert!(profiles.iter().all(|p| p.property_id.is_some()));
    }

    #[test]
    fn test_emails_are_unique() {
        let table = PermissionTable::builtin();
        let properties = generate_properties(3, false);
        let mut profiles = generate_property_users(&properties, &UsersPerProperty::default(), &table);
        profiles.extend(generate_org_admins(2));

        let emails: HashSet<_> = profiles.iter().map(|p| p.email.as_str()).collect();
        assert_eq!(emails.len(), profiles.len());
    }

    #[test]
    fn test_org_admins_have_no_property() {
        let admins = generate_org_admins(2);
        assert!(admins.iter().all(|p| p.user_type == AccountTier::Admin));
        assert!(admins.iter().all(|p| p.property_id.is_none()));
    }
}
