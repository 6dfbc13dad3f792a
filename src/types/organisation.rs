use entity::organisation::Model as OrganisationModel;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrganisationRes {
    pub org_id: Uuid,
    pub name: String,
}

impl From<&OrganisationModel> for OrganisationRes {
    fn from(org: &OrganisationModel) -> Self {
        Self { org_id: org.id, name: org.name.clone() }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct OrganisationList {
    pub organisations: Vec<OrganisationRes>,
}

pub fn default_organisation_name(first_name: &str) -> String {
    format!("{first_name}'s Organisation")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_name_uses_first_name() {
        assert_eq!(default_organisation_name("John"), "John's Organisation");
    }
}
